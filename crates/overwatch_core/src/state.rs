use crate::view_model::{self, AppViewModel};
use crate::{AnalysisPayload, AnalysisResult, AnalysisStatus, ModelHint, RunId};

/// Progress shown immediately after submission, before the first poll
/// lands. A UI affordance, not a measured quantity.
pub(crate) const SUBMIT_PROGRESS: u8 = 5;

/// The whole application state as one snapshot. Mutated only through
/// [`crate::update`]; readers go through [`AppState::view`], so a render
/// can never observe a half-applied transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    video_url: String,
    output_dir: String,
    model_hint: ModelHint,
    status: AnalysisStatus,
    progress: u8,
    result: Option<AnalysisResult>,
    error: Option<String>,
    run: RunId,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            video_url: String::new(),
            output_dir: "./out".to_string(),
            model_hint: ModelHint::Default,
            status: AnalysisStatus::Idle,
            progress: 0,
            result: None,
            error: None,
            run: 0,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            status: self.status,
            status_line: view_model::status_line(self.status),
            progress: self.progress,
            error: self.error.clone(),
            result: self.result.clone(),
            video_url: self.video_url.clone(),
            output_dir: self.output_dir.clone(),
            model_hint: self.model_hint,
            can_submit: self.can_submit(),
            form_locked: self.is_running(),
            url_hint: view_model::url_hint(&self.video_url),
            checklist: view_model::checklist(self.progress),
            result_placeholder: view_model::result_placeholder(
                self.status,
                self.result.is_some(),
            ),
            dirty: self.dirty,
        }
    }

    /// Returns the dirty flag and clears it. The render loop calls this to
    /// decide whether a repaint is due.
    pub fn consume_dirty(&mut self) -> bool {
        let was_dirty = self.dirty;
        self.dirty = false;
        was_dirty
    }

    pub(crate) fn is_running(&self) -> bool {
        self.status == AnalysisStatus::Running
    }

    pub(crate) fn can_submit(&self) -> bool {
        !self.is_running() && !self.video_url.trim().is_empty()
    }

    pub(crate) fn set_video_url(&mut self, value: String) {
        if self.video_url != value {
            self.video_url = value;
            self.dirty = true;
        }
    }

    pub(crate) fn set_output_dir(&mut self, value: String) {
        if self.output_dir != value {
            self.output_dir = value;
            self.dirty = true;
        }
    }

    pub(crate) fn set_model_hint(&mut self, value: ModelHint) {
        if self.model_hint != value {
            self.model_hint = value;
            self.dirty = true;
        }
    }

    /// Builds the submission payload from the current form fields.
    pub(crate) fn payload(&self) -> AnalysisPayload {
        let output_dir = self.output_dir.trim();
        AnalysisPayload {
            video_url: self.video_url.trim().to_string(),
            output_dir: (!output_dir.is_empty()).then(|| output_dir.to_string()),
            model_hint: Some(self.model_hint),
        }
    }

    /// Starts a fresh run: clears the previous error and result, enters
    /// `Running`, and mints the run id that tags everything the new job
    /// client task sends back.
    pub(crate) fn begin_run(&mut self) -> RunId {
        self.run += 1;
        self.status = AnalysisStatus::Running;
        self.progress = SUBMIT_PROGRESS;
        self.result = None;
        self.error = None;
        self.dirty = true;
        self.run
    }

    /// Returns to the initial values. Bumping the run id here invalidates
    /// any in-flight poll response before it ever reaches `apply_*`.
    pub(crate) fn reset_run(&mut self) {
        self.run += 1;
        self.status = AnalysisStatus::Idle;
        self.progress = 0;
        self.result = None;
        self.error = None;
        self.dirty = true;
    }

    pub(crate) fn apply_progress(&mut self, run: RunId, progress: u8) {
        if run != self.run || !self.is_running() {
            return;
        }
        // Non-terminal poll: the remote may still say "queued"; locally the
        // job stays `Running` either way.
        self.status = AnalysisStatus::Running;
        self.progress = progress.min(100);
        self.dirty = true;
    }

    pub(crate) fn apply_completed(&mut self, run: RunId, result: Option<AnalysisResult>) {
        if run != self.run || !self.is_running() {
            return;
        }
        self.status = AnalysisStatus::Completed;
        // Terminal success always reads 100, whatever number the engine sent.
        self.progress = 100;
        self.result = result;
        self.dirty = true;
    }

    pub(crate) fn apply_failed(&mut self, run: RunId, progress: Option<u8>, message: String) {
        if run != self.run || !self.is_running() {
            return;
        }
        self.status = AnalysisStatus::Error;
        if let Some(progress) = progress {
            self.progress = progress.min(100);
        }
        self.error = Some(message);
        self.dirty = true;
    }
}

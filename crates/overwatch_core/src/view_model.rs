use crate::{AnalysisResult, AnalysisStatus, ModelHint};

/// Progress thresholds at which the pipeline checklist lights up. Display
/// sugar only: the engine reports a single number, not per-stage completion.
pub const CHECKLIST_STAGES: [(u8, &str); 5] = [
    (10, "Download + audio extraction"),
    (35, "Speech + diarization"),
    (60, "OpenFace behavior sweep"),
    (80, "Flag sensitive words + keyboard"),
    (100, "Compile transcript + insights"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistItemView {
    pub label: &'static str,
    pub done: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub status: AnalysisStatus,
    pub status_line: &'static str,
    pub progress: u8,
    pub error: Option<String>,
    pub result: Option<AnalysisResult>,
    pub video_url: String,
    pub output_dir: String,
    pub model_hint: ModelHint,
    pub can_submit: bool,
    pub form_locked: bool,
    pub url_hint: Option<&'static str>,
    pub checklist: Vec<ChecklistItemView>,
    pub result_placeholder: Option<&'static str>,
    pub dirty: bool,
}

pub(crate) fn status_line(status: AnalysisStatus) -> &'static str {
    match status {
        AnalysisStatus::Idle => "Waiting to start",
        AnalysisStatus::Running => "Processing...",
        AnalysisStatus::Completed => "Done",
        AnalysisStatus::Error => "Error",
    }
}

pub(crate) fn checklist(progress: u8) -> Vec<ChecklistItemView> {
    CHECKLIST_STAGES
        .iter()
        .map(|&(threshold, label)| ChecklistItemView {
            label,
            done: progress >= threshold,
        })
        .collect()
}

/// A display-only nudge when the URL field holds something that does not
/// parse. Never gates submission; the engine gets the string as typed.
pub(crate) fn url_hint(raw: &str) -> Option<&'static str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || url::Url::parse(trimmed).is_ok() {
        None
    } else {
        Some("does not look like a full URL")
    }
}

pub(crate) fn result_placeholder(
    status: AnalysisStatus,
    has_result: bool,
) -> Option<&'static str> {
    if has_result {
        None
    } else if status == AnalysisStatus::Running {
        Some("Crunching...")
    } else {
        Some("No run yet.")
    }
}

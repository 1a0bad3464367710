#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the video URL field.
    VideoUrlChanged(String),
    /// User edited the output directory field.
    OutputDirChanged(String),
    /// User picked a model preset.
    ModelHintChanged(crate::ModelHint),
    /// User submitted the form.
    SubmitClicked,
    /// User clicked Reset.
    ResetClicked,
    /// Job client: a non-terminal status poll landed.
    JobProgress { run: crate::RunId, progress: u8 },
    /// Job client: the remote run finished. A completed run may carry no
    /// result object; that is accepted, not an error.
    JobCompleted {
        run: crate::RunId,
        result: Option<crate::AnalysisResult>,
    },
    /// Job client: submission failed, a poll failed, or the remote run
    /// reported an error. `progress` is set only when the failing response
    /// carried one.
    JobFailed {
        run: crate::RunId,
        progress: Option<u8>,
        message: String,
    },
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}

use std::fmt;

/// Opaque token the engine assigns to one remote analysis run. The client
/// never interprets it; it only keys status polls.
pub type JobId = String;

/// Monotonic submission counter. Every submission (and every reset) mints a
/// new value, so job messages tagged with a superseded run are discarded.
pub type RunId = u64;

/// The client's current phase. Mapped from the remote status text
/// (`"completed"`/`"error"`/anything else), never the raw string itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnalysisStatus {
    #[default]
    Idle,
    Running,
    Completed,
    Error,
}

/// Model preset offered by the input form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelHint {
    #[default]
    Default,
    Fast,
    Accurate,
}

impl ModelHint {
    /// Every preset, in form display order.
    pub const ALL: [ModelHint; 3] = [ModelHint::Default, ModelHint::Fast, ModelHint::Accurate];

    /// Wire encoding sent to the analyze endpoint.
    pub fn as_str(self) -> &'static str {
        match self {
            ModelHint::Default => "default",
            ModelHint::Fast => "fast",
            ModelHint::Accurate => "accurate",
        }
    }

    /// Human label shown by the form.
    pub fn label(self) -> &'static str {
        match self {
            ModelHint::Default => "Balanced",
            ModelHint::Fast => "Fast",
            ModelHint::Accurate => "Accuracy-first",
        }
    }
}

impl fmt::Display for ModelHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One submission request. Built fresh per submission, immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisPayload {
    pub video_url: String,
    pub output_dir: Option<String>,
    pub model_hint: Option<ModelHint>,
}

/// A finished run's transcript and derived signals.
///
/// Fields the engine omitted are empty here; absence never leaks past the
/// job client.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnalysisResult {
    pub transcript: String,
    pub cheating_indicators: Vec<String>,
    pub keyboard_findings: Vec<String>,
    pub behavior_summary: Vec<String>,
    pub openface_insights: Vec<String>,
    pub log: Vec<String>,
}

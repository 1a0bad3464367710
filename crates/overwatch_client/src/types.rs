use std::time::Duration;

use overwatch_core::{AnalysisResult, JobId, RunId};

/// Connection settings for the analysis engine.
#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// Base URL of the engine, e.g. `http://127.0.0.1:8077`. A trailing
    /// slash is trimmed by the API layer.
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    /// Cadence of the status poll loop.
    pub poll_interval: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            poll_interval: Duration::from_millis(900),
        }
    }
}

impl ClientSettings {
    pub fn for_base(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

/// One status poll, already mapped out of the wire shape: progress clamped
/// to 0..=100 (0 when absent), result defaulted field by field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub progress: u8,
    /// Raw remote status text. Anything other than `"completed"` and
    /// `"error"` is non-terminal.
    pub status: String,
    pub error: Option<String>,
    pub result: Option<AnalysisResult>,
}

/// Errors from the engine API layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (connect, DNS, TLS, timeout).
    #[error("request failed: {0}")]
    Network(String),
    /// The engine answered with a non-2xx status code.
    #[error("unexpected status {0}")]
    HttpStatus(u16),
    /// The response body did not parse as the expected JSON shape.
    #[error("bad response body: {0}")]
    Decode(String),
    /// A 2xx submission response without a usable job id.
    #[error("Missing jobId from backend")]
    MissingJobId,
}

/// Events the job client emits toward the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientEvent {
    /// The engine accepted the submission and assigned a job id.
    Submitted { run: RunId, job_id: JobId },
    /// A non-terminal poll landed.
    Progress { run: RunId, progress: u8 },
    /// Terminal success. `result` is absent when the engine completed
    /// without a result object.
    Completed {
        run: RunId,
        result: Option<AnalysisResult>,
    },
    /// Terminal failure of any kind, carrying the message shown to the
    /// user. `progress` is set only when the failing poll reported one.
    Failed {
        run: RunId,
        progress: Option<u8>,
        message: String,
    },
}

/// Sink for client events; tests capture emissions without a channel.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: ClientEvent);
}

/// Forwards events into an mpsc channel.
pub struct ChannelEventSink {
    tx: std::sync::mpsc::Sender<ClientEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: std::sync::mpsc::Sender<ClientEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: ClientEvent) {
        let _ = self.tx.send(event);
    }
}

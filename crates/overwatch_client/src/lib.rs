//! Overwatch client: job submission, status polling, and cancellation.
mod api;
mod client;
mod poll;
mod types;

pub use api::{AnalysisApi, ReqwestApi};
pub use client::ClientHandle;
pub use poll::run_job;
pub use types::{
    ApiError, ChannelEventSink, ClientEvent, ClientSettings, EventSink, StatusReport,
};

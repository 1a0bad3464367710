use std::time::Duration;

use anyhow::{Context, Result};
use app_logging::{app_info, app_warn};

use overwatch_client::{ClientEvent, ClientHandle, ClientSettings};
use overwatch_core::{Effect, Msg};

/// Executes core effects against the job client and translates client
/// events back into core messages. The run loop pumps both directions;
/// nothing else touches the client.
pub struct EffectRunner {
    client: ClientHandle,
}

impl EffectRunner {
    pub fn new(settings: ClientSettings) -> Result<Self> {
        let client = ClientHandle::new(settings).context("starting the job client")?;
        Ok(Self { client })
    }

    pub fn dispatch(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::StartAnalysis { run, payload } => {
                    app_info!("run {run}: submitting {}", payload.video_url);
                    self.client.start_analysis(run, payload);
                }
                Effect::CancelAnalysis => {
                    app_info!("cancelling the active run");
                    self.client.cancel();
                }
            }
        }
    }

    /// Waits up to `timeout` for the next client event, mapped to a core
    /// message.
    pub fn next_msg(&self, timeout: Duration) -> Option<Msg> {
        self.client.recv_timeout(timeout).map(map_event)
    }
}

fn map_event(event: ClientEvent) -> Msg {
    match event {
        ClientEvent::Submitted { run, job_id } => {
            app_info!("run {run}: engine accepted job {job_id}");
            Msg::NoOp
        }
        ClientEvent::Progress { run, progress } => Msg::JobProgress { run, progress },
        ClientEvent::Completed { run, result } => Msg::JobCompleted { run, result },
        ClientEvent::Failed {
            run,
            progress,
            message,
        } => {
            app_warn!("run {run}: {message}");
            Msg::JobFailed {
                run,
                progress,
                message,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_events_map_onto_job_messages() {
        assert_eq!(
            map_event(ClientEvent::Progress {
                run: 3,
                progress: 42,
            }),
            Msg::JobProgress {
                run: 3,
                progress: 42,
            }
        );
        assert_eq!(
            map_event(ClientEvent::Completed {
                run: 3,
                result: None,
            }),
            Msg::JobCompleted {
                run: 3,
                result: None,
            }
        );
        assert_eq!(
            map_event(ClientEvent::Failed {
                run: 3,
                progress: Some(10),
                message: "bad video".to_string(),
            }),
            Msg::JobFailed {
                run: 3,
                progress: Some(10),
                message: "bad video".to_string(),
            }
        );
    }

    #[test]
    fn the_submission_ack_carries_no_state_change() {
        assert_eq!(
            map_event(ClientEvent::Submitted {
                run: 3,
                job_id: "job-1".to_string(),
            }),
            Msg::NoOp
        );
    }
}

use std::time::Duration;

use app_logging::{app_debug, app_info, app_warn};
use tokio_util::sync::CancellationToken;

use overwatch_core::{AnalysisPayload, RunId};

use crate::{AnalysisApi, ApiError, ClientEvent, EventSink};

/// Remote status text marking terminal failure.
const REMOTE_ERROR: &str = "error";
/// Remote status text marking terminal success.
const REMOTE_COMPLETED: &str = "completed";

/// Drives one analysis job to its terminal state: submit, then poll on a
/// fixed cadence until the remote reports completion or failure.
///
/// Every outcome, failures included, is delivered through the sink; the
/// future itself never fails, so a caller cannot drop an error on the
/// floor. Polls are strictly serialized: a response is awaited and
/// applied before the next tick is honoured. The cancellation token is
/// observed while waiting for a tick and re-checked once a response lands,
/// so a run cancelled mid-request emits nothing further.
pub async fn run_job(
    api: &dyn AnalysisApi,
    payload: AnalysisPayload,
    run: RunId,
    cancel: CancellationToken,
    sink: &dyn EventSink,
    poll_interval: Duration,
) {
    let job_id = match api.submit(&payload).await {
        Ok(job_id) => job_id,
        Err(err) => {
            if cancel.is_cancelled() {
                return;
            }
            app_warn!("run {run}: submission failed: {err}");
            sink.emit(ClientEvent::Failed {
                run,
                progress: None,
                message: submit_failure_message(&err),
            });
            return;
        }
    };

    if cancel.is_cancelled() {
        app_debug!("run {run}: cancelled before polling started");
        return;
    }

    app_info!("run {run}: job {job_id} accepted, polling every {poll_interval:?}");
    sink.emit(ClientEvent::Submitted {
        run,
        job_id: job_id.clone(),
    });

    let mut ticker = tokio::time::interval(poll_interval);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
    // `interval` fires its first tick immediately; consume it so the first
    // poll lands one full interval after submission.
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                app_debug!("run {run}: cancelled while waiting for the next poll");
                return;
            }
            _ = ticker.tick() => {}
        }

        let outcome = api.status(&job_id).await;

        // Re-check at response time: a reset racing an in-flight poll
        // silences the stale response.
        if cancel.is_cancelled() {
            app_debug!("run {run}: discarding poll response after cancel");
            return;
        }

        let report = match outcome {
            Ok(report) => report,
            Err(err) => {
                // A single poll failure ends the run; there is no retry.
                app_warn!("run {run}: poll failed: {err}");
                sink.emit(ClientEvent::Failed {
                    run,
                    progress: None,
                    message: poll_failure_message(&err),
                });
                return;
            }
        };

        match report.status.as_str() {
            REMOTE_ERROR => {
                let message = report.error.unwrap_or_else(|| "Job failed".to_string());
                app_warn!("run {run}: job {job_id} reported failure: {message}");
                sink.emit(ClientEvent::Failed {
                    run,
                    progress: Some(report.progress),
                    message,
                });
                return;
            }
            REMOTE_COMPLETED => {
                app_info!("run {run}: job {job_id} completed");
                sink.emit(ClientEvent::Completed {
                    run,
                    result: report.result,
                });
                return;
            }
            _ => {
                sink.emit(ClientEvent::Progress {
                    run,
                    progress: report.progress,
                });
            }
        }
    }
}

fn submit_failure_message(err: &ApiError) -> String {
    match err {
        ApiError::HttpStatus(code) => format!("Failed to start analysis: {code}"),
        other => other.to_string(),
    }
}

fn poll_failure_message(err: &ApiError) -> String {
    match err {
        ApiError::HttpStatus(code) => format!("Status check failed: {code}"),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_messages_name_the_phase() {
        assert_eq!(
            submit_failure_message(&ApiError::HttpStatus(502)),
            "Failed to start analysis: 502"
        );
        assert_eq!(
            submit_failure_message(&ApiError::MissingJobId),
            "Missing jobId from backend"
        );
        assert_eq!(
            poll_failure_message(&ApiError::HttpStatus(404)),
            "Status check failed: 404"
        );
    }
}

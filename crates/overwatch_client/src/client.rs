use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use overwatch_core::{AnalysisPayload, RunId};

use crate::api::{AnalysisApi, ReqwestApi};
use crate::poll::run_job;
use crate::types::{ChannelEventSink, ClientEvent, ClientSettings};
use crate::ApiError;

enum ClientCommand {
    StartAnalysis { run: RunId, payload: AnalysisPayload },
    Cancel,
}

/// Owns the background runtime that talks to the analysis engine.
///
/// The application sends commands and drains events; the timer and the
/// cancellation token never cross this boundary.
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
    event_rx: mpsc::Receiver<ClientEvent>,
}

impl ClientHandle {
    /// Spawns the client over the production HTTP API.
    pub fn new(settings: ClientSettings) -> Result<Self, ApiError> {
        let api = Arc::new(ReqwestApi::new(&settings)?);
        Ok(Self::with_api(api, settings))
    }

    /// Spawns the client over any API implementation; tests inject fakes.
    pub fn with_api(api: Arc<dyn AnalysisApi>, settings: ClientSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel::<ClientEvent>();
        let poll_interval = settings.poll_interval;

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            let mut active: Option<CancellationToken> = None;

            while let Ok(command) = cmd_rx.recv() {
                match command {
                    ClientCommand::StartAnalysis { run, payload } => {
                        // A fresh submission supersedes whatever was running.
                        if let Some(previous) = active.take() {
                            previous.cancel();
                        }
                        let token = CancellationToken::new();
                        active = Some(token.clone());

                        let api = api.clone();
                        let event_tx = event_tx.clone();
                        runtime.spawn(async move {
                            let sink = ChannelEventSink::new(event_tx);
                            run_job(api.as_ref(), payload, run, token, &sink, poll_interval).await;
                        });
                    }
                    ClientCommand::Cancel => {
                        if let Some(token) = active.take() {
                            token.cancel();
                        }
                    }
                }
            }
        });

        Self { cmd_tx, event_rx }
    }

    /// Submits a payload. The outcome arrives as events; a terminal event
    /// is guaranteed for every run that is not cancelled.
    pub fn start_analysis(&self, run: RunId, payload: AnalysisPayload) {
        let _ = self.cmd_tx.send(ClientCommand::StartAnalysis { run, payload });
    }

    /// Cancels the active run, if any. No new poll fires afterwards; a
    /// response already in flight is discarded when it lands.
    pub fn cancel(&self) {
        let _ = self.cmd_tx.send(ClientCommand::Cancel);
    }

    pub fn try_recv(&self) -> Option<ClientEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Blocks up to `timeout` for the next event.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<ClientEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

// The status view: one fetch per mount, folded into a ViewState.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::model::{StatusPayload, ViewState};
use super::status::{FetchError, StatusSource};

#[derive(Debug)]
struct FetchOutcome {
    mount_id: u64,
    result: Result<StatusPayload, FetchError>,
}

pub struct StatusView {
    source: Arc<dyn StatusSource>,
    state: ViewState,
    mount_id: u64,
    cancel: Option<CancellationToken>,
    outcome_tx: mpsc::UnboundedSender<FetchOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<FetchOutcome>,
}

impl StatusView {
    pub fn new(source: Arc<dyn StatusSource>) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            source,
            state: ViewState::Loading,
            mount_id: 0,
            cancel: None,
            outcome_tx,
            outcome_rx,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Resets to `Loading` and issues a single fetch. Must be called from
    /// within a tokio runtime.
    pub fn mount(&mut self) {
        self.unmount();

        self.mount_id += 1;
        self.state = ViewState::Loading;

        let token = CancellationToken::new();
        self.cancel = Some(token.clone());

        let mount_id = self.mount_id;
        let source = self.source.clone();
        let tx = self.outcome_tx.clone();

        debug!(mount_id, "mounting status view");
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    debug!(mount_id, "status fetch cancelled");
                }
                result = source.fetch() => {
                    if !token.is_cancelled() {
                        let _ = tx.send(FetchOutcome { mount_id, result });
                    }
                }
            }
        });
    }

    /// Cancels the outstanding fetch, if any. Its completion is never applied.
    pub fn unmount(&mut self) {
        if let Some(token) = self.cancel.take() {
            token.cancel();
        }
    }

    /// Applies completions that have already arrived. Returns true if the
    /// state changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            changed |= self.apply(outcome);
        }
        changed
    }

    /// Waits until the current mount's fetch has been applied. Returns
    /// immediately when nothing is mounted or the mount was cancelled.
    pub async fn settle(&mut self) -> &ViewState {
        while self.state.is_loading() {
            let Some(token) = self.cancel.clone().filter(|t| !t.is_cancelled()) else {
                break;
            };

            let outcome = tokio::select! {
                _ = token.cancelled() => None,
                outcome = self.outcome_rx.recv() => outcome,
            };
            match outcome {
                Some(outcome) => {
                    self.apply(outcome);
                }
                None => break,
            }
        }
        &self.state
    }

    fn apply(&mut self, outcome: FetchOutcome) -> bool {
        let live = self.cancel.as_ref().is_some_and(|t| !t.is_cancelled());
        if outcome.mount_id != self.mount_id || !live || !self.state.is_loading() {
            debug!(
                mount_id = outcome.mount_id,
                current = self.mount_id,
                "dropping stale status outcome"
            );
            return false;
        }

        self.state = match outcome.result {
            Ok(payload) => {
                info!(
                    status = payload.status.as_deref().unwrap_or("-"),
                    message = payload.message.as_deref().unwrap_or("-"),
                    services = payload.data.is_some(),
                    "status loaded"
                );
                ViewState::Ready(payload)
            }
            Err(err) => {
                warn!(kind = ?err.kind(), error = %err, "status could not be loaded");
                ViewState::Failed(err)
            }
        };
        true
    }
}

impl Drop for StatusView {
    fn drop(&mut self) {
        self.unmount();
    }
}

//! Loader - the single fetch a panel mount issues
//!
//! Each mount spawns one task guarded by a cancellation token. Tearing the
//! mount down cancels the token, and a response that arrives afterwards is
//! dropped instead of being applied to a panel that is gone.

use crate::panel::PanelState;
use errboard_common::{ErrorGroup, ErrorGroupSource, FetchError};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Messages delivered to the UI loop
#[derive(Debug)]
pub enum PanelMessage {
    Fetched {
        generation: u64,
        result: Result<Vec<ErrorGroup>, FetchError>,
    },
}

/// Fetch once, or give up with `FetchError::Cancelled` when `token` fires first
pub async fn fetch_cancellable(
    source: &dyn ErrorGroupSource,
    token: &CancellationToken,
) -> Result<Vec<ErrorGroup>, FetchError> {
    tokio::select! {
        biased;
        _ = token.cancelled() => Err(FetchError::Cancelled),
        result = source.fetch_groups() => result,
    }
}

/// A live mount of the panel and its in-flight fetch
pub struct PanelMount {
    generation: u64,
    token: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl PanelMount {
    /// Mount the panel: reset `state` to loading and issue exactly one fetch
    pub fn start(
        state: &mut PanelState,
        source: Arc<dyn ErrorGroupSource>,
        tx: mpsc::Sender<PanelMessage>,
    ) -> Self {
        let generation = state.begin_mount();
        let token = CancellationToken::new();
        let task_token = token.clone();

        let handle = tokio::spawn(async move {
            let result = fetch_cancellable(source.as_ref(), &task_token).await;
            if task_token.is_cancelled() || matches!(result, Err(FetchError::Cancelled)) {
                debug!("Fetch for generation {} abandoned after teardown", generation);
                return;
            }
            if tx.send(PanelMessage::Fetched { generation, result }).await.is_err() {
                debug!("Panel receiver closed before fetch {} completed", generation);
            }
        });

        Self {
            generation,
            token,
            handle: Some(handle),
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_torn_down(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Cancel the fetch and mark the panel unmounted
    pub fn teardown(&mut self, state: &mut PanelState) {
        self.token.cancel();
        state.unmount();
    }

    /// Wait for the fetch task to finish (sent, dropped, or cancelled)
    pub async fn join(mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for PanelMount {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

/// Apply one loop message to the panel
pub fn apply_message(state: &mut PanelState, msg: PanelMessage) -> bool {
    match msg {
        PanelMessage::Fetched { generation, result } => state.apply_fetch(generation, result),
    }
}

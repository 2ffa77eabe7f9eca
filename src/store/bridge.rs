//! Async bridge from service completions to the store.
//!
//! Service calls finish on the tokio runtime; they hand their result actions
//! to an [`ActionSender`]. A single [`ActionPump`] task applies them to the
//! store one at a time, in arrival order.

use thiserror::Error;
use tokio::sync::mpsc;

use super::Store;
use crate::mvi::{Action, Reducer};

/// The pump task has stopped and no longer accepts actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("action pump has shut down")]
pub struct PumpClosed;

/// Cloneable sending half handed to service code.
pub struct ActionSender<A> {
    tx: mpsc::Sender<A>,
}

impl<A> Clone for ActionSender<A> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<A: Action> ActionSender<A> {
    /// Queue an action for the pump, waiting while the channel is full.
    pub async fn send(&self, action: A) -> Result<(), PumpClosed> {
        self.tx.send(action).await.map_err(|_| PumpClosed)
    }

    /// Queue an action without waiting. Fails if the pump is gone; a full
    /// channel is logged and also reported as closed.
    pub fn try_send(&self, action: A) -> Result<(), PumpClosed> {
        self.tx.try_send(action).map_err(|err| {
            if let mpsc::error::TrySendError::Full(action) = &err {
                tracing::warn!(action = action.name(), "action channel full");
            }
            PumpClosed
        })
    }
}

/// Outcome of a pump run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PumpReport {
    pub applied: u64,
    pub failed: u64,
}

/// Receiving half: drains the channel into a store.
pub struct ActionPump<R: Reducer> {
    rx: mpsc::Receiver<R::Action>,
    store: Store<R>,
}

/// Create a bounded channel feeding `store`.
pub fn action_channel<R: Reducer>(
    store: Store<R>,
    capacity: usize,
) -> (ActionSender<R::Action>, ActionPump<R>) {
    let (tx, rx) = mpsc::channel(capacity.max(1));
    (ActionSender { tx }, ActionPump { rx, store })
}

impl<R: Reducer> ActionPump<R> {
    /// Apply actions until every sender has been dropped.
    ///
    /// A rejected action is logged and counted; the pump keeps running.
    /// Each action is applied before the next is received, so the counts
    /// reflect what the store actually committed. A pass running on
    /// another thread holds the pump until it ends.
    pub async fn run(mut self) -> PumpReport {
        let mut report = PumpReport::default();
        while let Some(action) = self.rx.recv().await {
            let name = action.name();
            match self.store.dispatch(action) {
                Ok(()) => report.applied += 1,
                Err(err) => {
                    report.failed += 1;
                    tracing::warn!(action = name, error = %err, "pumped action failed");
                }
            }
        }
        tracing::debug!(
            applied = report.applied,
            failed = report.failed,
            "action pump stopped"
        );
        report
    }
}

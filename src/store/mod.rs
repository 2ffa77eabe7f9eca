//! The store: single owner of the state tree and sole dispatch entry point.
//!
//! Dispatch is serialized. One thread at a time runs a reduce-and-notify
//! pass. A dispatch issued from inside that pass (by a subscriber callback on
//! the same thread) is queued and applied in FIFO order once the pass
//! completes, so each subscriber sees every committed state exactly once and
//! never a half-applied one. A dispatch from any other thread waits for the
//! running pass to end and then runs its own, so every caller gets the
//! result of its own action.

mod bridge;
mod subscription;

pub use bridge::{action_channel, ActionPump, ActionSender, PumpClosed, PumpReport};
pub use subscription::Subscription;

use std::collections::VecDeque;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread::{self, ThreadId};

use parking_lot::{Condvar, Mutex, MutexGuard, RwLock};
use scopeguard::ScopeGuard;
use serde::Serialize;

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::mvi::{Action, ParseAction, Reducer};
use subscription::Registry;

/// Counters for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StoreStats {
    /// Actions the reducer accepted and committed.
    pub committed: u64,
    /// Actions rejected by the reducer or by the queue bound.
    pub rejected: u64,
}

struct DispatchQueue<A> {
    /// Thread running the current reduce-and-notify pass.
    owner: Option<ThreadId>,
    /// Re-entrant dispatches issued by the owner during its pass.
    pending: VecDeque<A>,
}

struct StoreInner<R: Reducer> {
    state: RwLock<Arc<R::State>>,
    subscribers: Arc<Registry<R::State>>,
    queue: Mutex<DispatchQueue<R::Action>>,
    /// Signalled whenever a pass ends.
    pass_ended: Condvar,
    max_queued: usize,
    committed: AtomicU64,
    rejected: AtomicU64,
    _reducer: PhantomData<fn() -> R>,
}

/// Outcome of trying to start a pass.
enum Claim<'a, A> {
    /// This thread is already inside a pass; the queue stays locked.
    Nested(MutexGuard<'a, DispatchQueue<A>>),
    /// This thread now owns the pass.
    Owner,
}

/// Handle to a state container driven by reducer `R`.
///
/// Cloning the handle shares the same container.
pub struct Store<R: Reducer> {
    inner: Arc<StoreInner<R>>,
}

impl<R: Reducer> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: Reducer> Store<R> {
    /// Create a store holding `initial`.
    pub fn new(initial: R::State, config: &StoreConfig) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                state: RwLock::new(Arc::new(initial)),
                subscribers: Arc::new(Registry::new()),
                queue: Mutex::new(DispatchQueue {
                    owner: None,
                    pending: VecDeque::new(),
                }),
                pass_ended: Condvar::new(),
                max_queued: config.max_queued_actions,
                committed: AtomicU64::new(0),
                rejected: AtomicU64::new(0),
                _reducer: PhantomData,
            }),
        }
    }

    /// Current state snapshot.
    pub fn get_state(&self) -> Arc<R::State> {
        Arc::clone(&self.inner.state.read())
    }

    /// Register `callback` to run after every committed transition.
    ///
    /// A callback registered while a notification pass is running is first
    /// invoked for the next transition.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&Arc<R::State>) + Send + Sync + 'static,
    {
        self.inner.subscribers.insert(Box::new(callback))
    }

    /// Number of registered subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.len()
    }

    /// Committed and rejected action counts since the store was created.
    ///
    /// Raw actions that fail validation count as rejected.
    pub fn stats(&self) -> StoreStats {
        StoreStats {
            committed: self.inner.committed.load(Ordering::Relaxed),
            rejected: self.inner.rejected.load(Ordering::Relaxed),
        }
    }

    /// Reduce `action` into a new state and notify subscribers.
    ///
    /// Called from a subscriber callback while this thread is running a
    /// pass, the action is queued and `Ok(())` is returned immediately; it
    /// is applied after the current notification pass. Called from another
    /// thread while a pass is running, this blocks until that pass ends.
    ///
    /// # Errors
    /// - [`StoreError::Reducer`] if the reducer rejects this action or an
    ///   action a subscriber queued behind it. State stays at its last
    ///   committed value and any remaining queued actions are discarded.
    /// - [`StoreError::QueueOverflow`] if the action had to be queued and
    ///   the queue is full.
    pub fn dispatch(&self, action: R::Action) -> Result<(), StoreError> {
        if let Claim::Nested(mut queue) = self.claim() {
            return self.enqueue(&mut queue, action);
        }

        let pass = scopeguard::guard(&*self.inner, abort_pass::<R>);
        self.apply(action)?;
        self.drain(pass)
    }

    /// Run `deliver` with the current state, serialized with dispatch.
    ///
    /// Dispatches issued by `deliver` are queued and applied after it
    /// returns, exactly as if it were a subscriber callback.
    pub(crate) fn deliver_current<F>(&self, deliver: F) -> Result<(), StoreError>
    where
        F: FnOnce(&Arc<R::State>),
    {
        if let Claim::Nested(queue) = self.claim() {
            drop(queue);
            deliver(&self.get_state());
            return Ok(());
        }

        let pass = scopeguard::guard(&*self.inner, abort_pass::<R>);
        deliver(&self.get_state());
        self.drain(pass)
    }

    /// Take ownership of the pass, waiting while another thread holds it.
    fn claim(&self) -> Claim<'_, R::Action> {
        let me = thread::current().id();
        let mut queue = self.inner.queue.lock();
        if queue.owner == Some(me) {
            return Claim::Nested(queue);
        }
        while queue.owner.is_some() {
            tracing::trace!("waiting for in-flight dispatch on another thread");
            self.inner.pass_ended.wait(&mut queue);
        }
        queue.owner = Some(me);
        Claim::Owner
    }

    fn enqueue(
        &self,
        queue: &mut DispatchQueue<R::Action>,
        action: R::Action,
    ) -> Result<(), StoreError> {
        if queue.pending.len() >= self.inner.max_queued {
            self.inner.rejected.fetch_add(1, Ordering::Relaxed);
            tracing::warn!(
                action = action.name(),
                limit = self.inner.max_queued,
                "dispatch queue full, dropping action"
            );
            return Err(StoreError::QueueOverflow {
                limit: self.inner.max_queued,
            });
        }
        tracing::trace!(action = action.name(), "queued behind in-flight dispatch");
        queue.pending.push_back(action);
        Ok(())
    }

    /// Apply queued actions until the queue is empty, then release the pass.
    fn drain<F>(&self, pass: ScopeGuard<&StoreInner<R>, F>) -> Result<(), StoreError>
    where
        F: FnOnce(&StoreInner<R>),
    {
        loop {
            let next = {
                let mut queue = pass.queue.lock();
                let next = queue.pending.pop_front();
                if next.is_none() {
                    queue.owner = None;
                }
                next
            };
            match next {
                Some(action) => self.apply(action)?,
                None => break,
            }
        }
        let inner = ScopeGuard::into_inner(pass);
        inner.pass_ended.notify_all();
        Ok(())
    }

    fn apply(&self, action: R::Action) -> Result<(), StoreError> {
        let name = action.name();
        let current = self.get_state();

        let next = match R::reduce(&current, &action) {
            Ok(next) => next,
            Err(source) => {
                self.inner.rejected.fetch_add(1, Ordering::Relaxed);
                tracing::warn!(action = name, error = %source, "reducer rejected action");
                return Err(StoreError::Reducer {
                    action: name,
                    source,
                });
            }
        };
        drop(action);

        *self.inner.state.write() = Arc::clone(&next);
        self.inner.committed.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(
            action = name,
            changed = !Arc::ptr_eq(&current, &next),
            "state committed"
        );

        self.inner.subscribers.notify(&next);
        Ok(())
    }
}

impl<R: Reducer> Store<R>
where
    R::Action: ParseAction,
{
    /// Validate an untyped `{type, payload}` value and dispatch it.
    ///
    /// # Errors
    /// Shape errors are reported before anything is dispatched; see
    /// [`ParseAction::parse`]. Otherwise as [`Store::dispatch`].
    pub fn dispatch_raw(&self, value: serde_json::Value) -> Result<(), StoreError> {
        let action = R::Action::parse(value).inspect_err(|err| {
            self.inner.rejected.fetch_add(1, Ordering::Relaxed);
            tracing::warn!(error = %err, "rejected raw action");
        })?;
        self.dispatch(action)
    }
}

/// Releases the pass after an error or a panic inside a reducer or callback.
fn abort_pass<R: Reducer>(inner: &StoreInner<R>) {
    {
        let mut queue = inner.queue.lock();
        queue.owner = None;
        if !queue.pending.is_empty() {
            tracing::warn!(
                dropped = queue.pending.len(),
                "discarding queued actions after failed dispatch"
            );
            queue.pending.clear();
        }
    }
    inner.pass_ended.notify_all();
}

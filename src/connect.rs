//! Connect binding between UI components and the store.
//!
//! A component declares that it accepts state updates by implementing
//! [`Component`]. A [`Binding`] wraps the component's activate/deactivate
//! lifecycle with store subscription: on activation the component is
//! subscribed and handed the current state once, on deactivation it is
//! unsubscribed. The component's own lifecycle hooks still run. Event
//! handlers run through [`Binding::with_component`] and raise actions via an
//! [`Outbox`].

use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::StoreError;
use crate::mvi::Reducer;
use crate::store::{Store, Subscription};

/// A UI element that reacts to state transitions.
///
/// Implementors diff the incoming state against what they last rendered;
/// the binding calls [`Component::state_changed`] for every committed
/// transition.
pub trait Component<S>: Send + 'static {
    /// Runs when the component becomes active, before it is subscribed.
    fn activated(&mut self) {}

    /// Runs with the current state on activation and after each transition.
    fn state_changed(&mut self, state: &S);

    /// Runs after the component has been unsubscribed.
    fn deactivated(&mut self) {}
}

/// Actions a component raises from an event handler.
///
/// Collected while the component is locked and dispatched once the lock is
/// released, so the resulting notification can reach the same component.
pub struct Outbox<A> {
    actions: Vec<A>,
}

impl<A> Outbox<A> {
    pub fn dispatch(&mut self, action: A) {
        self.actions.push(action);
    }
}

/// Subscription lifecycle for one component.
///
/// Dropping an active binding deactivates it.
pub struct Binding<R: Reducer, C: Component<R::State>> {
    store: Store<R>,
    component: Arc<Mutex<C>>,
    subscription: Option<Subscription>,
}

impl<R, C> Binding<R, C>
where
    R: Reducer,
    C: Component<R::State>,
{
    pub fn new(store: Store<R>, component: C) -> Self {
        Self {
            store,
            component: Arc::new(Mutex::new(component)),
            subscription: None,
        }
    }

    /// Subscribe the component and deliver the current state to it.
    ///
    /// Activating an already active binding does nothing. Dispatches made
    /// from the first `state_changed` call are applied after it returns.
    ///
    /// # Errors
    /// Returns an error if a dispatch queued by the first delivery fails.
    /// The component stays subscribed in that case.
    pub fn activate(&mut self) -> Result<(), StoreError> {
        if self.subscription.is_some() {
            return Ok(());
        }
        self.component.lock().activated();

        let store = self.store.clone();
        let component = Arc::clone(&self.component);
        let mut subscription = None;
        let delivered = store.deliver_current(|state| {
            let target = Arc::clone(&component);
            subscription = Some(store.subscribe(move |state| {
                target.lock().state_changed(state);
            }));
            component.lock().state_changed(state);
        });
        self.subscription = subscription;
        delivered
    }

    /// Unsubscribe the component. No `state_changed` call starts after this
    /// returns, even for transitions already queued.
    pub fn deactivate(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
            self.component.lock().deactivated();
        }
    }

    pub fn is_active(&self) -> bool {
        self.subscription.is_some()
    }

    /// Run an event handler against the component.
    ///
    /// Actions the handler puts in the [`Outbox`] are dispatched in order
    /// after the component is unlocked. The handler must not dispatch to
    /// the store directly: the notification would wait on the lock it
    /// holds.
    ///
    /// # Errors
    /// Returns the first failed dispatch; later outbox actions are dropped.
    pub fn with_component<T, F>(&self, handler: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut C, &mut Outbox<R::Action>) -> T,
    {
        let mut outbox = Outbox {
            actions: Vec::new(),
        };
        let output = {
            let mut component = self.component.lock();
            handler(&mut *component, &mut outbox)
        };
        let mut actions = outbox.actions.into_iter();
        while let Some(action) = actions.next() {
            if let Err(err) = self.store.dispatch(action) {
                let dropped = actions.len();
                if dropped > 0 {
                    tracing::warn!(dropped, "discarding outbox actions after failed dispatch");
                }
                return Err(err);
            }
        }
        Ok(output)
    }

    /// Read the component without raising actions.
    pub fn inspect<T>(&self, read: impl FnOnce(&C) -> T) -> T {
        read(&*self.component.lock())
    }
}

impl<R: Reducer, C: Component<R::State>> Drop for Binding<R, C> {
    fn drop(&mut self) {
        self.deactivate();
    }
}

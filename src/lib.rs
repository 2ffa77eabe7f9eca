//! Client-side reactive state core for The Hive.
//!
//! A [`Store`](store::Store) owns the state tree and serializes every
//! transition through [`dispatch`](store::Store::dispatch). The root
//! [`HiveReducer`](state::HiveReducer) routes each
//! [`HiveAction`](action::HiveAction) to the per-domain slice reducers,
//! selectors in [`select`] derive view models, and [`connect`] binds UI
//! components to store notifications.

pub mod action;
pub mod config;
pub mod connect;
pub mod error;
pub mod logging;
pub mod mvi;
pub mod replay;
pub mod select;
pub mod slices;
pub mod state;
pub mod store;

/// Store specialised to the Hive state tree.
pub type HiveStore = store::Store<state::HiveReducer>;

/// Build a store with the initial tree derived from `config`.
pub fn build_store(config: &config::HiveConfig) -> HiveStore {
    store::Store::new(state::HiveState::from_config(config), &config.store)
}

//! Model-View-Intent (MVI) primitives behind the store.
//!
//! This module provides the base traits every slice of client state is
//! built on.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Reducer ──→ State ──→ Selectors ──→ Component
//!    ↑                                               │
//!    └───────────────────────────────────────────────┘
//! ```
//!
//! - **State**: Immutable slice of client state, shared behind `Arc`
//! - **Action**: User interactions or service completions
//! - **Reducer**: Pure function that computes the next slice from an action

mod action;
mod reducer;
mod state;

pub use action::{Action, ParseAction};
pub use reducer::{unchanged, Reducer};
pub use state::UiState;

//! Raffle wizard slice.
//!
//! # View states
//!
//! ```text
//! Home ──create──→ Create ──created──→ View ──spin──→ Spin
//!   ↑                                   ↑  ←─winner──┘
//!   └──────────────── home (from any) ──┘
//! ```
//!
//! Every (view, action) pair has an outcome; pairs without a transition
//! keep the current view.

mod reducer;
mod selectors;
mod state;

pub use reducer::RaffleReducer;
pub use selectors::{current_raffle, raffle_view, raffles, spinner_entrant, spinner_settled};
pub use state::{Raffle, RaffleState, RaffleView};

//! Per-domain slices of the state tree.
//!
//! Each slice owns its state type, its reducer and the pure selectors over
//! that state. Slice reducers all take the root [`HiveAction`] and return
//! their input `Arc` for actions they do not handle.
//!
//! [`HiveAction`]: crate::action::HiveAction

pub mod app;
pub mod avatar;
pub mod cards;
pub mod events;
pub mod points;
pub mod quests;
pub mod raffle;
pub mod review;

/// Share of `done` in `total` as a whole percentage, 0 when `total` is 0.
pub(crate) fn percent(done: u64, total: u64) -> u8 {
    if total == 0 {
        return 0;
    }
    let value = u128::from(done.min(total)) * 100 / u128::from(total);
    value as u8
}

//! Points slice: running balance and today's earnings.
//!
//! `POINTS_RECEIVED` accumulates into both counters, `POINTS_LOADED`
//! replaces them with the service's numbers and `POINTS_SPENT` debits the
//! balance.

mod reducer;
mod selectors;
mod state;

pub use reducer::PointsReducer;
pub use selectors::{daily_goal_percent, today_points, total_points};
pub use state::PointsState;

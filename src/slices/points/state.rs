use serde::Serialize;

use crate::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PointsState {
    /// Spendable balance.
    pub total: u64,
    /// Earned since the start of the day.
    pub today: u64,
    /// Target for `today`, 0 when no goal is configured.
    pub daily_goal: u64,
}

impl UiState for PointsState {}

impl PointsState {
    pub fn with_daily_goal(daily_goal: u64) -> Self {
        Self {
            daily_goal,
            ..Self::default()
        }
    }
}

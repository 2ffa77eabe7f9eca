use super::state::PointsState;
use crate::slices::percent;

pub fn total_points(state: &PointsState) -> u64 {
    state.total
}

pub fn today_points(state: &PointsState) -> u64 {
    state.today
}

/// Progress towards the daily goal, 0..=100. No goal means 0%.
pub fn daily_goal_percent(state: &PointsState) -> u8 {
    percent(state.today, state.daily_goal)
}

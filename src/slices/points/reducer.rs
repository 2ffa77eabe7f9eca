use std::sync::Arc;

use crate::action::HiveAction;
use crate::error::ReduceError;
use crate::mvi::{unchanged, Reducer};

use super::state::PointsState;

pub struct PointsReducer;

impl Reducer for PointsReducer {
    type State = PointsState;
    type Action = HiveAction;

    fn reduce(
        state: &Arc<PointsState>,
        action: &HiveAction,
    ) -> Result<Arc<PointsState>, ReduceError> {
        match action {
            HiveAction::PointsLoaded { total, today } => Ok(Arc::new(PointsState {
                total: *total,
                today: *today,
                daily_goal: state.daily_goal,
            })),
            HiveAction::PointsReceived { points: 0 } | HiveAction::PointsSpent { points: 0 } => {
                unchanged(state)
            }
            HiveAction::PointsReceived { points } => Ok(Arc::new(PointsState {
                total: state.total.saturating_add(*points),
                today: state.today.saturating_add(*points),
                daily_goal: state.daily_goal,
            })),
            HiveAction::PointsSpent { points } => {
                let total = state.total.checked_sub(*points).ok_or(
                    ReduceError::InsufficientPoints {
                        requested: *points,
                        balance: state.total,
                    },
                )?;
                Ok(Arc::new(PointsState {
                    total,
                    ..PointsState::clone(state)
                }))
            }
            _ => unchanged(state),
        }
    }
}

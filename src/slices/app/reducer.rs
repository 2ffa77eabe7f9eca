use std::sync::Arc;

use crate::action::HiveAction;
use crate::error::ReduceError;
use crate::mvi::{unchanged, Reducer};

use super::state::AppState;

pub struct AppReducer;

impl Reducer for AppReducer {
    type State = AppState;
    type Action = HiveAction;

    fn reduce(state: &Arc<AppState>, action: &HiveAction) -> Result<Arc<AppState>, ReduceError> {
        match action {
            HiveAction::PageChanged { page } if *page != state.page => Ok(Arc::new(AppState {
                page: *page,
                ..AppState::clone(state)
            })),
            HiveAction::UserLoaded { user } => Ok(Arc::new(AppState {
                user: Some(user.clone()),
                ..AppState::clone(state)
            })),
            HiveAction::OperationFailed { message } => Ok(Arc::new(AppState {
                error: Some(message.clone()),
                ..AppState::clone(state)
            })),
            HiveAction::ErrorCleared if state.error.is_some() => Ok(Arc::new(AppState {
                error: None,
                ..AppState::clone(state)
            })),
            _ => unchanged(state),
        }
    }
}

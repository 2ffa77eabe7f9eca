use std::sync::Arc;

use crate::action::HiveAction;
use crate::error::ReduceError;
use crate::mvi::{unchanged, Reducer};

use super::state::QuestsState;

pub struct QuestsReducer;

impl Reducer for QuestsReducer {
    type State = QuestsState;
    type Action = HiveAction;

    fn reduce(
        state: &Arc<QuestsState>,
        action: &HiveAction,
    ) -> Result<Arc<QuestsState>, ReduceError> {
        match action {
            HiveAction::QuestsLoaded { quests } => Ok(Arc::new(QuestsState {
                quests: quests.clone(),
            })),
            HiveAction::QuestCompleted { id } => {
                let index = state
                    .quests
                    .iter()
                    .position(|quest| &quest.id == id)
                    .ok_or_else(|| ReduceError::UnknownQuest { id: id.clone() })?;
                if state.quests[index].completed {
                    return unchanged(state);
                }
                let mut quests = state.quests.clone();
                quests[index].completed = true;
                Ok(Arc::new(QuestsState { quests }))
            }
            _ => unchanged(state),
        }
    }
}

use std::sync::Arc;

use crate::action::HiveAction;
use crate::error::ReduceError;
use crate::mvi::{unchanged, Reducer};

use super::state::AvatarState;

pub struct AvatarReducer;

impl Reducer for AvatarReducer {
    type State = AvatarState;
    type Action = HiveAction;

    fn reduce(
        state: &Arc<AvatarState>,
        action: &HiveAction,
    ) -> Result<Arc<AvatarState>, ReduceError> {
        match action {
            HiveAction::AvatarLoaded { parts } => Ok(Arc::new(AvatarState {
                parts: parts
                    .iter()
                    .filter(|(_, part)| !part.is_empty())
                    .map(|(layer, part)| (*layer, part.clone()))
                    .collect(),
            })),
            // An empty part clears the layer.
            HiveAction::AvatarPartSelected { layer, part } if part.is_empty() => {
                if !state.parts.contains_key(layer) {
                    return unchanged(state);
                }
                let mut parts = state.parts.clone();
                parts.remove(layer);
                Ok(Arc::new(AvatarState { parts }))
            }
            HiveAction::AvatarPartSelected { layer, part }
                if state.parts.get(layer) != Some(part) =>
            {
                let mut parts = state.parts.clone();
                parts.insert(*layer, part.clone());
                Ok(Arc::new(AvatarState { parts }))
            }
            HiveAction::AvatarReset if !state.parts.is_empty() => {
                Ok(Arc::new(AvatarState::default()))
            }
            _ => unchanged(state),
        }
    }
}

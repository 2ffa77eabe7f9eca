use std::sync::Arc;

use crate::action::HiveAction;
use crate::error::ReduceError;
use crate::mvi::{unchanged, Reducer};

use super::state::CardsState;

pub struct CardsReducer;

impl Reducer for CardsReducer {
    type State = CardsState;
    type Action = HiveAction;

    fn reduce(
        state: &Arc<CardsState>,
        action: &HiveAction,
    ) -> Result<Arc<CardsState>, ReduceError> {
        match action {
            HiveAction::CardsLoaded { cards } => {
                // Forget dismissals of cards the service no longer sends.
                let dismissed = state
                    .dismissed
                    .iter()
                    .filter(|id| cards.iter().any(|card| &card.id == *id))
                    .cloned()
                    .collect();
                Ok(Arc::new(CardsState {
                    cards: cards.clone(),
                    dismissed,
                }))
            }
            HiveAction::CardDismissed { id } if !state.dismissed.contains(id) => {
                let mut dismissed = state.dismissed.clone();
                dismissed.insert(id.clone());
                Ok(Arc::new(CardsState {
                    cards: state.cards.clone(),
                    dismissed,
                }))
            }
            _ => unchanged(state),
        }
    }
}

//! Reducer for the raffle wizard.

use std::sync::Arc;

use crate::action::HiveAction;
use crate::error::ReduceError;
use crate::mvi::{unchanged, Reducer};

use super::state::{Raffle, RaffleState, RaffleView};

/// Reducer for raffle wizard transitions.
pub struct RaffleReducer;

impl Reducer for RaffleReducer {
    type State = RaffleState;
    type Action = HiveAction;

    fn reduce(
        state: &Arc<RaffleState>,
        action: &HiveAction,
    ) -> Result<Arc<RaffleState>, ReduceError> {
        match action {
            HiveAction::RaffleHome => transition(state, RaffleView::Home),

            HiveAction::RaffleCreateStarted => transition(state, RaffleView::Create),

            HiveAction::RafflesLoaded { raffles } => {
                // A reload may drop the raffle being shown.
                let view = match state.current_id() {
                    Some(id) if !raffles.iter().any(|raffle| raffle.id == id) => RaffleView::Home,
                    _ => state.view.clone(),
                };
                Ok(Arc::new(RaffleState {
                    view,
                    raffles: raffles.clone(),
                    spin_ticks: state.spin_ticks,
                }))
            }

            HiveAction::RaffleCreated { raffle } => {
                let mut raffles = state.raffles.clone();
                upsert(&mut raffles, raffle.clone());
                Ok(Arc::new(RaffleState {
                    view: RaffleView::View {
                        id: raffle.id.clone(),
                    },
                    raffles,
                    spin_ticks: state.spin_ticks,
                }))
            }

            HiveAction::RaffleViewed { id } => {
                if state.find(id).is_none() {
                    return Err(ReduceError::UnknownRaffle { id: id.clone() });
                }
                transition(state, RaffleView::View { id: id.clone() })
            }

            HiveAction::RaffleEntered { id, entrant } => {
                let index = state
                    .raffles
                    .iter()
                    .position(|raffle| &raffle.id == id)
                    .ok_or_else(|| ReduceError::UnknownRaffle { id: id.clone() })?;
                if state.raffles[index].entrants.contains(entrant) {
                    return unchanged(state);
                }
                let mut raffles = state.raffles.clone();
                raffles[index].entrants.push(entrant.clone());
                Ok(Arc::new(RaffleState {
                    raffles,
                    ..RaffleState::clone(state)
                }))
            }

            HiveAction::RaffleSpinStarted => match &state.view {
                RaffleView::View { id }
                    if state
                        .find(id)
                        .is_some_and(|raffle| !raffle.entrants.is_empty()) =>
                {
                    transition(
                        state,
                        RaffleView::Spin {
                            id: id.clone(),
                            offset: 0,
                            ticks_left: state.spin_ticks,
                        },
                    )
                }
                _ => unchanged(state),
            },

            HiveAction::RaffleSpinTick => match &state.view {
                RaffleView::Spin {
                    id,
                    offset,
                    ticks_left,
                } if *ticks_left > 0 => transition(
                    state,
                    RaffleView::Spin {
                        id: id.clone(),
                        offset: offset.wrapping_add(1),
                        ticks_left: ticks_left - 1,
                    },
                ),
                _ => unchanged(state),
            },

            HiveAction::RaffleWinnerDrawn { winner } => {
                let RaffleView::Spin { id, .. } = &state.view else {
                    return unchanged(state);
                };
                let index = state
                    .raffles
                    .iter()
                    .position(|raffle| &raffle.id == id)
                    .ok_or_else(|| ReduceError::UnknownRaffle { id: id.clone() })?;
                if !state.raffles[index].entrants.contains(winner) {
                    return Err(ReduceError::NotAnEntrant {
                        raffle: id.clone(),
                        entrant: winner.clone(),
                    });
                }
                let mut raffles = state.raffles.clone();
                raffles[index].winner = Some(winner.clone());
                Ok(Arc::new(RaffleState {
                    view: RaffleView::View { id: id.clone() },
                    raffles,
                    spin_ticks: state.spin_ticks,
                }))
            }

            _ => unchanged(state),
        }
    }
}

fn transition(state: &Arc<RaffleState>, view: RaffleView) -> Result<Arc<RaffleState>, ReduceError> {
    if state.view == view {
        return unchanged(state);
    }
    Ok(Arc::new(RaffleState {
        view,
        ..RaffleState::clone(state)
    }))
}

fn upsert(raffles: &mut Vec<Raffle>, raffle: Raffle) {
    match raffles.iter_mut().find(|existing| existing.id == raffle.id) {
        Some(existing) => *existing = raffle,
        None => raffles.push(raffle),
    }
}

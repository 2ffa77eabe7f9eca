use std::sync::Arc;

use crate::action::HiveAction;
use crate::error::ReduceError;
use crate::mvi::{unchanged, Reducer};

use super::state::EventsState;

pub struct EventsReducer;

impl Reducer for EventsReducer {
    type State = EventsState;
    type Action = HiveAction;

    fn reduce(
        state: &Arc<EventsState>,
        action: &HiveAction,
    ) -> Result<Arc<EventsState>, ReduceError> {
        match action {
            HiveAction::EventsLoaded { events } => Ok(Arc::new(EventsState {
                events: events.clone(),
            })),
            HiveAction::RsvpChanged { id, status } => {
                let index = state
                    .events
                    .iter()
                    .position(|event| &event.id == id)
                    .ok_or_else(|| ReduceError::UnknownEvent { id: id.clone() })?;
                if state.events[index].rsvp == *status {
                    return unchanged(state);
                }
                let mut events = state.events.clone();
                events[index].rsvp = *status;
                Ok(Arc::new(EventsState { events }))
            }
            _ => unchanged(state),
        }
    }
}

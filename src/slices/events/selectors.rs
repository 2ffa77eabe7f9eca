use super::state::{EventsState, HiveEvent, RsvpStatus};

pub fn events(state: &EventsState) -> &[HiveEvent] {
    &state.events
}

pub fn attending_events(state: &EventsState) -> Vec<HiveEvent> {
    state
        .events
        .iter()
        .filter(|event| event.rsvp == RsvpStatus::Going)
        .cloned()
        .collect()
}

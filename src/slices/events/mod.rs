//! Company events slice with RSVP status.

mod reducer;
mod selectors;
mod state;

pub use reducer::EventsReducer;
pub use selectors::{attending_events, events};
pub use state::{EventsState, HiveEvent, RsvpStatus};

use serde::{Deserialize, Serialize};

use crate::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RsvpStatus {
    #[default]
    Pending,
    Going,
    Maybe,
    Declined,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HiveEvent {
    pub id: String,
    pub title: String,
    /// RFC 3339 start time as sent by the events service.
    pub starts_at: String,
    #[serde(default)]
    pub rsvp: RsvpStatus,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct EventsState {
    pub events: Vec<HiveEvent>,
}

impl UiState for EventsState {}

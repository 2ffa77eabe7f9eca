//! Error types for dispatch and reduction.

use thiserror::Error;

/// Errors a reducer can raise while computing the next state.
///
/// A reducer error aborts the dispatch; the store keeps its previous state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReduceError {
    #[error("Cannot spend {requested} points with a balance of {balance}")]
    InsufficientPoints { requested: u64, balance: u64 },

    #[error("Raffle '{id}' not found")]
    UnknownRaffle { id: String },

    #[error("'{entrant}' is not entered in raffle '{raffle}'")]
    NotAnEntrant { raffle: String, entrant: String },

    #[error("Quest '{id}' not found")]
    UnknownQuest { id: String },

    #[error("Event '{id}' not found")]
    UnknownEvent { id: String },

    #[error("Question '{id}' is not part of the current survey")]
    UnknownQuestion { id: String },

    #[error("Section {index} out of range ({count} sections)")]
    SectionOutOfRange { index: usize, count: usize },
}

/// Errors returned from the store's dispatch entry points.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The raw action has no usable `type` field.
    #[error("Malformed action: {reason}")]
    MalformedAction { reason: &'static str },

    /// The raw action names a type no reducer knows.
    #[error("Unknown action type '{kind}'")]
    UnknownAction { kind: String },

    /// The raw action's payload does not match its type.
    #[error("Invalid payload for '{kind}': {source}")]
    InvalidPayload {
        kind: String,
        #[source]
        source: serde_json::Error,
    },

    /// The reducer rejected the action. State was not changed.
    #[error("Reducer rejected '{action}': {source}")]
    Reducer {
        action: &'static str,
        #[source]
        source: ReduceError,
    },

    /// Too many actions were queued behind the in-flight dispatch.
    #[error("Dispatch queue full ({limit} pending actions)")]
    QueueOverflow { limit: usize },
}

impl StoreError {
    /// True for errors caused by the shape of a raw action, before any
    /// reducer ran.
    pub fn is_rejected_input(&self) -> bool {
        matches!(
            self,
            StoreError::MalformedAction { .. }
                | StoreError::UnknownAction { .. }
                | StoreError::InvalidPayload { .. }
        )
    }
}

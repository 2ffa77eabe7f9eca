use serde::{Deserialize, Serialize};

use crate::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quest {
    pub id: String,
    pub title: String,
    /// Points awarded on completion.
    #[serde(default)]
    pub reward: u64,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct QuestsState {
    pub quests: Vec<Quest>,
}

impl UiState for QuestsState {}

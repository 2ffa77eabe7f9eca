use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CardsState {
    /// Cards in the order the dashboard service returned them.
    pub cards: Vec<Card>,
    /// Ids the user dismissed. Survives reloads of `cards`.
    pub dismissed: BTreeSet<String>,
}

impl UiState for CardsState {}

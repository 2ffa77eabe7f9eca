use serde::{Deserialize, Serialize};

use crate::mvi::UiState;

/// Top-level pages of the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    #[default]
    Dashboard,
    Quests,
    Raffle,
    Review,
    Avatar,
    Store,
    Events,
    Profile,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AppState {
    pub page: Page,
    pub user: Option<User>,
    /// Message of the last failed operation, shown until cleared.
    pub error: Option<String>,
}

impl UiState for AppState {}

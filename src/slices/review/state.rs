use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub prompt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    #[serde(default)]
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Survey {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Survey {
    pub fn has_question(&self, id: &str) -> bool {
        self.sections
            .iter()
            .flat_map(|section| &section.questions)
            .any(|question| question.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Answer {
    Rating(u8),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ReviewState {
    pub survey: Option<Survey>,
    /// Answers keyed by question id.
    pub answers: BTreeMap<String, Answer>,
    /// Index of the section being shown.
    pub section: usize,
    pub submitted: bool,
}

impl UiState for ReviewState {}

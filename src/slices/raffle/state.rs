//! State for the raffle wizard.

use serde::{Deserialize, Serialize};

use crate::mvi::UiState;

/// Spinner ticks used when no configuration is supplied.
pub const DEFAULT_SPIN_TICKS: u32 = 24;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Raffle {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub entrants: Vec<String>,
    #[serde(default)]
    pub winner: Option<String>,
}

/// Which screen of the raffle wizard is showing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum RaffleView {
    /// List of raffles.
    #[default]
    Home,

    /// Creation form.
    Create,

    /// Details of one raffle.
    View { id: String },

    /// Spinner running for one raffle.
    Spin {
        id: String,
        /// Number of entrants the spinner has passed.
        offset: usize,
        /// Ticks until the spinner settles.
        ticks_left: u32,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RaffleState {
    pub view: RaffleView,
    pub raffles: Vec<Raffle>,
    /// Length of a spin in ticks.
    pub spin_ticks: u32,
}

impl Default for RaffleState {
    fn default() -> Self {
        Self::with_spin_ticks(DEFAULT_SPIN_TICKS)
    }
}

impl UiState for RaffleState {}

impl RaffleState {
    pub fn with_spin_ticks(spin_ticks: u32) -> Self {
        Self {
            view: RaffleView::Home,
            raffles: Vec::new(),
            spin_ticks,
        }
    }

    pub fn find(&self, id: &str) -> Option<&Raffle> {
        self.raffles.iter().find(|raffle| raffle.id == id)
    }

    /// Id of the raffle shown in View or Spin.
    pub fn current_id(&self) -> Option<&str> {
        match &self.view {
            RaffleView::View { id } | RaffleView::Spin { id, .. } => Some(id),
            RaffleView::Home | RaffleView::Create => None,
        }
    }

    pub fn is_spinning(&self) -> bool {
        matches!(self.view, RaffleView::Spin { .. })
    }
}

//! Quests slice.

mod reducer;
mod selectors;
mod state;

pub use reducer::QuestsReducer;
pub use selectors::{open_quests, quest_progress_percent, quests};
pub use state::{Quest, QuestsState};

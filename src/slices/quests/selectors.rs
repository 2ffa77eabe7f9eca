use super::state::{Quest, QuestsState};
use crate::slices::percent;

pub fn quests(state: &QuestsState) -> &[Quest] {
    &state.quests
}

pub fn open_quests(state: &QuestsState) -> Vec<Quest> {
    state
        .quests
        .iter()
        .filter(|quest| !quest.completed)
        .cloned()
        .collect()
}

pub fn quest_progress_percent(state: &QuestsState) -> u8 {
    let completed = state.quests.iter().filter(|quest| quest.completed).count();
    percent(completed as u64, state.quests.len() as u64)
}

use super::state::{Card, CardsState};

pub fn cards(state: &CardsState) -> &[Card] {
    &state.cards
}

/// Cards not dismissed by the user, in service order.
pub fn visible_cards(state: &CardsState) -> Vec<Card> {
    state
        .cards
        .iter()
        .filter(|card| !state.dismissed.contains(&card.id))
        .cloned()
        .collect()
}

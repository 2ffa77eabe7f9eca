use super::state::{Raffle, RaffleState, RaffleView};

pub fn raffle_view(state: &RaffleState) -> &RaffleView {
    &state.view
}

pub fn raffles(state: &RaffleState) -> &[Raffle] {
    &state.raffles
}

/// Raffle shown in View or Spin, `None` on Home and Create.
pub fn current_raffle(state: &RaffleState) -> Option<&Raffle> {
    state.current_id().and_then(|id| state.find(id))
}

/// Entrant currently highlighted by the spinner.
///
/// The spinner walks the entrant list cyclically. Outside Spin, or with no
/// entrants, nothing is highlighted.
pub fn spinner_entrant(state: &RaffleState) -> Option<&str> {
    let RaffleView::Spin { id, offset, .. } = &state.view else {
        return None;
    };
    let entrants = &state.find(id)?.entrants;
    if entrants.is_empty() {
        return None;
    }
    Some(entrants[offset % entrants.len()].as_str())
}

/// True once the spinner has used up its ticks.
pub fn spinner_settled(state: &RaffleState) -> bool {
    matches!(state.view, RaffleView::Spin { ticks_left: 0, .. })
}

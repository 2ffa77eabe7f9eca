//! Selectors over the whole state tree.
//!
//! Thin wrappers that pick a slice and call its selector, so components
//! never reach into the tree's shape. All of them are total: before data
//! loads they return empty collections, zero or `None`.
//!
//! List-valued selectors that filter have memoized variants on
//! [`ViewSelectors`]; those return reference-equal output while the slice
//! they read is unchanged.

mod memo;

pub use memo::Memoized;

use std::sync::Arc;

use serde::Serialize;

use crate::slices::app::{self, Page};
use crate::slices::avatar::{self, AvatarLayer};
use crate::slices::cards::{self, Card, CardsState};
use crate::slices::events::{self, EventsState, HiveEvent};
use crate::slices::points;
use crate::slices::quests::{self, Quest, QuestsState};
use crate::slices::raffle::{self, Raffle, RaffleView};
use crate::slices::review::{self, Answer, Section};
use crate::state::HiveState;

pub fn select_page(state: &HiveState) -> Page {
    app::page(&state.app)
}

pub fn select_user_name(state: &HiveState) -> &str {
    app::user_name(&state.app)
}

pub fn select_error_message(state: &HiveState) -> Option<&str> {
    app::error_message(&state.app)
}

pub fn select_cards(state: &HiveState) -> &[Card] {
    cards::cards(&state.cards)
}

pub fn select_visible_cards(state: &HiveState) -> Vec<Card> {
    cards::visible_cards(&state.cards)
}

pub fn select_total_points(state: &HiveState) -> u64 {
    points::total_points(&state.points)
}

pub fn select_today_points(state: &HiveState) -> u64 {
    points::today_points(&state.points)
}

pub fn select_daily_goal_percent(state: &HiveState) -> u8 {
    points::daily_goal_percent(&state.points)
}

pub fn select_quests(state: &HiveState) -> &[Quest] {
    quests::quests(&state.quests)
}

pub fn select_open_quests(state: &HiveState) -> Vec<Quest> {
    quests::open_quests(&state.quests)
}

pub fn select_quest_progress_percent(state: &HiveState) -> u8 {
    quests::quest_progress_percent(&state.quests)
}

pub fn select_raffle_view(state: &HiveState) -> &RaffleView {
    raffle::raffle_view(&state.raffle)
}

pub fn select_raffles(state: &HiveState) -> &[Raffle] {
    raffle::raffles(&state.raffle)
}

pub fn select_current_raffle(state: &HiveState) -> Option<&Raffle> {
    raffle::current_raffle(&state.raffle)
}

pub fn select_spinner_entrant(state: &HiveState) -> Option<&str> {
    raffle::spinner_entrant(&state.raffle)
}

pub fn select_spinner_settled(state: &HiveState) -> bool {
    raffle::spinner_settled(&state.raffle)
}

pub fn select_review_progress_percent(state: &HiveState) -> u8 {
    review::review_progress_percent(&state.review)
}

pub fn select_current_section(state: &HiveState) -> Option<&Section> {
    review::current_section(&state.review)
}

pub fn select_answer<'a>(state: &'a HiveState, question_id: &str) -> Option<&'a Answer> {
    review::answer(&state.review, question_id)
}

pub fn select_answered_count(state: &HiveState) -> usize {
    review::answered_count(&state.review)
}

pub fn select_avatar_layers(state: &HiveState) -> Vec<(AvatarLayer, String)> {
    avatar::avatar_layers(&state.avatar)
}

pub fn select_avatar_part(state: &HiveState, layer: AvatarLayer) -> Option<&str> {
    avatar::selected_part(&state.avatar, layer)
}

pub fn select_events(state: &HiveState) -> &[HiveEvent] {
    events::events(&state.events)
}

pub fn select_attending_events(state: &HiveState) -> Vec<HiveEvent> {
    events::attending_events(&state.events)
}

/// Memoized list selectors, one cache per selector.
///
/// Each connected component that wants render skipping keeps its own
/// instance.
pub struct ViewSelectors {
    visible_cards: Memoized<CardsState, Vec<Card>>,
    open_quests: Memoized<QuestsState, Vec<Quest>>,
    attending_events: Memoized<EventsState, Vec<HiveEvent>>,
}

impl Default for ViewSelectors {
    fn default() -> Self {
        Self {
            visible_cards: Memoized::new(cards::visible_cards),
            open_quests: Memoized::new(quests::open_quests),
            attending_events: Memoized::new(events::attending_events),
        }
    }
}

impl ViewSelectors {
    pub fn visible_cards(&self, state: &HiveState) -> Arc<Vec<Card>> {
        self.visible_cards.select(&state.cards)
    }

    pub fn open_quests(&self, state: &HiveState) -> Arc<Vec<Quest>> {
        self.open_quests.select(&state.quests)
    }

    pub fn attending_events(&self, state: &HiveState) -> Arc<Vec<HiveEvent>> {
        self.attending_events.select(&state.events)
    }
}

/// Summary view model of the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub page: Page,
    pub user_name: String,
    pub error: Option<String>,
    pub visible_cards: usize,
    pub total_points: u64,
    pub today_points: u64,
    pub daily_goal_percent: u8,
    pub open_quests: usize,
    pub quest_progress_percent: u8,
    pub raffle_view: RaffleView,
    pub review_progress_percent: u8,
    pub avatar_layers: usize,
    pub attending_events: usize,
}

pub fn select_dashboard(state: &HiveState) -> DashboardView {
    DashboardView {
        page: select_page(state),
        user_name: select_user_name(state).to_string(),
        error: select_error_message(state).map(str::to_string),
        visible_cards: select_visible_cards(state).len(),
        total_points: select_total_points(state),
        today_points: select_today_points(state),
        daily_goal_percent: select_daily_goal_percent(state),
        open_quests: select_open_quests(state).len(),
        quest_progress_percent: select_quest_progress_percent(state),
        raffle_view: select_raffle_view(state).clone(),
        review_progress_percent: select_review_progress_percent(state),
        avatar_layers: select_avatar_layers(state).len(),
        attending_events: select_attending_events(state).len(),
    }
}

//! The root state tree and the reducer composed from every slice.

use std::sync::Arc;

use serde::Serialize;

use crate::action::HiveAction;
use crate::config::HiveConfig;
use crate::error::ReduceError;
use crate::mvi::{Reducer, UiState};
use crate::slices::app::{AppReducer, AppState};
use crate::slices::avatar::{AvatarReducer, AvatarState};
use crate::slices::cards::{CardsReducer, CardsState};
use crate::slices::events::{EventsReducer, EventsState};
use crate::slices::points::{PointsReducer, PointsState};
use crate::slices::quests::{QuestsReducer, QuestsState};
use crate::slices::raffle::{RaffleReducer, RaffleState};
use crate::slices::review::{ReviewReducer, ReviewState};

/// Whole client state. Each slice sits behind its own `Arc` so untouched
/// slices are shared between consecutive trees.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct HiveState {
    pub app: Arc<AppState>,
    pub cards: Arc<CardsState>,
    pub points: Arc<PointsState>,
    pub quests: Arc<QuestsState>,
    pub raffle: Arc<RaffleState>,
    pub review: Arc<ReviewState>,
    pub avatar: Arc<AvatarState>,
    pub events: Arc<EventsState>,
}

impl UiState for HiveState {}

impl HiveState {
    /// Initial tree with configured goals and timings.
    pub fn from_config(config: &HiveConfig) -> Self {
        Self {
            points: Arc::new(PointsState::with_daily_goal(config.points.daily_goal)),
            raffle: Arc::new(RaffleState::with_spin_ticks(config.raffle.spin_ticks)),
            ..Self::default()
        }
    }
}

/// Root reducer: runs every slice reducer on its slice.
///
/// If no slice changed, the previous root `Arc` is returned.
pub struct HiveReducer;

impl Reducer for HiveReducer {
    type State = HiveState;
    type Action = HiveAction;

    fn reduce(state: &Arc<HiveState>, action: &HiveAction) -> Result<Arc<HiveState>, ReduceError> {
        let next = HiveState {
            app: AppReducer::reduce(&state.app, action)?,
            cards: CardsReducer::reduce(&state.cards, action)?,
            points: PointsReducer::reduce(&state.points, action)?,
            quests: QuestsReducer::reduce(&state.quests, action)?,
            raffle: RaffleReducer::reduce(&state.raffle, action)?,
            review: ReviewReducer::reduce(&state.review, action)?,
            avatar: AvatarReducer::reduce(&state.avatar, action)?,
            events: EventsReducer::reduce(&state.events, action)?,
        };

        let untouched = Arc::ptr_eq(&next.app, &state.app)
            && Arc::ptr_eq(&next.cards, &state.cards)
            && Arc::ptr_eq(&next.points, &state.points)
            && Arc::ptr_eq(&next.quests, &state.quests)
            && Arc::ptr_eq(&next.raffle, &state.raffle)
            && Arc::ptr_eq(&next.review, &state.review)
            && Arc::ptr_eq(&next.avatar, &state.avatar)
            && Arc::ptr_eq(&next.events, &state.events);
        if untouched {
            return Ok(Arc::clone(state));
        }
        Ok(Arc::new(next))
    }
}

//! Every action the client dispatches.
//!
//! The wire form is `{"type": "POINTS_RECEIVED", "payload": {"points": 42}}`;
//! actions without data omit `payload`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::StoreError;
use crate::mvi::{Action, ParseAction};
use crate::slices::app::{Page, User};
use crate::slices::avatar::AvatarLayer;
use crate::slices::cards::Card;
use crate::slices::events::{HiveEvent, RsvpStatus};
use crate::slices::quests::Quest;
use crate::slices::raffle::Raffle;
use crate::slices::review::{Answer, Survey};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HiveAction {
    // App shell
    PageChanged { page: Page },
    UserLoaded { user: User },
    /// A service call failed; the message is shown to the user.
    OperationFailed { message: String },
    ErrorCleared,

    // Dashboard
    CardsLoaded { cards: Vec<Card> },
    CardDismissed { id: String },

    // Points
    /// Replace both counters with the service's values.
    PointsLoaded { total: u64, today: u64 },
    /// Add to both counters.
    PointsReceived { points: u64 },
    PointsSpent { points: u64 },

    // Quests
    QuestsLoaded { quests: Vec<Quest> },
    QuestCompleted { id: String },

    // Raffle wizard
    RaffleHome,
    RaffleCreateStarted,
    RafflesLoaded { raffles: Vec<Raffle> },
    RaffleCreated { raffle: Raffle },
    RaffleViewed { id: String },
    RaffleEntered { id: String, entrant: String },
    RaffleSpinStarted,
    RaffleSpinTick,
    RaffleWinnerDrawn { winner: String },

    // Review surveys
    SurveyLoaded { survey: Survey },
    AnswerRecorded { question_id: String, answer: Answer },
    AnswersRestored { answers: BTreeMap<String, Answer> },
    SectionChanged { index: usize },
    SurveySubmitted,

    // Avatar
    AvatarLoaded { parts: BTreeMap<AvatarLayer, String> },
    AvatarPartSelected { layer: AvatarLayer, part: String },
    AvatarReset,

    // Events
    EventsLoaded { events: Vec<HiveEvent> },
    RsvpChanged { id: String, status: RsvpStatus },
}

impl HiveAction {
    /// Every recognised `type` tag.
    pub const KINDS: &'static [&'static str] = &[
        "PAGE_CHANGED",
        "USER_LOADED",
        "OPERATION_FAILED",
        "ERROR_CLEARED",
        "CARDS_LOADED",
        "CARD_DISMISSED",
        "POINTS_LOADED",
        "POINTS_RECEIVED",
        "POINTS_SPENT",
        "QUESTS_LOADED",
        "QUEST_COMPLETED",
        "RAFFLE_HOME",
        "RAFFLE_CREATE_STARTED",
        "RAFFLES_LOADED",
        "RAFFLE_CREATED",
        "RAFFLE_VIEWED",
        "RAFFLE_ENTERED",
        "RAFFLE_SPIN_STARTED",
        "RAFFLE_SPIN_TICK",
        "RAFFLE_WINNER_DRAWN",
        "SURVEY_LOADED",
        "ANSWER_RECORDED",
        "ANSWERS_RESTORED",
        "SECTION_CHANGED",
        "SURVEY_SUBMITTED",
        "AVATAR_LOADED",
        "AVATAR_PART_SELECTED",
        "AVATAR_RESET",
        "EVENTS_LOADED",
        "RSVP_CHANGED",
    ];
}

impl Action for HiveAction {
    fn name(&self) -> &'static str {
        match self {
            HiveAction::PageChanged { .. } => "PAGE_CHANGED",
            HiveAction::UserLoaded { .. } => "USER_LOADED",
            HiveAction::OperationFailed { .. } => "OPERATION_FAILED",
            HiveAction::ErrorCleared => "ERROR_CLEARED",
            HiveAction::CardsLoaded { .. } => "CARDS_LOADED",
            HiveAction::CardDismissed { .. } => "CARD_DISMISSED",
            HiveAction::PointsLoaded { .. } => "POINTS_LOADED",
            HiveAction::PointsReceived { .. } => "POINTS_RECEIVED",
            HiveAction::PointsSpent { .. } => "POINTS_SPENT",
            HiveAction::QuestsLoaded { .. } => "QUESTS_LOADED",
            HiveAction::QuestCompleted { .. } => "QUEST_COMPLETED",
            HiveAction::RaffleHome => "RAFFLE_HOME",
            HiveAction::RaffleCreateStarted => "RAFFLE_CREATE_STARTED",
            HiveAction::RafflesLoaded { .. } => "RAFFLES_LOADED",
            HiveAction::RaffleCreated { .. } => "RAFFLE_CREATED",
            HiveAction::RaffleViewed { .. } => "RAFFLE_VIEWED",
            HiveAction::RaffleEntered { .. } => "RAFFLE_ENTERED",
            HiveAction::RaffleSpinStarted => "RAFFLE_SPIN_STARTED",
            HiveAction::RaffleSpinTick => "RAFFLE_SPIN_TICK",
            HiveAction::RaffleWinnerDrawn { .. } => "RAFFLE_WINNER_DRAWN",
            HiveAction::SurveyLoaded { .. } => "SURVEY_LOADED",
            HiveAction::AnswerRecorded { .. } => "ANSWER_RECORDED",
            HiveAction::AnswersRestored { .. } => "ANSWERS_RESTORED",
            HiveAction::SectionChanged { .. } => "SECTION_CHANGED",
            HiveAction::SurveySubmitted => "SURVEY_SUBMITTED",
            HiveAction::AvatarLoaded { .. } => "AVATAR_LOADED",
            HiveAction::AvatarPartSelected { .. } => "AVATAR_PART_SELECTED",
            HiveAction::AvatarReset => "AVATAR_RESET",
            HiveAction::EventsLoaded { .. } => "EVENTS_LOADED",
            HiveAction::RsvpChanged { .. } => "RSVP_CHANGED",
        }
    }
}

impl ParseAction for HiveAction {
    fn parse(value: Value) -> Result<Self, StoreError> {
        let object = value.as_object().ok_or(StoreError::MalformedAction {
            reason: "action must be an object",
        })?;
        let kind = match object.get("type") {
            Some(Value::String(kind)) => kind.clone(),
            Some(_) => {
                return Err(StoreError::MalformedAction {
                    reason: "action type must be a string",
                })
            }
            None => {
                return Err(StoreError::MalformedAction {
                    reason: "action has no type",
                })
            }
        };
        if !Self::KINDS.contains(&kind.as_str()) {
            return Err(StoreError::UnknownAction { kind });
        }
        serde_json::from_value(value).map_err(|source| StoreError::InvalidPayload { kind, source })
    }
}

use std::sync::Arc;

use crate::action::HiveAction;
use crate::error::ReduceError;
use crate::mvi::{unchanged, Reducer};

use super::state::ReviewState;

pub struct ReviewReducer;

impl Reducer for ReviewReducer {
    type State = ReviewState;
    type Action = HiveAction;

    fn reduce(
        state: &Arc<ReviewState>,
        action: &HiveAction,
    ) -> Result<Arc<ReviewState>, ReduceError> {
        match action {
            HiveAction::SurveyLoaded { survey } => {
                let same_survey = state
                    .survey
                    .as_ref()
                    .is_some_and(|current| current.id == survey.id);
                if same_survey {
                    // Refreshed copy of the survey in progress: keep answers
                    // to questions it still asks.
                    let answers = state
                        .answers
                        .iter()
                        .filter(|(id, _)| survey.has_question(id))
                        .map(|(id, answer)| (id.clone(), answer.clone()))
                        .collect();
                    return Ok(Arc::new(ReviewState {
                        survey: Some(survey.clone()),
                        answers,
                        section: state.section.min(survey.sections.len().saturating_sub(1)),
                        submitted: state.submitted,
                    }));
                }
                Ok(Arc::new(ReviewState {
                    survey: Some(survey.clone()),
                    ..ReviewState::default()
                }))
            }

            HiveAction::AnswerRecorded {
                question_id,
                answer,
            } => {
                let Some(survey) = state.survey.as_ref().filter(|_| !state.submitted) else {
                    return unchanged(state);
                };
                if !survey.has_question(question_id) {
                    return Err(ReduceError::UnknownQuestion {
                        id: question_id.clone(),
                    });
                }
                if state.answers.get(question_id) == Some(answer) {
                    return unchanged(state);
                }
                let mut answers = state.answers.clone();
                answers.insert(question_id.clone(), answer.clone());
                Ok(Arc::new(ReviewState {
                    answers,
                    ..ReviewState::clone(state)
                }))
            }

            HiveAction::AnswersRestored { answers: cached } => {
                let Some(survey) = state.survey.as_ref().filter(|_| !state.submitted) else {
                    return unchanged(state);
                };
                let mut answers = state.answers.clone();
                let mut restored = 0usize;
                for (id, answer) in cached {
                    if survey.has_question(id) && !answers.contains_key(id) {
                        answers.insert(id.clone(), answer.clone());
                        restored += 1;
                    }
                }
                if restored == 0 {
                    return unchanged(state);
                }
                Ok(Arc::new(ReviewState {
                    answers,
                    ..ReviewState::clone(state)
                }))
            }

            HiveAction::SectionChanged { index } => {
                let count = state
                    .survey
                    .as_ref()
                    .map_or(0, |survey| survey.sections.len());
                if *index >= count {
                    return Err(ReduceError::SectionOutOfRange {
                        index: *index,
                        count,
                    });
                }
                if *index == state.section {
                    return unchanged(state);
                }
                Ok(Arc::new(ReviewState {
                    section: *index,
                    ..ReviewState::clone(state)
                }))
            }

            HiveAction::SurveySubmitted if state.survey.is_some() && !state.submitted => {
                Ok(Arc::new(ReviewState {
                    submitted: true,
                    ..ReviewState::clone(state)
                }))
            }

            _ => unchanged(state),
        }
    }
}

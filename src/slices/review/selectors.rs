use super::state::{Answer, ReviewState, Section};
use crate::slices::percent;

/// Section being shown, `None` before a survey loads.
pub fn current_section(state: &ReviewState) -> Option<&Section> {
    state.survey.as_ref()?.sections.get(state.section)
}

pub fn answer<'a>(state: &'a ReviewState, question_id: &str) -> Option<&'a Answer> {
    state.answers.get(question_id)
}

pub fn answered_count(state: &ReviewState) -> usize {
    state.answers.len()
}

/// Share of sections whose questions are all answered, 0..=100.
///
/// Sections without questions count as complete. No survey, or a survey
/// with no sections, is 0%.
pub fn review_progress_percent(state: &ReviewState) -> u8 {
    let Some(survey) = state.survey.as_ref() else {
        return 0;
    };
    let complete = survey
        .sections
        .iter()
        .filter(|section| {
            section
                .questions
                .iter()
                .all(|question| state.answers.contains_key(&question.id))
        })
        .count();
    percent(complete as u64, survey.sections.len() as u64)
}

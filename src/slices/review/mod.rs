//! Peer-review survey slice.
//!
//! Answers are kept per question id, latest write wins. Answers cached by
//! the client from an earlier session can be merged back in with
//! `ANSWERS_RESTORED`; they never overwrite answers given in this session.

mod reducer;
mod selectors;
mod state;

pub use reducer::ReviewReducer;
pub use selectors::{answer, answered_count, current_section, review_progress_percent};
pub use state::{Answer, Question, ReviewState, Section, Survey};

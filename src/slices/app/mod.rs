//! Application shell slice: current page, signed-in user, last error.

mod reducer;
mod selectors;
mod state;

pub use reducer::AppReducer;
pub use selectors::{error_message, page, user_name};
pub use state::{AppState, Page, User};

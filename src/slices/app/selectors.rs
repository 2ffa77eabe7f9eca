use super::state::{AppState, Page};

pub fn page(state: &AppState) -> Page {
    state.page
}

/// Display name of the signed-in user, empty before the profile loads.
pub fn user_name(state: &AppState) -> &str {
    state.user.as_ref().map(|user| user.name.as_str()).unwrap_or("")
}

pub fn error_message(state: &AppState) -> Option<&str> {
    state.error.as_deref()
}

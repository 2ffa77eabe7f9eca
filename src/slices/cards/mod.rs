//! Dashboard cards slice.

mod reducer;
mod selectors;
mod state;

pub use reducer::CardsReducer;
pub use selectors::{cards, visible_cards};
pub use state::{Card, CardsState};

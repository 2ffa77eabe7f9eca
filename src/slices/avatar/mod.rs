//! Avatar builder slice.
//!
//! Parts are composited bottom to top in [`AvatarLayer`] order.

mod reducer;
mod selectors;
mod state;

pub use reducer::AvatarReducer;
pub use selectors::{avatar_layers, selected_part};
pub use state::{AvatarLayer, AvatarState};

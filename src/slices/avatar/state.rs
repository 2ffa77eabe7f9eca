use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::mvi::UiState;

/// Compositing layers, declared bottom to top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvatarLayer {
    Background,
    Body,
    Eyes,
    Mouth,
    Hair,
    Accessory,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AvatarState {
    /// Selected part id per layer. Iterates in compositing order.
    pub parts: BTreeMap<AvatarLayer, String>,
}

impl UiState for AvatarState {}

use super::state::{AvatarLayer, AvatarState};

/// Selected parts bottom to top, skipping empty layers.
pub fn avatar_layers(state: &AvatarState) -> Vec<(AvatarLayer, String)> {
    state
        .parts
        .iter()
        .filter(|(_, part)| !part.is_empty())
        .map(|(layer, part)| (*layer, part.clone()))
        .collect()
}

pub fn selected_part(state: &AvatarState, layer: AvatarLayer) -> Option<&str> {
    state.parts.get(&layer).map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layers_come_out_in_compositing_order() {
        let mut state = AvatarState::default();
        state.parts.insert(AvatarLayer::Accessory, "hat".into());
        state.parts.insert(AvatarLayer::Background, "meadow".into());
        state.parts.insert(AvatarLayer::Eyes, "round".into());

        let layers: Vec<AvatarLayer> = avatar_layers(&state).into_iter().map(|(l, _)| l).collect();
        assert_eq!(
            layers,
            vec![AvatarLayer::Background, AvatarLayer::Eyes, AvatarLayer::Accessory]
        );
    }

    #[test]
    fn empty_avatar_has_no_layers() {
        assert!(avatar_layers(&AvatarState::default()).is_empty());
        assert_eq!(selected_part(&AvatarState::default(), AvatarLayer::Body), None);
    }
}

use super::modes::DebugState;
use bevy::prelude::*;

/// `B` toggles the bounds overlay.
pub fn debug_key_input_system(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    mut state: ResMut<DebugState>,
) {
    let Some(keys) = keys else {
        return;
    };
    if keys.just_pressed(KeyCode::KeyB) {
        state.overlay_visible = !state.overlay_visible;
        info!(
            "Bounds overlay {}",
            if state.overlay_visible { "ON" } else { "OFF" }
        );
    }
}

#![cfg(feature = "debug")]
use bevy::prelude::*;
use sphere_hop::debug::keys::debug_key_input_system;
use sphere_hop::debug::DebugState;

#[test]
fn b_toggles_bounds_overlay() {
    let mut app = App::new();
    app.insert_resource(ButtonInput::<KeyCode>::default());
    app.init_resource::<DebugState>();
    app.add_systems(Update, debug_key_input_system);

    assert!(app.world().resource::<DebugState>().overlay_visible);
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::KeyB);
    app.update();
    assert!(!app.world().resource::<DebugState>().overlay_visible);

    // still held: no further toggle
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .clear();
    app.update();
    assert!(!app.world().resource::<DebugState>().overlay_visible);

    {
        let mut input = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        input.release(KeyCode::KeyB);
        input.clear();
        input.press(KeyCode::KeyB);
    }
    app.update();
    assert!(app.world().resource::<DebugState>().overlay_visible);
}

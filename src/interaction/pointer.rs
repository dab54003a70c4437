use bevy::math::Ray3d;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::app::simulation::Simulation;
use crate::core::system::system_order::PointerInputSet;
use crate::interaction::picker::cursor_to_ndc;

/// Single-slot "latest known pointer ray". Only the newest value matters, so
/// there is no queue.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct LatestPointer(Option<Ray3d>);

impl LatestPointer {
    #[inline]
    pub fn set(&mut self, ray: Ray3d) {
        self.0 = Some(ray);
    }

    #[inline]
    pub fn clear(&mut self) {
        self.0 = None;
    }

    #[inline]
    pub fn get(&self) -> Option<Ray3d> {
        self.0
    }
}

pub struct PointerTrackingPlugin;

impl Plugin for PointerTrackingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, track_pointer.in_set(PointerInputSet));
    }
}

/// First touch if present, else the mouse cursor. Leaving the window keeps the
/// last known ray.
///
/// The ray comes from the live camera when its viewport is known; before the
/// first render (or headless) it is cast through the rig, resized to the
/// actual window.
fn track_pointer(
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    touches: Option<Res<Touches>>,
    mut sim: ResMut<Simulation>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let size = Vec2::new(window.width(), window.height());
    if size.y > 0.0 {
        sim.set_viewport_aspect(size.x / size.y);
    }

    let touch = touches
        .as_deref()
        .and_then(|t| t.iter().next().map(|touch| touch.position()));
    let Some(cursor) = touch.or_else(|| window.cursor_position()) else {
        return;
    };

    if let Ok((camera, cam_tf)) = cameras.single() {
        if let Ok(ray) = camera.viewport_to_world(cam_tf, cursor) {
            sim.set_pointer_ray(ray);
            return;
        }
    }
    if let Some(ndc) = cursor_to_ndc(cursor, size) {
        sim.set_pointer_ndc(ndc);
    }
}

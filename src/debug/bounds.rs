use super::modes::DebugState;
use crate::app::simulation::Simulation;
use bevy::prelude::*;

/// Outline the hop strip on the z = 0 plane: baseline plus both edge posts.
pub fn draw_domain_bounds(mut gizmos: Gizmos, state: Res<DebugState>, sim: Res<Simulation>) {
    if !state.overlay_visible {
        return;
    }
    let b = sim.bounds();
    let top = b.height * 0.5;
    let edge = Color::linear_rgba(0.9, 0.15, 0.15, 1.0);
    let base = Color::linear_rgba(0.55, 0.55, 0.65, 1.0);
    gizmos.line(Vec3::new(b.min_x, 0.0, 0.0), Vec3::new(b.max_x, 0.0, 0.0), base);
    gizmos.line(Vec3::new(b.min_x, 0.0, 0.0), Vec3::new(b.min_x, top, 0.0), edge);
    gizmos.line(Vec3::new(b.max_x, 0.0, 0.0), Vec3::new(b.max_x, top, 0.0), edge);
}

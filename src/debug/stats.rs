use super::modes::{DebugState, DebugStats};
use crate::app::simulation::FrameStats;
use bevy::prelude::*;

pub fn debug_stats_collect_system(
    time: Res<Time>,
    frame: Res<FrameStats>,
    mut state: ResMut<DebugState>,
    mut stats: ResMut<DebugStats>,
) {
    state.frame_counter += 1;
    let dt = time.delta_secs().max(1e-6);
    let inst_fps = 1.0 / dt;
    if stats.fps == 0.0 {
        stats.fps = inst_fps;
    } else {
        stats.fps = stats.fps * 0.9 + inst_fps * 0.1;
    }
    let inst_ms = dt * 1000.0;
    if stats.frame_time_ms == 0.0 {
        stats.frame_time_ms = inst_ms;
    } else {
        stats.frame_time_ms = stats.frame_time_ms * 0.9 + inst_ms * 0.1;
    }
    stats.body_count = frame.0.bodies;
    stats.hovered_count = frame.0.hovered;
}

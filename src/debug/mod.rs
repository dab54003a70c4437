//! Debug module: feature gated stats logging & bounds overlay.
//! Built only when compiled with `--features debug`.

#[cfg(feature = "debug")]
mod bounds;
#[cfg(feature = "debug")]
pub mod keys; // pub for testing
#[cfg(feature = "debug")]
mod logging;
#[cfg(feature = "debug")]
mod modes;
#[cfg(feature = "debug")]
mod stats;

#[cfg(feature = "debug")]
pub use modes::*;

#[cfg(feature = "debug")]
use crate::core::config::GameConfig;
#[cfg(feature = "debug")]
use crate::core::system::system_order::RenderSyncSet;
#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
pub struct DebugPlugin;
#[cfg(feature = "debug")]
impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        use bounds::draw_domain_bounds;
        use keys::debug_key_input_system;
        use logging::debug_logging_system;
        use stats::debug_stats_collect_system;

        app.init_resource::<DebugState>()
            .init_resource::<DebugStats>()
            .add_systems(Startup, apply_debug_config)
            .add_systems(
                Update,
                (
                    debug_key_input_system,
                    debug_stats_collect_system,
                    debug_logging_system,
                    draw_domain_bounds,
                )
                    .chain()
                    .after(RenderSyncSet),
            );
    }
}

#[cfg(feature = "debug")]
fn apply_debug_config(cfg: Res<GameConfig>, mut state: ResMut<DebugState>) {
    state.log_interval = cfg.debug.log_interval.max(0.05);
    state.overlay_visible = cfg.debug.draw_bounds;
}

// This file is part of Sphere Hop.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;

use crate::app::simulation::SimulationPlugin;
#[cfg(feature = "debug")]
use crate::debug::DebugPlugin;
use crate::gameplay::spawn::BodySpawnPlugin;
use crate::interaction::pointer::PointerTrackingPlugin;
use crate::interaction::session::auto_close::AutoClosePlugin;
use crate::rendering::scene::ScenePlugin;
use crate::rendering::spheres::SphereRenderPlugin;

/// Headless part of the game: bodies, pointer tracking and the frame step.
/// Expects `GameConfig`, `Simulation` and `SimRng` resources.
pub struct SimulationPlugins;

impl Plugin for SimulationPlugins {
    fn build(&self, app: &mut App) {
        app.add_plugins((SimulationPlugin, BodySpawnPlugin, PointerTrackingPlugin));
    }
}

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            SimulationPlugins,
            ScenePlugin,
            SphereRenderPlugin,
            AutoClosePlugin,
            #[cfg(feature = "debug")]
            DebugPlugin,
        ));
    }
}

use bevy::prelude::*;
use rand::Rng;

use crate::app::simulation::Simulation;
use crate::core::components::{SimRng, SphereBody, SphereSkin};
use crate::core::config::{BodyConfig, GameConfig};
use crate::gameplay::body::HopBody;

pub struct BodySpawnPlugin;

impl Plugin for BodySpawnPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_bodies);
    }
}

/// Uniform pick with replacement from the texture list, or a random flat color.
pub fn choose_skin<R: Rng + ?Sized>(cfg: &BodyConfig, rng: &mut R) -> SphereSkin {
    if cfg.textures.is_empty() {
        SphereSkin::Flat([
            rng.gen::<f32>() * 0.9 + 0.1,
            rng.gen::<f32>() * 0.9 + 0.1,
            rng.gen::<f32>() * 0.9 + 0.1,
        ])
    } else {
        let idx = rng.gen_range(0..cfg.textures.len());
        SphereSkin::Texture(cfg.textures[idx].clone())
    }
}

/// Create every body in the arena, then an entity per body for the renderer.
fn spawn_bodies(
    mut commands: Commands,
    cfg: Res<GameConfig>,
    mut sim: ResMut<Simulation>,
    mut rng: ResMut<SimRng>,
) {
    let c = &cfg.bodies;
    for i in 0..c.count {
        let skin = choose_skin(c, &mut rng.0);
        let body = HopBody::initialize(sim.bounds(), c, &cfg.hover, &mut rng.0);
        let start = body.position;
        let id = sim.register(body);
        commands.spawn((
            Name::new(format!("Sphere {i}")),
            SphereBody(id),
            skin,
            Transform::from_translation(start),
            Visibility::default(),
        ));
    }
    let bounds = sim.bounds();
    info!(
        count = c.count,
        min_x = bounds.min_x,
        max_x = bounds.max_x,
        "Spawned {} hopping spheres",
        c.count
    );
}

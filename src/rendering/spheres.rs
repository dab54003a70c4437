use bevy::prelude::*;

use crate::app::simulation::Simulation;
use crate::core::components::{SphereBody, SphereSkin, SphereVisual};

pub struct SphereRenderPlugin;

impl Plugin for SphereRenderPlugin {
    fn build(&self, app: &mut App) {
        // Bodies are only spawned in Startup.
        app.add_systems(PostStartup, attach_sphere_visuals);
    }
}

/// Register the spawned bodies for rendering: a UV sphere of the body's
/// radius (scale is applied through the transform) and its material.
fn attach_sphere_visuals(
    mut commands: Commands,
    sim: Res<Simulation>,
    asset_server: Res<AssetServer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    q: Query<(Entity, &SphereBody, &SphereSkin), Without<SphereVisual>>,
) {
    for (entity, body, skin) in q.iter() {
        let Some(b) = sim.body(body.0) else {
            warn!(?body, "sphere entity without arena record");
            continue;
        };
        let mesh = meshes.add(Sphere::new(b.radius).mesh().uv(32, 32));
        let material = match skin {
            SphereSkin::Texture(path) => materials.add(StandardMaterial {
                base_color_texture: Some(asset_server.load(path.clone())),
                ..default()
            }),
            SphereSkin::Flat([r, g, bl]) => materials.add(Color::srgb(*r, *g, *bl)),
        };
        commands
            .entity(entity)
            .insert((Mesh3d(mesh), MeshMaterial3d(material), SphereVisual));
    }
}

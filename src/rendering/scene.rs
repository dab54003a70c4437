use bevy::prelude::*;

use crate::core::config::GameConfig;

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_scene);
    }
}

/// Camera, key light and background. The projection matches the `CameraRig`
/// the picker casts through.
fn setup_scene(mut commands: Commands, cfg: Res<GameConfig>) {
    let [r, g, b] = cfg.scene.background;
    commands.insert_resource(ClearColor(Color::srgb(r, g, b)));

    let cam = &cfg.camera;
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: cam.fov_degrees.to_radians(),
            near: cam.near,
            far: cam.far,
            ..default()
        }),
        Transform::from_xyz(0.0, 0.0, cam.z).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    let [lx, ly, lz] = cfg.scene.light_position;
    commands.spawn((
        DirectionalLight {
            illuminance: cfg.scene.light_illuminance,
            ..default()
        },
        Transform::from_xyz(lx, ly, lz).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

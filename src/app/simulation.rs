//! Frame driver: owns the body arena and the context every frame needs.

use bevy::math::Ray3d;
use bevy::prelude::*;

use crate::core::bounds::{BoundsError, DomainBounds};
use crate::core::components::{BodyId, SphereBody};
use crate::core::config::{GameConfig, HoverConfig};
use crate::core::system::system_order::{PointerInputSet, RenderSyncSet, SimulationStepSet};
use crate::gameplay::body::HopBody;
use crate::interaction::picker::{pick_along, CameraRig};
use crate::interaction::pointer::LatestPointer;

/// What the renderer needs of one body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodySnapshot {
    pub id: BodyId,
    pub position: Vec3,
    pub scale: f32,
    pub hovered: bool,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrameReport {
    pub bodies: usize,
    pub hovered: usize,
}

/// Explicit simulation context: bounds, camera, hover tuning, pointer slot and
/// the bodies in creation order. Several can coexist (one per `App`).
#[derive(Resource, Debug, Clone)]
pub struct Simulation {
    bounds: DomainBounds,
    camera: CameraRig,
    hover: HoverConfig,
    pointer: LatestPointer,
    bodies: Vec<HopBody>,
    frames: u64,
}

impl Simulation {
    pub fn new(bounds: DomainBounds, camera: CameraRig, hover: HoverConfig) -> Self {
        Self {
            bounds,
            camera,
            hover,
            pointer: LatestPointer::default(),
            bodies: Vec::new(),
            frames: 0,
        }
    }

    /// Derive camera and bounds from config. Degenerate camera settings are fatal.
    pub fn from_config(cfg: &GameConfig) -> Result<Self, BoundsError> {
        let camera = CameraRig::from_config(&cfg.camera, &cfg.window);
        let bounds = DomainBounds::compute(
            camera.fov_degrees,
            camera.aspect_ratio,
            camera.reference_depth(),
        )?;
        Ok(Self::new(bounds, camera, cfg.hover))
    }

    #[inline]
    pub fn bounds(&self) -> &DomainBounds {
        &self.bounds
    }

    #[inline]
    pub fn camera(&self) -> &CameraRig {
        &self.camera
    }

    #[inline]
    pub fn hover(&self) -> &HoverConfig {
        &self.hover
    }

    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Add a body to the arena. Rendering is attached separately.
    pub fn register(&mut self, body: HopBody) -> BodyId {
        self.bodies.push(body);
        BodyId(self.bodies.len() - 1)
    }

    pub fn body(&self, id: BodyId) -> Option<&HopBody> {
        self.bodies.get(id.0)
    }

    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut HopBody> {
        self.bodies.get_mut(id.0)
    }

    pub fn bodies(&self) -> &[HopBody] {
        &self.bodies
    }

    /// Store the pointer as a ray through the rig. Non-finite NDC means off-screen.
    pub fn set_pointer_ndc(&mut self, ndc: Vec2) {
        if ndc.is_finite() {
            self.pointer.set(self.camera.ray_through_ndc(ndc));
        } else {
            self.pointer.clear();
        }
    }

    /// Store a pointer ray cast by the live camera.
    pub fn set_pointer_ray(&mut self, ray: Ray3d) {
        self.pointer.set(ray);
    }

    pub fn pointer(&self) -> Option<Ray3d> {
        self.pointer.get()
    }

    /// Follow the real viewport shape for picking. Bounds stay as computed at startup.
    pub fn set_viewport_aspect(&mut self, aspect_ratio: f32) {
        if aspect_ratio.is_finite() && aspect_ratio > 0.0 {
            self.camera.aspect_ratio = aspect_ratio;
        }
    }

    /// One frame: pick with the latest pointer, mark hover, then update every
    /// body in creation order.
    pub fn frame(&mut self, now: f64) -> FrameReport {
        let hits = pick_along(self.pointer.get(), self.camera.far, &self.bodies);
        for body in self.bodies.iter_mut() {
            body.hovered = false;
        }
        for hit in &hits {
            self.bodies[hit.body.0].hovered = true;
        }
        for body in self.bodies.iter_mut() {
            body.update(&self.bounds, now, &self.hover);
        }
        self.frames += 1;
        FrameReport {
            bodies: self.bodies.len(),
            hovered: hits.len(),
        }
    }

    pub fn snapshots(&self) -> impl Iterator<Item = BodySnapshot> + '_ {
        self.bodies.iter().enumerate().map(|(i, b)| BodySnapshot {
            id: BodyId(i),
            position: b.position,
            scale: b.scale,
            hovered: b.hovered,
        })
    }

    pub fn hovered_ids(&self) -> impl Iterator<Item = BodyId> + '_ {
        self.snapshots().filter(|s| s.hovered).map(|s| s.id)
    }
}

/// Last frame's summary, for logging and host-side feedback.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct FrameStats(pub FrameReport);

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FrameStats>()
            .configure_sets(
                Update,
                (PointerInputSet, SimulationStepSet, RenderSyncSet).chain(),
            )
            .add_systems(Update, advance_simulation.in_set(SimulationStepSet))
            .add_systems(Update, sync_body_transforms.in_set(RenderSyncSet));
    }
}

fn advance_simulation(
    time: Res<Time>,
    mut sim: ResMut<Simulation>,
    mut stats: ResMut<FrameStats>,
) {
    stats.0 = sim.frame(time.elapsed_secs_f64());
}

/// Render hand-off: copy each body's position and uniform scale onto its entity.
pub fn sync_body_transforms(
    sim: Res<Simulation>,
    mut q: Query<(&SphereBody, &mut Transform)>,
) {
    for (body, mut tf) in q.iter_mut() {
        let Some(b) = sim.body(body.0) else {
            continue;
        };
        tf.translation = b.position;
        tf.scale = Vec3::splat(b.scale);
    }
}

//! Pointer ray picking against the sphere bodies.

use bevy::math::{Dir3, Ray3d};
use bevy::prelude::*;
use smallvec::SmallVec;

use crate::core::components::BodyId;
use crate::core::config::{CameraConfig, WindowConfig};
use crate::gameplay::body::HopBody;

/// Pure description of the perspective camera the scene is viewed through.
/// Looks down -Z with +Y up; `fov_degrees` is the vertical field of view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRig {
    pub position: Vec3,
    pub fov_degrees: f32,
    pub aspect_ratio: f32,
    pub near: f32,
    pub far: f32,
}

impl CameraRig {
    pub fn from_config(camera: &CameraConfig, window: &WindowConfig) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, camera.z),
            fov_degrees: camera.fov_degrees,
            aspect_ratio: window.aspect_ratio(),
            near: camera.near,
            far: camera.far,
        }
    }

    /// Distance from the camera to the z = 0 plane bodies hop on.
    #[inline]
    pub fn reference_depth(&self) -> f32 {
        self.position.z
    }

    #[inline]
    fn half_extents(&self) -> Vec2 {
        let half_h = (self.fov_degrees.to_radians() * 0.5).tan();
        Vec2::new(half_h * self.aspect_ratio, half_h)
    }

    /// Ray from the camera through a point given in normalized device coordinates.
    pub fn ray_through_ndc(&self, ndc: Vec2) -> Ray3d {
        let dir = (ndc * self.half_extents()).extend(-1.0);
        Ray3d::new(self.position, Dir3::new(dir).unwrap_or(Dir3::NEG_Z))
    }

    /// Inverse of [`Self::ray_through_ndc`]; `None` for points at or behind the camera.
    pub fn project_to_ndc(&self, world: Vec3) -> Option<Vec2> {
        let v = world - self.position;
        if v.z >= 0.0 {
            return None;
        }
        let depth = -v.z;
        Some(v.truncate() / depth / self.half_extents())
    }
}

/// Convert a window cursor position (top-left origin, logical pixels) to NDC (y up).
pub fn cursor_to_ndc(cursor: Vec2, window_size: Vec2) -> Option<Vec2> {
    if window_size.x <= 0.0 || window_size.y <= 0.0 {
        return None;
    }
    Some(Vec2::new(
        cursor.x / window_size.x * 2.0 - 1.0,
        -(cursor.y / window_size.y) * 2.0 + 1.0,
    ))
}

/// Nearest non-negative hit distance along `ray` for a sphere, if any.
/// A ray starting inside the sphere reports the exit point.
pub fn ray_sphere(ray: &Ray3d, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray.origin - center;
    let b = oc.dot(*ray.direction);
    let c = oc.length_squared() - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sq = disc.sqrt();
    let near = -b - sq;
    if near >= 0.0 {
        return Some(near);
    }
    let far = -b + sq;
    (far >= 0.0).then_some(far)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickHit {
    pub body: BodyId,
    pub distance: f32,
}

pub type PickHits = SmallVec<[PickHit; 8]>;

/// Bodies under the pointer, nearest first. No pointer yet -> nothing hovered.
pub fn pick(pointer: Option<Vec2>, camera: &CameraRig, bodies: &[HopBody]) -> PickHits {
    let ray = pointer
        .filter(|ndc| ndc.is_finite())
        .map(|ndc| camera.ray_through_ndc(ndc));
    pick_along(ray, camera.far, bodies)
}

/// Bodies hit by `ray` within `far`, nearest first.
pub fn pick_along(ray: Option<Ray3d>, far: f32, bodies: &[HopBody]) -> PickHits {
    let mut hits = PickHits::new();
    let Some(ray) = ray else {
        return hits;
    };
    for (i, body) in bodies.iter().enumerate() {
        if let Some(distance) = ray_sphere(&ray, body.position, body.scaled_radius()) {
            if distance <= far {
                hits.push(PickHit {
                    body: BodyId(i),
                    distance,
                });
            }
        }
    }
    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    hits
}

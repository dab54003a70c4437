use bevy::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

/// Index of a body in the simulation arena (creation order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub usize);

/// Links a rendered entity to its body record in the arena.
#[derive(Component, Debug, Deref, Copy, Clone, PartialEq, Eq)]
pub struct SphereBody(pub BodyId);

/// Surface chosen for a sphere at creation.
#[derive(Component, Debug, Clone, PartialEq)]
pub enum SphereSkin {
    /// Texture path relative to the asset root.
    Texture(String),
    /// sRGB fallback when no textures are configured.
    Flat([f32; 3]),
}

/// Tag for the mesh/material pair attached once a body is registered for rendering.
#[derive(Component, Debug)]
pub struct SphereVisual;

/// Shared RNG for startup sampling. Seeded when the config carries a seed.
#[derive(Resource, Deref, DerefMut)]
pub struct SimRng(pub StdRng);

impl SimRng {
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self(StdRng::seed_from_u64(s)),
            None => Self(StdRng::from_entropy()),
        }
    }
}

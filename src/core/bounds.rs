//! Horizontal strip visible at the hop plane.

use std::fmt;

/// Horizontal interval the spheres hop within, plus the visible height used to
/// size hop arcs. Symmetric about the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomainBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundsError {
    FieldOfView(f32),
    AspectRatio(f32),
    ReferenceDepth(f32),
}

impl fmt::Display for BoundsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundsError::FieldOfView(v) => {
                write!(f, "field of view {v} degrees outside (0, 180)")
            }
            BoundsError::AspectRatio(v) => write!(f, "aspect ratio {v} must be finite and > 0"),
            BoundsError::ReferenceDepth(v) => {
                write!(f, "reference depth {v} must be finite and > 0")
            }
        }
    }
}

impl std::error::Error for BoundsError {}

impl DomainBounds {
    /// Width visible at `reference_depth` is `2 * depth * tan(fov / 2)`; height is
    /// width over aspect.
    pub fn compute(
        fov_degrees: f32,
        aspect_ratio: f32,
        reference_depth: f32,
    ) -> Result<Self, BoundsError> {
        if !(fov_degrees > 0.0 && fov_degrees < 180.0) {
            return Err(BoundsError::FieldOfView(fov_degrees));
        }
        if !(aspect_ratio.is_finite() && aspect_ratio > 0.0) {
            return Err(BoundsError::AspectRatio(aspect_ratio));
        }
        if !(reference_depth.is_finite() && reference_depth > 0.0) {
            return Err(BoundsError::ReferenceDepth(reference_depth));
        }
        let width = 2.0 * reference_depth * (fov_degrees.to_radians() * 0.5).tan();
        let half = width * 0.5;
        Ok(Self {
            min_x: -half,
            max_x: half,
            height: width / aspect_ratio,
        })
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    #[inline]
    pub fn contains_x(&self, x: f32) -> bool {
        (self.min_x..=self.max_x).contains(&x)
    }

    #[inline]
    pub fn clamp_x(&self, x: f32) -> f32 {
        x.clamp(self.min_x, self.max_x)
    }
}

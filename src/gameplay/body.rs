//! Per-sphere hop state machine.
//!
//! A body is always either waiting for its first hop (`jump_start == None`) or
//! mid-hop. Completing a hop plans the next one in the same update, so there is
//! no resting state between hops.

use bevy::prelude::*;
use rand::Rng;
use std::f32::consts::PI;

use crate::core::bounds::DomainBounds;
use crate::core::config::{BodyConfig, HoverConfig};

/// Smallest radius handed out at creation; keeps picking spheres non-degenerate.
pub const MIN_RADIUS: f32 = 1e-3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HopDirection {
    Left,
    Right,
}

impl HopDirection {
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            HopDirection::Left => -1.0,
            HopDirection::Right => 1.0,
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.gen_bool(0.5) {
            HopDirection::Right
        } else {
            HopDirection::Left
        }
    }
}

/// Where and when the current hop began.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpStart {
    /// Seconds since app start. Kept in f64 so long sessions keep sub-frame resolution.
    pub time: f64,
    pub position: Vec3,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HopBody {
    pub radius: f32,
    pub direction: HopDirection,
    pub step_distance: f32,
    pub arc_height: f32,
    pub jump_duration: f32,
    pub jump_start: Option<JumpStart>,
    pub target: Vec3,
    pub position: Vec3,
    pub scale: f32,
    pub hovered: bool,
}

impl HopBody {
    /// Fresh body resting on the baseline at `x`, no hop in progress.
    pub fn new(
        x: f32,
        radius: f32,
        direction: HopDirection,
        step_distance: f32,
        arc_height: f32,
        jump_duration: f32,
    ) -> Self {
        let position = Vec3::new(x, 0.0, 0.0);
        Self {
            radius,
            direction,
            step_distance,
            arc_height,
            jump_duration,
            jump_start: None,
            target: position,
            position,
            scale: 1.0,
            hovered: false,
        }
    }

    /// Draw every per-body parameter from `cfg`; the start x is uniform over the bounds.
    pub fn initialize<R: Rng + ?Sized>(
        bounds: &DomainBounds,
        cfg: &BodyConfig,
        hover: &HoverConfig,
        rng: &mut R,
    ) -> Self {
        let radius = cfg.radius_range.sample(rng).max(MIN_RADIUS);
        let direction = HopDirection::random(rng);
        let step_distance = cfg.step_distance_range.sample(rng);
        let arc_max = bounds.height * cfg.arc_height_max_fraction;
        let arc_height = if arc_max > cfg.arc_height_min {
            rng.gen_range(cfg.arc_height_min..arc_max)
        } else {
            cfg.arc_height_min
        };
        let jump_duration = cfg.jump_duration_range.sample(rng);
        let x = rng.gen_range(bounds.min_x..=bounds.max_x);
        let mut body = Self::new(x, radius, direction, step_distance, arc_height, jump_duration);
        body.scale = hover.rest_scale;
        body
    }

    #[inline]
    pub fn hop_in_progress(&self) -> bool {
        self.jump_start.is_some()
    }

    /// Start a hop from the current position. Targets past an edge are clamped
    /// onto it and the direction flips, so the body never leaves the strip.
    pub fn plan_next_hop(&mut self, bounds: &DomainBounds, now: f64) {
        self.jump_start = Some(JumpStart {
            time: now,
            position: self.position,
        });
        let mut next_x = self.position.x + self.step_distance * self.direction.sign();
        if next_x > bounds.max_x {
            next_x = bounds.max_x;
            self.direction = HopDirection::Left;
        } else if next_x < bounds.min_x {
            next_x = bounds.min_x;
            self.direction = HopDirection::Right;
        }
        self.target = Vec3::new(next_x, 0.0, 0.0);
    }

    /// Half-sine arc: linear on x/z, `sin(pi * t) * arc_height` on y.
    pub fn arc_position_at(&self, t: f32) -> Vec3 {
        let start = self.jump_start.map_or(self.position, |j| j.position);
        if t <= 0.0 {
            return start;
        }
        if t >= 1.0 {
            return self.target;
        }
        let mut pos = start.lerp(self.target, t);
        pos.y += (PI * t).sin() * self.arc_height;
        pos
    }

    /// Normalized progress through the current hop at `now`, in `[0, 1]`.
    pub fn progress_at(&self, now: f64) -> f32 {
        let Some(start) = self.jump_start else {
            return 0.0;
        };
        if self.jump_duration <= 0.0 {
            return 1.0;
        }
        (((now - start.time) / f64::from(self.jump_duration)) as f32).clamp(0.0, 1.0)
    }

    /// Advance to `now`: move along the arc, re-plan on completion, ease the scale.
    pub fn update(&mut self, bounds: &DomainBounds, now: f64, hover: &HoverConfig) {
        if !self.hop_in_progress() {
            self.plan_next_hop(bounds, now);
        }
        let t = self.progress_at(now);
        let mut pos = self.arc_position_at(t);
        pos.x = bounds.clamp_x(pos.x);
        self.position = pos;
        if t >= 1.0 {
            self.plan_next_hop(bounds, now);
        }

        // Per-call factor, not scaled by frame time.
        let target_scale = if self.hovered {
            hover.hover_scale
        } else {
            hover.rest_scale
        };
        self.scale += (target_scale - self.scale) * hover.smoothing;
    }

    /// Radius of the sphere as currently drawn.
    #[inline]
    pub fn scaled_radius(&self) -> f32 {
        self.radius * self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn bounds_2() -> DomainBounds {
        DomainBounds {
            min_x: -2.0,
            max_x: 2.0,
            height: 2.25,
        }
    }

    fn body_at(x: f32, direction: HopDirection) -> HopBody {
        HopBody::new(x, 0.5, direction, 1.0, 0.4, 0.5)
    }

    #[test]
    fn initialize_draws_within_ranges() {
        let bounds = DomainBounds::compute(75.0, 16.0 / 9.0, 5.0).unwrap();
        let cfg = BodyConfig::default();
        let hover = HoverConfig::default();
        let mut rng = StdRng::seed_from_u64(11);
        let mut lefts = 0;
        for _ in 0..500 {
            let b = HopBody::initialize(&bounds, &cfg, &hover, &mut rng);
            assert!(b.radius > 0.0 && b.radius < 1.0);
            assert!((0.5..1.5).contains(&b.step_distance));
            assert!(b.arc_height >= 0.3 && b.arc_height < bounds.height * 0.5);
            assert!((0.5..1.0).contains(&b.jump_duration));
            assert!(bounds.contains_x(b.position.x));
            assert_eq!(b.position.y, 0.0);
            assert_eq!(b.position.z, 0.0);
            assert!(b.jump_start.is_none());
            assert_eq!(b.scale, 1.0);
            if b.direction == HopDirection::Left {
                lefts += 1;
            }
        }
        assert!(lefts > 150 && lefts < 350, "direction skewed: {lefts}/500");
    }

    #[test]
    fn initialize_handles_short_domain() {
        // Visible height so small the arc range collapses onto its minimum.
        let bounds = DomainBounds {
            min_x: -1.0,
            max_x: 1.0,
            height: 0.2,
        };
        let mut rng = StdRng::seed_from_u64(1);
        let b = HopBody::initialize(
            &bounds,
            &BodyConfig::default(),
            &HoverConfig::default(),
            &mut rng,
        );
        assert_eq!(b.arc_height, 0.3);
    }

    #[test]
    fn reflection_at_upper_bound() {
        // step 1.0, heading right from max_x - 0.5 with max_x = 2.0
        let mut b = body_at(1.5, HopDirection::Right);
        b.plan_next_hop(&bounds_2(), 0.0);
        assert_eq!(b.target.x, 2.0);
        assert_eq!(b.direction, HopDirection::Left);
        assert_eq!(b.jump_start.unwrap().position.x, 1.5);
    }

    #[test]
    fn reflection_at_lower_bound() {
        let mut b = body_at(-1.2, HopDirection::Left);
        b.plan_next_hop(&bounds_2(), 3.0);
        assert_eq!(b.target.x, -2.0);
        assert_eq!(b.direction, HopDirection::Right);
        assert_eq!(b.jump_start.unwrap().time, 3.0);
    }

    #[test]
    fn interior_hop_keeps_direction() {
        let mut b = body_at(0.0, HopDirection::Right);
        b.plan_next_hop(&bounds_2(), 0.0);
        assert_eq!(b.target, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(b.direction, HopDirection::Right);
    }

    #[test]
    fn landing_exactly_on_bound_does_not_flip() {
        let mut b = body_at(1.0, HopDirection::Right);
        b.plan_next_hop(&bounds_2(), 0.0);
        assert_eq!(b.target.x, 2.0);
        assert_eq!(b.direction, HopDirection::Right);
        // the following hop overshoots and reflects in place
        b.position = b.target;
        b.plan_next_hop(&bounds_2(), 1.0);
        assert_eq!(b.target.x, 2.0);
        assert_eq!(b.direction, HopDirection::Left);
    }

    #[test]
    fn arc_endpoints_and_peak() {
        let mut b = body_at(-1.0, HopDirection::Right);
        b.plan_next_hop(&bounds_2(), 0.0);
        let start = b.jump_start.unwrap().position;
        assert_eq!(b.arc_position_at(0.0).y, start.y);
        assert_eq!(b.arc_position_at(0.0), start);
        assert_eq!(b.arc_position_at(1.0).y, b.target.y);
        assert_eq!(b.arc_position_at(1.0), b.target);
        let mid = b.arc_position_at(0.5);
        assert!((mid.y - (start.y + b.arc_height)).abs() < 1e-6);
        assert!((mid.x - (-0.5)).abs() < 1e-6);
        // symmetric up/down
        let a = b.arc_position_at(0.25).y;
        let c = b.arc_position_at(0.75).y;
        assert!((a - c).abs() < 1e-6);
    }

    #[test]
    fn first_update_plans_and_stays_on_baseline() {
        let mut b = body_at(0.0, HopDirection::Right);
        let hover = HoverConfig::default();
        b.update(&bounds_2(), 10.0, &hover);
        assert!(b.hop_in_progress());
        assert_eq!(b.jump_start.unwrap().time, 10.0);
        assert_eq!(b.position, Vec3::ZERO);
    }

    #[test]
    fn mid_hop_position_follows_arc() {
        let mut b = body_at(0.0, HopDirection::Right);
        let hover = HoverConfig::default();
        b.update(&bounds_2(), 0.0, &hover);
        b.update(&bounds_2(), 0.25, &hover); // t = 0.5
        assert!((b.position.x - 0.5).abs() < 1e-6);
        assert!((b.position.y - 0.4).abs() < 1e-6);
    }

    #[test]
    fn completed_hop_replans_in_same_call() {
        let mut b = body_at(0.0, HopDirection::Right);
        let hover = HoverConfig::default();
        b.update(&bounds_2(), 0.0, &hover);
        // exactly one duration later: t clamps to 1.0
        b.update(&bounds_2(), 0.5, &hover);
        assert_eq!(b.position, Vec3::new(1.0, 0.0, 0.0));
        let js = b.jump_start.unwrap();
        assert_eq!(js.time, 0.5);
        assert_eq!(js.position, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(b.target, Vec3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn late_frame_clamps_progress() {
        let mut b = body_at(0.0, HopDirection::Right);
        let hover = HoverConfig::default();
        b.update(&bounds_2(), 0.0, &hover);
        b.update(&bounds_2(), 7.0, &hover);
        assert_eq!(b.position, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(b.jump_start.unwrap().time, 7.0);
    }

    #[test]
    fn stays_within_bounds_over_many_frames() {
        let bounds = DomainBounds::compute(75.0, 16.0 / 9.0, 5.0).unwrap();
        let hover = HoverConfig::default();
        let mut rng = StdRng::seed_from_u64(99);
        let mut bodies: Vec<HopBody> = (0..20)
            .map(|_| HopBody::initialize(&bounds, &BodyConfig::default(), &hover, &mut rng))
            .collect();
        let mut now = 0.0_f64;
        for frame in 0..3_000 {
            now += if frame % 7 == 0 { 0.21 } else { 1.0 / 60.0 };
            for b in bodies.iter_mut() {
                b.update(&bounds, now, &hover);
                assert!(
                    bounds.contains_x(b.position.x),
                    "x {} escaped [{}, {}]",
                    b.position.x,
                    bounds.min_x,
                    bounds.max_x
                );
                assert!(b.position.y >= 0.0);
                assert!(bounds.contains_x(b.target.x));
            }
        }
    }

    #[test]
    fn progress_advances_every_frame_after_long_uptime() {
        // roughly 11.6 days in: f32 seconds would only resolve 62.5 ms here
        let start = 1.0e6_f64;
        let mut b = body_at(0.0, HopDirection::Right);
        b.plan_next_hop(&bounds_2(), start);
        let mut prev = b.progress_at(start);
        for frame in 1..30 {
            let now = start + f64::from(frame) / 60.0;
            let t = b.progress_at(now);
            assert!(t > prev, "frame {frame}: t stuck at {t}");
            let expected = (f64::from(frame) / 60.0 / 0.5) as f32;
            assert!((t - expected).abs() < 1e-4, "frame {frame}: {t} vs {expected}");
            prev = t;
        }
    }

    #[test]
    fn long_uptime_update_moves_every_frame() {
        let hover = HoverConfig::default();
        let mut b = body_at(0.0, HopDirection::Right);
        let mut now = 1.0e6_f64;
        b.update(&bounds_2(), now, &hover);
        let mut prev_x = b.position.x;
        for _ in 0..29 {
            now += 1.0 / 60.0;
            b.update(&bounds_2(), now, &hover);
            assert_ne!(b.position.x, prev_x);
            prev_x = b.position.x;
        }
    }

    #[test]
    fn hover_scale_converges_without_overshoot() {
        let hover = HoverConfig::default();
        let mut b = body_at(0.0, HopDirection::Right);
        b.hovered = true;
        let mut prev = b.scale;
        for _ in 0..200 {
            b.update(&bounds_2(), 0.0, &hover);
            assert!(b.scale >= prev);
            assert!(b.scale <= hover.hover_scale);
            prev = b.scale;
        }
        assert!((b.scale - hover.hover_scale).abs() < 1e-4);

        b.hovered = false;
        for _ in 0..200 {
            b.update(&bounds_2(), 0.0, &hover);
            assert!(b.scale <= prev);
            assert!(b.scale >= hover.rest_scale);
            prev = b.scale;
        }
        assert!((b.scale - hover.rest_scale).abs() < 1e-4);
    }

    #[test]
    fn hover_scale_first_step_is_fixed_fraction() {
        let hover = HoverConfig::default();
        let mut b = body_at(0.0, HopDirection::Right);
        b.hovered = true;
        b.update(&bounds_2(), 0.0, &hover);
        // 1.0 + (1.7 - 1.0) * 0.2
        assert!((b.scale - 1.14).abs() < 1e-6);
        assert!((b.scaled_radius() - 0.57).abs() < 1e-6);
    }
}

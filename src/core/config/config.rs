use bevy::prelude::*;
use rand::Rng;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    /// Automatically close the app after this many seconds. 0.0 (or omitted) = run indefinitely.
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            title: "Hopping Spheres".into(),
            auto_close: 0.0,
        }
    }
}
impl WindowConfig {
    pub fn aspect_ratio(&self) -> f32 {
        self.width / self.height
    }
}

/// Perspective camera looking down -Z from `(0, 0, z)`.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Camera distance from the z = 0 plane the spheres hop on.
    pub z: f32,
}
impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
            z: 5.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    /// sRGB clear color.
    pub background: [f32; 3],
    pub light_position: [f32; 3],
    pub light_illuminance: f32,
}
impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            // 0xadd8e6
            background: [0.678, 0.847, 0.902],
            light_position: [3.0, 5.0, 5.0],
            light_illuminance: 4_000.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SpawnRange<T> {
    pub min: T,
    pub max: T,
}
impl<T: Default> Default for SpawnRange<T> {
    fn default() -> Self {
        Self {
            min: Default::default(),
            max: Default::default(),
        }
    }
}
impl SpawnRange<f32> {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Uniform sample in `[min, max)`. Empty or inverted ranges yield `min`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        if self.max > self.min {
            rng.gen_range(self.min..self.max)
        } else {
            self.min
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BodyConfig {
    pub count: usize,
    pub radius_range: SpawnRange<f32>,
    pub step_distance_range: SpawnRange<f32>,
    /// Lower bound of the hop peak height.
    pub arc_height_min: f32,
    /// Upper bound of the hop peak height as a fraction of the visible domain height.
    pub arc_height_max_fraction: f32,
    pub jump_duration_range: SpawnRange<f32>,
    /// Texture paths relative to the asset root. Picked uniformly with replacement per body.
    pub textures: Vec<String>,
}
impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            count: 10,
            radius_range: SpawnRange::new(0.0, 1.0),
            step_distance_range: SpawnRange::new(0.5, 1.5),
            arc_height_min: 0.3,
            arc_height_max_fraction: 0.5,
            jump_duration_range: SpawnRange::new(0.5, 1.0),
            textures: [
                "1060.jpg",
                "9562.jpg",
                "basketball-ball.jpg",
                "black-shine-balls-background.jpg",
                "blue_voronoi_pattern_background.jpg",
                "close-up-texture-citrus-fruit-skin.jpg",
                "green-fake-grass-background.jpg",
                "O4YIO70.jpg",
            ]
            .iter()
            .map(|name| format!("textures/{name}"))
            .collect(),
        }
    }
}

/// Exponential hover scaling, applied once per frame.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct HoverConfig {
    pub hover_scale: f32,
    pub rest_scale: f32,
    /// Fraction of the remaining distance to the target scale covered per frame.
    pub smoothing: f32,
}
impl Default for HoverConfig {
    fn default() -> Self {
        Self {
            hover_scale: 1.7,
            rest_scale: 1.0,
            smoothing: 0.2,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Seconds between periodic stats log lines.
    pub log_interval: f32,
    pub draw_bounds: bool,
}
impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_interval: 2.0,
            draw_bounds: true,
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq, Default)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub scene: SceneConfig,
    pub bodies: BodyConfig,
    pub hover: HoverConfig,
    pub debug: DebugConfig,
    /// Fixed RNG seed for reproducible runs; entropy when absent.
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Merge several RON files (later files override earlier keys) into one config.
    /// Returns the config, the paths actually used, and non-fatal errors.
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();
        fn merge_value(base: &mut Value, overlay: Value) {
            match (base, overlay) {
                (Value::Map(bm), Value::Map(om)) => {
                    for (k, v) in om.into_iter() {
                        let mut incoming = Some(v);
                        if let Some((_, ev)) = bm.iter_mut().find(|(ek, _)| **ek == k) {
                            if let Some(val) = incoming.take() {
                                merge_value(ev, val);
                            }
                        }
                        if let Some(val) = incoming {
                            bm.insert(k, val);
                        }
                    }
                }
                (b, o) => *b = o,
            }
        }
        for p in paths {
            let path_ref = p.as_ref();
            match fs::read_to_string(path_ref) {
                Ok(txt) => match ron::from_str::<Value>(&txt) {
                    Ok(val) => {
                        match &mut merged {
                            Some(cur) => merge_value(cur, val),
                            None => merged = Some(val),
                        }
                        used.push(path_ref.display().to_string());
                    }
                    Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
                },
                Err(e) => errors.push(format!("{}: read error: {e}", path_ref.display())),
            }
        }
        let Some(val) = merged else {
            return (GameConfig::default(), used, errors);
        };
        match val.into_rust::<GameConfig>() {
            Ok(cfg) => (cfg, used, errors),
            Err(e) => {
                errors.push(format!(
                    "failed to deserialize merged config; using defaults: {e}"
                ));
                (GameConfig::default(), used, errors)
            }
        }
    }

    /// Non-fatal sanity checks. Fatal camera problems surface later as `BoundsError`.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        }
        let cam = &self.camera;
        if !(cam.fov_degrees > 0.0 && cam.fov_degrees < 180.0) {
            w.push(format!(
                "camera.fov_degrees {} outside (0, 180)",
                cam.fov_degrees
            ));
        }
        if cam.near <= 0.0 || cam.far <= cam.near {
            w.push(format!(
                "camera clip planes invalid: near {} far {}",
                cam.near, cam.far
            ));
        }
        if cam.z <= cam.near {
            w.push(format!(
                "camera.z {} must exceed camera.near {} to see the hop plane",
                cam.z, cam.near
            ));
        }
        if self.bodies.count == 0 {
            w.push("bodies.count is 0; nothing will spawn".into());
        }
        if self.bodies.count > 10_000 {
            w.push(format!(
                "bodies.count {} very high; picking is linear per frame",
                self.bodies.count
            ));
        }
        fn check_range_f32(w: &mut Vec<String>, label: &str, r: &SpawnRange<f32>) {
            if r.min > r.max {
                w.push(format!(
                    "{label} min ({}) greater than max ({})",
                    r.min, r.max
                ));
            }
            if (r.max - r.min).abs() < f32::EPSILON {
                w.push(format!("{label} min == max ({}) -> zero variation", r.min));
            }
        }
        let b = &self.bodies;
        check_range_f32(&mut w, "bodies.radius_range", &b.radius_range);
        if b.radius_range.max <= 0.0 {
            w.push("bodies.radius_range.max must be > 0".into());
        }
        check_range_f32(&mut w, "bodies.step_distance_range", &b.step_distance_range);
        if b.step_distance_range.min <= 0.0 {
            w.push("bodies.step_distance_range.min must be > 0 or spheres may stall".into());
        }
        check_range_f32(&mut w, "bodies.jump_duration_range", &b.jump_duration_range);
        if b.jump_duration_range.min <= 0.0 {
            w.push("bodies.jump_duration_range.min must be > 0".into());
        }
        if b.arc_height_min < 0.0 {
            w.push(format!("bodies.arc_height_min {} negative", b.arc_height_min));
        }
        if b.arc_height_max_fraction <= 0.0 {
            w.push("bodies.arc_height_max_fraction must be > 0".into());
        }
        if b.textures.is_empty() {
            w.push("bodies.textures empty; spheres fall back to flat colors".into());
        }
        let h = &self.hover;
        if !(h.smoothing > 0.0 && h.smoothing <= 1.0) {
            w.push(format!(
                "hover.smoothing {} outside (0, 1]; scale would stall or overshoot",
                h.smoothing
            ));
        }
        if h.hover_scale <= 0.0 || h.rest_scale <= 0.0 {
            w.push("hover scales must be > 0".into());
        }
        if self.debug.log_interval <= 0.0 {
            w.push("debug.log_interval must be > 0".into());
        }
        w
    }
}

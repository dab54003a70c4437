pub mod config;

pub use config::{
    BodyConfig, CameraConfig, DebugConfig, GameConfig, HoverConfig, SceneConfig, SpawnRange,
    WindowConfig,
};

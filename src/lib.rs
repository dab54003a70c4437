pub mod app;
pub mod core;
pub mod debug;
pub mod gameplay;
pub mod interaction;
pub mod rendering;

// Curated re-exports
pub use crate::app::game::{GamePlugin, SimulationPlugins};
pub use crate::app::simulation::{BodySnapshot, FrameReport, Simulation};
pub use crate::core::bounds::{BoundsError, DomainBounds};
pub use crate::core::config::GameConfig;
pub use crate::gameplay::body::{HopBody, HopDirection};

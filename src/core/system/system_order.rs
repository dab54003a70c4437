//! Central system ordering labels to make the per-frame sequence explicit.
//! Stages (high-level):
//! 1. PointerInput (latest pointer position written into the simulation)
//! 2. SimulationStep (pick, mark hover, advance every body)
//! 3. RenderSync (body positions/scales copied onto transforms)
//! 4. Rendering (implicit)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct PointerInputSet; // single writer of the pointer slot

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct SimulationStepSet; // one frame of the hop state machine

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct RenderSyncSet; // hand-off to the renderer

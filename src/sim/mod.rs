//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, no wall-clock time
//! - Seeded RNG only, drawn in a fixed order
//! - No rendering, audio or telemetry; those react to [`SimEvent`]s

pub mod appendage;
pub mod collision;
pub mod effects;
pub mod flow;
pub mod motion;
pub mod rng;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{CollisionResult, tip_touches};
pub use rng::{RandomSource, SimRng};
pub use state::{
    CurrentStreak, Mode, ScorePopup, SimEvent, SimulationState, Snapshot, Swimmer, SwimmerKind,
};
pub use tick::{TickInput, reset, tick};

//! Spotted Garden Eel - a sea-floor arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (flow, spawning, motion, collisions, modes)
//! - `engine`: Owns the simulation and fans its events out to the sinks
//! - `audio`: Sound cue sink
//! - `telemetry`: Best-effort gameplay event recording
//! - `settings`: Process configuration (seed, player id, logging toggle)

pub mod audio;
pub mod engine;
pub mod settings;
pub mod sim;
pub mod telemetry;

pub use audio::{AudioManager, AudioSink, LogAudio, SilentAudio, SoundEffect};
pub use engine::Engine;
pub use settings::Settings;
pub use telemetry::{LogTelemetry, NullTelemetry, Telemetry, TelemetryPipeline, TelemetrySink};

/// Game configuration constants
pub mod consts {
    /// Name reported with every telemetry record
    pub const GAME_NAME: &str = "spotted-garden-eel";

    /// Screen dimensions
    pub const SCREEN_WIDTH: f64 = 640.0;
    pub const SCREEN_HEIGHT: f64 = 480.0;

    /// Horizontal position of the appendage column (screen center)
    pub const APPENDAGE_X: f64 = SCREEN_WIDTH / 2.0;
    /// Y coordinate of the sea floor the appendage grows out of
    pub const SEA_BOTTOM: f64 = SCREEN_HEIGHT - 50.0;

    /// Appendage length bounds (min is the height of one neck sprite)
    pub const LENGTH_MIN: f64 = 74.0;
    pub const LENGTH_MAX: f64 = 400.0;
    /// Length shown while the title screen is up
    pub const TITLE_LENGTH: f64 = 250.0;
    /// Growth per tick while stretching
    pub const STRETCH_RATE: f64 = 3.0;
    /// Shrink per tick while relaxed
    pub const RETRACT_RATE: f64 = 2.0;

    /// Entities spawn this far outside the screen and die past it
    pub const EDGE_MARGIN: f64 = 50.0;

    /// Initial horizontal flow speed after a reset
    pub const INITIAL_FLOW: f64 = 2.0;
    /// Ticks between flow-change rolls
    pub const FLOW_CHANGE_INTERVAL: u64 = 180;
    /// Ticks between current streak spawns
    pub const STREAK_INTERVAL: u64 = 10;
    /// Ticks between food/predator spawns
    pub const SWIMMER_INTERVAL: u64 = 60;

    /// Popups are removed once their age exceeds this
    pub const POPUP_LIFETIME: u32 = 60;
    /// Length of the eating animation window
    pub const EATING_ANIM_TICKS: u32 = 60;

    /// Streak simulation run before the title screen (30 s at 60 Hz)
    pub const PREWARM_TICKS: u64 = 30 * 60;
    /// Ticks between "still playing" telemetry records
    pub const PROGRESS_INTERVAL: u64 = 600;
}

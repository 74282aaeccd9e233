//! Game state and core simulation types
//!
//! Everything the tick mutates lives in [`SimulationState`]. Nothing here is
//! shared outside the aggregate; renderers read it through [`Snapshot`].

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mode {
    /// Title screen, waiting for a press
    #[default]
    Title,
    /// Active gameplay
    Playing,
    /// Run ended, waiting for a press to return to the title
    GameOver,
}

/// What happens when the appendage tip touches a swimmer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwimmerKind {
    /// Plankton: eaten for a point
    Food,
    /// Sunfish: ends the run
    Predator,
}

/// A drifting food or predator entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Swimmer {
    pub kind: SwimmerKind,
    pub pos: DVec2,
    /// Own velocity, added on top of the flow every tick
    pub swim_vel: DVec2,
}

impl Swimmer {
    pub fn food(pos: DVec2, swim_vel: DVec2) -> Self {
        Self {
            kind: SwimmerKind::Food,
            pos,
            swim_vel,
        }
    }

    pub fn predator(pos: DVec2, swim_vel: DVec2) -> Self {
        Self {
            kind: SwimmerKind::Predator,
            pos,
            swim_vel,
        }
    }
}

/// Decorative current streak. Deeper streaks drift slower.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurrentStreak {
    pub pos: DVec2,
    /// Divides the flow; always >= 1
    pub depth: f64,
}

/// Floating "+1" shown where food was eaten
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScorePopup {
    pub pos: DVec2,
    /// Ticks since the popup appeared
    pub age: u32,
}

/// Complete simulation state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    pub mode: Mode,
    /// Ticks since the last mode change
    pub ticks_in_mode: u64,
    /// Ambient current applied to every entity
    pub flow: DVec2,
    pub appendage_length: f64,
    pub is_stretching: bool,
    /// 0 when idle, otherwise 1..=60 through the eating animation
    pub eating_anim_ticks: u32,
    pub score: u64,
    pub food: Vec<Swimmer>,
    pub predators: Vec<Swimmer>,
    pub streaks: Vec<CurrentStreak>,
    pub popups: Vec<ScorePopup>,
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationState {
    /// Fresh title-screen state with no streaks.
    ///
    /// Use [`crate::sim::reset`] to also pre-warm the current streaks.
    pub fn new() -> Self {
        Self {
            mode: Mode::Title,
            ticks_in_mode: 0,
            flow: DVec2::new(INITIAL_FLOW, 0.0),
            appendage_length: LENGTH_MIN,
            is_stretching: false,
            eating_anim_ticks: 0,
            score: 0,
            food: Vec::new(),
            predators: Vec::new(),
            streaks: Vec::new(),
            popups: Vec::new(),
        }
    }

    /// Fresh state already in `Playing`, handy for driving gameplay directly
    pub fn playing() -> Self {
        Self {
            mode: Mode::Playing,
            ..Self::new()
        }
    }

    /// Switch modes and restart the mode tick counter
    pub fn enter_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.ticks_in_mode = 0;
    }

    /// Y coordinate of the appendage tip
    pub fn tip_y(&self) -> f64 {
        SEA_BOTTOM - self.appendage_length
    }

    /// Whether the flow currently runs left to right
    pub fn flow_rightward(&self) -> bool {
        self.flow.x > 0.0
    }

    /// X coordinate where new entities enter, upstream of the flow
    pub fn upstream_edge(&self) -> f64 {
        if self.flow_rightward() {
            -EDGE_MARGIN
        } else {
            SCREEN_WIDTH + EDGE_MARGIN
        }
    }

    /// Read-only view for renderers
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            mode: self.mode,
            ticks_in_mode: self.ticks_in_mode,
            score: self.score,
            flow: self.flow,
            appendage_length: self.appendage_length,
            is_stretching: self.is_stretching,
            eating_anim_ticks: self.eating_anim_ticks,
            food: &self.food,
            predators: &self.predators,
            streaks: &self.streaks,
            popups: &self.popups,
        }
    }
}

/// Something the tick did that the outside world may want to hear about
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimEvent {
    /// Full reset back to the title screen
    Initialized,
    /// Title -> Playing
    GameStarted,
    /// Stretch pressed during play
    Stretched,
    /// The current reversed; carries the new horizontal speed
    FlowChanged { flow_x: f64 },
    /// Food eaten; carries the new score
    Ate { score: u64 },
    /// Periodic heartbeat while playing
    Progress { ticks: u64, score: u64 },
    /// Predator hit; carries ticks survived and the final score
    GameOver { ticks: u64, score: u64 },
}

/// Borrowed view of the state handed to rendering collaborators
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Snapshot<'a> {
    pub mode: Mode,
    pub ticks_in_mode: u64,
    pub score: u64,
    pub flow: DVec2,
    pub appendage_length: f64,
    pub is_stretching: bool,
    pub eating_anim_ticks: u32,
    pub food: &'a [Swimmer],
    pub predators: &'a [Swimmer],
    pub streaks: &'a [CurrentStreak],
    pub popups: &'a [ScorePopup],
}

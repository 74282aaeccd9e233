//! Fixed timestep simulation tick
//!
//! Core game loop that advances the simulation one frame at a time.

use serde::{Deserialize, Serialize};

use super::rng::RandomSource;
use super::state::{Mode, SimEvent, SimulationState};
use super::{appendage, collision, effects, flow, motion, spawn};
use crate::consts::*;

/// Input edges for a single tick.
///
/// Each flag means "happened this tick", not "is held".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Touch/click/key went down
    pub pressed: bool,
    /// Touch/click/key went up
    pub released: bool,
}

impl TickInput {
    pub fn press() -> Self {
        Self {
            pressed: true,
            released: false,
        }
    }

    pub fn release() -> Self {
        Self {
            pressed: false,
            released: true,
        }
    }
}

/// Advance the game state by one tick, appending anything notable to `events`
pub fn tick(
    state: &mut SimulationState,
    rng: &mut dyn RandomSource,
    input: &TickInput,
    events: &mut Vec<SimEvent>,
) {
    state.ticks_in_mode += 1;

    match state.mode {
        Mode::Title => {
            state.appendage_length = TITLE_LENGTH;

            if input.pressed {
                state.enter_mode(Mode::Playing);
                state.appendage_length = LENGTH_MIN;
                state.score = 0;
                log::info!("Game started");
                events.push(SimEvent::GameStarted);
            }
        }
        Mode::Playing => tick_playing(state, rng, input, events),
        Mode::GameOver => {
            if input.pressed {
                reset(state, rng, events);
            }
        }
    }
}

fn tick_playing(
    state: &mut SimulationState,
    rng: &mut dyn RandomSource,
    input: &TickInput,
    events: &mut Vec<SimEvent>,
) {
    if state.ticks_in_mode.is_multiple_of(PROGRESS_INTERVAL) {
        events.push(SimEvent::Progress {
            ticks: state.ticks_in_mode,
            score: state.score,
        });
    }

    if input.pressed {
        state.is_stretching = true;
        events.push(SimEvent::Stretched);
    }
    if input.released {
        state.is_stretching = false;
    }

    if let Some(flow_x) = flow::perturb(state, rng) {
        events.push(SimEvent::FlowChanged { flow_x });
    }

    appendage::update(state);
    spawn::spawn(state, rng);
    motion::advance(state);

    let collisions = collision::detect(state);
    let first_score = state.score - collisions.eaten_at.len() as u64;
    for (i, _) in collisions.eaten_at.iter().enumerate() {
        events.push(SimEvent::Ate {
            score: first_score + i as u64 + 1,
        });
    }

    effects::update(state, &collisions.eaten_at);

    if collisions.fatal {
        let ticks = state.ticks_in_mode;
        state.enter_mode(Mode::GameOver);
        log::info!("Game over after {} ticks with score {}", ticks, state.score);
        events.push(SimEvent::GameOver {
            ticks,
            score: state.score,
        });
    }
}

/// Reinitialize everything and return to the title screen.
///
/// The current streaks are pre-warmed so the title opens mid-flow.
pub fn reset(state: &mut SimulationState, rng: &mut dyn RandomSource, events: &mut Vec<SimEvent>) {
    *state = SimulationState::new();
    spawn::prewarm_streaks(state, rng);
    log::info!("Initialized with {} pre-warmed streaks", state.streaks.len());
    events.push(SimEvent::Initialized);
}

//! Procedural entity spawner
//!
//! Everything enters at the upstream edge, just off screen. Draw order is
//! fixed: streak y then depth; swimmer kind, y, then swim speed.

use glam::DVec2;

use super::rng::RandomSource;
use super::state::{CurrentStreak, SimulationState, Swimmer};
use crate::consts::*;

/// Vertical spawn band for swimmers, kept above the shortest appendage
const SWIMMER_Y_RANGE: u32 = (SEA_BOTTOM - LENGTH_MIN - EDGE_MARGIN) as u32;

/// Spawn a streak on streak ticks and a swimmer on swimmer ticks
pub fn spawn(state: &mut SimulationState, rng: &mut dyn RandomSource) {
    let x = state.upstream_edge();

    if state.ticks_in_mode.is_multiple_of(STREAK_INTERVAL) {
        let streak = new_streak(x, rng);
        state.streaks.push(streak);
    }

    if state.ticks_in_mode.is_multiple_of(SWIMMER_INTERVAL) {
        let is_predator = rng.next_below(3) == 0;
        let y = f64::from(rng.next_below(SWIMMER_Y_RANGE));
        let swim_x = (f64::from(rng.next_below(11)) - 5.0) / 5.0;
        let pos = DVec2::new(x, y);
        let swim_vel = DVec2::new(swim_x, 0.0);

        if is_predator {
            log::debug!("Predator enters at ({x}, {y}) swimming {swim_x}");
            state.predators.push(Swimmer::predator(pos, swim_vel));
        } else {
            log::debug!("Food enters at ({x}, {y}) swimming {swim_x}");
            state.food.push(Swimmer::food(pos, swim_vel));
        }
    }
}

fn new_streak(x: f64, rng: &mut dyn RandomSource) -> CurrentStreak {
    let y = f64::from(rng.next_below(SEA_BOTTOM as u32));
    let depth = f64::from(1 + rng.next_below(3));
    CurrentStreak {
        pos: DVec2::new(x, y),
        depth,
    }
}

/// Fill the streak collection as if the current had been running for a while,
/// so the title screen opens mid-flow. Only streaks are simulated here.
pub fn prewarm_streaks(state: &mut SimulationState, rng: &mut dyn RandomSource) {
    state.streaks.clear();
    for tick in 0..PREWARM_TICKS {
        if tick.is_multiple_of(STREAK_INTERVAL) {
            let streak = new_streak(state.upstream_edge(), rng);
            state.streaks.push(streak);
        }
        super::motion::advance_streaks(&mut state.streaks, state.flow);
    }
}

//! Flow-driven motion
//!
//! Advance first, then prune: anything not strictly inside the open band
//! `(-EDGE_MARGIN, SCREEN_WIDTH + EDGE_MARGIN)` after moving is dropped.

use glam::DVec2;

use super::state::{CurrentStreak, SimulationState, Swimmer};
use crate::consts::{EDGE_MARGIN, SCREEN_WIDTH};

/// Whether an x coordinate is inside the live band
#[inline]
pub fn in_band(x: f64) -> bool {
    x > -EDGE_MARGIN && x < SCREEN_WIDTH + EDGE_MARGIN
}

/// Move every streak and swimmer one tick
pub fn advance(state: &mut SimulationState) {
    let flow = state.flow;
    advance_streaks(&mut state.streaks, flow);
    advance_swimmers(&mut state.food, flow);
    advance_swimmers(&mut state.predators, flow);
}

/// Streaks drift at `flow / depth`
pub fn advance_streaks(streaks: &mut Vec<CurrentStreak>, flow: DVec2) {
    for streak in streaks.iter_mut() {
        streak.pos += flow / streak.depth;
    }
    streaks.retain(|s| in_band(s.pos.x));
}

/// Swimmers drift with the flow plus their own velocity
pub fn advance_swimmers(swimmers: &mut Vec<Swimmer>, flow: DVec2) {
    for swimmer in swimmers.iter_mut() {
        swimmer.pos += flow + swimmer.swim_vel;
    }
    swimmers.retain(|s| in_band(s.pos.x));
}

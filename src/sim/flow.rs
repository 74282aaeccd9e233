//! Ambient current
//!
//! The flow only ever reverses. When it changes it picks a new speed from
//! {2, 3, 4} and always points the other way.

use super::rng::RandomSource;
use super::state::SimulationState;
use crate::consts::FLOW_CHANGE_INTERVAL;

/// Roll for a flow change on interval ticks.
///
/// Returns the new horizontal speed when the current reversed.
pub fn perturb(state: &mut SimulationState, rng: &mut dyn RandomSource) -> Option<f64> {
    if !state.ticks_in_mode.is_multiple_of(FLOW_CHANGE_INTERVAL) {
        return None;
    }
    if rng.next_below(2) != 0 {
        return None;
    }

    let speed = f64::from(rng.next_below(3) + 2);
    state.flow.x = if state.flow_rightward() { -speed } else { speed };
    log::debug!("Flow changed to {} at tick {}", state.flow.x, state.ticks_in_mode);
    Some(state.flow.x)
}

//! Player appendage length control

use super::state::SimulationState;
use crate::consts::*;

/// Grow while stretching, shrink otherwise, clamped to the length bounds
pub fn update(state: &mut SimulationState) {
    state.appendage_length = if state.is_stretching {
        (state.appendage_length + STRETCH_RATE).min(LENGTH_MAX)
    } else {
        (state.appendage_length - RETRACT_RATE).max(LENGTH_MIN)
    };
}

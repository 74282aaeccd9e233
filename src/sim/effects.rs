//! Short-lived cosmetic timers: score popups and the eating animation

use glam::DVec2;

use super::state::{ScorePopup, SimulationState};
use crate::consts::{EATING_ANIM_TICKS, POPUP_LIFETIME};

/// Age popups and the eating window, then register this tick's meals.
///
/// Existing timers advance before new ones start, so a fresh popup has age 0
/// and a fresh eating window reads 1 at the end of the tick it began.
pub fn update(state: &mut SimulationState, eaten_at: &[DVec2]) {
    for popup in state.popups.iter_mut() {
        popup.age += 1;
    }
    state.popups.retain(|p| p.age <= POPUP_LIFETIME);

    if state.eating_anim_ticks > 0 {
        state.eating_anim_ticks += 1;
        if state.eating_anim_ticks > EATING_ANIM_TICKS {
            state.eating_anim_ticks = 0;
        }
    }

    for &pos in eaten_at {
        state.popups.push(ScorePopup { pos, age: 0 });
        state.eating_anim_ticks = 1;
    }
}

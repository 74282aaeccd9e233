//! Appendage tip vs. swimmer contact tests
//!
//! The head sits beside the column when relaxed (downstream of it) and on top
//! of it when stretching, so the food test shifts with both. The predator box
//! is wider, taller and always biased against the flow.

use glam::DVec2;

use super::state::{SimulationState, Swimmer, SwimmerKind};
use crate::consts::{APPENDAGE_X, SEA_BOTTOM};

/// Vertical offset from the tip to the mouth
const MOUTH_DROP: f64 = 10.0;
/// Food must be within this of the mouth vertically
const FOOD_Y_TOLERANCE: f64 = 15.0;
/// ...and within this horizontally
const FOOD_X_TOLERANCE: f64 = 10.0;
/// Head offset from the column while relaxed
const RELAXED_HEAD_OFFSET: f64 = 40.0;
/// Predator body reaches this far below its center
const PREDATOR_REACH: f64 = 15.0;
const PREDATOR_X_OFFSET: f64 = 20.0;
const PREDATOR_X_TOLERANCE: f64 = 30.0;

/// Outcome of one collision pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionResult {
    /// Where each eaten food was swallowed (the tip), in eating order
    pub eaten_at: Vec<DVec2>,
    /// A predator touched the appendage
    pub fatal: bool,
}

/// Whether the appendage tip touches the swimmer
pub fn tip_touches(state: &SimulationState, swimmer: &Swimmer) -> bool {
    match swimmer.kind {
        SwimmerKind::Food => food_contact(state, swimmer.pos),
        SwimmerKind::Predator => predator_contact(state, swimmer.pos),
    }
}

fn food_contact(state: &SimulationState, pos: DVec2) -> bool {
    if (SEA_BOTTOM - state.appendage_length + MOUTH_DROP - pos.y).abs() >= FOOD_Y_TOLERANCE {
        return false;
    }
    let x_offset = if state.is_stretching {
        0.0
    } else if state.flow_rightward() {
        -RELAXED_HEAD_OFFSET
    } else {
        RELAXED_HEAD_OFFSET
    };
    (APPENDAGE_X + x_offset - pos.x).abs() < FOOD_X_TOLERANCE
}

fn predator_contact(state: &SimulationState, pos: DVec2) -> bool {
    if pos.y + PREDATOR_REACH <= SEA_BOTTOM - state.appendage_length {
        return false;
    }
    let x_offset = if state.flow_rightward() {
        -PREDATOR_X_OFFSET
    } else {
        PREDATOR_X_OFFSET
    };
    (APPENDAGE_X + x_offset - pos.x).abs() < PREDATOR_X_TOLERANCE
}

/// Eat touching food, then check predators.
///
/// Food goes first so a plankton under a sunfish still counts on the tick
/// the run ends. Score and the food list are updated here; the caller turns
/// `fatal` into the mode change.
pub fn detect(state: &mut SimulationState) -> CollisionResult {
    let mut result = CollisionResult::default();

    let mut food = std::mem::take(&mut state.food);
    food.retain(|f| {
        if tip_touches(state, f) {
            result.eaten_at.push(DVec2::new(APPENDAGE_X, state.tip_y()));
            false
        } else {
            true
        }
    });
    state.food = food;
    state.score += result.eaten_at.len() as u64;

    result.fatal = state.predators.iter().any(|p| tip_touches(state, p));
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relaxed_state() -> SimulationState {
        let mut state = SimulationState::playing();
        state.appendage_length = 74.0;
        state.is_stretching = false;
        state
    }

    #[test]
    fn test_food_eaten_beside_relaxed_head() {
        let mut state = relaxed_state();
        // mouth at 430 - 74 + 10 = 366; head 40 px upstream of 320
        state
            .food
            .push(Swimmer::food(DVec2::new(280.0, 363.0), DVec2::ZERO));
        let result = detect(&mut state);

        assert!(state.food.is_empty());
        assert_eq!(state.score, 1);
        assert_eq!(result.eaten_at, vec![DVec2::new(320.0, 356.0)]);
        assert!(!result.fatal);
    }

    #[test]
    fn test_food_out_of_horizontal_reach() {
        let mut state = relaxed_state();
        state
            .food
            .push(Swimmer::food(DVec2::new(250.0, 363.0), DVec2::ZERO));
        let result = detect(&mut state);

        assert_eq!(state.food.len(), 1);
        assert_eq!(state.score, 0);
        assert!(result.eaten_at.is_empty());
    }

    #[test]
    fn test_food_vertical_band_is_open() {
        let mut state = relaxed_state();
        // exactly 15 away from the mouth
        state
            .food
            .push(Swimmer::food(DVec2::new(280.0, 351.0), DVec2::ZERO));
        detect(&mut state);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_stretching_head_is_centered() {
        let mut state = relaxed_state();
        state.is_stretching = true;
        state.appendage_length = 200.0;
        // mouth at 240
        state
            .food
            .push(Swimmer::food(DVec2::new(280.0, 240.0), DVec2::ZERO));
        state
            .food
            .push(Swimmer::food(DVec2::new(325.0, 245.0), DVec2::ZERO));
        detect(&mut state);

        assert_eq!(state.score, 1);
        assert_eq!(state.food.len(), 1);
        assert_eq!(state.food[0].pos.x, 280.0);
    }

    #[test]
    fn test_leftward_flow_mirrors_relaxed_head() {
        let mut state = relaxed_state();
        state.flow.x = -2.0;
        state
            .food
            .push(Swimmer::food(DVec2::new(360.0, 366.0), DVec2::ZERO));
        detect(&mut state);
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_predator_contact_ends_run() {
        let mut state = relaxed_state();
        // 360 + 15 = 375 > 356, and 320 - 20 = 300
        state
            .predators
            .push(Swimmer::predator(DVec2::new(300.0, 360.0), DVec2::ZERO));
        let result = detect(&mut state);
        assert!(result.fatal);
    }

    #[test]
    fn test_predator_above_tip_is_harmless() {
        let mut state = relaxed_state();
        // 341 + 15 = 356, not strictly below the tip
        state
            .predators
            .push(Swimmer::predator(DVec2::new(300.0, 341.0), DVec2::ZERO));
        assert!(!detect(&mut state).fatal);
    }

    #[test]
    fn test_predator_horizontal_band() {
        let mut state = relaxed_state();
        state
            .predators
            .push(Swimmer::predator(DVec2::new(330.0, 360.0), DVec2::ZERO));
        assert!(!detect(&mut state).fatal);

        state.flow.x = -2.0;
        // now biased to 340
        assert!(detect(&mut state).fatal);
    }

    #[test]
    fn test_food_still_eaten_when_predator_hits() {
        let mut state = relaxed_state();
        state
            .food
            .push(Swimmer::food(DVec2::new(280.0, 366.0), DVec2::ZERO));
        state
            .predators
            .push(Swimmer::predator(DVec2::new(290.0, 366.0), DVec2::ZERO));
        let result = detect(&mut state);

        assert!(result.fatal);
        assert_eq!(state.score, 1);
        assert!(state.food.is_empty());
    }
}

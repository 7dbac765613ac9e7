//! Fire orbits
//!
//! Each fire circles its diamond. Whatever moved the diamond this tick (ship
//! translation, ship rotation, capture) was recorded on the diamond and is
//! replayed onto the fire here, exactly once.

use glam::Vec2;

use super::state::GameState;
use super::transform::{about_pivot, rotate};
use crate::normalize_heading;

/// Fire offset from its diamond; orbits run clockwise as the heading grows
#[inline]
pub fn orbit_offset(radius: f32, heading: f32) -> Vec2 {
    Vec2::new(-radius * heading.cos(), radius * heading.sin())
}

/// Advance every fire one orbit step, consuming its diamond's pending deltas
pub fn advance_fires(state: &mut GameState) {
    let step = state.tuning.orbit_step;
    let radius = state.tuning.orbit_radius;

    for i in 0..state.total_diamonds() {
        let diamond_id = state.diamonds()[i];
        let fire_id = state.fire_for(i);

        let diamond = state.entity_mut(diamond_id);
        let anchor = diamond.pos();
        let deltas = std::mem::take(&mut diamond.pending_deltas);

        let fire = state.entity_mut(fire_id);
        fire.heading = normalize_heading(fire.heading + step);
        fire.set_pos(anchor + orbit_offset(radius, fire.heading));
        for delta in deltas {
            fire.apply(delta);
        }
        fire.apply(about_pivot(rotate(-step), anchor));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::movement::{Intent, apply_intent};
    use crate::sim::parenting::capture;
    use crate::consts::FIRE_HEADING;
    use crate::sim::transform::origin_of;

    #[test]
    fn test_fire_circles_its_diamond() {
        let mut state = GameState::new();
        for _ in 0..500 {
            advance_fires(&mut state);
        }
        for i in 0..state.total_diamonds() {
            let anchor = state.entity(state.diamonds()[i]).pos();
            let fire = state.entity(state.fire_for(i));
            assert!((fire.pos().distance(anchor) - state.tuning.orbit_radius).abs() < 1e-5);
            assert!((origin_of(&fire.transform) - fire.pos()).length() < 1e-4);
        }
    }

    #[test]
    fn test_fire_orbits_clockwise() {
        let mut state = GameState::new();
        for _ in 0..3 {
            advance_fires(&mut state);
        }
        let anchor = state.entity(state.diamonds()[0]).pos();
        let fire = state.entity(state.fire_for(0));
        let theta = FIRE_HEADING + 3.0 * state.tuning.orbit_step;
        let expected = anchor + Vec2::new(-0.2 * theta.cos(), 0.2 * theta.sin());

        assert!((fire.pos() - expected).length() < 1e-6);
        // Starting above the diamond, a clockwise orbit drifts right
        assert!(fire.pos().x > anchor.x);
        assert!((origin_of(&fire.transform) - fire.pos()).length() < 1e-5);
    }

    #[test]
    fn test_fire_replays_turns_of_its_diamond() {
        let mut state = GameState::new();
        capture(&mut state, 2);
        advance_fires(&mut state);

        let diamond_id = state.diamonds()[2];
        let fire_id = state.fire_for(2);
        let radius = |state: &GameState| {
            origin_of(&state.entity(fire_id).transform)
                .distance(origin_of(&state.entity(diamond_id).transform))
        };
        let before = radius(&state);

        let turns = 200;
        for _ in 0..turns {
            assert!(apply_intent(&mut state, Intent::Turn(Vec2::new(1.0, 0.0))));
        }
        assert_eq!(state.entity(diamond_id).pending_deltas.len(), turns);

        advance_fires(&mut state);
        assert!(state.entity(diamond_id).pending_deltas.is_empty());
        assert!((radius(&state) - before).abs() < 1e-3);
    }

    #[test]
    fn test_fire_advances_heading() {
        let mut state = GameState::new();
        let before = state.entity(state.fire_for(0)).heading;
        advance_fires(&mut state);
        let after = state.entity(state.fire_for(0)).heading;
        assert!((after - before - state.tuning.orbit_step).abs() < 1e-6);
    }

    #[test]
    fn test_deltas_consumed_exactly_once() {
        let mut state = GameState::new();
        capture(&mut state, 0);
        apply_intent(&mut state, Intent::MoveForward);
        let diamond = state.diamonds()[0];
        assert_eq!(state.entity(diamond).pending_deltas.len(), 3);

        advance_fires(&mut state);
        for &id in state.diamonds() {
            assert!(state.entity(id).pending_deltas.is_empty());
        }
    }

    #[test]
    fn test_fire_follows_translated_diamond() {
        let mut state = GameState::new();
        capture(&mut state, 2);
        advance_fires(&mut state);
        let fire_id = state.fire_for(2);
        let before = origin_of(&state.entity(fire_id).transform);

        for _ in 0..10 {
            apply_intent(&mut state, Intent::MoveForward);
        }
        let mut without_orbit = state.entity(fire_id).transform;
        for delta in state.entity(state.diamonds()[2]).pending_deltas.clone() {
            without_orbit = delta * without_orbit;
        }
        advance_fires(&mut state);

        // The replayed translations shift the fire by exactly the ship's travel
        let shifted = origin_of(&without_orbit) - before;
        assert!((shifted - glam::Vec2::new(0.0, 10.0 * state.tuning.move_step)).length() < 1e-5);
    }
}

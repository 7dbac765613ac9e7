//! Ship movement and turning
//!
//! The ship's pose is tracked twice: as an accumulated matrix for rendering
//! and as a closed-form position/heading for gameplay. Every delta applied to
//! the ship is applied to its attached children as well and recorded on them
//! so their fires can replay it.

use std::f32::consts::{PI, TAU};

use glam::{Mat4, Vec2};

use super::state::GameState;
use super::transform::{about_pivot, rotate, translate_along};
use crate::consts::TURN_TARGET_EPSILON;
use crate::{normalize_heading, polar_to_cartesian};

/// A single movement request for one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intent {
    MoveForward,
    MoveBack,
    /// Rotate one step toward a world-space point
    Turn(Vec2),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnDirection {
    Clockwise,
    CounterClockwise,
}

/// Angular travel from `from` to `to` going (counter-clockwise, clockwise).
/// Both inputs are expected in [0, 2π).
#[inline]
pub fn angular_distances(from: f32, to: f32) -> (f32, f32) {
    ((to - from).rem_euclid(TAU), (from - to).rem_euclid(TAU))
}

/// Shorter way round from `heading` to `angle`; exact ties go counter-clockwise
pub fn turn_direction(heading: f32, angle: f32) -> TurnDirection {
    let (ccw, cw) = angular_distances(heading, angle);
    if ccw <= cw {
        TurnDirection::CounterClockwise
    } else {
        TurnDirection::Clockwise
    }
}

/// Position of the `slot`-th attachment point (1-based) behind the ship
#[inline]
pub fn slot_position(ship_pos: Vec2, heading: f32, slot: usize, spacing: f32) -> Vec2 {
    ship_pos + polar_to_cartesian(slot as f32 * spacing, heading + PI)
}

/// Apply one intent to the ship and its children. Returns true if anything moved.
pub fn apply_intent(state: &mut GameState, intent: Intent) -> bool {
    let move_step = state.tuning.move_step;
    match intent {
        Intent::MoveForward => {
            translate_ship(state, move_step);
            true
        }
        Intent::MoveBack => {
            translate_ship(state, -move_step);
            true
        }
        Intent::Turn(target) => turn_toward(state, target),
    }
}

/// Move the ship `distance` along its heading (negative moves backwards)
fn translate_ship(state: &mut GameState, distance: f32) {
    let ship = state.ship_mut();
    let delta = translate_along(distance, ship.heading);
    let step = polar_to_cartesian(distance, ship.heading);

    ship.apply(delta);
    ship.set_pos(ship.pos() + step);

    let children = ship.children.clone();
    for child in children {
        let child = state.entity_mut(child);
        child.apply_and_record(delta);
        child.set_pos(child.pos() + step);
    }
}

/// Rotate the ship one step toward `target`, dragging its children along
fn turn_toward(state: &mut GameState, target: Vec2) -> bool {
    let step = state.tuning.turn_step;
    let spacing = state.tuning.slot_spacing;
    let ship = state.ship();
    let pivot = ship.pos();

    let offset = target - pivot;
    if offset.length() < TURN_TARGET_EPSILON {
        return false;
    }

    let angle = normalize_heading(offset.y.atan2(offset.x));
    let (ccw, cw) = angular_distances(ship.heading, angle);
    // Dead zone: already facing the target. Measured the short way round so a
    // heading just past 0 still counts as facing a target just below 2π.
    if ccw.min(cw) < step {
        return false;
    }

    let signed = match turn_direction(ship.heading, angle) {
        TurnDirection::CounterClockwise => step,
        TurnDirection::Clockwise => -step,
    };
    let delta: Mat4 = about_pivot(rotate(signed), pivot);

    let ship = state.ship_mut();
    ship.apply(delta);
    ship.heading = normalize_heading(ship.heading + signed);
    let heading = ship.heading;

    let children = ship.children.clone();
    for (i, child) in children.into_iter().enumerate() {
        let child = state.entity_mut(child);
        child.apply_and_record(delta);
        child.heading = heading;
        child.set_pos(slot_position(pivot, heading, i + 1, spacing));
    }

    log::trace!("Ship heading {:.4} (target {:.4})", heading, angle);
    true
}

//! Proximity tests
//!
//! Every interaction in the scene is a point-vs-point distance check against a
//! single fixed threshold.

use glam::Vec2;

use super::state::GameState;
use crate::consts::CLOSE_DISTANCE;

/// True when two points are strictly closer than `CLOSE_DISTANCE`
#[inline]
pub fn is_close(a: Vec2, b: Vec2) -> bool {
    a.distance(b) < CLOSE_DISTANCE
}

/// Indices of active diamonds currently touching the ship
pub fn touching_diamonds(state: &GameState) -> Vec<usize> {
    let ship_pos = state.ship().pos();
    state
        .diamonds()
        .iter()
        .enumerate()
        .filter(|&(_, &id)| {
            let diamond = state.entity(id);
            diamond.active && is_close(diamond.pos(), ship_pos)
        })
        .map(|(i, _)| i)
        .collect()
}

/// Index of the first active fire touching the ship
pub fn touching_fire(state: &GameState) -> Option<usize> {
    let ship_pos = state.ship().pos();
    state.fires().iter().position(|&id| {
        let fire = state.entity(id);
        fire.active && is_close(fire.pos(), ship_pos)
    })
}

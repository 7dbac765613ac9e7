//! Diamond capture
//!
//! A captured diamond becomes a rigid child of the ship: it shrinks, turns to
//! match the ship and snaps into the next free slot behind it. Its fire stops
//! being a hazard but keeps orbiting, following the diamond through the
//! recorded deltas.

use glam::{Mat4, Vec2};

use super::movement::slot_position;
use super::state::GameState;
use super::transform::{about_pivot, rotate, scale_uniform, translate_xy};

/// Matrix moving a diamond at `diamond_pos` into `slot` behind the ship,
/// turned by `alignment` about its own center first.
pub fn slot_matrix(
    ship_pos: Vec2,
    ship_heading: f32,
    diamond_pos: Vec2,
    slot: usize,
    spacing: f32,
    alignment: f32,
) -> Mat4 {
    let offset = slot_position(ship_pos, ship_heading, slot, spacing) - diamond_pos;
    translate_xy(offset.x, offset.y) * about_pivot(rotate(alignment), diamond_pos)
}

/// Attach the diamond at `index` to the ship. Returns the new score.
///
/// Panics if the diamond is already captured.
pub fn capture(state: &mut GameState, index: usize) -> u32 {
    let diamond_id = state.diamonds()[index];
    let fire_id = state.fire_for(index);
    let ship_id = state.ship_id();
    let growth = state.tuning.capture_growth;
    let shrink = state.tuning.capture_shrink;
    let spacing = state.tuning.slot_spacing;

    assert!(
        state.entity(diamond_id).active,
        "diamond {index} captured twice"
    );

    state.score += 1;

    let ship = state.ship_mut();
    let ship_pos = ship.pos();
    let ship_heading = ship.heading;
    // Turn accumulated since the default pose, so the diamond faces like the ship
    let alignment = ship.heading - ship.default_heading;
    ship.apply(about_pivot(scale_uniform(growth), ship_pos));
    ship.children.push(diamond_id);
    let slot = ship.children.len();

    let diamond = state.entity_mut(diamond_id);
    let diamond_pos = diamond.pos();
    diamond.active = false;
    diamond.parent = Some(ship_id);
    diamond.heading = ship_heading;
    diamond.apply_and_record(about_pivot(scale_uniform(shrink), diamond_pos));
    diamond.apply_and_record(slot_matrix(
        ship_pos,
        ship_heading,
        diamond_pos,
        slot,
        spacing,
        alignment,
    ));
    diamond.set_pos(slot_position(ship_pos, ship_heading, slot, spacing));

    state.entity_mut(fire_id).active = false;

    log::info!(
        "Captured diamond {} into slot {} (score {})",
        index,
        slot,
        state.score
    );
    state.score
}

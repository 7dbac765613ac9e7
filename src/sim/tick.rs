//! Fixed-step simulation tick
//!
//! One call per rendered frame. Step sizes are per tick, so simulation speed
//! follows the frame rate.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{touching_diamonds, touching_fire};
use super::movement::{Intent, apply_intent};
use super::orbit::advance_fires;
use super::parenting::capture;
use super::state::{EntityId, GamePhase, GameState};
use super::transform::{about_pivot, rotate};

/// Input snapshot for a single tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Move along the heading (held)
    pub move_forward: bool,
    /// Move against the heading (held)
    pub move_back: bool,
    /// World-space point to turn toward (held mouse button)
    pub turn_target: Option<Vec2>,
    /// Start over (edge-triggered)
    pub reset: bool,
}

/// Why the scene was reset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResetCause {
    /// Explicit user request
    Requested,
    /// The ship touched an active fire
    FireHit,
}

/// Something noteworthy that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    DiamondCaptured { diamond: EntityId, score: u32 },
    Won,
    FireHit { fire: EntityId },
    Reset { cause: ResetCause },
}

/// Advance the game by one tick
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if input.reset {
        state.reset();
        log::info!("Reset requested");
        events.push(GameEvent::Reset {
            cause: ResetCause::Requested,
        });
        return events;
    }

    state.time_ticks += 1;

    // Movement
    if input.move_forward {
        apply_intent(state, Intent::MoveForward);
    }
    if input.move_back {
        apply_intent(state, Intent::MoveBack);
    }
    if let Some(target) = input.turn_target {
        apply_intent(state, Intent::Turn(target));
    }

    // Captures
    for index in touching_diamonds(state) {
        let diamond = state.diamonds()[index];
        let score = capture(state, index);
        events.push(GameEvent::DiamondCaptured { diamond, score });
    }
    if state.update_phase() {
        log::info!("All {} diamonds collected", state.total_diamonds());
        events.push(GameEvent::Won);
    }

    // Fires follow their diamonds, then get a chance to hit the ship
    advance_fires(state);
    if let Some(index) = touching_fire(state) {
        let fire = state.fire_for(index);
        log::info!("Ship hit fire {} at tick {}, resetting", index, state.time_ticks);
        state.reset();
        events.push(GameEvent::FireHit { fire });
        events.push(GameEvent::Reset {
            cause: ResetCause::FireHit,
        });
        return events;
    }

    if state.phase == GamePhase::Won {
        spin_diamonds(state);
    }

    debug_assert!(
        state
            .diamonds()
            .iter()
            .all(|&id| state.entity(id).pending_deltas.is_empty()),
        "pending deltas left over after tick"
    );

    events
}

/// Decorative spin of every diamond about its own position
fn spin_diamonds(state: &mut GameState) {
    let step = state.tuning.spin_step;
    for i in 0..state.total_diamonds() {
        let id = state.diamonds()[i];
        let diamond = state.entity_mut(id);
        let pivot = diamond.pos();
        diamond.apply(about_pivot(rotate(-step), pivot));
    }
}

//! Fixed-step simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering and
//! platform dependencies:
//! - Fixed step sizes per tick
//! - Stable iteration order (arena order: ship, diamonds, fires)
//! - Entities addressed by id, never by reference

pub mod collision;
pub mod movement;
pub mod orbit;
pub mod parenting;
pub mod state;
pub mod tick;
pub mod transform;

pub use collision::is_close;
pub use movement::{Intent, TurnDirection, apply_intent, slot_position};
pub use parenting::capture;
pub use state::{Entity, EntityId, EntityKind, GamePhase, GameState};
pub use tick::{GameEvent, ResetCause, TickInput, tick};

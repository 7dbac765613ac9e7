//! Data-driven step sizes and scene constants
//!
//! Defaults mirror `consts`; a settings file can override any field.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Per-tick step sizes and attachment geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Ship translation per tick
    pub move_step: f32,
    /// Ship rotation per tick
    pub turn_step: f32,
    /// Fire orbit advance per tick
    pub orbit_step: f32,
    /// Decorative diamond spin per tick once the game is won
    pub spin_step: f32,
    /// Fire orbit radius
    pub orbit_radius: f32,
    /// Distance between slots behind the ship
    pub slot_spacing: f32,
    /// Ship scale factor applied on each capture
    pub capture_growth: f32,
    /// Diamond scale factor applied when captured
    pub capture_shrink: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            move_step: MOVE_STEP,
            turn_step: TURN_STEP,
            orbit_step: TURN_STEP,
            spin_step: TURN_STEP,
            orbit_radius: ORBIT_RADIUS,
            slot_spacing: SLOT_SPACING,
            capture_growth: CAPTURE_GROWTH,
            capture_shrink: CAPTURE_SHRINK,
        }
    }
}

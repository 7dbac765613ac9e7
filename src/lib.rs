//! Diamond Chase - a small 2D arcade scene
//!
//! Core modules:
//! - `sim`: Fixed-step simulation (transforms, collisions, parenting, game state)
//! - `renderer`: Draw list and quad geometry handed to the GPU collaborator
//! - `platform`: Input plumbing and the web entry point
//! - `ui`: HUD text lines
//! - `tuning` / `settings`: Data-driven step sizes and user settings

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use settings::{Settings, SettingsError};
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use std::f32::consts::PI;

    /// Ship translation per tick while a move key is held
    pub const MOVE_STEP: f32 = 1.0 / 2000.0;
    /// Ship rotation per tick while turning (also the fire orbit and win spin step)
    pub const TURN_STEP: f32 = PI / 1500.0;

    /// Proximity threshold for captures and fire hits
    pub const CLOSE_DISTANCE: f32 = 0.1;
    /// Turn targets closer than this to the ship are ignored
    pub const TURN_TARGET_EPSILON: f32 = 1e-5;

    /// Fire orbit radius around its diamond
    pub const ORBIT_RADIUS: f32 = 0.2;
    /// Distance between consecutive slots behind the ship
    pub const SLOT_SPACING: f32 = 0.15;
    /// Ship growth on every capture
    pub const CAPTURE_GROWTH: f32 = 1.1;
    /// Diamond shrink when it joins the ship
    pub const CAPTURE_SHRINK: f32 = 0.5;

    /// Ship defaults
    pub const SHIP_HEADING: f32 = PI / 2.0;
    pub const SHIP_SCALE: (f32, f32) = (0.15, 0.10);

    /// Diamond defaults
    pub const DIAMOND_SCALE: f32 = 0.10;
    /// (distance, direction) of each diamond from the origin
    pub const DIAMOND_PLACEMENTS: [(f32, f32); 3] =
        [(1.0, PI / 4.0), (1.0, 3.0 * PI / 4.0), (0.8, 3.0 * PI / 2.0)];

    /// Fire defaults
    pub const FIRE_HEADING: f32 = PI / 2.0;
    pub const FIRE_SCALE: (f32, f32) = (0.3, 0.4);

    /// Viewport used when no settings override it
    pub const DEFAULT_VIEWPORT: (f32, f32) = (800.0, 800.0);
}

/// Normalize a heading to [0, 2π)
#[inline]
pub fn normalize_heading(angle: f32) -> f32 {
    use std::f32::consts::TAU;
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid rounds tiny negatives up to exactly TAU
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::{PI, TAU};

    #[test]
    fn test_normalize_heading_wraps() {
        assert!((normalize_heading(TAU + 0.5) - 0.5).abs() < 1e-5);
        assert!((normalize_heading(-PI / 2.0) - 3.0 * PI / 2.0).abs() < 1e-5);
        assert_eq!(normalize_heading(0.0), 0.0);
        assert_eq!(normalize_heading(TAU), 0.0);
    }

    #[test]
    fn test_normalize_heading_tiny_negative() {
        let h = normalize_heading(-1e-9);
        assert!((0.0..TAU).contains(&h));
    }

    proptest! {
        #[test]
        fn prop_normalize_heading_in_range(angle in -100.0f32..100.0) {
            let h = normalize_heading(angle);
            prop_assert!(h >= 0.0);
            prop_assert!(h < TAU);
        }
    }
}

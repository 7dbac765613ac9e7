//! Platform abstraction layer
//!
//! Turns raw key, button and cursor events into one `TickInput` per frame:
//! - Move keys are level-triggered (held)
//! - Reset is edge-triggered (consumed by the next snapshot)
//! - Turning follows the cursor while the left button is held

#[cfg(target_arch = "wasm32")]
pub mod web;

use glam::Vec2;

use crate::settings::Settings;
use crate::sim::TickInput;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveForward,
    MoveBack,
    Reset,
}

impl Action {
    /// Map a DOM `KeyboardEvent.code` to an action
    pub fn from_key_code(code: &str) -> Option<Self> {
        match code {
            "KeyW" => Some(Action::MoveForward),
            "KeyS" => Some(Action::MoveBack),
            "Space" => Some(Action::Reset),
            _ => None,
        }
    }
}

/// Accumulated input between frames
#[derive(Debug, Clone)]
pub struct InputState {
    viewport: Vec2,
    cursor: Vec2,
    move_forward: bool,
    move_back: bool,
    turning: bool,
    reset_pending: bool,
}

impl InputState {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            viewport: Vec2::new(width, height),
            cursor: Vec2::ZERO,
            move_forward: false,
            move_back: false,
            turning: false,
            reset_pending: false,
        }
    }

    /// Input for a `width` x `height` canvas; an empty size falls back to the
    /// configured viewport
    pub fn for_viewport(width: f32, height: f32, settings: &Settings) -> Self {
        if width > 0.0 && height > 0.0 {
            Self::new(width, height)
        } else {
            log::debug!(
                "No canvas size given, using {}x{}",
                settings.viewport_width,
                settings.viewport_height
            );
            Self::new(settings.viewport_width, settings.viewport_height)
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width, height);
    }

    /// Map a pixel position (origin top-left, y down) to the [-1, 1] plane
    pub fn screen_to_world(&self, x: f32, y: f32) -> Vec2 {
        let half = self.viewport / 2.0;
        Vec2::new(x / half.x - 1.0, -y / half.y + 1.0)
    }

    /// Inverse of `screen_to_world`
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        let half = self.viewport / 2.0;
        Vec2::new((world.x + 1.0) * half.x, (1.0 - world.y) * half.y)
    }

    pub fn key(&mut self, action: Action, pressed: bool) {
        match action {
            Action::MoveForward => self.move_forward = pressed,
            Action::MoveBack => self.move_back = pressed,
            Action::Reset => {
                if pressed {
                    self.reset_pending = true;
                }
            }
        }
    }

    pub fn cursor_moved(&mut self, x: f32, y: f32) {
        self.cursor = Vec2::new(x, y);
    }

    /// Left mouse button state
    pub fn mouse_button(&mut self, pressed: bool) {
        self.turning = pressed;
    }

    /// Input for the next tick; consumes a pending reset
    pub fn snapshot(&mut self) -> TickInput {
        let input = TickInput {
            move_forward: self.move_forward,
            move_back: self.move_back,
            turn_target: self
                .turning
                .then(|| self.screen_to_world(self.cursor.x, self.cursor.y)),
            reset: self.reset_pending,
        };
        self.reset_pending = false;
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_to_world_corners() {
        let input = InputState::new(800.0, 800.0);
        assert_eq!(input.screen_to_world(400.0, 400.0), Vec2::ZERO);
        assert_eq!(input.screen_to_world(0.0, 0.0), Vec2::new(-1.0, 1.0));
        assert_eq!(input.screen_to_world(800.0, 800.0), Vec2::new(1.0, -1.0));
    }

    #[test]
    fn test_world_to_screen_inverts() {
        let input = InputState::new(800.0, 600.0);
        let world = Vec2::new(0.25, -0.5);
        let screen = input.world_to_screen(world);
        assert_eq!(screen, Vec2::new(500.0, 450.0));
        assert!((input.screen_to_world(screen.x, screen.y) - world).length() < 1e-6);
    }

    #[test]
    fn test_empty_canvas_uses_configured_viewport() {
        let settings = Settings {
            viewport_width: 1000.0,
            viewport_height: 500.0,
            ..Default::default()
        };
        let input = InputState::for_viewport(0.0, 0.0, &settings);
        assert_eq!(input.screen_to_world(1000.0, 0.0), Vec2::new(1.0, 1.0));

        let input = InputState::for_viewport(400.0, 400.0, &settings);
        assert_eq!(input.screen_to_world(400.0, 0.0), Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_reset_is_edge_triggered() {
        let mut input = InputState::new(800.0, 800.0);
        input.key(Action::Reset, true);
        assert!(input.snapshot().reset);
        assert!(!input.snapshot().reset);
        // Releasing never re-arms it
        input.key(Action::Reset, false);
        assert!(!input.snapshot().reset);
    }

    #[test]
    fn test_move_keys_are_held() {
        let mut input = InputState::new(800.0, 800.0);
        input.key(Action::MoveForward, true);
        assert!(input.snapshot().move_forward);
        assert!(input.snapshot().move_forward);
        input.key(Action::MoveForward, false);
        assert!(!input.snapshot().move_forward);
    }

    #[test]
    fn test_turn_target_tracks_cursor_while_held() {
        let mut input = InputState::new(800.0, 600.0);
        input.cursor_moved(600.0, 150.0);
        assert_eq!(input.snapshot().turn_target, None);

        input.mouse_button(true);
        assert_eq!(input.snapshot().turn_target, Some(Vec2::new(0.5, 0.5)));
        input.cursor_moved(200.0, 450.0);
        assert_eq!(input.snapshot().turn_target, Some(Vec2::new(-0.5, -0.5)));

        input.mouse_button(false);
        assert_eq!(input.snapshot().turn_target, None);
    }

    #[test]
    fn test_key_codes() {
        assert_eq!(Action::from_key_code("KeyW"), Some(Action::MoveForward));
        assert_eq!(Action::from_key_code("Space"), Some(Action::Reset));
        assert_eq!(Action::from_key_code("KeyR"), None);
    }
}

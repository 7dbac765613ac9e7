//! HUD overlay text
//!
//! Produces the lines the overlay collaborator draws in the top-left corner.

use crate::sim::GameState;

/// A line of overlay text with its font scale
#[derive(Debug, Clone, PartialEq)]
pub struct HudLine {
    pub text: String,
    pub scale: f32,
}

impl HudLine {
    fn new(text: impl Into<String>, scale: f32) -> Self {
        Self {
            text: text.into(),
            scale,
        }
    }
}

pub const SCORE_SCALE: f32 = 1.5;
pub const BANNER_SCALE: f32 = 8.0;
pub const HINT_SCALE: f32 = 4.0;

/// Score line, plus the win banner once every diamond is collected
pub fn hud_lines(state: &GameState) -> Vec<HudLine> {
    let mut lines = vec![HudLine::new(format!("Score: {}", state.score()), SCORE_SCALE)];
    if state.is_won() {
        lines.push(HudLine::new("YOU WIN!!!", BANNER_SCALE));
        lines.push(HudLine::new("Press Space to reset", HINT_SCALE));
    }
    lines
}

//! Browser entry point
//!
//! JavaScript owns the canvas, textures and frame loop. It forwards DOM events
//! here, calls `step` once per animation frame and reads back the draw list.

use wasm_bindgen::prelude::*;

use super::{Action, InputState};
use crate::renderer::list_renderables;
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, tick};
use crate::ui::hud_lines;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Diamond Chase (web) starting...");
}

/// Game instance driven from JavaScript
#[wasm_bindgen]
pub struct WebGame {
    state: GameState,
    input: InputState,
    show_hud: bool,
}

#[wasm_bindgen]
impl WebGame {
    /// Pass 0x0 to use the configured viewport
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> WebGame {
        let settings = Settings::load().unwrap_or_default();
        WebGame {
            state: GameState::with_tuning(settings.tuning),
            input: InputState::for_viewport(width, height, &settings),
            show_hud: settings.show_hud,
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.input.resize(width, height);
    }

    pub fn key_down(&mut self, code: &str) {
        if let Some(action) = Action::from_key_code(code) {
            self.input.key(action, true);
        }
    }

    pub fn key_up(&mut self, code: &str) {
        if let Some(action) = Action::from_key_code(code) {
            self.input.key(action, false);
        }
    }

    pub fn cursor_moved(&mut self, x: f32, y: f32) {
        self.input.cursor_moved(x, y);
    }

    pub fn mouse_down(&mut self) {
        self.input.mouse_button(true);
    }

    pub fn mouse_up(&mut self) {
        self.input.mouse_button(false);
    }

    /// Advance one frame
    pub fn step(&mut self) {
        let input = self.input.snapshot();
        for event in tick(&mut self.state, &input) {
            match event {
                GameEvent::Won => log::info!("You win!"),
                other => log::debug!("{:?}", other),
            }
        }
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }

    pub fn score(&self) -> u32 {
        self.state.score()
    }

    pub fn is_won(&self) -> bool {
        self.state.is_won()
    }

    /// Column-major 4x4 matrices, 16 floats per sprite, in draw order
    pub fn transforms(&self) -> js_sys::Float32Array {
        let flat: Vec<f32> = list_renderables(&self.state)
            .iter()
            .flat_map(|r| r.transform.to_cols_array())
            .collect();
        js_sys::Float32Array::from(flat.as_slice())
    }

    /// Texture id per sprite, matching `transforms`
    pub fn textures(&self) -> Vec<u8> {
        list_renderables(&self.state)
            .iter()
            .map(|r| r.texture as u8)
            .collect()
    }

    /// HUD text, one line per entry, empty when the HUD is hidden
    pub fn hud_text(&self) -> String {
        if !self.show_hud {
            return String::new();
        }
        hud_lines(&self.state)
            .into_iter()
            .map(|line| line.text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

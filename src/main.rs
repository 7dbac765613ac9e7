//! Diamond Chase entry point
//!
//! The browser build is driven from JavaScript through `platform::web`. The
//! native binary has no window: it runs a scripted autopilot through the
//! simulation and logs what happens.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use diamond_chase::Settings;
    use diamond_chase::platform::InputState;
    use diamond_chase::sim::GameState;

    env_logger::init();
    log::info!("Diamond Chase (native) starting...");
    log::info!("Native mode is headless - serve the wasm build for the playable version");

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("{e}, falling back to defaults");
            Settings::default()
        }
    };

    let mut state = GameState::with_tuning(settings.tuning);
    let mut input = InputState::for_viewport(0.0, 0.0, &settings);
    autopilot(&mut state, &mut input, MAX_TICKS);

    if settings.show_hud {
        for line in diamond_chase::ui::hud_lines(&state) {
            println!("{}", line.text);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::start, this is just to satisfy the compiler
}

/// Tick budget for the headless run
#[cfg(not(target_arch = "wasm32"))]
const MAX_TICKS: u64 = 50_000;

/// Heading error below which the autopilot drives forward
#[cfg(not(target_arch = "wasm32"))]
const FACING_TOLERANCE: f32 = 0.05;

/// Steer at the first uncollected diamond, drive when facing it. Inputs go
/// through the same cursor and key handling as the browser build.
#[cfg(not(target_arch = "wasm32"))]
fn autopilot(
    state: &mut diamond_chase::sim::GameState,
    input: &mut diamond_chase::platform::InputState,
    max_ticks: u64,
) {
    use diamond_chase::normalize_heading;
    use diamond_chase::platform::Action;
    use diamond_chase::sim::movement::angular_distances;
    use diamond_chase::sim::{GameEvent, tick};

    let mut resets = 0u32;
    for _ in 0..max_ticks {
        let Some(&target_id) = state
            .diamonds()
            .iter()
            .find(|&&id| state.entity(id).active)
        else {
            break;
        };

        let ship = state.ship();
        let target = state.entity(target_id).pos();
        let to_target = target - ship.pos();
        let angle = normalize_heading(to_target.y.atan2(to_target.x));
        let (ccw, cw) = angular_distances(ship.heading, angle);

        let cursor = input.world_to_screen(target);
        input.cursor_moved(cursor.x, cursor.y);
        input.mouse_button(true);
        input.key(Action::MoveForward, ccw.min(cw) < FACING_TOLERANCE);

        for event in tick(state, &input.snapshot()) {
            match event {
                GameEvent::DiamondCaptured { diamond, score } => {
                    log::info!("Tick {}: picked up {:?}, score {}", state.time_ticks, diamond, score)
                }
                GameEvent::Won => log::info!("Tick {}: all diamonds collected", state.time_ticks),
                GameEvent::FireHit { fire } => {
                    resets += 1;
                    log::warn!("Burned by {:?}, starting over", fire);
                }
                GameEvent::Reset { cause } => log::debug!("Reset ({:?})", cause),
            }
        }

        if state.is_won() {
            break;
        }
    }

    log::info!(
        "Autopilot finished after {} ticks: score {}, {} resets, won: {}",
        state.time_ticks,
        state.score(),
        resets,
        state.is_won()
    );
}

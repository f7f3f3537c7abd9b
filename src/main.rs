//! Dino Dash entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    //! Browser front end. Expects these element ids in the page:
    //! `dino`, `obstacles`, `score`, `high-score`, `start-message`,
    //! `game-over`, `restart-btn`.

    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    use wasm_bindgen::prelude::*;
    use web_sys::{Document, KeyboardEvent, MouseEvent};

    use dino_dash::platform::{InputAction, action_for_key};
    use dino_dash::sim::wants_jump;
    use dino_dash::{Command, GameEngine, Overlay, Tuning};

    /// Game instance holding all state
    struct Game {
        engine: GameEngine,
        /// Commands queued by event handlers, applied at the next frame
        pending: Vec<Command>,
        last_time: f64,
        autopilot: bool,
    }

    impl Game {
        fn new(seed: u64) -> Self {
            Self {
                engine: GameEngine::new(Tuning::default(), seed),
                pending: Vec::new(),
                last_time: 0.0,
                autopilot: false,
            }
        }

        /// Apply queued input, then let the frame's time pass
        fn update(&mut self, dt_ms: f64) {
            for command in self.pending.drain(..) {
                self.engine.handle(command);
            }

            if self.autopilot && wants_jump(self.engine.state(), self.engine.tuning()) {
                self.engine.handle(Command::Jump);
            }

            if let Ok(dt) = Duration::try_from_secs_f64(dt_ms / 1000.0) {
                self.engine.advance(dt);
            }
        }

        /// Update the play area and HUD elements in the DOM
        fn render(&self, document: &Document) {
            let state = self.engine.state();
            let hud = self.engine.hud();

            if let Some(el) = document.get_element_by_id("dino") {
                let _ = el.set_attribute(
                    "style",
                    &format!("transform: translateY(-{:.1}px)", state.actor.vertical_offset),
                );
            }

            if let Some(el) = document.get_element_by_id("obstacles") {
                let html: String = state
                    .obstacles
                    .iter()
                    .map(|o| {
                        format!(
                            r#"<div class="obstacle" style="left: {:.1}px; height: {:.1}px"></div>"#,
                            o.x, o.height
                        )
                    })
                    .collect();
                el.set_inner_html(&html);
            }

            if let Some(el) = document.get_element_by_id("score") {
                el.set_text_content(Some(&hud.score));
            }
            if let Some(el) = document.get_element_by_id("high-score") {
                el.set_text_content(Some(&format!("HI {}", hud.high_score)));
            }

            // Show/hide overlays
            let overlays = [
                ("start-message", Overlay::StartPrompt),
                ("game-over", Overlay::GameOver),
            ];
            for (id, overlay) in overlays {
                if let Some(el) = document.get_element_by_id(id) {
                    let class = if hud.overlay == overlay { "" } else { "hidden" };
                    let _ = el.set_attribute("class", class);
                }
            }
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Dino Dash starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed)));
        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(&window, game.clone())?;
        setup_restart_button(&document, game.clone())?;

        game.borrow().render(&document);
        request_animation_frame(game);
        log::info!("Dino Dash running!");
        Ok(())
    }

    fn setup_input_handlers(window: &web_sys::Window, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let mut g = game.borrow_mut();
            let status = g.engine.status();
            match action_for_key(&event.code(), &event.key(), status) {
                Some(InputAction::Command(command)) => {
                    // Keep space from scrolling the page
                    event.prevent_default();
                    g.pending.push(command);
                }
                Some(InputAction::ToggleAutopilot) => {
                    g.autopilot = !g.autopilot;
                    log::info!("Autopilot: {}", g.autopilot);
                }
                None => {}
            }
        });
        window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn setup_restart_button(document: &Document, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let Some(btn) = document.get_element_by_id("restart-btn") else {
            log::warn!("No restart button in page");
            return Ok(());
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            game.borrow_mut().pending.push(Command::Reset);
        });
        btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            // First frame only establishes the time base
            let dt_ms = if g.last_time > 0.0 { time - g.last_time } else { 0.0 };
            g.last_time = time;
            g.update(dt_ms);

            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                g.render(&document);
            }
        }
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless demo: the autopilot plays one run with simulated frame time.
///
/// Usage: `dino-dash [tuning.json]`
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use dino_dash::Tuning;

    env_logger::init();
    log::info!("Dino Dash (native) starting...");
    log::info!("Native mode is a headless demo - run with `trunk serve` for the web version");

    let tuning = match std::env::args().nth(1) {
        Some(path) => match load_tuning(&path) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path);
                tuning
            }
            Err(e) => {
                log::warn!("Could not load tuning from {}: {} - using defaults", path, e);
                Tuning::default()
            }
        },
        None => Tuning::default(),
    };

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);

    run_demo(tuning, seed);
}

#[cfg(not(target_arch = "wasm32"))]
fn load_tuning(path: &str) -> Result<dino_dash::Tuning, Box<dyn std::error::Error>> {
    let json = std::fs::read_to_string(path)?;
    Ok(dino_dash::Tuning::from_json(&json)?)
}

#[cfg(not(target_arch = "wasm32"))]
fn run_demo(tuning: dino_dash::Tuning, seed: u64) {
    use std::time::Duration;

    use dino_dash::sim::{GameStatus, wants_jump};
    use dino_dash::{Command, GameEngine};

    /// ~60 fps frames
    const FRAME: Duration = Duration::from_micros(16_667);
    /// Stop after two simulated minutes
    const DEMO_FRAMES: u32 = 60 * 120;

    let mut engine = GameEngine::new(tuning, seed);
    engine.handle(Command::Start);

    for frame in 0..DEMO_FRAMES {
        if wants_jump(engine.state(), engine.tuning()) {
            engine.handle(Command::Jump);
        }
        engine.advance(FRAME);

        if frame % 600 == 0 {
            log::info!("{}", engine.hud().line());
        }
        if engine.status() == GameStatus::GameOver {
            break;
        }
    }

    match engine.status() {
        GameStatus::GameOver => println!("Game over! {}", engine.hud().line()),
        _ => println!("Demo finished, still running. {}", engine.hud().line()),
    }
}

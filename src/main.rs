//! Stripe Chase entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use stripe_chase::HighScore;
    use stripe_chase::render::CanvasRenderer;
    use stripe_chase::sim::{GameEvent, GameState, TickInput, tick};

    const GAME_TITLE: &str = "Stripe Chase";
    const GAME_OVER_TITLE: &str = "Game Over";

    /// Game instance holding all state
    struct Game {
        state: GameState,
        renderer: CanvasRenderer,
        input: TickInput,
        /// Last reported pointer; each axis updates independently
        pointer: Vec2,
        high_score: HighScore,
    }

    impl Game {
        fn new(seed: u64, renderer: CanvasRenderer) -> Self {
            Self {
                state: GameState::new(seed),
                renderer,
                input: TickInput::default(),
                pointer: Vec2::ZERO,
                high_score: HighScore::load(),
            }
        }

        /// One animation frame: a single simulation tick, then a render pass
        fn frame(&mut self) {
            self.input.pointer = Some(self.pointer);
            let input = self.input.clone();
            let events = tick(&mut self.state, &input);
            // Clear one-shot inputs after processing
            self.input.toggle_highlight = false;
            self.input.restart = false;

            for event in events {
                match event {
                    GameEvent::GameOver { score } => self.on_game_over(score),
                    GameEvent::Restarted => set_text("title", GAME_TITLE),
                    GameEvent::PlayerHit { .. } => {}
                }
            }

            set_text(
                "current_score",
                &format!("Current Score: {}", self.state.score),
            );
            self.renderer.draw(&self.state);
        }

        fn on_game_over(&mut self, score: u64) {
            if self.high_score.record(score) {
                log::info!("new high score {}", score);
            }
            self.high_score.save();
            set_text("title", GAME_OVER_TITLE);
            set_text(
                "high_score",
                &format!("High Score: {}", self.high_score.best),
            );
        }
    }

    fn set_text(id: &str, text: &str) {
        let element = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id));
        if let Some(element) = element {
            element.set_text_content(Some(text));
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");
        console_error_panic_hook::set_once();

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or_else(|| JsValue::from_str("no #canvas element"))?
            .dyn_into()?;

        // Seed from the clock; determinism matters within a run, not across runs
        let seed = js_sys::Date::now() as u64;
        log::info!("starting session with seed {seed}");

        let renderer = CanvasRenderer::new(canvas.clone())?;
        let game = Rc::new(RefCell::new(Game::new(seed, renderer)));

        // Pointer target; an axis only follows while inside the canvas bounds
        {
            let game = game.clone();
            let canvas = canvas.clone();
            let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
                let rect = canvas.get_bounding_client_rect();
                let x = event.client_x() as f64;
                let y = event.client_y() as f64;
                let mut game = game.borrow_mut();
                if x >= rect.left() && x <= rect.right() {
                    game.pointer.x = (x - rect.left()) as f32;
                }
                if y >= rect.top() && y <= rect.bottom() {
                    game.pointer.y = (y - rect.top()) as f32;
                }
            }) as Box<dyn FnMut(_)>);
            document
                .body()
                .ok_or_else(|| JsValue::from_str("no body"))?
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Click restarts a dead session (the tick ignores it while playing)
        {
            let game = game.clone();
            let closure = Closure::wrap(Box::new(move |_event: MouseEvent| {
                game.borrow_mut().input.restart = true;
            }) as Box<dyn FnMut(_)>);
            canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Space toggles the highlight recolor; key autorepeat is ignored
        {
            let game = game.clone();
            let closure = Closure::wrap(Box::new(move |event: KeyboardEvent| {
                if event.code() == "Space" && !event.repeat() {
                    game.borrow_mut().input.toggle_highlight = true;
                }
            }) as Box<dyn FnMut(_)>);
            document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        set_text("title", GAME_TITLE);

        // requestAnimationFrame loop: exactly one tick + render per callback
        let raf_cell: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let raf_start = raf_cell.clone();
        *raf_start.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            game.borrow_mut().frame();
            request_animation_frame(raf_cell.borrow().as_ref().unwrap());
        }) as Box<dyn FnMut()>));
        request_animation_frame(raf_start.borrow().as_ref().unwrap());

        Ok(())
    }

    fn request_animation_frame(closure: &Closure<dyn FnMut()>) {
        web_sys::window()
            .expect("no window")
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .expect("requestAnimationFrame failed");
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(err) = wasm_game::run() {
        web_sys::console::error_1(&err);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Stripe Chase (native) starting...");

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0x5EED_CAFE);
    run_headless(seed);
}

/// Headless demo: a scripted pointer orbits the arena center until the
/// enemies catch up and drain the meter.
#[cfg(not(target_arch = "wasm32"))]
fn run_headless(seed: u64) {
    use glam::Vec2;
    use stripe_chase::HighScore;
    use stripe_chase::sim::{ContactKind, GameEvent, GamePhase, GameState, TickInput, tick};

    const MAX_TICKS: u64 = 100_000;

    let mut state = GameState::new(seed);
    let mut high_score = HighScore::load();
    let mut enemy_hits = 0u32;
    let mut obstacle_hits = 0u32;

    log::info!("running headless session with seed {seed:#x}");

    let center = Vec2::new(
        state.tuning.arena_width / 2.0,
        state.tuning.arena_height / 2.0,
    );
    let orbit = Vec2::new(
        state.tuning.arena_width / 4.0,
        state.tuning.arena_height / 4.0,
    );

    while state.phase == GamePhase::Playing && state.time_ticks < MAX_TICKS {
        let angle = state.time_ticks as f32 * 0.01;
        let pointer = center + Vec2::new(angle.cos(), angle.sin()) * orbit;
        let input = TickInput {
            pointer: Some(pointer),
            ..TickInput::default()
        };
        for event in tick(&mut state, &input) {
            match event {
                GameEvent::PlayerHit {
                    contact: ContactKind::Enemy,
                } => enemy_hits += 1,
                GameEvent::PlayerHit {
                    contact: ContactKind::Obstacle,
                } => obstacle_hits += 1,
                GameEvent::GameOver { score } => log::info!("game over with score {score}"),
                GameEvent::Restarted => {}
            }
        }
    }

    log::info!(
        "survived {} ticks ({} enemy contacts, {} obstacle contacts)",
        state.time_ticks,
        enemy_hits,
        obstacle_hits
    );

    if high_score.record(state.score) {
        high_score.save();
        log::info!("new best score {}", high_score.best);
    }
    println!("final score: {} (best: {})", state.score, high_score.best);
}

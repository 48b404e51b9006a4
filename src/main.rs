//! Retro Flappy entry point
//!
//! Handles platform-specific initialization and runs the game loop: one
//! update-then-render pair per display refresh.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use retro_flappy::BestScore;
    use retro_flappy::consts::{FIELD_HEIGHT, FIELD_WIDTH};
    use retro_flappy::renderer::{RenderState, build_scene};
    use retro_flappy::sim::{self, GameEvent, GameState};

    /// Game instance holding all state the loop and input handlers touch
    struct Game {
        state: GameState,
        render_state: Option<RenderState>,
        best: BestScore,
    }

    impl Game {
        fn new(seed: u64, best: BestScore) -> Self {
            Self {
                state: GameState::new(seed, best.best),
                render_state: None,
                best,
            }
        }

        /// Feed a flap from any input source and route whatever it triggers
        fn flap(&mut self) {
            let events = sim::flap(&mut self.state);
            self.apply(&events);
        }

        /// Advance one tick and route its events
        fn update(&mut self) {
            let events = sim::tick(&mut self.state);
            self.apply(&events);
        }

        /// Route simulation events to the DOM collaborators. Each external
        /// display is touched only when its value actually changed.
        fn apply(&mut self, events: &[GameEvent]) {
            for event in events {
                match *event {
                    GameEvent::RunStarted => {
                        hide_overlay();
                        set_text("score", "0");
                    }
                    GameEvent::ScoreChanged(score) => {
                        set_text("score", &score.to_string());
                    }
                    GameEvent::BestScoreChanged(best) => {
                        self.best.record(best);
                        set_text("bestScore", &best.to_string());
                    }
                    GameEvent::RunEnded { score, .. } => {
                        show_overlay(
                            "GAME OVER",
                            &format!("You scored {}. Press Space or Start to retry.", score),
                            "RESTART",
                        );
                    }
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            let vertices = build_scene(&self.state);
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&vertices) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }
    }

    fn set_text(id: &str, text: &str) {
        let document = web_sys::window().unwrap().document().unwrap();
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn show_overlay(title: &str, text: &str, action: &str) {
        set_text("overlayTitle", title);
        set_text("overlayText", text);
        set_text("startBtn", action);
        let document = web_sys::window().unwrap().document().unwrap();
        if let Some(el) = document.get_element_by_id("overlay") {
            let _ = el.class_list().add_1("visible");
        }
    }

    fn hide_overlay() {
        let document = web_sys::window().unwrap().document().unwrap();
        if let Some(el) = document.get_element_by_id("overlay") {
            let _ = el.class_list().remove_1("visible");
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Retro Flappy starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(FIELD_WIDTH as u32);
        canvas.set_height(FIELD_HEIGHT as u32);

        // Load the stored best score before the first frame
        let best = BestScore::load();
        set_text("bestScore", &best.best.to_string());

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed, best)));
        log::info!("Game initialized with seed: {}", seed);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state =
            RenderState::new(surface, &adapter, FIELD_WIDTH as u32, FIELD_HEIGHT as u32).await;
        game.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(&canvas, game.clone());

        show_overlay(
            "PRESS SPACE TO START",
            "Dodge the pipes and beat your best score.",
            "START",
        );

        request_animation_frame(game);

        log::info!("Retro Flappy running!");
    }

    /// Wire all three flap sources to the single flap entry point. Flaps are
    /// applied immediately on receipt: the loop is single-threaded, so no
    /// other mutation is ever in flight.
    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Space key, press-edge only (held-key repeats are ignored)
        {
            let game = game.clone();
            let document = web_sys::window().unwrap().document().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if event.code() == "Space" && !event.repeat() {
                    event.prevent_default();
                    game.borrow_mut().flap();
                }
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Tap/click on the play surface
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::PointerEvent| {
                game.borrow_mut().flap();
            });
            let _ = canvas
                .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Explicit start/restart button
        {
            let document = web_sys::window().unwrap().document().unwrap();
            if let Some(btn) = document.get_element_by_id("startBtn") {
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                    game.borrow_mut().flap();
                });
                let _ =
                    btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// One update-then-render pair per display refresh. Navigating away just
    /// stops the scheduling; there is nothing to tear down.
    fn game_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            g.update();
            g.render();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use retro_flappy::sim::{self, GameEvent, GameState, RunPhase};

    env_logger::init();
    log::info!("Retro Flappy (native) starting...");

    // Headless batch run: same tick entry point the browser driver calls,
    // driven by a scripted flap cadence instead of real input.
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xF1A9);
    let mut state = GameState::new(seed, 0);
    log::info!("Headless run with seed: {}", seed);

    sim::flap(&mut state);
    let mut ticks = 0u64;
    while state.phase == RunPhase::Running && ticks < 10_000 {
        if ticks % 38 == 0 {
            sim::flap(&mut state);
        }
        for event in sim::tick(&mut state) {
            if let GameEvent::RunEnded { score, best } = event {
                log::info!("Run ended: score {} (best {})", score, best);
            }
        }
        ticks += 1;
    }

    println!(
        "seed {} survived {} ticks, score {}",
        seed, ticks, state.score
    );
}

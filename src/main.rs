//! Orb Blaster entry point
//!
//! Browser: wires the canvas, start button and clicks to a `Session` and
//! drives it from `requestAnimationFrame`.
//! Native: runs a headless autopilot demo and prints a JSON summary.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::DVec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent};

    use orb_blaster::renderer::CanvasRenderer;
    use orb_blaster::ui::DomHud;
    use orb_blaster::{Session, Settings};

    /// Game instance holding all state
    struct Game {
        session: Session,
        renderer: CanvasRenderer,
        hud: DomHud,
        /// Pending animation frame request, cancelled on restart
        frame_request: Option<i32>,
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Orb Blaster starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = document
            .query_selector("canvas")?
            .ok_or_else(|| JsValue::from_str("no canvas"))?
            .dyn_into()?;

        // Canvas fills the viewport
        let width = window.inner_width()?.as_f64().unwrap_or(800.0);
        let height = window.inner_height()?.as_f64().unwrap_or(600.0);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let game = Rc::new(RefCell::new(Game {
            session: Session::new(Settings::default(), width, height),
            renderer: CanvasRenderer::new(&canvas)?,
            hud: DomHud::from_document(&document)?,
            frame_request: None,
        }));

        setup_click_handler(game.clone())?;
        setup_start_button(game)?;

        log::info!("Orb Blaster ready ({}x{})", width, height);
        Ok(())
    }

    fn setup_click_handler(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let pos = DVec2::new(f64::from(event.client_x()), f64::from(event.client_y()));
            game.borrow_mut().session.click(pos);
        });
        window.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn setup_start_button(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let button = document
            .get_element_by_id("startGameButton")
            .ok_or_else(|| JsValue::from_str("missing #startGameButton"))?;

        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            // Keep the start click from also firing a projectile
            event.stop_propagation();

            let seed = js_sys::Date::now() as u64;
            {
                let mut g = game.borrow_mut();
                if let Some(handle) = g.frame_request.take() {
                    if let Some(window) = web_sys::window() {
                        let _ = window.cancel_animation_frame(handle);
                    }
                }
                let Game { session, hud, .. } = &mut *g;
                session.start(seed, hud);
            }
            request_animation_frame(game.clone());
        });
        button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let loop_game = game.clone();
        let closure = Closure::once(move |time: f64| {
            game_loop(loop_game, time);
        });
        match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            Ok(handle) => game.borrow_mut().frame_request = Some(handle),
            Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
        }
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let keep_running = {
            let mut g = game.borrow_mut();
            g.frame_request = None;
            let Game {
                session,
                renderer,
                hud,
                ..
            } = &mut *g;
            session.frame(time, renderer, hud)
        };

        if keep_running {
            request_animation_frame(game);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use serde::Serialize;

    use orb_blaster::renderer::HeadlessRenderer;
    use orb_blaster::sim::autopilot::demo_input;
    use orb_blaster::ui::HeadlessHud;
    use orb_blaster::{Session, SessionPhase, Settings};

    const FRAME_MS: f64 = 1000.0 / 60.0;

    /// Outcome of a headless demo run
    #[derive(Debug, Serialize)]
    pub struct RunSummary {
        pub seed: u64,
        pub frames: u64,
        pub phase: SessionPhase,
        pub score: u64,
        pub final_score: Option<u64>,
        pub enemies_alive: usize,
        pub projectiles_alive: usize,
        pub particles_alive: usize,
        pub circles_drawn: u64,
    }

    /// Play one session with the autopilot until it ends or runs out of frames
    pub fn run_demo(settings: &Settings) -> RunSummary {
        let seed = settings.seed.unwrap_or(1);
        let mut session = Session::new(
            settings.clone(),
            settings.canvas_width,
            settings.canvas_height,
        );
        let mut renderer = HeadlessRenderer::default();
        let mut hud = HeadlessHud::default();
        session.start(seed, &mut hud);

        let mut frames = 0u64;
        while frames < u64::from(settings.demo_frames) {
            let input = demo_input(session.state(), frames, settings.demo_fire_interval);
            for click in input.clicks {
                session.click(click);
            }
            let now = frames as f64 * FRAME_MS;
            frames += 1;
            if !session.frame(now, &mut renderer, &mut hud) {
                break;
            }
        }

        let state = session.state();
        RunSummary {
            seed: state.seed,
            frames,
            phase: session.phase(),
            score: session.score(),
            final_score: session.final_score(),
            enemies_alive: state.enemies.len(),
            projectiles_alive: state.projectiles.len(),
            particles_alive: state.particles.len(),
            circles_drawn: renderer.circles_drawn,
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use orb_blaster::Settings;

    env_logger::init();
    log::info!("Orb Blaster (native) starting...");
    log::info!("Native mode runs a headless demo - serve the wasm build to play");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load_from_file(&path).unwrap_or_else(|e| {
            log::warn!("Failed to load settings from {}: {}; using defaults", path, e);
            Settings::default()
        }),
        None => Settings::default(),
    };

    let summary = headless::run_demo(&settings);
    log::info!(
        "Demo finished after {} frames with score {}",
        summary.frames,
        summary.score
    );

    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize summary: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

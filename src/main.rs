//! Energy Maze entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement};

    use energy_maze::hud::HudSnapshot;
    use energy_maze::platform::KeyAction;
    use energy_maze::renderer::{RenderState, build_scene};
    use energy_maze::sim::{GamePhase, GameState, Intent, TickInput, tick};
    use energy_maze::{AudioManager, Settings};

    /// Screen containers toggled with the `hidden` class
    const SCREENS: [&str; 5] = [
        "title-screen",
        "instructions-screen",
        "game-screen",
        "win-screen",
        "lose-screen",
    ];

    /// Game instance holding all state
    struct Game {
        state: GameState,
        settings: Settings,
        audio: AudioManager,
        render_state: Option<RenderState>,
        canvas: Option<HtmlCanvasElement>,
        /// Intents received since the last frame
        pending: Vec<Intent>,
        showing_instructions: bool,
        /// Phase the screens were last synced to
        shown_phase: Option<GamePhase>,
        rng: rand::rngs::ThreadRng,
    }

    impl Game {
        fn new(seed: u64, settings: Settings) -> Self {
            Self {
                state: GameState::new(seed),
                audio: AudioManager::with_settings(&settings),
                settings,
                render_state: None,
                canvas: None,
                pending: Vec::new(),
                showing_instructions: false,
                shown_phase: None,
                rng: rand::rng(),
            }
        }

        fn push_intent(&mut self, intent: Intent) {
            self.pending.push(intent);
        }

        /// Run one simulation tick and play its sounds
        fn update(&mut self, time: f64) {
            let input = TickInput {
                intents: std::mem::take(&mut self.pending),
                now_ms: time,
            };
            tick(&mut self.state, &input);

            let events = self.state.drain_events();
            self.audio.play_events(&events);
        }

        /// Match the surface to the canvas's current backing size
        fn fit_canvas(&mut self) {
            let (Some(canvas), Some(render_state)) = (&self.canvas, self.render_state.as_mut())
            else {
                return;
            };
            let dpr = web_sys::window().map_or(1.0, |w| w.device_pixel_ratio());
            let width = (canvas.client_width() as f64 * dpr) as u32;
            let height = (canvas.client_height() as f64 * dpr) as u32;
            if (width, height) != render_state.size && width > 0 && height > 0 {
                canvas.set_width(width);
                canvas.set_height(height);
                render_state.resize(width, height);
                log::debug!("Canvas resized to {}x{}", width, height);
            }
        }

        /// Render the current frame
        fn render(&mut self, time: f64) {
            let Some(render_state) = self.render_state.as_mut() else {
                return;
            };
            let vertices = build_scene(
                &self.state,
                &self.settings,
                (time / 1000.0) as f32,
                &mut self.rng,
            );
            match render_state.render(&vertices) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    render_state.reconfigure();
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }

        /// Show the views matching the current phase
        fn sync_screens(&mut self, document: &Document) {
            let phase = self.state.phase;
            if self.shown_phase == Some(phase) && phase != GamePhase::Title {
                return;
            }
            self.shown_phase = Some(phase);

            let visible: &[&str] = match phase {
                GamePhase::Title if self.showing_instructions => &["instructions-screen"],
                GamePhase::Title => &["title-screen"],
                GamePhase::Playing => &["game-screen"],
                GamePhase::Won => &["game-screen", "win-screen"],
                GamePhase::Lost => &["game-screen", "lose-screen"],
            };
            for id in SCREENS {
                set_hidden(document, id, !visible.contains(&id));
            }

            let hud = HudSnapshot::from_state(&self.state);
            match phase {
                GamePhase::Won => {
                    set_text(document, "win-steps", &hud.steps.to_string());
                    set_text(document, "win-energy", &hud.energy.to_string());
                    set_text(document, "win-time", &hud.elapsed);
                }
                GamePhase::Lost => {
                    set_text(document, "lose-steps", &hud.steps.to_string());
                    set_text(document, "lose-time", &hud.elapsed);
                }
                GamePhase::Title | GamePhase::Playing => {}
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self, document: &Document) {
            let hud = HudSnapshot::from_state(&self.state);
            set_text(document, "hud-energy", &hud.energy.to_string());
            set_text(document, "hud-steps", &hud.steps.to_string());
            set_text(document, "hud-time", &hud.elapsed);
            set_text(
                document,
                "mute-indicator",
                if self.audio.is_muted() { "muted" } else { "" },
            );
        }
    }

    fn set_hidden(document: &Document, id: &str, hidden: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            let _ = el.class_list().toggle_with_force("hidden", hidden);
        }
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            if el.text_content().as_deref() != Some(text) {
                el.set_text_content(Some(text));
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Energy Maze starting...");

        let Some(window) = web_sys::window() else {
            log::error!("No window");
            return;
        };
        let Some(document) = window.document() else {
            log::error!("No document");
            return;
        };

        let Some(canvas) = document
            .get_element_by_id("canvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("No canvas element");
            return;
        };

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let seed = js_sys::Date::now() as u64;
        let settings = Settings::load();
        let game = Rc::new(RefCell::new(Game::new(seed, settings)));
        log::info!("Game initialized with seed: {}", seed);

        // Initialize WebGPU (falls back to WebGL)
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        match init_renderer(&instance, canvas.clone(), width, height).await {
            Some(render_state) => {
                let mut g = game.borrow_mut();
                g.render_state = Some(render_state);
                g.canvas = Some(canvas);
            }
            None => log::warn!("Rendering disabled"),
        }

        setup_keyboard(game.clone());
        setup_buttons(&document, game.clone());

        request_animation_frame(game);

        log::info!("Energy Maze running!");
    }

    async fn init_renderer(
        instance: &wgpu::Instance,
        canvas: HtmlCanvasElement,
        width: u32,
        height: u32,
    ) -> Option<RenderState> {
        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas))
            .map_err(|e| log::error!("Failed to create surface: {}", e))
            .ok()?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| log::error!("Failed to get adapter: {}", e))
            .ok()?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        RenderState::new(surface, &adapter, width, height)
            .await
            .map_err(|e| log::error!("Failed to create device: {}", e))
            .ok()
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            let Some(action) = KeyAction::from_key(&event.key()) else {
                return;
            };
            // Keep arrows from scrolling the page
            event.prevent_default();

            let mut g = game.borrow_mut();
            g.audio.resume();
            match action {
                KeyAction::ToggleMute => {
                    g.audio.toggle_muted();
                }
                _ => {
                    if let Some(intent) = action.intent() {
                        g.push_intent(intent);
                    }
                }
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Attach `on_click` to the element with `id`, if present
    fn on_click(
        document: &Document,
        id: &str,
        game: Rc<RefCell<Game>>,
        on_click: impl Fn(&mut Game) + 'static,
    ) {
        let Some(btn) = document.get_element_by_id(id) else {
            log::warn!("Missing button #{}", id);
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            let mut g = game.borrow_mut();
            g.audio.resume();
            on_click(&mut g);
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_buttons(document: &Document, game: Rc<RefCell<Game>>) {
        on_click(document, "start-btn", game.clone(), |g| {
            g.showing_instructions = false;
            g.push_intent(Intent::Start);
        });
        on_click(document, "instructions-btn", game.clone(), |g| {
            g.showing_instructions = true;
            g.shown_phase = None;
        });
        on_click(document, "back-btn", game.clone(), |g| {
            g.showing_instructions = false;
            g.shown_phase = None;
        });
        for id in ["win-restart-btn", "lose-restart-btn"] {
            on_click(document, id, game.clone(), |g| g.push_intent(Intent::Restart));
        }
        for id in ["win-menu-btn", "lose-menu-btn"] {
            on_click(document, id, game.clone(), |g| g.push_intent(Intent::ShowTitle));
        }
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
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            let mut g = game.borrow_mut();
            g.update(time);
            g.fit_canvas();
            g.render(time);
            g.sync_screens(&document);
            g.update_hud(&document);
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

/// Headless run: walk the maze along a fixed route at one move per frame
/// while hazards patrol, then print a summary.
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use energy_maze::hud::HudSnapshot;
    use energy_maze::renderer::build_scene;
    use energy_maze::sim::{Direction, GameState, Intent, TickInput, tick};
    use energy_maze::{AudioManager, Settings};

    const FRAME_MS: f64 = 1000.0 / 60.0;
    const ROUTE: &[(Direction, usize)] = &[
        (Direction::Right, 14),
        (Direction::Up, 5),
        (Direction::Left, 11),
        (Direction::Up, 4),
        (Direction::Right, 11),
        (Direction::Up, 4),
        (Direction::Right, 3),
    ];

    env_logger::init();
    log::info!("Energy Maze (native) starting...");
    log::info!("Native mode runs a headless demo - serve the wasm build for the real game");

    let settings = Settings::load();
    let audio = AudioManager::with_settings(&settings);
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(7);

    let mut state = GameState::new(seed);
    let mut now_ms = 0.0;
    let mut frames = std::iter::once(Intent::Start).chain(
        ROUTE
            .iter()
            .flat_map(|&(dir, n)| std::iter::repeat_n(Intent::Move(dir), n)),
    );

    // One intent per frame, then let the particles settle
    let mut settle = 120;
    while settle > 0 {
        let intents: Vec<Intent> = frames.next().into_iter().collect();
        if intents.is_empty() {
            settle -= 1;
        }
        tick(&mut state, &TickInput { intents, now_ms });
        audio.play_events(&state.drain_events());
        now_ms += FRAME_MS;
    }

    let mut rng = rand::rng();
    let vertices = build_scene(&state, &settings, (now_ms / 1000.0) as f32, &mut rng).len();

    let summary = serde_json::json!({
        "seed": seed,
        "phase": state.phase,
        "hud": HudSnapshot::from_state(&state),
        "ticks": state.time_ticks,
        "scene_vertices": vertices,
    });
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to encode summary: {}", e),
    }
}

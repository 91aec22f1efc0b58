//! Cube Bounce entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use cube_bounce::renderer::RenderState;
    use cube_bounce::settings::Settings;
    use cube_bounce::sim::{Bounds, GamePhase, GameState, TickInput, tick};
    use glam::Vec2;

    /// Keys currently held, folded into a steering vector each frame
    #[derive(Default)]
    struct Held {
        up: bool,
        down: bool,
        left: bool,
        right: bool,
    }

    impl Held {
        fn direction(&self) -> Vec2 {
            let mut dir = Vec2::ZERO;
            if self.left {
                dir.x -= 1.0;
            }
            if self.right {
                dir.x += 1.0;
            }
            if self.up {
                dir.y -= 1.0;
            }
            if self.down {
                dir.y += 1.0;
            }
            dir
        }
    }

    /// Game instance holding all state
    struct Game {
        state: GameState,
        render_state: Option<RenderState>,
        held: Held,
        escape: bool,
        bounds: Bounds,
        settings: Settings,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl Game {
        fn new(width: f32, height: f32) -> Self {
            Self {
                state: GameState::new(),
                render_state: None,
                held: Held::default(),
                escape: false,
                bounds: Bounds::new(width, height),
                settings: Settings::load(),
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
            }
        }

        /// Advance the sim by one frame and clear one-shot inputs
        fn update(&mut self, time: f64) {
            let input = TickInput {
                direction: self.held.direction(),
                escape: self.escape,
            };
            tick(&mut self.state, &input, self.bounds);
            self.escape = false;

            // Track frame times for FPS
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;
            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&self.state) {
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

        /// Toggle the menu overlay and update the FPS counter
        fn update_hud(&self) {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            if let Some(el) = document.get_element_by_id("menu") {
                let class = if self.state.phase == GamePhase::Menu {
                    ""
                } else {
                    "hidden"
                };
                let _ = el.set_attribute("class", class);
            }

            if let Some(el) = document.get_element_by_id("fps") {
                if self.settings.show_fps {
                    el.set_text_content(Some(&self.fps.to_string()));
                } else {
                    el.set_text_content(None);
                }
            }
        }

        /// Start a game from the menu
        fn start_game(&mut self) {
            if self.state.phase == GamePhase::Menu {
                self.state.enter_game();
                log::info!("Game started");
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Cube Bounce starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Match the backing store to the display size
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let game = Rc::new(RefCell::new(Game::new(width as f32, height as f32)));

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

        let settings = game.borrow().settings.clone();
        let render_state = match RenderState::new(surface, &adapter, width, height, &settings).await
        {
            Ok(rs) => rs,
            Err(e) => {
                // Setup failures abort; no degraded rendering
                log::error!("Renderer setup failed: {e}");
                return;
            }
        };
        game.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(&canvas, game.clone());

        request_animation_frame(game);

        log::info!("Cube Bounce running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Keyboard down: steering, start, escape
        {
            let game = game.clone();
            let window = web_sys::window().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowUp" | "w" | "W" => g.held.up = true,
                    "ArrowDown" | "s" | "S" => g.held.down = true,
                    "ArrowLeft" | "a" | "A" => g.held.left = true,
                    "ArrowRight" | "d" | "D" => g.held.right = true,
                    " " | "Enter" => g.start_game(),
                    "Escape" => g.escape = true,
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard up: release steering
        {
            let game = game.clone();
            let window = web_sys::window().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowUp" | "w" | "W" => g.held.up = false,
                    "ArrowDown" | "s" | "S" => g.held.down = false,
                    "ArrowLeft" | "a" | "A" => g.held.left = false,
                    "ArrowRight" | "d" | "D" => g.held.right = false,
                    _ => {}
                }
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Click starts from the menu
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().start_game();
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            g.update(time);
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Cube Bounce (native) starting...");
    log::info!("Rendering requires a browser canvas - run the web build for the full demo");

    // Headless sim smoke run
    headless_bounce();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn headless_bounce() {
    use cube_bounce::sim::{Bounds, GameState, TickInput, tick};

    let bounds = Bounds::new(800.0, 600.0);
    let mut state = GameState::new();
    state.enter_game();

    for _ in 0..120 {
        tick(&mut state, &TickInput::default(), bounds);
    }

    log::info!(
        "After 120 frames: pos=({:.1}, {:.1}) vel=({:.2}, {:.2})",
        state.ball.pos.x,
        state.ball.pos.y,
        state.ball.vel.x,
        state.ball.vel.y
    );
}

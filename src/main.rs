//! Orb Dash entry point
//!
//! Browser: canvas game loop driven by requestAnimationFrame.
//! Native: headless run of the stock course, optionally with the autopilot,
//! printing a JSON summary.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement};

    use orb_dash::consts::SIM_DT;
    use orb_dash::platform::{DeviceEvent, PointerInput};
    use orb_dash::renderer::CanvasPresenter;
    use orb_dash::sim::{Level, RunController};
    use orb_dash::Tuning;

    /// Game instance holding all state
    struct Game {
        run: RunController,
        presenter: CanvasPresenter,
        last_time: f64,
    }

    impl Game {
        /// Run simulation ticks for the time since the last frame
        fn update(&mut self, time: f64) {
            let dt = if self.last_time > 0.0 {
                ((time - self.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            self.last_time = time;
            self.run.advance(dt, &mut self.presenter);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Orb Dash starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let tuning = Tuning::default();

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("dashCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(tuning.viewport_width as u32);
        canvas.set_height(tuning.viewport_height as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let progress_bar = document
            .get_element_by_id("progress-bar")
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        if progress_bar.is_none() {
            log::warn!("No #progress-bar element; progress will not be shown");
        }

        let presenter = CanvasPresenter::new(
            ctx,
            tuning.viewport_width as f64,
            tuning.viewport_height as f64,
            progress_bar,
        );

        let run = match RunController::new(tuning, Level::default_course()) {
            Ok(run) => run,
            Err(e) => {
                log::error!("Invalid tuning: {}", e);
                return;
            }
        };

        setup_input_handlers(&window, PointerInput::new(run.input()));

        let game = Rc::new(RefCell::new(Game {
            run,
            presenter,
            last_time: 0.0,
        }));

        request_animation_frame(game);

        log::info!("Orb Dash running!");
    }

    fn setup_input_handlers(window: &web_sys::Window, pointer: PointerInput) {
        for name in ["mousedown", "mouseup", "touchstart", "touchend"] {
            let pointer = pointer.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
                if let Some(device_event) = DeviceEvent::from_dom(&event.type_()) {
                    if device_event == DeviceEvent::TouchStart {
                        event.prevent_default();
                    }
                    pointer.handle(device_event);
                }
            });
            if let Err(e) =
                window.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
            {
                log::warn!("Failed to bind {} listener: {:?}", name, e);
            }
            closure.forget();
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
        game.borrow_mut().update(time);
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::PathBuf;

    use clap::Parser;
    use serde::Serialize;

    use orb_dash::platform::{Autopilot, DEFAULT_LEAD};
    use orb_dash::renderer::TracePresenter;
    use orb_dash::sim::{Level, ResetCause, RunController, TickOutcome};
    use orb_dash::{ConfigError, Tuning};

    /// Headless run of the stock course
    #[derive(Debug, Clone, Parser)]
    #[command(version, about)]
    pub struct Options {
        /// Ticks to simulate (60 per second)
        #[arg(long, default_value_t = 3600)]
        pub ticks: u64,

        /// JSON file overriding the default tuning
        #[arg(long, value_name = "PATH")]
        pub config: Option<PathBuf>,

        /// Let the scripted player press the input
        #[arg(long)]
        pub autopilot: bool,

        /// Autopilot look-ahead in pixels
        #[arg(long, default_value_t = DEFAULT_LEAD)]
        pub lead: f32,
    }

    /// Reset counts by cause
    #[derive(Debug, Default, Serialize)]
    pub struct ResetCounts {
        pub hazard: u32,
        pub block: u32,
        pub course_complete: u32,
        pub non_finite: u32,
    }

    impl ResetCounts {
        fn record(&mut self, cause: ResetCause) {
            match cause {
                ResetCause::Hazard { .. } => self.hazard += 1,
                ResetCause::Block { .. } => self.block += 1,
                ResetCause::CourseComplete => self.course_complete += 1,
                ResetCause::NonFinite => self.non_finite += 1,
            }
        }
    }

    #[derive(Debug, Serialize)]
    pub struct Summary {
        pub ticks: u64,
        pub attempts: u32,
        pub resets: ResetCounts,
        pub best_progress: f32,
        pub presses: u32,
    }

    pub fn run(options: &Options) -> Result<Summary, ConfigError> {
        let tuning = match &options.config {
            Some(path) => Tuning::load(path)?,
            None => Tuning::default(),
        };
        let mut run = RunController::new(tuning, Level::default_course())?;
        let pilot = Autopilot::new(run.input()).with_lead(options.lead);
        let mut presenters = (TracePresenter::default(), pilot);
        let mut resets = ResetCounts::default();

        for _ in 0..options.ticks {
            let outcome = if options.autopilot {
                run.step_and_present(&mut presenters)
            } else {
                run.step_and_present(&mut presenters.0)
            };
            if let TickOutcome::Reset(cause) = outcome {
                resets.record(cause);
            }
        }

        Ok(Summary {
            ticks: options.ticks,
            attempts: run.attempts(),
            resets,
            best_progress: presenters.0.best_progress,
            presses: presenters.1.presses(),
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use clap::Parser;
    use std::process::ExitCode;

    env_logger::init();
    log::info!("Orb Dash (native) starting...");

    let options = headless::Options::parse();

    match headless::run(&options) {
        Ok(summary) => {
            match serde_json::to_string_pretty(&summary) {
                Ok(json) => println!("{json}"),
                Err(e) => log::error!("Failed to encode summary: {}", e),
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

//! Web front-end: binds the particle engine to a 2D canvas and the
//! surrounding control elements, and exposes the engine lifecycle to the
//! page glue.

#![cfg(target_arch = "wasm32")]

use gravity_core::{DataPoint, Engine, Filter, Viewport};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod error;
mod events;
mod frame;
mod overlay;
mod render;

use constants::ENGINE_SEED;
use error::InitError;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("gravity-web starting");
    Ok(())
}

/// Handle exported to the page glue. Owns one engine bound to one canvas.
/// Constructing a second handle on the same canvas is unsupported; the page
/// creates one per canvas and keeps it.
#[wasm_bindgen]
pub struct Visualizer {
    engine: Rc<RefCell<Engine>>,
}

#[wasm_bindgen]
impl Visualizer {
    /// Bind the canvas, acquire the 2D context, wire resize/pointer/filter
    /// listeners and start the frame loop. Fails fast when the canvas or
    /// its context is unavailable.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: Option<String>) -> Result<Visualizer, JsValue> {
        let id = canvas_id.unwrap_or_else(|| constants::CANVAS_ID.to_string());
        Ok(Self::init(&id)?)
    }

    /// Ingest one classified record and spawn its particle.
    #[wasm_bindgen(js_name = addDataPoint)]
    pub fn add_data_point(&self, text: String, emotion: String, score: f32) {
        self.engine
            .borrow_mut()
            .add_point(DataPoint { text, emotion, score });
    }

    /// Remove all particles and hide the detail overlay.
    pub fn clear(&self) {
        self.engine.borrow_mut().clear();
        if let Some(doc) = dom::window_document() {
            overlay::hide(&doc);
        }
    }

    /// Populate the canvas from the built-in sample corpus.
    #[wasm_bindgen(js_name = spawnDemoParticles)]
    pub fn spawn_demo_particles(&self, n: usize) {
        self.engine.borrow_mut().spawn_demo(n);
        log::info!("[engine] spawned {n} demo particles");
    }

    /// `"all"` or one emotion label.
    #[wasm_bindgen(js_name = setFilter)]
    pub fn set_filter(&self, label: &str) {
        self.engine.borrow_mut().set_filter(Filter::from_label(label));
    }

    /// Number of live particles.
    #[wasm_bindgen(js_name = particleCount)]
    pub fn particle_count(&self) -> usize {
        self.engine.borrow().particles().len()
    }
}

impl Visualizer {
    fn init(canvas_id: &str) -> Result<Visualizer, InitError> {
        let window = web::window().ok_or(InitError::NoWindow)?;
        let document = window.document().ok_or(InitError::NoDocument)?;

        let canvas: web::HtmlCanvasElement = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| InitError::MissingCanvas(canvas_id.to_string()))?
            .dyn_into()
            .map_err(|_| InitError::NotACanvas(canvas_id.to_string()))?;

        let (w, h) = dom::sync_canvas_to_window(&canvas);

        let ctx = canvas
            .get_context("2d")
            .map_err(|_| InitError::ContextUnavailable)?
            .ok_or(InitError::ContextUnavailable)?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|_| InitError::ContextUnavailable)?;

        let engine = Rc::new(RefCell::new(Engine::new(Viewport::new(w, h), ENGINE_SEED)));

        dom::wire_canvas_resize(&canvas);
        events::wire_input_handlers(events::InputWiring {
            canvas: canvas.clone(),
            engine: engine.clone(),
        });
        events::wire_filter_buttons(&document, engine.clone());

        let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
            engine: engine.clone(),
            painter: render::CanvasPainter::new(ctx),
            canvas,
            last_instant: Instant::now(),
        }));
        frame::start_loop(frame_ctx);

        log::info!("[engine] initialized {}x{}", w as u32, h as u32);
        Ok(Visualizer { engine })
    }
}

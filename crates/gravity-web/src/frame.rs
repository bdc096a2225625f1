//! Per-frame tick driven by requestAnimationFrame.

use crate::constants::{OVERLAY_HEIGHT, OVERLAY_WIDTH};
use crate::dom;
use crate::overlay;
use crate::render::CanvasPainter;
use glam::Vec2;
use gravity_core::Engine;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub engine: Rc<RefCell<Engine>>,
    pub painter: CanvasPainter,
    pub canvas: web::HtmlCanvasElement,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        let mut engine = self.engine.borrow_mut();

        // The resize listener updates the backing store; mirror it into the
        // engine before integrating so the boundary clamp sees current bounds.
        let (w, h) = (self.canvas.width() as f32, self.canvas.height() as f32);
        if engine.view().width != w || engine.view().height != h {
            engine.resize(w, h);
        }

        engine.tick(dt);
        engine.draw(&mut self.painter);

        let anchor = engine.overlay_anchor(Vec2::new(OVERLAY_WIDTH, OVERLAY_HEIGHT));
        drop(engine);

        if let Some(pos) = anchor {
            if let Some(doc) = dom::window_document() {
                overlay::reposition(&doc, pos.x, pos.y);
            }
        }
    }
}

/// Kick off the self-rescheduling frame loop. It runs for the lifetime of
/// the page; the per-tick work lives in [`FrameContext::frame`] so a stop
/// control could be added here without touching the engine.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}

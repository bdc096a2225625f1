//! Pointer and filter-control wiring.

use crate::constants::{ACTIVE_CLASS, FILTER_BTN_PREFIX, FILTER_LABELS};
use crate::dom;
use crate::overlay;
use gravity_core::{Engine, Filter};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub engine: Rc<RefCell<Engine>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_click(&w);
}

/// Event position in canvas pixels. The backing store is window-sized, so
/// CSS and canvas pixels normally agree; the rect math keeps it honest when
/// they do not. `PointerEvent` derefs to `MouseEvent`, so both handlers use
/// this.
fn event_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> (f32, f32) {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let (rw, rh) = (rect.width() as f32, rect.height() as f32);
    let sx = if rw > 0.0 {
        (x_css / rw) * canvas.width() as f32
    } else {
        x_css
    };
    let sy = if rh > 0.0 {
        (y_css / rh) * canvas.height() as f32
    } else {
        y_css
    };
    (sx, sy)
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let (x, y) = event_canvas_px(&ev, &w.canvas);
        w.engine.borrow_mut().pointer_moved(x, y);
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_click(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let (x, y) = event_canvas_px(&ev, &w.canvas);
        let mut engine = w.engine.borrow_mut();
        engine.click_at(x, y);
        match engine.selection() {
            Some(p) => {
                log::info!("[click] selected {} particle", p.emotion.label());
                if let Some(doc) = dom::window_document() {
                    overlay::show(&doc, p);
                }
            }
            None => {
                log::info!("[click] selection cleared");
                if let Some(doc) = dom::window_document() {
                    overlay::hide(&doc);
                }
            }
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// One button per label; clicking one makes it the sole active control.
pub fn wire_filter_buttons(document: &web::Document, engine: Rc<RefCell<Engine>>) {
    for label in FILTER_LABELS {
        let engine = engine.clone();
        let id = format!("{FILTER_BTN_PREFIX}{label}");
        dom::add_click_listener(document, &id, move || {
            engine.borrow_mut().set_filter(Filter::from_label(label));
            if let Some(doc) = dom::window_document() {
                mark_active_filter(&doc, label);
            }
            log::info!("[filter] {label}");
        });
    }
}

fn mark_active_filter(document: &web::Document, active: &str) {
    for label in FILTER_LABELS {
        if let Some(el) = document.get_element_by_id(&format!("{FILTER_BTN_PREFIX}{label}")) {
            let cl = el.class_list();
            if label == active {
                _ = cl.add_1(ACTIVE_CLASS);
            } else {
                _ = cl.remove_1(ACTIVE_CLASS);
            }
        }
    }
}

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Size the canvas backing store to the full window.
pub fn sync_canvas_to_window(canvas: &web::HtmlCanvasElement) -> (f32, f32) {
    let (mut w, mut h) = (canvas.width() as f64, canvas.height() as f64);
    if let Some(window) = web::window() {
        if let Some(iw) = window.inner_width().ok().and_then(|v| v.as_f64()) {
            w = iw;
        }
        if let Some(ih) = window.inner_height().ok().and_then(|v| v.as_f64()) {
            h = ih;
        }
        canvas.set_width((w as u32).max(1));
        canvas.set_height((h as u32).max(1));
    }
    (w as f32, h as f32)
}

/// Keep the backing store window-sized across window resizes. The frame loop
/// mirrors the canvas dimensions into the engine viewport.
pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        sync_canvas_to_window(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

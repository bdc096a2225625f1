//! Floating detail panel for the selected particle.

use crate::constants::{DETAIL_OVERLAY_ID, HIDDEN_CLASS};
use gravity_core::Particle;
use wasm_bindgen::JsCast;
use web_sys as web;

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Populate the panel with the emotion label and the full source text, then
/// reveal it.
pub fn show(document: &web::Document, particle: &Particle) {
    if let Some(el) = document.get_element_by_id(DETAIL_OVERLAY_ID) {
        let html = format!(
            "<div class=\"detail-emotion\">{}</div><div class=\"detail-text\">{}</div>",
            particle.emotion.label(),
            escape_html(&particle.point.text)
        );
        el.set_inner_html(&html);
        _ = el.class_list().remove_1(HIDDEN_CLASS);
    }
}

pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(DETAIL_OVERLAY_ID) {
        _ = el.class_list().add_1(HIDDEN_CLASS);
    }
}

/// Move the panel; the frame loop calls this every tick while a particle is
/// selected so the panel tracks it.
pub fn reposition(document: &web::Document, x: f32, y: f32) {
    if let Some(el) = document.get_element_by_id(DETAIL_OVERLAY_ID) {
        if let Ok(hel) = el.dyn_into::<web::HtmlElement>() {
            let style = hel.style();
            _ = style.set_property("left", &format!("{x:.0}px"));
            _ = style.set_property("top", &format!("{y:.0}px"));
        }
    }
}

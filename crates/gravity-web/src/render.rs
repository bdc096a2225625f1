//! Canvas 2D implementation of the core painter.

use glam::Vec2;
use gravity_core::{Painter, Viewport};
use std::f64::consts::TAU;
use web_sys::{CanvasGradient, CanvasRenderingContext2d};

pub struct CanvasPainter {
    ctx: CanvasRenderingContext2d,
}

fn rgba(color: [u8; 3], alpha: f32) -> String {
    format!(
        "rgba({},{},{},{:.3})",
        color[0],
        color[1],
        color[2],
        alpha.clamp(0.0, 1.0)
    )
}

impl CanvasPainter {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    fn radial(&self, center: Vec2, radius: f32, color: [u8; 3], alpha: f32) -> Option<CanvasGradient> {
        let (cx, cy) = (center.x as f64, center.y as f64);
        let g = self
            .ctx
            .create_radial_gradient(cx, cy, 0.0, cx, cy, radius as f64)
            .ok()?;
        _ = g.add_color_stop(0.0, &rgba(color, alpha));
        _ = g.add_color_stop(1.0, &rgba(color, 0.0));
        Some(g)
    }
}

impl Painter for CanvasPainter {
    fn trail(&mut self, view: Viewport, alpha: f32) {
        self.ctx.set_fill_style_str(&format!("rgba(8,10,18,{alpha:.3})"));
        self.ctx
            .fill_rect(0.0, 0.0, view.width as f64, view.height as f64);
    }

    fn glow(&mut self, center: Vec2, radius: f32, color: [u8; 3], alpha: f32) {
        if let Some(g) = self.radial(center, radius, color, alpha) {
            self.ctx.set_fill_style_canvas_gradient(&g);
            self.ctx.begin_path();
            _ = self
                .ctx
                .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
            self.ctx.fill();
        }
    }

    fn disc(&mut self, center: Vec2, radius: f32, color: [u8; 3], alpha: f32) {
        self.ctx.set_fill_style_str(&rgba(color, alpha));
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
        self.ctx.fill();
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: [u8; 3], alpha: f32, width: f32) {
        self.ctx.set_stroke_style_str(&rgba(color, alpha));
        self.ctx.set_line_width(width as f64);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    fn ring(&mut self, center: Vec2, radius: f32, color: [u8; 3], width: f32) {
        self.ctx.set_stroke_style_str(&rgba(color, 0.9));
        self.ctx.set_line_width(width as f64);
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
        self.ctx.stroke();
    }

    fn callout(&mut self, anchor: Vec2, text: &str) {
        // box sized from the excerpt length; monospace keeps the estimate honest
        let w = 7.2 * text.chars().count().max(8) as f64 + 16.0;
        let h = 26.0;
        let x = anchor.x as f64;
        let y = anchor.y as f64 - h;

        self.ctx.set_fill_style_str("rgba(10,14,24,0.85)");
        self.ctx.fill_rect(x, y, w, h);
        self.ctx.set_stroke_style_str("rgba(80,110,150,0.35)");
        self.ctx.set_line_width(1.0);
        self.ctx.stroke_rect(x, y, w, h);

        self.ctx.set_font("12px 'IBM Plex Mono', monospace");
        self.ctx.set_fill_style_str("rgba(207,231,255,0.95)");
        _ = self.ctx.fill_text(text, x + 8.0, y + 17.0);
    }
}

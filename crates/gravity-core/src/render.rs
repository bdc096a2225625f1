//! Scene walk over an injectable drawing surface.
//!
//! Keeping the walk here, behind the [`Painter`] trait, lets layering and
//! filter behavior run under tests against a recording double while the web
//! crate supplies the real canvas implementation.

use crate::constants::*;
use crate::particle::Particle;
use crate::profile::ProfileTable;
use crate::state::{Filter, InteractionState, Viewport};
use glam::Vec2;
use smallvec::SmallVec;

/// Drawing surface the scene walk paints onto.
pub trait Painter {
    /// Translucent full-surface fill that fades the previous frame into a
    /// short motion trail.
    fn trail(&mut self, view: Viewport, alpha: f32);
    /// Radial color-to-transparent halo behind a particle core.
    fn glow(&mut self, center: Vec2, radius: f32, color: [u8; 3], alpha: f32);
    /// Particle core disc.
    fn disc(&mut self, center: Vec2, radius: f32, color: [u8; 3], alpha: f32);
    /// Connection line between two particle centers.
    fn line(&mut self, from: Vec2, to: Vec2, color: [u8; 3], alpha: f32, width: f32);
    /// Selection ring outline.
    fn ring(&mut self, center: Vec2, radius: f32, color: [u8; 3], width: f32);
    /// Hover callout showing a short text excerpt.
    fn callout(&mut self, anchor: Vec2, text: &str);
}

pub type ConnectionPairs = SmallVec<[(usize, usize, f32); 64]>;

/// Unordered particle pairs close enough to link, restricted to the active
/// filter. O(n^2) like the dispersion pass; cheap at tens of particles.
pub fn connection_pairs(particles: &[Particle], filter: Filter) -> ConnectionPairs {
    let mut pairs = ConnectionPairs::new();
    for i in 0..particles.len() {
        if !filter.admits(particles[i].emotion) {
            continue;
        }
        for j in (i + 1)..particles.len() {
            if !filter.admits(particles[j].emotion) {
                continue;
            }
            let dist = particles[i].pos.distance(particles[j].pos);
            if dist < CONNECTION_RADIUS {
                pairs.push((i, j, dist));
            }
        }
    }
    pairs
}

/// Shorten a source text for the hover callout.
pub fn truncate_excerpt(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", cut.trim_end())
}

/// Paint one frame: trail, glow + core per particle in insertion order
/// (later-added draw on top), connection graph, then the selection ring and
/// hover callout above everything. Particles outside the active filter are
/// dimmed, not removed; connections omit them entirely.
pub fn draw_scene(
    particles: &[Particle],
    state: &InteractionState,
    view: Viewport,
    table: &ProfileTable,
    painter: &mut impl Painter,
) {
    painter.trail(view, TRAIL_ALPHA);

    for p in particles {
        let color = table.lookup(p.emotion).color;
        let alpha = if state.filter.admits(p.emotion) {
            1.0
        } else {
            DIM_ALPHA
        };
        painter.glow(p.pos, p.radius * GLOW_RADIUS_FACTOR, color, GLOW_ALPHA * alpha);
        painter.disc(p.pos, p.radius, color, alpha);
    }

    for (i, j, dist) in connection_pairs(particles, state.filter) {
        let alpha = (1.0 - dist / CONNECTION_RADIUS) * CONNECTION_ALPHA;
        painter.line(particles[i].pos, particles[j].pos, LINK_COLOR, alpha, 1.0);
    }

    if let Some(sel) = state.selected.filter(|&i| i < particles.len()) {
        let p = &particles[sel];
        painter.ring(
            p.pos,
            p.radius + SELECTION_RING_OFFSET,
            SELECTION_RING_COLOR,
            SELECTION_RING_WIDTH,
        );
    }

    // The callout skips the selected particle so the two overlays never
    // stack on the same spot.
    if let Some((i, p)) = particles.iter().enumerate().find(|(_, p)| p.hovered) {
        if state.selected != Some(i) {
            let anchor = p.pos + Vec2::new(p.radius + CALLOUT_GAP, -p.radius - CALLOUT_GAP);
            painter.callout(anchor, &truncate_excerpt(&p.point.text, EXCERPT_MAX_CHARS));
        }
    }
}

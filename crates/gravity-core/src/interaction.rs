//! Hit-testing, click-to-toggle selection and overlay placement.

use crate::constants::{HIT_PADDING, OVERLAY_GAP, OVERLAY_INSET};
use crate::particle::Particle;
use crate::state::{InteractionState, Viewport};
use glam::Vec2;

/// Topmost-first hit test; later-added particles draw on top and win.
pub fn hit_test(particles: &[Particle], at: Vec2) -> Option<usize> {
    particles
        .iter()
        .enumerate()
        .rev()
        .find(|(_, p)| at.distance(p.pos) < p.radius + HIT_PADDING)
        .map(|(i, _)| i)
}

/// Click-to-toggle selection. Clicking the selected particle deselects it;
/// clicking empty space deselects; any other hit becomes the selection.
pub fn apply_click(state: &mut InteractionState, particles: &[Particle], at: Vec2) {
    state.selected = match (hit_test(particles, at), state.selected) {
        (Some(hit), Some(sel)) if hit == sel => None,
        (Some(hit), _) => Some(hit),
        (None, _) => None,
    };
}

/// Place the floating detail overlay next to a particle: right of it when it
/// fits, flipped to the left on right-edge overflow, always inset from every
/// edge.
pub fn overlay_position(
    particle_pos: Vec2,
    particle_radius: f32,
    overlay_size: Vec2,
    view: Viewport,
) -> Vec2 {
    let mut x = particle_pos.x + particle_radius + OVERLAY_GAP;
    if x + overlay_size.x > view.width - OVERLAY_INSET {
        x = particle_pos.x - particle_radius - OVERLAY_GAP - overlay_size.x;
    }
    let y = particle_pos.y - overlay_size.y * 0.5;

    let max_x = (view.width - overlay_size.x - OVERLAY_INSET).max(OVERLAY_INSET);
    let max_y = (view.height - overlay_size.y - OVERLAY_INSET).max(OVERLAY_INSET);
    Vec2::new(
        x.clamp(OVERLAY_INSET, max_x),
        y.clamp(OVERLAY_INSET, max_y),
    )
}

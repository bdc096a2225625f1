//! Per-tick force integration.
//!
//! The step order is fixed and load-bearing for visual stability: hover
//! short-circuit, centering, dispersion, gravity/friction, pointer response,
//! passive jitter, integration, boundary clamp. Forces sum without priority
//! except the hover short-circuit, which preempts everything after it.

use crate::constants::*;
use crate::particle::Particle;
use crate::profile::{InteractionMode, ProfileTable};
use crate::state::Viewport;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::Rng;
use smallvec::SmallVec;

/// Advance every particle by one tick. `dt_frames` is elapsed time in 60 Hz
/// frame units; 1.0 is exactly one display frame.
pub fn step_all(
    particles: &mut [Particle],
    table: &ProfileTable,
    view: Viewport,
    pointer: Vec2,
    rng: &mut StdRng,
    dt_frames: f32,
) {
    // Positions are snapshotted so the pairwise pass sees one consistent tick.
    let snapshot: SmallVec<[Vec2; 64]> = particles.iter().map(|p| p.pos).collect();
    for (i, p) in particles.iter_mut().enumerate() {
        step_one(p, i, &snapshot, table, view, pointer, rng, dt_frames);
    }
}

#[allow(clippy::too_many_arguments)]
fn step_one(
    p: &mut Particle,
    index: usize,
    others: &[Vec2],
    table: &ProfileTable,
    view: Viewport,
    pointer: Vec2,
    rng: &mut StdRng,
    dt_frames: f32,
) {
    let profile = table.lookup(p.emotion);

    // 1. Hover short-circuit: heavily damped and frozen under the cursor.
    let to_pointer = pointer - p.pos;
    let pointer_dist = to_pointer.length();
    if pointer_dist < p.radius + HOVER_MARGIN {
        p.hovered = true;
        p.vel *= HOVER_DAMPING.powf(dt_frames);
        return;
    }
    p.hovered = false;

    // 2. Weak pull toward the viewport center, scaled by distance.
    p.vel += (view.center() - p.pos) * CENTER_PULL * dt_frames;

    // 3. Anti-clump dispersion. O(n^2) across the live set; fine at tens of
    // particles, which is the scaling limit of this pass.
    for (j, other) in others.iter().enumerate() {
        if j == index {
            continue;
        }
        let away = p.pos - *other;
        let dist = away.length();
        if dist > 0.0 && dist < REPULSION_RADIUS {
            let falloff = (REPULSION_RADIUS - dist) / REPULSION_RADIUS;
            p.vel += away / dist * falloff * REPULSION_STRENGTH * dt_frames;
        }
    }

    // 4. Profile gravity, then exponential friction on both components.
    p.vel.y += profile.gravity * GRAVITY_SCALE * dt_frames;
    p.vel *= profile.friction.powf(dt_frames);

    // 5. Pointer response with linear falloff: 1 at the cursor, 0 at the rim.
    if pointer_dist < INTERACTION_RADIUS {
        let force = (INTERACTION_RADIUS - pointer_dist) / INTERACTION_RADIUS;
        match profile.mode {
            InteractionMode::Attract => {
                p.vel += to_pointer * ATTRACT_COEFF * force * dt_frames;
            }
            InteractionMode::Repel => {
                p.vel -= to_pointer * REPEL_COEFF * force * dt_frames;
            }
            InteractionMode::Agitate => {
                p.vel.x += rng.gen_range(-1.0..=1.0) * AGITATE_COEFF * force * dt_frames;
                p.vel.y += rng.gen_range(-1.0..=1.0) * AGITATE_COEFF * force * dt_frames;
            }
            InteractionMode::Flee => {
                if pointer_dist < FLEE_RADIUS {
                    p.vel -= to_pointer * FLEE_COEFF * force * dt_frames;
                }
            }
            InteractionMode::Orbit => {
                let perp = Vec2::new(-to_pointer.y, to_pointer.x);
                p.vel += perp * ORBIT_COEFF * force * dt_frames;
            }
            InteractionMode::Nudge => {
                p.vel -= to_pointer * NUDGE_COEFF * force * dt_frames;
            }
        }
    }

    // 6. Passive jitter, independent of the pointer.
    if profile.jitter > 0.0 {
        p.pos.x += rng.gen_range(-1.0..=1.0) * profile.jitter * dt_frames;
        p.pos.y += rng.gen_range(-1.0..=1.0) * profile.jitter * dt_frames;
    }

    // 7. Integrate.
    p.pos += p.vel * dt_frames;

    // 8. Inelastic bounce off the viewport box.
    clamp_to_viewport(p, view);
}

/// Clamp a particle inside the viewport (the top edge reserves room for page
/// chrome), inverting and dampening the velocity component that crossed.
pub fn clamp_to_viewport(p: &mut Particle, view: Viewport) {
    let min_x = p.radius;
    let max_x = (view.width - p.radius).max(min_x);
    let min_y = p.radius + TOP_MARGIN;
    let max_y = (view.height - p.radius).max(min_y);

    if p.pos.x < min_x {
        p.pos.x = min_x;
        p.vel.x *= BOUNCE;
    } else if p.pos.x > max_x {
        p.pos.x = max_x;
        p.vel.x *= BOUNCE;
    }
    if p.pos.y < min_y {
        p.pos.y = min_y;
        p.vel.y *= BOUNCE;
    } else if p.pos.y > max_y {
        p.pos.y = max_y;
        p.vel.y *= BOUNCE;
    }
}

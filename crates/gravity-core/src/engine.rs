//! Engine facade: owns the particle list, interaction state, viewport and
//! profile table, and exposes the lifecycle operations the frontend calls.
//!
//! All state is instance-owned so multiple canvases or tests run isolated.
//! Mutation entry points run synchronously between ticks; the next tick
//! observes whatever they left behind.

use crate::constants::{DEMO_POINTS, FRAME_HZ, MAX_FRAME_STEP};
use crate::interaction;
use crate::particle::{DataPoint, Particle};
use crate::physics;
use crate::profile::ProfileTable;
use crate::render::{draw_scene, Painter};
use crate::state::{Filter, InteractionState, Viewport};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

pub struct Engine {
    particles: Vec<Particle>,
    state: InteractionState,
    view: Viewport,
    table: ProfileTable,
    rng: StdRng,
}

impl Engine {
    pub fn new(view: Viewport, seed: u64) -> Self {
        Self {
            particles: Vec::new(),
            state: InteractionState::default(),
            view,
            table: ProfileTable::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn view(&self) -> Viewport {
        self.view
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.state
    }

    pub fn profiles(&self) -> &ProfileTable {
        &self.table
    }

    /// Spawn one particle for a classified record. Never blocks.
    pub fn add_point(&mut self, point: DataPoint) {
        let particle = Particle::spawn(point, &self.table, self.view, &mut self.rng);
        log::debug!(
            "[engine] spawn {} r={:.1} at ({:.0},{:.0})",
            particle.emotion.label(),
            particle.radius,
            particle.pos.x,
            particle.pos.y
        );
        self.particles.push(particle);
    }

    /// Remove every particle along with any selection tied to one.
    pub fn clear(&mut self) {
        self.particles.clear();
        self.state.selected = None;
        log::debug!("[engine] cleared");
    }

    /// Adopt new surface dimensions and pull stray particles back inside.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.view = Viewport::new(width, height);
        for p in &mut self.particles {
            physics::clamp_to_viewport(p, self.view);
        }
    }

    /// Advance the simulation by `dt` of wall-clock time.
    pub fn tick(&mut self, dt: Duration) {
        let dt_frames = (dt.as_secs_f32() * FRAME_HZ).min(MAX_FRAME_STEP);
        physics::step_all(
            &mut self.particles,
            &self.table,
            self.view,
            self.state.pointer,
            &mut self.rng,
            dt_frames,
        );
    }

    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.state.pointer = Vec2::new(x, y);
    }

    /// Click-to-toggle selection at a canvas position.
    pub fn click_at(&mut self, x: f32, y: f32) {
        interaction::apply_click(&mut self.state, &self.particles, Vec2::new(x, y));
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.state.filter = filter;
    }

    pub fn selection(&self) -> Option<&Particle> {
        self.state.selected.and_then(|i| self.particles.get(i))
    }

    /// Bulk-spawn from the built-in sample corpus, for demos and empty states.
    pub fn spawn_demo(&mut self, n: usize) {
        for k in 0..n {
            let (text, emotion, score) = DEMO_POINTS[k % DEMO_POINTS.len()];
            self.add_point(DataPoint {
                text: text.to_string(),
                emotion: emotion.to_string(),
                score,
            });
        }
    }

    /// Paint the current frame onto any painter.
    pub fn draw(&self, painter: &mut impl Painter) {
        draw_scene(&self.particles, &self.state, self.view, &self.table, painter);
    }

    /// Where the floating detail overlay should sit for the current
    /// selection, if there is one.
    pub fn overlay_anchor(&self, overlay_size: Vec2) -> Option<Vec2> {
        self.selection()
            .map(|p| interaction::overlay_position(p.pos, p.radius, overlay_size, self.view))
    }
}

//! Live simulation entities, one per classified record.

use crate::constants::{BASE_RADIUS, RADIUS_SCORE_SCALE, SPAWN_SPEED, SPAWN_SPREAD};
use crate::profile::{Emotion, EmotionProfile, ProfileTable};
use crate::state::Viewport;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::Rng;

/// One classified record from the analysis backend. Immutable once ingested.
#[derive(Clone, Debug)]
pub struct DataPoint {
    pub text: String,
    pub emotion: String,
    pub score: f32,
}

/// Simulation state for one data point. Physics fields are only mutated by
/// the integrator; everything else reads them.
#[derive(Clone, Debug)]
pub struct Particle {
    pub point: DataPoint,
    pub emotion: Emotion,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub hovered: bool,
}

impl Particle {
    /// Spawn at a randomized offset around the viewport center with a small
    /// random initial velocity.
    pub fn spawn(point: DataPoint, table: &ProfileTable, view: Viewport, rng: &mut StdRng) -> Self {
        let emotion = Emotion::from_label(&point.emotion);
        let profile = table.lookup(emotion);
        let radius = scaled_radius(point.score, profile);
        let pos = view.center()
            + Vec2::new(
                rng.gen_range(-SPAWN_SPREAD..=SPAWN_SPREAD),
                rng.gen_range(-SPAWN_SPREAD..=SPAWN_SPREAD),
            );
        let vel = Vec2::new(
            rng.gen_range(-SPAWN_SPEED..=SPAWN_SPEED),
            rng.gen_range(-SPAWN_SPEED..=SPAWN_SPEED),
        );
        Self {
            point,
            emotion,
            pos,
            vel,
            radius,
            hovered: false,
        }
    }
}

/// Radius from a raw score. Scores outside [0, 1] (or non-finite) are
/// clamped before sizing, so the result is always positive.
pub fn scaled_radius(score: f32, profile: &EmotionProfile) -> f32 {
    let score = if score.is_finite() {
        score.clamp(0.0, 1.0)
    } else {
        0.0
    };
    (BASE_RADIUS + score * RADIUS_SCORE_SCALE) * profile.radius_multiplier
}

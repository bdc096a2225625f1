//! Per-emotion physics and visual configuration.
//!
//! One profile per emotion, built once at startup and shared read-only by
//! every particle. Lookup is total: anything the analysis backend sends that
//! we do not recognize behaves like `Neutral`.

use fnv::FnvHashMap;

/// Emotion categories recognized by the analysis backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Emotion {
    Joy,
    Sadness,
    Anger,
    Fear,
    Energy,
    Neutral,
}

impl Emotion {
    pub const ALL: [Emotion; 6] = [
        Emotion::Joy,
        Emotion::Sadness,
        Emotion::Anger,
        Emotion::Fear,
        Emotion::Energy,
        Emotion::Neutral,
    ];

    /// Total mapping from a backend label; unrecognized labels are `Neutral`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "joy" => Emotion::Joy,
            "sadness" => Emotion::Sadness,
            "anger" => Emotion::Anger,
            "fear" => Emotion::Fear,
            "energy" => Emotion::Energy,
            _ => Emotion::Neutral,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Emotion::Joy => "joy",
            Emotion::Sadness => "sadness",
            Emotion::Anger => "anger",
            Emotion::Fear => "fear",
            Emotion::Energy => "energy",
            Emotion::Neutral => "neutral",
        }
    }
}

/// How a particle's velocity responds to pointer proximity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionMode {
    Attract,
    Repel,
    Agitate,
    Flee,
    Orbit,
    Nudge,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EmotionProfile {
    pub color: [u8; 3],
    /// Vertical bias; negative floats upward. Scaled down by the integrator.
    pub gravity: f32,
    /// Per-frame velocity retention in (0, 1]; lower means stronger drag.
    pub friction: f32,
    pub radius_multiplier: f32,
    /// Passive per-axis random displacement applied every tick.
    pub jitter: f32,
    pub mode: InteractionMode,
}

/// Immutable emotion-to-profile table with a guaranteed neutral fallback.
pub struct ProfileTable {
    profiles: FnvHashMap<Emotion, EmotionProfile>,
    neutral: EmotionProfile,
}

impl ProfileTable {
    pub fn new() -> Self {
        let neutral = EmotionProfile {
            // inert, only weakly pushed around by the pointer
            color: [128, 128, 128],
            gravity: 0.1,
            friction: 0.97,
            radius_multiplier: 1.0,
            jitter: 0.0,
            mode: InteractionMode::Nudge,
        };
        let mut profiles = FnvHashMap::default();
        profiles.insert(
            Emotion::Joy,
            EmotionProfile {
                // floats upward with light friction, drawn to the pointer
                color: [255, 215, 0],
                gravity: -0.5,
                friction: 0.98,
                radius_multiplier: 1.2,
                jitter: 0.0,
                mode: InteractionMode::Attract,
            },
        );
        profiles.insert(
            Emotion::Sadness,
            EmotionProfile {
                // sinks under strong friction, shies away from the pointer
                color: [30, 144, 255],
                gravity: 0.8,
                friction: 0.92,
                radius_multiplier: 1.0,
                jitter: 0.0,
                mode: InteractionMode::Repel,
            },
        );
        profiles.insert(
            Emotion::Anger,
            EmotionProfile {
                // no net gravity, constant high-frequency jitter, agitated nearby
                color: [255, 69, 0],
                gravity: 0.0,
                friction: 0.96,
                radius_multiplier: 1.15,
                jitter: 0.45,
                mode: InteractionMode::Agitate,
            },
        );
        profiles.insert(
            Emotion::Fear,
            EmotionProfile {
                // sinks slowly, nervous jitter, bolts inside a short radius
                color: [155, 89, 182],
                gravity: 0.3,
                friction: 0.95,
                radius_multiplier: 0.95,
                jitter: 0.18,
                mode: InteractionMode::Flee,
            },
        );
        profiles.insert(
            Emotion::Energy,
            EmotionProfile {
                // floats upward and swirls around the pointer
                color: [0, 229, 255],
                gravity: -0.6,
                friction: 0.985,
                radius_multiplier: 1.1,
                jitter: 0.0,
                mode: InteractionMode::Orbit,
            },
        );
        profiles.insert(Emotion::Neutral, neutral.clone());
        Self { profiles, neutral }
    }

    /// Total lookup; never fails.
    pub fn lookup(&self, emotion: Emotion) -> &EmotionProfile {
        self.profiles.get(&emotion).unwrap_or(&self.neutral)
    }
}

impl Default for ProfileTable {
    fn default() -> Self {
        Self::new()
    }
}

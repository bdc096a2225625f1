//! Viewport and interaction state shared by physics, picking and rendering.
//!
//! These types avoid platform APIs so the engine runs identically on the
//! host (tests) and inside the browser.

use crate::constants::OFFSCREEN_POINTER;
use crate::profile::Emotion;
use glam::Vec2;

/// Dimensions of the drawing surface, in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}

/// The single emotion category currently emphasized, or everything.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Only(Emotion),
}

impl Filter {
    /// `"all"` selects everything; any other label resolves the same way
    /// particle ingestion does, so unknown labels collapse to neutral.
    pub fn from_label(label: &str) -> Self {
        if label == "all" {
            Filter::All
        } else {
            Filter::Only(Emotion::from_label(label))
        }
    }

    pub fn admits(&self, emotion: Emotion) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(e) => *e == emotion,
        }
    }
}

/// Pointer position, active filter and the current selection.
#[derive(Clone, Copy, Debug)]
pub struct InteractionState {
    pub pointer: Vec2,
    pub filter: Filter,
    /// Index into the live particle list, not a reference; cleared whenever
    /// the list it points into goes away.
    pub selected: Option<usize>,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            pointer: Vec2::splat(OFFSCREEN_POINTER),
            filter: Filter::All,
            selected: None,
        }
    }
}

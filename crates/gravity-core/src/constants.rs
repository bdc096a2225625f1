// Shared physics and rendering tuning constants used by the engine and both
// the scene walk and the web frontend.

// Sizing: radius = (BASE_RADIUS + score * RADIUS_SCORE_SCALE) * profile multiplier
pub const BASE_RADIUS: f32 = 5.0;
pub const RADIUS_SCORE_SCALE: f32 = 10.0;

// Spawn placement around the viewport center
pub const SPAWN_SPREAD: f32 = 160.0; // max per-axis offset in px
pub const SPAWN_SPEED: f32 = 1.0; // max initial velocity per axis

// Tick normalization
pub const FRAME_HZ: f32 = 60.0; // reference display rate for dt scaling
pub const MAX_FRAME_STEP: f32 = 3.0; // cap catch-up after a suspended tab

// Force pipeline
pub const HOVER_MARGIN: f32 = 6.0;
pub const HOVER_DAMPING: f32 = 0.5; // per-frame velocity retention under the cursor
pub const CENTER_PULL: f32 = 0.0004;
pub const REPULSION_RADIUS: f32 = 200.0;
pub const REPULSION_STRENGTH: f32 = 0.45;
pub const GRAVITY_SCALE: f32 = 0.05;
pub const INTERACTION_RADIUS: f32 = 350.0; // pointer influence rim
pub const FLEE_RADIUS: f32 = 180.0; // tighter rim for the flee response
pub const ATTRACT_COEFF: f32 = 0.0015;
pub const REPEL_COEFF: f32 = 0.004;
pub const AGITATE_COEFF: f32 = 0.9;
pub const FLEE_COEFF: f32 = 0.008;
pub const ORBIT_COEFF: f32 = 0.0012;
pub const NUDGE_COEFF: f32 = 0.0005;

// Boundary
pub const TOP_MARGIN: f32 = 60.0; // reserved for page chrome
pub const BOUNCE: f32 = -0.6; // inelastic edge bounce

// Picking and pointer defaults
pub const HIT_PADDING: f32 = 4.0;
pub const OFFSCREEN_POINTER: f32 = -1.0e4; // pointer before the first move event

// Rendering
pub const TRAIL_ALPHA: f32 = 0.18; // per-frame fade instead of a hard clear
pub const GLOW_RADIUS_FACTOR: f32 = 2.0;
pub const GLOW_ALPHA: f32 = 0.35;
pub const DIM_ALPHA: f32 = 0.12; // particles outside the active filter
pub const CONNECTION_RADIUS: f32 = 110.0;
pub const CONNECTION_ALPHA: f32 = 0.25;
pub const LINK_COLOR: [u8; 3] = [148, 163, 184];
pub const SELECTION_RING_COLOR: [u8; 3] = [255, 255, 255];
pub const SELECTION_RING_OFFSET: f32 = 4.0;
pub const SELECTION_RING_WIDTH: f32 = 2.0;
pub const CALLOUT_GAP: f32 = 10.0;
pub const EXCERPT_MAX_CHARS: usize = 48;

// Floating detail overlay placement
pub const OVERLAY_GAP: f32 = 14.0; // distance from the particle rim
pub const OVERLAY_INSET: f32 = 12.0; // minimum distance from every edge

// Sample corpus for demo and empty states
pub const DEMO_POINTS: &[(&str, &str, f32)] = &[
    ("This is a joyful test!", "joy", 0.9),
    ("I am feeling a bit sad.", "sadness", 0.8),
    ("This makes me angry!", "anger", 0.95),
    ("Not sure how I feel about any of this.", "neutral", 0.4),
    ("I can't stop pacing, something is off.", "fear", 0.7),
    ("Let's go, the whole room is buzzing!", "energy", 0.85),
    ("Best news I've had all week.", "joy", 0.75),
    ("Everything feels heavier than it should.", "sadness", 0.6),
    ("Who approved this?!", "anger", 0.65),
    ("The meeting is at three.", "neutral", 0.2),
];

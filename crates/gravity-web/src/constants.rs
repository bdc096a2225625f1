// Element ids and class names the host page provides, plus frontend tuning.

pub const CANVAS_ID: &str = "gravity-canvas";
pub const DETAIL_OVERLAY_ID: &str = "detail-overlay";
pub const FILTER_BTN_PREFIX: &str = "filter-";
pub const ACTIVE_CLASS: &str = "active";
pub const HIDDEN_CLASS: &str = "hidden";

// One button per emotion plus the catch-all.
pub const FILTER_LABELS: [&str; 7] = [
    "all", "joy", "sadness", "anger", "fear", "energy", "neutral",
];

// Fixed so reloads reproduce the same spawn pattern.
pub const ENGINE_SEED: u64 = 42;

// Estimated CSS size of the floating detail panel, used for placement.
pub const OVERLAY_WIDTH: f32 = 260.0;
pub const OVERLAY_HEIGHT: f32 = 120.0;

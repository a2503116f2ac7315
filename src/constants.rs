// DOM hooks and timing for the web frontend.

// Markup contract
pub const BACKDROP_SELECTOR: &str = "canvas[data-backdrop]"; // value names the preset
pub const BACKDROP_ATTR: &str = "data-backdrop";
pub const SEED_ATTR: &str = "data-backdrop-seed"; // optional fixed RNG seed
pub const TRACE_NODE_SELECTOR: &str = "[data-trace-node]";
pub const PARALLAX_SELECTOR: &str = "[data-parallax]";
pub const PARALLAX_DEPTH_ATTR: &str = "data-parallax"; // px of shift per unit offset
pub const REVEAL_SELECTOR: &str = "[data-reveal]";
pub const REVEAL_VISIBLE_CLASS: &str = "is-visible";
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// Layout settles after first paint; anchors are rebuilt once after this delay
pub const ANCHOR_SETTLE_DELAY_MS: i32 = 400;

// Scroll reveal
pub const REVEAL_THRESHOLD: f64 = 0.15; // visible fraction that triggers a reveal

// Parallax
pub const PARALLAX_DEFAULT_DEPTH_PX: f32 = 12.0;
pub const PARALLAX_TILT_DEG: f32 = 4.0;

// Canvas backing store never drops below this many CSS px per side
pub const MIN_CANVAS_PX: f32 = 1.0;

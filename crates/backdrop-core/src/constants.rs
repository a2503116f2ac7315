// Default tuning values for the scene configs. Times are milliseconds,
// distances are CSS pixels unless noted.

// Grid
pub const GRID_SPACING_PX: f32 = 48.0;
pub const GRID_DRIFT_PX_PER_MS: f64 = 0.006; // slow downward crawl
pub const GRID_BREATH_FREQ: f64 = 0.0009; // radians per ms
pub const GRID_BREATH_PHASE: f32 = 0.04; // radians per px of line height
pub const GRID_BREATH_AMPLITUDE_PX: f32 = 2.0;
pub const GRID_LINE_WIDTH_PX: f32 = 1.0;

// Beams (positions normalized to canvas width)
pub const BEAM_COUNT: usize = 3;
pub const BEAM_WRAP_MIN: f32 = -0.2;
pub const BEAM_WRAP_MAX: f32 = 1.2;
pub const BEAM_WIDTH_PX: (f32, f32) = (80.0, 180.0);
pub const BEAM_SPEED: (f32, f32) = (0.0004, 0.0012); // normalized units per frame
pub const BEAM_ALPHA: (f32, f32) = (0.05, 0.14);
pub const BEAM_LENGTH_FRACTION: f32 = 1.4; // beam height relative to canvas height

// Traces
pub const TRACE_CURVE_FREQ: f64 = 0.0008;
pub const TRACE_CURVE_AMPLITUDE_PX: f32 = 28.0;
pub const TRACE_HIGHLIGHT_FREQ: f64 = 0.0015;
pub const TRACE_HIGHLIGHT_RADIUS_PX: f32 = 2.5;
pub const TRACE_LINE_WIDTH_PX: f32 = 1.2;

// Particles
pub const PARTICLE_MIN_COUNT: usize = 20;
pub const PARTICLE_AREA_PER_PARTICLE: f32 = 18_000.0; // px^2 of canvas per particle
pub const PARTICLE_RADIUS_PX: (f32, f32) = (0.6, 1.8);
pub const PARTICLE_SPEED_PX: f32 = 0.25; // max |v| per axis, px per frame
pub const PARTICLE_ALPHA: (f32, f32) = (0.15, 0.6);
pub const PARTICLE_WRAP_MARGIN_PX: f32 = 10.0;

// Pulse glow
pub const GLOW_BASE_RADIUS_PX: f32 = 260.0;
pub const GLOW_AMPLITUDE_PX: f32 = 30.0;
pub const GLOW_FREQ: f64 = 0.0011;

// Parallax depth per layer (px shift for a full unit of pointer offset)
pub const PARALLAX_GRID_PX: f32 = 6.0;
pub const PARALLAX_PARTICLES_PX: f32 = 14.0;
pub const PARALLAX_GLOW_PX: f32 = 40.0;

// Degraded mode: below this viewport width particles and beams are disabled
pub const MIN_VIEWPORT_WIDTH_PX: f32 = 480.0;
// Reduced motion: time-driven layers are drawn at this fixed clock
pub const STILL_FRAME_MS: f64 = 0.0;

// Scroll reveal
pub const REVEAL_STAGGER_MS: f64 = 90.0;

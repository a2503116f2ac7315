//! Per-scene configuration.
//!
//! Each mounted canvas gets one [`SceneConfig`]. The three presets cover the
//! page's backdrops; they deliberately differ in boundary policy and clear
//! mode, which is why both are exposed as options rather than fixed.

use crate::constants::*;
use crate::geometry::Rgba;
use glam::Vec2;
use rand::Rng;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("unknown preset `{0}`")]
    UnknownPreset(String),
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },
    #[error("{field} range is inverted ({min} > {max})")]
    InvertedSpan {
        field: &'static str,
        min: f32,
        max: f32,
    },
    #[error("{field} alpha {value} is outside [0, 1]")]
    AlphaOutOfRange { field: &'static str, value: f32 },
}

/// Closed interval sampled uniformly once per particle or beam.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub const fn fixed(v: f32) -> Self {
        Self { min: v, max: v }
    }

    /// Symmetric span `[-v, v]`.
    pub const fn symmetric(v: f32) -> Self {
        Self { min: -v, max: v }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        self.min + (self.max - self.min) * rng.gen::<f32>()
    }

    #[inline]
    pub fn contains(&self, v: f32) -> bool {
        v >= self.min && v <= self.max
    }

    fn check(&self, field: &'static str) -> Result<(), ConfigError> {
        if self.min > self.max {
            return Err(ConfigError::InvertedSpan {
                field,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

impl From<(f32, f32)> for Span {
    fn from((min, max): (f32, f32)) -> Self {
        Self::new(min, max)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundaryPolicy {
    /// Toroidal: leaving past the margin re-enters from the opposite edge.
    Wrap,
    /// Velocity component flips on reaching an edge.
    Bounce,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ClearMode {
    /// Transparent clear of the whole canvas.
    FullClear,
    /// Solid background fill.
    OpaqueFill(Rgba),
    /// Background at low alpha so previous frames fade into motion trails.
    TranslucentFill { color: Rgba, alpha: f32 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParticleCount {
    Fixed(usize),
    /// `max(min, round(area / area_per_particle))`
    Density { min: usize, area_per_particle: f32 },
}

impl ParticleCount {
    pub fn resolve(&self, area: f32) -> usize {
        match *self {
            ParticleCount::Fixed(n) => n,
            ParticleCount::Density {
                min,
                area_per_particle,
            } => {
                if area_per_particle <= 0.0 || !area.is_finite() {
                    return min;
                }
                ((area / area_per_particle).round() as usize).max(min)
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub grid: Rgba,
    pub beam: Rgba,
    pub trace_start: Rgba,
    pub trace_end: Rgba,
    pub highlight: Rgba,
    pub particle: Rgba,
    pub glow: Rgba,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            grid: Rgba::new(120, 160, 255, 0.07),
            beam: Rgba::new(110, 170, 255, 1.0),
            trace_start: Rgba::new(90, 200, 255, 0.55),
            trace_end: Rgba::new(170, 110, 255, 0.55),
            highlight: Rgba::new(210, 240, 255, 0.95),
            particle: Rgba::new(200, 220, 255, 1.0),
            glow: Rgba::new(80, 120, 255, 0.22),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridConfig {
    pub spacing: f32,
    pub line_width: f32,
    pub drift_px_per_ms: f64,
    pub breath_freq: f64,
    pub breath_phase: f32,
    pub breath_amplitude: f32,
    pub vertical_lines: bool,
    pub parallax_px: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            spacing: GRID_SPACING_PX,
            line_width: GRID_LINE_WIDTH_PX,
            drift_px_per_ms: GRID_DRIFT_PX_PER_MS,
            breath_freq: GRID_BREATH_FREQ,
            breath_phase: GRID_BREATH_PHASE,
            breath_amplitude: GRID_BREATH_AMPLITUDE_PX,
            vertical_lines: false,
            parallax_px: PARALLAX_GRID_PX,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BeamConfig {
    pub count: usize,
    pub width: Span,
    pub speed: Span,
    pub alpha: Span,
    /// Beam height as a fraction of canvas height.
    pub length: f32,
}

impl Default for BeamConfig {
    fn default() -> Self {
        Self {
            count: BEAM_COUNT,
            width: BEAM_WIDTH_PX.into(),
            speed: BEAM_SPEED.into(),
            alpha: BEAM_ALPHA.into(),
            length: BEAM_LENGTH_FRACTION,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TraceConfig {
    pub curve_freq: f64,
    pub curve_amplitude: f32,
    pub highlight_freq: f64,
    pub highlight_radius: f32,
    pub line_width: f32,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            curve_freq: TRACE_CURVE_FREQ,
            curve_amplitude: TRACE_CURVE_AMPLITUDE_PX,
            highlight_freq: TRACE_HIGHLIGHT_FREQ,
            highlight_radius: TRACE_HIGHLIGHT_RADIUS_PX,
            line_width: TRACE_LINE_WIDTH_PX,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleConfig {
    pub count: ParticleCount,
    pub radius: Span,
    /// Per-axis velocity range, px per frame.
    pub velocity: Span,
    pub alpha: Span,
    pub boundary: BoundaryPolicy,
    /// Distance past the edge before a wrapping particle re-enters.
    pub wrap_margin: f32,
    pub parallax_px: f32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: ParticleCount::Density {
                min: PARTICLE_MIN_COUNT,
                area_per_particle: PARTICLE_AREA_PER_PARTICLE,
            },
            radius: PARTICLE_RADIUS_PX.into(),
            velocity: Span::symmetric(PARTICLE_SPEED_PX),
            alpha: PARTICLE_ALPHA.into(),
            boundary: BoundaryPolicy::Wrap,
            wrap_margin: PARTICLE_WRAP_MARGIN_PX,
            parallax_px: PARALLAX_PARTICLES_PX,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlowConfig {
    /// Normalized center within the canvas.
    pub center: Vec2,
    pub base_radius: f32,
    pub amplitude: f32,
    pub freq: f64,
    pub parallax_px: f32,
}

impl Default for GlowConfig {
    fn default() -> Self {
        Self {
            center: Vec2::new(0.5, 0.35),
            base_radius: GLOW_BASE_RADIUS_PX,
            amplitude: GLOW_AMPLITUDE_PX,
            freq: GLOW_FREQ,
            parallax_px: PARALLAX_GLOW_PX,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub clear: ClearMode,
    pub grid: Option<GridConfig>,
    pub beams: BeamConfig,
    pub traces: Option<TraceConfig>,
    pub particles: ParticleConfig,
    pub glow: Option<GlowConfig>,
    pub colors: Palette,
    /// Viewports narrower than this run in degraded mode (no particles or beams).
    pub min_viewport_width: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::hero()
    }
}

const NIGHT: Rgba = Rgba::opaque(6, 9, 20);

impl SceneConfig {
    pub const PRESETS: [&'static str; 3] = ["hero", "circuit", "dust"];

    /// Full-bleed hero backdrop: breathing grid, sweeping beams, area-scaled
    /// wrapping particles and a pulsing glow.
    pub fn hero() -> Self {
        Self {
            clear: ClearMode::FullClear,
            grid: Some(GridConfig::default()),
            beams: BeamConfig::default(),
            traces: None,
            particles: ParticleConfig::default(),
            glow: Some(GlowConfig::default()),
            colors: Palette::default(),
            min_viewport_width: MIN_VIEWPORT_WIDTH_PX,
        }
    }

    /// Circuit section: square grid, curved traces between tracked nodes and a
    /// handful of bouncing particles over a trail fill.
    pub fn circuit() -> Self {
        Self {
            clear: ClearMode::TranslucentFill {
                color: NIGHT,
                alpha: 0.28,
            },
            grid: Some(GridConfig {
                spacing: 32.0,
                drift_px_per_ms: 0.0,
                breath_amplitude: 0.0,
                vertical_lines: true,
                ..GridConfig::default()
            }),
            beams: BeamConfig {
                count: 0,
                ..BeamConfig::default()
            },
            traces: Some(TraceConfig::default()),
            particles: ParticleConfig {
                count: ParticleCount::Fixed(24),
                velocity: Span::symmetric(0.35),
                boundary: BoundaryPolicy::Bounce,
                wrap_margin: 0.0,
                ..ParticleConfig::default()
            },
            glow: None,
            colors: Palette::default(),
            min_viewport_width: MIN_VIEWPORT_WIDTH_PX,
        }
    }

    /// Dust field: a fixed pool of slow wrapping motes on a solid background.
    pub fn dust() -> Self {
        Self {
            clear: ClearMode::OpaqueFill(NIGHT),
            grid: None,
            beams: BeamConfig {
                count: 0,
                ..BeamConfig::default()
            },
            traces: None,
            particles: ParticleConfig {
                count: ParticleCount::Fixed(30),
                radius: Span::new(0.8, 2.4),
                velocity: Span::symmetric(0.18),
                alpha: Span::new(0.1, 0.45),
                ..ParticleConfig::default()
            },
            glow: None,
            colors: Palette::default(),
            min_viewport_width: MIN_VIEWPORT_WIDTH_PX,
        }
    }

    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "hero" => Ok(Self::hero()),
            "circuit" | "traces" => Ok(Self::circuit()),
            "dust" => Ok(Self::dust()),
            other => Err(ConfigError::UnknownPreset(other.to_string())),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(g) = &self.grid {
            positive("grid.spacing", g.spacing)?;
            positive("grid.line_width", g.line_width)?;
        }
        if self.beams.count > 0 {
            self.beams.width.check("beams.width")?;
            self.beams.speed.check("beams.speed")?;
            self.beams.alpha.check("beams.alpha")?;
            alpha_span("beams.alpha", self.beams.alpha)?;
            positive("beams.length", self.beams.length)?;
        }
        if let Some(t) = &self.traces {
            positive("traces.line_width", t.line_width)?;
        }
        let p = &self.particles;
        p.radius.check("particles.radius")?;
        p.velocity.check("particles.velocity")?;
        p.alpha.check("particles.alpha")?;
        alpha_span("particles.alpha", p.alpha)?;
        if let ParticleCount::Density {
            area_per_particle, ..
        } = p.count
        {
            positive("particles.area_per_particle", area_per_particle)?;
        }
        if let ClearMode::TranslucentFill { alpha, .. } = self.clear {
            if !(0.0..=1.0).contains(&alpha) {
                return Err(ConfigError::AlphaOutOfRange {
                    field: "clear",
                    value: alpha,
                });
            }
        }
        if let Some(g) = &self.glow {
            positive("glow.base_radius", g.base_radius)?;
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

fn alpha_span(field: &'static str, span: Span) -> Result<(), ConfigError> {
    for value in [span.min, span.max] {
        if !(0.0..=1.0).contains(&value) {
            return Err(ConfigError::AlphaOutOfRange { field, value });
        }
    }
    Ok(())
}

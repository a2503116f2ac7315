//! Particle, beam and trace-anchor pools for one canvas.
//!
//! Pools are sized once in [`SceneState::initialize`]. Afterwards only
//! positions change; radius, alpha, speed and velocity are fixed for the
//! life of the scene (bounce flips a velocity sign but never its magnitude).

use crate::config::{BeamConfig, BoundaryPolicy, ParticleConfig, SceneConfig};
use crate::constants::{BEAM_WRAP_MAX, BEAM_WRAP_MIN, STILL_FRAME_MS};
use crate::geometry::{CanvasSize, Rect};
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub alpha: f32,
}

impl Particle {
    /// One frame of motion followed by the boundary policy.
    pub fn step(&mut self, size: CanvasSize, policy: BoundaryPolicy, margin: f32) {
        self.position += self.velocity;
        match policy {
            BoundaryPolicy::Wrap => {
                self.position.x = wrap_axis(self.position.x, size.width, margin);
                self.position.y = wrap_axis(self.position.y, size.height, margin);
            }
            BoundaryPolicy::Bounce => {
                self.velocity.x = bounce_axis(self.position.x, self.velocity.x, size.width);
                self.velocity.y = bounce_axis(self.position.y, self.velocity.y, size.height);
            }
        }
    }
}

#[inline]
fn wrap_axis(p: f32, extent: f32, margin: f32) -> f32 {
    if p > extent + margin {
        -margin
    } else if p < -margin {
        extent + margin
    } else {
        p
    }
}

// Only flip when heading further out, so a particle left outside after a
// shrink walks back in instead of jittering on the edge.
#[inline]
fn bounce_axis(p: f32, v: f32, extent: f32) -> f32 {
    if (p <= 0.0 && v < 0.0) || (p >= extent && v > 0.0) {
        -v
    } else {
        v
    }
}

/// Vertical light band swept horizontally across the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Beam {
    /// Normalized position; x wraps within `[BEAM_WRAP_MIN, BEAM_WRAP_MAX]`.
    pub position: Vec2,
    pub width: f32,
    pub speed: f32,
    pub alpha: f32,
}

impl Beam {
    pub fn step(&mut self) {
        self.position.x += self.speed;
        if self.position.x > BEAM_WRAP_MAX {
            self.position.x = BEAM_WRAP_MIN;
        } else if self.position.x < BEAM_WRAP_MIN {
            self.position.x = BEAM_WRAP_MAX;
        }
    }
}

/// Node center relative to the section's top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TraceAnchor {
    pub position: Vec2,
}

/// Geometry of the hosting section and the nodes traced inside it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Layout {
    pub section: Rect,
    pub nodes: Vec<Rect>,
}

/// Environment switches that put a scene into degraded mode.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    pub reduced_motion: bool,
    pub viewport_width: f32,
}

impl Default for Motion {
    fn default() -> Self {
        Self::FULL
    }
}

impl Motion {
    pub const FULL: Motion = Motion {
        reduced_motion: false,
        viewport_width: f32::INFINITY,
    };

    pub fn reduced() -> Self {
        Self {
            reduced_motion: true,
            ..Self::FULL
        }
    }

    /// Particles and beams run only with motion allowed on a wide enough viewport.
    pub fn allows_ambient(&self, min_viewport_width: f32) -> bool {
        !self.reduced_motion && self.viewport_width >= min_viewport_width
    }

    /// Clock seen by the time-driven layers: frozen at [`STILL_FRAME_MS`]
    /// under reduced motion.
    #[inline]
    pub fn frame_time(&self, timestamp_ms: f64) -> f64 {
        if self.reduced_motion {
            STILL_FRAME_MS
        } else {
            timestamp_ms
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SceneState {
    pub particles: Vec<Particle>,
    pub beams: Vec<Beam>,
    pub anchors: Vec<TraceAnchor>,
}

impl SceneState {
    pub fn initialize<R: Rng + ?Sized>(
        config: &SceneConfig,
        size: CanvasSize,
        layout: &Layout,
        motion: Motion,
        rng: &mut R,
    ) -> Self {
        let anchors = if config.traces.is_some() {
            rebuild_anchors(&layout.nodes, layout.section)
        } else {
            Vec::new()
        };
        if !motion.allows_ambient(config.min_viewport_width) {
            log::debug!(
                "[scene] degraded mode (reduced_motion={}, viewport={}); anchors={}",
                motion.reduced_motion,
                motion.viewport_width,
                anchors.len()
            );
            return Self {
                particles: Vec::new(),
                beams: Vec::new(),
                anchors,
            };
        }

        let particles = spawn_particles(&config.particles, size, rng);
        let beams = spawn_beams(&config.beams, rng);
        log::debug!(
            "[scene] init {:.0}x{:.0}: particles={} beams={} anchors={}",
            size.width,
            size.height,
            particles.len(),
            beams.len(),
            anchors.len()
        );
        Self {
            particles,
            beams,
            anchors,
        }
    }

    pub fn advance_beams(&mut self) {
        for b in &mut self.beams {
            b.step();
        }
    }

    pub fn advance_particles(&mut self, size: CanvasSize, config: &ParticleConfig) {
        for p in &mut self.particles {
            p.step(size, config.boundary, config.wrap_margin);
        }
    }

    /// Advance every pool by one frame.
    pub fn advance(&mut self, size: CanvasSize, config: &SceneConfig) {
        self.advance_beams();
        self.advance_particles(size, &config.particles);
    }

    pub fn set_anchors(&mut self, anchors: Vec<TraceAnchor>) {
        self.anchors = anchors;
    }
}

fn spawn_particles<R: Rng + ?Sized>(
    config: &ParticleConfig,
    size: CanvasSize,
    rng: &mut R,
) -> Vec<Particle> {
    let n = config.count.resolve(size.area());
    let w = size.width.max(0.0);
    let h = size.height.max(0.0);
    (0..n)
        .map(|_| Particle {
            position: Vec2::new(rng.gen::<f32>() * w, rng.gen::<f32>() * h),
            velocity: Vec2::new(config.velocity.sample(rng), config.velocity.sample(rng)),
            radius: config.radius.sample(rng),
            alpha: config.alpha.sample(rng),
        })
        .collect()
}

fn spawn_beams<R: Rng + ?Sized>(config: &BeamConfig, rng: &mut R) -> Vec<Beam> {
    (0..config.count)
        .map(|_| Beam {
            position: Vec2::new(
                BEAM_WRAP_MIN + (BEAM_WRAP_MAX - BEAM_WRAP_MIN) * rng.gen::<f32>(),
                rng.gen::<f32>(),
            ),
            width: config.width.sample(rng),
            speed: config.speed.sample(rng),
            alpha: config.alpha.sample(rng),
        })
        .collect()
}

/// Node centers relative to `section`, in node order. Pure: identical rects
/// always give identical anchors.
pub fn rebuild_anchors(nodes: &[Rect], section: Rect) -> Vec<TraceAnchor> {
    let origin = section.origin();
    nodes
        .iter()
        .map(|r| TraceAnchor {
            position: r.center() - origin,
        })
        .collect()
}

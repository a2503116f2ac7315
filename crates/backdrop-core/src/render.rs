//! Layered scene drawing against a [`Surface`].

use crate::config::{ClearMode, GlowConfig, GridConfig, SceneConfig, TraceConfig};
use crate::geometry::{CanvasSize, Rect, Rgba};
use crate::input::PointerOffset;
use crate::scene::SceneState;
use crate::surface::{stops, CompositeMode, Paint, Surface};
use glam::Vec2;

/// Draw one frame and advance beams and particles by one step.
///
/// Layer order: clear, grid, beams, traces, particles, glow. A size with a
/// zero or negative dimension draws nothing and leaves `state` untouched.
pub fn render_frame<S: Surface + ?Sized>(
    surface: &mut S,
    state: &mut SceneState,
    config: &SceneConfig,
    timestamp_ms: f64,
    size: CanvasSize,
    pointer: PointerOffset,
) {
    if !size.is_drawable() {
        return;
    }
    clear(surface, config.clear, size);
    if let Some(grid) = &config.grid {
        draw_grid(surface, grid, config.colors.grid, timestamp_ms, size, pointer);
    }
    draw_beams(surface, state, config, size);
    if let Some(traces) = &config.traces {
        draw_traces(surface, state, traces, config, timestamp_ms);
    }
    draw_particles(surface, state, config, size, pointer);
    if let Some(glow) = &config.glow {
        draw_glow(surface, glow, config.colors.glow, timestamp_ms, size, pointer);
    }
}

fn clear<S: Surface + ?Sized>(surface: &mut S, mode: ClearMode, size: CanvasSize) {
    match mode {
        ClearMode::FullClear => surface.clear(size),
        ClearMode::OpaqueFill(color) => surface.fill_rect(size.rect(), &Paint::Solid(color)),
        ClearMode::TranslucentFill { color, alpha } => {
            surface.fill_rect(size.rect(), &Paint::Solid(color.with_alpha(alpha)))
        }
    }
}

/// Drift offset of the first grid line, always in `[0, spacing)`.
pub fn grid_offset(timestamp_ms: f64, drift_px_per_ms: f64, spacing: f32) -> f32 {
    if spacing <= 0.0 {
        return 0.0;
    }
    (timestamp_ms * drift_px_per_ms).rem_euclid(spacing as f64) as f32
}

/// Line position after the breathing perturbation.
#[inline]
pub fn breathe(y: f32, timestamp_ms: f64, grid: &GridConfig) -> f32 {
    let phase = timestamp_ms * grid.breath_freq + (y * grid.breath_phase) as f64;
    y + phase.sin() as f32 * grid.breath_amplitude
}

fn draw_grid<S: Surface + ?Sized>(
    surface: &mut S,
    grid: &GridConfig,
    color: Rgba,
    timestamp_ms: f64,
    size: CanvasSize,
    pointer: PointerOffset,
) {
    if grid.spacing <= 0.0 {
        return;
    }
    let shift = pointer.as_vec2() * grid.parallax_px;
    let paint = Paint::Solid(color);
    let spacing = grid.spacing;

    let drift = grid_offset(timestamp_ms, grid.drift_px_per_ms, spacing);
    let mut y = drift + shift.y.rem_euclid(spacing) - spacing;
    while y < size.height + spacing {
        let yy = breathe(y, timestamp_ms, grid);
        surface.stroke_line(
            Vec2::new(0.0, yy),
            Vec2::new(size.width, yy),
            grid.line_width,
            &paint,
        );
        y += spacing;
    }

    if grid.vertical_lines {
        let mut x = shift.x.rem_euclid(spacing) - spacing;
        while x < size.width + spacing {
            surface.stroke_line(
                Vec2::new(x, 0.0),
                Vec2::new(x, size.height),
                grid.line_width,
                &paint,
            );
            x += spacing;
        }
    }
}

fn draw_beams<S: Surface + ?Sized>(
    surface: &mut S,
    state: &mut SceneState,
    config: &SceneConfig,
    size: CanvasSize,
) {
    if state.beams.is_empty() {
        return;
    }
    state.advance_beams();
    let color = config.colors.beam;
    let height = size.height * config.beams.length;
    surface.set_composite(CompositeMode::Lighter);
    for beam in &state.beams {
        let cx = beam.position.x * size.width;
        let cy = beam.position.y * size.height;
        let half = beam.width * 0.5;
        let paint = Paint::Linear {
            from: Vec2::new(cx - half, cy),
            to: Vec2::new(cx + half, cy),
            stops: stops(&[
                (0.0, color.with_alpha(0.0)),
                (0.5, color),
                (1.0, color.with_alpha(0.0)),
            ]),
        };
        surface.set_global_alpha(beam.alpha);
        surface.fill_rect(
            Rect::new(cx - half, cy - height * 0.5, beam.width, height),
            &paint,
        );
    }
    surface.set_global_alpha(1.0);
    surface.set_composite(CompositeMode::SourceOver);
}

/// Point at parameter `t` on the quadratic bezier `from -> control -> to`.
#[inline]
pub fn quadratic_point(from: Vec2, control: Vec2, to: Vec2, t: f32) -> Vec2 {
    let u = 1.0 - t;
    from * (u * u) + control * (2.0 * u * t) + to * (t * t)
}

/// Control point for segment `index`, swaying around the segment midpoint.
pub fn trace_control(
    from: Vec2,
    to: Vec2,
    index: usize,
    timestamp_ms: f64,
    trace: &TraceConfig,
) -> Vec2 {
    let phase = timestamp_ms * trace.curve_freq + index as f64;
    let mid = (from + to) * 0.5;
    mid + Vec2::new(phase.sin() as f32, phase.cos() as f32) * trace.curve_amplitude
}

fn draw_traces<S: Surface + ?Sized>(
    surface: &mut S,
    state: &SceneState,
    trace: &TraceConfig,
    config: &SceneConfig,
    timestamp_ms: f64,
) {
    let anchors = &state.anchors;
    let n = anchors.len();
    if n < 2 {
        return;
    }
    let highlight = Paint::Solid(config.colors.highlight);
    for i in 0..n {
        let from = anchors[i].position;
        let to = anchors[(i + 1) % n].position;
        let control = trace_control(from, to, i, timestamp_ms, trace);
        let paint = Paint::Linear {
            from,
            to,
            stops: stops(&[(0.0, config.colors.trace_start), (1.0, config.colors.trace_end)]),
        };
        surface.stroke_quadratic(from, control, to, trace.line_width, &paint);

        let t = 0.5 + 0.5 * (timestamp_ms * trace.highlight_freq + i as f64).sin() as f32;
        surface.fill_circle(
            quadratic_point(from, control, to, t),
            trace.highlight_radius,
            &highlight,
        );
    }
}

fn draw_particles<S: Surface + ?Sized>(
    surface: &mut S,
    state: &mut SceneState,
    config: &SceneConfig,
    size: CanvasSize,
    pointer: PointerOffset,
) {
    if state.particles.is_empty() {
        return;
    }
    state.advance_particles(size, &config.particles);
    let shift = pointer.as_vec2() * config.particles.parallax_px;
    let color = config.colors.particle;
    for p in &state.particles {
        surface.fill_circle(
            p.position + shift,
            p.radius,
            &Paint::Solid(color.with_alpha(p.alpha)),
        );
    }
}

/// Glow radius at `timestamp_ms`, never below one pixel.
pub fn glow_radius(glow: &GlowConfig, timestamp_ms: f64) -> f32 {
    (glow.base_radius + (timestamp_ms * glow.freq).sin() as f32 * glow.amplitude).max(1.0)
}

fn draw_glow<S: Surface + ?Sized>(
    surface: &mut S,
    glow: &GlowConfig,
    color: Rgba,
    timestamp_ms: f64,
    size: CanvasSize,
    pointer: PointerOffset,
) {
    let center = Vec2::new(glow.center.x * size.width, glow.center.y * size.height)
        + pointer.as_vec2() * glow.parallax_px;
    let paint = Paint::Radial {
        center,
        inner_radius: 0.0,
        outer_radius: glow_radius(glow, timestamp_ms),
        stops: stops(&[(0.0, color), (1.0, color.with_alpha(0.0))]),
    };
    surface.set_composite(CompositeMode::Lighter);
    surface.fill_rect(size.rect(), &paint);
    surface.set_composite(CompositeMode::SourceOver);
}

use backdrop_core::{CanvasSize, CompositeMode, Paint, Rect, Surface};
use glam::Vec2;
use std::f64::consts::TAU;
use web_sys as web;

/// [`Surface`] over a canvas 2D context. Drawing is in CSS pixels; the DPR
/// transform is applied by `dom::sync_canvas_backing_size`.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

enum Style {
    Css(String),
    Gradient(web::CanvasGradient),
}

impl CanvasSurface {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    fn style(&self, paint: &Paint) -> Option<Style> {
        match paint {
            Paint::Solid(c) => Some(Style::Css(c.to_css())),
            Paint::Linear { from, to, stops } => {
                let g = self.ctx.create_linear_gradient(
                    from.x as f64,
                    from.y as f64,
                    to.x as f64,
                    to.y as f64,
                );
                for s in stops {
                    _ = g.add_color_stop(s.offset.clamp(0.0, 1.0), &s.color.to_css());
                }
                Some(Style::Gradient(g))
            }
            Paint::Radial {
                center,
                inner_radius,
                outer_radius,
                stops,
            } => {
                let g = self
                    .ctx
                    .create_radial_gradient(
                        center.x as f64,
                        center.y as f64,
                        *inner_radius as f64,
                        center.x as f64,
                        center.y as f64,
                        *outer_radius as f64,
                    )
                    .ok()?;
                for s in stops {
                    _ = g.add_color_stop(s.offset.clamp(0.0, 1.0), &s.color.to_css());
                }
                Some(Style::Gradient(g))
            }
        }
    }

    fn set_fill(&self, paint: &Paint) -> bool {
        match self.style(paint) {
            Some(Style::Css(s)) => self.ctx.set_fill_style_str(&s),
            Some(Style::Gradient(g)) => self.ctx.set_fill_style_canvas_gradient(&g),
            None => return false,
        }
        true
    }

    fn set_stroke(&self, paint: &Paint) -> bool {
        match self.style(paint) {
            Some(Style::Css(s)) => self.ctx.set_stroke_style_str(&s),
            Some(Style::Gradient(g)) => self.ctx.set_stroke_style_canvas_gradient(&g),
            None => return false,
        }
        true
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, size: CanvasSize) {
        self.ctx
            .clear_rect(0.0, 0.0, size.width as f64, size.height as f64);
    }

    fn fill_rect(&mut self, rect: Rect, paint: &Paint) {
        if self.set_fill(paint) {
            self.ctx.fill_rect(
                rect.x as f64,
                rect.y as f64,
                rect.width as f64,
                rect.height as f64,
            );
        }
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, paint: &Paint) {
        if !self.set_stroke(paint) {
            return;
        }
        self.ctx.set_line_width(width as f64);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    fn stroke_quadratic(&mut self, from: Vec2, control: Vec2, to: Vec2, width: f32, paint: &Paint) {
        if !self.set_stroke(paint) {
            return;
        }
        self.ctx.set_line_width(width as f64);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx
            .quadratic_curve_to(control.x as f64, control.y as f64, to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint) {
        if radius <= 0.0 || !self.set_fill(paint) {
            return;
        }
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
        self.ctx.fill();
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.ctx.set_global_alpha(alpha.clamp(0.0, 1.0) as f64);
    }

    fn set_composite(&mut self, mode: CompositeMode) {
        _ = self.ctx.set_global_composite_operation(mode.as_css());
    }
}

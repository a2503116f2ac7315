//! The subset of the canvas 2D API the renderer draws with.
//!
//! The web frontend implements [`Surface`] over `CanvasRenderingContext2d`;
//! [`RecordingSurface`] captures calls for tests and headless inspection.

use crate::geometry::{CanvasSize, Rect, Rgba};
use glam::Vec2;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompositeMode {
    SourceOver,
    Lighter,
}

impl CompositeMode {
    pub fn as_css(&self) -> &'static str {
        match self {
            CompositeMode::SourceOver => "source-over",
            CompositeMode::Lighter => "lighter",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Rgba,
}

pub type Stops = SmallVec<[ColorStop; 4]>;

pub fn stops(list: &[(f32, Rgba)]) -> Stops {
    list.iter()
        .map(|&(offset, color)| ColorStop { offset, color })
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    Solid(Rgba),
    Linear {
        from: Vec2,
        to: Vec2,
        stops: Stops,
    },
    Radial {
        center: Vec2,
        inner_radius: f32,
        outer_radius: f32,
        stops: Stops,
    },
}

pub trait Surface {
    /// Transparent clear of the whole canvas.
    fn clear(&mut self, size: CanvasSize);
    fn fill_rect(&mut self, rect: Rect, paint: &Paint);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, paint: &Paint);
    fn stroke_quadratic(&mut self, from: Vec2, control: Vec2, to: Vec2, width: f32, paint: &Paint);
    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint);
    fn set_global_alpha(&mut self, alpha: f32);
    fn set_composite(&mut self, mode: CompositeMode);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Clear(CanvasSize),
    FillRect(Rect, Paint),
    StrokeLine {
        from: Vec2,
        to: Vec2,
        width: f32,
        paint: Paint,
    },
    StrokeQuadratic {
        from: Vec2,
        control: Vec2,
        to: Vec2,
        width: f32,
        paint: Paint,
    },
    FillCircle {
        center: Vec2,
        radius: f32,
        paint: Paint,
    },
    GlobalAlpha(f32),
    Composite(CompositeMode),
}

#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    pub fn count(&self, pred: impl Fn(&DrawCall) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }

    pub fn circles(&self) -> impl Iterator<Item = (Vec2, f32)> + '_ {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::FillCircle { center, radius, .. } => Some((*center, *radius)),
            _ => None,
        })
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, size: CanvasSize) {
        self.calls.push(DrawCall::Clear(size));
    }

    fn fill_rect(&mut self, rect: Rect, paint: &Paint) {
        self.calls.push(DrawCall::FillRect(rect, paint.clone()));
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, paint: &Paint) {
        self.calls.push(DrawCall::StrokeLine {
            from,
            to,
            width,
            paint: paint.clone(),
        });
    }

    fn stroke_quadratic(&mut self, from: Vec2, control: Vec2, to: Vec2, width: f32, paint: &Paint) {
        self.calls.push(DrawCall::StrokeQuadratic {
            from,
            control,
            to,
            width,
            paint: paint.clone(),
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint) {
        self.calls.push(DrawCall::FillCircle {
            center,
            radius,
            paint: paint.clone(),
        });
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.calls.push(DrawCall::GlobalAlpha(alpha));
    }

    fn set_composite(&mut self, mode: CompositeMode) {
        self.calls.push(DrawCall::Composite(mode));
    }
}

//! Plain geometry and color values shared by the scene, the renderer and the
//! web frontend.
//!
//! Everything here is measured in CSS pixels. The device pixel ratio travels
//! alongside [`CanvasSize`] so the frontend can scale its backing store without
//! the core ever seeing device pixels.

use glam::Vec2;

/// Axis-aligned box in page pixels, as reported by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    #[inline]
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Drawable area of a canvas in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasSize {
    pub width: f32,
    pub height: f32,
    pub device_pixel_ratio: f32,
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            device_pixel_ratio: 1.0,
        }
    }
}

impl CanvasSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            device_pixel_ratio: 1.0,
        }
    }

    pub fn with_device_pixel_ratio(mut self, dpr: f32) -> Self {
        self.device_pixel_ratio = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
        self
    }

    /// A frame is only drawn when both dimensions are strictly positive.
    #[inline]
    pub fn is_drawable(&self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    #[inline]
    pub fn area(&self) -> f32 {
        if self.is_drawable() {
            self.width * self.height
        } else {
            0.0
        }
    }

    /// Same size with each dimension raised to at least `floor` pixels.
    pub fn clamped(self, floor: f32) -> Self {
        let clamp = |v: f32| if v.is_finite() { v.max(floor) } else { floor };
        Self {
            width: clamp(self.width),
            height: clamp(self.height),
            device_pixel_ratio: self.device_pixel_ratio,
        }
    }

    /// Backing-store size in device pixels, never below 1x1.
    pub fn backing_pixels(&self) -> (u32, u32) {
        let c = self.clamped(1.0);
        (
            (c.width * c.device_pixel_ratio).round().max(1.0) as u32,
            (c.height * c.device_pixel_ratio).round().max(1.0) as u32,
        )
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

/// 8-bit color with a floating alpha, matching CSS `rgba()`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0.0);

    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Same channels with alpha replaced by `a`.
    #[inline]
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Alpha multiplied by `k`, clamped to \[0, 1\].
    #[inline]
    pub fn fade(self, k: f32) -> Self {
        self.with_alpha((self.a * k).clamp(0.0, 1.0))
    }

    pub fn to_css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {:.3})",
            self.r,
            self.g,
            self.b,
            self.a.clamp(0.0, 1.0)
        )
    }
}

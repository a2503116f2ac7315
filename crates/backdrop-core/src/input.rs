use crate::constants::REVEAL_STAGGER_MS;
use crate::geometry::Rect;
use fnv::FnvHashMap;
use glam::Vec2;

/// Pointer position relative to the section center, in units of the
/// section's size. `(0, 0)` is neutral; values are not clamped.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerOffset {
    pub x: f32,
    pub y: f32,
}

impl PointerOffset {
    pub const NEUTRAL: PointerOffset = PointerOffset { x: 0.0, y: 0.0 };

    #[inline]
    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

#[inline]
pub fn pointer_offset(client: Vec2, section: Rect) -> PointerOffset {
    if section.width <= 0.0 || section.height <= 0.0 {
        return PointerOffset::NEUTRAL;
    }
    let c = section.center();
    PointerOffset {
        x: (client.x - c.x) / section.width,
        y: (client.y - c.y) / section.height,
    }
}

/// Current pointer offset for one section. Written by pointer events, read
/// by the renderer every frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerTracker {
    offset: PointerOffset,
    inside: bool,
}

impl PointerTracker {
    pub fn on_move(&mut self, client: Vec2, section: Rect) -> PointerOffset {
        self.offset = pointer_offset(client, section);
        self.inside = true;
        self.offset
    }

    pub fn on_leave(&mut self) {
        self.offset = PointerOffset::NEUTRAL;
        self.inside = false;
    }

    #[inline]
    pub fn offset(&self) -> PointerOffset {
        self.offset
    }

    #[inline]
    pub fn is_inside(&self) -> bool {
        self.inside
    }
}

/// CSS transform for a parallax layer: translate by `depth_px` per unit of
/// offset and tilt up to `tilt_deg` around both axes.
pub fn parallax_transform(offset: PointerOffset, depth_px: f32, tilt_deg: f32) -> String {
    let tx = offset.x * depth_px;
    let ty = offset.y * depth_px;
    // Pointer below center tips the top edge away from the viewer.
    let rx = 0.0 - offset.y * tilt_deg;
    let ry = offset.x * tilt_deg;
    format!(
        "translate3d({:.2}px, {:.2}px, 0) rotateX({:.2}deg) rotateY({:.2}deg)",
        tx, ty, rx, ry
    )
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Scheduled,
    Visible,
}

/// Fire-once reveal bookkeeping for the nodes of one page.
#[derive(Clone, Debug)]
pub struct RevealScheduler {
    stagger_ms: f64,
    states: FnvHashMap<usize, RevealState>,
}

impl Default for RevealScheduler {
    fn default() -> Self {
        Self::new(REVEAL_STAGGER_MS)
    }
}

impl RevealScheduler {
    pub fn new(stagger_ms: f64) -> Self {
        Self {
            stagger_ms: stagger_ms.max(0.0),
            states: FnvHashMap::default(),
        }
    }

    /// Delay before node `index` should be revealed, or `None` if it has
    /// already been scheduled or revealed.
    pub fn on_intersect(&mut self, index: usize) -> Option<f64> {
        self.on_intersect_at(index, index)
    }

    /// Like [`on_intersect`](Self::on_intersect) but staggers by
    /// `stagger_index` instead of the node key, e.g. a node's rank among its
    /// siblings.
    pub fn on_intersect_at(&mut self, index: usize, stagger_index: usize) -> Option<f64> {
        if self.states.contains_key(&index) {
            return None;
        }
        self.states.insert(index, RevealState::Scheduled);
        Some(stagger_index as f64 * self.stagger_ms)
    }

    /// Complete the transition. Returns `true` the first time only.
    pub fn mark_revealed(&mut self, index: usize) -> bool {
        match self.states.insert(index, RevealState::Visible) {
            Some(RevealState::Visible) => false,
            _ => true,
        }
    }

    pub fn state(&self, index: usize) -> Option<RevealState> {
        self.states.get(&index).copied()
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.state(index) == Some(RevealState::Visible)
    }
}

//! One mounted backdrop: config, scene pools, pointer state and the random
//! source that seeded them.

use crate::config::SceneConfig;
use crate::geometry::CanvasSize;
use crate::input::PointerTracker;
use crate::render::render_frame;
use crate::scene::{rebuild_anchors, Layout, Motion, SceneState};
use crate::surface::Surface;
use rand::rngs::StdRng;

pub struct Effect {
    config: SceneConfig,
    state: SceneState,
    size: CanvasSize,
    motion: Motion,
    pointer: PointerTracker,
    rng: StdRng,
}

impl Effect {
    pub fn new(
        config: SceneConfig,
        size: CanvasSize,
        layout: &Layout,
        motion: Motion,
        mut rng: StdRng,
    ) -> Self {
        let state = SceneState::initialize(&config, size, layout, motion, &mut rng);
        Self {
            config,
            state,
            size,
            motion,
            pointer: PointerTracker::default(),
            rng,
        }
    }

    /// New canvas size and fresh anchors. Pools keep their counts, except on
    /// the first drawable size after mounting collapsed: particles seeded on a
    /// 0x0 canvas all sit at the origin, so the pools are spawned again.
    pub fn resize(&mut self, size: CanvasSize, layout: &Layout) {
        let was_drawable = self.size.is_drawable();
        self.size = size;
        if !was_drawable && size.is_drawable() {
            log::debug!(
                "[effect] first drawable size {:.0}x{:.0}; respawning pools",
                size.width,
                size.height
            );
            self.state =
                SceneState::initialize(&self.config, size, layout, self.motion, &mut self.rng);
            return;
        }
        self.rebuild_anchors(layout);
    }

    pub fn rebuild_anchors(&mut self, layout: &Layout) {
        if self.config.traces.is_none() {
            return;
        }
        let anchors = rebuild_anchors(&layout.nodes, layout.section);
        log::debug!("[effect] anchors rebuilt: {}", anchors.len());
        self.state.set_anchors(anchors);
    }

    /// Record the current motion environment. Pools are rebuilt only when
    /// the scene enters or leaves degraded mode.
    pub fn set_motion(&mut self, motion: Motion, layout: &Layout) {
        let min = self.config.min_viewport_width;
        let changed = motion.allows_ambient(min) != self.motion.allows_ambient(min);
        self.motion = motion;
        if changed {
            log::info!(
                "[effect] ambient layers {}",
                if motion.allows_ambient(min) { "on" } else { "off" }
            );
            self.state =
                SceneState::initialize(&self.config, self.size, layout, motion, &mut self.rng);
        }
    }

    /// Draw one frame. Under reduced motion the clock is pinned, so grid,
    /// traces and glow hold still.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S, timestamp_ms: f64) {
        render_frame(
            surface,
            &mut self.state,
            &self.config,
            self.motion.frame_time(timestamp_ms),
            self.size,
            self.pointer.offset(),
        );
    }

    pub fn pointer_mut(&mut self) -> &mut PointerTracker {
        &mut self.pointer
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn state(&self) -> &SceneState {
        &self.state
    }

    pub fn size(&self) -> CanvasSize {
        self.size
    }

    pub fn motion(&self) -> Motion {
        self.motion
    }
}

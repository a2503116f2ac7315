//! Frame loop bookkeeping independent of the host scheduler.
//!
//! The browser side implements [`FrameScheduler`] with
//! `requestAnimationFrame` / `cancelAnimationFrame`. [`FrameLoop`] tracks the
//! single pending request so `stop()` can always cancel it.

pub trait FrameScheduler {
    type Token: Copy;

    /// Ask for one callback on the next frame. `None` if the host refused.
    fn request_frame(&mut self) -> Option<Self::Token>;
    fn cancel_frame(&mut self, token: Self::Token);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameTick {
    pub timestamp_ms: f64,
    /// Time since the previous tick; zero on the first one.
    pub delta_ms: f64,
    pub frame: u64,
}

pub struct FrameLoop<S: FrameScheduler> {
    scheduler: S,
    pending: Option<S::Token>,
    running: bool,
    frame: u64,
    last_timestamp: Option<f64>,
}

impl<S: FrameScheduler> FrameLoop<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            pending: None,
            running: false,
            frame: 0,
            last_timestamp: None,
        }
    }

    /// Begin ticking. Returns `false` if already running.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        self.pending = self.scheduler.request_frame();
        if self.pending.is_none() {
            log::warn!("[loop] host refused the first frame request");
        }
        true
    }

    /// Handle a host callback. Schedules the next frame and returns the tick
    /// to render, or `None` once stopped.
    pub fn on_frame(&mut self, timestamp_ms: f64) -> Option<FrameTick> {
        self.pending = None;
        if !self.running {
            return None;
        }
        // Hosts are expected to be monotonic; hold time still if one is not.
        let timestamp_ms = match self.last_timestamp {
            Some(prev) if timestamp_ms < prev || !timestamp_ms.is_finite() => prev,
            None if !timestamp_ms.is_finite() => 0.0,
            _ => timestamp_ms,
        };
        let delta_ms = self.last_timestamp.map_or(0.0, |prev| timestamp_ms - prev);
        self.last_timestamp = Some(timestamp_ms);
        self.frame += 1;
        self.pending = self.scheduler.request_frame();
        Some(FrameTick {
            timestamp_ms,
            delta_ms,
            frame: self.frame,
        })
    }

    /// Cancel the pending frame. Safe to call more than once.
    pub fn stop(&mut self) {
        if let Some(token) = self.pending.take() {
            self.scheduler.cancel_frame(token);
        }
        if self.running {
            log::debug!("[loop] stopped after {} frames", self.frame);
        }
        self.running = false;
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[inline]
    pub fn pending(&self) -> Option<S::Token> {
        self.pending
    }

    #[inline]
    pub fn frames(&self) -> u64 {
        self.frame
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }
}

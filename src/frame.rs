use crate::canvas::CanvasSurface;
use backdrop_core::{Effect, FrameLoop, FrameScheduler};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// `requestAnimationFrame` backed scheduler sharing the tick closure with
/// the loop that owns it.
pub struct RafScheduler {
    tick: TickSlot,
}

impl FrameScheduler for RafScheduler {
    type Token = i32;

    fn request_frame(&mut self) -> Option<i32> {
        let w = web::window()?;
        let slot = self.tick.borrow();
        let cb = slot.as_ref()?;
        w.request_animation_frame(cb.as_ref().unchecked_ref()).ok()
    }

    fn cancel_frame(&mut self, token: i32) {
        if let Some(w) = web::window() {
            _ = w.cancel_animation_frame(token);
        }
    }
}

pub struct FrameContext {
    pub effect: Rc<RefCell<Effect>>,
    pub surface: CanvasSurface,
}

impl FrameContext {
    pub fn frame(&mut self, timestamp_ms: f64) {
        self.effect
            .borrow_mut()
            .frame(&mut self.surface, timestamp_ms);
    }
}

/// Owner of one running loop. Dropping the handle leaves the loop running;
/// call [`LoopHandle::stop`] to cancel it.
pub struct LoopHandle {
    name: String,
    frame_loop: Rc<RefCell<FrameLoop<RafScheduler>>>,
    tick: TickSlot,
}

impl LoopHandle {
    pub fn stop(&self) {
        self.frame_loop.borrow_mut().stop();
        // Breaks the closure -> loop -> scheduler -> closure cycle.
        self.tick.borrow_mut().take();
        log::info!("[loop] {} stopped", self.name);
    }

    pub fn is_running(&self) -> bool {
        self.frame_loop.borrow().is_running()
    }
}

pub fn start_loop(name: &str, mut frame_ctx: FrameContext) -> LoopHandle {
    let tick: TickSlot = Rc::new(RefCell::new(None));
    let frame_loop = Rc::new(RefCell::new(FrameLoop::new(RafScheduler {
        tick: tick.clone(),
    })));
    let loop_for_tick = frame_loop.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp_ms: f64| {
        let next = loop_for_tick.borrow_mut().on_frame(timestamp_ms);
        if let Some(t) = next {
            frame_ctx.frame(t.timestamp_ms);
        }
    }) as Box<dyn FnMut(f64)>));
    frame_loop.borrow_mut().start();
    log::info!("[loop] {} started", name);
    LoopHandle {
        name: name.to_string(),
        frame_loop,
        tick,
    }
}

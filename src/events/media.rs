use crate::constants::REDUCED_MOTION_QUERY;
use crate::dom;
use backdrop_core::Effect;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Window resize: resync the backing store, rebuild anchors and re-check the
/// viewport-width degraded mode.
pub fn wire_resize(
    canvas: &web::HtmlCanvasElement,
    ctx: &web::CanvasRenderingContext2d,
    section: &web::Element,
    effect: Rc<RefCell<Effect>>,
) {
    let canvas = canvas.clone();
    let ctx = ctx.clone();
    let section = section.clone();
    let closure = Closure::wrap(Box::new(move || {
        let size = dom::sync_canvas_backing_size(&canvas, &ctx);
        let layout = dom::section_layout(&section);
        let mut e = effect.borrow_mut();
        e.resize(size, &layout);
        e.set_motion(dom::current_motion(), &layout);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Toggling the OS reduced-motion setting rebuilds the pools live.
pub fn wire_reduced_motion(section: &web::Element, effect: Rc<RefCell<Effect>>) {
    let Some(mql) = web::window().and_then(|w| w.match_media(REDUCED_MOTION_QUERY).ok().flatten())
    else {
        return;
    };
    let section = section.clone();
    let closure = Closure::wrap(Box::new(move || {
        let motion = dom::current_motion();
        log::info!("[media] reduced motion = {}", motion.reduced_motion);
        effect
            .borrow_mut()
            .set_motion(motion, &dom::section_layout(&section));
    }) as Box<dyn FnMut()>);
    _ = mql.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Anchors read on mount can be stale until layout settles; rebuild once
/// after `delay_ms`.
pub fn schedule_anchor_settle(section: &web::Element, effect: Rc<RefCell<Effect>>, delay_ms: i32) {
    let section = section.clone();
    dom::set_timeout(delay_ms, move || {
        effect
            .borrow_mut()
            .rebuild_anchors(&dom::section_layout(&section));
    });
}

#![cfg(target_arch = "wasm32")]
use backdrop_core::{Effect, SceneConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

pub mod canvas;
mod constants;
mod dom;
mod events;
mod frame;

use constants::*;

thread_local! {
    // Loop handles only, kept so `stop_all` can tear down; scene state lives
    // in each handle's own effect.
    static LOOPS: RefCell<Vec<frame::LoopHandle>> = RefCell::new(Vec::new());
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("backdrop-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Cancel every running backdrop loop.
#[wasm_bindgen]
pub fn stop_all() {
    LOOPS.with(|loops| {
        for handle in loops.borrow_mut().drain(..) {
            handle.stop();
        }
    });
}

/// Number of backdrop loops currently running.
#[wasm_bindgen]
pub fn running_count() -> usize {
    LOOPS.with(|loops| loops.borrow().iter().filter(|h| h.is_running()).count())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    for el in dom::document_query_all(&document, BACKDROP_SELECTOR) {
        match mount(el) {
            Ok(handle) => LOOPS.with(|loops| loops.borrow_mut().push(handle)),
            Err(e) => log::error!("[mount] skipped canvas: {:?}", e),
        }
    }

    events::reveal::wire_scroll_reveal(&document, dom::prefers_reduced_motion())?;
    Ok(())
}

fn rng_for(el: &web::Element) -> StdRng {
    match el
        .get_attribute(SEED_ATTR)
        .and_then(|s| s.trim().parse::<u64>().ok())
    {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn mount(el: web::Element) -> anyhow::Result<frame::LoopHandle> {
    let preset = el.get_attribute(BACKDROP_ATTR).unwrap_or_default();
    let config = SceneConfig::from_preset(&preset)?;
    config.validate()?;
    let rng = rng_for(&el);

    let canvas: web::HtmlCanvasElement = el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    // The canvas is laid over its parent section; anchors and pointer
    // offsets are measured against that section.
    let section: web::Element = canvas
        .parent_element()
        .unwrap_or_else(|| canvas.clone().unchecked_into());

    let size = dom::sync_canvas_backing_size(&canvas, &ctx);
    let layout = dom::section_layout(&section);
    let motion = dom::current_motion();
    log::info!(
        "[mount] {} {:.0}x{:.0} dpr={} nodes={} reduced_motion={}",
        preset,
        size.width,
        size.height,
        size.device_pixel_ratio,
        layout.nodes.len(),
        motion.reduced_motion
    );
    let effect = Rc::new(RefCell::new(Effect::new(config, size, &layout, motion, rng)));

    events::pointer::wire_pointer(&section, effect.clone());
    events::media::wire_resize(&canvas, &ctx, &section, effect.clone());
    events::media::wire_reduced_motion(&section, effect.clone());
    events::media::schedule_anchor_settle(&section, effect.clone(), ANCHOR_SETTLE_DELAY_MS);

    Ok(frame::start_loop(
        &preset,
        frame::FrameContext {
            effect,
            surface: canvas::CanvasSurface::new(ctx),
        },
    ))
}

use crate::constants::{REVEAL_SELECTOR, REVEAL_THRESHOLD, REVEAL_VISIBLE_CLASS};
use crate::dom;
use backdrop_core::constants::REVEAL_STAGGER_MS;
use backdrop_core::RevealScheduler;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Rank of `el` among the `[data-reveal]` children of its parent, so a row of
/// cards staggers left to right regardless of where it sits on the page.
fn sibling_rank(el: &web::Element) -> usize {
    let Some(parent) = el.parent_element() else {
        return 0;
    };
    dom::query_all(&parent, REVEAL_SELECTOR)
        .iter()
        .filter(|n| n.parent_element().as_ref() == Some(&parent))
        .position(|n| n == el)
        .unwrap_or(0)
}

fn reveal(el: &web::Element) {
    _ = el.class_list().add_1(REVEAL_VISIBLE_CLASS);
}

/// Observe every `[data-reveal]` node and add the visible class once, after a
/// stagger delay, when it first crosses the visibility threshold.
pub fn wire_scroll_reveal(document: &web::Document, reduced_motion: bool) -> anyhow::Result<()> {
    let nodes = dom::document_query_all(document, REVEAL_SELECTOR);
    if nodes.is_empty() {
        return Ok(());
    }
    if reduced_motion {
        nodes.iter().for_each(reveal);
        log::info!("[reveal] reduced motion: {} nodes shown immediately", nodes.len());
        return Ok(());
    }

    let ranks: Vec<usize> = nodes.iter().map(sibling_rank).collect();
    let scheduler = Rc::new(RefCell::new(RevealScheduler::new(REVEAL_STAGGER_MS)));
    let nodes = Rc::new(nodes);
    let nodes_cb = nodes.clone();

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web::IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let Some(index) = nodes_cb.iter().position(|n| n == &target) else {
                    continue;
                };
                observer.unobserve(&target);
                let Some(delay_ms) = scheduler.borrow_mut().on_intersect_at(index, ranks[index])
                else {
                    continue;
                };
                let scheduler_done = scheduler.clone();
                dom::set_timeout(delay_ms.round() as i32, move || {
                    if scheduler_done.borrow_mut().mark_revealed(index) {
                        reveal(&target);
                    }
                });
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;
    for node in nodes.iter() {
        observer.observe(node);
    }
    callback.forget();
    log::info!("[reveal] observing {} nodes", nodes.len());
    Ok(())
}

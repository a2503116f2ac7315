use crate::constants::{
    PARALLAX_DEFAULT_DEPTH_PX, PARALLAX_DEPTH_ATTR, PARALLAX_SELECTOR, PARALLAX_TILT_DEG,
};
use crate::dom;
use backdrop_core::{parallax_transform, Effect, PointerOffset};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `[data-parallax]` layer inside a section with its depth in px.
struct ParallaxLayer {
    el: web::HtmlElement,
    depth_px: f32,
}

fn parallax_layers(section: &web::Element) -> Vec<ParallaxLayer> {
    dom::query_all(section, PARALLAX_SELECTOR)
        .into_iter()
        .filter_map(|el| {
            let depth_px = el
                .get_attribute(PARALLAX_DEPTH_ATTR)
                .and_then(|v| v.trim().parse::<f32>().ok())
                .unwrap_or(PARALLAX_DEFAULT_DEPTH_PX);
            el.dyn_into::<web::HtmlElement>()
                .ok()
                .map(|el| ParallaxLayer { el, depth_px })
        })
        .collect()
}

fn apply_parallax(layers: &[ParallaxLayer], offset: PointerOffset) {
    for layer in layers {
        let transform = parallax_transform(offset, layer.depth_px, PARALLAX_TILT_DEG);
        _ = layer.el.style().set_property("transform", &transform);
    }
}

/// Pointer move/leave on `section` drive the effect's pointer offset and the
/// CSS transforms of the section's parallax layers.
pub fn wire_pointer(section: &web::Element, effect: Rc<RefCell<Effect>>) {
    let layers = Rc::new(parallax_layers(section));

    let section_move = section.clone();
    let effect_move = effect.clone();
    let layers_move = layers.clone();
    let on_move = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let client = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        let offset = effect_move
            .borrow_mut()
            .pointer_mut()
            .on_move(client, dom::element_rect(&section_move));
        apply_parallax(&layers_move, offset);
    }) as Box<dyn FnMut(_)>);
    _ = section.add_event_listener_with_callback("pointermove", on_move.as_ref().unchecked_ref());
    on_move.forget();

    let on_leave = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        effect.borrow_mut().pointer_mut().on_leave();
        apply_parallax(&layers, PointerOffset::NEUTRAL);
    }) as Box<dyn FnMut(_)>);
    _ = section.add_event_listener_with_callback("pointerleave", on_leave.as_ref().unchecked_ref());
    on_leave.forget();
}

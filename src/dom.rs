use crate::constants::{MIN_CANVAS_PX, REDUCED_MOTION_QUERY, TRACE_NODE_SELECTOR};
use backdrop_core::{CanvasSize, Layout, Motion, Rect};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn element_rect(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.x() as f32, r.y() as f32, r.width() as f32, r.height() as f32)
}

/// All elements under `root` matching `selector`, in document order.
pub fn query_all(root: &web::Element, selector: &str) -> Vec<web::Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

pub fn document_query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

/// Section bounds plus the traced nodes inside it, in document order.
pub fn section_layout(section: &web::Element) -> Layout {
    Layout {
        section: element_rect(section),
        nodes: query_all(section, TRACE_NODE_SELECTOR)
            .iter()
            .map(element_rect)
            .collect(),
    }
}

/// Match the canvas backing store to its CSS size times devicePixelRatio and
/// scale the context so drawing happens in CSS pixels.
pub fn sync_canvas_backing_size(
    canvas: &web::HtmlCanvasElement,
    ctx: &web::CanvasRenderingContext2d,
) -> CanvasSize {
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    let rect = canvas.get_bounding_client_rect();
    let css = CanvasSize::new(rect.width() as f32, rect.height() as f32)
        .with_device_pixel_ratio(dpr as f32);
    let (w_px, h_px) = css.clamped(MIN_CANVAS_PX).backing_pixels();
    if canvas.width() != w_px {
        canvas.set_width(w_px);
    }
    if canvas.height() != h_px {
        canvas.set_height(h_px);
    }
    // Resizing resets the transform, so always reapply.
    let scale = css.device_pixel_ratio as f64;
    _ = ctx.set_transform(scale, 0.0, 0.0, scale, 0.0, 0.0);
    // Logical size stays unclamped: a collapsed canvas renders no-op frames.
    css
}

pub fn prefers_reduced_motion() -> bool {
    web::window()
        .and_then(|w| w.match_media(REDUCED_MOTION_QUERY).ok().flatten())
        .map(|m| m.matches())
        .unwrap_or(false)
}

/// Unknown widths count as wide so ambient layers stay on.
pub fn viewport_width() -> f32 {
    web::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .map_or(f32::INFINITY, |w| w as f32)
}

#[inline]
pub fn current_motion() -> Motion {
    Motion {
        reduced_motion: prefers_reduced_motion(),
        viewport_width: viewport_width(),
    }
}

/// Run `f` once after `delay_ms`.
pub fn set_timeout(delay_ms: i32, f: impl FnOnce() + 'static) {
    let closure = wasm_bindgen::closure::Closure::once_into_js(f);
    if let Some(w) = web::window() {
        _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.unchecked_ref(),
            delay_ms,
        );
    }
}

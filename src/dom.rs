use crate::core::scene::Projection;
use crate::core::timeline::ElementStyle;
use crate::core::trigger::{ClientRect, ElementBox};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Every element matching `selector`, in document order. An invalid selector
/// or a non-HTML match yields nothing rather than an error.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        log::debug!("[dom] invalid selector {selector}");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

pub fn query_one(document: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|e| e.dyn_into::<web::HtmlElement>().ok())
}

pub fn apply_style(el: &web::HtmlElement, style: &ElementStyle) {
    let css = el.style();
    _ = css.set_property("transform", &style.transform_css());
    _ = css.set_property("opacity", &style.opacity_css());
}

pub fn add_body_class(document: &web::Document, class: &str) {
    if let Some(body) = document.body() {
        _ = body.class_list().add_1(class);
    }
}

/// CSS viewport size in px.
pub fn viewport_size(window: &web::Window) -> (f32, f32) {
    let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(1.0) as f32
    };
    (read(window.inner_width()), read(window.inner_height()))
}

pub fn device_pixel_ratio(window: &web::Window) -> f32 {
    window.device_pixel_ratio() as f32
}

pub fn scroll_y(window: &web::Window) -> f32 {
    window.scroll_y().unwrap_or(0.0) as f32
}

/// Maximum scroll offset of the document.
pub fn scroll_limit(window: &web::Window, document: &web::Document) -> f32 {
    let content = document
        .document_element()
        .map(|e| e.scroll_height() as f32)
        .unwrap_or(0.0);
    (content - viewport_size(window).1).max(0.0)
}

/// Element box in document coordinates, given the current scroll offset.
pub fn element_box(el: &web::Element, scroll_y: f32) -> ElementBox {
    let r = el.get_bounding_client_rect();
    ElementBox {
        top: r.top() as f32 + scroll_y,
        height: r.height() as f32,
    }
}

pub fn client_rect(el: &web::Element) -> ClientRect {
    let r = el.get_bounding_client_rect();
    ClientRect {
        left: r.left() as f32,
        top: r.top() as f32,
        width: r.width() as f32,
        height: r.height() as f32,
    }
}

/// Match the canvas backing store to the projection's pixel size.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, projection: &Projection) {
    if canvas.width() != projection.width_px {
        canvas.set_width(projection.width_px);
    }
    if canvas.height() != projection.height_px {
        canvas.set_height(projection.height_px);
    }
}

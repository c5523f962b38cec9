use super::Listener;
use crate::constants::SEL_ANCHOR;
use crate::core::constants::ANCHOR_SCROLL_DURATION;
use crate::core::ease::Ease;
use crate::core::scroll::SmoothScroller;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

const LINE_HEIGHT_PX: f32 = 16.0;

/// Wheel deltas in pixels regardless of the event's delta mode.
fn wheel_delta_px(ev: &web::WheelEvent, viewport_height: f32) -> f32 {
    let dy = ev.delta_y() as f32;
    match ev.delta_mode() {
        web::WheelEvent::DOM_DELTA_LINE => dy * LINE_HEIGHT_PX,
        web::WheelEvent::DOM_DELTA_PAGE => dy * viewport_height,
        _ => dy,
    }
}

/// Takes over wheel scrolling. Registered as non-passive so the native scroll
/// (and scroll chaining) can be cancelled.
pub fn wire_wheel(window: &web::Window, scroller: Rc<RefCell<SmoothScroller>>) -> Listener {
    let w = window.clone();
    Listener::active(window, "wheel", move |ev: web::WheelEvent| {
        if ev.ctrl_key() {
            // pinch-zoom gesture
            return;
        }
        ev.prevent_default();
        let vh = dom::viewport_size(&w).1;
        scroller.borrow_mut().on_wheel(wheel_delta_px(&ev, vh));
    })
}

/// Adopts scrolls the scroller did not cause (touch, keyboard, scrollbar).
/// The limit is refreshed first so a page that grew keeps the native offset.
pub fn wire_native_scroll(
    window: &web::Window,
    document: &web::Document,
    scroller: Rc<RefCell<SmoothScroller>>,
) -> Listener {
    let w = window.clone();
    let d = document.clone();
    Listener::new(window, "scroll", move |_: web::Event| {
        let mut s = scroller.borrow_mut();
        if !s.is_smoothing() {
            s.set_limit(dom::scroll_limit(&w, &d));
            s.sync_native(dom::scroll_y(&w));
        }
    })
}

/// In-page anchors glide to their target instead of jumping.
pub fn wire_anchor_links(
    window: &web::Window,
    document: &web::Document,
    scroller: &Rc<RefCell<SmoothScroller>>,
) -> Vec<Listener> {
    dom::query_all(document, SEL_ANCHOR)
        .into_iter()
        .map(|link| {
            let w = window.clone();
            let d = document.clone();
            let s = scroller.clone();
            let href = link.get_attribute("href").unwrap_or_default();
            Listener::active(&link, "click", move |ev: web::MouseEvent| {
                // A bare "#" is not a valid selector.
                if href.len() < 2 {
                    return;
                }
                let Some(target) = d.query_selector(&href).ok().flatten() else {
                    log::debug!("[scroll] anchor {href} has no target");
                    return;
                };
                ev.prevent_default();
                let top = dom::element_box(&target, dom::scroll_y(&w)).top;
                s.borrow_mut()
                    .scroll_to(top, ANCHOR_SCROLL_DURATION, Ease::ExpoOutClamped);
            })
        })
        .collect()
}

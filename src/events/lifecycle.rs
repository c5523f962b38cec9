use super::Listener;
use crate::dom;
use crate::frame::LifecycleSignals;
use std::rc::Rc;
use web_sys as web;

/// Every resize is recorded; the frame loop applies the last one once the
/// burst has gone quiet.
pub fn wire_resize(window: &web::Window, signals: Rc<LifecycleSignals>) -> Listener {
    let w = window.clone();
    Listener::new(window, "resize", move |ev: web::Event| {
        let (vw, vh) = dom::viewport_size(&w);
        signals
            .resize
            .borrow_mut()
            .request(ev.time_stamp(), vw.max(0.0) as u32, vh.max(0.0) as u32);
    })
}

pub fn wire_visibility(document: &web::Document, signals: Rc<LifecycleSignals>) -> Listener {
    let d = document.clone();
    Listener::new(document, "visibilitychange", move |_: web::Event| {
        signals.visibility.borrow_mut().set_hidden(d.hidden());
    })
}

pub fn wire_context_lost(canvas: &web::HtmlCanvasElement, signals: Rc<LifecycleSignals>) -> Listener {
    Listener::new(canvas, "webglcontextlost", move |_: web::Event| {
        signals.context_lost.set(true);
    })
}

pub mod lifecycle;
pub mod pointer;
pub mod scroll;

pub use lifecycle::{wire_context_lost, wire_resize, wire_visibility};
pub use pointer::{wire_button_hover, wire_card_tilt, wire_pointer};
pub use scroll::{wire_anchor_links, wire_native_scroll, wire_wheel};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A DOM event listener that unregisters itself when dropped.
pub struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    /// Passive listener; events that are not an `E` are ignored.
    pub fn new<E>(target: &web::EventTarget, kind: &'static str, handler: impl FnMut(E) + 'static) -> Self
    where
        E: JsCast + 'static,
    {
        Self::register(target, kind, true, handler)
    }

    /// Listener that may call `preventDefault`.
    pub fn active<E>(target: &web::EventTarget, kind: &'static str, handler: impl FnMut(E) + 'static) -> Self
    where
        E: JsCast + 'static,
    {
        Self::register(target, kind, false, handler)
    }

    fn register<E>(
        target: &web::EventTarget,
        kind: &'static str,
        passive: bool,
        mut handler: impl FnMut(E) + 'static,
    ) -> Self
    where
        E: JsCast + 'static,
    {
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            if let Ok(ev) = ev.dyn_into::<E>() {
                handler(ev);
            }
        }) as Box<dyn FnMut(web::Event)>);
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(passive);
        if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            closure.as_ref().unchecked_ref(),
            &opts,
        ) {
            log::warn!("[events] could not listen for {kind}: {e:?}");
        }
        Self {
            target: target.clone(),
            kind,
            closure,
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

/// Owns every listener the app registered; dropping it detaches them all.
#[derive(Default)]
pub struct ListenerSet {
    listeners: Vec<Listener>,
}

impl ListenerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, listener: Listener) {
        self.listeners.push(listener);
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl Extend<Listener> for ListenerSet {
    fn extend<I: IntoIterator<Item = Listener>>(&mut self, iter: I) {
        self.listeners.extend(iter);
    }
}

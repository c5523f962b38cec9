#![cfg(target_arch = "wasm32")]
use crate::core::constants::RESIZE_DEBOUNCE_MS;
use crate::core::clock::FrameClock;
use crate::core::input::PointerState;
use crate::core::quality::QualityFlags;
use crate::core::scene::SceneGraph;
use crate::core::scroll::{ScrollConfig, SmoothScroller};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod animate;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod perf;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("nova-glass starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Wires everything in a fixed order: quality flags first, then the scroller,
/// scene and renderer, then DOM animation and listeners, then the frame loop.
async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Capability probe, before any scene or animation state exists
    let probe = perf::probe_device(&window, &document);
    let flags = QualityFlags::detect(&probe);
    for class in flags.body_classes() {
        dom::add_body_class(&document, class);
    }
    log::info!(
        "[perf] reduced_motion={} low_end={} renderer={:?} cores={:?}",
        flags.reduced_motion,
        flags.low_end,
        probe.gpu_renderer,
        probe.logical_cores
    );

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Smooth scrolling; every change is mirrored onto the real window offset
    let scroller = Rc::new(RefCell::new(SmoothScroller::new(
        ScrollConfig::default(),
        dom::scroll_limit(&window, &document),
    )));
    {
        let mut s = scroller.borrow_mut();
        s.sync_native(dom::scroll_y(&window));
        let w = window.clone();
        s.subscribe(move |ev| w.scroll_to_with_x_and_y(0.0, ev.scroll as f64));
    }

    // Scene and GPU
    let (css_w, css_h) = dom::viewport_size(&window);
    let dpr = dom::device_pixel_ratio(&window);
    let mut rng = StdRng::from_entropy();
    let scene = SceneGraph::new(flags, css_w, css_h, dpr, &mut rng);
    log::info!(
        "[scene] particles={} orbs={} pixel_ratio={}",
        scene.particles.len(),
        scene.orbs.len(),
        scene.viewport.projection().pixel_ratio
    );
    dom::sync_canvas_backing_size(&canvas, &scene.viewport.projection());
    let gpu = frame::init_gpu(&canvas, &scene).await;
    match &gpu {
        Some(g) => log::info!("[gpu] renderer ready on {:?}", g.backend()),
        None => {
            log::warn!("[gpu] no renderer; page continues without the 3D background");
            dom::add_body_class(&document, constants::CLASS_NO_WEBGL);
        }
    }

    // DOM animation
    let animator = Rc::new(RefCell::new(animate::DomAnimator::new(
        &window, &document, flags,
    )));

    // Listeners
    let pointer = Rc::new(RefCell::new(PointerState::default()));
    let signals = Rc::new(frame::LifecycleSignals::new(RESIZE_DEBOUNCE_MS));
    let mut listeners = events::ListenerSet::new();
    listeners.extend(events::wire_pointer(&window, pointer.clone()));
    listeners.push(events::wire_wheel(&window, scroller.clone()));
    listeners.push(events::wire_native_scroll(&window, &document, scroller.clone()));
    listeners.extend(events::wire_anchor_links(&window, &document, &scroller));
    listeners.extend(events::wire_card_tilt(&animator));
    listeners.extend(events::wire_button_hover(&animator));
    listeners.push(events::wire_resize(&window, signals.clone()));
    listeners.push(events::wire_visibility(&document, signals.clone()));
    listeners.push(events::wire_context_lost(&canvas, signals.clone()));
    signals
        .visibility
        .borrow_mut()
        .set_hidden(document.hidden());
    log::info!("[events] {} listeners attached", listeners.len());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        window,
        document,
        canvas,
        clock: FrameClock::new(),
        signals,
        pointer,
        scroller,
        animator,
        scene,
        gpu,
        listeners,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}

use crate::animate::DomAnimator;
use crate::constants::CLASS_NO_WEBGL;
use crate::core::clock::{FrameClock, ResizeDebouncer, VisibilityLatch};
use crate::core::input::PointerState;
use crate::core::scene::SceneGraph;
use crate::core::scroll::SmoothScroller;
use crate::dom;
use crate::events::ListenerSet;
use crate::render;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// State written by lifecycle listeners and consumed at the next frame.
pub struct LifecycleSignals {
    pub resize: RefCell<ResizeDebouncer>,
    pub visibility: RefCell<VisibilityLatch>,
    pub context_lost: Cell<bool>,
}

impl LifecycleSignals {
    pub fn new(resize_quiet_ms: f64) -> Self {
        Self {
            resize: RefCell::new(ResizeDebouncer::new(resize_quiet_ms)),
            visibility: RefCell::new(VisibilityLatch::default()),
            context_lost: Cell::new(false),
        }
    }
}

pub struct FrameContext {
    pub window: web::Window,
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,

    pub clock: FrameClock,
    pub signals: Rc<LifecycleSignals>,
    pub pointer: Rc<RefCell<PointerState>>,
    pub scroller: Rc<RefCell<SmoothScroller>>,
    pub animator: Rc<RefCell<DomAnimator>>,

    pub scene: SceneGraph,
    pub gpu: Option<render::GpuState>,

    // Held for the lifetime of the page; dropping detaches every handler.
    pub listeners: ListenerSet,
}

impl FrameContext {
    /// One display frame: input, scroll, DOM animation, then the scene.
    pub fn frame(&mut self, now_ms: f64) {
        self.sync_visibility();
        let Some(dt) = self.clock.tick(now_ms) else {
            return;
        };

        let pending = self.signals.resize.borrow_mut().poll(now_ms);
        if let Some((w, h)) = pending {
            self.apply_resize(w as f32, h as f32);
        }

        self.pointer.borrow_mut().update(dt);

        // The document can grow after load; the limit is re-read every frame.
        // Listeners mirror the new offset onto the window.
        let limit = dom::scroll_limit(&self.window, &self.document);
        let scroll = {
            let mut scroller = self.scroller.borrow_mut();
            scroller.set_limit(limit);
            scroller.advance(dt);
            scroller.scroll()
        };

        {
            let mut animator = self.animator.borrow_mut();
            animator.on_scroll(scroll);
            animator.tick(dt);
        }

        self.draw(dt, scroll);
    }

    pub fn pause(&mut self) {
        self.clock.pause();
        self.animator.borrow_mut().pause();
        log::info!("[frame] paused after {} frames", self.clock.frames());
    }

    pub fn resume(&mut self) {
        self.clock.resume();
        self.animator.borrow_mut().resume();
        log::info!("[frame] resumed");
    }

    /// A latched show resumes even when no frame saw the page hidden.
    fn sync_visibility(&mut self) {
        let (hidden, shown_again) = {
            let mut v = self.signals.visibility.borrow_mut();
            (v.is_hidden(), v.take_shown_again())
        };
        if hidden {
            if !self.clock.is_paused() {
                self.pause();
            }
        } else if shown_again || self.clock.is_paused() {
            self.resume();
        }
    }

    fn draw(&mut self, dt: f32, scroll: f32) {
        if self.signals.context_lost.get() && self.gpu.is_some() {
            log::warn!("[gpu] context lost; keeping the static background");
            self.drop_renderer();
        }
        let Some(gpu) = &mut self.gpu else {
            return;
        };
        let pointer = self.pointer.borrow().smoothed();
        let uniforms = self.scene.advance(dt, pointer, scroll);
        match gpu.render(&uniforms) {
            Ok(()) => {}
            Err(e) if e.is_fatal() => {
                log::error!("[gpu] render error: {e}");
                self.drop_renderer();
            }
            Err(e) => log::warn!("[gpu] frame skipped: {e}"),
        }
    }

    fn drop_renderer(&mut self) {
        self.gpu = None;
        dom::add_body_class(&self.document, CLASS_NO_WEBGL);
    }

    fn apply_resize(&mut self, css_width: f32, css_height: f32) {
        let dpr = dom::device_pixel_ratio(&self.window);
        let projection = self.scene.resize(css_width, css_height, dpr);
        dom::sync_canvas_backing_size(&self.canvas, &projection);
        if let Some(gpu) = &mut self.gpu {
            gpu.resize_if_needed(projection.width_px, projection.height_px);
        }
        self.scroller
            .borrow_mut()
            .set_limit(dom::scroll_limit(&self.window, &self.document));
        self.animator.borrow_mut().refresh_bounds(&self.window);
        log::info!(
            "[frame] resized to {}x{} css, {}x{} px",
            css_width,
            css_height,
            projection.width_px,
            projection.height_px
        );
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement, scene: &SceneGraph) -> Option<render::GpuState> {
    match render::GpuState::new(canvas, scene).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("[gpu] init error: {e}");
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
        frame_ctx.borrow_mut().frame(now_ms);
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

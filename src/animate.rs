use crate::constants::*;
use crate::core::constants::*;
use crate::core::ease::Ease;
use crate::core::quality::QualityFlags;
use crate::core::timeline::{
    entrance_timeline, props, Animator, Prop, RevealId, ScrubId, TargetId,
};
use crate::core::trigger::{
    tilt_for_pointer, ClientRect, Edge, ScrollTrigger, ToggleActions, TriggerBounds,
    TriggerPoint,
};
use crate::dom;
use fnv::FnvHashMap;
use web_sys as web;

const CARD_START: TriggerPoint = TriggerPoint::new(Edge::Top, 0.85);
const CARD_END: TriggerPoint = TriggerPoint::new(Edge::Bottom, 0.20);
const GALLERY_START: TriggerPoint = TriggerPoint::new(Edge::Top, 0.80);
const GALLERY_END: TriggerPoint = TriggerPoint::new(Edge::Bottom, 0.20);
const PARALLAX_START: TriggerPoint = TriggerPoint::new(Edge::Top, 1.0);
const PARALLAX_END: TriggerPoint = TriggerPoint::new(Edge::Bottom, 0.0);

struct RevealBinding {
    target: TargetId,
    id: RevealId,
    trigger: ScrollTrigger,
    start: TriggerPoint,
    end: TriggerPoint,
}

struct ScrubTarget {
    target: TargetId,
    id: ScrubId,
}

/// Binds the platform-free `Animator` to page elements: owns the element
/// handles, translates scroll positions into trigger actions, and writes the
/// resulting styles back to the DOM.
pub struct DomAnimator {
    animator: Animator,
    elements: FnvHashMap<TargetId, web::HtmlElement>,
    next_id: u32,
    reveals: Vec<RevealBinding>,
    scrubs: Vec<ScrubTarget>,
    cards: Vec<(web::HtmlElement, TargetId)>,
    buttons: Vec<(web::HtmlElement, TargetId)>,
}

impl DomAnimator {
    pub fn new(window: &web::Window, document: &web::Document, flags: QualityFlags) -> Self {
        let mut this = Self {
            animator: Animator::new(flags.animation_time_scale()),
            elements: FnvHashMap::default(),
            next_id: 0,
            reveals: Vec::new(),
            scrubs: Vec::new(),
            cards: Vec::new(),
            buttons: Vec::new(),
        };
        this.setup_entrance(document);
        this.setup_reveals(document);
        this.setup_parallax(document);
        this.buttons = this.bind(document, SEL_BUTTON);
        // Hidden offsets must be on the page before trigger windows are measured.
        this.flush();
        this.refresh_bounds(window);
        this.on_scroll(dom::scroll_y(window));
        this.flush();
        log::info!(
            "[anim] targets={} reveals={} scrubs={} time_scale={}",
            this.elements.len(),
            this.reveals.len(),
            this.scrubs.len(),
            this.animator.time_scale()
        );
        this
    }

    /// One target per element, however many selectors match it.
    fn register(&mut self, el: web::HtmlElement) -> TargetId {
        if let Some(id) = self
            .elements
            .iter()
            .find_map(|(id, known)| (*known == el).then_some(*id))
        {
            return id;
        }
        let id = TargetId(self.next_id);
        self.next_id += 1;
        self.elements.insert(id, el);
        id
    }

    fn bind(&mut self, document: &web::Document, selector: &str) -> Vec<(web::HtmlElement, TargetId)> {
        let found = dom::query_all(document, selector);
        if found.is_empty() {
            log::debug!("[anim] no elements for {selector}; skipping");
        }
        found
            .into_iter()
            .map(|el| {
                let id = self.register(el.clone());
                (el, id)
            })
            .collect()
    }

    fn bind_first(&mut self, document: &web::Document, selector: &str) -> Option<TargetId> {
        match dom::query_one(document, selector) {
            Some(el) => Some(self.register(el)),
            None => {
                log::debug!("[anim] no element for {selector}; skipping");
                None
            }
        }
    }

    fn setup_entrance(&mut self, document: &web::Document) {
        let hero_hidden = [(Prop::Y, HERO_HIDDEN_Y), (Prop::Opacity, 0.0)];
        let badge = self.bind_first(document, SEL_HERO_BADGE);
        let headline = self.bind_first(document, SEL_HEADLINE);
        let subtitle = self.bind_first(document, SEL_SUBTITLE);
        let cta = self.bind_first(document, SEL_CTA_GROUP);
        for target in [badge, headline, subtitle, cta].into_iter().flatten() {
            self.animator.set(target, &hero_hidden);
        }
        self.animator
            .play_timeline(&entrance_timeline(badge, headline, subtitle, cta));

        if let Some(header) = self.bind_first(document, SEL_HEADER) {
            self.animator.from(
                header,
                &[(Prop::Y, HEADER_OFFSET_Y), (Prop::Opacity, 0.0)],
                HEADER_DURATION,
                HEADER_DELAY,
                Ease::Power3Out,
            );
        }
    }

    fn setup_reveals(&mut self, document: &web::Document) {
        let cards = self.bind(document, SEL_FEATURE_CARD);
        for (i, (_, target)) in cards.iter().enumerate() {
            let id = self.animator.add_reveal(
                *target,
                &[
                    (Prop::Y, CARD_HIDDEN_Y),
                    (Prop::Opacity, 0.0),
                    (Prop::RotationX, CARD_HIDDEN_ROTATION_X),
                ],
                &[(Prop::Y, 0.0), (Prop::Opacity, 1.0), (Prop::RotationX, 0.0)],
                CARD_REVEAL_DURATION,
                i as f32 * CARD_REVEAL_STAGGER,
                Ease::Power3Out,
            );
            self.push_reveal(*target, id, CARD_START, CARD_END);
        }
        self.cards = cards;

        for (_, target) in self.bind(document, SEL_GALLERY) {
            let id = self.animator.add_reveal(
                target,
                &[(Prop::Y, GALLERY_HIDDEN_Y), (Prop::Opacity, 0.0)],
                &[(Prop::Y, 0.0), (Prop::Opacity, 1.0)],
                GALLERY_REVEAL_DURATION,
                0.0,
                Ease::Power3Out,
            );
            self.push_reveal(target, id, GALLERY_START, GALLERY_END);
        }
    }

    fn push_reveal(&mut self, target: TargetId, id: RevealId, start: TriggerPoint, end: TriggerPoint) {
        let bounds = TriggerBounds { start: 0.0, end: 0.0 };
        self.reveals.push(RevealBinding {
            target,
            id,
            trigger: ScrollTrigger::new(bounds, ToggleActions::REVEAL),
            start,
            end,
        });
    }

    fn setup_parallax(&mut self, document: &web::Document) {
        for (_, target) in self.bind(document, SEL_LIQUID_GLASS) {
            let bounds = TriggerBounds { start: 0.0, end: 0.0 };
            let id = self
                .animator
                .add_scrub(target, Prop::Y, 0.0, PARALLAX_TRAVEL_Y, bounds, SCRUB_LAG_SEC);
            self.scrubs.push(ScrubTarget { target, id });
        }
    }

    /// Re-measure every trigger window against the current layout. Animated
    /// translations are subtracted so the layout position is what counts.
    pub fn refresh_bounds(&mut self, window: &web::Window) {
        let scroll = dom::scroll_y(window);
        let vh = dom::viewport_size(window).1;
        for r in &mut self.reveals {
            if let Some(el) = self.elements.get(&r.target) {
                let mut b = dom::element_box(el, scroll);
                b.top -= self.animator.style(r.target).y;
                r.trigger
                    .set_bounds(TriggerBounds::compute(r.start, r.end, b, vh));
            }
        }
        for s in &self.scrubs {
            if let Some(el) = self.elements.get(&s.target) {
                let mut b = dom::element_box(el, scroll);
                b.top -= self.animator.style(s.target).y;
                let bounds = TriggerBounds::compute(PARALLAX_START, PARALLAX_END, b, vh);
                self.animator.set_scrub_bounds(s.id, bounds);
            }
        }
    }

    /// Feed the latest scroll offset to triggers and scrubs.
    pub fn on_scroll(&mut self, scroll: f32) {
        for r in &mut self.reveals {
            if let Some(action) = r.trigger.update(scroll) {
                self.animator.apply_toggle(r.id, action);
            }
        }
        self.animator.scrub_to(scroll);
    }

    pub fn tick(&mut self, dt: f32) {
        self.animator.tick(dt);
        self.flush();
    }

    fn flush(&mut self) {
        for (target, style) in self.animator.drain_dirty() {
            if let Some(el) = self.elements.get(&target) {
                dom::apply_style(el, &style);
            }
        }
    }

    pub fn pause(&mut self) {
        self.animator.pause();
    }

    pub fn resume(&mut self) {
        self.animator.resume();
    }

    pub fn cards(&self) -> &[(web::HtmlElement, TargetId)] {
        &self.cards
    }

    pub fn buttons(&self) -> &[(web::HtmlElement, TargetId)] {
        &self.buttons
    }

    /// Tilt a card toward the pointer at client `(x, y)`.
    pub fn tilt(&mut self, target: TargetId, rect: ClientRect, x: f32, y: f32) {
        let (rx, ry) = tilt_for_pointer(rect, x, y);
        self.animator.to(
            target,
            props(&[(Prop::RotationX, rx), (Prop::RotationY, ry)]),
            HOVER_IN_DURATION,
            0.0,
            Ease::Power2Out,
        );
    }

    pub fn untilt(&mut self, target: TargetId) {
        self.animator.to(
            target,
            props(&[(Prop::RotationX, 0.0), (Prop::RotationY, 0.0)]),
            TILT_OUT_DURATION,
            0.0,
            Ease::Power2Out,
        );
    }

    pub fn hover_button(&mut self, target: TargetId, entered: bool) {
        let scale = if entered { BUTTON_HOVER_SCALE } else { 1.0 };
        self.animator.to(
            target,
            props(&[(Prop::Scale, scale)]),
            HOVER_IN_DURATION,
            0.0,
            Ease::Power2Out,
        );
    }
}

// Virtual smooth scrolling.
//
// Wheel input moves a target offset; the visible offset decays toward it each
// frame. Native scrolls (touch, keyboard, scrollbar drag) are adopted as-is.
// Programmatic `scroll_to` runs a fixed-duration eased animation instead of the
// decay. Every frame that changes the offset emits one `ScrollEvent`.

use super::constants::{
    REFERENCE_FPS, SCROLL_FRICTION, SCROLL_SNAP_PX, WHEEL_MULTIPLIER,
};
use super::ease::{frame_rate_alpha, lerp, Ease};
use super::events::{EventBus, SubscriptionId};
use super::input::sanitize_dt;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollConfig {
    pub wheel_multiplier: f32,
    /// Fraction of the remaining distance covered per 60 Hz frame.
    pub friction: f32,
    pub smooth_wheel: bool,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            wheel_multiplier: WHEEL_MULTIPLIER,
            friction: SCROLL_FRICTION,
            smooth_wheel: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
    Idle,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollEvent {
    pub scroll: f32,
    pub limit: f32,
    /// Pixels moved during the emitting frame.
    pub velocity: f32,
    pub direction: ScrollDirection,
    /// `scroll / limit`, 0 when the page cannot scroll.
    pub progress: f32,
}

#[derive(Clone, Copy, Debug)]
struct ScrollToAnimation {
    from: f32,
    to: f32,
    duration: f32,
    elapsed: f32,
    ease: Ease,
}

pub struct SmoothScroller {
    config: ScrollConfig,
    current: f32,
    target: f32,
    limit: f32,
    velocity: f32,
    direction: ScrollDirection,
    animation: Option<ScrollToAnimation>,
    listeners: EventBus<ScrollEvent>,
}

impl SmoothScroller {
    pub fn new(config: ScrollConfig, limit: f32) -> Self {
        Self {
            config,
            current: 0.0,
            target: 0.0,
            limit: sanitize_limit(limit),
            velocity: 0.0,
            direction: ScrollDirection::Idle,
            animation: None,
            listeners: EventBus::new(),
        }
    }

    pub fn scroll(&self) -> f32 {
        self.current
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn limit(&self) -> f32 {
        self.limit
    }

    /// True while the scroller is driving the offset itself; native scroll
    /// events seen during this time are echoes of our own writes.
    pub fn is_smoothing(&self) -> bool {
        self.animation.is_some() || (self.target - self.current).abs() > SCROLL_SNAP_PX
    }

    pub fn subscribe(&mut self, handler: impl FnMut(&ScrollEvent) + 'static) -> SubscriptionId {
        self.listeners.subscribe(handler)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    pub fn set_limit(&mut self, limit: f32) {
        self.limit = sanitize_limit(limit);
        self.target = self.target.clamp(0.0, self.limit);
        self.current = self.current.clamp(0.0, self.limit);
        if let Some(anim) = &mut self.animation {
            anim.to = anim.to.clamp(0.0, self.limit);
        }
    }

    /// Feed a wheel delta in pixels. Cancels any running `scroll_to`.
    pub fn on_wheel(&mut self, delta_y: f32) {
        if !delta_y.is_finite() {
            return;
        }
        self.animation = None;
        self.target = (self.target + delta_y * self.config.wheel_multiplier).clamp(0.0, self.limit);
        if !self.config.smooth_wheel {
            self.current = self.target;
        }
    }

    /// Adopt a scroll position produced outside the scroller.
    pub fn sync_native(&mut self, position: f32) {
        if !position.is_finite() {
            return;
        }
        let p = position.clamp(0.0, self.limit);
        self.animation = None;
        self.target = p;
        self.current = p;
    }

    pub fn scroll_to(&mut self, to: f32, duration: f32, ease: Ease) {
        if !to.is_finite() {
            return;
        }
        let to = to.clamp(0.0, self.limit);
        if !(duration.is_finite() && duration > 0.0) {
            self.animation = None;
            self.target = to;
            self.current = to;
            return;
        }
        self.animation = Some(ScrollToAnimation {
            from: self.current,
            to,
            duration,
            elapsed: 0.0,
            ease,
        });
        self.target = to;
    }

    /// Step one frame. Returns the emitted event when the offset moved.
    pub fn advance(&mut self, dt: f32) -> Option<ScrollEvent> {
        let dt = sanitize_dt(dt);
        let previous = self.current;

        if let Some(mut anim) = self.animation.take() {
            anim.elapsed += dt;
            let t = (anim.elapsed / anim.duration).min(1.0);
            self.current = lerp(anim.from, anim.to, anim.ease.apply(t));
            if t < 1.0 {
                self.animation = Some(anim);
            } else {
                self.current = anim.to;
            }
        } else {
            let alpha = frame_rate_alpha(self.config.friction, dt, REFERENCE_FPS);
            self.current += (self.target - self.current) * alpha;
            if (self.target - self.current).abs() <= SCROLL_SNAP_PX {
                self.current = self.target;
            }
        }

        self.velocity = self.current - previous;
        self.direction = if self.velocity > 0.0 {
            ScrollDirection::Down
        } else if self.velocity < 0.0 {
            ScrollDirection::Up
        } else {
            ScrollDirection::Idle
        };
        if self.velocity == 0.0 {
            return None;
        }
        let event = self.event();
        self.listeners.emit(&event);
        Some(event)
    }

    pub fn event(&self) -> ScrollEvent {
        ScrollEvent {
            scroll: self.current,
            limit: self.limit,
            velocity: self.velocity,
            direction: self.direction,
            progress: if self.limit > 0.0 {
                self.current / self.limit
            } else {
                0.0
            },
        }
    }
}

fn sanitize_limit(limit: f32) -> f32 {
    if limit.is_finite() {
        limit.max(0.0)
    } else {
        0.0
    }
}

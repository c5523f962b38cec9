// Scroll trigger geometry and the enter/leave state machine, plus the
// pointer-local tilt mapping used by hover effects.

use super::constants::TILT_MAX_DEG;

/// Which edge of the element a trigger point refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Top,
    Center,
    Bottom,
}

/// "element edge meets this fraction of the viewport height", e.g.
/// `top 85%` is `TriggerPoint::new(Edge::Top, 0.85)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerPoint {
    pub edge: Edge,
    pub viewport_fraction: f32,
}

impl TriggerPoint {
    pub const fn new(edge: Edge, viewport_fraction: f32) -> Self {
        Self {
            edge,
            viewport_fraction,
        }
    }

    /// Scroll offset at which this point is crossed.
    pub fn scroll_offset(&self, element: ElementBox, viewport_height: f32) -> f32 {
        let edge_y = match self.edge {
            Edge::Top => element.top,
            Edge::Center => element.top + element.height * 0.5,
            Edge::Bottom => element.top + element.height,
        };
        edge_y - self.viewport_fraction * viewport_height
    }
}

/// Element box in document coordinates (independent of the current scroll).
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ElementBox {
    pub top: f32,
    pub height: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerBounds {
    pub start: f32,
    pub end: f32,
}

impl TriggerBounds {
    pub fn compute(
        start: TriggerPoint,
        end: TriggerPoint,
        element: ElementBox,
        viewport_height: f32,
    ) -> Self {
        let s = start.scroll_offset(element, viewport_height);
        let e = end.scroll_offset(element, viewport_height);
        // A window that closes before it opens degenerates to a single point.
        Self {
            start: s,
            end: e.max(s),
        }
    }

    /// Linear progress through the window, clamped to \[0, 1\].
    pub fn progress(&self, scroll: f32) -> f32 {
        let span = self.end - self.start;
        if span <= f32::EPSILON {
            return if scroll >= self.start { 1.0 } else { 0.0 };
        }
        ((scroll - self.start) / span).clamp(0.0, 1.0)
    }

    pub fn zone(&self, scroll: f32) -> Zone {
        if scroll < self.start {
            Zone::Before
        } else if scroll <= self.end {
            Zone::Active
        } else {
            Zone::After
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Zone {
    Before,
    Active,
    After,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleAction {
    Play,
    Reverse,
    None,
}

/// What to do on each of the four boundary crossings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleActions {
    pub on_enter: ToggleAction,
    pub on_leave: ToggleAction,
    pub on_enter_back: ToggleAction,
    pub on_leave_back: ToggleAction,
}

impl ToggleActions {
    /// Play when the window opens, reverse only when scrolling back above it.
    pub const REVEAL: ToggleActions = ToggleActions {
        on_enter: ToggleAction::Play,
        on_leave: ToggleAction::None,
        on_enter_back: ToggleAction::None,
        on_leave_back: ToggleAction::Reverse,
    };
}

/// Tracks which zone the scroll position is in and reports the action for
/// each transition.
#[derive(Clone, Copy, Debug)]
pub struct ScrollTrigger {
    pub bounds: TriggerBounds,
    pub actions: ToggleActions,
    zone: Zone,
}

impl ScrollTrigger {
    /// Starts in `Before`; the first `update` fires the crossings needed to
    /// reach the current position.
    pub fn new(bounds: TriggerBounds, actions: ToggleActions) -> Self {
        Self {
            bounds,
            actions,
            zone: Zone::Before,
        }
    }

    pub fn zone(&self) -> Zone {
        self.zone
    }

    pub fn set_bounds(&mut self, bounds: TriggerBounds) {
        self.bounds = bounds;
    }

    /// Returns the resulting action when the zone changed. Jumping over the
    /// whole window fires both crossings; the later non-`None` one wins.
    pub fn update(&mut self, scroll: f32) -> Option<ToggleAction> {
        if !scroll.is_finite() {
            return None;
        }
        let next = self.bounds.zone(scroll);
        if next == self.zone {
            return None;
        }
        let a = &self.actions;
        let crossings: &[ToggleAction] = match (self.zone, next) {
            (Zone::Before, Zone::Active) => &[a.on_enter],
            (Zone::Active, Zone::After) => &[a.on_leave],
            (Zone::After, Zone::Active) => &[a.on_enter_back],
            (Zone::Active, Zone::Before) => &[a.on_leave_back],
            (Zone::Before, Zone::After) => &[a.on_enter, a.on_leave],
            (Zone::After, Zone::Before) => &[a.on_enter_back, a.on_leave_back],
            _ => &[],
        };
        let action = crossings
            .iter()
            .rev()
            .copied()
            .find(|c| *c != ToggleAction::None)
            .unwrap_or(ToggleAction::None);
        self.zone = next;
        Some(action)
    }
}

/// Element rectangle in client (viewport) coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ClientRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// Tilt in degrees `(rotation_x, rotation_y)` for a pointer at client
/// `(x, y)`: proportional to the offset from the element centre, normalized
/// by the element size.
pub fn tilt_for_pointer(rect: ClientRect, x: f32, y: f32) -> (f32, f32) {
    if !(rect.width > 0.0 && rect.height > 0.0) || !x.is_finite() || !y.is_finite() {
        return (0.0, 0.0);
    }
    let dx = x - rect.left - rect.width * 0.5;
    let dy = y - rect.top - rect.height * 0.5;
    let rotation_y = dx / rect.width * TILT_MAX_DEG;
    let rotation_x = -dy / rect.height * TILT_MAX_DEG;
    (rotation_x, rotation_y)
}

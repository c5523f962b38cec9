// Frame scheduling state: converts display timestamps into frame deltas with
// first-class pause/resume, and collapses bursts of resize requests.

use super::constants::MAX_FRAME_DT;

/// Turns monotonic millisecond timestamps (as handed to the animation frame
/// callback) into clamped per-frame deltas in seconds.
#[derive(Clone, Debug, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
    paused: bool,
    frames: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `None` while paused; otherwise the delta since the previous
    /// tick. The first tick (and the first after a resume) yields 0.
    pub fn tick(&mut self, now_ms: f64) -> Option<f32> {
        if self.paused {
            return None;
        }
        if !now_ms.is_finite() {
            return Some(0.0);
        }
        let dt = match self.last_ms {
            Some(last) if now_ms > last => ((now_ms - last) / 1000.0) as f32,
            _ => 0.0,
        };
        self.last_ms = Some(now_ms);
        self.frames += 1;
        Some(dt.min(MAX_FRAME_DT))
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resumes from the same state; the stall is not reported as elapsed time.
    pub fn resume(&mut self) {
        self.paused = false;
        self.last_ms = None;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

/// Page visibility as last reported by the browser. Animation frames stop
/// while the page is hidden, so a hide followed by a show can both happen
/// between two frames; the show is latched until the frame loop takes it.
#[derive(Clone, Copy, Debug, Default)]
pub struct VisibilityLatch {
    hidden: bool,
    shown_again: bool,
}

impl VisibilityLatch {
    pub fn set_hidden(&mut self, hidden: bool) {
        if self.hidden && !hidden {
            self.shown_again = true;
        }
        self.hidden = hidden;
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// True once after each hidden → visible transition.
    pub fn take_shown_again(&mut self) -> bool {
        std::mem::take(&mut self.shown_again)
    }
}

/// Trailing-edge debounce: only the last request of a burst is delivered, once
/// no new request arrived for `quiet_ms`.
#[derive(Clone, Debug)]
pub struct ResizeDebouncer {
    quiet_ms: f64,
    pending: Option<(u32, u32)>,
    last_request_ms: f64,
}

impl ResizeDebouncer {
    pub fn new(quiet_ms: f64) -> Self {
        Self {
            quiet_ms: quiet_ms.max(0.0),
            pending: None,
            last_request_ms: 0.0,
        }
    }

    pub fn request(&mut self, now_ms: f64, width: u32, height: u32) {
        self.pending = Some((width, height));
        self.last_request_ms = now_ms;
    }

    pub fn poll(&mut self, now_ms: f64) -> Option<(u32, u32)> {
        if now_ms - self.last_request_ms < self.quiet_ms {
            return None;
        }
        self.pending.take()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

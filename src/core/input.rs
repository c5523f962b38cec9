use super::constants::{MAX_FRAME_DT, POINTER_LERP, REFERENCE_FPS};
use super::ease::frame_rate_alpha;
use glam::Vec2;

/// Pointer position in normalized device coordinates (x right, y up, both in
/// \[-1, 1\]) plus an exponentially smoothed follower used by the scene.
#[derive(Clone, Copy, Debug)]
pub struct PointerState {
    raw: Vec2,
    smoothed: Vec2,
    follow: f32,
}

impl Default for PointerState {
    fn default() -> Self {
        Self::new(POINTER_LERP)
    }
}

impl PointerState {
    pub fn new(follow: f32) -> Self {
        let follow = if follow.is_finite() {
            follow.clamp(0.0, 0.999)
        } else {
            POINTER_LERP
        };
        Self {
            raw: Vec2::ZERO,
            smoothed: Vec2::ZERO,
            follow,
        }
    }

    pub fn raw(&self) -> Vec2 {
        self.raw
    }

    pub fn smoothed(&self) -> Vec2 {
        self.smoothed
    }

    /// Set the raw target in NDC. Non-finite components keep their previous
    /// value; finite ones are clamped into \[-1, 1\].
    pub fn set_raw(&mut self, x: f32, y: f32) {
        if x.is_finite() {
            self.raw.x = x.clamp(-1.0, 1.0);
        }
        if y.is_finite() {
            self.raw.y = y.clamp(-1.0, 1.0);
        }
    }

    /// Map a client-space pixel position (origin top-left) to NDC.
    pub fn set_raw_from_client(&mut self, client_x: f32, client_y: f32, width: f32, height: f32) {
        let (x, y) = client_to_ndc(client_x, client_y, width, height);
        self.set_raw(x, y);
    }

    /// Advance the follower by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        let dt = sanitize_dt(dt);
        let alpha = frame_rate_alpha(self.follow, dt, REFERENCE_FPS);
        self.smoothed += (self.raw - self.smoothed) * alpha;
    }

    /// Advance exactly one reference frame.
    pub fn step(&mut self) {
        self.update(1.0 / REFERENCE_FPS);
    }
}

/// Negative, NaN and infinite frame deltas collapse to zero; long stalls are
/// capped so the first frame after one does not jump.
#[inline]
pub fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt > 0.0 {
        dt.min(MAX_FRAME_DT)
    } else {
        0.0
    }
}

#[inline]
pub fn client_to_ndc(client_x: f32, client_y: f32, width: f32, height: f32) -> (f32, f32) {
    if !(width > 0.0 && height > 0.0) {
        return (f32::NAN, f32::NAN);
    }
    let x = (client_x / width) * 2.0 - 1.0;
    let y = -(client_y / height) * 2.0 + 1.0;
    (x, y)
}

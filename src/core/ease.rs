// Easing curves shared by the timeline animator and programmatic scrolling.

/// Easing curve applied to normalized progress `t` in \[0, 1\].
///
/// The `Power*` names follow the usual tween-library convention where
/// `Power2Out` is a cubic and `Power3Out` a quartic ease-out.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum Ease {
    #[default]
    Linear,
    Power2Out,
    Power3Out,
    /// Overshooting ease-out; the parameter is the overshoot amount.
    BackOut(f32),
    /// Exponential ease-out that reaches exactly 1 slightly before `t = 1`.
    ExpoOutClamped,
}

impl Ease {
    pub fn apply(&self, t: f32) -> f32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match *self {
            Ease::Linear => t,
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
            Ease::Power3Out => 1.0 - (1.0 - t).powi(4),
            Ease::BackOut(s) => {
                let u = t - 1.0;
                1.0 + (s + 1.0) * u * u * u + s * u * u
            }
            Ease::ExpoOutClamped => (1.001 - 2.0_f32.powf(-10.0 * t)).min(1.0),
        }
    }
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Convert a per-reference-frame follow factor into one for an arbitrary `dt`.
///
/// `1 - (1 - k)^(dt * fps)` equals `k` for a single reference frame and stays
/// inside \[0, 1) for any finite non-negative `dt`, so followers never overshoot.
#[inline]
pub fn frame_rate_alpha(k: f32, dt: f32, reference_fps: f32) -> f32 {
    if dt.is_nan() || dt <= 0.0 || !k.is_finite() {
        return 0.0;
    }
    let k = k.clamp(0.0, 0.999_999);
    1.0 - (1.0 - k).powf(dt * reference_fps)
}

// Host-side tests for easing curves and the frame-rate independent lerp factor.

#![allow(dead_code)]
mod ease {
    include!("../src/core/ease.rs");
}

use ease::*;

const ALL: [Ease; 5] = [
    Ease::Linear,
    Ease::Power2Out,
    Ease::Power3Out,
    Ease::BackOut(1.4),
    Ease::ExpoOutClamped,
];

#[test]
fn every_curve_starts_at_zero_and_ends_at_one() {
    for e in ALL {
        assert!(e.apply(0.0).abs() < 2e-3, "{e:?} at 0 = {}", e.apply(0.0));
        assert!((e.apply(1.0) - 1.0).abs() < 1e-6, "{e:?} at 1 = {}", e.apply(1.0));
    }
}

#[test]
fn out_of_range_progress_is_clamped() {
    for e in ALL {
        assert_eq!(e.apply(-3.0), e.apply(0.0));
        assert_eq!(e.apply(4.0), e.apply(1.0));
        assert_eq!(e.apply(f32::NAN), e.apply(0.0));
    }
}

#[test]
fn power_curves_match_their_polynomials() {
    let t = 0.3_f32;
    assert!((Ease::Power2Out.apply(t) - (1.0 - 0.7_f32.powi(3))).abs() < 1e-6);
    assert!((Ease::Power3Out.apply(t) - (1.0 - 0.7_f32.powi(4))).abs() < 1e-6);
    assert!(Ease::Power3Out.apply(t) > Ease::Power2Out.apply(t));
}

#[test]
fn back_out_overshoots_before_settling() {
    let peak = (1..100)
        .map(|i| Ease::BackOut(1.4).apply(i as f32 / 100.0))
        .fold(0.0_f32, f32::max);
    assert!(peak > 1.0);
}

#[test]
fn expo_clamp_reaches_one_early() {
    assert_eq!(Ease::ExpoOutClamped.apply(0.999), 1.0);
    assert!(Ease::ExpoOutClamped.apply(0.5) < 1.0);
}

#[test]
fn frame_rate_alpha_equals_k_for_one_reference_frame() {
    let a = frame_rate_alpha(0.05, 1.0 / 60.0, 60.0);
    assert!((a - 0.05).abs() < 1e-6);
    let two = frame_rate_alpha(0.05, 2.0 / 60.0, 60.0);
    assert!((two - (1.0 - 0.95_f32 * 0.95)).abs() < 1e-6);
}

#[test]
fn frame_rate_alpha_rejects_bad_input() {
    assert_eq!(frame_rate_alpha(0.05, -1.0, 60.0), 0.0);
    assert_eq!(frame_rate_alpha(0.05, f32::NAN, 60.0), 0.0);
    assert_eq!(frame_rate_alpha(f32::NAN, 0.016, 60.0), 0.0);
    assert!(frame_rate_alpha(0.5, 100.0, 60.0) <= 1.0);
}

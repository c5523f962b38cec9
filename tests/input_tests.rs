// Host-side tests for pointer smoothing and frame-delta sanitizing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod ease {
    include!("../src/core/ease.rs");
}
mod input {
    include!("../src/core/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn smoothed_pointer_converges_monotonically_without_overshoot() {
    let mut p = PointerState::default();
    p.set_raw(1.0, -1.0);
    let mut prev = p.smoothed();
    for _ in 0..600 {
        p.step();
        let s = p.smoothed();
        assert!(s.x >= prev.x && s.x <= 1.0, "x went {} -> {}", prev.x, s.x);
        assert!(s.y <= prev.y && s.y >= -1.0, "y went {} -> {}", prev.y, s.y);
        prev = s;
    }
    assert!((prev - Vec2::new(1.0, -1.0)).length() < 1e-3);
}

#[test]
fn hundred_frames_reach_within_one_percent() {
    let mut p = PointerState::new(0.05);
    p.set_raw(1.0, 1.0);
    for _ in 0..100 {
        p.step();
    }
    let s = p.smoothed();
    assert!((1.0 - s.x).abs() < 0.01, "x = {}", s.x);
    assert!((1.0 - s.y).abs() < 0.01, "y = {}", s.y);
}

#[test]
fn smoothing_is_frame_rate_independent() {
    let mut a = PointerState::default();
    let mut b = PointerState::default();
    a.set_raw(0.8, 0.4);
    b.set_raw(0.8, 0.4);
    for _ in 0..60 {
        a.update(1.0 / 60.0);
    }
    for _ in 0..30 {
        b.update(1.0 / 30.0);
    }
    assert!((a.smoothed() - b.smoothed()).length() < 1e-4);
}

#[test]
fn malformed_input_keeps_last_good_value() {
    let mut p = PointerState::default();
    p.set_raw(0.25, -0.5);
    p.set_raw(f32::NAN, f32::INFINITY);
    assert_eq!(p.raw(), Vec2::new(0.25, -0.5));

    p.set_raw(7.0, -3.0);
    assert_eq!(p.raw(), Vec2::new(1.0, -1.0));
}

#[test]
fn bad_frame_deltas_do_not_move_the_follower() {
    let mut p = PointerState::default();
    p.set_raw(1.0, 1.0);
    p.update(-0.5);
    p.update(f32::NAN);
    p.update(0.0);
    assert_eq!(p.smoothed(), Vec2::ZERO);
}

#[test]
fn sanitize_dt_caps_and_zeroes() {
    assert_eq!(sanitize_dt(-1.0), 0.0);
    assert_eq!(sanitize_dt(f32::NAN), 0.0);
    assert_eq!(sanitize_dt(f32::INFINITY), 0.0);
    assert_eq!(sanitize_dt(10.0), constants::MAX_FRAME_DT);
    assert_eq!(sanitize_dt(0.016), 0.016);
}

#[test]
fn client_coordinates_map_to_ndc() {
    let (x, y) = client_to_ndc(400.0, 300.0, 800.0, 600.0);
    assert!(x.abs() < 1e-6 && y.abs() < 1e-6);

    let (x, y) = client_to_ndc(0.0, 0.0, 800.0, 600.0);
    assert_eq!((x, y), (-1.0, 1.0));

    let (x, y) = client_to_ndc(800.0, 600.0, 800.0, 600.0);
    assert_eq!((x, y), (1.0, -1.0));

    let (x, y) = client_to_ndc(10.0, 10.0, 0.0, 600.0);
    assert!(x.is_nan() && y.is_nan());
}

#[test]
fn zero_sized_viewport_leaves_pointer_alone() {
    let mut p = PointerState::default();
    p.set_raw_from_client(600.0, 150.0, 800.0, 600.0);
    let before = p.raw();
    p.set_raw_from_client(10.0, 10.0, 0.0, 0.0);
    assert_eq!(p.raw(), before);
    assert!((before - Vec2::new(0.5, 0.5)).length() < 1e-6);
}

// Host-side tests for the virtual smooth scroller.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod ease {
    include!("../src/core/ease.rs");
}
mod events {
    include!("../src/core/events.rs");
}
mod input {
    include!("../src/core/input.rs");
}
mod scroll {
    include!("../src/core/scroll.rs");
}

use ease::Ease;
use scroll::*;
use std::cell::Cell;
use std::rc::Rc;

const FRAME: f32 = 1.0 / 60.0;

fn settle(s: &mut SmoothScroller, frames: usize) {
    for _ in 0..frames {
        s.advance(FRAME);
    }
}

#[test]
fn wheel_target_is_clamped_to_the_document() {
    let mut s = SmoothScroller::new(ScrollConfig::default(), 1000.0);
    s.on_wheel(5000.0);
    assert_eq!(s.target(), 1000.0);
    s.on_wheel(-1.0e6);
    assert_eq!(s.target(), 0.0);
    s.on_wheel(f32::NAN);
    assert_eq!(s.target(), 0.0);
}

#[test]
fn wheel_delta_is_scaled_by_the_multiplier() {
    let mut s = SmoothScroller::new(ScrollConfig::default(), 10_000.0);
    s.on_wheel(100.0);
    assert!((s.target() - 80.0).abs() < 1e-4);
    // Smoothing: nothing moves until a frame runs.
    assert_eq!(s.scroll(), 0.0);
}

#[test]
fn offset_decays_toward_target_and_snaps() {
    let mut s = SmoothScroller::new(ScrollConfig::default(), 10_000.0);
    s.on_wheel(1000.0);
    let first = s.advance(FRAME).map(|e| e.scroll).unwrap_or(0.0);
    assert!((first - 80.0).abs() < 0.01, "first frame moved {first}");

    let mut prev = first;
    for _ in 0..200 {
        s.advance(FRAME);
        assert!(s.scroll() >= prev && s.scroll() <= 800.0);
        prev = s.scroll();
    }
    assert_eq!(s.scroll(), 800.0);
    assert!(!s.is_smoothing());
    assert!(s.advance(FRAME).is_none());
}

#[test]
fn unsmoothed_wheel_applies_immediately() {
    let config = ScrollConfig {
        smooth_wheel: false,
        ..ScrollConfig::default()
    };
    let mut s = SmoothScroller::new(config, 1000.0);
    s.on_wheel(100.0);
    assert!((s.scroll() - 80.0).abs() < 1e-4);
}

#[test]
fn scroll_events_reach_subscribers_until_unsubscribed() {
    let hits = Rc::new(Cell::new(0));
    let mut s = SmoothScroller::new(ScrollConfig::default(), 5000.0);
    let h = hits.clone();
    let id = s.subscribe(move |ev| {
        assert!(ev.velocity > 0.0);
        assert_eq!(ev.direction, ScrollDirection::Down);
        h.set(h.get() + 1);
    });
    s.on_wheel(500.0);
    s.advance(FRAME);
    s.advance(FRAME);
    assert_eq!(hits.get(), 2);

    assert!(s.unsubscribe(id));
    s.advance(FRAME);
    assert_eq!(hits.get(), 2);
}

#[test]
fn scroll_to_lands_exactly_after_its_duration() {
    let mut s = SmoothScroller::new(ScrollConfig::default(), 2000.0);
    s.scroll_to(1234.0, 1.5, Ease::ExpoOutClamped);
    assert!(s.is_smoothing());
    settle(&mut s, 45);
    assert!(s.scroll() > 0.0 && s.scroll() < 1234.0);
    settle(&mut s, 60);
    assert_eq!(s.scroll(), 1234.0);
    assert!(!s.is_smoothing());
}

#[test]
fn scroll_to_with_no_duration_jumps() {
    let mut s = SmoothScroller::new(ScrollConfig::default(), 2000.0);
    s.scroll_to(600.0, 0.0, Ease::Linear);
    assert_eq!(s.scroll(), 600.0);
    s.scroll_to(9000.0, f32::NAN, Ease::Linear);
    assert_eq!(s.scroll(), 2000.0);
}

#[test]
fn wheel_cancels_a_running_scroll_to() {
    let mut s = SmoothScroller::new(ScrollConfig::default(), 2000.0);
    s.scroll_to(500.0, 1.5, Ease::ExpoOutClamped);
    settle(&mut s, 10);
    s.on_wheel(100.0);
    assert!((s.target() - 580.0).abs() < 1e-3);
    settle(&mut s, 300);
    assert!((s.scroll() - 580.0).abs() < 1e-3);
}

#[test]
fn native_scroll_is_adopted_without_smoothing() {
    let mut s = SmoothScroller::new(ScrollConfig::default(), 2000.0);
    s.on_wheel(1000.0);
    s.sync_native(300.0);
    assert_eq!(s.scroll(), 300.0);
    assert_eq!(s.target(), 300.0);
    assert!(s.advance(FRAME).is_none());
}

#[test]
fn shrinking_the_limit_clamps_positions() {
    let mut s = SmoothScroller::new(ScrollConfig::default(), 2000.0);
    s.sync_native(1500.0);
    s.set_limit(1000.0);
    assert_eq!(s.scroll(), 1000.0);
    assert_eq!(s.target(), 1000.0);
    s.set_limit(-5.0);
    assert_eq!(s.limit(), 0.0);
    assert_eq!(s.event().progress, 0.0);
}

#[test]
fn event_reports_direction_and_progress() {
    let mut s = SmoothScroller::new(ScrollConfig::default(), 1000.0);
    s.sync_native(500.0);
    s.on_wheel(-100.0);
    let ev = s.advance(FRAME).map(|e| (e.direction, e.progress));
    let (dir, progress) = ev.unwrap_or((ScrollDirection::Idle, 0.0));
    assert_eq!(dir, ScrollDirection::Up);
    assert!(progress < 0.5 && progress > 0.4);
}

#[test]
fn growing_the_limit_keeps_native_offsets_and_frees_the_wheel() {
    let mut s = SmoothScroller::new(ScrollConfig::default(), 1000.0);
    for _ in 0..100 {
        s.on_wheel(100.0);
    }
    settle(&mut s, 300);
    assert_eq!(s.scroll(), 1000.0);

    // Late content makes the document taller.
    s.set_limit(2800.0);
    assert_eq!(s.scroll(), 1000.0);
    s.sync_native(2500.0);
    assert_eq!(s.scroll(), 2500.0);
    assert_eq!(s.target(), 2500.0);

    s.on_wheel(200.0);
    assert_eq!(s.target(), 2660.0);
    settle(&mut s, 300);
    assert_eq!(s.scroll(), 2660.0);
}

#[test]
fn repeating_the_same_limit_does_not_disturb_a_glide() {
    let mut s = SmoothScroller::new(ScrollConfig::default(), 2000.0);
    s.on_wheel(500.0);
    s.advance(FRAME);
    let mid = s.scroll();
    s.set_limit(2000.0);
    assert_eq!(s.scroll(), mid);
    assert_eq!(s.target(), 400.0);
    assert!(s.is_smoothing());
}

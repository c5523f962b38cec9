// Host-side tests for scroll trigger geometry and toggle state.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod trigger {
    include!("../src/core/trigger.rs");
}

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use trigger::*;

const CARD_START: TriggerPoint = TriggerPoint::new(Edge::Top, 0.85);
const CARD_END: TriggerPoint = TriggerPoint::new(Edge::Bottom, 0.20);

fn card_bounds() -> TriggerBounds {
    let el = ElementBox {
        top: 1000.0,
        height: 400.0,
    };
    TriggerBounds::compute(CARD_START, CARD_END, el, 800.0)
}

#[test]
fn trigger_offsets_come_from_element_edges_and_viewport() {
    let b = card_bounds();
    assert!((b.start - 320.0).abs() < 1e-3);
    assert!((b.end - 1240.0).abs() < 1e-3);

    let el = ElementBox {
        top: 500.0,
        height: 100.0,
    };
    let centre = TriggerPoint::new(Edge::Center, 0.5);
    assert!((centre.scroll_offset(el, 600.0) - 250.0).abs() < 1e-3);
}

#[test]
fn progress_is_clamped() {
    let b = card_bounds();
    assert_eq!(b.progress(0.0), 0.0);
    assert_eq!(b.progress(5000.0), 1.0);
    assert!((b.progress(780.0) - 0.5).abs() < 1e-6);
}

#[test]
fn inverted_window_collapses_to_a_point() {
    let b = TriggerBounds::compute(
        TriggerPoint::new(Edge::Top, 0.0),
        TriggerPoint::new(Edge::Top, 1.0),
        ElementBox {
            top: 1000.0,
            height: 0.0,
        },
        800.0,
    );
    assert_eq!(b.start, b.end);
    assert_eq!(b.progress(999.0), 0.0);
    assert_eq!(b.progress(1000.0), 1.0);
}

#[test]
fn reveal_fires_play_then_reverse_only_above_the_window() {
    let mut t = ScrollTrigger::new(card_bounds(), ToggleActions::REVEAL);
    assert_eq!(t.update(0.0), None);
    assert_eq!(t.update(400.0), Some(ToggleAction::Play));
    assert_eq!(t.update(2000.0), Some(ToggleAction::None));
    assert_eq!(t.update(900.0), Some(ToggleAction::None));
    assert_eq!(t.update(100.0), Some(ToggleAction::Reverse));
    assert_eq!(t.zone(), Zone::Before);
}

#[test]
fn jumping_over_the_window_still_plays() {
    let mut t = ScrollTrigger::new(card_bounds(), ToggleActions::REVEAL);
    assert_eq!(t.update(3000.0), Some(ToggleAction::Play));
    assert_eq!(t.update(0.0), Some(ToggleAction::Reverse));
}

#[test]
fn non_finite_scroll_is_ignored() {
    let mut t = ScrollTrigger::new(card_bounds(), ToggleActions::REVEAL);
    assert_eq!(t.update(f32::NAN), None);
    assert_eq!(t.zone(), Zone::Before);
}

#[test]
fn reveal_state_depends_only_on_the_current_position() {
    let bounds = card_bounds();
    let mut t = ScrollTrigger::new(bounds, ToggleActions::REVEAL);
    let mut revealed = false;
    let mut rng = StdRng::seed_from_u64(42);
    let mut scroll = 0.0f32;
    for _ in 0..2000 {
        scroll = (scroll + rng.gen_range(-300.0..300.0)).clamp(0.0, 3000.0);
        match t.update(scroll) {
            Some(ToggleAction::Play) => revealed = true,
            Some(ToggleAction::Reverse) => revealed = false,
            _ => {}
        }
        assert_eq!(revealed, scroll >= bounds.start, "scroll {scroll}");
    }
}

#[test]
fn tilt_is_zero_at_the_centre_and_max_at_the_edges() {
    let rect = ClientRect {
        left: 100.0,
        top: 50.0,
        width: 200.0,
        height: 100.0,
    };
    assert_eq!(tilt_for_pointer(rect, 200.0, 100.0), (0.0, 0.0));

    let (rx, ry) = tilt_for_pointer(rect, 300.0, 100.0);
    assert_eq!(rx, 0.0);
    assert!((ry - 5.0).abs() < 1e-5);

    let (rx, ry) = tilt_for_pointer(rect, 200.0, 50.0);
    assert!((rx - 5.0).abs() < 1e-5);
    assert_eq!(ry, 0.0);
}

#[test]
fn tilt_on_an_empty_rect_is_flat() {
    assert_eq!(tilt_for_pointer(ClientRect::default(), 10.0, 10.0), (0.0, 0.0));
    let rect = ClientRect {
        left: 0.0,
        top: 0.0,
        width: 10.0,
        height: 10.0,
    };
    assert_eq!(tilt_for_pointer(rect, f32::NAN, 1.0), (0.0, 0.0));
}

// Host-side tests for the startup quality heuristics.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod quality {
    include!("../src/core/quality.rs");
}

use quality::*;

fn probe(renderer: Option<&str>, cores: Option<u32>) -> DeviceProbe {
    DeviceProbe {
        prefers_reduced_motion: false,
        gpu_renderer: renderer.map(str::to_owned),
        logical_cores: cores,
    }
}

#[test]
fn missing_renderer_string_counts_as_low_end() {
    assert!(QualityFlags::detect(&probe(None, Some(16))).low_end);
    assert!(QualityFlags::detect(&probe(Some("   "), Some(16))).low_end);
}

#[test]
fn intel_hd_graphics_is_low_end() {
    assert!(is_low_end(Some("Intel(R) HD Graphics 620"), Some(8)));
    assert!(!is_low_end(Some("Intel(R) Iris(R) Xe Graphics"), Some(8)));
}

#[test]
fn few_cores_are_low_end() {
    assert!(is_low_end(Some("NVIDIA GeForce RTX 3070"), Some(2)));
    assert!(!is_low_end(Some("NVIDIA GeForce RTX 3070"), Some(4)));
}

#[test]
fn unknown_core_count_does_not_penalize_a_good_gpu() {
    assert!(!is_low_end(Some("Apple M2"), None));
}

#[test]
fn body_classes_reflect_the_flags() {
    let none = QualityFlags::default();
    assert_eq!(none.body_classes().count(), 0);

    let both = QualityFlags {
        reduced_motion: true,
        low_end: true,
    };
    let classes: Vec<_> = both.body_classes().collect();
    assert_eq!(classes, vec!["reduced-motion", "low-end-device"]);
}

#[test]
fn reduced_motion_slows_animation_instead_of_skipping_it() {
    let probe = DeviceProbe {
        prefers_reduced_motion: true,
        gpu_renderer: Some("AMD Radeon Pro 5500M".into()),
        logical_cores: Some(12),
    };
    let flags = QualityFlags::detect(&probe);
    assert!(flags.reduced_motion && !flags.low_end);
    assert_eq!(flags.animation_time_scale(), 0.01);
    assert_eq!(QualityFlags::default().animation_time_scale(), 1.0);
}

#[test]
fn low_end_caps_pixel_ratio_and_particles() {
    let low = QualityFlags {
        reduced_motion: false,
        low_end: true,
    };
    assert_eq!(low.max_pixel_ratio(), 1.0);
    assert_eq!(low.particle_count(2560.0), 1500);
    assert_eq!(QualityFlags::default().max_pixel_ratio(), 2.0);
}

#[test]
fn small_screen_breakpoint_is_exclusive() {
    assert!(is_small_screen(767.9));
    assert!(!is_small_screen(768.0));
}

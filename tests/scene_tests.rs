// Host-side tests for scene construction and per-frame advancement.
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
mod quality {
    include!("../src/core/quality.rs");
}
mod scene {
    include!("../src/core/scene.rs");
}

use constants::*;
use glam::{Vec2, Vec3};
use quality::QualityFlags;
use rand::rngs::StdRng;
use rand::SeedableRng;
use scene::*;

fn scene_at(width: f32, flags: QualityFlags) -> SceneGraph {
    let mut rng = StdRng::seed_from_u64(7);
    SceneGraph::new(flags, width, 800.0, 2.0, &mut rng)
}

#[test]
fn particle_count_follows_the_width_breakpoint() {
    let flags = QualityFlags::default();
    assert_eq!(scene_at(767.0, flags).particles.len(), 1500);
    assert_eq!(scene_at(768.0, flags).particles.len(), 3000);
    assert_eq!(scene_at(1920.0, flags).particles.len(), 3000);
}

#[test]
fn low_end_devices_get_the_small_field_and_no_hidpi() {
    let flags = QualityFlags {
        reduced_motion: false,
        low_end: true,
    };
    let s = scene_at(1920.0, flags);
    assert_eq!(s.particles.len(), SMALL_PARTICLE_COUNT);
    assert_eq!(s.orbs.len(), DESKTOP_ORB_COUNT);
    assert_eq!(s.viewport.projection().pixel_ratio, 1.0);
}

#[test]
fn narrow_viewports_get_fewer_orbs() {
    let s = scene_at(500.0, QualityFlags::default());
    assert_eq!(s.orbs.len(), SMALL_ORB_COUNT);
}

#[test]
fn particles_lie_in_the_shell_with_attributes_in_range() {
    let s = scene_at(1920.0, QualityFlags::default());
    for p in &s.particles.particles {
        let r = p.position.length();
        assert!((4.999..30.001).contains(&r), "radius {r}");
        assert!((0.01..0.04).contains(&p.size));
        assert!((0.2..1.0).contains(&p.opacity));
        assert!((0.1..0.4).contains(&p.speed));
        assert!(PALETTE.contains(&p.color));
    }
}

#[test]
fn shell_sampling_does_not_cluster_at_the_poles() {
    let mut rng = StdRng::seed_from_u64(99);
    let n = 20_000;
    let polar = (0..n)
        .map(|_| sample_shell_point(&mut rng, 1.0, 0.0))
        .filter(|p| p.z.abs() > 0.9)
        .count();
    // Uniform on the sphere: |cos(phi)| > 0.9 covers 10 % of the area.
    let share = polar as f32 / n as f32;
    assert!((share - 0.1).abs() < 0.02, "polar share {share}");
}

#[test]
fn orb_position_is_a_pure_function_of_time() {
    let mut rng = StdRng::seed_from_u64(3);
    let orb = Orb::random(0, &mut rng);
    let a = orb.position_at(12.5);
    let _ = orb.position_at(99.0);
    let b = orb.position_at(12.5);
    assert_eq!(a, b);

    let start = orb.position_at(0.0);
    let expected = orb.initial
        + Vec3::new(
            orb.phase.sin() * orb.amplitude,
            orb.phase.cos() * orb.amplitude * 0.5,
            0.0,
        );
    assert!((start - expected).length() < 1e-5);
}

#[test]
fn orb_parameters_follow_the_recipe() {
    let mut rng = StdRng::seed_from_u64(11);
    for i in 0..8 {
        let orb = Orb::random(i, &mut rng);
        assert!(orb.initial.x.abs() <= 10.0 && orb.initial.y.abs() <= 5.0 && orb.initial.z.abs() <= 7.5);
        assert!((0.3..0.8).contains(&orb.speed));
        assert!((1.0..3.0).contains(&orb.amplitude));
        assert_eq!(orb.color, ORB_COLORS[i % 2]);
        assert_eq!(orb.radius, ORB_RADIUS);
    }
}

#[test]
fn resizing_twice_equals_resizing_once() {
    let mut s = scene_at(1280.0, QualityFlags::default());
    let once = s.resize(1024.0, 640.0, 1.5);
    let twice = s.resize(1024.0, 640.0, 1.5);
    assert_eq!(once, twice);
    assert_eq!(once.width_px, 1536);
    assert_eq!(once.height_px, 960);
    assert!((once.aspect - 1.6).abs() < 1e-6);
}

#[test]
fn resize_caps_pixel_ratio_and_rejects_garbage() {
    let mut vp = Viewport::new(800.0, 600.0, 3.0, MAX_PIXEL_RATIO);
    assert_eq!(vp.projection().pixel_ratio, 2.0);
    assert_eq!(vp.projection().width_px, 1600);

    let p = vp.resize(f32::NAN, 0.0, f32::NAN);
    assert_eq!(p.width_px, 800);
    assert_eq!(p.height_px, 1);
    assert_eq!(p.pixel_ratio, 1.0);
}

#[test]
fn advance_moves_time_and_rotation_per_reference_frame() {
    let mut s = scene_at(1280.0, QualityFlags::default());
    let u = s.advance(1.0 / 60.0, Vec2::ZERO, 0.0);
    assert!((u.time - 0.01).abs() < 1e-6);
    assert!((s.particles.rotation_y - PARTICLE_ROTATION_PER_FRAME).abs() < 1e-7);
    assert_eq!(u.orb_positions.len(), s.orbs.len());
    assert_eq!(u.resolution, [2560.0, 1600.0]);
}

#[test]
fn advance_ignores_bad_deltas_and_pointer_values() {
    let mut s = scene_at(1280.0, QualityFlags::default());
    let u = s.advance(f32::NAN, Vec2::new(f32::NAN, 5.0), f32::INFINITY);
    assert_eq!(u.time, 0.0);
    assert_eq!(u.mouse, Vec2::new(0.0, 1.0));
    assert_eq!(u.scroll, 0.0);
}

#[test]
fn scroll_uniform_is_scaled() {
    let mut s = scene_at(1280.0, QualityFlags::default());
    let u = s.advance(1.0 / 60.0, Vec2::ZERO, 1500.0);
    assert!((u.scroll - 1.5).abs() < 1e-6);
}

#[test]
fn camera_drifts_toward_the_pointer_parallax() {
    let mut s = scene_at(1280.0, QualityFlags::default());
    for _ in 0..1000 {
        s.advance(1.0 / 60.0, Vec2::new(1.0, -1.0), 0.0);
    }
    let cam = s.camera.position;
    assert!((cam.x - 2.0).abs() < 1e-3, "x {}", cam.x);
    assert!((cam.y + 1.0).abs() < 1e-3, "y {}", cam.y);
    assert_eq!(cam.z, CAMERA_Z);
}

#[test]
fn wave_height_matches_its_components() {
    assert!(wave_height(Vec2::ZERO, 0.0, Vec2::ZERO).abs() < 1e-6);

    let p = Vec2::new(3.0, -2.0);
    let t = 1.3;
    let mouse = Vec2::new(0.2, 0.1);
    let d = p.distance(mouse * 10.0);
    let expected = (p.x * 0.3 + t).sin() * 0.5
        + (p.y * 0.2 + t * 0.7).sin() * 0.3
        + (d * 0.5 - t * 2.0).sin() * (-d * 0.1).exp() * 2.0;
    assert!((wave_height(p, t, mouse) - expected).abs() < 1e-5);
}

#[test]
fn plane_grid_has_expected_topology() {
    let (v, i) = plane_grid(WAVE_SIZE, WAVE_SEGMENTS);
    assert_eq!(v.len(), 51 * 51);
    assert_eq!(i.len(), 50 * 50 * 6);
    assert!(i.iter().all(|&ix| (ix as usize) < v.len()));
    assert_eq!(v[0], [-20.0, 20.0, 0.0, 1.0]);
    let last = v[v.len() - 1];
    assert!((last[0] - 20.0).abs() < 1e-4 && (last[1] + 20.0).abs() < 1e-4);
    assert_eq!([last[2], last[3]], [1.0, 0.0]);
}

#[test]
fn uv_sphere_is_unit_and_indexed_in_range() {
    let (v, i) = uv_sphere(ORB_SEGMENTS);
    assert_eq!(v.len(), 17 * 17);
    assert_eq!(i.len(), 16 * 16 * 6 - 16 * 6);
    assert!(v.iter().all(|p| (Vec3::from(*p).length() - 1.0).abs() < 1e-5));
    assert!(i.iter().all(|&ix| (ix as usize) < v.len()));
}

#[test]
fn wave_plane_sits_behind_the_field() {
    let plane = WavePlane::default();
    let centre = plane.model_matrix().transform_point3(Vec3::ZERO);
    assert_eq!(centre, Vec3::new(0.0, 0.0, WAVE_Z));
    // Local +Y (far edge of the grid) ends up pointing away from the camera.
    let far = plane.model_matrix().transform_point3(Vec3::new(0.0, 1.0, 0.0));
    assert!(far.z < WAVE_Z);
}

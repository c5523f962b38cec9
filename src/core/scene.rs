// Scene graph for the background: particle field, drifting orbs, wave plane,
// lights and camera. Geometry is built once; per frame only time-dependent
// values change, and those are produced as a `FrameUniforms` snapshot for the
// renderer.

use super::constants::*;
use super::ease::frame_rate_alpha;
use super::input::sanitize_dt;
use super::quality::QualityFlags;
use glam::{Mat4, Vec2, Vec3};
use rand::Rng;
use smallvec::SmallVec;
use std::f32::consts::{FRAC_PI_2, TAU};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    pub color: [f32; 3],
    pub size: f32,
    pub opacity: f32,
    pub speed: f32,
    pub phase: f32,
}

/// Uniform point on a spherical shell with radius in `[r_min, r_min + r_span)`.
///
/// Latitude comes from `acos(2u - 1)` so equal solid angles get equal
/// probability and the poles do not cluster.
pub fn sample_shell_point<R: Rng + ?Sized>(rng: &mut R, r_min: f32, r_span: f32) -> Vec3 {
    let radius = rng.gen::<f32>() * r_span + r_min;
    let theta = rng.gen::<f32>() * TAU;
    let phi = (rng.gen::<f32>() * 2.0 - 1.0).acos();
    Vec3::new(
        radius * phi.sin() * theta.cos(),
        radius * phi.sin() * theta.sin(),
        radius * phi.cos(),
    )
}

#[derive(Clone, Debug)]
pub struct ParticleField {
    pub particles: Vec<Particle>,
    pub rotation_y: f32,
}

impl ParticleField {
    pub fn generate<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Self {
        let particles = (0..count)
            .map(|_| {
                let position =
                    sample_shell_point(rng, PARTICLE_RADIUS_MIN, PARTICLE_RADIUS_SPAN);
                let color = PALETTE[rng.gen_range(0..PALETTE.len())];
                Particle {
                    position,
                    color,
                    size: rng.gen::<f32>() * PARTICLE_SIZE_SPAN + PARTICLE_SIZE_MIN,
                    opacity: rng.gen::<f32>() * PARTICLE_OPACITY_SPAN + PARTICLE_OPACITY_MIN,
                    speed: rng.gen::<f32>() * PARTICLE_SPEED_SPAN + PARTICLE_SPEED_MIN,
                    phase: rng.gen::<f32>() * TAU,
                }
            })
            .collect();
        Self {
            particles,
            rotation_y: 0.0,
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_y(self.rotation_y)
    }
}

/// Translucent sphere drifting along a closed-form Lissajous path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orb {
    pub initial: Vec3,
    pub speed: f32,
    pub amplitude: f32,
    pub phase: f32,
    pub color: [f32; 3],
    pub opacity: f32,
    pub radius: f32,
}

impl Orb {
    pub fn random<R: Rng + ?Sized>(index: usize, rng: &mut R) -> Self {
        let initial = Vec3::new(
            (rng.gen::<f32>() - 0.5) * ORB_SPAWN_EXTENT[0],
            (rng.gen::<f32>() - 0.5) * ORB_SPAWN_EXTENT[1],
            (rng.gen::<f32>() - 0.5) * ORB_SPAWN_EXTENT[2],
        );
        Self {
            initial,
            speed: rng.gen::<f32>() * ORB_SPEED_SPAN + ORB_SPEED_MIN,
            amplitude: rng.gen::<f32>() * ORB_AMPLITUDE_SPAN + ORB_AMPLITUDE_MIN,
            phase: rng.gen::<f32>() * TAU,
            color: ORB_COLORS[index % ORB_COLORS.len()],
            opacity: ORB_OPACITY,
            radius: ORB_RADIUS,
        }
    }

    /// Position at scene time `t`. Depends on nothing but `t` and the orb's
    /// fixed parameters.
    pub fn position_at(&self, t: f32) -> Vec3 {
        let arg = t * self.speed + self.phase;
        self.initial
            + Vec3::new(
                arg.sin() * self.amplitude,
                (t * self.speed * ORB_Y_SPEED_RATIO + self.phase).cos()
                    * self.amplitude
                    * ORB_Y_AMPLITUDE_RATIO,
                0.0,
            )
    }
}

/// Height of the wave plane (local z before the plane's rotation) at local
/// `(x, y)`. Two travelling sines plus a ripple centred under the pointer.
pub fn wave_height(p: Vec2, t: f32, mouse: Vec2) -> f32 {
    let mut z = (p.x * 0.3 + t).sin() * 0.5;
    z += (p.y * 0.2 + t * 0.7).sin() * 0.3;
    let d = p.distance(mouse * WAVE_MOUSE_SCALE);
    z += (d * 0.5 - t * 2.0).sin() * (-d * 0.1).exp() * 2.0;
    z
}

/// Flat grid in the local XY plane. Vertices are `[x, y, u, v]`, rows run top
/// to bottom, two counter-clockwise triangles per cell.
pub fn plane_grid(size: f32, segments: u32) -> (Vec<[f32; 4]>, Vec<u32>) {
    let segs = segments.max(1);
    let row = segs + 1;
    let half = size * 0.5;
    let step = size / segs as f32;
    let mut vertices = Vec::with_capacity((row * row) as usize);
    for iy in 0..row {
        let y = half - iy as f32 * step;
        for ix in 0..row {
            let x = ix as f32 * step - half;
            vertices.push([x, y, ix as f32 / segs as f32, 1.0 - iy as f32 / segs as f32]);
        }
    }
    let mut indices = Vec::with_capacity((segs * segs * 6) as usize);
    for iy in 0..segs {
        for ix in 0..segs {
            let a = ix + row * iy;
            let b = ix + row * (iy + 1);
            let c = (ix + 1) + row * (iy + 1);
            let d = (ix + 1) + row * iy;
            indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }
    (vertices, indices)
}

/// Unit UV sphere; positions double as normals.
pub fn uv_sphere(segments: u32) -> (Vec<[f32; 3]>, Vec<u32>) {
    let w = segments.max(3);
    let h = segments.max(2);
    let mut vertices = Vec::with_capacity(((w + 1) * (h + 1)) as usize);
    for iy in 0..=h {
        let v = iy as f32 / h as f32;
        let polar = v * std::f32::consts::PI;
        for ix in 0..=w {
            let u = ix as f32 / w as f32;
            let azimuth = u * TAU;
            vertices.push([
                -azimuth.cos() * polar.sin(),
                polar.cos(),
                azimuth.sin() * polar.sin(),
            ]);
        }
    }
    let mut indices = Vec::with_capacity((w * h * 6) as usize);
    let row = w + 1;
    for iy in 0..h {
        for ix in 0..w {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;
            if iy != 0 {
                indices.extend_from_slice(&[a, b, d]);
            }
            if iy != h - 1 {
                indices.extend_from_slice(&[b, c, d]);
            }
        }
    }
    (vertices, indices)
}

#[derive(Clone, Debug)]
pub struct WavePlane {
    pub vertices: Vec<[f32; 4]>,
    pub indices: Vec<u32>,
}

impl WavePlane {
    pub fn new() -> Self {
        let (vertices, indices) = plane_grid(WAVE_SIZE, WAVE_SEGMENTS);
        Self { vertices, indices }
    }

    /// Lies the plane down (normal toward +Y) and pushes it behind the field.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, 0.0, WAVE_Z)) * Mat4::from_rotation_x(-FRAC_PI_2)
    }
}

impl Default for WavePlane {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lights {
    /// rgb + intensity
    pub ambient: [f32; 4],
    pub point_position: Vec3,
    /// rgb + intensity
    pub point_color: [f32; 4],
    pub point_range: f32,
}

impl Default for Lights {
    fn default() -> Self {
        Self {
            ambient: AMBIENT_LIGHT,
            point_position: Vec3::from(POINT_LIGHT_POSITION),
            point_color: POINT_LIGHT_COLOR,
            point_range: POINT_LIGHT_RANGE,
        }
    }
}

/// Perspective camera that drifts toward a pointer-derived offset and always
/// aims at the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraRig {
    pub position: Vec3,
    pub target: Vec3,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }
}

impl CameraRig {
    pub fn drift(&mut self, pointer: Vec2, dt: f32) {
        let alpha = frame_rate_alpha(CAMERA_DRIFT, dt, REFERENCE_FPS);
        let goal = Vec2::new(pointer.x * CAMERA_PARALLAX[0], pointer.y * CAMERA_PARALLAX[1]);
        self.position.x += (goal.x - self.position.x) * alpha;
        self.position.y += (goal.y - self.position.y) * alpha;
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }
}

/// Projection parameters derived from the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    pub aspect: f32,
    pub width_px: u32,
    pub height_px: u32,
    pub pixel_ratio: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub css_width: f32,
    pub css_height: f32,
    pub max_pixel_ratio: f32,
    projection: Projection,
}

impl Viewport {
    pub fn new(css_width: f32, css_height: f32, device_pixel_ratio: f32, max_pixel_ratio: f32) -> Self {
        let mut vp = Self {
            css_width: 1.0,
            css_height: 1.0,
            max_pixel_ratio,
            projection: Projection {
                aspect: 1.0,
                width_px: 1,
                height_px: 1,
                pixel_ratio: 1.0,
            },
        };
        vp.resize(css_width, css_height, device_pixel_ratio);
        vp
    }

    /// Recompute projection parameters. Only depends on the arguments and the
    /// pixel-ratio cap, so repeating a resize is a no-op.
    pub fn resize(&mut self, css_width: f32, css_height: f32, device_pixel_ratio: f32) -> Projection {
        let w = if css_width.is_finite() { css_width.max(1.0) } else { self.css_width };
        let h = if css_height.is_finite() { css_height.max(1.0) } else { self.css_height };
        let dpr = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio.min(self.max_pixel_ratio)
        } else {
            1.0
        };
        self.css_width = w;
        self.css_height = h;
        self.projection = Projection {
            aspect: w / h,
            width_px: ((w * dpr) as u32).max(1),
            height_px: ((h * dpr) as u32).max(1),
            pixel_ratio: dpr,
        };
        self.projection
    }

    pub fn projection(&self) -> Projection {
        self.projection
    }

    pub fn projection_matrix(&self, camera: &CameraRig) -> Mat4 {
        Mat4::perspective_rh(
            camera.fovy_radians,
            self.projection.aspect,
            camera.znear,
            camera.zfar,
        )
    }
}

/// Everything the renderer needs for one frame.
#[derive(Clone, Debug)]
pub struct FrameUniforms {
    pub time: f32,
    pub mouse: Vec2,
    pub scroll: f32,
    pub view_proj: Mat4,
    pub camera_position: Vec3,
    pub particle_model: Mat4,
    pub wave_model: Mat4,
    pub orb_positions: SmallVec<[Vec3; 8]>,
    pub resolution: [f32; 2],
    pub pixel_ratio: f32,
}

pub struct SceneGraph {
    pub particles: ParticleField,
    pub orbs: Vec<Orb>,
    pub wave: WavePlane,
    pub lights: Lights,
    pub camera: CameraRig,
    pub viewport: Viewport,
    time: f32,
}

impl SceneGraph {
    pub fn new<R: Rng + ?Sized>(
        flags: QualityFlags,
        css_width: f32,
        css_height: f32,
        device_pixel_ratio: f32,
        rng: &mut R,
    ) -> Self {
        let particles = ParticleField::generate(flags.particle_count(css_width), rng);
        let orbs = (0..flags.orb_count(css_width))
            .map(|i| Orb::random(i, rng))
            .collect();
        Self {
            particles,
            orbs,
            wave: WavePlane::new(),
            lights: Lights::default(),
            camera: CameraRig::default(),
            viewport: Viewport::new(
                css_width,
                css_height,
                device_pixel_ratio,
                flags.max_pixel_ratio(),
            ),
            time: 0.0,
        }
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn resize(&mut self, css_width: f32, css_height: f32, device_pixel_ratio: f32) -> Projection {
        self.viewport.resize(css_width, css_height, device_pixel_ratio)
    }

    /// Advance one frame: move time forward, rotate the field, drift the
    /// camera, and snapshot every time-varying value.
    pub fn advance(&mut self, dt: f32, pointer: Vec2, scroll_px: f32) -> FrameUniforms {
        let dt = sanitize_dt(dt);
        let pointer = Vec2::new(
            finite_or_zero(pointer.x).clamp(-1.0, 1.0),
            finite_or_zero(pointer.y).clamp(-1.0, 1.0),
        );
        let frames = dt * REFERENCE_FPS;

        self.time += dt * TIME_RATE;
        self.particles.rotation_y =
            (self.particles.rotation_y + PARTICLE_ROTATION_PER_FRAME * frames).rem_euclid(TAU);
        self.camera.drift(pointer, dt);

        self.snapshot(pointer, scroll_px)
    }

    pub fn snapshot(&self, pointer: Vec2, scroll_px: f32) -> FrameUniforms {
        let view_proj = self.viewport.projection_matrix(&self.camera) * self.camera.view_matrix();
        let projection = self.viewport.projection();
        FrameUniforms {
            time: self.time,
            mouse: pointer,
            scroll: finite_or_zero(scroll_px) * PARTICLE_SCROLL_FACTOR,
            view_proj,
            camera_position: self.camera.position,
            particle_model: self.particles.model_matrix(),
            wave_model: self.wave.model_matrix(),
            orb_positions: self.orbs.iter().map(|o| o.position_at(self.time)).collect(),
            resolution: [projection.width_px as f32, projection.height_px as f32],
            pixel_ratio: projection.pixel_ratio,
        }
    }
}

#[inline]
fn finite_or_zero(v: f32) -> f32 {
    if v.is_finite() {
        v
    } else {
        0.0
    }
}

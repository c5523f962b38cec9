use crate::core::constants::CLEAR_COLOR;
use crate::core::scene::{FrameUniforms, Lights, SceneGraph};
use glam::Mat4;
use web_sys as web;

mod error;
mod helpers;
mod orbs;
mod particles;
mod wave;

pub use error::RenderError;
use orbs::{create_orb_resources, OrbResources};
use particles::{create_particle_resources, ParticleResources};
use wave::{create_wave_resources, WaveResources};

/// Mirrors `struct Scene` in the WGSL sources.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneUniforms {
    view_proj: [[f32; 4]; 4],
    particle_model: [[f32; 4]; 4],
    wave_model: [[f32; 4]; 4],
    resolution: [f32; 2],
    time: f32,
    scroll: f32,
    mouse: [f32; 2],
    pixel_ratio: f32,
    _pad0: f32,
    ambient: [f32; 4],
    light_pos: [f32; 4],
    light_color: [f32; 4],
    camera_pos: [f32; 4],
}

impl SceneUniforms {
    fn pack(frame: &FrameUniforms, lights: &Lights) -> Self {
        let m = |m: Mat4| m.to_cols_array_2d();
        Self {
            view_proj: m(frame.view_proj),
            particle_model: m(frame.particle_model),
            wave_model: m(frame.wave_model),
            resolution: frame.resolution,
            time: frame.time,
            scroll: frame.scroll,
            mouse: frame.mouse.to_array(),
            pixel_ratio: frame.pixel_ratio,
            _pad0: 0.0,
            ambient: lights.ambient,
            light_pos: lights.point_position.extend(lights.point_range).to_array(),
            light_color: lights.point_color,
            camera_pos: frame.camera_position.extend(1.0).to_array(),
        }
    }
}

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    backend: wgpu::Backend,

    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    wave: WaveResources,
    particles: ParticleResources,
    orbs: OrbResources,
    lights: Lights,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement, scene: &SceneGraph) -> Result<Self, RenderError> {
        let projection = scene.viewport.projection();
        let width = projection.width_px;
        let height = projection.height_px;

        // Falls back to WebGL2 when navigator.gpu exists but yields no adapter.
        let instance =
            wgpu::util::new_instance_with_webgpu_detection(&wgpu::InstanceDescriptor::default())
                .await;
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(RenderError::NoAdapter)?;
        let backend = adapter.get_info().backend;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: None,
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::downlevel_webgl2_defaults()
                        .using_resolution(adapter.limits()),
                    memory_hints: wgpu::MemoryHints::Performance,
                },
                None,
            )
            .await?;

        let caps = surface.get_capabilities(&adapter);
        // Palette values are authored for a plain (non-sRGB) canvas.
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .or_else(|| caps.formats.first().copied())
            .ok_or(RenderError::NoAdapter)?;
        let alpha_mode = caps
            .alpha_modes
            .iter()
            .copied()
            .find(|m| *m == wgpu::CompositeAlphaMode::PreMultiplied)
            .or_else(|| caps.alpha_modes.first().copied())
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let bgl = helpers::scene_bind_group_layout(&device);
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_uniforms"),
            size: std::mem::size_of::<SceneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });

        let wave = create_wave_resources(&device, &layout, format, &scene.wave);
        let particles = create_particle_resources(&device, &layout, format, &scene.particles);
        let orbs = create_orb_resources(&device, &layout, format, &scene.orbs);

        log::info!(
            "[gpu] backend={:?} format={:?} alpha={:?} size={}x{} particles={} orbs={}",
            backend,
            format,
            alpha_mode,
            width,
            height,
            particles.count,
            scene.orbs.len()
        );

        // Premultiplied, so a zero alpha clears to fully transparent.
        let a = CLEAR_COLOR[3] as f64;
        let clear_color = wgpu::Color {
            r: CLEAR_COLOR[0] as f64 * a,
            g: CLEAR_COLOR[1] as f64 * a,
            b: CLEAR_COLOR[2] as f64 * a,
            a,
        };

        Ok(Self {
            surface,
            device,
            queue,
            config,
            backend,
            uniform_buffer,
            bind_group,
            wave,
            particles,
            orbs,
            lights: scene.lights,
            width,
            height,
            clear_color,
        })
    }

    pub fn backend(&self) -> wgpu::Backend {
        self.backend
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.reconfigure();
        }
    }

    fn reconfigure(&mut self) {
        self.config.width = self.width;
        self.config.height = self.height;
        self.surface.configure(&self.device, &self.config);
    }

    /// Draw one frame: wave plane, then particles, then orbs, all additive.
    ///
    /// A lost or outdated surface is reconfigured and the frame skipped.
    pub fn render(&mut self, frame: &FrameUniforms) -> Result<(), RenderError> {
        let output = match self.surface.get_current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("[gpu] surface lost/outdated; reconfiguring");
                self.reconfigure();
                return Ok(());
            }
            Err(wgpu::SurfaceError::Timeout) => return Ok(()),
            Err(e) => return Err(e.into()),
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let uniforms = SceneUniforms::pack(frame, &self.lights);
        self.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
        self.orbs.update(&self.queue, &frame.orb_positions);

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.bind_group, &[]);
            self.wave.draw(&mut rpass);
            self.particles.draw(&mut rpass);
            self.orbs.draw(&mut rpass);
        }

        self.queue.submit(Some(encoder.finish()));
        output.present();
        Ok(())
    }
}

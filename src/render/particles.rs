use super::helpers::{make_scene_pipeline, PipelineSpec};
use crate::core::scene::ParticleField;
use wgpu::util::DeviceExt;

/// Six vertices (two triangles) per sprite, generated from the vertex index.
const VERTICES_PER_SPRITE: u32 = 6;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ParticleInstance {
    pub(crate) position: [f32; 3],
    pub(crate) size: f32,
    pub(crate) color: [f32; 3],
    pub(crate) opacity: f32,
    pub(crate) speed: f32,
    pub(crate) phase: f32,
    pub(crate) _pad: [f32; 2],
}

pub(crate) struct ParticleResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) instances: wgpu::Buffer,
    pub(crate) count: u32,
}

impl ParticleResources {
    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        if self.count == 0 {
            return;
        }
        rpass.set_pipeline(&self.pipeline);
        rpass.set_vertex_buffer(0, self.instances.slice(..));
        rpass.draw(0..VERTICES_PER_SPRITE, 0..self.count);
    }
}

pub(crate) fn create_particle_resources(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    format: wgpu::TextureFormat,
    field: &ParticleField,
) -> ParticleResources {
    let packed: Vec<ParticleInstance> = field
        .particles
        .iter()
        .map(|p| ParticleInstance {
            position: p.position.to_array(),
            size: p.size,
            color: p.color,
            opacity: p.opacity,
            speed: p.speed,
            phase: p.phase,
            _pad: [0.0; 2],
        })
        .collect();
    let count = packed.len() as u32;
    // Zero-sized buffers are invalid; keep one dummy instance around.
    let contents = if packed.is_empty() {
        vec![bytemuck::Zeroable::zeroed()]
    } else {
        packed
    };
    let instances = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("particle_instances"),
        contents: bytemuck::cast_slice(&contents),
        usage: wgpu::BufferUsages::VERTEX,
    });

    let buffers = [wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<ParticleInstance>() as u64,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &wgpu::vertex_attr_array![
            0 => Float32x3,
            1 => Float32,
            2 => Float32x3,
            3 => Float32,
            4 => Float32,
            5 => Float32
        ],
    }];
    let pipeline = make_scene_pipeline(
        device,
        layout,
        format,
        PipelineSpec {
            label: "particles",
            source: crate::core::PARTICLES_WGSL,
            buffers: &buffers,
            topology: wgpu::PrimitiveTopology::TriangleList,
        },
    );

    ParticleResources {
        pipeline,
        instances,
        count,
    }
}

use super::helpers::{make_scene_pipeline, PipelineSpec};
use crate::core::constants::ORB_SEGMENTS;
use crate::core::scene::{uv_sphere, Orb};
use glam::Vec3;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct OrbInstance {
    pub(crate) center: [f32; 3],
    pub(crate) radius: f32,
    pub(crate) color: [f32; 3],
    pub(crate) opacity: f32,
}

pub(crate) struct OrbResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) vertices: wgpu::Buffer,
    pub(crate) indices: wgpu::Buffer,
    pub(crate) index_count: u32,
    pub(crate) instances: wgpu::Buffer,
    // CPU copy of the instance data; only the centres change per frame.
    pub(crate) staged: Vec<OrbInstance>,
}

impl OrbResources {
    pub(crate) fn update(&mut self, queue: &wgpu::Queue, centers: &[Vec3]) {
        for (inst, c) in self.staged.iter_mut().zip(centers) {
            inst.center = c.to_array();
        }
        if !self.staged.is_empty() {
            queue.write_buffer(&self.instances, 0, bytemuck::cast_slice(&self.staged));
        }
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        if self.staged.is_empty() {
            return;
        }
        rpass.set_pipeline(&self.pipeline);
        rpass.set_vertex_buffer(0, self.vertices.slice(..));
        rpass.set_vertex_buffer(1, self.instances.slice(..));
        rpass.set_index_buffer(self.indices.slice(..), wgpu::IndexFormat::Uint32);
        rpass.draw_indexed(0..self.index_count, 0, 0..self.staged.len() as u32);
    }
}

pub(crate) fn create_orb_resources(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    format: wgpu::TextureFormat,
    orbs: &[Orb],
) -> OrbResources {
    let (sphere, sphere_indices) = uv_sphere(ORB_SEGMENTS);
    let vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("orb_vertices"),
        contents: bytemuck::cast_slice(&sphere),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let indices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("orb_indices"),
        contents: bytemuck::cast_slice(&sphere_indices),
        usage: wgpu::BufferUsages::INDEX,
    });

    let staged: Vec<OrbInstance> = orbs
        .iter()
        .map(|o| OrbInstance {
            center: o.initial.to_array(),
            radius: o.radius,
            color: o.color,
            opacity: o.opacity,
        })
        .collect();
    let instances = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("orb_instances"),
        size: (std::mem::size_of::<OrbInstance>() * staged.len().max(1)) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    let buffers = [
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<[f32; 3]>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &wgpu::vertex_attr_array![0 => Float32x3],
        },
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<OrbInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &wgpu::vertex_attr_array![
                1 => Float32x3,
                2 => Float32,
                3 => Float32x3,
                4 => Float32
            ],
        },
    ];
    let pipeline = make_scene_pipeline(
        device,
        layout,
        format,
        PipelineSpec {
            label: "orbs",
            source: crate::core::ORBS_WGSL,
            buffers: &buffers,
            topology: wgpu::PrimitiveTopology::TriangleList,
        },
    );

    OrbResources {
        pipeline,
        vertices,
        indices,
        index_count: sphere_indices.len() as u32,
        instances,
        staged,
    }
}

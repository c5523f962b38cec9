use super::helpers::{make_scene_pipeline, PipelineSpec};
use crate::core::scene::WavePlane;
use wgpu::util::DeviceExt;

pub(crate) struct WaveResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) vertices: wgpu::Buffer,
    pub(crate) indices: wgpu::Buffer,
    pub(crate) index_count: u32,
}

impl WaveResources {
    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_pipeline(&self.pipeline);
        rpass.set_vertex_buffer(0, self.vertices.slice(..));
        rpass.set_index_buffer(self.indices.slice(..), wgpu::IndexFormat::Uint32);
        rpass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}

pub(crate) fn create_wave_resources(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    format: wgpu::TextureFormat,
    plane: &WavePlane,
) -> WaveResources {
    let vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("wave_vertices"),
        contents: bytemuck::cast_slice(&plane.vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let indices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("wave_indices"),
        contents: bytemuck::cast_slice(&plane.indices),
        usage: wgpu::BufferUsages::INDEX,
    });

    // [x, y, u, v] per vertex; height is computed in the shader.
    let buffers = [wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<[f32; 4]>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x2],
    }];
    let pipeline = make_scene_pipeline(
        device,
        layout,
        format,
        PipelineSpec {
            label: "wave",
            source: crate::core::WAVE_WGSL,
            buffers: &buffers,
            topology: wgpu::PrimitiveTopology::TriangleList,
        },
    );

    WaveResources {
        pipeline,
        vertices,
        indices,
        index_count: plane.indices.len() as u32,
    }
}

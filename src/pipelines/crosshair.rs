//! Screen-space crosshair overlay pipeline.
//!
//! The crosshair lives in normalized device coordinates, so the pipeline
//! has no bind groups at all and the shader is a short inline passthrough.
//! It is drawn after the 3D scene with the depth test effectively off:
//! the render pass carries a depth attachment, so the pipeline names the
//! depth format but compares `Always` and never writes. Scoping the depth
//! behaviour to the pipeline means it cannot leak into the block pass.

use crate::{
    data_structures::{
        mesh::{CrosshairVertex, Vertex},
        texture::Texture,
    },
    pipelines::block::mk_render_pipeline,
};

const CROSSHAIR_SHADER: &str = "
@vertex
fn vs_main(@location(0) position: vec2<f32>) -> @builtin(position) vec4<f32> {
    return vec4<f32>(position, 0.0, 1.0);
}

@fragment
fn fs_main() -> @location(0) vec4<f32> {
    return vec4<f32>(1.0, 0.85, 0.1, 1.0);
}
";

pub fn mk_crosshair_pipeline(
    device: &wgpu::Device,
    config: &wgpu::SurfaceConfiguration,
) -> wgpu::RenderPipeline {
    let render_pipeline_layout =
        device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Crosshair Pipeline Layout"),
            bind_group_layouts: &[],
            push_constant_ranges: &[],
        });

    let shader = wgpu::ShaderModuleDescriptor {
        label: Some("Crosshair Shader"),
        source: wgpu::ShaderSource::Wgsl(CROSSHAIR_SHADER.into()),
    };

    mk_render_pipeline(
        device,
        &render_pipeline_layout,
        config.format,
        wgpu::PrimitiveTopology::LineList,
        Some(wgpu::DepthStencilState {
            format: Texture::DEPTH_FORMAT,
            depth_write_enabled: false,
            depth_compare: wgpu::CompareFunction::Always,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        &[CrosshairVertex::desc()],
        shader,
    )
}

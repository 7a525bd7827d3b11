//! Render pipeline definitions for the block and crosshair passes.

pub mod block;
pub mod crosshair;

/// The viewer's render pipelines, built once at startup.
#[derive(Debug)]
pub struct Pipelines {
    pub block: wgpu::RenderPipeline,
    pub crosshair: wgpu::RenderPipeline,
}

//! Vertex layouts for the block and crosshair pipelines.

/// Anything with a wgpu vertex buffer layout.
pub trait Vertex {
    fn desc() -> wgpu::VertexBufferLayout<'static>;
}

/// A block mesh vertex: position plus the flat colour of its face.
///
/// The colour is duplicated across all six vertices of a face. Interleaved
/// layout, stride 24 bytes, matching the block shader's locations 0 and 1.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BlockVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl Vertex for BlockVertex {
    fn desc() -> wgpu::VertexBufferLayout<'static> {
        use std::mem;
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<BlockVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
            ],
        }
    }
}

/// A crosshair vertex: a bare position in normalized device coordinates.
///
/// The overlay never moves with the camera, so no transform is attached.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CrosshairVertex {
    pub position: [f32; 2],
}

impl Vertex for CrosshairVertex {
    fn desc() -> wgpu::VertexBufferLayout<'static> {
        use std::mem;
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<CrosshairVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: wgpu::VertexFormat::Float32x2,
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem;

    #[test]
    fn block_vertex_stride_is_six_floats() {
        assert_eq!(mem::size_of::<BlockVertex>(), 24);
        let desc = BlockVertex::desc();
        assert_eq!(desc.array_stride, 24);
        assert_eq!(desc.attributes[1].offset, 12);
    }

    #[test]
    fn crosshair_vertex_stride_is_two_floats() {
        assert_eq!(mem::size_of::<CrosshairVertex>(), 8);
        assert_eq!(CrosshairVertex::desc().array_stride, 8);
    }
}

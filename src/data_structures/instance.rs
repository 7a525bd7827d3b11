//! Per-block placement data for GPU rendering.
//!
//! Each block carries a single instance holding its world translation. The
//! model matrix is packed into an instance-rate vertex buffer and read by
//! the block shader at locations 5 through 8.

use cgmath::Matrix4;

use crate::data_structures::mesh::Vertex;

/// World placement of one block. Blocks only ever translate.
#[derive(Clone, Copy, Debug)]
pub struct Instance {
    pub position: cgmath::Vector3<f32>,
}

impl Instance {
    pub fn to_matrix(&self) -> Matrix4<f32> {
        Matrix4::from_translation(self.position)
    }

    pub fn to_raw(&self) -> InstanceRaw {
        InstanceRaw {
            model: self.to_matrix().into(),
        }
    }
}

impl From<cgmath::Vector3<f32>> for Instance {
    fn from(position: cgmath::Vector3<f32>) -> Self {
        Instance { position }
    }
}

/// The raw instance is the actual data stored on the GPU: a column-major
/// 4x4 model matrix.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    model: [[f32; 4]; 4],
}

impl Vertex for InstanceRaw {
    fn desc() -> wgpu::VertexBufferLayout<'static> {
        use std::mem;
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<InstanceRaw>() as wgpu::BufferAddress,
            // The shader advances to the next entry per instance, not per vertex.
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[
                // A mat4 occupies four vec4 slots, one location each.
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 5,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 4]>() as wgpu::BufferAddress,
                    shader_location: 6,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 8]>() as wgpu::BufferAddress,
                    shader_location: 7,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 12]>() as wgpu::BufferAddress,
                    shader_location: 8,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_instance_is_a_pure_translation() {
        let instance = Instance::from(cgmath::Vector3::new(-10.0, 0.5, 3.0));
        let raw = instance.to_raw();
        // Column-major: translation lives in the last column.
        assert_eq!(raw.model[3], [-10.0, 0.5, 3.0, 1.0]);
        assert_eq!(raw.model[0], [1.0, 0.0, 0.0, 0.0]);
        assert_eq!(raw.model[1], [0.0, 1.0, 0.0, 0.0]);
        assert_eq!(raw.model[2], [0.0, 0.0, 1.0, 0.0]);
    }
}

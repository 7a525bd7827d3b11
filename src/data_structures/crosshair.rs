//! Screen-space crosshair geometry.

use wgpu::util::DeviceExt;

use crate::data_structures::mesh::CrosshairVertex;

/// Default half-extent of the crosshair in normalized device coordinates.
pub const CROSSHAIR_HALF_SIZE: f32 = 0.03;
/// The crosshair is always two independent line segments.
pub const CROSSHAIR_VERTEX_COUNT: u32 = 4;

/// Two centred line segments in NDC: one horizontal, one vertical.
///
/// Drawn as an independent line list, not a loop.
pub fn crosshair_vertices(half_size: f32) -> [CrosshairVertex; 4] {
    [
        CrosshairVertex {
            position: [-half_size, 0.0],
        },
        CrosshairVertex {
            position: [half_size, 0.0],
        },
        CrosshairVertex {
            position: [0.0, -half_size],
        },
        CrosshairVertex {
            position: [0.0, half_size],
        },
    ]
}

/// The crosshair's static vertex buffer.
#[derive(Debug)]
pub struct Crosshair {
    pub vertex_buffer: wgpu::Buffer,
}

impl Crosshair {
    pub fn new(device: &wgpu::Device, half_size: f32) -> Self {
        let vertices = crosshair_vertices(half_size);
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Crosshair Vertex Buffer"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        Self { vertex_buffer }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_four_vertices() {
        for size in [0.01, 0.03, 0.5] {
            assert_eq!(
                crosshair_vertices(size).len(),
                CROSSHAIR_VERTEX_COUNT as usize
            );
        }
    }

    #[test]
    fn each_vertex_lies_on_exactly_one_axis() {
        let size = 0.03;
        for vertex in crosshair_vertices(size) {
            let [x, y] = vertex.position;
            // One coordinate within the half-size, the other exactly zero.
            assert!((x == 0.0) != (y == 0.0));
            assert!(x.abs() <= size && y.abs() <= size);
        }
    }
}

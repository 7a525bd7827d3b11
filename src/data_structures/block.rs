//! Open-face box geometry: generation and GPU upload.
//!
//! A block is an axis-aligned box with a flat colour per face. Faces listed
//! as "open" are left out of the mesh entirely, which is how doorways and
//! corridor openings between adjacent blocks are modelled. No hole cutting
//! takes place, whole faces are simply omitted.

use cgmath::Vector3;
use wgpu::util::DeviceExt;

use crate::data_structures::{instance::Instance, mesh::BlockVertex};

pub const FACE_COUNT: usize = 6;
pub const VERTS_PER_FACE: usize = 6;

/// One of the six sides of a block.
///
/// Discriminants match the face order used by the mesh generator. The four
/// side faces take the wall colour, `Bottom` the floor colour and `Top` the
/// top colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Face {
    /// The -z side.
    Front = 0,
    /// The +z side.
    Back = 1,
    /// The -x side.
    Left = 2,
    /// The +x side.
    Right = 3,
    Bottom = 4,
    Top = 5,
}

impl Face {
    pub const ALL: [Face; FACE_COUNT] = [
        Face::Front,
        Face::Back,
        Face::Left,
        Face::Right,
        Face::Bottom,
        Face::Top,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}

/// The three colour roles a block's faces are painted with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlockColors {
    pub floor: [f32; 3],
    pub wall: [f32; 3],
    pub top: [f32; 3],
}

/// CPU-side description of a block, used for scene assembly and tests.
#[derive(Clone, Debug)]
pub struct BlockDesc {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    pub colors: BlockColors,
    pub open_faces: Vec<Face>,
    pub position: Vector3<f32>,
}

impl BlockDesc {
    /// Number of vertices the generator will emit: six per closed face.
    pub fn vertex_count(&self) -> u32 {
        let closed = Face::ALL
            .into_iter()
            .filter(|face| !self.open_faces.contains(face))
            .count();
        (closed * VERTS_PER_FACE) as u32
    }
}

/// Generate the interleaved vertex list for one box.
///
/// Each face is two pre-wound triangles tagged with the face's colour.
/// Faces in `open_faces` contribute nothing. Dimensions are not validated;
/// non-positive values yield degenerate but well-formed geometry.
pub fn block_vertices(
    width: f32,
    height: f32,
    depth: f32,
    colors: &BlockColors,
    open_faces: &[Face],
) -> Vec<BlockVertex> {
    let (x, y, z) = (width / 2.0, height / 2.0, depth / 2.0);

    // Triangulations listed in `Face::ALL` order.
    #[rustfmt::skip]
    let faces: [([[f32; 3]; VERTS_PER_FACE], [f32; 3]); FACE_COUNT] = [
        ([[-x, -y, -z], [x, -y, -z], [x, y, -z], [x, y, -z], [-x, y, -z], [-x, -y, -z]], colors.wall),
        ([[-x, -y,  z], [x, -y,  z], [x, y,  z], [x, y,  z], [-x, y,  z], [-x, -y,  z]], colors.wall),
        ([[-x, y,  z], [-x, y, -z], [-x, -y, -z], [-x, -y, -z], [-x, -y,  z], [-x, y,  z]], colors.wall),
        ([[ x, y,  z], [ x, y, -z], [ x, -y, -z], [ x, -y, -z], [ x, -y,  z], [ x, y,  z]], colors.wall),
        ([[-x, -y, -z], [x, -y, -z], [x, -y,  z], [x, -y,  z], [-x, -y,  z], [-x, -y, -z]], colors.floor),
        ([[-x, y, -z], [x, y, -z], [x, y,  z], [x, y,  z], [-x, y,  z], [-x, y, -z]], colors.top),
    ];

    Face::ALL
        .into_iter()
        .zip(faces)
        .filter(|(face, _)| !open_faces.contains(face))
        .flat_map(|(_, (positions, color))| {
            positions
                .into_iter()
                .map(move |position| BlockVertex { position, color })
        })
        .collect()
}

/// One block uploaded to the GPU: a static vertex buffer plus a one-entry
/// instance buffer holding the world translation. Blocks never share
/// buffers, even when their descriptions are identical.
#[derive(Debug)]
pub struct Block {
    pub vertex_buffer: wgpu::Buffer,
    pub instance_buffer: wgpu::Buffer,
    pub vertex_count: u32,
    pub position: Vector3<f32>,
}

impl Block {
    pub fn new(device: &wgpu::Device, desc: &BlockDesc) -> Self {
        let vertices = block_vertices(
            desc.width,
            desc.height,
            desc.depth,
            &desc.colors,
            &desc.open_faces,
        );
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Block Vertex Buffer"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let instance = Instance::from(desc.position);
        let instance_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Block Instance Buffer"),
            contents: bytemuck::cast_slice(&[instance.to_raw()]),
            usage: wgpu::BufferUsages::VERTEX,
        });

        Self {
            vertex_buffer,
            instance_buffer,
            vertex_count: vertices.len() as u32,
            position: desc.position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLORS: BlockColors = BlockColors {
        floor: [0.2, 0.2, 0.3],
        wall: [0.8, 0.1, 0.4],
        top: [0.3, 0.3, 0.4],
    };

    #[test]
    fn closed_box_has_36_vertices() {
        let vertices = block_vertices(2.0, 2.0, 2.0, &COLORS, &[]);
        assert_eq!(vertices.len(), 36);
    }

    #[test]
    fn every_open_face_drops_six_vertices() {
        for n in 0..=FACE_COUNT {
            let open = &Face::ALL[..n];
            let vertices = block_vertices(4.0, 1.0, 3.0, &COLORS, open);
            assert_eq!(vertices.len(), (FACE_COUNT - n) * VERTS_PER_FACE);
        }
    }

    #[test]
    fn open_mesh_equals_remaining_faces() {
        // A mesh with open faces must be exactly the concatenation of the
        // surviving faces, generated one at a time.
        let open = vec![Face::Front, Face::Bottom];
        let mesh = block_vertices(8.0, 1.0, 8.0, &COLORS, &open);

        let mut expected = Vec::new();
        for face in Face::ALL {
            if open.contains(&face) {
                continue;
            }
            let others: Vec<Face> = Face::ALL.into_iter().filter(|f| *f != face).collect();
            expected.extend(block_vertices(8.0, 1.0, 8.0, &COLORS, &others));
        }
        assert_eq!(mesh, expected);
    }

    #[test]
    fn unit_box_positions_span_the_half_extents() {
        let (w, h, d) = (8.0, 1.0, 6.0);
        let vertices = block_vertices(w, h, d, &COLORS, &[]);
        for axis in 0..3 {
            let half = [w, h, d][axis] / 2.0;
            let min = vertices
                .iter()
                .map(|v| v.position[axis])
                .fold(f32::INFINITY, f32::min);
            let max = vertices
                .iter()
                .map(|v| v.position[axis])
                .fold(f32::NEG_INFINITY, f32::max);
            assert_eq!(min, -half);
            assert_eq!(max, half);
        }
    }

    #[test]
    fn colour_roles_are_assigned_per_face() {
        let vertices = block_vertices(2.0, 2.0, 2.0, &COLORS, &[]);
        let count_with = |color: [f32; 3]| vertices.iter().filter(|v| v.color == color).count();
        assert_eq!(count_with(COLORS.wall), 4 * VERTS_PER_FACE);
        assert_eq!(count_with(COLORS.floor), VERTS_PER_FACE);
        assert_eq!(count_with(COLORS.top), VERTS_PER_FACE);
    }

    #[test]
    fn face_indices_match_the_generator_order() {
        assert_eq!(Face::Front.index(), 0);
        assert_eq!(Face::Back.index(), 1);
        assert_eq!(Face::Left.index(), 2);
        assert_eq!(Face::Right.index(), 3);
        assert_eq!(Face::Bottom.index(), 4);
        assert_eq!(Face::Top.index(), 5);
    }

    #[test]
    fn vertex_count_predictor_matches_generator() {
        let desc = BlockDesc {
            width: 20.0,
            height: 1.0,
            depth: 6.0,
            colors: COLORS,
            open_faces: vec![Face::Front, Face::Back],
            position: Vector3::new(0.0, 0.0, 0.0),
        };
        let vertices = block_vertices(
            desc.width,
            desc.height,
            desc.depth,
            &desc.colors,
            &desc.open_faces,
        );
        assert_eq!(desc.vertex_count(), vertices.len() as u32);
        assert_eq!(desc.vertex_count(), 24);
    }
}

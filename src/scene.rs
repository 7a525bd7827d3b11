//! Scene assembly: the fixed block list the viewer renders.

use cgmath::Vector3;

use crate::data_structures::block::{Block, BlockColors, BlockDesc, Face};

/// The demo layout: two square rooms joined by a corridor.
///
/// Each room drops the face that looks toward the centre, and the corridor
/// drops both of its long side walls, so the three slabs read as one
/// connected space when flying through.
pub fn demo_layout() -> Vec<BlockDesc> {
    let colors = BlockColors {
        floor: [0.2, 0.2, 0.3],
        wall: [0.8, 0.1, 0.4],
        top: [0.3, 0.3, 0.4],
    };

    vec![
        BlockDesc {
            width: 8.0,
            height: 1.0,
            depth: 8.0,
            colors,
            open_faces: vec![Face::Right],
            position: Vector3::new(-10.0, 0.0, 0.0),
        },
        BlockDesc {
            width: 8.0,
            height: 1.0,
            depth: 8.0,
            colors,
            open_faces: vec![Face::Left],
            position: Vector3::new(10.0, 0.0, 0.0),
        },
        BlockDesc {
            width: 20.0,
            height: 1.0,
            depth: 6.0,
            colors,
            open_faces: vec![Face::Front, Face::Back],
            position: Vector3::new(0.0, 0.0, 0.0),
        },
    ]
}

/// The uploaded scene: one GPU block per description, assembled once at
/// startup and immutable afterwards. Dropping the scene releases the
/// buffers, so teardown happens even on an early error exit.
#[derive(Debug)]
pub struct Scene {
    pub blocks: Vec<Block>,
}

impl Scene {
    pub fn new(device: &wgpu::Device, layout: &[BlockDesc]) -> Self {
        Self {
            blocks: layout.iter().map(|desc| Block::new(device, desc)).collect(),
        }
    }
}

//! Checks the demo scene layout against the geometry generator, without
//! touching the GPU.

use blockwalk::{
    data_structures::block::{Face, block_vertices},
    scene::demo_layout,
};
use cgmath::Vector3;

#[test]
fn demo_scene_has_two_rooms_and_a_corridor() {
    let layout = demo_layout();
    assert_eq!(layout.len(), 3);

    assert_eq!(layout[0].position, Vector3::new(-10.0, 0.0, 0.0));
    assert_eq!(layout[1].position, Vector3::new(10.0, 0.0, 0.0));
    assert_eq!(layout[2].position, Vector3::new(0.0, 0.0, 0.0));

    // Rooms open toward the corridor; the corridor opens both side walls.
    assert_eq!(layout[0].open_faces, vec![Face::Right]);
    assert_eq!(layout[1].open_faces, vec![Face::Left]);
    assert_eq!(layout[2].open_faces, vec![Face::Front, Face::Back]);
}

#[test]
fn demo_scene_vertex_counts() {
    let layout = demo_layout();
    let counts: Vec<u32> = layout.iter().map(|desc| desc.vertex_count()).collect();
    assert_eq!(counts, vec![30, 30, 24]);

    // The predictor and the generator agree.
    for desc in &layout {
        let vertices = block_vertices(
            desc.width,
            desc.height,
            desc.depth,
            &desc.colors,
            &desc.open_faces,
        );
        assert_eq!(vertices.len() as u32, desc.vertex_count());
    }
}

#[test]
fn demo_scene_shares_one_palette() {
    let layout = demo_layout();
    for desc in &layout {
        assert_eq!(desc.colors.floor, [0.2, 0.2, 0.3]);
        assert_eq!(desc.colors.wall, [0.8, 0.1, 0.4]);
        assert_eq!(desc.colors.top, [0.3, 0.3, 0.4]);
    }
}

//! blockwalk
//!
//! A minimal first-person viewer for small scenes made of coloured,
//! axis-aligned blocks. Blocks may leave individual faces open to form
//! doorways and corridors, and a fixed crosshair overlay is drawn on top
//! of the 3D scene.
//!
//! High-level modules
//! - `camera`: fly camera, controller input and uniforms for view/projection
//! - `context`: central GPU and window context that owns device/queue/pipelines
//! - `data_structures`: block meshes, instance placement and GPU textures
//! - `pipelines`: definitions for the block and crosshair render pipelines
//! - `scene`: the fixed block list assembled at startup
//! - `app`: the winit application handler and frame loop
//!

pub mod app;
pub mod camera;
pub mod context;
pub mod data_structures;
pub mod pipelines;
pub mod scene;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath::*;
pub use winit::event::WindowEvent;
pub use wgpu::*;

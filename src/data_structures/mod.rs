//! Viewer data structures: block meshes, instance placement and GPU textures.
//!
//! - `mesh` contains the vertex layouts shared by the pipelines
//! - `block` generates and uploads open-face box geometry
//! - `crosshair` is the fixed screen-space overlay geometry
//! - `instance` holds per-block placement data
//! - `texture` contains the depth texture wrapper

pub mod block;
pub mod crosshair;
pub mod instance;
pub mod mesh;
pub mod texture;

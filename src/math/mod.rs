// src/math/mod.rs
//! Planar and Cartesian vector helpers.

pub mod vec2d;
pub mod vec3d;

pub use vec3d::{to_geo_coord, to_vector3};

// src/coords/mod.rs
//! Hexagon lattice coordinates and the icosahedral projection.

pub mod face_ijk;
pub mod ijk;

pub use face_ijk::{select_face, unproject};
pub use ijk::to_hex_coord;

/// Odd resolutions use the Class III grid, rotated against Class II.
#[inline]
#[must_use]
pub(crate) fn is_class_iii(res: i32) -> bool {
  res % 2 == 1
}

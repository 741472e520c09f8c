// src/indexing/from_cell.rs

use crate::cell_index::{cell_to_face_ijk, decode, get_resolution, is_pentagon};
use crate::coords::face_ijk::{face_ijk_pent_to_cell_boundary, face_ijk_to_cell_boundary, face_ijk_to_geo};
use crate::error::Result;
use crate::types::{CellBoundary, CellIndex, GeoCoord};

/// Centre of a cell.
pub fn cell_to_geo(cell: CellIndex) -> Result<GeoCoord> {
  decode(cell)?;
  let fijk = cell_to_face_ijk(cell)?;
  Ok(face_ijk_to_geo(&fijk, get_resolution(cell)))
}

/// Boundary of a cell, counter-clockwise.
///
/// Class III cells crossing an icosahedron edge carry an extra vertex per
/// crossing, so hexagons have 6 to 8 vertices and pentagons 5 to 10.
pub fn cell_to_boundary(cell: CellIndex) -> Result<CellBoundary> {
  decode(cell)?;
  let fijk = cell_to_face_ijk(cell)?;
  let res = get_resolution(cell);
  Ok(if is_pentagon(cell) {
    face_ijk_pent_to_cell_boundary(&fijk, res)
  } else {
    face_ijk_to_cell_boundary(&fijk, res)
  })
}

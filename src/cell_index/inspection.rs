// src/cell_index/inspection.rs

use super::codec::{decode, is_valid_cell};
use super::{cell_to_face_ijk, get_base_cell, get_resolution, init_cell, leading_non_zero_digit};
use crate::base_cells::is_base_cell_pentagon;
use crate::constants::{MAX_RES, NUM_BASE_CELLS, NUM_PENTAGONS};
use crate::coords::face_ijk::vertex_faces;
use crate::coords::is_class_iii;
use crate::error::{GridError, Result};
use crate::types::{CellIndex, CellShape, Direction};

/// Base cell number of a cell. The field is returned as stored; validate
/// with [`is_valid_cell`] first for untrusted input.
#[must_use]
pub fn get_base_cell_number(h: CellIndex) -> i32 {
  get_base_cell(h)
}

/// Whether the cell's resolution has Class III orientation (odd resolutions).
#[must_use]
pub fn is_res_class_iii(h: CellIndex) -> bool {
  is_class_iii(get_resolution(h))
}

/// Whether `h` is one of the twelve pentagons at its resolution.
///
/// Invalid indexes are never pentagons.
#[must_use]
pub fn is_pentagon(h: CellIndex) -> bool {
  is_valid_cell(h) && is_base_cell_pentagon(get_base_cell(h)) && leading_non_zero_digit(h) == Direction::Center
}

/// Shape class of a valid cell.
pub fn cell_shape(h: CellIndex) -> Result<CellShape> {
  decode(h)?;
  Ok(if is_pentagon(h) {
    CellShape::Pentagon
  } else {
    CellShape::Hexagon
  })
}

/// Number of cells at `res`: `2 + 120 * 7^res`.
pub fn get_num_cells(res: i32) -> Result<i64> {
  if !(0..=MAX_RES).contains(&res) {
    return Err(GridError::InvalidResolution);
  }
  Ok(2 + 120 * 7_i64.pow(res as u32))
}

/// All 122 resolution 0 cells, in base cell order.
#[must_use]
pub fn get_res0_cells() -> Vec<CellIndex> {
  (0..NUM_BASE_CELLS)
    .map(|bc| init_cell(0, bc, Direction::Center))
    .collect()
}

/// The twelve pentagons at `res`, in base cell order.
pub fn get_pentagons(res: i32) -> Result<Vec<CellIndex>> {
  if !(0..=MAX_RES).contains(&res) {
    return Err(GridError::InvalidResolution);
  }
  let pentagons: Vec<CellIndex> = (0..NUM_BASE_CELLS)
    .filter(|&bc| is_base_cell_pentagon(bc))
    .map(|bc| init_cell(res, bc, Direction::Center))
    .collect();
  debug_assert_eq!(pentagons.len(), NUM_PENTAGONS as usize);
  Ok(pentagons)
}

/// Upper bound on the number of faces [`get_icosahedron_faces`] returns.
pub fn max_face_count(h: CellIndex) -> Result<usize> {
  Ok(match cell_shape(h)? {
    CellShape::Pentagon => 5,
    CellShape::Hexagon => 2,
  })
}

/// Icosahedron faces intersected by a cell, ascending.
pub fn get_icosahedron_faces(h: CellIndex) -> Result<Vec<i32>> {
  decode(h)?;
  let res = get_resolution(h);
  let pentagon = is_pentagon(h);

  // every vertex of a Class II pentagon lies on a face edge; its centre
  // child touches the same faces
  if pentagon && !is_class_iii(res) {
    return get_icosahedron_faces(init_cell(res + 1, get_base_cell(h), Direction::Center));
  }

  let fijk = cell_to_face_ijk(h)?;
  Ok(vertex_faces(&fijk, res, pentagon))
}

//! Bit layout of cell indexes and the conversions between cells and
//! positions on icosahedron faces.

pub mod codec;
pub mod inspection;
pub mod string_conv;

use crate::base_cells::{
  face_ijk_to_base_cell, face_ijk_to_base_cell_ccw_rot60, home_face_ijk, is_base_cell_pentagon, is_cw_offset,
};
use crate::constants::{
  BC_MASK, BC_OFFSET, CELL_MODE, DIGIT_MASK, HIGH_BIT_MASK, INDEX_INIT, MAX_RES, MODE_MASK, MODE_OFFSET,
  NUM_BASE_CELLS, PER_DIGIT_OFFSET, RESERVED_MASK, RESERVED_OFFSET, RES_MASK, RES_OFFSET,
};
use crate::coords::face_ijk::Overage;
use crate::coords::is_class_iii;
use crate::error::{GridError, Result};
use crate::types::{CellIndex, CoordIJK, Direction, FaceIJK};

pub use codec::{decode, encode, is_valid_cell, DecodedCell, Digits};
pub use inspection::{
  cell_shape, get_base_cell_number, get_icosahedron_faces, get_num_cells, get_pentagons, get_res0_cells, is_pentagon,
  is_res_class_iii, max_face_count,
};
pub use string_conv::{format_cell, parse_cell};

#[inline]
#[must_use]
pub const fn get_mode(h: CellIndex) -> u8 {
  ((h.0 & MODE_MASK) >> MODE_OFFSET) as u8
}

#[inline]
pub(crate) fn set_mode(h: &mut CellIndex, mode: u8) {
  h.0 = (h.0 & !MODE_MASK) | (u64::from(mode) << MODE_OFFSET);
}

/// Resolution stored in the index, `0..=15`.
#[inline]
#[must_use]
pub const fn get_resolution(h: CellIndex) -> i32 {
  ((h.0 & RES_MASK) >> RES_OFFSET) as i32
}

#[inline]
pub(crate) fn set_resolution(h: &mut CellIndex, res: i32) {
  h.0 = (h.0 & !RES_MASK) | (((res as u64) << RES_OFFSET) & RES_MASK);
}

/// Raw base cell field. Values above 121 only occur in malformed indexes.
#[inline]
#[must_use]
pub(crate) const fn get_base_cell(h: CellIndex) -> i32 {
  ((h.0 & BC_MASK) >> BC_OFFSET) as i32
}

#[inline]
pub(crate) fn set_base_cell(h: &mut CellIndex, base_cell: i32) {
  h.0 = (h.0 & !BC_MASK) | (((base_cell as u64) << BC_OFFSET) & BC_MASK);
}

#[inline]
const fn digit_offset(res: i32) -> u32 {
  (MAX_RES - res) as u32 * PER_DIGIT_OFFSET
}

/// Digit at resolution `res`, which must be in `1..=15`.
#[inline]
#[must_use]
pub fn get_index_digit(h: CellIndex, res: i32) -> Direction {
  Direction::from_bits(h.0 >> digit_offset(res))
}

#[inline]
pub(crate) fn set_index_digit(h: &mut CellIndex, res: i32, digit: Direction) {
  let offset = digit_offset(res);
  h.0 = (h.0 & !(DIGIT_MASK << offset)) | ((digit as u64) << offset);
}

#[inline]
#[must_use]
pub(crate) const fn get_reserved_bits(h: CellIndex) -> u8 {
  ((h.0 & RESERVED_MASK) >> RESERVED_OFFSET) as u8
}

#[inline]
#[must_use]
pub(crate) const fn get_high_bit(h: CellIndex) -> u8 {
  ((h.0 & HIGH_BIT_MASK) >> 63) as u8
}

/// A cell index at `res` on `base_cell` with every used digit set to `digit`.
#[must_use]
pub(crate) fn init_cell(res: i32, base_cell: i32, digit: Direction) -> CellIndex {
  let mut h = CellIndex(INDEX_INIT);
  set_mode(&mut h, CELL_MODE);
  set_resolution(&mut h, res);
  set_base_cell(&mut h, base_cell);
  for r in 1..=res {
    set_index_digit(&mut h, r, digit);
  }
  h
}

/// First digit that is not `Center`, or `Center` if there is none.
#[must_use]
pub(crate) fn leading_non_zero_digit(h: CellIndex) -> Direction {
  (1..=get_resolution(h))
    .map(|r| get_index_digit(h, r))
    .find(|&d| d != Direction::Center)
    .unwrap_or(Direction::Center)
}

fn map_digits(mut h: CellIndex, f: impl Fn(Direction) -> Direction) -> CellIndex {
  for r in 1..=get_resolution(h) {
    let digit = f(get_index_digit(h, r));
    set_index_digit(&mut h, r, digit);
  }
  h
}

/// Rotates every digit 60 degrees counter-clockwise.
#[must_use]
pub(crate) fn rotate60_ccw(h: CellIndex) -> CellIndex {
  map_digits(h, Direction::rotate60_ccw)
}

/// Rotates every digit 60 degrees clockwise.
#[must_use]
pub(crate) fn rotate60_cw(h: CellIndex) -> CellIndex {
  map_digits(h, Direction::rotate60_cw)
}

/// Rotates 60 degrees counter-clockwise about a pentagon centre, stepping
/// over the deleted K subsequence.
#[must_use]
pub(crate) fn rotate_pent60_ccw(h: CellIndex) -> CellIndex {
  let h = rotate60_ccw(h);
  if leading_non_zero_digit(h) == Direction::KAxes {
    rotate60_ccw(h)
  } else {
    h
  }
}

/// Rotates 60 degrees clockwise about a pentagon centre, stepping over the
/// deleted K subsequence.
#[must_use]
pub(crate) fn rotate_pent60_cw(h: CellIndex) -> CellIndex {
  let h = rotate60_cw(h);
  if leading_non_zero_digit(h) == Direction::KAxes {
    rotate60_cw(h)
  } else {
    h
  }
}

/// Encodes the cell at a face position.
///
/// Fails with `DomainError` when the position does not lie on the
/// resolution 0 face triangle once brought up to base cell scale.
pub(crate) fn face_ijk_to_cell(fijk: &FaceIJK, res: i32) -> Result<CellIndex> {
  let mut h = init_cell(res, 0, Direction::Center);

  let mut bc_fijk = *fijk;
  for r in (1..=res).rev() {
    let last = bc_fijk.coord;
    let last_center = if is_class_iii(r) {
      bc_fijk.coord = last.up_ap7();
      bc_fijk.coord.down_ap7()
    } else {
      bc_fijk.coord = last.up_ap7r();
      bc_fijk.coord.down_ap7r()
    };
    let digit = (last - last_center).to_unit_digit();
    if digit == Direction::InvalidDigit {
      return Err(GridError::DomainError);
    }
    set_index_digit(&mut h, r, digit);
  }

  let base_cell = face_ijk_to_base_cell(&bc_fijk).ok_or(GridError::DomainError)?;
  let rotations = face_ijk_to_base_cell_ccw_rot60(&bc_fijk).ok_or(GridError::DomainError)?;
  set_base_cell(&mut h, base_cell);

  if is_base_cell_pentagon(base_cell) {
    // the K subsequence is deleted; rotate away from it
    if leading_non_zero_digit(h) == Direction::KAxes {
      h = if is_cw_offset(base_cell, bc_fijk.face) {
        rotate60_cw(h)
      } else {
        rotate60_ccw(h)
      };
    }
    for _ in 0..rotations {
      h = rotate_pent60_ccw(h);
    }
  } else {
    for _ in 0..rotations {
      h = rotate60_ccw(h);
    }
  }
  Ok(h)
}

/// Walks the digits of `h` from the home position in `fijk`.
///
/// Returns whether the result may lie off the home face.
fn walk_digits(h: CellIndex, fijk: &mut FaceIJK) -> bool {
  let res = get_resolution(h);
  let possible_overage =
    is_base_cell_pentagon(get_base_cell(h)) || (res != 0 && fijk.coord != CoordIJK::default());

  for r in 1..=res {
    fijk.coord = if is_class_iii(r) {
      fijk.coord.down_ap7()
    } else {
      fijk.coord.down_ap7r()
    };
    fijk.coord = fijk.coord.neighbor(get_index_digit(h, r));
  }
  possible_overage
}

/// Centre of `h` in its base cell's frame, with the base cell centre at the origin.
pub(crate) fn cell_to_base_cell_ijk(h: CellIndex) -> CoordIJK {
  let mut fijk = FaceIJK::default();
  walk_digits(h, &mut fijk);
  fijk.coord
}

/// Face position of a cell centre, on the face that contains it.
pub(crate) fn cell_to_face_ijk(h: CellIndex) -> Result<FaceIJK> {
  let base_cell = get_base_cell(h);
  if base_cell >= NUM_BASE_CELLS {
    return Err(GridError::MalformedIndex);
  }

  let pentagon = is_base_cell_pentagon(base_cell);
  let h = if pentagon && leading_non_zero_digit(h) == Direction::IkAxes {
    rotate60_cw(h)
  } else {
    h
  };

  let mut fijk = home_face_ijk(base_cell);
  if !walk_digits(h, &mut fijk) {
    return Ok(fijk);
  }

  let orig = fijk.coord;
  let res = get_resolution(h);
  let mut adj_res = res;
  // overage is resolved on Class II grids
  if is_class_iii(res) {
    fijk.coord = fijk.coord.down_ap7r();
    adj_res += 1;
  }

  let pent_leading_4 = pentagon && leading_non_zero_digit(h) == Direction::IAxes;
  let mut overage = fijk.adjust_overage_class_ii(adj_res, pent_leading_4, false);
  if overage == Overage::OnFace {
    fijk.coord = orig;
    return Ok(fijk);
  }

  // pentagons can cross a second edge
  if pentagon {
    while overage == Overage::NewFace {
      overage = fijk.adjust_overage_class_ii(adj_res, false, false);
    }
  }
  if adj_res != res {
    fijk.coord = fijk.coord.up_ap7r();
  }
  Ok(fijk)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_set_and_get_fields() {
    let mut h = CellIndex(INDEX_INIT);
    set_mode(&mut h, CELL_MODE);
    set_resolution(&mut h, 9);
    set_base_cell(&mut h, 20);
    assert_eq!(get_mode(h), CELL_MODE);
    assert_eq!(get_resolution(h), 9);
    assert_eq!(get_base_cell(h), 20);
    assert_eq!(get_reserved_bits(h), 0);
    assert_eq!(get_high_bit(h), 0);

    for r in 1..=MAX_RES {
      assert_eq!(get_index_digit(h, r), Direction::InvalidDigit, "digit {r} starts unused");
    }
    set_index_digit(&mut h, 3, Direction::IjAxes);
    assert_eq!(get_index_digit(h, 3), Direction::IjAxes);
    assert_eq!(get_index_digit(h, 2), Direction::InvalidDigit, "neighbouring digit untouched");
    assert_eq!(get_index_digit(h, 4), Direction::InvalidDigit, "neighbouring digit untouched");
  }

  #[test]
  fn test_init_cell_layout() {
    assert_eq!(init_cell(0, 0, Direction::Center), CellIndex(0x8001fffffffffff));
    assert_eq!(init_cell(1, 1, Direction::Center), CellIndex(0x81023ffffffffff));
    let h = init_cell(5, 20, Direction::IAxes);
    assert_eq!(get_resolution(h), 5);
    assert_eq!(leading_non_zero_digit(h), Direction::IAxes);
    assert_eq!(get_index_digit(h, 6), Direction::InvalidDigit);
  }

  #[test]
  fn test_leading_non_zero_digit() {
    let mut h = init_cell(4, 14, Direction::Center);
    assert_eq!(leading_non_zero_digit(h), Direction::Center);
    set_index_digit(&mut h, 3, Direction::JAxes);
    set_index_digit(&mut h, 4, Direction::KAxes);
    assert_eq!(leading_non_zero_digit(h), Direction::JAxes);
  }

  #[test]
  fn test_rotations_invert() {
    let mut h = init_cell(3, 20, Direction::Center);
    set_index_digit(&mut h, 1, Direction::JAxes);
    set_index_digit(&mut h, 2, Direction::IkAxes);
    assert_eq!(rotate60_cw(rotate60_ccw(h)), h);

    let once = rotate60_ccw(h);
    assert_eq!(get_index_digit(once, 1), Direction::JkAxes);
    assert_eq!(get_index_digit(once, 2), Direction::IAxes);
    assert_eq!(get_index_digit(once, 3), Direction::Center, "centre digits stay");

    let mut full = h;
    for _ in 0..6 {
      full = rotate60_ccw(full);
    }
    assert_eq!(full, h, "six rotations are the identity");
  }

  #[test]
  fn test_pentagon_rotation_skips_k() {
    // JK rotated ccw would become K; the pentagon rotation carries on to IK
    let h = init_cell(2, 4, Direction::JkAxes);
    let rotated = rotate_pent60_ccw(h);
    assert_eq!(leading_non_zero_digit(rotated), Direction::IkAxes);

    let h = init_cell(2, 4, Direction::IkAxes);
    let rotated = rotate_pent60_cw(h);
    assert_eq!(leading_non_zero_digit(rotated), Direction::JkAxes);

    let h = init_cell(2, 4, Direction::JAxes);
    assert_eq!(rotate_pent60_ccw(h), rotate60_ccw(h), "no skip when K is not reached");
  }

  #[test]
  fn test_base_cell_face_round_trip() {
    for bc in 0..NUM_BASE_CELLS {
      let h = init_cell(0, bc, Direction::Center);
      let fijk = cell_to_face_ijk(h).unwrap();
      assert_eq!(fijk, home_face_ijk(bc), "base cell {bc} sits at its home");
      assert_eq!(face_ijk_to_cell(&fijk, 0), Ok(h), "base cell {bc} re-encodes");
    }
  }

  #[test]
  fn test_face_ijk_round_trip_fine_cells() {
    let cells = [0x8928308280fffff_u64, 0x85283473fffffff, 0x820327fffffffff, 0x84f2939ffffffff];
    for raw in cells {
      let h = CellIndex(raw);
      let fijk = cell_to_face_ijk(h).unwrap();
      assert_eq!(face_ijk_to_cell(&fijk, get_resolution(h)), Ok(h), "{raw:x} survives the round trip");
    }
  }

  #[test]
  fn test_face_ijk_to_cell_rejects_off_face() {
    let far = FaceIJK {
      face: 0,
      coord: CoordIJK::new(3, 0, 0),
    };
    assert_eq!(face_ijk_to_cell(&far, 0), Err(GridError::DomainError));
  }

  #[test]
  fn test_cell_to_face_ijk_rejects_bad_base_cell() {
    let h = init_cell(0, 122, Direction::Center);
    assert_eq!(cell_to_face_ijk(h), Err(GridError::MalformedIndex));
  }
}

// src/local_ij.rs
//! Planar IJ coordinates anchored on an origin cell.
//!
//! Coordinates are expressed in the frame of the origin's base cell, unfolded
//! across at most one neighbouring base cell. Pentagons distort that frame,
//! so some pairs near a pentagon have no local coordinates.

use crate::base_cells::{
  base_cell_direction, base_cell_neighbor, base_cell_neighbor_rotations, is_base_cell_pentagon,
  is_base_cell_polar_pentagon,
};
use crate::cell_index::{
  cell_to_base_cell_ijk, decode, get_base_cell, get_resolution, leading_non_zero_digit, rotate60_ccw, rotate60_cw,
  rotate_pent60_ccw, rotate_pent60_cw, set_base_cell, set_index_digit, set_mode, set_resolution,
};
use crate::constants::{CELL_MODE, INDEX_INIT, INVALID_BASE_CELL};
use crate::coords::is_class_iii;
use crate::error::{GridError, Result};
use crate::types::{CellIndex, CoordIJ, CoordIJK, Direction};

// Clockwise rotations into the origin's frame, by [origin leading digit][direction].
#[rustfmt::skip]
const PENTAGON_ROTATIONS: [[i32; 7]; 7] = [
  [ 0, -1,  0,  0,  0,  0,  0],
  [-1, -1, -1, -1, -1, -1, -1],
  [ 0, -1,  0,  0,  0,  1,  0],
  [ 0, -1,  0,  0,  1,  1,  0],
  [ 0, -1,  0,  5,  0,  0,  0],
  [ 0, -1,  5,  5,  0,  0,  0],
  [ 0, -1,  0,  0,  0,  0,  0],
];

// Counter-clockwise rotations back out of the origin's frame.
#[rustfmt::skip]
const PENTAGON_ROTATIONS_REVERSE: [[i32; 7]; 7] = [
  [ 0,  0,  0,  0,  0,  0,  0],
  [-1, -1, -1, -1, -1, -1, -1],
  [ 0,  1,  0,  0,  0,  0,  0],
  [ 0,  1,  0,  0,  0,  1,  0],
  [ 0,  5,  0,  0,  0,  0,  0],
  [ 0,  5,  0,  5,  0,  0,  0],
  [ 0,  0,  0,  0,  0,  0,  0],
];

#[rustfmt::skip]
const PENTAGON_ROTATIONS_REVERSE_NONPOLAR: [[i32; 7]; 7] = [
  [ 0,  0,  0,  0,  0,  0,  0],
  [-1, -1, -1, -1, -1, -1, -1],
  [ 0,  1,  0,  0,  0,  0,  0],
  [ 0,  1,  0,  0,  0,  1,  0],
  [ 0,  5,  0,  0,  0,  0,  0],
  [ 0,  1,  0,  5,  1,  1,  0],
  [ 0,  0,  0,  0,  0,  0,  0],
];

#[rustfmt::skip]
const PENTAGON_ROTATIONS_REVERSE_POLAR: [[i32; 7]; 7] = [
  [ 0,  0,  0,  0,  0,  0,  0],
  [-1, -1, -1, -1, -1, -1, -1],
  [ 0,  1,  1,  1,  1,  1,  1],
  [ 0,  1,  0,  0,  0,  1,  0],
  [ 0,  1,  0,  0,  1,  1,  1],
  [ 0,  1,  0,  5,  1,  1,  0],
  [ 0,  1,  1,  0,  1,  1,  1],
];

/// Leading digit and direction pairs that would unfold a pentagon the wrong way.
#[rustfmt::skip]
const FAILED_DIRECTIONS: [[bool; 7]; 7] = [
  [false, false, false, false, false, false, false],
  [false, false, false, false, false, false, false],
  [false, false, false, false, true,  true,  false],
  [false, false, false, false, true,  false, true ],
  [false, false, true,  true,  false, false, false],
  [false, false, true,  false, false, false, true ],
  [false, false, false, true,  false, true,  false],
];

fn rotations(table: &[[i32; 7]; 7], row: Direction, col: Direction) -> Result<i32> {
  let n = table[row as usize][col as usize];
  if n < 0 {
    return Err(GridError::PentagonDistortion);
  }
  Ok(n)
}

fn check_unfold(leading: Direction, dir: Direction) -> Result<()> {
  if FAILED_DIRECTIONS[leading as usize][dir as usize] {
    return Err(GridError::PentagonDistortion);
  }
  Ok(())
}

/// IJK of `cell` in the frame of `origin`'s base cell.
pub(crate) fn cell_to_local_ijk(origin: CellIndex, cell: CellIndex) -> Result<CoordIJK> {
  decode(origin)?;
  decode(cell)?;
  let res = get_resolution(origin);
  if res != get_resolution(cell) {
    return Err(GridError::ResolutionMismatch);
  }

  let origin_base_cell = get_base_cell(origin);
  let base_cell = get_base_cell(cell);
  let origin_on_pentagon = is_base_cell_pentagon(origin_base_cell);
  let cell_on_pentagon = is_base_cell_pentagon(base_cell);

  let mut h = cell;
  let mut dir = Direction::Center;
  let mut rev_dir = Direction::Center;
  if origin_base_cell != base_cell {
    dir = base_cell_direction(origin_base_cell, base_cell);
    if dir == Direction::InvalidDigit {
      return Err(GridError::TooFar);
    }
    rev_dir = base_cell_direction(base_cell, origin_base_cell);

    // undo the rotation into the cell's base cell
    for _ in 0..base_cell_neighbor_rotations(origin_base_cell, dir) {
      if cell_on_pentagon {
        h = rotate_pent60_cw(h);
        rev_dir = rev_dir.rotate60_cw();
        if rev_dir == Direction::KAxes {
          rev_dir = rev_dir.rotate60_cw();
        }
      } else {
        h = rotate60_cw(h);
        rev_dir = rev_dir.rotate60_cw();
      }
    }
  }

  let mut ijk = cell_to_base_cell_ijk(h);

  if dir != Direction::Center {
    let mut pentagon_rotations = 0;
    let mut direction_rotations = 0;
    if origin_on_pentagon {
      let leading = leading_non_zero_digit(origin);
      check_unfold(leading, dir)?;
      direction_rotations = rotations(&PENTAGON_ROTATIONS, leading, dir)?;
      pentagon_rotations = direction_rotations;
    } else if cell_on_pentagon {
      let leading = leading_non_zero_digit(h);
      check_unfold(leading, rev_dir)?;
      pentagon_rotations = rotations(&PENTAGON_ROTATIONS, rev_dir, leading)?;
    }

    for _ in 0..pentagon_rotations {
      ijk = ijk.rotate60_cw();
    }

    let mut offset = CoordIJK::default().neighbor(dir);
    for r in (0..res).rev() {
      offset = if is_class_iii(r + 1) {
        offset.down_ap7()
      } else {
        offset.down_ap7r()
      };
    }
    for _ in 0..direction_rotations {
      offset = offset.rotate60_cw();
    }
    ijk = (ijk + offset).normalize();
  } else if origin_on_pentagon && cell_on_pentagon {
    let origin_leading = leading_non_zero_digit(origin);
    let cell_leading = leading_non_zero_digit(h);
    check_unfold(origin_leading, cell_leading)?;
    for _ in 0..rotations(&PENTAGON_ROTATIONS, origin_leading, cell_leading)? {
      ijk = ijk.rotate60_cw();
    }
  }

  Ok(ijk)
}

/// The cell at `ijk` in the frame of `origin`'s base cell.
pub(crate) fn local_ijk_to_cell(origin: CellIndex, ijk: CoordIJK) -> Result<CellIndex> {
  decode(origin)?;
  let res = get_resolution(origin);
  let origin_base_cell = get_base_cell(origin);
  let origin_on_pentagon = is_base_cell_pentagon(origin_base_cell);

  let mut out = CellIndex(INDEX_INIT);
  set_mode(&mut out, CELL_MODE);
  set_resolution(&mut out, res);

  if res == 0 {
    let dir = ijk.to_unit_digit();
    if dir == Direction::InvalidDigit {
      return Err(GridError::TooFar);
    }
    let base_cell = base_cell_neighbor(origin_base_cell, dir);
    if base_cell == INVALID_BASE_CELL {
      return Err(GridError::PentagonDistortion);
    }
    set_base_cell(&mut out, base_cell);
    return Ok(out);
  }

  // digits from finest to coarsest, leaving the base cell offset in `coarse`
  let mut coarse = ijk;
  for r in (0..res).rev() {
    let last = coarse;
    let center = if is_class_iii(r + 1) {
      coarse = coarse.checked_up_ap7().ok_or(GridError::TooFar)?;
      coarse.checked_down_ap7()
    } else {
      coarse = coarse.checked_up_ap7r().ok_or(GridError::TooFar)?;
      coarse.checked_down_ap7r()
    }
    .ok_or(GridError::TooFar)?;
    let offset = CoordIJK::new(
      last.i.checked_sub(center.i).ok_or(GridError::TooFar)?,
      last.j.checked_sub(center.j).ok_or(GridError::TooFar)?,
      last.k.checked_sub(center.k).ok_or(GridError::TooFar)?,
    )
    .checked_normalize()
    .ok_or(GridError::TooFar)?;
    set_index_digit(&mut out, r + 1, offset.to_unit_digit());
  }

  if coarse.i > 1 || coarse.j > 1 || coarse.k > 1 {
    return Err(GridError::TooFar);
  }

  let mut dir = coarse.to_unit_digit();
  let mut base_cell = base_cell_neighbor(origin_base_cell, dir);
  let cell_on_pentagon = base_cell != INVALID_BASE_CELL && is_base_cell_pentagon(base_cell);

  if dir != Direction::Center {
    let mut pentagon_rotations = 0;
    if origin_on_pentagon {
      let leading = leading_non_zero_digit(origin);
      pentagon_rotations = rotations(&PENTAGON_ROTATIONS_REVERSE, leading, dir)?;
      for _ in 0..pentagon_rotations {
        dir = dir.rotate60_ccw();
      }
      if dir == Direction::KAxes {
        return Err(GridError::PentagonDistortion);
      }
      base_cell = base_cell_neighbor(origin_base_cell, dir);
    }

    let base_cell_rotations = base_cell_neighbor_rotations(origin_base_cell, dir);
    if cell_on_pentagon {
      let rev_dir = base_cell_direction(base_cell, origin_base_cell);
      for _ in 0..base_cell_rotations {
        out = rotate60_ccw(out);
      }
      let table = if is_base_cell_polar_pentagon(base_cell) {
        &PENTAGON_ROTATIONS_REVERSE_POLAR
      } else {
        &PENTAGON_ROTATIONS_REVERSE_NONPOLAR
      };
      for _ in 0..rotations(table, rev_dir, leading_non_zero_digit(out))? {
        out = rotate_pent60_ccw(out);
      }
    } else {
      for _ in 0..pentagon_rotations + base_cell_rotations {
        out = rotate60_ccw(out);
      }
    }
  } else if origin_on_pentagon && cell_on_pentagon {
    let origin_leading = leading_non_zero_digit(origin);
    let cell_leading = leading_non_zero_digit(out);
    for _ in 0..rotations(&PENTAGON_ROTATIONS_REVERSE, origin_leading, cell_leading)? {
      out = rotate60_ccw(out);
    }
  }

  if cell_on_pentagon && leading_non_zero_digit(out) == Direction::KAxes {
    return Err(GridError::PentagonDistortion);
  }

  set_base_cell(&mut out, base_cell);
  Ok(out)
}

/// Local IJ coordinates of `cell` relative to `origin`.
///
/// The origin itself does not map to `(0, 0)`; coordinates are only
/// comparable between calls sharing the same origin.
///
/// # Errors
///
/// `MalformedIndex` for an invalid cell, `ResolutionMismatch` when the
/// resolutions differ, `TooFar` when the base cells are not adjacent, and
/// `PentagonDistortion` when the path crosses a pentagon's missing wedge.
pub fn cell_to_local_ij(origin: CellIndex, cell: CellIndex) -> Result<CoordIJ> {
  cell_to_local_ijk(origin, cell).map(CoordIJK::to_ij)
}

/// The cell at local IJ coordinates `ij` relative to `origin`.
pub fn local_ij_to_cell(origin: CellIndex, ij: CoordIJ) -> Result<CellIndex> {
  let ijk = CoordIJK::from_ij(ij).ok_or(GridError::TooFar)?;
  local_ijk_to_cell(origin, ijk)
}

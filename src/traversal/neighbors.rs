// src/traversal/neighbors.rs

use crate::base_cells::{
  base_cell_neighbor, base_cell_neighbor_rotations, home_face_ijk, is_base_cell_pentagon, is_base_cell_polar_pentagon,
  is_cw_offset,
};
use crate::cell_index::{
  decode, get_base_cell, get_index_digit, get_resolution, is_pentagon, leading_non_zero_digit, rotate60_ccw,
  rotate60_cw, rotate_pent60_ccw, set_base_cell, set_index_digit,
};
use crate::constants::INVALID_BASE_CELL;
use crate::coords::is_class_iii;
use crate::error::{GridError, Result};
use crate::types::{CellIndex, Direction};

// New digit and carry direction when moving from digit (row) in direction (column).
// The `_II` tables apply to Class III digits and the `_III` tables to Class II.

#[rustfmt::skip]
const NEW_DIGIT_II: [[Direction; 7]; 7] = [
    [Direction::Center, Direction::KAxes,  Direction::JAxes,  Direction::JkAxes, Direction::IAxes,  Direction::IkAxes, Direction::IjAxes],
    [Direction::KAxes,  Direction::IAxes,  Direction::JkAxes, Direction::IjAxes, Direction::IkAxes, Direction::JAxes,  Direction::Center],
    [Direction::JAxes,  Direction::JkAxes, Direction::KAxes,  Direction::IAxes,  Direction::IjAxes, Direction::Center, Direction::IkAxes],
    [Direction::JkAxes, Direction::IjAxes, Direction::IAxes,  Direction::IkAxes, Direction::Center, Direction::KAxes,  Direction::JAxes],
    [Direction::IAxes,  Direction::IkAxes, Direction::IjAxes, Direction::Center, Direction::JAxes,  Direction::JkAxes, Direction::KAxes],
    [Direction::IkAxes, Direction::JAxes,  Direction::Center, Direction::KAxes,  Direction::JkAxes, Direction::IjAxes, Direction::IAxes],
    [Direction::IjAxes, Direction::Center, Direction::IkAxes, Direction::JAxes,  Direction::KAxes,  Direction::IAxes,  Direction::JkAxes],
];

#[rustfmt::skip]
const NEW_ADJUSTMENT_II: [[Direction; 7]; 7] = [
    [Direction::Center, Direction::Center, Direction::Center, Direction::Center, Direction::Center, Direction::Center, Direction::Center],
    [Direction::Center, Direction::KAxes,  Direction::Center, Direction::KAxes,  Direction::Center, Direction::IkAxes, Direction::Center],
    [Direction::Center, Direction::Center, Direction::JAxes,  Direction::JkAxes, Direction::Center, Direction::Center, Direction::JAxes],
    [Direction::Center, Direction::KAxes,  Direction::JkAxes, Direction::JkAxes, Direction::Center, Direction::Center, Direction::Center],
    [Direction::Center, Direction::Center, Direction::Center, Direction::Center, Direction::IAxes,  Direction::IAxes,  Direction::IjAxes],
    [Direction::Center, Direction::IkAxes, Direction::Center, Direction::Center, Direction::IAxes,  Direction::IkAxes, Direction::Center],
    [Direction::Center, Direction::Center, Direction::JAxes,  Direction::Center, Direction::IjAxes, Direction::Center, Direction::IjAxes],
];

#[rustfmt::skip]
const NEW_DIGIT_III: [[Direction; 7]; 7] = [
    [Direction::Center, Direction::KAxes,  Direction::JAxes,  Direction::JkAxes, Direction::IAxes,  Direction::IkAxes, Direction::IjAxes],
    [Direction::KAxes,  Direction::JAxes,  Direction::JkAxes, Direction::IAxes,  Direction::IkAxes, Direction::IjAxes, Direction::Center],
    [Direction::JAxes,  Direction::JkAxes, Direction::IAxes,  Direction::IkAxes, Direction::IjAxes, Direction::Center, Direction::KAxes],
    [Direction::JkAxes, Direction::IAxes,  Direction::IkAxes, Direction::IjAxes, Direction::Center, Direction::KAxes,  Direction::JAxes],
    [Direction::IAxes,  Direction::IkAxes, Direction::IjAxes, Direction::Center, Direction::KAxes,  Direction::JAxes,  Direction::JkAxes],
    [Direction::IkAxes, Direction::IjAxes, Direction::Center, Direction::KAxes,  Direction::JAxes,  Direction::JkAxes, Direction::IAxes],
    [Direction::IjAxes, Direction::Center, Direction::KAxes,  Direction::JAxes,  Direction::JkAxes, Direction::IAxes,  Direction::IkAxes],
];

#[rustfmt::skip]
const NEW_ADJUSTMENT_III: [[Direction; 7]; 7] = [
    [Direction::Center, Direction::Center, Direction::Center, Direction::Center, Direction::Center, Direction::Center, Direction::Center],
    [Direction::Center, Direction::KAxes,  Direction::Center, Direction::JkAxes, Direction::Center, Direction::KAxes,  Direction::Center],
    [Direction::Center, Direction::Center, Direction::JAxes,  Direction::JAxes,  Direction::Center, Direction::Center, Direction::IjAxes],
    [Direction::Center, Direction::JkAxes, Direction::JAxes,  Direction::JkAxes, Direction::Center, Direction::Center, Direction::Center],
    [Direction::Center, Direction::Center, Direction::Center, Direction::Center, Direction::IAxes,  Direction::IkAxes, Direction::IAxes],
    [Direction::Center, Direction::KAxes,  Direction::Center, Direction::Center, Direction::IkAxes, Direction::IkAxes, Direction::Center],
    [Direction::Center, Direction::Center, Direction::IjAxes, Direction::Center, Direction::IAxes,  Direction::Center, Direction::IjAxes],
];

/// Base cells adjacent to a polar pentagon whose frames line up with it.
const POLAR_ALIGNED_NEIGHBORS: [i32; 2] = [8, 118];

/// Moves one step from `origin` in `dir`, with `dir` first rotated by
/// `rotations` counter-clockwise steps.
///
/// `rotations` accumulates the frame change of the step so that a walk over
/// several cells keeps a consistent heading. `origin` must be valid.
///
/// # Errors
///
/// `InvalidDirection` for a non-movement direction or a step into the
/// collapsed K direction of a pentagon.
pub(crate) fn neighbor_rotations(origin: CellIndex, dir: Direction, rotations: &mut i32) -> Result<CellIndex> {
  if !dir.is_movement() {
    return Err(GridError::InvalidDirection);
  }

  *rotations = rotations.rem_euclid(6);
  let mut dir = (0..*rotations).fold(dir, |d, _| d.rotate60_ccw());

  let mut out = origin;
  let old_base_cell = get_base_cell(origin);
  let old_leading_digit = leading_non_zero_digit(origin);
  let mut new_rotations = 0;

  let mut r = get_resolution(origin) - 1;
  loop {
    if r == -1 {
      set_base_cell(&mut out, base_cell_neighbor(old_base_cell, dir));
      new_rotations = base_cell_neighbor_rotations(old_base_cell, dir);

      if get_base_cell(out) == INVALID_BASE_CELL {
        // the edge borders the IK neighbour across the deleted K vertex
        set_base_cell(&mut out, base_cell_neighbor(old_base_cell, Direction::IkAxes));
        new_rotations = base_cell_neighbor_rotations(old_base_cell, Direction::IkAxes);
        out = rotate60_ccw(out);
        *rotations += 1;
      }
      break;
    }

    let old_digit = get_index_digit(out, r + 1);
    if old_digit == Direction::InvalidDigit {
      return Err(GridError::MalformedIndex);
    }
    let (digits, adjustments) = if is_class_iii(r + 1) {
      (&NEW_DIGIT_II, &NEW_ADJUSTMENT_II)
    } else {
      (&NEW_DIGIT_III, &NEW_ADJUSTMENT_III)
    };
    set_index_digit(&mut out, r + 1, digits[old_digit as usize][dir as usize]);
    let next_dir = adjustments[old_digit as usize][dir as usize];

    if next_dir == Direction::Center {
      break;
    }
    dir = next_dir;
    r -= 1;
  }

  let new_base_cell = get_base_cell(out);
  if is_base_cell_pentagon(new_base_cell) {
    let mut already_adjusted_k = false;

    if leading_non_zero_digit(out) == Direction::KAxes {
      if old_base_cell == new_base_cell {
        // moved into the deleted K subsequence from inside the same pentagon
        match old_leading_digit {
          Direction::JkAxes => {
            out = rotate60_ccw(out);
            *rotations += 1;
          }
          Direction::IkAxes => {
            out = rotate60_cw(out);
            *rotations += 5;
          }
          _ => return Err(GridError::InvalidDirection),
        }
      } else {
        out = if is_cw_offset(new_base_cell, home_face_ijk(old_base_cell).face) {
          rotate60_cw(out)
        } else {
          rotate60_ccw(out)
        };
        already_adjusted_k = true;
      }
    }

    for _ in 0..new_rotations {
      out = rotate_pent60_ccw(out);
    }

    if old_base_cell != new_base_cell {
      if is_base_cell_polar_pentagon(new_base_cell) {
        if !POLAR_ALIGNED_NEIGHBORS.contains(&old_base_cell) && leading_non_zero_digit(out) != Direction::JkAxes {
          *rotations += 1;
        }
      } else if leading_non_zero_digit(out) == Direction::IkAxes && !already_adjusted_k {
        *rotations += 1;
      }
    }
  } else {
    for _ in 0..new_rotations {
      out = rotate60_ccw(out);
    }
  }

  *rotations = (*rotations + new_rotations).rem_euclid(6);
  Ok(out)
}

/// The adjacent cell of `cell` in direction `dir`.
///
/// # Errors
///
/// `MalformedIndex` for an invalid cell; `InvalidDirection` for `Center`,
/// `InvalidDigit`, or `KAxes` from a pentagon.
pub fn neighbor(cell: CellIndex, dir: Direction) -> Result<CellIndex> {
  decode(cell)?;
  if !dir.is_movement() || (dir == Direction::KAxes && is_pentagon(cell)) {
    return Err(GridError::InvalidDirection);
  }
  let mut rotations = 0;
  neighbor_rotations(cell, dir, &mut rotations)
}

/// Direction from `origin` to an adjacent `destination`, `None` if they are
/// not adjacent.
pub(crate) fn direction_for_neighbor(origin: CellIndex, destination: CellIndex) -> Option<Direction> {
  let skip_k = is_pentagon(origin);
  Direction::NEIGHBORS
    .into_iter()
    .filter(|&dir| !(skip_k && dir == Direction::KAxes))
    .find(|&dir| {
      let mut rotations = 0;
      neighbor_rotations(origin, dir, &mut rotations) == Ok(destination)
    })
}

/// Whether two cells share an edge. A cell is not its own neighbour.
///
/// # Errors
///
/// `MalformedIndex` for an invalid cell, `ResolutionMismatch` when the cells
/// have different resolutions.
pub fn are_neighbor_cells(origin: CellIndex, destination: CellIndex) -> Result<bool> {
  decode(origin)?;
  decode(destination)?;
  if get_resolution(origin) != get_resolution(destination) {
    return Err(GridError::ResolutionMismatch);
  }
  if origin == destination {
    return Ok(false);
  }
  Ok(direction_for_neighbor(origin, destination).is_some())
}

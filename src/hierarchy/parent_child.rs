// src/hierarchy/parent_child.rs

use crate::cell_index::{decode, get_index_digit, get_resolution, is_pentagon, set_index_digit, set_resolution};
use crate::constants::MAX_RES;
use crate::error::{GridError, Result};
use crate::iterators::Children;
use crate::types::{CellIndex, Direction};

/// Descendant count of a pentagon `n` levels down.
#[inline]
fn pentagon_children_size(n: i32) -> i64 {
  1 + 5 * (7_i64.pow(n as u32) - 1) / 6
}

fn check_child_res(h: CellIndex, child_res: i32) -> Result<()> {
  if child_res < get_resolution(h) || child_res > MAX_RES {
    return Err(GridError::InvalidResolution);
  }
  Ok(())
}

/// Ancestor of `h` at `parent_res`; `h` itself when the resolutions match.
///
/// # Errors
///
/// `MalformedIndex` for an invalid cell, `InvalidResolution` when
/// `parent_res` is negative or finer than `h`.
pub fn parent_at(h: CellIndex, parent_res: i32) -> Result<CellIndex> {
  decode(h)?;
  let child_res = get_resolution(h);
  if parent_res < 0 || parent_res > child_res {
    return Err(GridError::InvalidResolution);
  }

  let mut parent = h;
  set_resolution(&mut parent, parent_res);
  for r in (parent_res + 1)..=child_res {
    set_index_digit(&mut parent, r, Direction::InvalidDigit);
  }
  Ok(parent)
}

/// Number of descendants of `h` at `child_res`.
pub fn children_count(h: CellIndex, child_res: i32) -> Result<i64> {
  decode(h)?;
  check_child_res(h, child_res)?;
  let n = child_res - get_resolution(h);
  Ok(if is_pentagon(h) {
    pentagon_children_size(n)
  } else {
    7_i64.pow(n as u32)
  })
}

/// Lazy sequence of the descendants of `h` at `child_res`, in index order.
pub fn children_at(h: CellIndex, child_res: i32) -> Result<Children> {
  let count = children_count(h, child_res)?;
  Ok(Children::new(h, child_res, count as usize))
}

/// The descendant of `h` at `child_res` sharing its centre.
pub fn center_child(h: CellIndex, child_res: i32) -> Result<CellIndex> {
  decode(h)?;
  check_child_res(h, child_res)?;
  let parent_res = get_resolution(h);
  let mut child = h;
  set_resolution(&mut child, child_res);
  for r in (parent_res + 1)..=child_res {
    set_index_digit(&mut child, r, Direction::Center);
  }
  Ok(child)
}

/// Position of `child` in the ordered descendants of its ancestor at
/// `parent_res`, matching the order of [`children_at`].
pub fn child_position(child: CellIndex, parent_res: i32) -> Result<i64> {
  let parent = parent_at(child, parent_res)?;
  let child_res = get_resolution(child);

  if !is_pentagon(parent) {
    return Ok(
      ((parent_res + 1)..=child_res)
        .map(|r| get_index_digit(child, r) as i64 * 7_i64.pow((child_res - r) as u32))
        .sum(),
    );
  }

  let mut pos = 0;
  for r in (parent_res + 1..=child_res).rev() {
    let in_pentagon = is_pentagon(parent_at(child, r - 1)?);
    let raw = get_index_digit(child, r) as i64;
    // pentagons have no K child, so later digits close the gap
    let digit = if in_pentagon && raw > 0 { raw - 1 } else { raw };
    if digit != 0 {
      let hex_width = 7_i64.pow((child_res - r) as u32);
      let center_width = if in_pentagon {
        pentagon_children_size(child_res - r)
      } else {
        hex_width
      };
      pos += center_width + (digit - 1) * hex_width;
    }
  }
  Ok(pos)
}

/// The descendant of `parent` at `child_res` with position `pos`.
///
/// # Errors
///
/// `DomainError` when `pos` is outside `0..children_count(parent, child_res)`.
pub fn child_at_position(pos: i64, parent: CellIndex, child_res: i32) -> Result<CellIndex> {
  let count = children_count(parent, child_res)?;
  if !(0..count).contains(&pos) {
    return Err(GridError::DomainError);
  }

  let parent_res = get_resolution(parent);
  let mut child = parent;
  set_resolution(&mut child, child_res);
  let mut idx = pos;
  let mut in_pentagon = is_pentagon(parent);

  for r in (parent_res + 1)..=child_res {
    let width = 7_i64.pow((child_res - r) as u32);
    let digit = if in_pentagon {
      let center_width = pentagon_children_size(child_res - r);
      if idx < center_width {
        0
      } else {
        idx -= center_width;
        in_pentagon = false;
        let d = idx / width + 2;
        idx %= width;
        d
      }
    } else {
      let d = idx / width;
      idx %= width;
      d
    };
    set_index_digit(&mut child, r, Direction::from_bits(digit as u64));
  }
  Ok(child)
}

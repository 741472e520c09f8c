// src/iterators.rs
//! Lazy iteration over descendants and over whole resolutions.

use crate::cell_index::{get_index_digit, get_resolution, init_cell, is_pentagon, set_index_digit, set_resolution};
use crate::constants::{MAX_RES, NUM_BASE_CELLS, PER_DIGIT_OFFSET};
use crate::error::{GridError, Result};
use crate::types::{CellIndex, Direction};

/// Descendants of one cell at a finer resolution, in index order.
///
/// The iterator is restartable by cloning it before consumption.
#[derive(Debug, Clone)]
pub struct Children {
  next: Option<CellIndex>,
  parent_res: i32,
  // resolution of the digit that still has to skip K, for pentagon parents
  skip_digit: i32,
  remaining: usize,
}

impl Children {
  /// `parent` must be valid and `child_res` in `parent_res..=15`.
  pub(crate) fn new(parent: CellIndex, child_res: i32, count: usize) -> Self {
    let parent_res = get_resolution(parent);
    let mut first = parent;
    set_resolution(&mut first, child_res);
    for r in (parent_res + 1)..=child_res {
      set_index_digit(&mut first, r, Direction::Center);
    }
    Self {
      next: Some(first),
      parent_res,
      skip_digit: if is_pentagon(parent) { child_res } else { -1 },
      remaining: count,
    }
  }

  fn empty() -> Self {
    Self {
      next: None,
      parent_res: -1,
      skip_digit: -1,
      remaining: 0,
    }
  }

  /// Adds one to the digit at `res`; a digit past 7 carries into the coarser one.
  fn increment_digit(h: &mut CellIndex, res: i32) {
    h.0 += 1 << ((MAX_RES - res) as u32 * PER_DIGIT_OFFSET);
  }

  fn step(&mut self) {
    let Some(mut h) = self.next else {
      return;
    };
    let child_res = get_resolution(h);
    Self::increment_digit(&mut h, child_res);

    let mut r = child_res;
    loop {
      if r == self.parent_res {
        self.next = None;
        return;
      }
      let digit = get_index_digit(h, r);
      // descendants of a pentagon never start with K
      if r == self.skip_digit && digit == Direction::KAxes {
        Self::increment_digit(&mut h, r);
        self.skip_digit -= 1;
        break;
      }
      if digit != Direction::InvalidDigit {
        break;
      }
      Self::increment_digit(&mut h, r);
      r -= 1;
    }
    self.next = Some(h);
  }
}

impl Default for Children {
  fn default() -> Self {
    Self::empty()
  }
}

impl Iterator for Children {
  type Item = CellIndex;

  fn next(&mut self) -> Option<CellIndex> {
    let current = self.next?;
    self.step();
    self.remaining = self.remaining.saturating_sub(1);
    Some(current)
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.remaining, Some(self.remaining))
  }
}

impl ExactSizeIterator for Children {}

impl std::iter::FusedIterator for Children {}

/// Every valid cell at one resolution, base cell by base cell.
#[derive(Debug, Clone)]
pub struct CellsAtResolution {
  res: i32,
  base_cell: i32,
  children: Children,
}

impl Iterator for CellsAtResolution {
  type Item = CellIndex;

  fn next(&mut self) -> Option<CellIndex> {
    loop {
      if let Some(h) = self.children.next() {
        return Some(h);
      }
      self.base_cell += 1;
      if self.base_cell >= NUM_BASE_CELLS {
        return None;
      }
      self.children = base_cell_children(self.base_cell, self.res);
    }
  }
}

impl std::iter::FusedIterator for CellsAtResolution {}

fn base_cell_children(base_cell: i32, res: i32) -> Children {
  let parent = init_cell(0, base_cell, Direction::Center);
  let count = crate::hierarchy::children_count(parent, res).map_or(0, |n| n as usize);
  Children::new(parent, res, count)
}

/// Iterates every cell at `res`, in index order.
pub fn cells_at_resolution(res: i32) -> Result<CellsAtResolution> {
  if !(0..=MAX_RES).contains(&res) {
    return Err(GridError::InvalidResolution);
  }
  Ok(CellsAtResolution {
    res,
    base_cell: 0,
    children: base_cell_children(0, res),
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::cell_index::{get_num_cells, is_valid_cell};
  use crate::hierarchy::{children_at, children_count, parent_at};

  #[test]
  fn test_children_hexagon() {
    let parent = CellIndex(0x85283473fffffff);
    let children: Vec<CellIndex> = children_at(parent, 7).unwrap().collect();
    assert_eq!(children.len() as i64, children_count(parent, 7).unwrap());
    assert_eq!(children.len(), 49);
    for child in &children {
      assert_eq!(get_resolution(*child), 7);
      assert_eq!(parent_at(*child, 5), Ok(parent));
    }
    assert!(children.windows(2).all(|w| w[0] < w[1]), "children come in index order");
  }

  #[test]
  fn test_children_pentagon() {
    let parent = init_cell(0, 4, Direction::Center);
    let children: Vec<CellIndex> = children_at(parent, 2).unwrap().collect();
    assert_eq!(children.len(), 41, "pentagon descendants two levels down");
    for child in &children {
      assert!(is_valid_cell(*child), "{child:?} is valid");
      assert_eq!(parent_at(*child, 0), Ok(parent));
    }
    assert_eq!(children.iter().filter(|c| is_pentagon(**c)).count(), 1);
  }

  #[test]
  fn test_children_same_resolution() {
    let parent = CellIndex(0x85283473fffffff);
    let children: Vec<CellIndex> = children_at(parent, 5).unwrap().collect();
    assert_eq!(children, vec![parent]);
  }

  #[test]
  fn test_children_restart_by_clone() {
    let iter = children_at(CellIndex(0x85283473fffffff), 6).unwrap();
    assert_eq!(iter.len(), 7);
    let first: Vec<CellIndex> = iter.clone().collect();
    let second: Vec<CellIndex> = iter.collect();
    assert_eq!(first, second);
  }

  #[test]
  fn test_size_hint_tracks_progress() {
    let mut iter = children_at(CellIndex(0x85283473fffffff), 6).unwrap();
    iter.next();
    iter.next();
    assert_eq!(iter.size_hint(), (5, Some(5)));
    assert_eq!(iter.by_ref().count(), 5);
    assert_eq!(iter.next(), None, "fused");
    assert!(Children::default().next().is_none());
  }

  #[test]
  fn test_cells_at_resolution() {
    for res in 0..=2 {
      let cells: Vec<CellIndex> = cells_at_resolution(res).unwrap().collect();
      assert_eq!(cells.len() as i64, get_num_cells(res).unwrap());
      assert!(cells.iter().all(|c| is_valid_cell(*c) && get_resolution(*c) == res));
      assert!(cells.windows(2).all(|w| w[0] < w[1]), "strictly increasing at res {res}");
    }
    assert!(cells_at_resolution(16).is_err());
    assert!(cells_at_resolution(-1).is_err());
  }
}

// src/hierarchy/compaction.rs

use crate::cell_index::{decode, get_resolution};
use crate::constants::MAX_RES;
use crate::error::{GridError, Result};
use crate::hierarchy::parent_child::{children_at, children_count, parent_at};
use crate::types::CellIndex;

use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Number of cells [`uncompact`] yields for `cells` at `res`.
///
/// # Errors
///
/// `MalformedIndex` for an invalid cell, `InvalidResolution` when `res` is
/// outside 0..=15 or coarser than one of the cells.
pub fn uncompact_size(cells: &[CellIndex], res: i32) -> Result<i64> {
  if !(0..=MAX_RES).contains(&res) {
    return Err(GridError::InvalidResolution);
  }
  cells.iter().try_fold(0_i64, |total, &cell| {
    let count = children_count(cell, res)?;
    Ok(total.saturating_add(count))
  })
}

/// Expands every cell into its descendants at `res`.
///
/// Cells already at `res` pass through unchanged. Output follows input order,
/// each cell's descendants in index order.
pub fn uncompact(cells: &[CellIndex], res: i32) -> Result<Vec<CellIndex>> {
  let size = uncompact_size(cells, res)?;
  let mut out = Vec::with_capacity(usize::try_from(size).unwrap_or(0));
  for &cell in cells {
    out.extend(children_at(cell, res)?);
  }
  debug!(input = cells.len(), output = out.len(), res, "uncompacted cell set");
  Ok(out)
}

/// Replaces every complete group of siblings with their parent, repeatedly,
/// until no complete group remains. The result is sorted.
///
/// Duplicates collapse. Cells may come from different resolutions, which makes
/// `compact` idempotent, but no cell may contain another.
///
/// # Errors
///
/// `MalformedIndex` for an invalid cell, `MixedResolution` when one input cell
/// is an ancestor of another.
pub fn compact(cells: &[CellIndex]) -> Result<Vec<CellIndex>> {
  for &cell in cells {
    decode(cell)?;
  }

  let mut set = cells.to_vec();
  set.sort_unstable();
  set.dedup();

  let members: HashSet<CellIndex> = set.iter().copied().collect();
  for &cell in &set {
    for r in 0..get_resolution(cell) {
      if members.contains(&parent_at(cell, r)?) {
        return Err(GridError::MixedResolution);
      }
    }
  }

  let Some(max_res) = set.iter().map(|&h| get_resolution(h)).max() else {
    return Ok(Vec::new());
  };

  let mut by_res: Vec<Vec<CellIndex>> = vec![Vec::new(); max_res as usize + 1];
  for cell in set {
    by_res[get_resolution(cell) as usize].push(cell);
  }

  let mut out = Vec::new();
  for res in (1..=max_res).rev() {
    let level = std::mem::take(&mut by_res[res as usize]);
    let mut siblings: HashMap<CellIndex, Vec<CellIndex>> = HashMap::new();
    for cell in level {
      siblings.entry(parent_at(cell, res - 1)?).or_default().push(cell);
    }
    for (parent, group) in siblings {
      if group.len() as i64 == children_count(parent, res)? {
        by_res[res as usize - 1].push(parent);
      } else {
        out.extend(group);
      }
    }
  }
  out.append(&mut by_res[0]);
  out.sort_unstable();

  debug!(input = cells.len(), output = out.len(), "compacted cell set");
  Ok(out)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::cell_index::{get_res0_cells, init_cell};
  use crate::types::{Direction, NULL_INDEX};

  const HEX: CellIndex = CellIndex(0x85283473fffffff);

  #[test]
  fn test_compact_full_siblings() {
    let children: Vec<CellIndex> = children_at(HEX, 7).unwrap().collect();
    assert_eq!(compact(&children), Ok(vec![HEX]));
  }

  #[test]
  fn test_compact_partial() {
    let mut cells: Vec<CellIndex> = children_at(HEX, 6).unwrap().collect();
    let dropped = cells.pop().unwrap();
    let compacted = compact(&cells).unwrap();
    assert_eq!(compacted, cells, "an incomplete group stays as is");
    assert!(!compacted.contains(&dropped));
  }

  #[test]
  fn test_compact_mixed_levels() {
    // all res 7 descendants of HEX minus one res 6 child's worth, plus that child
    let res6: Vec<CellIndex> = children_at(HEX, 6).unwrap().collect();
    let mut cells: Vec<CellIndex> = res6[1..].iter().flat_map(|&c| children_at(c, 7).unwrap()).collect();
    cells.push(res6[0]);
    assert_eq!(compact(&cells), Ok(vec![HEX]));
  }

  #[test]
  fn test_compact_pentagon() {
    let pentagon = init_cell(0, 14, Direction::Center);
    let children: Vec<CellIndex> = children_at(pentagon, 2).unwrap().collect();
    assert_eq!(compact(&children), Ok(vec![pentagon]));
  }

  #[test]
  fn test_compact_is_idempotent() {
    let mut cells: Vec<CellIndex> = children_at(HEX, 7).unwrap().collect();
    cells.truncate(30);
    let once = compact(&cells).unwrap();
    assert!(once.len() < cells.len());
    assert_eq!(compact(&once), Ok(once.clone()));
  }

  #[test]
  fn test_compact_duplicates_collapse() {
    let mut cells: Vec<CellIndex> = children_at(HEX, 6).unwrap().collect();
    cells.extend(cells.clone());
    assert_eq!(compact(&cells), Ok(vec![HEX]));
  }

  #[test]
  fn test_compact_res0() {
    let cells = get_res0_cells();
    assert_eq!(compact(&cells), Ok(cells));
    assert_eq!(compact(&[]), Ok(vec![]));
  }

  #[test]
  fn test_compact_errors() {
    let child = children_at(HEX, 6).unwrap().next().unwrap();
    assert_eq!(compact(&[HEX, child]), Err(GridError::MixedResolution));
    assert_eq!(compact(&[HEX, NULL_INDEX]), Err(GridError::MalformedIndex));
  }

  #[test]
  fn test_uncompact() {
    let cells = uncompact(&[HEX], 7).unwrap();
    assert_eq!(cells.len(), 49);
    assert_eq!(uncompact_size(&[HEX], 7), Ok(49));
    assert_eq!(compact(&cells), Ok(vec![HEX]));

    assert_eq!(uncompact(&[HEX], 5), Ok(vec![HEX]));
    assert_eq!(uncompact(&[], 5), Ok(vec![]));

    let pentagon = init_cell(4, 24, Direction::Center);
    assert_eq!(uncompact_size(&[HEX, pentagon], 6), Ok(7 + 41));
    let coarse_pentagon = init_cell(1, 24, Direction::Center);
    assert_eq!(uncompact_size(&[HEX, coarse_pentagon], 6), Ok(7 + 14006));
    assert_eq!(uncompact(&[coarse_pentagon], 6).map(|cells| cells.len()), Ok(14006));
  }

  #[test]
  fn test_uncompact_errors() {
    assert_eq!(uncompact(&[HEX], 4), Err(GridError::InvalidResolution));
    assert_eq!(uncompact_size(&[HEX], 16), Err(GridError::InvalidResolution));
    assert_eq!(uncompact_size(&[NULL_INDEX], 6), Err(GridError::MalformedIndex));
  }
}

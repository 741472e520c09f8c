// src/traversal/grid_disk.rs

use crate::cell_index::{decode, get_num_cells, is_pentagon};
use crate::constants::MAX_RES;
use crate::error::{GridError, Result};
use crate::traversal::neighbors::neighbor_rotations;
use crate::types::{CellIndex, Direction};

use std::collections::{HashMap, HashSet, VecDeque};
use tracing::{debug, trace};

/// Smallest k whose disk covers every cell at the finest resolution.
const K_ALL_CELLS_AT_MAX_RES: i32 = 13_780_510;

/// Direction from one ring to the start of the next.
const NEXT_RING_DIRECTION: Direction = Direction::IAxes;

/// Sides of a ring in walking order.
const RING_SIDES: [Direction; 6] = [
  Direction::JAxes,
  Direction::JkAxes,
  Direction::KAxes,
  Direction::IkAxes,
  Direction::IAxes,
  Direction::IjAxes,
];

/// Upper bound on the number of cells within distance `k`: `3k(k+1) + 1`,
/// capped at the number of cells at the finest resolution.
pub fn max_k_ring_size(k: i32) -> Result<i64> {
  if k < 0 {
    return Err(GridError::DomainError);
  }
  if k >= K_ALL_CELLS_AT_MAX_RES {
    return get_num_cells(MAX_RES);
  }
  let k = i64::from(k);
  Ok(3 * k * (k + 1) + 1)
}

/// Spiral walk outward from `origin`. Fails with `PentagonDistortion` as soon
/// as a pentagon is reached, since the walk can no longer keep its heading.
fn k_ring_spiral(origin: CellIndex, k: i32, out: &mut Vec<(CellIndex, i32)>) -> Result<()> {
  out.push((origin, 0));
  if is_pentagon(origin) {
    return Err(GridError::PentagonDistortion);
  }

  let mut current = origin;
  let mut rotations = 0;
  for ring in 1..=k {
    current = neighbor_rotations(current, NEXT_RING_DIRECTION, &mut rotations)?;
    if is_pentagon(current) {
      return Err(GridError::PentagonDistortion);
    }
    for side in RING_SIDES {
      for _ in 0..ring {
        current = neighbor_rotations(current, side, &mut rotations)?;
        out.push((current, ring));
        if is_pentagon(current) {
          return Err(GridError::PentagonDistortion);
        }
      }
    }
  }
  Ok(())
}

/// Breadth-first walk; handles pentagons at the cost of hashing every cell.
fn k_ring_breadth_first(origin: CellIndex, k: i32) -> Result<Vec<(CellIndex, i32)>> {
  let capacity = usize::try_from(max_k_ring_size(k)?).unwrap_or(0);
  let mut out = Vec::with_capacity(capacity);
  let mut distances: HashMap<CellIndex, i32> = HashMap::with_capacity(capacity);
  let mut queue = VecDeque::new();

  distances.insert(origin, 0);
  queue.push_back(origin);

  while let Some(cell) = queue.pop_front() {
    let d = distances[&cell];
    out.push((cell, d));
    if d == k {
      continue;
    }
    for dir in Direction::NEIGHBORS {
      let mut rotations = 0;
      let next = match neighbor_rotations(cell, dir, &mut rotations) {
        Ok(next) => next,
        Err(GridError::InvalidDirection) => continue,
        Err(e) => return Err(e),
      };
      if let std::collections::hash_map::Entry::Vacant(slot) = distances.entry(next) {
        slot.insert(d + 1);
        queue.push_back(next);
      }
    }
  }
  Ok(out)
}

/// Every cell within grid distance `k` of `origin`, paired with its distance.
///
/// The origin comes first and distances never decrease along the output.
pub fn k_ring_distances(origin: CellIndex, k: i32) -> Result<Vec<(CellIndex, i32)>> {
  decode(origin)?;
  let size = max_k_ring_size(k)?;

  let mut out = Vec::with_capacity(usize::try_from(size).unwrap_or(0));
  match k_ring_spiral(origin, k, &mut out) {
    Ok(()) => {
      let mut seen = HashSet::with_capacity(out.len());
      if out.iter().all(|(cell, _)| seen.insert(*cell)) {
        trace!(?origin, k, cells = out.len(), "k-ring by spiral walk");
        return Ok(out);
      }
      debug!(?origin, k, "spiral walk revisited a cell, falling back to breadth-first walk");
    }
    Err(GridError::PentagonDistortion) => {
      debug!(?origin, k, "pentagon met in spiral walk, falling back to breadth-first walk");
    }
    Err(e) => return Err(e),
  }
  k_ring_breadth_first(origin, k)
}

/// Every cell within grid distance `k` of `origin`, origin first.
///
/// # Errors
///
/// `MalformedIndex` for an invalid origin, `DomainError` for a negative `k`.
pub fn k_ring(origin: CellIndex, k: i32) -> Result<Vec<CellIndex>> {
  Ok(k_ring_distances(origin, k)?.into_iter().map(|(cell, _)| cell).collect())
}

fn grid_ring_walk(origin: CellIndex, k: i32) -> Result<Vec<CellIndex>> {
  if is_pentagon(origin) {
    return Err(GridError::PentagonDistortion);
  }

  let mut current = origin;
  let mut rotations = 0;
  for _ in 0..k {
    current = neighbor_rotations(current, NEXT_RING_DIRECTION, &mut rotations)?;
    if is_pentagon(current) {
      return Err(GridError::PentagonDistortion);
    }
  }

  let first = current;
  let mut out = Vec::with_capacity(6 * k as usize);
  out.push(current);
  for (side, dir) in RING_SIDES.into_iter().enumerate() {
    for pos in 0..k {
      current = neighbor_rotations(current, dir, &mut rotations)?;
      // the final step returns to the first cell
      if side == 5 && pos == k - 1 {
        continue;
      }
      out.push(current);
      if is_pentagon(current) {
        return Err(GridError::PentagonDistortion);
      }
    }
  }

  if current != first {
    return Err(GridError::PentagonDistortion);
  }
  Ok(out)
}

/// Cells at exactly grid distance `k` from `origin`.
///
/// Walks the ring directly when no pentagon interferes and otherwise filters
/// the full disk. Ring order is unspecified.
pub fn grid_ring(origin: CellIndex, k: i32) -> Result<Vec<CellIndex>> {
  decode(origin)?;
  if k < 0 {
    return Err(GridError::DomainError);
  }
  if k == 0 {
    return Ok(vec![origin]);
  }
  match grid_ring_walk(origin, k) {
    Ok(ring) => Ok(ring),
    Err(GridError::PentagonDistortion) => {
      debug!(?origin, k, "pentagon met in ring walk, filtering the disk instead");
      Ok(
        k_ring_distances(origin, k)?
          .into_iter()
          .filter_map(|(cell, d)| (d == k).then_some(cell))
          .collect(),
      )
    }
    Err(e) => Err(e),
  }
}

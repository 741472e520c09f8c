// src/traversal/distance.rs

use crate::error::Result;
use crate::local_ij::cell_to_local_ijk;
use crate::types::CellIndex;

/// Minimum number of neighbour steps between two cells of the same resolution.
///
/// Both cells are placed in the local frame of `origin`, so this fails where
/// that frame fails: across non-adjacent base cells or pentagon distortion.
///
/// # Errors
///
/// `MalformedIndex`, `ResolutionMismatch`, `TooFar` or `PentagonDistortion`.
pub fn grid_distance(origin: CellIndex, destination: CellIndex) -> Result<i64> {
  let origin_ijk = cell_to_local_ijk(origin, origin)?;
  let destination_ijk = cell_to_local_ijk(origin, destination)?;
  Ok(i64::from(origin_ijk.distance(&destination_ijk)))
}

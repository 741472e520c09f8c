// src/traversal/grid_path.rs

use crate::error::Result;
use crate::local_ij::{cell_to_local_ijk, local_ijk_to_cell};
use crate::traversal::distance::grid_distance;
use crate::types::CellIndex;

use tracing::trace;

/// Number of cells [`grid_path_cells`] returns: the grid distance plus one.
pub fn grid_path_cells_size(start: CellIndex, end: CellIndex) -> Result<i64> {
  grid_distance(start, end).map(|d| d + 1)
}

/// A shortest path of cells from `start` to `end`, both included.
///
/// The path is the rounded straight line between the two cells in `start`'s
/// local frame, so every consecutive pair is adjacent. It fails wherever
/// [`grid_distance`] fails, and near pentagons it may fail even then.
pub fn grid_path_cells(start: CellIndex, end: CellIndex) -> Result<Vec<CellIndex>> {
  let start_cube = cell_to_local_ijk(start, start)?.to_cube();
  let end_cube = cell_to_local_ijk(start, end)?.to_cube();

  let line = start_cube.line_to(&end_cube);
  trace!(?start, ?end, len = line.len(), "grid path");
  line
    .into_iter()
    .map(|cube| local_ijk_to_cell(start, cube.to_ijk()))
    .collect()
}

// src/measures.rs
//! Exact cell areas on the unit sphere and on the Earth.

use crate::constants::EARTH_RADIUS_KM;
use crate::error::Result;
use crate::geo::great_circle_distance_rads;
use crate::indexing::{cell_to_boundary, cell_to_geo};
use crate::types::{CellIndex, GeoCoord};

/// Area of a spherical triangle on the unit sphere from its side lengths
/// (L'Huilier's theorem).
fn triangle_edge_lengths_to_area(a: f64, b: f64, c: f64) -> f64 {
  let s = (a + b + c) / 2.0;
  let t = (s / 2.0).tan() * ((s - a) / 2.0).tan() * ((s - b) / 2.0).tan() * ((s - c) / 2.0).tan();
  4.0 * t.max(0.0).sqrt().atan()
}

fn triangle_area(a: &GeoCoord, b: &GeoCoord, c: &GeoCoord) -> f64 {
  triangle_edge_lengths_to_area(
    great_circle_distance_rads(a, b),
    great_circle_distance_rads(b, c),
    great_circle_distance_rads(c, a),
  )
}

/// Area of a cell in steradians.
///
/// Sums the triangles fanned out from the cell centre over each boundary edge.
pub fn cell_area_rads2(cell: CellIndex) -> Result<f64> {
  let center = cell_to_geo(cell)?;
  let boundary = cell_to_boundary(cell)?;
  let verts = boundary.vertices();
  let n = verts.len();
  Ok(
    (0..n)
      .map(|i| triangle_area(&verts[i], &verts[(i + 1) % n], &center))
      .sum(),
  )
}

pub fn cell_area_km2(cell: CellIndex) -> Result<f64> {
  Ok(cell_area_rads2(cell)? * EARTH_RADIUS_KM * EARTH_RADIUS_KM)
}

pub fn cell_area_m2(cell: CellIndex) -> Result<f64> {
  Ok(cell_area_km2(cell)? * 1_000_000.0)
}

//! Core value types of the grid.

use crate::constants::MAX_CELL_BNDRY_VERTS;
use crate::error::GridError;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use serde_repr::{Deserialize_repr, Serialize_repr};

/// Opaque 64-bit handle identifying one cell at one resolution.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CellIndex(pub u64);

/// The all-zero handle. Never a valid cell.
pub const NULL_INDEX: CellIndex = CellIndex(0);

/// Latitude/longitude in radians.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoCoord {
  /// Latitude in radians.
  pub lat: f64,
  /// Longitude in radians.
  pub lng: f64,
}

impl GeoCoord {
  #[must_use]
  pub const fn new(lat: f64, lng: f64) -> Self {
    Self { lat, lng }
  }

  /// Builds a coordinate from decimal degrees.
  #[must_use]
  pub fn from_degrees(lat_degs: f64, lng_degs: f64) -> Self {
    Self {
      lat: lat_degs.to_radians(),
      lng: lng_degs.to_radians(),
    }
  }

  #[must_use]
  pub fn lat_degrees(&self) -> f64 {
    self.lat.to_degrees()
  }

  #[must_use]
  pub fn lng_degrees(&self) -> f64 {
    self.lng.to_degrees()
  }
}

/// Ordered vertices of a cell boundary, counter-clockwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellBoundary {
  num_verts: usize,
  verts: [GeoCoord; MAX_CELL_BNDRY_VERTS],
}

impl Default for CellBoundary {
  fn default() -> Self {
    Self {
      num_verts: 0,
      verts: [GeoCoord::default(); MAX_CELL_BNDRY_VERTS],
    }
  }
}

impl CellBoundary {
  /// Vertices in counter-clockwise order.
  #[must_use]
  pub fn vertices(&self) -> &[GeoCoord] {
    &self.verts[..self.num_verts]
  }

  #[must_use]
  pub fn len(&self) -> usize {
    self.num_verts
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.num_verts == 0
  }

  pub(crate) fn push(&mut self, vertex: GeoCoord) {
    if self.num_verts < MAX_CELL_BNDRY_VERTS {
      self.verts[self.num_verts] = vertex;
      self.num_verts += 1;
    }
  }
}

/// IJ hexagon coordinates, axes 120 degrees apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CoordIJ {
  pub i: i32,
  pub j: i32,
}

/// IJK hexagon coordinates.
///
/// Each axis is spaced 120 degrees apart. The normalized form has every
/// component non-negative and at least one component zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CoordIJK {
  pub i: i32,
  pub j: i32,
  pub k: i32,
}

/// Cube hexagon coordinates with the invariant `x + y + z == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CubeCoord {
  pub x: i32,
  pub y: i32,
  pub z: i32,
}

/// A discrete IJK position on one icosahedron face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FaceIJK {
  /// Face number, `0..20`.
  pub face: i32,
  /// IJK+ coordinates on that face.
  pub coord: CoordIJK,
}

/// A continuous position on one icosahedron face.
///
/// `local` is the gnomonic coordinate expressed in resolution 0 Class II hex
/// units, with x along the face's i-axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FaceCoord {
  /// Face number, `0..20`.
  pub face: i32,
  /// Face-local planar coordinate.
  pub local: Vec2d,
}

/// 2D floating-point vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2d {
  pub x: f64,
  pub y: f64,
}

/// 3D floating-point vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3d {
  pub x: f64,
  pub y: f64,
  pub z: f64,
}

/// A point on the unit sphere in Cartesian form.
pub type UnitVector3 = Vec3d;

/// Digit values of a cell index; also the six directions to neighbouring cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
pub enum Direction {
  /// Center, or "no movement".
  #[default]
  Center = 0,
  KAxes = 1,
  JAxes = 2,
  JkAxes = 3,
  IAxes = 4,
  IkAxes = 5,
  IjAxes = 6,
  /// Marker for unused digit slots; never a movement.
  InvalidDigit = 7,
}

impl Direction {
  /// The six directions that move to a neighbouring cell.
  pub const NEIGHBORS: [Direction; 6] = [
    Direction::KAxes,
    Direction::JAxes,
    Direction::JkAxes,
    Direction::IAxes,
    Direction::IkAxes,
    Direction::IjAxes,
  ];

  /// Rotates the direction 60 degrees counter-clockwise.
  #[must_use]
  pub const fn rotate60_ccw(self) -> Direction {
    match self {
      Direction::KAxes => Direction::IkAxes,
      Direction::IkAxes => Direction::IAxes,
      Direction::IAxes => Direction::IjAxes,
      Direction::IjAxes => Direction::JAxes,
      Direction::JAxes => Direction::JkAxes,
      Direction::JkAxes => Direction::KAxes,
      other => other,
    }
  }

  /// Rotates the direction 60 degrees clockwise.
  #[must_use]
  pub const fn rotate60_cw(self) -> Direction {
    match self {
      Direction::KAxes => Direction::JkAxes,
      Direction::JkAxes => Direction::JAxes,
      Direction::JAxes => Direction::IjAxes,
      Direction::IjAxes => Direction::IAxes,
      Direction::IAxes => Direction::IkAxes,
      Direction::IkAxes => Direction::KAxes,
      other => other,
    }
  }

  /// `true` for the six directions that move to a neighbour.
  #[must_use]
  pub const fn is_movement(self) -> bool {
    !matches!(self, Direction::Center | Direction::InvalidDigit)
  }

  /// Converts the low three bits of a digit field. Every value is representable.
  #[must_use]
  pub(crate) const fn from_bits(bits: u64) -> Direction {
    match bits & 0b111 {
      0 => Direction::Center,
      1 => Direction::KAxes,
      2 => Direction::JAxes,
      3 => Direction::JkAxes,
      4 => Direction::IAxes,
      5 => Direction::IkAxes,
      6 => Direction::IjAxes,
      _ => Direction::InvalidDigit,
    }
  }
}

impl TryFrom<u8> for Direction {
  type Error = GridError;

  fn try_from(value: u8) -> Result<Self, Self::Error> {
    if value > 7 {
      return Err(GridError::InvalidDigit);
    }
    Ok(Direction::from_bits(u64::from(value)))
  }
}

/// Shape class of a cell.
///
/// Pentagons descend from the 12 pentagonal base cells and lack the K-axis
/// neighbour; traversal branches on this capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellShape {
  Hexagon,
  Pentagon,
}

impl CellShape {
  /// Whether all six neighbour directions exist.
  #[must_use]
  pub const fn has_all_neighbors(self) -> bool {
    matches!(self, CellShape::Hexagon)
  }

  /// The collapsed direction, if any.
  #[must_use]
  pub const fn missing_direction(self) -> Option<Direction> {
    match self {
      CellShape::Hexagon => None,
      CellShape::Pentagon => Some(Direction::KAxes),
    }
  }

  /// Number of boundary vertices of the cell ignoring edge-crossing vertices.
  #[must_use]
  pub const fn vertex_count(self) -> usize {
    match self {
      CellShape::Hexagon => 6,
      CellShape::Pentagon => 5,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_direction_rotations_cycle() {
    for dir in Direction::NEIGHBORS {
      let mut ccw = dir;
      let mut cw = dir;
      for _ in 0..6 {
        ccw = ccw.rotate60_ccw();
        cw = cw.rotate60_cw();
      }
      assert_eq!(ccw, dir, "six ccw rotations return to {dir:?}");
      assert_eq!(cw, dir, "six cw rotations return to {dir:?}");
      assert_eq!(dir.rotate60_ccw().rotate60_cw(), dir);
    }
    assert_eq!(Direction::Center.rotate60_ccw(), Direction::Center);
    assert_eq!(Direction::InvalidDigit.rotate60_cw(), Direction::InvalidDigit);
  }

  #[test]
  fn test_direction_try_from() {
    assert_eq!(Direction::try_from(0), Ok(Direction::Center));
    assert_eq!(Direction::try_from(5), Ok(Direction::IkAxes));
    assert_eq!(Direction::try_from(7), Ok(Direction::InvalidDigit));
    assert_eq!(Direction::try_from(8), Err(GridError::InvalidDigit));
  }

  #[test]
  fn test_cell_shape_capabilities() {
    assert!(CellShape::Hexagon.has_all_neighbors());
    assert!(!CellShape::Pentagon.has_all_neighbors());
    assert_eq!(CellShape::Pentagon.missing_direction(), Some(Direction::KAxes));
    assert_eq!(CellShape::Hexagon.missing_direction(), None);
    assert_eq!(CellShape::Pentagon.vertex_count(), 5);
  }

  #[test]
  fn test_geo_coord_degrees() {
    let g = GeoCoord::from_degrees(45.0, -90.0);
    assert!((g.lat - std::f64::consts::FRAC_PI_4).abs() < 1e-15);
    assert!((g.lng_degrees() + 90.0).abs() < 1e-12);
  }

  #[test]
  fn test_boundary_push_caps_at_capacity() {
    let mut b = CellBoundary::default();
    assert!(b.is_empty());
    for _ in 0..(MAX_CELL_BNDRY_VERTS + 3) {
      b.push(GeoCoord::new(0.1, 0.2));
    }
    assert_eq!(b.len(), MAX_CELL_BNDRY_VERTS);
  }
}

// src/coords/ijk.rs

use crate::constants::{MAX_RES, M_SQRT3_2};
use crate::coords::face_ijk::face_coord_to_hex2d;
use crate::error::{GridError, Result};
use crate::types::{CoordIJ, CoordIJK, CubeCoord, Direction, FaceCoord, Vec2d};
use std::ops::{Add, Sub};

/// IJK unit vectors indexed by direction digit.
#[rustfmt::skip]
pub(crate) const UNIT_VECS: [CoordIJK; 7] = [
  CoordIJK { i: 0, j: 0, k: 0 },
  CoordIJK { i: 0, j: 0, k: 1 },
  CoordIJK { i: 0, j: 1, k: 0 },
  CoordIJK { i: 0, j: 1, k: 1 },
  CoordIJK { i: 1, j: 0, k: 0 },
  CoordIJK { i: 1, j: 0, k: 1 },
  CoordIJK { i: 1, j: 1, k: 0 },
];

/// Directions in counter-clockwise order, used to walk rings.
const RING_WALK: [Direction; 6] = [
  Direction::KAxes,
  Direction::IkAxes,
  Direction::IAxes,
  Direction::IjAxes,
  Direction::JAxes,
  Direction::JkAxes,
];

impl Add for CoordIJK {
  type Output = CoordIJK;

  fn add(self, rhs: CoordIJK) -> CoordIJK {
    CoordIJK::new(self.i + rhs.i, self.j + rhs.j, self.k + rhs.k)
  }
}

impl Sub for CoordIJK {
  type Output = CoordIJK;

  fn sub(self, rhs: CoordIJK) -> CoordIJK {
    CoordIJK::new(self.i - rhs.i, self.j - rhs.j, self.k - rhs.k)
  }
}

/// Combines three basis vectors: `i * iv + j * jv + k * kv`, normalized.
#[inline]
fn apply_basis(c: &CoordIJK, iv: CoordIJK, jv: CoordIJK, kv: CoordIJK) -> CoordIJK {
  (iv.scale(c.i) + jv.scale(c.j) + kv.scale(c.k)).normalize()
}

/// Overflow-checked [`apply_basis`].
fn checked_apply_basis(c: &CoordIJK, iv: CoordIJK, jv: CoordIJK, kv: CoordIJK) -> Option<CoordIJK> {
  let (ci, cj, ck) = (i64::from(c.i), i64::from(c.j), i64::from(c.k));
  let combine = |a: i32, b: i32, d: i32| ci * i64::from(a) + cj * i64::from(b) + ck * i64::from(d);
  CoordIJK::new(
    i32::try_from(combine(iv.i, jv.i, kv.i)).ok()?,
    i32::try_from(combine(iv.j, jv.j, kv.j)).ok()?,
    i32::try_from(combine(iv.k, jv.k, kv.k)).ok()?,
  )
  .checked_normalize()
}

impl CoordIJK {
  #[must_use]
  pub const fn new(i: i32, j: i32, k: i32) -> Self {
    Self { i, j, k }
  }

  #[inline]
  #[must_use]
  pub(crate) fn scale(self, factor: i32) -> CoordIJK {
    CoordIJK::new(self.i * factor, self.j * factor, self.k * factor)
  }

  /// Reduces to the form with non-negative components and at least one zero.
  #[inline]
  #[must_use]
  pub fn normalize(self) -> CoordIJK {
    let CoordIJK { mut i, mut j, mut k } = self;
    if i < 0 {
      j -= i;
      k -= i;
      i = 0;
    }
    if j < 0 {
      i -= j;
      k -= j;
      j = 0;
    }
    if k < 0 {
      i -= k;
      j -= k;
      k = 0;
    }
    let min = i.min(j).min(k);
    CoordIJK::new(i - min, j - min, k - min)
  }

  /// Overflow-checked [`CoordIJK::normalize`].
  #[must_use]
  pub(crate) fn checked_normalize(self) -> Option<CoordIJK> {
    let i = i64::from(self.i);
    let j = i64::from(self.j);
    let k = i64::from(self.k);
    let min = i.min(j).min(k);
    Some(CoordIJK::new(
      i32::try_from(i - min).ok()?,
      i32::try_from(j - min).ok()?,
      i32::try_from(k - min).ok()?,
    ))
  }

  /// The digit of a unit vector, or `InvalidDigit` for anything else.
  #[must_use]
  pub(crate) fn to_unit_digit(self) -> Direction {
    let c = self.normalize();
    UNIT_VECS
      .iter()
      .position(|u| *u == c)
      .map_or(Direction::InvalidDigit, |d| Direction::from_bits(d as u64))
  }

  /// The adjacent coordinate in `dir`. `Center` and `InvalidDigit` do not move.
  #[inline]
  #[must_use]
  pub(crate) fn neighbor(self, dir: Direction) -> CoordIJK {
    if dir.is_movement() {
      (self + UNIT_VECS[dir as usize]).normalize()
    } else {
      self
    }
  }

  /// Parent coordinate of a Class III cell in the Class II grid one level coarser.
  #[must_use]
  pub(crate) fn up_ap7(self) -> CoordIJK {
    let i = f64::from(self.i - self.k);
    let j = f64::from(self.j - self.k);
    CoordIJK::new(((3.0 * i - j) / 7.0).round() as i32, ((i + 2.0 * j) / 7.0).round() as i32, 0).normalize()
  }

  /// Parent coordinate of a Class II cell in the Class III grid one level coarser.
  #[must_use]
  pub(crate) fn up_ap7r(self) -> CoordIJK {
    let i = f64::from(self.i - self.k);
    let j = f64::from(self.j - self.k);
    CoordIJK::new(((2.0 * i + j) / 7.0).round() as i32, ((3.0 * j - i) / 7.0).round() as i32, 0).normalize()
  }

  /// Overflow-checked [`CoordIJK::up_ap7`] for caller-supplied coordinates.
  #[must_use]
  pub(crate) fn checked_up_ap7(self) -> Option<CoordIJK> {
    let i = i64::from(self.i) - i64::from(self.k);
    let j = i64::from(self.j) - i64::from(self.k);
    let ni = ((3 * i - j) as f64 / 7.0).round() as i64;
    let nj = ((i + 2 * j) as f64 / 7.0).round() as i64;
    CoordIJK::new(i32::try_from(ni).ok()?, i32::try_from(nj).ok()?, 0).checked_normalize()
  }

  #[must_use]
  pub(crate) fn checked_up_ap7r(self) -> Option<CoordIJK> {
    let i = i64::from(self.i) - i64::from(self.k);
    let j = i64::from(self.j) - i64::from(self.k);
    let ni = ((2 * i + j) as f64 / 7.0).round() as i64;
    let nj = ((3 * j - i) as f64 / 7.0).round() as i64;
    CoordIJK::new(i32::try_from(ni).ok()?, i32::try_from(nj).ok()?, 0).checked_normalize()
  }

  /// Centre child coordinate in the next finer Class III grid.
  #[must_use]
  pub(crate) fn down_ap7(self) -> CoordIJK {
    apply_basis(&self, CoordIJK::new(3, 0, 1), CoordIJK::new(1, 3, 0), CoordIJK::new(0, 1, 3))
  }

  /// Centre child coordinate in the next finer Class II grid.
  #[must_use]
  pub(crate) fn down_ap7r(self) -> CoordIJK {
    apply_basis(&self, CoordIJK::new(3, 1, 0), CoordIJK::new(0, 3, 1), CoordIJK::new(1, 0, 3))
  }

  /// Overflow-checked [`CoordIJK::down_ap7`].
  #[must_use]
  pub(crate) fn checked_down_ap7(self) -> Option<CoordIJK> {
    checked_apply_basis(&self, CoordIJK::new(3, 0, 1), CoordIJK::new(1, 3, 0), CoordIJK::new(0, 1, 3))
  }

  #[must_use]
  pub(crate) fn checked_down_ap7r(self) -> Option<CoordIJK> {
    checked_apply_basis(&self, CoordIJK::new(3, 1, 0), CoordIJK::new(0, 3, 1), CoordIJK::new(1, 0, 3))
  }

  /// Aperture 3 refinement, counter-clockwise.
  #[must_use]
  pub(crate) fn down_ap3(self) -> CoordIJK {
    apply_basis(&self, CoordIJK::new(2, 0, 1), CoordIJK::new(1, 2, 0), CoordIJK::new(0, 1, 2))
  }

  /// Aperture 3 refinement, clockwise.
  #[must_use]
  pub(crate) fn down_ap3r(self) -> CoordIJK {
    apply_basis(&self, CoordIJK::new(2, 1, 0), CoordIJK::new(0, 2, 1), CoordIJK::new(1, 0, 2))
  }

  #[must_use]
  pub(crate) fn rotate60_ccw(self) -> CoordIJK {
    apply_basis(&self, CoordIJK::new(1, 1, 0), CoordIJK::new(0, 1, 1), CoordIJK::new(1, 0, 1))
  }

  #[must_use]
  pub(crate) fn rotate60_cw(self) -> CoordIJK {
    apply_basis(&self, CoordIJK::new(1, 0, 1), CoordIJK::new(1, 1, 0), CoordIJK::new(0, 1, 1))
  }

  /// Centre of the hexagon in the planar hex grid of its resolution.
  #[must_use]
  pub(crate) fn to_hex2d(self) -> Vec2d {
    let i = f64::from(self.i - self.k);
    let j = f64::from(self.j - self.k);
    Vec2d::new(i - 0.5 * j, j * M_SQRT3_2)
  }

  /// The hexagon containing a planar point, by cube rounding.
  #[must_use]
  pub(crate) fn from_hex2d(v: &Vec2d) -> CoordIJK {
    let j = v.y / M_SQRT3_2;
    let i = v.x + 0.5 * j;
    CubeCoord::round(-i, j, i - j).to_ijk()
  }

  /// Grid distance between two coordinates on the same face.
  #[must_use]
  pub fn distance(&self, other: &CoordIJK) -> i32 {
    self.to_cube().distance(&other.to_cube())
  }

  #[must_use]
  pub fn to_ij(self) -> CoordIJ {
    CoordIJ {
      i: self.i - self.k,
      j: self.j - self.k,
    }
  }

  /// IJK form of an IJ coordinate; `None` if normalization would overflow.
  #[must_use]
  pub fn from_ij(ij: CoordIJ) -> Option<CoordIJK> {
    CoordIJK::new(ij.i, ij.j, 0).checked_normalize()
  }

  #[must_use]
  pub fn to_cube(self) -> CubeCoord {
    let i = self.i - self.k;
    let j = self.j - self.k;
    CubeCoord { x: -i, y: j, z: i - j }
  }

  #[must_use]
  pub fn from_cube(c: CubeCoord) -> CoordIJK {
    c.to_ijk()
  }
}

/// The lattice hexagon containing a face coordinate at `res`.
///
/// `fc.local` is scaled into the resolution's grid, rotated into the Class III
/// orientation on odd resolutions, and snapped by cube rounding.
pub fn to_hex_coord(fc: &FaceCoord, res: i32) -> Result<CubeCoord> {
  if !(0..=MAX_RES).contains(&res) {
    return Err(GridError::InvalidResolution);
  }
  if !fc.local.x.is_finite() || !fc.local.y.is_finite() {
    return Err(GridError::DomainError);
  }
  let v = face_coord_to_hex2d(fc, res);
  Ok(CoordIJK::from_hex2d(&v).to_cube())
}

impl CubeCoord {
  #[must_use]
  pub const fn new(x: i32, y: i32, z: i32) -> Self {
    Self { x, y, z }
  }

  /// Nearest lattice point to a fractional cube coordinate.
  ///
  /// Each axis is rounded and the axis with the largest rounding error is
  /// recomputed from the other two so that `x + y + z == 0` holds.
  #[must_use]
  pub fn round(x: f64, y: f64, z: f64) -> CubeCoord {
    let mut rx = x.round();
    let mut ry = y.round();
    let mut rz = z.round();

    let dx = (rx - x).abs();
    let dy = (ry - y).abs();
    let dz = (rz - z).abs();

    if dx > dy && dx > dz {
      rx = -ry - rz;
    } else if dy > dz {
      ry = -rx - rz;
    } else {
      rz = -rx - ry;
    }

    CubeCoord::new(rx as i32, ry as i32, rz as i32)
  }

  #[must_use]
  pub fn to_ijk(self) -> CoordIJK {
    CoordIJK::new(-self.x, self.y, 0).normalize()
  }

  /// Unit step in a direction.
  fn step(dir: Direction) -> Result<CubeCoord> {
    if dir.is_movement() {
      Ok(UNIT_VECS[dir as usize].to_cube())
    } else {
      Err(GridError::InvalidDirection)
    }
  }

  /// Adjacent lattice coordinate in `dir`.
  ///
  /// A bare lattice has no pentagons; callers working on cells check the
  /// cell's shape first.
  pub fn neighbor(&self, dir: Direction) -> Result<CubeCoord> {
    let s = CubeCoord::step(dir)?;
    Ok(*self + s)
  }

  #[must_use]
  pub fn distance(&self, other: &CubeCoord) -> i32 {
    (self.x - other.x).abs().max((self.y - other.y).abs()).max((self.z - other.z).abs())
  }

  /// Every lattice coordinate within distance `k`, each exactly once.
  #[must_use]
  pub fn k_ring(&self, k: i32) -> Vec<CubeCoord> {
    let k = k.max(0);
    let mut out = Vec::with_capacity((3 * k * (k + 1) + 1) as usize);
    for dx in -k..=k {
      for dy in (-k).max(-dx - k)..=k.min(-dx + k) {
        out.push(CubeCoord::new(self.x + dx, self.y + dy, self.z - dx - dy));
      }
    }
    out
  }

  /// Lattice coordinates at exactly distance `k`, walked counter-clockwise.
  #[must_use]
  pub fn ring(&self, k: i32) -> Vec<CubeCoord> {
    if k <= 0 {
      return vec![*self];
    }
    let steps: Vec<CubeCoord> = RING_WALK.iter().map(|d| UNIT_VECS[*d as usize].to_cube()).collect();
    let mut out = Vec::with_capacity(6 * k as usize);
    let mut cur = *self + steps[4].scale(k);
    for step in &steps {
      for _ in 0..k {
        out.push(cur);
        cur = cur + *step;
      }
    }
    out
  }

  /// Cells on the straight line from `self` to `end`, both ends included.
  #[must_use]
  pub fn line_to(&self, end: &CubeCoord) -> Vec<CubeCoord> {
    let n = self.distance(end);
    if n == 0 {
      return vec![*self];
    }
    let nf = f64::from(n);
    let sx = f64::from(end.x - self.x) / nf;
    let sy = f64::from(end.y - self.y) / nf;
    let sz = f64::from(end.z - self.z) / nf;
    (0..=n)
      .map(|step| {
        let t = f64::from(step);
        CubeCoord::round(
          f64::from(self.x) + sx * t,
          f64::from(self.y) + sy * t,
          f64::from(self.z) + sz * t,
        )
      })
      .collect()
  }

  fn scale(self, factor: i32) -> CubeCoord {
    CubeCoord::new(self.x * factor, self.y * factor, self.z * factor)
  }
}

impl Add for CubeCoord {
  type Output = CubeCoord;

  fn add(self, rhs: CubeCoord) -> CubeCoord {
    CubeCoord::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashSet;

  #[test]
  fn test_normalize() {
    assert_eq!(CoordIJK::new(2, 3, 4).normalize(), CoordIJK::new(0, 1, 2), "positive");
    assert_eq!(CoordIJK::new(-2, 3, 4).normalize(), CoordIJK::new(0, 5, 6), "negative i");
    assert_eq!(CoordIJK::new(2, -3, 4).normalize(), CoordIJK::new(5, 0, 7), "negative j");
    assert_eq!(CoordIJK::new(0, 0, 0).normalize(), CoordIJK::default());
    assert_eq!(CoordIJK::new(i32::MIN, 0, 0).checked_normalize(), None, "overflow detected");
  }

  #[test]
  fn test_unit_digit() {
    for (d, v) in UNIT_VECS.iter().enumerate() {
      assert_eq!(v.to_unit_digit() as usize, d);
    }
    assert_eq!(CoordIJK::new(2, 0, 0).to_unit_digit(), Direction::InvalidDigit);
    assert_eq!(CoordIJK::new(2, 2, 2).to_unit_digit(), Direction::Center, "normalizes first");
  }

  #[test]
  fn test_neighbor() {
    let c = CoordIJK::default();
    assert_eq!(c.neighbor(Direction::IAxes), CoordIJK::new(1, 0, 0));
    assert_eq!(c.neighbor(Direction::Center), c);
    assert_eq!(c.neighbor(Direction::InvalidDigit), c);
    let i = CoordIJK::new(1, 0, 0);
    assert_eq!(i.neighbor(Direction::JkAxes), CoordIJK::default(), "opposite directions cancel");
  }

  #[test]
  fn test_aperture_7_round_trip() {
    let c = CoordIJK::new(2, 1, 0);
    assert_eq!(c.down_ap7().up_ap7(), c, "class III");
    assert_eq!(c.down_ap7r().up_ap7r(), c, "class II");
    assert_eq!(c.checked_up_ap7(), Some(c.up_ap7()));
    assert_eq!(c.checked_up_ap7r(), Some(c.up_ap7r()));
    assert_eq!(CoordIJK::new(1, 0, 0).down_ap7(), CoordIJK::new(3, 0, 1));
    assert_eq!(CoordIJK::new(1, 0, 0).down_ap7r(), CoordIJK::new(3, 1, 0));
  }

  #[test]
  fn test_checked_down_ap7() {
    for c in [CoordIJK::new(2, 1, 0), CoordIJK::new(0, 5, 3), CoordIJK::new(40, 0, 17)] {
      assert_eq!(c.checked_down_ap7(), Some(c.down_ap7()), "{c:?}");
      assert_eq!(c.checked_down_ap7r(), Some(c.down_ap7r()), "{c:?}");
    }
    let huge = CoordIJK::new(i32::MAX, 0, 0);
    assert_eq!(huge.checked_down_ap7(), None, "class III overflow");
    assert_eq!(huge.checked_down_ap7r(), None, "class II overflow");
    assert_eq!(CoordIJK::new(0, i32::MAX / 2, 0).checked_down_ap7(), None);
  }

  #[test]
  fn test_aperture_3() {
    assert_eq!(CoordIJK::new(1, 0, 0).down_ap3(), CoordIJK::new(2, 0, 1));
    assert_eq!(CoordIJK::new(1, 0, 0).down_ap3r(), CoordIJK::new(2, 1, 0));
    assert_eq!(CoordIJK::default().down_ap3(), CoordIJK::default());
  }

  #[test]
  fn test_rotations() {
    let i = CoordIJK::new(1, 0, 0);
    assert_eq!(i.rotate60_ccw(), CoordIJK::new(1, 1, 0));
    assert_eq!(i.rotate60_cw(), CoordIJK::new(1, 0, 1));
    let mut c = CoordIJK::new(3, 1, 0);
    for _ in 0..6 {
      c = c.rotate60_ccw();
    }
    assert_eq!(c, CoordIJK::new(3, 1, 0), "six rotations are identity");
    for dir in Direction::NEIGHBORS {
      let v = UNIT_VECS[dir as usize];
      assert_eq!(v.rotate60_ccw().to_unit_digit(), dir.rotate60_ccw());
      assert_eq!(v.rotate60_cw().to_unit_digit(), dir.rotate60_cw());
    }
  }

  #[test]
  fn test_hex2d_round_trip() {
    for c in CoordIJK::default().to_cube().k_ring(4) {
      let ijk = c.to_ijk();
      assert_eq!(CoordIJK::from_hex2d(&ijk.to_hex2d()), ijk, "centre of {ijk:?}");
      let off = ijk.to_hex2d();
      let nudged = Vec2d::new(off.x + 0.3, off.y - 0.2);
      assert_eq!(CoordIJK::from_hex2d(&nudged), ijk, "inside {ijk:?}");
    }
    assert_eq!(CoordIJK::from_hex2d(&Vec2d::new(0.9, 0.0)), CoordIJK::new(1, 0, 0));
    assert_eq!(CoordIJK::from_hex2d(&Vec2d::new(-0.9, 0.0)), CoordIJK::new(0, 1, 1));
  }

  #[test]
  fn test_ij_and_cube_round_trip() {
    for c in CoordIJK::default().to_cube().k_ring(3) {
      assert_eq!(c.x + c.y + c.z, 0);
      let ijk = c.to_ijk();
      assert_eq!(CoordIJK::from_ij(ijk.to_ij()), Some(ijk));
      assert_eq!(ijk.to_cube(), c);
      assert_eq!(CoordIJK::from_cube(c), ijk);
    }
  }

  #[test]
  fn test_distance() {
    let origin = CoordIJK::default();
    assert_eq!(origin.distance(&origin), 0);
    for dir in Direction::NEIGHBORS {
      assert_eq!(origin.distance(&origin.neighbor(dir)), 1);
    }
    assert_eq!(origin.distance(&CoordIJK::new(2, 0, 0)), 2);
    assert_eq!(origin.distance(&CoordIJK::new(2, 1, 0)), 2);
  }

  #[test]
  fn test_cube_round_fixes_largest_error() {
    assert_eq!(CubeCoord::round(0.1, -0.1, 0.0), CubeCoord::new(0, 0, 0));
    let c = CubeCoord::round(0.7, -0.4, -0.3);
    assert_eq!(c.x + c.y + c.z, 0, "lattice invariant");
    assert_eq!(c, CubeCoord::new(1, -1, 0), "y had the largest error");
  }

  #[test]
  fn test_cube_neighbor() {
    let c = CubeCoord::default();
    for dir in Direction::NEIGHBORS {
      let n = c.neighbor(dir).unwrap();
      assert_eq!(c.distance(&n), 1, "{dir:?}");
      assert_eq!(n.to_ijk(), CoordIJK::default().neighbor(dir));
    }
    assert_eq!(c.neighbor(Direction::Center), Err(GridError::InvalidDirection));
    assert_eq!(c.neighbor(Direction::InvalidDigit), Err(GridError::InvalidDirection));
  }

  #[test]
  fn test_k_ring_and_ring() {
    let center = CubeCoord::new(2, -1, -1);
    for k in 0..5 {
      let disk = center.k_ring(k);
      assert_eq!(disk.len() as i32, 3 * k * (k + 1) + 1, "disk size at {k}");
      let unique: HashSet<_> = disk.iter().copied().collect();
      assert_eq!(unique.len(), disk.len(), "no duplicates at {k}");
      assert!(disk.iter().all(|c| center.distance(c) <= k));

      let ring = center.ring(k);
      assert_eq!(ring.len() as i32, if k == 0 { 1 } else { 6 * k }, "ring size at {k}");
      assert!(ring.iter().all(|c| center.distance(c) == k), "ring at {k} at distance k");
      for pair in ring.windows(2) {
        assert_eq!(pair[0].distance(&pair[1]), 1, "ring walk is contiguous");
      }
    }
  }

  #[test]
  fn test_line_to() {
    let a = CubeCoord::default();
    let b = CubeCoord::new(3, -1, -2);
    let line = a.line_to(&b);
    assert_eq!(line.len(), 4);
    assert_eq!(line.first(), Some(&a));
    assert_eq!(line.last(), Some(&b));
    for pair in line.windows(2) {
      assert_eq!(pair[0].distance(&pair[1]), 1);
    }
    assert_eq!(a.line_to(&a), vec![a]);
  }

  #[test]
  fn test_to_hex_coord() {
    let fc = FaceCoord {
      face: 0,
      local: Vec2d::new(0.0, 0.0),
    };
    assert_eq!(to_hex_coord(&fc, 5), Ok(CubeCoord::default()));
    assert_eq!(to_hex_coord(&fc, 16), Err(GridError::InvalidResolution));
    let off = FaceCoord {
      face: 0,
      local: Vec2d::new(1.0, 0.0),
    };
    assert_eq!(to_hex_coord(&off, 0).map(CubeCoord::to_ijk), Ok(CoordIJK::new(1, 0, 0)));
    assert_eq!(to_hex_coord(&off, 2).map(CubeCoord::to_ijk), Ok(CoordIJK::new(7, 0, 0)));
    let nan = FaceCoord {
      face: 0,
      local: Vec2d::new(f64::NAN, 0.0),
    };
    assert_eq!(to_hex_coord(&nan, 1), Err(GridError::DomainError));
  }
}

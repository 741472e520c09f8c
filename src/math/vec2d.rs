// src/math/vec2d.rs

use crate::types::Vec2d;

/// Tolerance for treating two planar points as the same vertex.
const ALMOST_EQUAL_TOLERANCE: f64 = f32::EPSILON as f64;

impl Vec2d {
  #[must_use]
  pub const fn new(x: f64, y: f64) -> Self {
    Self { x, y }
  }

  /// Magnitude of the vector.
  #[inline]
  #[must_use]
  pub fn mag(&self) -> f64 {
    self.x.hypot(self.y)
  }

  /// Intersection of the line through `p0`,`p1` with the line through `p2`,`p3`.
  ///
  /// The lines must not be parallel.
  #[inline]
  #[must_use]
  pub fn intersect(p0: &Vec2d, p1: &Vec2d, p2: &Vec2d, p3: &Vec2d) -> Vec2d {
    let s1 = Vec2d::new(p1.x - p0.x, p1.y - p0.y);
    let s2 = Vec2d::new(p3.x - p2.x, p3.y - p2.y);

    let t = (s2.x * (p0.y - p2.y) - s2.y * (p0.x - p2.x)) / (-s2.x * s1.y + s1.x * s2.y);

    Vec2d::new(p0.x + t * s1.x, p0.y + t * s1.y)
  }

  /// Component-wise comparison at single-precision tolerance.
  #[inline]
  #[must_use]
  pub fn almost_equals(&self, other: &Vec2d) -> bool {
    (self.x - other.x).abs() < ALMOST_EQUAL_TOLERANCE && (self.y - other.y).abs() < ALMOST_EQUAL_TOLERANCE
  }
}

// src/math/vec3d.rs

use crate::constants::{M_2PI, M_PI, M_PI_2};
use crate::types::{GeoCoord, Vec3d};

impl Vec3d {
  #[must_use]
  pub const fn new(x: f64, y: f64, z: f64) -> Self {
    Self { x, y, z }
  }

  #[inline]
  #[must_use]
  pub fn dot(&self, other: &Vec3d) -> f64 {
    self.x * other.x + self.y * other.y + self.z * other.z
  }

  /// Square of the Euclidean distance between two points.
  #[inline]
  #[must_use]
  pub fn square_dist(&self, other: &Vec3d) -> f64 {
    let dx = self.x - other.x;
    let dy = self.y - other.y;
    let dz = self.z - other.z;
    dx * dx + dy * dy + dz * dz
  }

  #[inline]
  #[must_use]
  pub fn magnitude(&self) -> f64 {
    self.dot(self).sqrt()
  }
}

/// Cartesian point on the unit sphere for a coordinate.
///
/// Total over finite input; longitude may be any value.
#[inline]
#[must_use]
pub fn to_vector3(geo: &GeoCoord) -> Vec3d {
  let r = geo.lat.cos();
  Vec3d {
    x: geo.lng.cos() * r,
    y: geo.lng.sin() * r,
    z: geo.lat.sin(),
  }
}

/// Coordinate of a point given in Cartesian form.
///
/// The vector need not be unit length. Longitude is reported in `(-pi, pi]`,
/// and is 0 at the poles.
#[must_use]
pub fn to_geo_coord(v: &Vec3d) -> GeoCoord {
  let horizontal = v.x.hypot(v.y);
  let lat = v.z.atan2(horizontal);
  if horizontal == 0.0 {
    return GeoCoord {
      lat: if v.z < 0.0 { -M_PI_2 } else { M_PI_2 },
      lng: 0.0,
    };
  }
  let mut lng = v.y.atan2(v.x);
  if lng <= -M_PI {
    lng += M_2PI;
  }
  GeoCoord { lat, lng }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::constants::EPSILON_RAD;

  #[test]
  fn test_square_dist() {
    let origin = Vec3d::default();
    assert!(origin.square_dist(&origin).abs() < f64::EPSILON, "distance to self is 0");
    assert!((origin.square_dist(&Vec3d::new(1.0, 0.0, 0.0)) - 1.0).abs() < f64::EPSILON);
    assert!((origin.square_dist(&Vec3d::new(0.0, 1.0, 1.0)) - 2.0).abs() < f64::EPSILON);
    assert!((origin.square_dist(&Vec3d::new(1.0, 1.0, 2.0)) - 6.0).abs() < f64::EPSILON);
  }

  #[test]
  fn test_to_vector3_is_on_unit_sphere() {
    let origin = Vec3d::default();
    for (lat, lng) in [(0.0, 0.0), (M_PI_2, 0.0), (-0.7, 2.9), (0.3, -3.1)] {
      let p = to_vector3(&GeoCoord::new(lat, lng));
      assert!((origin.square_dist(&p) - 1.0).abs() < EPSILON_RAD, "({lat}, {lng}) is on the unit sphere");
    }
    let north = to_vector3(&GeoCoord::new(M_PI_2, 0.0));
    assert!((north.z - 1.0).abs() < f64::EPSILON);
    let equator = to_vector3(&GeoCoord::new(0.0, 0.0));
    assert!((equator.square_dist(&north) - 2.0).abs() < EPSILON_RAD);
  }

  #[test]
  fn test_to_geo_coord_round_trip() {
    for (lat, lng) in [(0.1, 0.2), (-1.2, -2.5), (1.5, 3.0), (-0.4, -3.1)] {
      let g = GeoCoord::new(lat, lng);
      let back = to_geo_coord(&to_vector3(&g));
      assert!((back.lat - lat).abs() < 1e-12, "lat survives round trip");
      assert!((back.lng - lng).abs() < 1e-12, "lng survives round trip");
    }
  }

  #[test]
  fn test_to_geo_coord_poles_and_antimeridian() {
    let north = to_geo_coord(&Vec3d::new(0.0, 0.0, 1.0));
    assert_eq!(north, GeoCoord::new(M_PI_2, 0.0));
    let south = to_geo_coord(&Vec3d::new(0.0, 0.0, -2.0));
    assert_eq!(south, GeoCoord::new(-M_PI_2, 0.0));

    let antimeridian = to_geo_coord(&Vec3d::new(-1.0, -0.0, 0.0));
    assert!((antimeridian.lng - M_PI).abs() < f64::EPSILON, "longitude reported as +pi");
  }
}

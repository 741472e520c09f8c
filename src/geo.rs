// src/geo.rs

#[cfg(test)]
use crate::constants::EPSILON_RAD;
use crate::constants::{
  EARTH_RADIUS_KM, EPSILON, HEXAGON_AREA_AVG_KM2, HEXAGON_EDGE_LENGTH_AVG_KM, MAX_RES, M_2PI, M_PI, M_PI_2,
};
use crate::error::{GridError, Result};
use crate::types::GeoCoord;

/// Normalizes radians to `[0, 2pi)`.
#[inline]
#[must_use]
pub(crate) fn pos_angle_rads(rads: f64) -> f64 {
  let mut tmp = if rads < 0.0 { rads + M_2PI } else { rads };
  while tmp >= M_2PI {
    tmp -= M_2PI;
  }
  while tmp < 0.0 {
    tmp += M_2PI;
  }
  tmp
}

/// Wraps longitude into `[-pi, pi]`.
#[inline]
#[must_use]
pub(crate) fn constrain_lng(mut lng: f64) -> f64 {
  while lng > M_PI {
    lng -= M_2PI;
  }
  while lng < -M_PI {
    lng += M_2PI;
  }
  lng
}

#[cfg(test)]
#[inline]
#[must_use]
pub(crate) fn geo_almost_equal_threshold(p1: &GeoCoord, p2: &GeoCoord, threshold: f64) -> bool {
  (p1.lat - p2.lat).abs() < threshold && (p1.lng - p2.lng).abs() < threshold
}

#[cfg(test)]
#[inline]
#[must_use]
pub(crate) fn geo_almost_equal(p1: &GeoCoord, p2: &GeoCoord) -> bool {
  geo_almost_equal_threshold(p1, p2, EPSILON_RAD)
}

/// Azimuth from `p1` to `p2` in radians, clockwise from north.
#[inline]
#[must_use]
pub(crate) fn azimuth_rads(p1: &GeoCoord, p2: &GeoCoord) -> f64 {
  let dlng = p2.lng - p1.lng;
  (p2.lat.cos() * dlng.sin()).atan2(p1.lat.cos() * p2.lat.sin() - p1.lat.sin() * p2.lat.cos() * dlng.cos())
}

fn snap_to_pole(lat: f64) -> Option<GeoCoord> {
  if (lat - M_PI_2).abs() < EPSILON {
    Some(GeoCoord::new(M_PI_2, 0.0))
  } else if (lat + M_PI_2).abs() < EPSILON {
    Some(GeoCoord::new(-M_PI_2, 0.0))
  } else {
    None
  }
}

/// The point at azimuth `az` and angular `distance` from `p1`.
///
/// # Arguments
///
/// * `p1` - Start point.
/// * `az` - Azimuth from `p1` in radians.
/// * `distance` - Angular distance in radians, non-negative.
#[must_use]
pub(crate) fn az_distance_rads(p1: &GeoCoord, az: f64, distance: f64) -> GeoCoord {
  if distance < EPSILON {
    return *p1;
  }

  let az = pos_angle_rads(az);

  // due north or south
  if az < EPSILON || (az - M_PI).abs() < EPSILON {
    let lat = if az < EPSILON { p1.lat + distance } else { p1.lat - distance };
    return snap_to_pole(lat).unwrap_or_else(|| GeoCoord::new(lat, constrain_lng(p1.lng)));
  }

  let sin_lat = (p1.lat.sin() * distance.cos() + p1.lat.cos() * distance.sin() * az.cos()).clamp(-1.0, 1.0);
  let lat = sin_lat.asin();
  if let Some(pole) = snap_to_pole(lat) {
    return pole;
  }

  let sin_lng = (az.sin() * distance.sin() / lat.cos()).clamp(-1.0, 1.0);
  let cos_lng = ((distance.cos() - p1.lat.sin() * lat.sin()) / p1.lat.cos() / lat.cos()).clamp(-1.0, 1.0);
  GeoCoord::new(lat, constrain_lng(p1.lng + sin_lng.atan2(cos_lng)))
}

/// Great circle distance in radians between two coordinates (haversine).
#[must_use]
pub fn great_circle_distance_rads(a: &GeoCoord, b: &GeoCoord) -> f64 {
  let sin_lat = ((b.lat - a.lat) * 0.5).sin();
  let sin_lng = ((b.lng - a.lng) * 0.5).sin();
  let h = (sin_lat * sin_lat + a.lat.cos() * b.lat.cos() * sin_lng * sin_lng).clamp(0.0, 1.0);
  2.0 * h.sqrt().atan2((1.0 - h).sqrt())
}

#[must_use]
pub fn great_circle_distance_km(a: &GeoCoord, b: &GeoCoord) -> f64 {
  great_circle_distance_rads(a, b) * EARTH_RADIUS_KM
}

#[must_use]
pub fn great_circle_distance_m(a: &GeoCoord, b: &GeoCoord) -> f64 {
  great_circle_distance_km(a, b) * 1000.0
}

#[inline]
#[must_use]
pub fn degs_to_rads(degrees: f64) -> f64 {
  degrees.to_radians()
}

#[inline]
#[must_use]
pub fn rads_to_degs(radians: f64) -> f64 {
  radians.to_degrees()
}

fn res_index(res: i32) -> Result<usize> {
  if (0..=MAX_RES).contains(&res) {
    Ok(res as usize)
  } else {
    Err(GridError::InvalidResolution)
  }
}

/// Average hexagon area in km^2 at `res`, pentagons excluded.
pub fn hexagon_area_avg_km2(res: i32) -> Result<f64> {
  Ok(HEXAGON_AREA_AVG_KM2[res_index(res)?])
}

/// Average hexagon area in m^2 at `res`, pentagons excluded.
pub fn hexagon_area_avg_m2(res: i32) -> Result<f64> {
  Ok(hexagon_area_avg_km2(res)? * 1_000_000.0)
}

/// Average hexagon edge length in km at `res`.
pub fn hexagon_edge_length_avg_km(res: i32) -> Result<f64> {
  Ok(HEXAGON_EDGE_LENGTH_AVG_KM[res_index(res)?])
}

pub fn hexagon_edge_length_avg_m(res: i32) -> Result<f64> {
  Ok(hexagon_edge_length_avg_km(res)? * 1000.0)
}

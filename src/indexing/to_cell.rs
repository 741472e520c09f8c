// src/indexing/to_cell.rs

use crate::cell_index::face_ijk_to_cell;
use crate::constants::{EPSILON_RAD, MAX_RES, M_PI_2};
use crate::coords::face_ijk::geo_to_face_ijk;
use crate::error::{GridError, Result};
use crate::types::{CellIndex, GeoCoord};

/// The cell containing `geo` at `res`.
///
/// Longitude may take any finite value. Latitude must lie within the poles;
/// a rounding error of up to `EPSILON_RAD` past a pole is tolerated.
///
/// # Errors
///
/// `InvalidResolution` outside `0..=15`, `DomainError` for non-finite input
/// or a latitude beyond a pole.
pub fn geo_to_cell(geo: &GeoCoord, res: i32) -> Result<CellIndex> {
  if !(0..=MAX_RES).contains(&res) {
    return Err(GridError::InvalidResolution);
  }
  if !geo.lat.is_finite() || !geo.lng.is_finite() || geo.lat.abs() > M_PI_2 + EPSILON_RAD {
    return Err(GridError::DomainError);
  }

  let fijk = geo_to_face_ijk(geo, res)?;
  face_ijk_to_cell(&fijk, res)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::cell_index::{get_resolution, is_valid_cell};

  #[test]
  fn test_geo_to_cell_res_domain() {
    let geo = GeoCoord::from_degrees(37.77, -122.4);
    assert_eq!(geo_to_cell(&geo, -1), Err(GridError::InvalidResolution));
    assert_eq!(geo_to_cell(&geo, 16), Err(GridError::InvalidResolution));
  }

  #[test]
  fn test_geo_to_cell_coord_domain() {
    let bad_lat = GeoCoord::from_degrees(100.0, -122.4);
    assert_eq!(geo_to_cell(&bad_lat, 5), Err(GridError::DomainError));

    let nan_lng = GeoCoord::new(0.0, f64::NAN);
    assert_eq!(geo_to_cell(&nan_lng, 5), Err(GridError::DomainError));

    let inf_lat = GeoCoord::new(f64::INFINITY, 0.0);
    assert_eq!(geo_to_cell(&inf_lat, 5), Err(GridError::DomainError));
  }

  #[test]
  fn test_geo_to_cell_known_values() {
    let geo = GeoCoord::from_degrees(37.775938728915946, -122.41795063018799);
    assert_eq!(geo_to_cell(&geo, 9), Ok(CellIndex(0x8928308280fffff)));

    let city_hall = GeoCoord::from_degrees(37.779265, -122.419277);
    let h5 = geo_to_cell(&city_hall, 5).unwrap();
    assert_eq!(h5, CellIndex(0x85283083fffffff), "res 5");
    assert_eq!(get_resolution(h5), 5);
    assert_eq!(geo_to_cell(&city_hall, 10), Ok(CellIndex(0x8a2830828767fff)), "res 10");

    let north_pole = GeoCoord::from_degrees(90.0, 0.0);
    assert_eq!(geo_to_cell(&north_pole, 0), Ok(CellIndex(0x8001fffffffffff)));
    assert_eq!(geo_to_cell(&north_pole, 1), Ok(CellIndex(0x81033ffffffffff)));
    assert_eq!(geo_to_cell(&north_pole, 2), Ok(CellIndex(0x820327fffffffff)));
    assert_eq!(geo_to_cell(&north_pole, 3), Ok(CellIndex(0x830326fffffffff)));

    let south_pole = GeoCoord::from_degrees(-90.0, 0.0);
    assert_eq!(geo_to_cell(&south_pole, 0), Ok(CellIndex(0x80f3fffffffffff)));
    assert_eq!(geo_to_cell(&south_pole, 4), Ok(CellIndex(0x84f2939ffffffff)));
  }

  #[test]
  fn test_longitude_wraps() {
    let geo = GeoCoord::from_degrees(37.775938728915946, -122.41795063018799);
    let wrapped = GeoCoord::new(geo.lat, geo.lng + 2.0 * std::f64::consts::PI);
    assert_eq!(geo_to_cell(&wrapped, 9), geo_to_cell(&geo, 9));
  }

  #[test]
  fn test_every_resolution_is_valid() {
    let geo = GeoCoord::from_degrees(-33.86, 151.21);
    for res in 0..=MAX_RES {
      let h = geo_to_cell(&geo, res).unwrap();
      assert!(is_valid_cell(h), "res {res} cell is valid");
      assert_eq!(get_resolution(h), res);
    }
  }
}

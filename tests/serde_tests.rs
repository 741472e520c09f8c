// tests/serde_tests.rs

#![cfg(feature = "serde")]

use hexsphere::*;

#[test]
fn test_cell_index_serde() {
  let h = CellIndex(0x8928308280fffff);
  let serialized = serde_json::to_string(&h).unwrap();
  // transparent over u64
  assert_eq!(serialized, "617700169958293503");
  let deserialized: CellIndex = serde_json::from_str(&serialized).unwrap();
  assert_eq!(h, deserialized);

  assert_eq!(serde_json::to_string(&NULL_INDEX).unwrap(), "0");
}

#[test]
fn test_geo_coord_serde() {
  let geo = GeoCoord::new(0.5, -1.2);
  let serialized = serde_json::to_string(&geo).unwrap();
  assert_eq!(serialized, r#"{"lat":0.5,"lng":-1.2}"#);
  let deserialized: GeoCoord = serde_json::from_str(&serialized).unwrap();
  assert_eq!(geo, deserialized);
}

#[test]
fn test_grid_error_serde() {
  let err = GridError::MixedResolution;
  let serialized = serde_json::to_string(&err).unwrap();
  assert_eq!(serialized, "5");
  let deserialized: GridError = serde_json::from_str(&serialized).unwrap();
  assert_eq!(err, deserialized);
  assert!(serde_json::from_str::<GridError>("0").is_err());
}

#[test]
fn test_direction_serde() {
  let dir = Direction::KAxes;
  let serialized = serde_json::to_string(&dir).unwrap();
  assert_eq!(serialized, "1");
  let deserialized: Direction = serde_json::from_str(&serialized).unwrap();
  assert_eq!(dir, deserialized);
}

#[test]
fn test_coords_serde() {
  let ij = CoordIJ { i: 3, j: -2 };
  let serialized = serde_json::to_string(&ij).unwrap();
  assert_eq!(serialized, r#"{"i":3,"j":-2}"#);
  assert_eq!(serde_json::from_str::<CoordIJ>(&serialized).unwrap(), ij);

  let cube = CubeCoord::new(1, -3, 2);
  let round_trip: CubeCoord = serde_json::from_str(&serde_json::to_string(&cube).unwrap()).unwrap();
  assert_eq!(round_trip, cube);
}

#[test]
fn test_cell_list_serde() {
  let cells = k_ring(CellIndex(0x8928308280fffff), 1).unwrap();
  let serialized = serde_json::to_string(&cells).unwrap();
  let deserialized: Vec<CellIndex> = serde_json::from_str(&serialized).unwrap();
  assert_eq!(cells, deserialized);
}

// tests/traversal_tests.rs

use hexsphere::*;
use std::collections::HashSet;

const HEX: CellIndex = CellIndex(0x85283473fffffff);

fn parse_list(cells: &[&str]) -> HashSet<CellIndex> {
  cells.iter().map(|s| parse_cell(s).unwrap()).collect()
}

#[test]
fn test_are_neighbor_cells() {
  assert_eq!(are_neighbor_cells(HEX, CellIndex(0x85283477fffffff)), Ok(true));
  assert_eq!(are_neighbor_cells(HEX, CellIndex(0x8528342bfffffff)), Ok(false));
  assert_eq!(are_neighbor_cells(HEX, HEX), Ok(false));
  assert_eq!(
    are_neighbor_cells(HEX, CellIndex(0x85283472fffffff)),
    Err(GridError::MalformedIndex)
  );
}

#[test]
fn test_k_ring_known_cells() {
  let disk = k_ring(HEX, 1).unwrap();
  assert_eq!(disk[0], HEX);
  let expected = parse_list(&[
    "85283473fffffff",
    "85283447fffffff",
    "8528347bfffffff",
    "85283463fffffff",
    "85283477fffffff",
    "8528340ffffffff",
    "8528340bfffffff",
  ]);
  assert_eq!(disk.into_iter().collect::<HashSet<_>>(), expected);
}

#[test]
fn test_grid_ring_known_cells() {
  let ring: HashSet<CellIndex> = grid_ring(HEX, 1).unwrap().into_iter().collect();
  let expected = parse_list(&[
    "8528340bfffffff",
    "85283447fffffff",
    "8528347bfffffff",
    "85283463fffffff",
    "85283477fffffff",
    "8528340ffffffff",
  ]);
  assert_eq!(ring, expected);
}

#[test]
fn test_neighbor_in_every_direction() {
  let around: HashSet<CellIndex> = Direction::NEIGHBORS
    .iter()
    .map(|&dir| neighbor(HEX, dir).unwrap())
    .collect();
  let ring: HashSet<CellIndex> = grid_ring(HEX, 1).unwrap().into_iter().collect();
  assert_eq!(around, ring);
  assert_eq!(neighbor(HEX, Direction::Center), Err(GridError::InvalidDirection));

  let pentagon = get_pentagons(3).unwrap()[0];
  assert_eq!(neighbor(pentagon, Direction::KAxes), Err(GridError::InvalidDirection));
}

#[test]
fn test_k_ring_distances_agree_with_grid_distance() {
  assert_eq!(max_k_ring_size(3), Ok(37));
  for (cell, d) in k_ring_distances(HEX, 3).unwrap() {
    assert_eq!(grid_distance(HEX, cell), Ok(i64::from(d)));
  }
}

#[test]
fn test_grid_distance_known_cells() {
  assert_eq!(grid_distance(HEX, CellIndex(0x8528342bfffffff)), Ok(2));
  assert_eq!(grid_path_cells_size(HEX, CellIndex(0x8528342bfffffff)), Ok(3));
}

#[test]
fn test_grid_path_cells() {
  let end = CellIndex(0x8528342bfffffff);
  let path = grid_path_cells(HEX, end).unwrap();
  assert_eq!(path.len(), 3);
  assert_eq!(path[0], HEX);
  assert_eq!(path[2], end);
  assert!(path.windows(2).all(|w| are_neighbor_cells(w[0], w[1]) == Ok(true)));
}

#[test]
fn test_local_ij_round_trip() {
  for cell in k_ring(HEX, 4).unwrap() {
    let ij = cell_to_local_ij(HEX, cell).unwrap();
    assert_eq!(local_ij_to_cell(HEX, ij), Ok(cell));
  }
  let neighbor_ij = cell_to_local_ij(HEX, neighbor(HEX, Direction::IAxes).unwrap()).unwrap();
  let origin_ij = cell_to_local_ij(HEX, HEX).unwrap();
  let d = CoordIJK::from_ij(neighbor_ij).unwrap().distance(&CoordIJK::from_ij(origin_ij).unwrap());
  assert_eq!(d, 1);
}

#[test]
fn test_k_ring_around_every_pentagon() {
  for res in 0..=4 {
    for p in get_pentagons(res).unwrap() {
      let disk = k_ring(p, 2).unwrap();
      let unique: HashSet<CellIndex> = disk.iter().copied().collect();
      assert_eq!(unique.len(), disk.len());
      assert_eq!(disk.len(), 16, "pentagon {p}");
    }
  }
}

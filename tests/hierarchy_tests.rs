// tests/hierarchy_tests.rs

use hexsphere::*;
use std::collections::HashSet;

const HEX: CellIndex = CellIndex(0x85283473fffffff);

#[test]
fn test_parent_at() {
  let child = CellIndex(0x8928342e20fffff);
  assert_eq!(parent_at(child, 3), Ok(CellIndex(0x832834fffffffff)));
  assert_eq!(parent_at(child, 9), Ok(child));
  assert_eq!(parent_at(child, 10), Err(GridError::InvalidResolution));
}

#[test]
fn test_children() {
  assert_eq!(children_count(HEX, 6), Ok(7));
  assert_eq!(center_child(HEX, 7), Ok(CellIndex(0x872834700ffffff)));

  let children: Vec<CellIndex> = children_at(HEX, 7).unwrap().collect();
  assert_eq!(children.len(), 49);
  assert_eq!(children[0], CellIndex(0x872834700ffffff));
  assert!(children.iter().all(|&c| parent_at(c, 5) == Ok(HEX)));

  let again = children_at(HEX, 7).unwrap();
  assert_eq!(again.clone().count(), 49);
  assert_eq!(again.collect::<Vec<_>>(), children);
}

#[test]
fn test_child_positions() {
  assert_eq!(child_position(HEX, 3), Ok(25));
  assert_eq!(child_at_position(42, HEX, 7), Ok(CellIndex(0x872834730ffffff)));
  assert_eq!(child_at_position(49, HEX, 7), Err(GridError::DomainError));

  let pentagon = get_pentagons(1).unwrap()[3];
  for (pos, child) in children_at(pentagon, 3).unwrap().enumerate() {
    assert_eq!(child_position(child, 1), Ok(pos as i64));
    assert_eq!(child_at_position(pos as i64, pentagon, 3), Ok(child));
  }
}

#[test]
fn test_pentagon_children_skip_k() {
  for p in get_pentagons(2).unwrap() {
    let children: Vec<CellIndex> = children_at(p, 4).unwrap().collect();
    assert_eq!(children.len() as i64, children_count(p, 4).unwrap());
    assert_eq!(children.len(), 1 + 5 + 5 * 7);
    assert!(children.iter().all(|&c| is_valid_cell(c)));
    assert_eq!(children.iter().filter(|&&c| is_pentagon(c)).count(), 1);
  }
}

#[test]
fn test_compact_uncompact_round_trip() {
  let disk = k_ring(CellIndex(0x8928308280fffff), 6).unwrap();
  let compacted = compact(&disk).unwrap();
  assert!(compacted.len() < disk.len());

  let res = get_resolution(disk[0]);
  assert_eq!(uncompact_size(&compacted, res), Ok(disk.len() as i64));
  let restored: HashSet<CellIndex> = uncompact(&compacted, res).unwrap().into_iter().collect();
  let original: HashSet<CellIndex> = disk.into_iter().collect();
  assert_eq!(restored, original);
}

#[test]
fn test_compact_all_res1_cells() {
  let all: Vec<CellIndex> = cells_at_resolution(1).unwrap().collect();
  assert_eq!(compact(&all), Ok(get_res0_cells()));
}

#[test]
fn test_compact_rejects_overlap() {
  let child = center_child(HEX, 6).unwrap();
  assert_eq!(compact(&[child, HEX]), Err(GridError::MixedResolution));
}

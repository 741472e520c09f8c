use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use hexsphere::*;

const SF: CellIndex = CellIndex(0x8928308280fffff);
const PENT_RES9: CellIndex = CellIndex(0x89080000003ffff);

fn bench_k_ring(c: &mut Criterion) {
  let mut group = c.benchmark_group("k_ring");
  for k in [1, 5, 20] {
    group.bench_with_input(format!("hex_k_{k}"), &k, |b, &k| b.iter(|| k_ring(black_box(SF), k)));
  }
  group.bench_function("pentagon_k_5", |b| b.iter(|| k_ring(black_box(PENT_RES9), 5)));
  group.finish();
}

fn bench_grid_ring(c: &mut Criterion) {
  c.bench_function("grid_ring_k_10", |b| b.iter(|| grid_ring(black_box(SF), 10)));
}

fn bench_neighbors(c: &mut Criterion) {
  let far = k_ring(SF, 10).unwrap().pop().unwrap();
  c.benchmark_group("neighbors")
    .bench_function("neighbor", |b| b.iter(|| neighbor(black_box(SF), Direction::IAxes)))
    .bench_function("are_neighbor_cells", |b| {
      b.iter(|| are_neighbor_cells(black_box(SF), black_box(far)))
    })
    .bench_function("grid_distance", |b| b.iter(|| grid_distance(black_box(SF), black_box(far))))
    .bench_function("grid_path_cells", |b| b.iter(|| grid_path_cells(black_box(SF), black_box(far))));
}

fn bench_hierarchy(c: &mut Criterion) {
  let parent = parent_at(SF, 5).unwrap();
  let cells = uncompact(&[parent], 9).unwrap();

  c.benchmark_group("hierarchy")
    .bench_function("parent_at", |b| b.iter(|| parent_at(black_box(SF), 3)))
    .bench_function("children_at_4_levels", |b| {
      b.iter(|| children_at(black_box(parent), 9).map(Iterator::count))
    })
    .bench_function("compact_2401", |b| {
      b.iter_batched(|| cells.clone(), |cells| compact(&cells), BatchSize::SmallInput)
    })
    .bench_function("uncompact_4_levels", |b| b.iter(|| uncompact(black_box(&[parent]), 9)));
}

criterion_group!(traversal_benches, bench_k_ring, bench_grid_ring, bench_neighbors, bench_hierarchy);
criterion_main!(traversal_benches);

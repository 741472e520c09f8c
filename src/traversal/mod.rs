// src/traversal/mod.rs
//! Neighbours, disks, rings, distances and paths between cells.

pub mod distance;
pub mod grid_disk;
pub mod grid_path;
pub mod neighbors;

pub use distance::grid_distance;
pub use grid_disk::{grid_ring, k_ring, k_ring_distances, max_k_ring_size};
pub use grid_path::{grid_path_cells, grid_path_cells_size};
pub use neighbors::{are_neighbor_cells, neighbor};

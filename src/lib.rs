#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::similar_names)]
#![allow(clippy::excessive_precision)]

//! `hexsphere` is a hierarchical hexagonal grid over the sphere.
//!
//! The sphere is projected onto the 20 faces of an icosahedron, tiled with
//! 122 base cells (12 of them pentagons), and every cell is subdivided with
//! aperture 7 down to resolution 15. Each cell is addressed by a 64-bit
//! [`CellIndex`] that encodes its resolution, base cell and digit path.
//!
//! ```
//! use hexsphere::{geo_to_cell, k_ring, parent_at, GeoCoord};
//!
//! let sf = GeoCoord::from_degrees(37.779265, -122.419277);
//! let cell = geo_to_cell(&sf, 9)?;
//! assert_eq!(k_ring(cell, 1)?.len(), 7);
//! assert_eq!(parent_at(cell, 5)?.to_string(), "85283083fffffff");
//! # Ok::<(), hexsphere::GridError>(())
//! ```

pub mod base_cells;
pub mod cell_index;
pub mod constants;
pub mod coords;
pub mod error;
pub mod geo;
pub mod hierarchy;
pub mod indexing;
pub mod iterators;
pub mod local_ij;
pub mod math;
pub mod measures;
pub mod traversal;
pub mod types;

pub use base_cells::{base_cell, base_cells, BaseCell};
pub use cell_index::{
  cell_shape, decode, encode, format_cell, get_base_cell_number, get_icosahedron_faces, get_num_cells, get_pentagons,
  get_res0_cells, get_resolution, is_pentagon, is_res_class_iii, is_valid_cell, max_face_count, parse_cell,
  DecodedCell, Digits,
};
pub use constants::{MAX_CELL_BNDRY_VERTS, MAX_RES, NUM_BASE_CELLS, NUM_PENTAGONS};
pub use coords::{select_face, to_hex_coord, unproject};
pub use error::{GridError, Result};
pub use geo::{
  degs_to_rads, great_circle_distance_km, great_circle_distance_m, great_circle_distance_rads, hexagon_area_avg_km2,
  hexagon_area_avg_m2, hexagon_edge_length_avg_km, hexagon_edge_length_avg_m, rads_to_degs,
};
pub use hierarchy::{
  center_child, child_at_position, child_position, children_at, children_count, compact, parent_at, uncompact,
  uncompact_size,
};
pub use indexing::{cell_to_boundary, cell_to_geo, geo_to_cell};
pub use iterators::{cells_at_resolution, CellsAtResolution, Children};
pub use local_ij::{cell_to_local_ij, local_ij_to_cell};
pub use math::{to_geo_coord, to_vector3};
pub use measures::{cell_area_km2, cell_area_m2, cell_area_rads2};
pub use traversal::{
  are_neighbor_cells, grid_distance, grid_path_cells, grid_path_cells_size, grid_ring, k_ring, k_ring_distances,
  max_k_ring_size, neighbor,
};
pub use types::{
  CellBoundary, CellIndex, CellShape, CoordIJ, CoordIJK, CubeCoord, Direction, FaceCoord, GeoCoord, UnitVector3,
  Vec2d, Vec3d, NULL_INDEX,
};

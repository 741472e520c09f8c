// src/hierarchy/mod.rs

pub mod compaction;
pub mod parent_child;

pub use compaction::{compact, uncompact, uncompact_size};
pub use parent_child::{center_child, child_at_position, child_position, children_at, children_count, parent_at};

//! Domain layer: tree model and header-grid algorithms
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod column;
pub mod display;
pub mod error;
pub mod flatten;
pub mod grid;
pub mod grouping;
pub mod metrics;
pub mod tree;

pub use column::{
    accessor_leaves, columns_to_forest, header_grid, Accessor, Column, ColumnNode, Group,
};
pub use display::{forest_tree, TreeDisplay};
pub use error::{DomainError, DomainResult};
pub use flatten::{forest_leaf_values, leaf_values};
pub use grid::{build_grid, Cell, Grid};
pub use grouping::{group_by_depth, LevelGroup};
pub use metrics::{depth, leaf_count, max_depth, total_leaf_count};
pub use tree::{Branch, Node};

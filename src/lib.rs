//! headergrid: nested table headers from labeled column trees.
//!
//! The core lives in [`domain`]: a forest of [`domain::Node`]s is turned into
//! header rows by [`domain::build_grid`], and leaf payloads are collected by
//! [`domain::forest_leaf_values`]. The remaining layers load column files,
//! settings, and drive the `headergrid` binary.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

pub use domain::{build_grid, forest_leaf_values, leaf_values, Cell, Grid, Node};

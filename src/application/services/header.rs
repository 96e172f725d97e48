//! Header layout service
//!
//! Loads a column definition file and computes its header grid and leaf columns.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::{parse_columns, ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{
    build_grid, columns_to_forest, forest_leaf_values, Accessor, Column, ColumnNode, Grid,
};
use crate::infrastructure::traits::FileSystem;

/// Everything a table needs to lay out its header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderLayout {
    /// Group header rows, topmost first
    pub grid: Grid<String>,
    /// Data columns in display order
    pub leaves: Vec<Accessor>,
}

/// Service for turning column files into header layouts.
pub struct HeaderService {
    fs: Arc<dyn FileSystem>,
}

impl HeaderService {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Read and validate the column definitions in `path`.
    #[instrument(level = "debug", skip(self))]
    pub fn load_columns(&self, path: &Path) -> ApplicationResult<Vec<Column>> {
        if self.fs.exists(path) && !self.fs.is_file(path) {
            return Err(ApplicationError::InvalidColumns {
                path: path.to_path_buf(),
                message: "not a regular file".into(),
            });
        }
        let content = self
            .fs
            .read_to_string(path)
            .with_path_context("read column file", path)?;
        parse_columns(&content, path)
    }

    /// Column definitions of `path` viewed as a forest.
    pub fn load_forest(&self, path: &Path) -> ApplicationResult<Vec<ColumnNode>> {
        let columns = self.load_columns(path)?;
        Ok(columns_to_forest(&columns)?)
    }

    /// Build the header grid and leaf list for the columns in `path`.
    #[instrument(level = "debug", skip(self))]
    pub fn layout(&self, path: &Path) -> ApplicationResult<HeaderLayout> {
        let forest = self.load_forest(path)?;
        let grid = build_grid(&forest)?;
        let leaves: Vec<Accessor> = forest_leaf_values(&forest).into_iter().cloned().collect();
        debug!(
            "layout: {} header rows over {} leaf columns",
            grid.len(),
            leaves.len()
        );
        Ok(HeaderLayout { grid, leaves })
    }
}

//! Column definition file format (TOML).
//!
//! ```toml
//! [[columns]]
//! header = "Name"
//!   [[columns.columns]]
//!   accessor = "first"
//!   header = "First"
//!
//! [[columns]]
//! accessor = "age"
//! ```
//!
//! A table with `columns` is a group and needs a `header`; a table with
//! `accessor` is a data column whose `header` defaults to the accessor key.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{Accessor, Column, Group};

/// Raw column file for intermediate parsing.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct RawColumnFile {
    pub columns: Vec<RawColumn>,
}

/// Raw column entry; exactly one of `accessor` / `columns` must be set.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct RawColumn {
    pub header: Option<String>,
    pub accessor: Option<String>,
    pub columns: Option<Vec<RawColumn>>,
}

impl RawColumn {
    /// Validate into a domain column. `position` names the entry in error messages.
    fn into_column(self, path: &Path, position: &str) -> ApplicationResult<Column> {
        match (self.accessor, self.columns) {
            (Some(_), Some(_)) => Err(invalid(
                path,
                format!("{position}: has both `accessor` and `columns`"),
            )),
            (None, None) => Err(invalid(
                path,
                format!("{position}: needs either `accessor` or `columns`"),
            )),
            (Some(accessor), None) => {
                let header = self.header.unwrap_or_else(|| accessor.clone());
                Ok(Column::Accessor(Accessor { accessor, header }))
            }
            (None, Some(columns)) => {
                let header = self
                    .header
                    .ok_or_else(|| invalid(path, format!("{position}: group has no `header`")))?;
                let columns = convert_all(columns, path, &format!("{position}.columns"))?;
                Ok(Column::Group(Group { header, columns }))
            }
        }
    }
}

fn convert_all(
    raw: Vec<RawColumn>,
    path: &Path,
    position: &str,
) -> ApplicationResult<Vec<Column>> {
    raw.into_iter()
        .enumerate()
        .map(|(i, column)| column.into_column(path, &format!("{position}[{i}]")))
        .collect()
}

fn invalid(path: &Path, message: String) -> ApplicationError {
    ApplicationError::InvalidColumns {
        path: path.to_path_buf(),
        message,
    }
}

/// Parse column file content. `path` is only used for error context.
pub fn parse_columns(content: &str, path: &Path) -> ApplicationResult<Vec<Column>> {
    let raw: RawColumnFile = toml::from_str(content).map_err(|e| invalid(path, e.to_string()))?;
    debug!("parse_columns: {} top-level columns", raw.columns.len());
    convert_all(raw.columns, path, "columns")
}

//! Column trees as consumed by table UIs.
//!
//! A `Group` is a labeled set of sub-columns; an `Accessor` is a single data
//! column identified by a field key. Viewed through the tree model a group is
//! a branch labeled by its header and an accessor is a leaf.

use std::fmt;

use tracing::instrument;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::flatten::forest_leaf_values;
use crate::domain::grid::{build_grid, Grid};
use crate::domain::tree::Node;

/// Tree view of a column definition: accessor leaves under header-labeled branches.
pub type ColumnNode = Node<Accessor, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Column {
    Group(Group),
    Accessor(Accessor),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub header: String,
    pub columns: Vec<Column>,
}

/// Data column bound to a field of the row type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accessor {
    /// Field key used to read the cell value
    pub accessor: String,
    /// Label shown in the leaf header row
    pub header: String,
}

impl Accessor {
    pub fn new(accessor: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            accessor: accessor.into(),
            header: header.into(),
        }
    }
}

impl fmt::Display for Accessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.header, self.accessor)
    }
}

impl Group {
    pub fn new(header: impl Into<String>, columns: Vec<Column>) -> Self {
        Self {
            header: header.into(),
            columns,
        }
    }
}

impl Column {
    pub fn is_group(&self) -> bool {
        matches!(self, Column::Group(_))
    }

    pub fn is_accessor(&self) -> bool {
        matches!(self, Column::Accessor(_))
    }

    pub fn header(&self) -> &str {
        match self {
            Column::Group(group) => &group.header,
            Column::Accessor(accessor) => &accessor.header,
        }
    }

    /// Convert into the tree model.
    ///
    /// # Errors
    /// `DomainError::EmptyGroup` if this column or any nested group has no columns.
    pub fn to_node(&self) -> DomainResult<ColumnNode> {
        match self {
            Column::Accessor(accessor) => Ok(Node::leaf(accessor.clone())),
            Column::Group(group) => {
                if group.columns.is_empty() {
                    return Err(DomainError::EmptyGroup {
                        header: group.header.clone(),
                    });
                }
                let children = group
                    .columns
                    .iter()
                    .map(Column::to_node)
                    .collect::<DomainResult<Vec<_>>>()?;
                Node::branch(group.header.clone(), children)
            }
        }
    }
}

impl From<Accessor> for Column {
    fn from(accessor: Accessor) -> Self {
        Column::Accessor(accessor)
    }
}

impl From<Group> for Column {
    fn from(group: Group) -> Self {
        Column::Group(group)
    }
}

pub fn columns_to_forest(columns: &[Column]) -> DomainResult<Vec<ColumnNode>> {
    columns.iter().map(Column::to_node).collect()
}

/// Header rows for a column definition, labeled by group headers.
#[instrument(level = "debug", skip(columns), fields(columns = columns.len()))]
pub fn header_grid(columns: &[Column]) -> DomainResult<Grid<String>> {
    let forest = columns_to_forest(columns)?;
    build_grid(&forest)
}

/// All accessor columns, left to right, with their labels.
pub fn accessor_leaves(columns: &[Column]) -> DomainResult<Vec<Accessor>> {
    let forest = columns_to_forest(columns)?;
    Ok(forest_leaf_values(&forest).into_iter().cloned().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::grid::Cell;

    fn columns() -> Vec<Column> {
        vec![
            Group::new(
                "Person",
                vec![
                    Group::new(
                        "Name",
                        vec![
                            Accessor::new("first", "First").into(),
                            Accessor::new("last", "Last").into(),
                        ],
                    )
                    .into(),
                    Accessor::new("age", "Age").into(),
                ],
            )
            .into(),
            Accessor::new("email", "Email").into(),
        ]
    }

    #[test]
    fn given_group_when_converting_then_becomes_branch() {
        let node = columns()[0].to_node().unwrap();
        let branch = node.as_branch().unwrap();
        assert_eq!(branch.value, "Person");
        assert_eq!(node.depth(), 3);
        assert_eq!(node.leaf_count(), 3);
    }

    #[test]
    fn given_empty_nested_group_when_converting_then_reports_header() {
        let columns = vec![Column::Group(Group::new(
            "Outer",
            vec![Group::new("Inner", vec![]).into()],
        ))];
        assert_eq!(
            columns_to_forest(&columns),
            Err(DomainError::EmptyGroup {
                header: "Inner".to_string()
            })
        );
    }

    #[test]
    fn given_columns_when_building_header_grid_then_rows_cover_all_accessors() {
        let grid = header_grid(&columns()).unwrap();

        assert_eq!(
            grid.rows(),
            &[
                vec![
                    Cell::labeled(2, "Person".to_string()),
                    Cell::padding(1),
                    Cell::padding(1),
                ],
                vec![
                    Cell::labeled(2, "Name".to_string()),
                    Cell::labeled(1, "Person".to_string()),
                    Cell::padding(1),
                ],
            ]
        );
    }

    #[test]
    fn given_columns_when_extracting_accessors_then_keeps_order_and_labels() {
        let leaves = accessor_leaves(&columns()).unwrap();
        let keys: Vec<&str> = leaves.iter().map(|a| a.accessor.as_str()).collect();
        assert_eq!(keys, vec!["first", "last", "age", "email"]);
        assert_eq!(leaves[2].header, "Age");
    }

    #[test]
    fn given_columns_when_classifying_then_distinguishes_groups() {
        let columns = columns();
        assert!(columns[0].is_group());
        assert!(columns[1].is_accessor());
        assert_eq!(columns[1].header(), "Email");
    }
}

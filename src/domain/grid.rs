//! Grid builder: turn a forest into header rows with equal total span.
//!
//! Each row is one branch level, topmost first. A branch becomes a cell in the
//! row where its children sit directly on the next level; until then its slot
//! is held open by label-less padding cells, so that every row spans the same
//! number of leaves.

use tracing::{debug, instrument};

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::grouping::{group_by_depth, LevelGroup};
use crate::domain::metrics::{depth, leaf_count};
use crate::domain::tree::Node;

/// One header cell: how many leaf columns it covers and what it shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell<B> {
    /// Number of leaves covered, always >= 1
    pub span: usize,
    /// Branch label, `None` for padding cells
    pub label: Option<B>,
}

impl<B> Cell<B> {
    pub fn labeled(span: usize, label: B) -> Self {
        Self {
            span,
            label: Some(label),
        }
    }

    pub fn padding(span: usize) -> Self {
        Self { span, label: None }
    }

    pub fn is_padding(&self) -> bool {
        self.label.is_none()
    }
}

/// Header rows, topmost first. Owns its labels; shares nothing with the input forest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<B> {
    rows: Vec<Vec<Cell<B>>>,
}

impl<B> Grid<B> {
    pub fn rows(&self) -> &[Vec<Cell<B>>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<Cell<B>>> {
        self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vec<Cell<B>>> {
        self.rows.iter()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Span sum of each row, in row order.
    pub fn row_spans(&self) -> Vec<usize> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|cell| cell.span).sum())
            .collect()
    }

    /// Span covered by the grid (identical for every row), 0 for an empty grid.
    pub fn total_span(&self) -> usize {
        self.row_spans().first().copied().unwrap_or(0)
    }
}

impl<'g, B> IntoIterator for &'g Grid<B> {
    type Item = &'g Vec<Cell<B>>;
    type IntoIter = std::slice::Iter<'g, Vec<Cell<B>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Entry of the forest being lowered level by level.
///
/// `Wrapped` is a synthetic branch holding open a label over children that
/// bottom out earlier than their cousins; it borrows both from the input.
#[derive(Debug)]
enum Frontier<'a, L, B> {
    Node(&'a Node<L, B>),
    Wrapped {
        label: &'a B,
        children: Vec<&'a Node<L, B>>,
    },
}

impl<'a, L, B> Frontier<'a, L, B> {
    fn depth(&self) -> usize {
        match self {
            Frontier::Node(node) => depth(*node),
            Frontier::Wrapped { children, .. } => {
                1 + children.iter().map(|child| depth(*child)).max().unwrap_or(0)
            }
        }
    }

    fn leaf_count(&self) -> usize {
        match self {
            Frontier::Node(node) => leaf_count(*node),
            Frontier::Wrapped { children, .. } => {
                children.iter().map(|child| leaf_count(*child)).sum()
            }
        }
    }

    fn is_branch(&self) -> bool {
        match self {
            Frontier::Node(node) => node.is_branch(),
            Frontier::Wrapped { .. } => true,
        }
    }

    /// Label and depth-grouped children, or `None` for a leaf.
    fn expand(&self) -> Option<(&'a B, Vec<LevelGroup<'a, L, B>>)> {
        match *self {
            Frontier::Node(node) => match node {
                Node::Leaf { .. } => None,
                Node::Branch(branch) => Some((&branch.value, group_by_depth(branch.children()))),
            },
            Frontier::Wrapped {
                label,
                ref children,
            } => Some((label, group_by_depth(children.iter().copied()))),
        }
    }
}

/// Build the header grid of a forest.
///
/// Returns one row per branch level (`max_depth - 1` rows); an all-leaf forest
/// yields an empty grid. Every row's spans sum to the forest's leaf count.
///
/// # Errors
/// `DomainError::EmptyForest` if `forest` has no roots.
#[instrument(level = "debug", skip(forest), fields(roots = forest.len()))]
pub fn build_grid<L, B: Clone>(forest: &[Node<L, B>]) -> DomainResult<Grid<B>> {
    if forest.is_empty() {
        return Err(DomainError::EmptyForest);
    }

    let mut frontier: Vec<Frontier<'_, L, B>> = forest.iter().map(Frontier::Node).collect();
    let mut rows = Vec::new();

    while frontier.iter().any(Frontier::is_branch) {
        let (row, lowered) = lower(frontier);
        debug!(level = rows.len(), cells = row.len(), "emitted header row");
        rows.push(row);
        frontier = lowered;
    }

    Ok(Grid { rows })
}

/// Emit the row for the deepest level of `frontier` and the forest one level down.
fn lower<'a, L, B: Clone>(
    frontier: Vec<Frontier<'a, L, B>>,
) -> (Vec<Cell<B>>, Vec<Frontier<'a, L, B>>) {
    let top = frontier.iter().map(Frontier::depth).max().unwrap_or(0);
    let next = top.saturating_sub(1);

    let mut row = Vec::with_capacity(frontier.len());
    let mut lowered = Vec::with_capacity(frontier.len());

    for entry in frontier {
        let expansion = if entry.depth() == top {
            entry.expand()
        } else {
            None
        };

        match expansion {
            Some((label, groups)) => {
                for group in groups {
                    let span = group.leaf_count();
                    if group.depth == next {
                        row.push(Cell::labeled(span, label.clone()));
                        lowered.extend(group.members.into_iter().map(Frontier::Node));
                    } else {
                        row.push(Cell::padding(span));
                        lowered.push(Frontier::Wrapped {
                            label,
                            children: group.members,
                        });
                    }
                }
            }
            None => {
                row.push(Cell::padding(entry.leaf_count()));
                lowered.push(entry);
            }
        }
    }

    (row, lowered)
}

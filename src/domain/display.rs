//! Text rendering of trees for diagnostics.
use std::fmt::Display;

use termtree::Tree;
use tracing::instrument;

use crate::domain::tree::Node;

pub trait TreeDisplay {
    fn to_tree_string(&self) -> Tree<String>;
}

impl<L: Display, B: Display> TreeDisplay for Node<L, B> {
    fn to_tree_string(&self) -> Tree<String> {
        match self {
            Node::Leaf { value } => Tree::new(value.to_string()),
            Node::Branch(branch) => {
                // Recursively construct the children
                let leaves: Vec<_> = branch
                    .children()
                    .iter()
                    .map(|c| c.to_tree_string())
                    .collect();

                Tree::new(branch.value.to_string()).with_leaves(leaves)
            }
        }
    }
}

/// Hang all roots of a forest under one synthetic root labeled `root`.
#[instrument(level = "debug", skip(forest))]
pub fn forest_tree<L: Display, B: Display>(root: &str, forest: &[Node<L, B>]) -> Tree<String> {
    Tree::new(root.to_string()).with_leaves(forest.iter().map(|node| node.to_tree_string()))
}

//! Structural metrics over the tree model.
//!
//! Everything here is recomputed from structure on each call; nodes carry no cache.

use tracing::instrument;

use crate::domain::tree::Node;

/// Longest path from `node` down to a leaf, counted in levels (a leaf is 1).
pub fn depth<L, B>(node: &Node<L, B>) -> usize {
    match node {
        Node::Leaf { .. } => 1,
        Node::Branch(branch) => {
            1 + branch
                .children()
                .iter()
                .map(|child| depth(child))
                .max()
                .unwrap_or(0)
        }
    }
}

/// Number of leaves below (or at) `node`. Always at least 1.
pub fn leaf_count<L, B>(node: &Node<L, B>) -> usize {
    match node {
        Node::Leaf { .. } => 1,
        Node::Branch(branch) => branch.children().iter().map(|child| leaf_count(child)).sum(),
    }
}

/// Maximum depth over the roots of a forest, 0 when the forest is empty.
#[instrument(level = "trace", skip(forest))]
pub fn max_depth<L, B>(forest: &[Node<L, B>]) -> usize {
    forest.iter().map(|node| depth(node)).max().unwrap_or(0)
}

/// Total number of leaves across all roots of a forest.
#[instrument(level = "trace", skip(forest))]
pub fn total_leaf_count<L, B>(forest: &[Node<L, B>]) -> usize {
    forest.iter().map(|node| leaf_count(node)).sum()
}

impl<L, B> Node<L, B> {
    pub fn depth(&self) -> usize {
        depth(self)
    }

    pub fn leaf_count(&self) -> usize {
        leaf_count(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Node<u32, &'static str>> {
        vec![
            Node::branch(
                "A1",
                vec![Node::branch("B", vec![Node::leaf(1), Node::leaf(2)]).unwrap()],
            )
            .unwrap(),
            Node::branch("A2", vec![Node::leaf(3), Node::leaf(4)]).unwrap(),
            Node::leaf(5),
        ]
    }

    #[test]
    fn given_leaf_when_measuring_then_depth_and_count_are_one() {
        let leaf: Node<u32, &str> = Node::leaf(1);
        assert_eq!(depth(&leaf), 1);
        assert_eq!(leaf_count(&leaf), 1);
    }

    #[test]
    fn given_nested_branches_when_measuring_then_uses_deepest_child() {
        let forest = sample();
        assert_eq!(forest[0].depth(), 3);
        assert_eq!(forest[1].depth(), 2);
        assert_eq!(forest[0].leaf_count(), 2);
        assert_eq!(forest[1].leaf_count(), 2);
    }

    #[test]
    fn given_forest_when_measuring_then_aggregates_roots() {
        let forest = sample();
        assert_eq!(max_depth(&forest), 3);
        assert_eq!(total_leaf_count(&forest), 5);
    }

    #[test]
    fn given_empty_forest_when_measuring_then_returns_zero() {
        let forest: Vec<Node<u32, &str>> = vec![];
        assert_eq!(max_depth(&forest), 0);
        assert_eq!(total_leaf_count(&forest), 0);
    }
}

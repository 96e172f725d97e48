//! Leaf flattening: collect leaf payloads depth-first, left to right.

use crate::domain::tree::Node;

pub fn leaf_values<L, B>(node: &Node<L, B>) -> Vec<&L> {
    let mut leaves = Vec::new();
    collect_leaves(node, &mut leaves);
    leaves
}

/// Leaf payloads of every root, concatenated in forest order.
pub fn forest_leaf_values<L, B>(forest: &[Node<L, B>]) -> Vec<&L> {
    let mut leaves = Vec::new();
    for root in forest {
        collect_leaves(root, &mut leaves);
    }
    leaves
}

fn collect_leaves<'a, L, B>(node: &'a Node<L, B>, leaves: &mut Vec<&'a L>) {
    match node {
        Node::Leaf { value } => leaves.push(value),
        Node::Branch(branch) => {
            for child in branch.children() {
                collect_leaves(child, leaves);
            }
        }
    }
}

impl<L, B> Node<L, B> {
    pub fn leaves(&self) -> Vec<&L> {
        leaf_values(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_nested_tree_when_flattening_then_returns_leaves_in_order() {
        let tree: Node<u32, &str> = Node::branch(
            "A",
            vec![
                Node::branch(
                    "B1",
                    vec![Node::branch("C", vec![Node::leaf(1), Node::leaf(2)]).unwrap()],
                )
                .unwrap(),
                Node::branch("B2", vec![Node::leaf(3), Node::leaf(4)]).unwrap(),
            ],
        )
        .unwrap();

        assert_eq!(leaf_values(&tree), vec![&1, &2, &3, &4]);
        assert_eq!(tree.leaves().len(), tree.leaf_count());
    }

    #[test]
    fn given_leaf_when_flattening_then_returns_singleton() {
        let leaf: Node<&str, ()> = Node::leaf("only");
        assert_eq!(leaf_values(&leaf), vec![&"only"]);
    }

    #[test]
    fn given_forest_when_flattening_then_concatenates_roots() {
        let forest: Vec<Node<u32, &str>> = vec![
            Node::leaf(1),
            Node::branch("X", vec![Node::leaf(2), Node::leaf(3)]).unwrap(),
            Node::leaf(4),
        ];
        assert_eq!(forest_leaf_values(&forest), vec![&1, &2, &3, &4]);
    }
}

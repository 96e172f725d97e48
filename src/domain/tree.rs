//! Tree model: a forest of labeled branches over leaf payloads.

use crate::domain::error::{DomainError, DomainResult};

/// A node in a labeled tree.
///
/// `L` is the leaf payload, `B` the branch label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<L, B> {
    Leaf { value: L },
    Branch(Branch<L, B>),
}

/// An internal node carrying a label and at least one child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch<L, B> {
    /// Label rendered in the header row this branch ends up in
    pub value: B,
    children: Vec<Node<L, B>>,
}

impl<L, B> Branch<L, B> {
    /// Create a branch, rejecting an empty child list.
    pub fn new(value: B, children: Vec<Node<L, B>>) -> DomainResult<Self> {
        if children.is_empty() {
            return Err(DomainError::EmptyBranch);
        }
        Ok(Self { value, children })
    }

    /// Children in left-to-right order, never empty.
    pub fn children(&self) -> &[Node<L, B>] {
        &self.children
    }
}

impl<L, B> Node<L, B> {
    pub fn leaf(value: L) -> Self {
        Node::Leaf { value }
    }

    /// Create a branch node; fails if `children` is empty.
    pub fn branch(value: B, children: Vec<Node<L, B>>) -> DomainResult<Self> {
        Branch::new(value, children).map(Node::Branch)
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    pub fn is_branch(&self) -> bool {
        matches!(self, Node::Branch(_))
    }

    pub fn as_branch(&self) -> Option<&Branch<L, B>> {
        match self {
            Node::Branch(branch) => Some(branch),
            Node::Leaf { .. } => None,
        }
    }
}

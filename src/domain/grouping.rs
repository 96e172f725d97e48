//! Level grouping: split siblings into consecutive runs of equal depth.

use itertools::Itertools;

use crate::domain::metrics::{depth, leaf_count};
use crate::domain::tree::Node;

/// A maximal run of adjacent siblings sharing one depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelGroup<'a, L, B> {
    /// Common depth of every member
    pub depth: usize,
    /// Members in their original order, never empty
    pub members: Vec<&'a Node<L, B>>,
}

impl<'a, L, B> LevelGroup<'a, L, B> {
    pub fn leaf_count(&self) -> usize {
        self.members.iter().map(|node| leaf_count(*node)).sum()
    }
}

/// Partition `siblings` into runs of consecutive nodes with equal depth.
///
/// Only adjacent nodes are merged: `[d2, d1, d2]` yields three groups, not two.
/// Concatenating the members of all groups gives back the input sequence.
pub fn group_by_depth<'a, L, B, I>(siblings: I) -> Vec<LevelGroup<'a, L, B>>
where
    I: IntoIterator<Item = &'a Node<L, B>>,
    L: 'a,
    B: 'a,
{
    let groups = siblings
        .into_iter()
        .map(|node| (depth(node), node))
        .chunk_by(|(node_depth, _)| *node_depth)
        .into_iter()
        .map(|(depth, run)| LevelGroup {
            depth,
            members: run.map(|(_, node)| node).collect(),
        })
        .collect();
    groups
}

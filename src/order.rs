//! Order the atoms of a path-shaped subgraph from one endpoint to the other.

use bit_set::BitSet;
use clap::ValueEnum;

use crate::{
    error::MalformedFragment,
    fragment::FragmentPolicy,
    molecule::AtomIndex,
    subgraph::Subgraph,
};

/// Which of a path's two endpoints the ordering starts from.
///
/// The two choices give mirror-image fragment strings (`C-C-O` versus
/// `O-C-C`), so a run should stick to one rule.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default)]
pub enum EndpointRule {
    /// Start from the endpoint with the smaller atom index.
    #[default]
    LowestIndex,
    /// Start from whichever endpoint entered the subgraph first.
    FirstInserted,
}

impl EndpointRule {
    /// Pick a start node from `endpoints` (given in subgraph insertion order).
    pub fn choose(&self, endpoints: &[AtomIndex]) -> Option<AtomIndex> {
        match self {
            EndpointRule::LowestIndex => endpoints.iter().min().copied(),
            EndpointRule::FirstInserted => endpoints.first().copied(),
        }
    }
}

/// Walk `subgraph` from `start`, always stepping to the first neighbour not
/// yet visited, until no such neighbour is left.
///
/// On a simple path this visits every node exactly once. On anything else
/// the walk stops at the first dead end and the unvisited nodes are dropped.
pub fn walk(subgraph: &Subgraph, start: AtomIndex) -> Vec<AtomIndex> {
    let mut remaining: BitSet = BitSet::from_iter(subgraph.nodes());
    remaining.remove(start);

    let mut path = Vec::with_capacity(subgraph.node_count());
    path.push(start);

    let mut current = start;
    while let Some(next) = subgraph.neighbors(current).find(|&n| remaining.contains(n)) {
        remaining.remove(next);
        path.push(next);
        current = next;
    }
    path
}

/// Order the atoms of `subgraph` starting at `start`.
///
/// Under [`FragmentPolicy::Strict`], a walk that misses any node is reported
/// as [`MalformedFragment::TruncatedWalk`] instead of being returned.
pub fn order(
    subgraph: &Subgraph,
    start: AtomIndex,
    policy: FragmentPolicy,
) -> Result<Vec<AtomIndex>, MalformedFragment> {
    let path = walk(subgraph, start);
    if policy == FragmentPolicy::Strict && path.len() != subgraph.node_count() {
        return Err(MalformedFragment::TruncatedWalk {
            start,
            visited: path.len(),
            expected: subgraph.node_count(),
        });
    }
    Ok(path)
}

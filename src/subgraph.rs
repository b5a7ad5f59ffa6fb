//! Atom-level subgraphs induced by a combination of bonds.

use petgraph::graphmap::UnGraphMap;

use crate::{
    error::Result,
    molecule::{AtomIndex, BondIndex, MolGraph},
};

/// The shape of a [`Subgraph`], as far as fragment extraction cares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    /// No node has degree one.
    Ring,
    /// Exactly two nodes have degree one.
    Path { start: AtomIndex, end: AtomIndex },
    /// Some other non-zero number of nodes have degree one.
    Branched { endpoints: Vec<AtomIndex> },
}

/// An undirected graph over atom indices whose edges are the endpoints of a
/// set of bonds.
///
/// Nodes and each node's neighbours iterate in the order they were first
/// added. Adding the same atom pair twice leaves a single edge.
#[derive(Debug, Clone, Default)]
pub struct Subgraph {
    graph: UnGraphMap<AtomIndex, ()>,
}

impl Subgraph {
    /// Build the subgraph covered by `bonds` in `mol`.
    pub fn from_bonds<M>(mol: &M, bonds: &[BondIndex]) -> Result<Self>
    where
        M: MolGraph + ?Sized,
    {
        let mut edges = Vec::with_capacity(bonds.len());
        for &b in bonds {
            let bond = mol.bond(b)?;
            edges.push((bond.begin, bond.end));
        }
        Ok(Self::from_edges(edges))
    }

    /// Build a subgraph directly from atom pairs.
    pub fn from_edges(edges: impl IntoIterator<Item = (AtomIndex, AtomIndex)>) -> Self {
        let mut graph = UnGraphMap::new();
        for (a, b) in edges {
            graph.add_edge(a, b, ());
        }
        Self { graph }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn contains(&self, atom: AtomIndex) -> bool {
        self.graph.contains_node(atom)
    }

    pub fn nodes(&self) -> impl Iterator<Item = AtomIndex> + '_ {
        self.graph.nodes()
    }

    pub fn neighbors(&self, atom: AtomIndex) -> impl Iterator<Item = AtomIndex> + '_ {
        self.graph.neighbors(atom)
    }

    pub fn degree(&self, atom: AtomIndex) -> usize {
        self.graph.neighbors(atom).count()
    }

    /// Return the nodes of degree one, in insertion order.
    pub fn endpoints(&self) -> Vec<AtomIndex> {
        self.nodes().filter(|&n| self.degree(n) == 1).collect()
    }

    /// Classify this subgraph by its endpoints.
    pub fn classify(&self) -> Shape {
        let endpoints = self.endpoints();
        match endpoints.len() {
            0 => Shape::Ring,
            2 => Shape::Path {
                start: endpoints[0],
                end: endpoints[1],
            },
            _ => Shape::Branched { endpoints },
        }
    }
}

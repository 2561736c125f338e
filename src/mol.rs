use std::fmt;

use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

/// Errors raised when assembling a [`Mol`] from raw parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MolError {
    /// A bond references an atom index that is not in the container.
    BondEndpointOutOfRange { index: usize, atom_count: usize },
}

impl fmt::Display for MolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BondEndpointOutOfRange { index, atom_count } => {
                write!(
                    f,
                    "bond endpoint {} out of range for {} atoms",
                    index, atom_count
                )
            }
        }
    }
}

impl std::error::Error for MolError {}

/// A molecular graph: atoms as vertices, bonds as edges.
///
/// Generic over the atom type `A` and bond type `B` so callers can carry
/// their own attribute sets; the hash generators only require the property
/// traits in [`crate::traits`]. Vertex indices are stable 0-based positions
/// in insertion order.
pub struct Mol<A, B> {
    graph: UnGraph<A, B>,
}

impl<A, B> Mol<A, B> {
    pub fn new() -> Self {
        Self {
            graph: UnGraph::default(),
        }
    }

    /// Build a molecule from an atom list and `(begin, end, bond)` triples.
    ///
    /// Fails fast on a bond referencing an atom index absent from the
    /// container, rather than producing a graph that would hash garbage.
    pub fn from_parts(atoms: Vec<A>, bonds: Vec<(usize, usize, B)>) -> Result<Self, MolError> {
        let n = atoms.len();
        let mut mol = Self::new();
        for atom in atoms {
            mol.add_atom(atom);
        }
        for (begin, end, bond) in bonds {
            for index in [begin, end] {
                if index >= n {
                    return Err(MolError::BondEndpointOutOfRange {
                        index,
                        atom_count: n,
                    });
                }
            }
            mol.add_bond(NodeIndex::new(begin), NodeIndex::new(end), bond);
        }
        Ok(mol)
    }

    pub fn graph(&self) -> &UnGraph<A, B> {
        &self.graph
    }

    pub fn atom(&self, idx: NodeIndex) -> &A {
        &self.graph[idx]
    }

    pub fn atom_mut(&mut self, idx: NodeIndex) -> &mut A {
        &mut self.graph[idx]
    }

    pub fn bond(&self, idx: EdgeIndex) -> &B {
        &self.graph[idx]
    }

    pub fn add_atom(&mut self, atom: A) -> NodeIndex {
        self.graph.add_node(atom)
    }

    pub fn add_bond(&mut self, a: NodeIndex, b: NodeIndex, bond: B) -> EdgeIndex {
        self.graph.add_edge(a, b, bond)
    }

    pub fn atom_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn bond_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn neighbors(&self, idx: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.neighbors(idx)
    }

    pub fn bonds_of(&self, idx: NodeIndex) -> impl Iterator<Item = EdgeIndex> + '_ {
        self.graph.edges(idx).map(|e| e.id())
    }

    pub fn atoms(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    pub fn bonds(&self) -> impl Iterator<Item = EdgeIndex> + '_ {
        self.graph.edge_indices()
    }

    pub fn bond_between(&self, a: NodeIndex, b: NodeIndex) -> Option<EdgeIndex> {
        self.graph.find_edge(a, b)
    }

    pub fn bond_endpoints(&self, idx: EdgeIndex) -> Option<(NodeIndex, NodeIndex)> {
        self.graph.edge_endpoints(idx)
    }

    /// Convert to the plain adjacency list the hash generators refine over.
    ///
    /// Built once per generate call; position `v` lists the neighbors of
    /// vertex `v` in this molecule's adjacency order.
    pub fn to_adjacency(&self) -> Vec<Vec<usize>> {
        let n = self.atom_count();
        let mut adjacency = vec![Vec::new(); n];
        for (v, list) in adjacency.iter_mut().enumerate() {
            list.extend(self.neighbors(NodeIndex::new(v)).map(|w| w.index()));
        }
        adjacency
    }
}

impl<A: Clone, B: Clone> Clone for Mol<A, B> {
    fn clone(&self) -> Self {
        Self {
            graph: self.graph.clone(),
        }
    }
}

impl<A, B> Default for Mol<A, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: PartialEq, B: PartialEq> PartialEq for Mol<A, B> {
    fn eq(&self, other: &Self) -> bool {
        if self.atom_count() != other.atom_count() || self.bond_count() != other.bond_count() {
            return false;
        }
        for idx in self.atoms() {
            if self.atom(idx) != other.atom(idx) {
                return false;
            }
        }
        for idx in self.bonds() {
            if self.bond(idx) != other.bond(idx) {
                return false;
            }
            if self.bond_endpoints(idx) != other.bond_endpoints(idx) {
                return false;
            }
        }
        true
    }
}

impl<A: fmt::Debug, B: fmt::Debug> fmt::Debug for Mol<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mol")
            .field("atom_count", &self.atom_count())
            .field("bond_count", &self.bond_count())
            .finish()
    }
}

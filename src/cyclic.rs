//! Ring membership for vertices.
//!
//! The hash subsystem never needs the rings themselves, only whether an atom
//! lies on one: a bond is a bridge exactly when it is on no cycle, so an
//! atom is cyclic when at least one incident bond is not a bridge. One DFS
//! pass over each component finds the bridges.

use crate::mol::Mol;

/// Precomputed per-vertex ring membership.
#[derive(Debug, Clone)]
pub struct RingMembership {
    cyclic: Vec<bool>,
}

impl RingMembership {
    pub fn of<A, B>(mol: &Mol<A, B>) -> Self {
        let n = mol.atom_count();
        let mut incident: Vec<Vec<(usize, usize)>> = vec![Vec::new(); n];
        let mut edge_count = 0usize;
        for edge in mol.bonds() {
            if let Some((a, b)) = mol.bond_endpoints(edge) {
                incident[a.index()].push((b.index(), edge_count));
                incident[b.index()].push((a.index(), edge_count));
                edge_count += 1;
            }
        }

        let mut search = BridgeSearch {
            incident: &incident,
            disc: vec![usize::MAX; n],
            low: vec![0; n],
            bridge: vec![false; edge_count],
            time: 0,
        };
        for v in 0..n {
            if search.disc[v] == usize::MAX {
                search.visit(v, usize::MAX);
            }
        }

        let cyclic = (0..n)
            .map(|v| incident[v].iter().any(|&(_, e)| !search.bridge[e]))
            .collect();
        Self { cyclic }
    }

    pub fn cyclic(&self, atom: usize) -> bool {
        self.cyclic[atom]
    }

    /// Whether any vertex at all lies on a ring.
    pub fn any(&self) -> bool {
        self.cyclic.iter().any(|&c| c)
    }
}

struct BridgeSearch<'a> {
    incident: &'a [Vec<(usize, usize)>],
    disc: Vec<usize>,
    low: Vec<usize>,
    bridge: Vec<bool>,
    time: usize,
}

impl BridgeSearch<'_> {
    fn visit(&mut self, v: usize, parent_edge: usize) {
        self.disc[v] = self.time;
        self.low[v] = self.time;
        self.time += 1;
        for &(w, e) in &self.incident[v] {
            if e == parent_edge {
                continue;
            }
            if self.disc[w] == usize::MAX {
                self.visit(w, e);
                self.low[v] = self.low[v].min(self.low[w]);
                if self.low[w] > self.disc[v] {
                    self.bridge[e] = true;
                }
            } else {
                self.low[v] = self.low[v].min(self.disc[w]);
            }
        }
    }
}

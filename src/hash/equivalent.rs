//! Equivalent-set detection.
//!
//! After refinement, vertices sharing an invariant are either genuine graph
//! automorphs or coincidental collisions. Only vertices on a ring are
//! candidates for perturbation — perturbing an acyclic or terminal vertex
//! cannot resolve a ring-symmetry collision.

use std::collections::BTreeMap;

use crate::cyclic::RingMembership;
use crate::mol::Mol;

/// Strategy choosing which equivalent vertices the perturbation
/// orchestrator probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EquivalentSetFinder {
    /// The single smallest bucket of equivalent cyclic vertices; ties go to
    /// the bucket with the lowest invariant. Cheapest useful strategy.
    Minimum,
    /// Union of every bucket tied for minimum size.
    #[deprecated(
        note = "known residual false-positive collisions compared to All; \
                kept only for parity with previously stored hashes"
    )]
    Union,
    /// Union of every bucket — the most thorough and most expensive
    /// strategy, for when maximal discrimination is required.
    All,
}

impl EquivalentSetFinder {
    /// Find the candidate vertex set, sorted ascending.
    pub fn find<A, B>(&self, invariants: &[u64], mol: &Mol<A, B>) -> Vec<usize> {
        let membership = RingMembership::of(mol);
        let mut buckets: BTreeMap<u64, Vec<usize>> = BTreeMap::new();
        for (v, &invariant) in invariants.iter().enumerate() {
            if membership.cyclic(v) {
                buckets.entry(invariant).or_default().push(v);
            }
        }
        buckets.retain(|_, vs| vs.len() > 1);

        #[allow(deprecated)]
        let mut found = match self {
            Self::Minimum => {
                // ascending invariant order; the first smallest bucket wins
                let mut best: Vec<usize> = Vec::new();
                for vs in buckets.into_values() {
                    if best.is_empty() || vs.len() < best.len() {
                        best = vs;
                    }
                }
                best
            }
            Self::Union => {
                let smallest = buckets.values().map(Vec::len).min().unwrap_or(0);
                buckets
                    .into_values()
                    .filter(|vs| vs.len() == smallest)
                    .flatten()
                    .collect()
            }
            Self::All => buckets.into_values().flatten().collect(),
        };
        found.sort_unstable();
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atom::Atom;
    use crate::bond::Bond;

    #[allow(deprecated)]
    const UNION: EquivalentSetFinder = EquivalentSetFinder::Union;

    /// Two disjoint rings of the given sizes, all carbons.
    fn two_rings(a: usize, b: usize) -> Mol<Atom, Bond> {
        let atoms = vec![Atom::of(6); a + b];
        let mut bonds: Vec<(usize, usize, Bond)> =
            (0..a).map(|i| (i, (i + 1) % a, Bond::default())).collect();
        bonds.extend((0..b).map(|i| (a + i, a + (i + 1) % b, Bond::default())));
        Mol::from_parts(atoms, bonds).unwrap()
    }

    #[test]
    fn acyclic_vertices_are_never_candidates() {
        let mol = Mol::from_parts(
            vec![Atom::of(6); 4],
            vec![
                (0, 1, Bond::default()),
                (1, 2, Bond::default()),
                (2, 3, Bond::default()),
            ],
        )
        .unwrap();
        // all four share an invariant, none is on a ring
        let found = EquivalentSetFinder::All.find(&[5, 5, 5, 5], &mol);
        assert!(found.is_empty());
    }

    #[test]
    fn singleton_buckets_are_dropped() {
        let mol = two_rings(3, 3);
        let found = EquivalentSetFinder::All.find(&[1, 2, 3, 4, 5, 6], &mol);
        assert!(found.is_empty());
    }

    #[test]
    fn minimum_takes_smallest_bucket() {
        let mol = two_rings(3, 4);
        // ring one: invariant 9 (x3); ring two: invariant 7 (x4)
        let found = EquivalentSetFinder::Minimum.find(&[9, 9, 9, 7, 7, 7, 7], &mol);
        assert_eq!(found, vec![0, 1, 2]);
    }

    #[test]
    fn minimum_breaks_size_ties_by_lowest_invariant() {
        let mol = two_rings(3, 3);
        let found = EquivalentSetFinder::Minimum.find(&[9, 9, 9, 7, 7, 7], &mol);
        assert_eq!(found, vec![3, 4, 5]);
    }

    #[test]
    fn union_merges_tied_buckets() {
        let mol = two_rings(3, 3);
        let found = UNION.find(&[9, 9, 9, 7, 7, 7], &mol);
        assert_eq!(found, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn union_ignores_larger_buckets() {
        let mol = two_rings(3, 4);
        let found = UNION.find(&[9, 9, 9, 7, 7, 7, 7], &mol);
        assert_eq!(found, vec![0, 1, 2]);
    }

    #[test]
    fn all_unions_every_bucket() {
        let mol = two_rings(3, 4);
        let found = EquivalentSetFinder::All.find(&[9, 9, 9, 7, 7, 7, 7], &mol);
        assert_eq!(found, vec![0, 1, 2, 3, 4, 5, 6]);
    }
}

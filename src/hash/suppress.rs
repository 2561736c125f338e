//! Atom suppression.
//!
//! Suppression masks selected vertices out of the hash contribution without
//! removing them from the graph, so suppressed atoms still take part in
//! topology- and stereo-dependent computations feeding the remaining atoms.

use crate::mol::Mol;
use crate::traits::HasAtomicNum;

/// The set of vertex indices masked from hash contribution.
///
/// Word-packed membership over `0..n`; computed once per generate call and
/// immutable afterwards.
#[derive(Debug, Clone)]
pub struct Suppressed {
    words: Vec<u64>,
    count: usize,
}

impl Suppressed {
    /// The empty set: nothing suppressed.
    pub fn none() -> Self {
        Self {
            words: Vec::new(),
            count: 0,
        }
    }

    pub fn from_indices(indices: &[usize], n: usize) -> Self {
        let mut words = vec![0u64; n.div_ceil(64)];
        let mut count = 0;
        for &i in indices {
            let word = &mut words[i / 64];
            if *word & (1u64 << (i % 64)) == 0 {
                *word |= 1u64 << (i % 64);
                count += 1;
            }
        }
        Self { words, count }
    }

    pub fn contains(&self, i: usize) -> bool {
        self.words
            .get(i / 64)
            .is_some_and(|word| word & (1u64 << (i % 64)) != 0)
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(w, &word)| {
            (0..64)
                .filter(move |bit| word & (1u64 << bit) != 0)
                .map(move |bit| w * 64 + bit)
        })
    }
}

/// Policy choosing which vertices to suppress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AtomSuppression {
    /// Suppress nothing.
    #[default]
    None,
    /// Suppress every explicit hydrogen, regardless of isotope or charge.
    AnyHydrogens,
    /// Suppress every pseudo atom (no element assigned).
    AnyPseudos,
}

impl AtomSuppression {
    pub fn suppress<A, B>(&self, mol: &Mol<A, B>) -> Suppressed
    where
        A: HasAtomicNum,
    {
        let n = mol.atom_count();
        match self {
            Self::None => Suppressed::none(),
            Self::AnyHydrogens => {
                let indices: Vec<usize> = mol
                    .atoms()
                    .filter(|&idx| mol.atom(idx).atomic_num() == Some(1))
                    .map(|idx| idx.index())
                    .collect();
                Suppressed::from_indices(&indices, n)
            }
            Self::AnyPseudos => {
                let indices: Vec<usize> = mol
                    .atoms()
                    .filter(|&idx| mol.atom(idx).atomic_num().is_none())
                    .map(|idx| idx.index())
                    .collect();
                Suppressed::from_indices(&indices, n)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atom::Atom;
    use crate::bond::Bond;

    #[test]
    fn none_suppresses_nothing() {
        let mol = Mol::<Atom, Bond>::from_parts(vec![Atom::of(1), Atom::of(6)], vec![]).unwrap();
        let suppressed = AtomSuppression::None.suppress(&mol);
        assert_eq!(suppressed.count(), 0);
        assert!(!suppressed.contains(0));
    }

    #[test]
    fn any_hydrogens_matches_isotopes_and_charges() {
        let mol = Mol::<Atom, Bond>::from_parts(
            vec![
                Atom::of(6),
                Atom::of(1),
                Atom {
                    mass_num: Some(2),
                    ..Atom::of(1)
                },
                Atom {
                    formal_charge: Some(1),
                    ..Atom::of(1)
                },
            ],
            vec![],
        )
        .unwrap();
        let suppressed = AtomSuppression::AnyHydrogens.suppress(&mol);
        assert_eq!(suppressed.count(), 3);
        assert!(!suppressed.contains(0));
        assert!(suppressed.contains(1));
        assert!(suppressed.contains(2));
        assert!(suppressed.contains(3));
    }

    #[test]
    fn any_pseudos_matches_elementless_atoms() {
        let mol = Mol::<Atom, Bond>::from_parts(
            vec![Atom::of(6), Atom::default(), Atom::of(1)],
            vec![],
        )
        .unwrap();
        let suppressed = AtomSuppression::AnyPseudos.suppress(&mol);
        assert_eq!(suppressed.count(), 1);
        assert!(suppressed.contains(1));
        assert!(!suppressed.contains(2));
    }

    #[test]
    fn iter_yields_sorted_indices() {
        let suppressed = Suppressed::from_indices(&[70, 3, 65], 80);
        let indices: Vec<usize> = suppressed.iter().collect();
        assert_eq!(indices, vec![3, 65, 70]);
        assert_eq!(suppressed.count(), 3);
    }

    #[test]
    fn duplicate_indices_counted_once() {
        let suppressed = Suppressed::from_indices(&[5, 5], 8);
        assert_eq!(suppressed.count(), 1);
    }
}

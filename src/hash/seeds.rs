//! Initial per-atom invariants.

use petgraph::graph::NodeIndex;

use crate::hash::encode::AtomEncoder;
use crate::hash::prng;
use crate::hash::suppress::{AtomSuppression, Suppressed};
use crate::mol::Mol;
use crate::traits::HasAtomicNum;

/// Produces the seed invariant array a refinement engine starts from.
///
/// Each seed mixes the encoded atom with a molecule-size-dependent
/// multiplier, so identical local substructures embedded in differently
/// sized molecules do not seed identically.
pub struct SeedGenerator<A, B> {
    encoder: Box<dyn AtomEncoder<A, B>>,
    suppression: AtomSuppression,
}

impl<A, B> SeedGenerator<A, B>
where
    A: HasAtomicNum,
{
    pub fn new(encoder: Box<dyn AtomEncoder<A, B>>) -> Self {
        Self::with_suppression(encoder, AtomSuppression::None)
    }

    pub fn with_suppression(
        encoder: Box<dyn AtomEncoder<A, B>>,
        suppression: AtomSuppression,
    ) -> Self {
        Self {
            encoder,
            suppression,
        }
    }

    pub fn generate(&self, mol: &Mol<A, B>) -> Vec<u64> {
        let suppressed = self.suppression.suppress(mol);
        self.seeds(mol, &suppressed)
    }

    pub(crate) fn seeds(&self, mol: &Mol<A, B>, suppressed: &Suppressed) -> Vec<u64> {
        let n = mol.atom_count();
        let m = n - suppressed.count();
        let seed = if m > 1 { 9803 % m as i64 } else { 1 };
        (0..n)
            .map(|v| {
                let encoded = self.encoder.encode(mol, NodeIndex::new(v));
                prng::distribute(seed.wrapping_mul(i64::from(encoded)) as u64)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atom::Atom;
    use crate::bond::Bond;
    use crate::hash::encode::BasicAtomEncoder;

    fn generator() -> SeedGenerator<Atom, Bond> {
        SeedGenerator::new(Box::new(BasicAtomEncoder::AtomicNumber))
    }

    fn chain(elements: &[u8]) -> Mol<Atom, Bond> {
        let atoms = elements.iter().map(|&z| Atom::of(z)).collect();
        let bonds = (0..elements.len().saturating_sub(1))
            .map(|i| (i, i + 1, Bond::default()))
            .collect();
        Mol::from_parts(atoms, bonds).unwrap()
    }

    #[test]
    fn deterministic() {
        let mol = chain(&[6, 6, 8]);
        assert_eq!(generator().generate(&mol), generator().generate(&mol));
    }

    #[test]
    fn equal_atoms_seed_equally() {
        let mol = chain(&[6, 8, 6]);
        let seeds = generator().generate(&mol);
        assert_eq!(seeds[0], seeds[2]);
        assert_ne!(seeds[0], seeds[1]);
    }

    #[test]
    fn molecule_size_changes_seed() {
        // same element, different molecule sizes -> different multiplier
        let small = chain(&[6, 6]);
        let large = chain(&[6, 6, 6, 6, 6]);
        let seeds_small = generator().generate(&small);
        let seeds_large = generator().generate(&large);
        assert_ne!(seeds_small[0], seeds_large[0]);
    }

    #[test]
    fn single_atom_uses_unit_seed() {
        let one = chain(&[6]);
        let seeds = generator().generate(&one);
        assert_eq!(seeds[0], prng::distribute(6));
    }

    #[test]
    fn suppressed_atoms_shrink_the_multiplier_base() {
        // ethane with two explicit hydrogens; suppressing them must change
        // the seeds of the remaining carbons
        let mol = chain(&[6, 6, 1, 1]);
        let plain = SeedGenerator::new(Box::new(BasicAtomEncoder::AtomicNumber));
        let suppressing = SeedGenerator::with_suppression(
            Box::new(BasicAtomEncoder::AtomicNumber),
            AtomSuppression::AnyHydrogens,
        );
        let a = plain.generate(&mol);
        let b = suppressing.generate(&mol);
        assert_ne!(a[0], b[0]);
    }
}

//! Refinement engine with atom suppression.

use crate::hash::refine::{stereo_fixed_point, NeighborScratch};
use crate::hash::seeds::SeedGenerator;
use crate::hash::stereo::{StereoEncoder, StereoEncoderFactory};
use crate::hash::suppress::{AtomSuppression, Suppressed};
use crate::hash::{AtomHashGenerator, HashRefiner};
use crate::mol::Mol;
use crate::traits::HasAtomicNum;

/// Pinned value of a suppressed vertex during refinement. Strictly larger
/// than any refined invariant ranks, so stereo encoders order suppressed
/// neighbors consistently.
const SENTINEL: u64 = u64::MAX;

/// Refinement with suppressed vertices masked out of the hash contribution.
///
/// Suppressed vertices stay in the graph — they still shape topology and
/// stereo perception for their neighbors — but contribute nothing to any
/// XOR combination, and their own slots come back as `0`. This is how a
/// caller hashes "ignoring explicit hydrogens" without deleting them first.
pub struct SuppressedRefiner {
    depth: u32,
}

impl SuppressedRefiner {
    pub fn new(depth: u32) -> Self {
        Self { depth }
    }
}

impl HashRefiner for SuppressedRefiner {
    fn refine(
        &self,
        seeds: Vec<u64>,
        encoder: &mut dyn StereoEncoder,
        graph: &[Vec<usize>],
        suppressed: &Suppressed,
    ) -> Vec<u64> {
        let n = graph.len();
        let mut current = seeds;
        for v in suppressed.iter() {
            current[v] = SENTINEL;
        }
        let mut next = current.clone();
        let mut scratch = NeighborScratch::new(n);

        stereo_fixed_point(encoder, &mut current, &mut next);
        for _ in 0..self.depth {
            for v in 0..n {
                next[v] = if suppressed.contains(v) {
                    current[v]
                } else {
                    scratch.next_value(graph, v, &current, suppressed)
                };
            }
            current.copy_from_slice(&next);
            stereo_fixed_point(encoder, &mut current, &mut next);
        }
        for v in suppressed.iter() {
            current[v] = 0;
        }
        current
    }
}

/// Per-atom hash generator over the suppressed refinement engine.
pub struct SuppressedAtomHashGenerator<A, B> {
    seed_generator: SeedGenerator<A, B>,
    factory: Box<dyn StereoEncoderFactory<A, B>>,
    suppression: AtomSuppression,
    refiner: SuppressedRefiner,
}

impl<A, B> SuppressedAtomHashGenerator<A, B>
where
    A: HasAtomicNum,
{
    pub fn new(
        seed_generator: SeedGenerator<A, B>,
        factory: Box<dyn StereoEncoderFactory<A, B>>,
        suppression: AtomSuppression,
        depth: u32,
    ) -> Self {
        Self {
            seed_generator,
            factory,
            suppression,
            refiner: SuppressedRefiner::new(depth),
        }
    }
}

impl<A, B> AtomHashGenerator<A, B> for SuppressedAtomHashGenerator<A, B>
where
    A: HasAtomicNum,
{
    fn generate(&self, mol: &Mol<A, B>) -> Vec<u64> {
        let graph = mol.to_adjacency();
        let suppressed = self.suppression.suppress(mol);
        let seeds = self.seed_generator.seeds(mol, &suppressed);
        let mut encoder = self.factory.create(mol, &graph);
        self.refiner.refine(seeds, &mut *encoder, &graph, &suppressed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atom::Atom;
    use crate::bond::Bond;
    use crate::hash::basic::BasicAtomHashGenerator;
    use crate::hash::encode::BasicAtomEncoder;
    use crate::hash::stereo::EmptyStereoEncoderFactory;

    fn generator(depth: u32) -> SuppressedAtomHashGenerator<Atom, Bond> {
        SuppressedAtomHashGenerator::new(
            SeedGenerator::with_suppression(
                Box::new(BasicAtomEncoder::AtomicNumber),
                AtomSuppression::AnyHydrogens,
            ),
            Box::new(EmptyStereoEncoderFactory),
            AtomSuppression::AnyHydrogens,
            depth,
        )
    }

    /// Benzene with all six hydrogens as explicit graph atoms (indices 6..12).
    fn benzene_explicit_h() -> Mol<Atom, Bond> {
        let mut atoms: Vec<Atom> = (0..6).map(|_| Atom::of(6)).collect();
        atoms.extend((0..6).map(|_| Atom::of(1)));
        let mut bonds: Vec<(usize, usize, Bond)> = (0..6)
            .map(|i| (i, (i + 1) % 6, Bond::default()))
            .collect();
        bonds.extend((0..6).map(|i| (i, i + 6, Bond::default())));
        Mol::from_parts(atoms, bonds).unwrap()
    }

    #[test]
    fn suppressed_vertices_come_back_zero() {
        let hashes = generator(8).generate(&benzene_explicit_h());
        for (i, &h) in hashes.iter().enumerate().skip(6) {
            assert_eq!(h, 0, "hydrogen {} should hash to zero", i);
        }
    }

    #[test]
    fn benzene_ring_carbons_all_equal_with_hydrogens_suppressed() {
        let hashes = generator(8).generate(&benzene_explicit_h());
        for i in 1..6 {
            assert_eq!(hashes[i], hashes[0]);
        }
        assert_ne!(hashes[0], 0);
    }

    #[test]
    fn heavy_atoms_hash_like_the_hydrogen_depleted_graph() {
        // toluene with explicit methyl hydrogens: suppressed neighbors are
        // skipped entirely, so the heavy atoms must refine exactly as they
        // do in the depleted graph
        let mut atoms: Vec<Atom> = (0..7).map(|_| Atom::of(6)).collect();
        atoms.extend((0..3).map(|_| Atom::of(1)));
        let mut bonds: Vec<(usize, usize, Bond)> = (0..6)
            .map(|i| (i, (i + 1) % 6, Bond::default()))
            .collect();
        bonds.push((0, 6, Bond::default()));
        bonds.extend((0..3).map(|i| (6, 7 + i, Bond::default())));
        let explicit = Mol::from_parts(atoms, bonds).unwrap();

        let depleted = {
            let atoms: Vec<Atom> = (0..7).map(|_| Atom::of(6)).collect();
            let mut bonds: Vec<(usize, usize, Bond)> = (0..6)
                .map(|i| (i, (i + 1) % 6, Bond::default()))
                .collect();
            bonds.push((0, 6, Bond::default()));
            Mol::from_parts(atoms, bonds).unwrap()
        };

        let suppressed_hashes = generator(8).generate(&explicit);
        let plain = BasicAtomHashGenerator::new(
            SeedGenerator::new(Box::new(BasicAtomEncoder::AtomicNumber)),
            Box::new(EmptyStereoEncoderFactory),
            8,
        );
        let depleted_hashes = plain.generate(&depleted);
        assert_eq!(&suppressed_hashes[..7], &depleted_hashes[..]);
    }

    #[test]
    fn no_suppression_policy_degenerates_to_basic() {
        let mol = benzene_explicit_h();
        let no_suppress = SuppressedAtomHashGenerator::new(
            SeedGenerator::new(Box::new(BasicAtomEncoder::AtomicNumber)),
            Box::new(EmptyStereoEncoderFactory),
            AtomSuppression::None,
            8,
        );
        let basic = BasicAtomHashGenerator::new(
            SeedGenerator::new(Box::new(BasicAtomEncoder::AtomicNumber)),
            Box::new(EmptyStereoEncoderFactory),
            8,
        );
        assert_eq!(no_suppress.generate(&mol), basic.generate(&mol));
    }
}

//! Perturbation orchestrator.
//!
//! Refinement alone cannot tell a genuine graph automorphism from a
//! coincidental invariant collision. This generator probes each candidate
//! vertex independently: rotate its seed, re-refine the whole molecule, and
//! record the result as one column of a matrix. True automorphs stay equal
//! under every probe — they are structurally indistinguishable — while
//! vertices that only happened to share a local invariant shift the
//! whole-molecule distribution differently and diverge.

use crate::hash::equivalent::EquivalentSetFinder;
use crate::hash::prng;
use crate::hash::refine::fold_sorted;
use crate::hash::seeds::SeedGenerator;
use crate::hash::stereo::StereoEncoderFactory;
use crate::hash::suppress::AtomSuppression;
use crate::hash::{AtomHashGenerator, HashRefiner};
use crate::mol::Mol;
use crate::traits::HasAtomicNum;

pub struct PerturbedAtomHashGenerator<A, B> {
    seed_generator: SeedGenerator<A, B>,
    refiner: Box<dyn HashRefiner>,
    factory: Box<dyn StereoEncoderFactory<A, B>>,
    finder: EquivalentSetFinder,
    suppression: AtomSuppression,
}

impl<A, B> PerturbedAtomHashGenerator<A, B>
where
    A: HasAtomicNum,
{
    pub fn new(
        seed_generator: SeedGenerator<A, B>,
        refiner: Box<dyn HashRefiner>,
        factory: Box<dyn StereoEncoderFactory<A, B>>,
        finder: EquivalentSetFinder,
        suppression: AtomSuppression,
    ) -> Self {
        Self {
            seed_generator,
            refiner,
            factory,
            finder,
            suppression,
        }
    }
}

impl<A, B> AtomHashGenerator<A, B> for PerturbedAtomHashGenerator<A, B>
where
    A: HasAtomicNum,
{
    fn generate(&self, mol: &Mol<A, B>) -> Vec<u64> {
        let graph = mol.to_adjacency();
        let suppressed = self.suppression.suppress(mol);
        let mut seeds = self.seed_generator.seeds(mol, &suppressed);
        let mut encoder = self.factory.create(mol, &graph);

        let original = self
            .refiner
            .refine(seeds.clone(), &mut *encoder, &graph, &suppressed);

        let equivalents = self.finder.find(&original, mol);
        if equivalents.len() < 2 {
            return original;
        }

        let n = graph.len();
        // row per vertex, column 0 the unperturbed result
        let mut rows = vec![vec![0u64; equivalents.len() + 1]; n];
        for (v, row) in rows.iter_mut().enumerate() {
            row[0] = original[v];
        }

        for (column, &v) in equivalents.iter().enumerate() {
            let saved = seeds[v];
            seeds[v] = prng::next(seeds[v]);
            encoder.reset();
            let probed = self
                .refiner
                .refine(seeds.clone(), &mut *encoder, &graph, &suppressed);
            for (u, row) in rows.iter_mut().enumerate() {
                row[column + 1] = probed[u];
            }
            // perturbations are independent, never cumulative
            seeds[v] = saved;
        }

        rows.into_iter()
            .map(|mut row| {
                row.sort_unstable();
                fold_sorted(&row, 0)
            })
            .collect()
    }
}

//! The basic refinement engine.

use crate::hash::refine::{stereo_fixed_point, NeighborScratch};
use crate::hash::seeds::SeedGenerator;
use crate::hash::stereo::{StereoEncoder, StereoEncoderFactory};
use crate::hash::suppress::Suppressed;
use crate::hash::{AtomHashGenerator, HashRefiner};
use crate::mol::Mol;
use crate::traits::HasAtomicNum;

/// Depth-bounded neighbor-propagation refinement.
///
/// Each round replaces every vertex's value with its own distributed value
/// XORed with its neighbors' contributions, interleaving the stereo
/// encoder's fixed point so newly distinguished invariants become visible
/// to stereo perception before the next round. `depth` rounds propagate
/// information `depth` bonds outward; choose it at least as large as the
/// expected graph eccentricity (6–32 covers typical molecules).
pub struct BasicRefiner {
    depth: u32,
}

impl BasicRefiner {
    pub fn new(depth: u32) -> Self {
        Self { depth }
    }
}

impl HashRefiner for BasicRefiner {
    fn refine(
        &self,
        seeds: Vec<u64>,
        encoder: &mut dyn StereoEncoder,
        graph: &[Vec<usize>],
        _suppressed: &Suppressed,
    ) -> Vec<u64> {
        let n = graph.len();
        let mut current = seeds;
        let mut next = current.clone();
        let none = Suppressed::none();
        let mut scratch = NeighborScratch::new(n);

        stereo_fixed_point(encoder, &mut current, &mut next);
        for _ in 0..self.depth {
            for v in 0..n {
                next[v] = scratch.next_value(graph, v, &current, &none);
            }
            current.copy_from_slice(&next);
            stereo_fixed_point(encoder, &mut current, &mut next);
        }
        current
    }
}

/// Per-atom hash generator over the basic refinement engine.
pub struct BasicAtomHashGenerator<A, B> {
    seed_generator: SeedGenerator<A, B>,
    factory: Box<dyn StereoEncoderFactory<A, B>>,
    refiner: BasicRefiner,
}

impl<A, B> BasicAtomHashGenerator<A, B>
where
    A: HasAtomicNum,
{
    pub fn new(
        seed_generator: SeedGenerator<A, B>,
        factory: Box<dyn StereoEncoderFactory<A, B>>,
        depth: u32,
    ) -> Self {
        Self {
            seed_generator,
            factory,
            refiner: BasicRefiner::new(depth),
        }
    }
}

impl<A, B> AtomHashGenerator<A, B> for BasicAtomHashGenerator<A, B>
where
    A: HasAtomicNum,
{
    fn generate(&self, mol: &Mol<A, B>) -> Vec<u64> {
        let graph = mol.to_adjacency();
        let seeds = self.seed_generator.generate(mol);
        let mut encoder = self.factory.create(mol, &graph);
        self.refiner
            .refine(seeds, &mut *encoder, &graph, &Suppressed::none())
    }
}

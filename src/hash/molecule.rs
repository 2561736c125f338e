//! Whole-molecule hash reduction.

use crate::hash::refine::fold_sorted;
use crate::hash::AtomHashGenerator;
use crate::hash::MoleculeHashGenerator;
use crate::mol::Mol;

/// Folds the per-atom hash array into a single scalar.
///
/// The array is sorted before combining, which is what makes the scalar
/// independent of the container's internal atom ordering. Repeated values
/// go through the duplicate-rotation rule so symmetric atoms do not cancel.
pub struct BasicMoleculeHashGenerator<A, B> {
    generator: Box<dyn AtomHashGenerator<A, B>>,
}

const SEED: u64 = 2147483647;

impl<A, B> BasicMoleculeHashGenerator<A, B> {
    pub fn new(generator: Box<dyn AtomHashGenerator<A, B>>) -> Self {
        Self { generator }
    }
}

impl<A, B> MoleculeHashGenerator<A, B> for BasicMoleculeHashGenerator<A, B> {
    fn generate(&self, mol: &Mol<A, B>) -> u64 {
        let mut hashes = self.generator.generate(mol);
        hashes.sort_unstable();
        fold_sorted(&hashes, SEED)
    }
}

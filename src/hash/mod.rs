//! Order-independent hash codes for molecular graphs.
//!
//! Hashing runs in stages: a [`SeedGenerator`] turns per-atom attributes
//! into initial invariants, a refinement engine propagates them along bonds
//! for a fixed number of rounds ([`BasicAtomHashGenerator`], or
//! [`SuppressedAtomHashGenerator`] to mask selected atoms), and optionally a
//! [`PerturbedAtomHashGenerator`] breaks ties among ring-symmetric atoms by
//! probing each candidate with a perturbed seed. A
//! [`BasicMoleculeHashGenerator`] folds the per-atom array into one scalar.
//!
//! Collisions between genuinely different molecules remain possible — this
//! is a fast heuristic, not exact canonical labeling. Callers needing
//! certainty must follow a hash match with a full structural comparison.
//!
//! # Example
//!
//! ```
//! use hashcrab::hash::{HashGeneratorBuilder, MoleculeHashGenerator};
//! use hashcrab::{Atom, Bond, Mol};
//!
//! let ethanol = Mol::from_parts(
//!     vec![Atom::of(6), Atom::of(6), Atom::of(8)],
//!     vec![(0, 1, Bond::default()), (1, 2, Bond::default())],
//! )
//! .unwrap();
//!
//! let generator = HashGeneratorBuilder::new()
//!     .depth(8)
//!     .elemental()
//!     .charged()
//!     .molecular()
//!     .unwrap();
//! assert_eq!(generator.generate(&ethanol), generator.generate(&ethanol));
//! ```

mod basic;
mod builder;
mod encode;
mod equivalent;
mod error;
mod molecule;
mod perturbed;
pub(crate) mod prng;
mod refine;
mod seeds;
mod stereo;
mod suppress;
mod suppressed;

pub use basic::{BasicAtomHashGenerator, BasicRefiner};
pub use builder::HashGeneratorBuilder;
pub use encode::{AtomEncoder, BasicAtomEncoder, ConjugatedAtomEncoder};
pub use equivalent::EquivalentSetFinder;
pub use error::HashBuildError;
pub use molecule::BasicMoleculeHashGenerator;
pub use perturbed::PerturbedAtomHashGenerator;
pub use seeds::SeedGenerator;
pub use stereo::{
    EmptyStereoEncoder, EmptyStereoEncoderFactory, MultiStereoEncoder, StereoEncoder,
    StereoEncoderFactory,
};
pub use suppress::{AtomSuppression, Suppressed};
pub use suppressed::{SuppressedAtomHashGenerator, SuppressedRefiner};

use crate::mol::Mol;

/// Produces one hash value per atom.
pub trait AtomHashGenerator<A, B> {
    fn generate(&self, mol: &Mol<A, B>) -> Vec<u64>;
}

/// Produces a single order-independent hash for the whole molecule.
pub trait MoleculeHashGenerator<A, B> {
    fn generate(&self, mol: &Mol<A, B>) -> u64;
}

/// A refinement engine: turns seed invariants into refined per-atom hashes
/// against a fixed adjacency list, stereo encoder, and suppressed set.
///
/// Implemented by [`BasicRefiner`] and [`SuppressedRefiner`]; the
/// perturbation orchestrator drives one of these repeatedly with
/// independently perturbed seeds.
pub trait HashRefiner {
    fn refine(
        &self,
        seeds: Vec<u64>,
        encoder: &mut dyn StereoEncoder,
        graph: &[Vec<usize>],
        suppressed: &Suppressed,
    ) -> Vec<u64>;
}

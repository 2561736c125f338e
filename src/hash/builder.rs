//! Fluent configuration for assembling hash generators.

use crate::hash::basic::{BasicAtomHashGenerator, BasicRefiner};
use crate::hash::encode::{AtomEncoder, BasicAtomEncoder, ConjugatedAtomEncoder};
use crate::hash::equivalent::EquivalentSetFinder;
use crate::hash::error::HashBuildError;
use crate::hash::molecule::BasicMoleculeHashGenerator;
use crate::hash::perturbed::PerturbedAtomHashGenerator;
use crate::hash::seeds::SeedGenerator;
use crate::hash::stereo::{EmptyStereoEncoderFactory, StereoEncoderFactory};
use crate::hash::suppress::AtomSuppression;
use crate::hash::suppressed::{SuppressedAtomHashGenerator, SuppressedRefiner};
use crate::hash::{AtomHashGenerator, HashRefiner, MoleculeHashGenerator};
use crate::traits::{
    HasAtomicNum, HasBondOrder, HasFormalCharge, HasHybridization, HasMassNum, HasRadicalCount,
};

/// Assembles a fully configured atom- or molecule-level hash generator.
///
/// Encoder order is significant: calling `elemental().charged()` and
/// `charged().elemental()` yields generators whose hashes differ on every
/// molecule. Configuration errors (an empty encoder list) surface from the
/// terminal calls, before any generation runs.
///
/// ```
/// use hashcrab::hash::{AtomHashGenerator, HashGeneratorBuilder};
/// use hashcrab::{Atom, Bond, Mol};
///
/// let generator = HashGeneratorBuilder::new()
///     .depth(16)
///     .elemental()
///     .isotopic()
///     .suppress_hydrogens()
///     .perturbed()
///     .atomic()
///     .unwrap();
/// let methane = Mol::<Atom, Bond>::from_parts(vec![Atom::of(6)], vec![]).unwrap();
/// assert_eq!(generator.generate(&methane).len(), 1);
/// ```
pub struct HashGeneratorBuilder<A, B> {
    depth: u32,
    encoders: Vec<Box<dyn AtomEncoder<A, B>>>,
    suppression: AtomSuppression,
    finder: Option<EquivalentSetFinder>,
    factory: Option<Box<dyn StereoEncoderFactory<A, B>>>,
}

impl<A, B> HashGeneratorBuilder<A, B>
where
    A: HasAtomicNum + HasMassNum + HasFormalCharge + HasHybridization + HasRadicalCount + 'static,
    B: HasBondOrder + 'static,
{
    pub fn new() -> Self {
        Self {
            depth: 8,
            encoders: Vec::new(),
            suppression: AtomSuppression::None,
            finder: None,
            factory: None,
        }
    }

    /// Number of propagation rounds. Should be at least the expected
    /// eccentricity of the input graphs; 6–32 is the recommended range.
    pub fn depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Encode atomic numbers.
    pub fn elemental(self) -> Self {
        self.encode(Box::new(BasicAtomEncoder::AtomicNumber))
    }

    /// Encode mass numbers, distinguishing isotopes.
    pub fn isotopic(self) -> Self {
        self.encode(Box::new(BasicAtomEncoder::MassNumber))
    }

    /// Encode formal charges.
    pub fn charged(self) -> Self {
        self.encode(Box::new(BasicAtomEncoder::FormalCharge))
    }

    /// Encode unpaired electron counts.
    pub fn radical(self) -> Self {
        self.encode(Box::new(BasicAtomEncoder::FreeRadicals))
    }

    /// Encode orbital hybridization.
    pub fn orbital(self) -> Self {
        self.encode(Box::new(BasicAtomEncoder::OrbitalHybridization))
    }

    /// Append a custom encoder. Position in the call sequence fixes its
    /// position in the conjugated fold.
    pub fn encode(mut self, encoder: Box<dyn AtomEncoder<A, B>>) -> Self {
        self.encoders.push(encoder);
        self
    }

    /// Mask every explicit hydrogen from hash contribution.
    pub fn suppress_hydrogens(mut self) -> Self {
        self.suppression = AtomSuppression::AnyHydrogens;
        self
    }

    /// Mask every pseudo atom from hash contribution.
    pub fn suppress_pseudo_atoms(mut self) -> Self {
        self.suppression = AtomSuppression::AnyPseudos;
        self
    }

    /// Install a stereo encoder factory. Without one, stereochemistry does
    /// not influence the hashes.
    pub fn stereo(mut self, factory: Box<dyn StereoEncoderFactory<A, B>>) -> Self {
        self.factory = Some(factory);
        self
    }

    /// Break ties among ring-symmetric atoms using the
    /// [`Minimum`](EquivalentSetFinder::Minimum) strategy.
    pub fn perturbed(self) -> Self {
        self.perturbed_with(EquivalentSetFinder::Minimum)
    }

    /// Break ties with an explicit equivalent-set strategy.
    pub fn perturbed_with(mut self, finder: EquivalentSetFinder) -> Self {
        self.finder = Some(finder);
        self
    }

    /// Assemble the per-atom generator.
    pub fn atomic(self) -> Result<Box<dyn AtomHashGenerator<A, B>>, HashBuildError> {
        let encoder = ConjugatedAtomEncoder::new(self.encoders)?;
        let seed_generator =
            SeedGenerator::with_suppression(Box::new(encoder), self.suppression);
        let factory = self
            .factory
            .unwrap_or_else(|| Box::new(EmptyStereoEncoderFactory));

        Ok(match self.finder {
            None => match self.suppression {
                AtomSuppression::None => Box::new(BasicAtomHashGenerator::new(
                    seed_generator,
                    factory,
                    self.depth,
                )),
                suppression => Box::new(SuppressedAtomHashGenerator::new(
                    seed_generator,
                    factory,
                    suppression,
                    self.depth,
                )),
            },
            Some(finder) => {
                let refiner: Box<dyn HashRefiner> = match self.suppression {
                    AtomSuppression::None => Box::new(BasicRefiner::new(self.depth)),
                    _ => Box::new(SuppressedRefiner::new(self.depth)),
                };
                Box::new(PerturbedAtomHashGenerator::new(
                    seed_generator,
                    refiner,
                    factory,
                    finder,
                    self.suppression,
                ))
            }
        })
    }

    /// Assemble the molecule-level generator.
    pub fn molecular(self) -> Result<Box<dyn MoleculeHashGenerator<A, B>>, HashBuildError> {
        Ok(Box::new(BasicMoleculeHashGenerator::new(self.atomic()?)))
    }
}

impl<A, B> Default for HashGeneratorBuilder<A, B>
where
    A: HasAtomicNum + HasMassNum + HasFormalCharge + HasHybridization + HasRadicalCount + 'static,
    B: HasBondOrder + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

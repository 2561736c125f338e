//! Per-atom invariant encoders.
//!
//! An encoder maps one atom to an `i32` invariant from its intrinsic
//! attributes and immediate connectivity. Encoders compose: a
//! [`ConjugatedAtomEncoder`] folds an ordered list into one value, and that
//! order is part of the observable contract — reordering encoders changes
//! every downstream hash.

use petgraph::graph::NodeIndex;

use crate::atom::Hybridization;
use crate::hash::error::HashBuildError;
use crate::mol::Mol;
use crate::traits::{
    HasAtomicNum, HasBondOrder, HasFormalCharge, HasHybridization, HasMassNum, HasRadicalCount,
};

/// Maps an atom to an invariant value.
pub trait AtomEncoder<A, B> {
    fn encode(&self, mol: &Mol<A, B>, atom: NodeIndex) -> i32;
}

// Fallbacks for unset attributes. Large primes, so "unknown" never collides
// with a real small value.
const UNSET_ATOMIC_NUM: i32 = 32451169;
const UNSET_MASS_NUM: i32 = 32451179;
const UNSET_FORMAL_CHARGE: i32 = 32451193;
const UNSET_HYBRIDIZATION: i32 = 32451301;

/// The built-in single-attribute encoders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BasicAtomEncoder {
    AtomicNumber,
    MassNumber,
    FormalCharge,
    /// Degree: number of connected atoms.
    NConnectedAtoms,
    /// Hash of the summed numeric bond orders around the atom.
    BondOrderSum,
    OrbitalHybridization,
    FreeRadicals,
}

impl<A, B> AtomEncoder<A, B> for BasicAtomEncoder
where
    A: HasAtomicNum + HasMassNum + HasFormalCharge + HasHybridization + HasRadicalCount,
    B: HasBondOrder,
{
    fn encode(&self, mol: &Mol<A, B>, atom: NodeIndex) -> i32 {
        let a = mol.atom(atom);
        match self {
            Self::AtomicNumber => a
                .atomic_num()
                .map_or(UNSET_ATOMIC_NUM, |num| i32::from(num)),
            Self::MassNumber => a.mass_num().map_or(UNSET_MASS_NUM, i32::from),
            Self::FormalCharge => a
                .formal_charge()
                .map_or(UNSET_FORMAL_CHARGE, i32::from),
            Self::NConnectedAtoms => mol.neighbors(atom).count() as i32,
            Self::BondOrderSum => {
                let sum: f64 = mol
                    .bonds_of(atom)
                    .map(|e| f64::from(mol.bond(e).bond_order().numeric()))
                    .sum();
                hash_f64(sum)
            }
            Self::OrbitalHybridization => a
                .hybridization()
                .map_or(UNSET_HYBRIDIZATION, hybridization_ordinal),
            Self::FreeRadicals => i32::from(a.radical_electrons()),
        }
    }
}

fn hybridization_ordinal(h: Hybridization) -> i32 {
    match h {
        Hybridization::S => 0,
        Hybridization::SP => 1,
        Hybridization::SP2 => 2,
        Hybridization::SP3 => 3,
        Hybridization::SP3D => 4,
        Hybridization::SP3D2 => 5,
        Hybridization::Other => 6,
    }
}

fn hash_f64(value: f64) -> i32 {
    let bits = value.to_bits();
    (bits ^ (bits >> 32)) as i32
}

/// Folds an ordered list of encoders into one invariant.
///
/// `acc = 31 * acc + encode(...)`, wrapping, seeded at a fixed odd constant.
pub struct ConjugatedAtomEncoder<A, B> {
    encoders: Vec<Box<dyn AtomEncoder<A, B>>>,
}

impl<A, B> ConjugatedAtomEncoder<A, B> {
    pub fn new(encoders: Vec<Box<dyn AtomEncoder<A, B>>>) -> Result<Self, HashBuildError> {
        if encoders.is_empty() {
            return Err(HashBuildError::NoAtomEncoders);
        }
        Ok(Self { encoders })
    }
}

impl<A, B> AtomEncoder<A, B> for ConjugatedAtomEncoder<A, B> {
    fn encode(&self, mol: &Mol<A, B>, atom: NodeIndex) -> i32 {
        let mut hash = 179426549i32;
        for encoder in &self.encoders {
            hash = hash.wrapping_mul(31).wrapping_add(encoder.encode(mol, atom));
        }
        hash
    }
}

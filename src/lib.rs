//! Deterministic, order-independent identity codes for molecular graphs.
//!
//! `hashcrab` computes per-atom and whole-molecule hash codes from a labeled
//! graph of atoms and bonds. The codes are cheap structural-equivalence
//! probes — duplicate detection, set membership, cache keys — with a small
//! documented collision risk, not an exact canonical labeling.
//!
//! See the [`hash`] module for the generator pipeline and the
//! [`hash::HashGeneratorBuilder`] entry point.

pub mod atom;
pub mod bond;
pub mod cyclic;
pub mod graph_ops;
pub mod hash;
pub mod mol;
pub mod traits;

pub use atom::{Atom, Hybridization};
pub use bond::{Bond, BondOrder};
pub use cyclic::RingMembership;
pub use graph_ops::{renumber_atoms, RenumberError};
pub use mol::{Mol, MolError};
pub use traits::{
    HasAtomicNum, HasBondOrder, HasFormalCharge, HasHybridization, HasMassNum, HasRadicalCount,
};

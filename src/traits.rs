use crate::atom::Hybridization;
use crate::bond::BondOrder;

pub trait HasAtomicNum {
    /// `None` marks a pseudo atom with no element assigned.
    fn atomic_num(&self) -> Option<u8>;
}

pub trait HasMassNum {
    /// `None` means natural isotopic abundance.
    fn mass_num(&self) -> Option<u16>;
}

pub trait HasFormalCharge {
    fn formal_charge(&self) -> Option<i8>;
}

pub trait HasHybridization {
    fn hybridization(&self) -> Option<Hybridization>;
}

pub trait HasRadicalCount {
    fn radical_electrons(&self) -> u8;
}

pub trait HasBondOrder {
    fn bond_order(&self) -> BondOrder;
}

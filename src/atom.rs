/// Orbital hybridization of an atom.
///
/// Stored on [`Atom`] when known. Hashing treats an absent hybridization as
/// an unset attribute rather than guessing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hybridization {
    S,
    SP,
    SP2,
    SP3,
    SP3D,
    SP3D2,
    Other,
}

/// Default atom type for a molecular graph node.
///
/// `Atom` stores intrinsic atomic properties — the things you would read off
/// a structural formula. Attributes that a structure source may legitimately
/// leave unassigned are `Option`s; the hash encoders substitute a fixed
/// fallback for `None` so an unset attribute never collides with a real
/// small value.
///
/// # Examples
///
/// ```
/// use hashcrab::Atom;
///
/// let carbon = Atom {
///     atomic_num: Some(6),
///     hydrogen_count: 3,
///     ..Atom::default()
/// };
/// assert_eq!(carbon.atomic_num, Some(6));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Atom {
    /// Atomic number (1 = H, 6 = C, 7 = N, …). `None` marks a pseudo atom:
    /// a placeholder vertex with no element assigned.
    pub atomic_num: Option<u8>,
    /// Mass number. `None` means natural isotopic abundance (the common case).
    pub mass_num: Option<u16>,
    /// Formal charge in elementary charge units. `None` when the source did
    /// not assign one; distinct from an explicit charge of zero.
    pub formal_charge: Option<i8>,
    /// Number of virtual (suppressed) hydrogens on this atom.
    ///
    /// These are not graph nodes — they are implied by the atom's valence.
    pub hydrogen_count: u8,
    /// Orbital hybridization, if perceived.
    pub hybridization: Option<Hybridization>,
    /// Count of unpaired electrons.
    pub radical_electrons: u8,
}

impl Atom {
    /// An atom of the given element with every other attribute defaulted.
    pub fn of(atomic_num: u8) -> Self {
        Self {
            atomic_num: Some(atomic_num),
            ..Self::default()
        }
    }
}

impl crate::traits::HasAtomicNum for Atom {
    fn atomic_num(&self) -> Option<u8> {
        self.atomic_num
    }
}

impl crate::traits::HasMassNum for Atom {
    fn mass_num(&self) -> Option<u16> {
        self.mass_num
    }
}

impl crate::traits::HasFormalCharge for Atom {
    fn formal_charge(&self) -> Option<i8> {
        self.formal_charge
    }
}

impl crate::traits::HasHybridization for Atom {
    fn hybridization(&self) -> Option<Hybridization> {
        self.hybridization
    }
}

impl crate::traits::HasRadicalCount for Atom {
    fn radical_electrons(&self) -> u8 {
        self.radical_electrons
    }
}

use petgraph::graph::NodeIndex;

use crate::mol::Mol;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenumberError {
    LengthMismatch { expected: usize, got: usize },
    InvalidPermutation,
}

impl std::fmt::Display for RenumberError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LengthMismatch { expected, got } => {
                write!(f, "new_order length {got} != atom count {expected}")
            }
            Self::InvalidPermutation => write!(f, "new_order is not a valid permutation"),
        }
    }
}

impl std::error::Error for RenumberError {}

fn validate_permutation(new_order: &[usize], n: usize) -> Result<(), RenumberError> {
    if new_order.len() != n {
        return Err(RenumberError::LengthMismatch {
            expected: n,
            got: new_order.len(),
        });
    }
    let mut seen = vec![false; n];
    for &idx in new_order {
        if idx >= n || seen[idx] {
            return Err(RenumberError::InvalidPermutation);
        }
        seen[idx] = true;
    }
    Ok(())
}

/// Rebuild a molecule with its atoms in a new order.
///
/// `new_order[new_idx] = old_idx`. Bond attributes and connectivity are
/// preserved under the relabeling.
pub fn renumber_atoms<A: Clone, B: Clone>(
    mol: &Mol<A, B>,
    new_order: &[usize],
) -> Result<Mol<A, B>, RenumberError> {
    let n = mol.atom_count();
    validate_permutation(new_order, n)?;

    let mut new_mol = Mol::new();

    for &old_idx in new_order {
        new_mol.add_atom(mol.atom(NodeIndex::new(old_idx)).clone());
    }

    // old_to_new[old_idx] = new_idx
    let mut old_to_new = vec![0usize; n];
    for (new_idx, &old_idx) in new_order.iter().enumerate() {
        old_to_new[old_idx] = new_idx;
    }

    for edge in mol.bonds() {
        let (a, b) = mol.bond_endpoints(edge).expect("edge endpoints exist");
        let new_a = NodeIndex::new(old_to_new[a.index()]);
        let new_b = NodeIndex::new(old_to_new[b.index()]);
        new_mol.add_bond(new_a, new_b, mol.bond(edge).clone());
    }

    Ok(new_mol)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atom::Atom;
    use crate::bond::Bond;

    fn n(i: usize) -> NodeIndex {
        NodeIndex::new(i)
    }

    fn propanol() -> Mol<Atom, Bond> {
        Mol::from_parts(
            vec![Atom::of(6), Atom::of(6), Atom::of(8)],
            vec![(0, 1, Bond::default()), (1, 2, Bond::default())],
        )
        .unwrap()
    }

    #[test]
    fn renumber_identity() {
        let mol = propanol();
        let identity: Vec<usize> = (0..mol.atom_count()).collect();
        let renum = renumber_atoms(&mol, &identity).unwrap();
        assert_eq!(renum.atom_count(), mol.atom_count());
        assert_eq!(renum.bond_count(), mol.bond_count());
        for i in 0..mol.atom_count() {
            assert_eq!(renum.atom(n(i)).atomic_num, mol.atom(n(i)).atomic_num);
        }
    }

    #[test]
    fn renumber_reversed() {
        let mol = propanol();
        let reversed: Vec<usize> = (0..mol.atom_count()).rev().collect();
        let renum = renumber_atoms(&mol, &reversed).unwrap();
        assert_eq!(renum.atom(n(0)).atomic_num, Some(8));
        assert_eq!(renum.atom(n(2)).atomic_num, Some(6));
        assert!(renum.bond_between(n(0), n(1)).is_some());
        assert!(renum.bond_between(n(1), n(2)).is_some());
        assert!(renum.bond_between(n(0), n(2)).is_none());
    }

    #[test]
    fn renumber_rejects_wrong_length() {
        let mol = propanol();
        let err = renumber_atoms(&mol, &[0, 1]).unwrap_err();
        assert_eq!(
            err,
            RenumberError::LengthMismatch {
                expected: 3,
                got: 2
            }
        );
    }

    #[test]
    fn renumber_rejects_duplicate() {
        let mol = propanol();
        let err = renumber_atoms(&mol, &[0, 0, 1]).unwrap_err();
        assert_eq!(err, RenumberError::InvalidPermutation);
    }
}

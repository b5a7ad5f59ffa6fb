//! Enumerate bond paths of a fixed length in a molecular graph.
//!
//! A path of length `n` is a walk over `n` distinct bonds that never returns
//! to an atom it has already visited, with one exception: the last bond may
//! close back onto the first atom, giving a ring of exactly `n` bonds. Rings
//! are reported alongside open paths; telling them apart is left to the
//! caller (see [`crate::subgraph::Subgraph::classify`]).

use std::collections::HashSet;

use bit_set::BitSet;

use crate::{
    error::Result,
    molecule::{BondIndex, Element, MolGraph},
};

/// Return every path of `n` bonds in `mol`, each as the sequence of bond
/// indices along the walk that first discovered it.
///
/// Every bond set is reported once. Walks start from atoms in ascending index
/// order and always try lower bond indices first, so the output order is
/// fully determined by the molecule. If `include_hydrogens` is false, bonds
/// touching a hydrogen atom are ignored.
pub fn paths_of_length<M>(
    mol: &M,
    n: usize,
    include_hydrogens: bool,
) -> Result<Vec<Vec<BondIndex>>>
where
    M: MolGraph + ?Sized,
{
    let mut paths = Vec::new();
    if n == 0 {
        return Ok(paths);
    }

    let mut excluded = BitSet::with_capacity(mol.atom_count());
    if !include_hydrogens {
        for ix in 0..mol.atom_count() {
            if mol.atom(ix)?.element() == Element::Hydrogen {
                excluded.insert(ix);
            }
        }
    }

    // Bond sets found so far, so that a path found again from its other end
    // (or a ring found from each of its atoms) is only reported once.
    let mut seen: HashSet<BitSet> = HashSet::new();

    for start in (0..mol.atom_count()).filter(|ix| !excluded.contains(*ix)) {
        // Do the usual trick of transforming recursive algorithms into
        // iterative ones by maintaining a stack of partial walks. Each entry
        // holds the walk's current tail atom, the atoms it has visited, and
        // the bonds it has used so far.
        let mut stack = vec![(start, BitSet::<u32>::from_iter([start]), Vec::with_capacity(n))];
        while let Some((tail, atoms, bonds)) = stack.pop() {
            if bonds.len() == n {
                if seen.insert(BitSet::from_iter(bonds.iter().copied())) {
                    paths.push(bonds);
                }
                continue;
            }

            let last_step = bonds.len() + 1 == n;
            let mut extensions = Vec::new();
            for b in mol.bonds_of(tail)? {
                if bonds.contains(&b) {
                    continue;
                }
                let bond = mol.bond(b)?;
                let next = if bond.begin == tail { bond.end } else { bond.begin };
                if excluded.contains(next) {
                    continue;
                }

                // Two bonds cannot close a ring without a doubled edge.
                let closes_ring = last_step && n >= 3 && next == start;
                if atoms.contains(next) && !closes_ring {
                    continue;
                }

                let mut next_atoms = atoms.clone();
                next_atoms.insert(next);
                let mut next_bonds = bonds.clone();
                next_bonds.push(b);
                extensions.push((next, next_atoms, next_bonds));
            }

            // Reverse so the lowest bond index is popped first.
            stack.extend(extensions.into_iter().rev());
        }
    }

    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::molecule::{Bond, Molecule};

    fn chain(symbols: &[&str]) -> Molecule {
        let bonds: Vec<_> = (1..symbols.len())
            .map(|i| (i - 1, i, Bond::Single))
            .collect();
        Molecule::from_parts(symbols, &bonds).unwrap()
    }

    fn ring(size: usize) -> Molecule {
        let symbols = vec!["C"; size];
        let bonds: Vec<_> = (0..size)
            .map(|i| (i, (i + 1) % size, Bond::Single))
            .collect();
        Molecule::from_parts(symbols.as_slice(), &bonds).unwrap()
    }

    #[test]
    fn butane_has_one_three_bond_path() {
        let mol = chain(&["C", "C", "C", "O"]);
        assert_eq!(paths_of_length(&mol, 3, true).unwrap(), vec![vec![0, 1, 2]]);
        assert_eq!(
            paths_of_length(&mol, 1, true).unwrap(),
            vec![vec![0], vec![1], vec![2]]
        );
        assert!(paths_of_length(&mol, 4, true).unwrap().is_empty());
        assert!(paths_of_length(&mol, 0, true).unwrap().is_empty());
    }

    #[test]
    fn four_ring_paths_and_closure() {
        let mol = ring(4);
        assert_eq!(
            paths_of_length(&mol, 3, true).unwrap(),
            vec![vec![0, 1, 2], vec![3, 2, 1], vec![0, 3, 2], vec![1, 0, 3]]
        );
        assert_eq!(paths_of_length(&mol, 4, true).unwrap(), vec![vec![0, 1, 2, 3]]);
    }

    #[test]
    fn triangle_closes_at_three() {
        let mol = ring(3);
        assert_eq!(paths_of_length(&mol, 3, true).unwrap(), vec![vec![0, 1, 2]]);
        assert_eq!(paths_of_length(&mol, 2, true).unwrap().len(), 3);
    }

    #[test]
    fn branches_are_never_paths() {
        // Isobutane skeleton: a central carbon with three neighbours.
        let mol = Molecule::from_parts(
            &["C", "C", "C", "C"],
            &[(0, 1, Bond::Single), (0, 2, Bond::Single), (0, 3, Bond::Single)],
        )
        .unwrap();
        assert_eq!(paths_of_length(&mol, 2, true).unwrap().len(), 3);
        assert!(paths_of_length(&mol, 3, true).unwrap().is_empty());
    }

    #[test]
    fn hydrogens_can_be_excluded() {
        let mol = chain(&["H", "C", "O", "H"]);
        assert_eq!(paths_of_length(&mol, 3, true).unwrap(), vec![vec![0, 1, 2]]);
        assert!(paths_of_length(&mol, 3, false).unwrap().is_empty());
        assert_eq!(paths_of_length(&mol, 1, false).unwrap(), vec![vec![1]]);
    }
}

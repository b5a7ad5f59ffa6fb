//! Render an ordered atom path as a bond-annotated fragment string.
//!
//! The notation is element symbols interleaved with bond glyphs, e.g.
//! `C=C-O`. It only borrows the glyphs of SMILES and is not itself a
//! line notation.

use crate::{
    error::{FragmentError, MalformedFragment, Result},
    fragment::FragmentPolicy,
    molecule::{AtomIndex, MolGraph},
};

/// Render `path` against `mol`.
///
/// Each pair of consecutive atoms is looked up with
/// [`MolGraph::bond_between`]. Bonds without a glyph (aromatic, unspecified)
/// contribute nothing under [`FragmentPolicy::Permissive`], which leaves two
/// symbols side by side; under [`FragmentPolicy::Strict`] they are an error.
pub fn render<M>(mol: &M, path: &[AtomIndex], policy: FragmentPolicy) -> Result<String>
where
    M: MolGraph + ?Sized,
{
    let mut out = String::with_capacity(3 * path.len());
    for (i, &ix) in path.iter().enumerate() {
        let atom = mol.atom(ix)?;
        if i > 0 {
            let begin = path[i - 1];
            let bond = mol
                .bond_between(begin, ix)
                .ok_or(MalformedFragment::Disconnected { begin, end: ix })?;
            match (bond.glyph(), policy) {
                (Some(glyph), _) => out.push(glyph),
                (None, FragmentPolicy::Permissive) => {}
                (None, FragmentPolicy::Strict) => {
                    return Err(FragmentError::from(MalformedFragment::UnmappedBond {
                        begin,
                        end: ix,
                        bond,
                    }))
                }
            }
        }
        out.push_str(atom.symbol());
    }
    Ok(out)
}

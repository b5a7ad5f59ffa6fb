use pyo3::{exceptions::PyValueError, prelude::*};

use crate::{
    fragment::{linear_fragments, FragmentConfig, FragmentPolicy},
    molecule::{AtomIndex, Bond, Molecule},
};

/// Map a numeric bond order to a [`Bond`]. Whole orders go through
/// `Bond::try_from`; 1.5 is aromatic. Anything else is rejected.
fn bond_from_order(order: f64) -> Option<Bond> {
    if order == 1.5 {
        Some(Bond::Aromatic)
    } else if order.fract() == 0.0 && order >= 0.0 {
        Bond::try_from(order as usize).ok()
    } else {
        None
    }
}

/// Extract linear fragments of `n_len` bonds.
///
/// `symbols` are the element symbols of the atoms in index order and `bonds`
/// are `(begin, end, order)` triples, where an order of 1.5 means aromatic.
/// Returns the fragment strings and the matching lists of atom indices.
#[pyfunction]
#[pyo3(signature = (symbols, bonds, n_len=3, strict=false))]
fn generate_linear_fragments(
    symbols: Vec<String>,
    bonds: Vec<(AtomIndex, AtomIndex, f64)>,
    n_len: usize,
    strict: bool,
) -> PyResult<(Vec<String>, Vec<Vec<AtomIndex>>)> {
    let bonds = bonds
        .into_iter()
        .map(|(a, b, order)| match bond_from_order(order) {
            Some(bond) => Ok((a, b, bond)),
            None => Err(PyValueError::new_err(format!(
                "bond {a}-{b} has unsupported order {order}"
            ))),
        })
        .collect::<PyResult<Vec<_>>>()?;
    let mol = Molecule::from_parts(symbols.as_slice(), &bonds)
        .map_err(|e| PyValueError::new_err(e.to_string()))?;

    let policy = if strict {
        FragmentPolicy::Strict
    } else {
        FragmentPolicy::Permissive
    };
    let config = FragmentConfig::default()
        .with_path_length(n_len)
        .with_policy(policy);
    let fragments =
        linear_fragments(&mol, &config).map_err(|e| PyValueError::new_err(e.to_string()))?;
    Ok(fragments.into_parts())
}

/// A Python module implemented in Rust. The module name must match
/// the `lib.name` setting in the `Cargo.toml`, else Python will not be able to
/// import the module.
#[pymodule]
#[pyo3(name = "linear_fragments")]
fn _linear_fragments(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(generate_linear_fragments, m)?)?;
    Ok(())
}

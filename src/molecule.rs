//! Graph-theoretic representation of a molecule.
//!
//! Atoms are nodes and bonds are edges of an undirected petgraph [`Graph`].
//! Atom and bond indices are the node and edge indices, handed out in
//! insertion order, so they are stable for the lifetime of a [`Molecule`].
//! Fragment extraction only ever reads a molecule through the [`MolGraph`]
//! trait.

use std::{collections::HashSet, fmt::Display, str::FromStr};

use petgraph::{
    dot::Dot,
    graph::{EdgeIndex, Graph, NodeIndex},
    visit::EdgeRef,
    Undirected,
};

use crate::error::{FragmentError, Result};

pub(crate) type Index = u32;
pub(crate) type MGraph = Graph<Atom, Bond, Undirected, Index>;

/// Position of an atom within its molecule.
pub type AtomIndex = usize;
/// Position of a bond within its molecule.
pub type BondIndex = usize;

/// Thrown by [`Element::from_str`] if the string does not represent a valid
/// chemical element.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ParseElementError;

macro_rules! periodic_table {
    ( $(($element:ident, $name:literal),)* ) => {
        #[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        /// Represents a chemical element.
        pub enum Element {
            $( $element, )*
        }

        impl Element {
            /// Return the element symbol, e.g. `"Cl"`.
            pub fn symbol(&self) -> &'static str {
                match &self {
                    $( Element::$element => $name, )*
                }
            }
        }

        impl Display for Element {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.symbol())
            }
        }

        impl FromStr for Element {
            type Err = ParseElementError;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $name => Ok(Element::$element), )*
                    _ => Err(ParseElementError),
                }
            }
        }
    };
}

periodic_table!(
    (Hydrogen, "H"),
    (Helium, "He"),
    (Lithium, "Li"),
    (Beryllium, "Be"),
    (Boron, "B"),
    (Carbon, "C"),
    (Nitrogen, "N"),
    (Oxygen, "O"),
    (Fluorine, "F"),
    (Neon, "Ne"),
    (Sodium, "Na"),
    (Magnesium, "Mg"),
    (Aluminum, "Al"),
    (Silicon, "Si"),
    (Phosphorus, "P"),
    (Sulfur, "S"),
    (Chlorine, "Cl"),
    (Argon, "Ar"),
    (Potassium, "K"),
    (Calcium, "Ca"),
    (Scandium, "Sc"),
    (Titanium, "Ti"),
    (Vanadium, "V"),
    (Chromium, "Cr"),
    (Manganese, "Mn"),
    (Iron, "Fe"),
    (Cobalt, "Co"),
    (Nickel, "Ni"),
    (Copper, "Cu"),
    (Zinc, "Zn"),
    (Gallium, "Ga"),
    (Germanium, "Ge"),
    (Arsenic, "As"),
    (Selenium, "Se"),
    (Bromine, "Br"),
    (Krypton, "Kr"),
    (Rubidium, "Rb"),
    (Strontium, "Sr"),
    (Yttrium, "Y"),
    (Zirconium, "Zr"),
    (Niobium, "Nb"),
    (Molybdenum, "Mo"),
    (Technetium, "Tc"),
    (Ruthenium, "Ru"),
    (Rhodium, "Rh"),
    (Palladium, "Pd"),
    (Silver, "Ag"),
    (Cadmium, "Cd"),
    (Indium, "In"),
    (Tin, "Sn"),
    (Antimony, "Sb"),
    (Tellurium, "Te"),
    (Iodine, "I"),
    (Xenon, "Xe"),
    (Cesium, "Cs"),
    (Barium, "Ba"),
    (Lanthanum, "La"),
    (Cerium, "Ce"),
    (Praseodymium, "Pr"),
    (Neodymium, "Nd"),
    (Promethium, "Pm"),
    (Samarium, "Sm"),
    (Europium, "Eu"),
    (Gadolinium, "Gd"),
    (Terbium, "Tb"),
    (Dysprosium, "Dy"),
    (Holmium, "Ho"),
    (Erbium, "Er"),
    (Thulium, "Tm"),
    (Ytterbium, "Yb"),
    (Lutetium, "Lu"),
    (Hafnium, "Hf"),
    (Tantalum, "Ta"),
    (Wolfram, "W"),
    (Rhenium, "Re"),
    (Osmium, "Os"),
    (Iridium, "Ir"),
    (Platinum, "Pt"),
    (Gold, "Au"),
    (Mercury, "Hg"),
    (Thallium, "Tl"),
    (Lead, "Pb"),
    (Bismuth, "Bi"),
    (Polonium, "Po"),
    (Astatine, "At"),
    (Radon, "Rn"),
    (Francium, "Fr"),
    (Radium, "Ra"),
    (Actinium, "Ac"),
    (Thorium, "Th"),
    (Protactinium, "Pa"),
    (Uranium, "U"),
    (Neptunium, "Np"),
    (Plutonium, "Pu"),
    (Americium, "Am"),
    (Curium, "Cm"),
    (Berkelium, "Bk"),
    (Californium, "Cf"),
    (Einsteinium, "Es"),
    (Fermium, "Fm"),
    (Mendelevium, "Md"),
    (Nobelium, "No"),
    (Lawrencium, "Lr"),
    (Rutherfordium, "Rf"),
    (Dubnium, "Db"),
    (Seaborgium, "Sg"),
    (Bohrium, "Bh"),
    (Hassium, "Hs"),
    (Meitnerium, "Mt"),
    (Darmstadtium, "Ds"),
    (Roentgenium, "Rg"),
    (Copernicium, "Cn"),
    (Nihonium, "Nh"),
    (Flerovium, "Fl"),
    (Moscovium, "Mc"),
    (Livermorium, "Lv"),
    (Tennessine, "Ts"),
    (Oganesson, "Og"),
);

/// The nodes of a [`Molecule`] graph.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Atom {
    element: Element,
}

impl Atom {
    /// Construct an [`Atom`] of type `element`.
    pub fn new(element: Element) -> Self {
        Self { element }
    }

    /// Return this [`Atom`]'s element.
    pub fn element(&self) -> Element {
        self.element
    }

    /// Return this [`Atom`]'s element symbol.
    pub fn symbol(&self) -> &'static str {
        self.element.symbol()
    }
}

/// The edges of a [`Molecule`] graph.
///
/// Only the four numeric bond orders have a glyph in the fragment notation.
/// Aromatic and unspecified bonds are carried so that toolkits which keep
/// aromaticity (rather than a kekulized form) can be represented faithfully.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Bond {
    Single,
    Double,
    Triple,
    Quadruple,
    Aromatic,
    Unspecified,
}

impl Bond {
    /// Return the fragment-notation glyph for this bond, if it has one.
    pub fn glyph(&self) -> Option<char> {
        match self {
            Bond::Single => Some('-'),
            Bond::Double => Some('='),
            Bond::Triple => Some('#'),
            Bond::Quadruple => Some('$'),
            Bond::Aromatic | Bond::Unspecified => None,
        }
    }
}

/// Thrown by [`Bond::try_from`] when given anything other than 1 through 4.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ParseBondError;

impl TryFrom<usize> for Bond {
    type Error = ParseBondError;
    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Bond::Single),
            2 => Ok(Bond::Double),
            3 => Ok(Bond::Triple),
            4 => Ok(Bond::Quadruple),
            _ => Err(ParseBondError),
        }
    }
}

/// A bond as seen from outside the graph: its two endpoints and its type.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BondRef {
    pub begin: AtomIndex,
    pub end: AtomIndex,
    pub order: Bond,
}

/// Read-only access to a molecular graph.
///
/// This is everything fragment extraction needs from a molecule; any
/// toolkit's molecule type can take part by implementing it.
pub trait MolGraph: Sync {
    fn atom_count(&self) -> usize;

    fn bond_count(&self) -> usize;

    /// Return the atom at `ix`, or [`FragmentError::InvalidAtomIndex`].
    fn atom(&self, ix: AtomIndex) -> Result<Atom>;

    /// Return the endpoints and type of bond `ix`, or
    /// [`FragmentError::InvalidBondIndex`].
    fn bond(&self, ix: BondIndex) -> Result<BondRef>;

    /// Return the type of the bond joining atoms `a` and `b`, if any.
    fn bond_between(&self, a: AtomIndex, b: AtomIndex) -> Option<Bond>;

    /// Return the indices of all bonds incident to atom `ix`, ascending.
    fn bonds_of(&self, ix: AtomIndex) -> Result<Vec<BondIndex>>;

    /// Return every candidate combination of `n` bonds for fragment
    /// extraction, each in walk order.
    ///
    /// The default is [`crate::enumerate::paths_of_length`]. Toolkits with
    /// their own path search can override it; candidates that are neither
    /// open paths nor rings are handled by the fragment policy.
    fn paths_of_length(
        &self,
        n: usize,
        include_hydrogens: bool,
    ) -> Result<Vec<Vec<BondIndex>>> {
        crate::enumerate::paths_of_length(self, n, include_hydrogens)
    }
}

/// A simple, loopless graph with [`Atom`]s as nodes and [`Bond`]s as edges.
///
/// Hydrogens are ordinary atoms here; whether they take part in fragment
/// enumeration is decided by the caller.
#[derive(Debug, Clone, Default)]
pub struct Molecule {
    graph: MGraph,
}

impl Molecule {
    /// Construct an empty [`Molecule`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a molecule from element symbols and `(begin, end, bond)` triples.
    ///
    /// Atom `i` of the result is `symbols[i]`; bond `j` is `bonds[j]`.
    pub fn from_parts<S: AsRef<str>>(
        symbols: &[S],
        bonds: &[(AtomIndex, AtomIndex, Bond)],
    ) -> Result<Self> {
        let mut mol = Molecule::new();
        for s in symbols {
            let s = s.as_ref();
            let element = s
                .parse::<Element>()
                .map_err(|_| FragmentError::UnknownElement(s.to_string()))?;
            mol.add_atom(element);
        }
        for &(a, b, bond) in bonds {
            mol.add_bond(a, b, bond)?;
        }
        Ok(mol)
    }

    /// Append an atom and return its index.
    pub fn add_atom(&mut self, element: Element) -> AtomIndex {
        self.graph.add_node(Atom::new(element)).index()
    }

    /// Append a bond between atoms `a` and `b` and return its index.
    pub fn add_bond(&mut self, a: AtomIndex, b: AtomIndex, bond: Bond) -> Result<BondIndex> {
        let u = self.node(a)?;
        let v = self.node(b)?;
        if u == v {
            return Err(FragmentError::SelfLoop(a));
        }
        Ok(self.graph.add_edge(u, v, bond).index())
    }

    /// Return a pretty-printable representation of this molecule.
    pub fn info(&self) -> String {
        let dot = Dot::new(&self.graph);
        format!("{dot:?}")
    }

    /// Return `true` iff this molecule contains self-loops or multiple edges
    /// between any pair of nodes.
    pub fn is_malformed(&self) -> bool {
        let mut uniq = HashSet::new();
        !self.graph.edge_indices().all(|ix| {
            self.graph.edge_endpoints(ix).is_some_and(|(src, dst)| {
                src != dst && uniq.insert((src.min(dst), src.max(dst)))
            })
        })
    }

    /// Map an atom index onto a node of the graph. Indices wider than
    /// `Index` are rejected rather than truncated.
    fn node(&self, ix: AtomIndex) -> Result<NodeIndex<Index>> {
        Index::try_from(ix)
            .ok()
            .map(NodeIndex::from)
            .filter(|&n| self.graph.node_weight(n).is_some())
            .ok_or(FragmentError::InvalidAtomIndex(ix))
    }

    fn edge(&self, ix: BondIndex) -> Result<EdgeIndex<Index>> {
        Index::try_from(ix)
            .ok()
            .map(EdgeIndex::from)
            .filter(|&e| self.graph.edge_weight(e).is_some())
            .ok_or(FragmentError::InvalidBondIndex(ix))
    }
}

impl MolGraph for Molecule {
    fn atom_count(&self) -> usize {
        self.graph.node_count()
    }

    fn bond_count(&self) -> usize {
        self.graph.edge_count()
    }

    fn atom(&self, ix: AtomIndex) -> Result<Atom> {
        let n = self.node(ix)?;
        self.graph
            .node_weight(n)
            .copied()
            .ok_or(FragmentError::InvalidAtomIndex(ix))
    }

    fn bond(&self, ix: BondIndex) -> Result<BondRef> {
        let e = self.edge(ix)?;
        let (src, dst) = self
            .graph
            .edge_endpoints(e)
            .ok_or(FragmentError::InvalidBondIndex(ix))?;
        let order = *self
            .graph
            .edge_weight(e)
            .ok_or(FragmentError::InvalidBondIndex(ix))?;
        Ok(BondRef {
            begin: src.index(),
            end: dst.index(),
            order,
        })
    }

    fn bond_between(&self, a: AtomIndex, b: AtomIndex) -> Option<Bond> {
        let u = self.node(a).ok()?;
        let v = self.node(b).ok()?;
        let e = self.graph.find_edge(u, v)?;
        self.graph.edge_weight(e).copied()
    }

    fn bonds_of(&self, ix: AtomIndex) -> Result<Vec<BondIndex>> {
        let n = self.node(ix)?;
        let mut bonds: Vec<BondIndex> = self.graph.edges(n).map(|e| e.id().index()).collect();
        bonds.sort_unstable();
        Ok(bonds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ethanol() -> Molecule {
        Molecule::from_parts(
            &["C", "C", "O"],
            &[(0, 1, Bond::Single), (1, 2, Bond::Single)],
        )
        .unwrap()
    }

    #[test]
    fn element_to_string() {
        assert!(Element::Hydrogen.to_string() == "H");
        assert_eq!(Element::Chlorine.symbol(), "Cl");
    }

    #[test]
    fn element_from_string() {
        assert!(str::parse("H") == Ok(Element::Hydrogen));
        assert!(str::parse::<Element>("Foo").is_err());
    }

    #[test]
    fn bond_glyphs() {
        assert_eq!(Bond::Single.glyph(), Some('-'));
        assert_eq!(Bond::Double.glyph(), Some('='));
        assert_eq!(Bond::Triple.glyph(), Some('#'));
        assert_eq!(Bond::Quadruple.glyph(), Some('$'));
        assert_eq!(Bond::Aromatic.glyph(), None);
        assert_eq!(Bond::try_from(4), Ok(Bond::Quadruple));
        assert_eq!(Bond::try_from(5), Err(ParseBondError));
    }

    #[test]
    fn accessors() {
        let mol = ethanol();
        assert_eq!(mol.atom(2).unwrap().element(), Element::Oxygen);
        assert_eq!(
            mol.bond(1).unwrap(),
            BondRef {
                begin: 1,
                end: 2,
                order: Bond::Single
            }
        );
        assert_eq!(mol.bond_between(2, 1), Some(Bond::Single));
        assert_eq!(mol.bond_between(0, 2), None);
        assert_eq!(mol.bonds_of(1).unwrap(), vec![0, 1]);
    }

    #[test]
    fn out_of_range_indices() {
        let mol = ethanol();
        assert_eq!(mol.atom(3), Err(FragmentError::InvalidAtomIndex(3)));
        assert_eq!(mol.bond(2), Err(FragmentError::InvalidBondIndex(2)));
        assert_eq!(mol.bond_between(0, 9), None);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn wide_indices_do_not_wrap() {
        let mol = Molecule::from_parts(&["C", "O"], &[(0, 1, Bond::Single)]).unwrap();
        let huge = (1usize << 32) + 1;
        assert_eq!(mol.atom(huge), Err(FragmentError::InvalidAtomIndex(huge)));
        assert_eq!(
            mol.bond(1 << 32),
            Err(FragmentError::InvalidBondIndex(1 << 32))
        );
        assert_eq!(mol.bond_between(0, huge), None);
        assert_eq!(mol.bonds_of(huge), Err(FragmentError::InvalidAtomIndex(huge)));

        let mut mol = mol;
        assert_eq!(
            mol.add_bond(0, 1 << 32, Bond::Single),
            Err(FragmentError::InvalidAtomIndex(1 << 32))
        );
    }

    #[test]
    fn rejects_bad_construction() {
        let mut mol = ethanol();
        assert_eq!(
            mol.add_bond(0, 7, Bond::Single),
            Err(FragmentError::InvalidAtomIndex(7))
        );
        assert_eq!(
            mol.add_bond(1, 1, Bond::Single),
            Err(FragmentError::SelfLoop(1))
        );
        assert_eq!(
            Molecule::from_parts(&["Xx"], &[]).unwrap_err(),
            FragmentError::UnknownElement("Xx".to_string())
        );
    }

    #[test]
    fn detects_multi_edges() {
        let mut mol = ethanol();
        assert!(!mol.is_malformed());
        mol.add_bond(1, 0, Bond::Double).unwrap();
        assert!(mol.is_malformed());
    }
}

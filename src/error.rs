//! Error types for molecule construction and fragment extraction.

use thiserror::Error;

use crate::molecule::{AtomIndex, Bond, BondIndex};

/// Reasons a candidate bond combination cannot be turned into a well-formed
/// linear fragment.
///
/// Under [`FragmentPolicy::Permissive`](crate::fragment::FragmentPolicy),
/// branched walks and bonds without a glyph are rendered as-is. Otherwise the
/// candidate is skipped and the reason is recorded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedFragment {
    #[error("subgraph has {} endpoints {endpoints:?}, expected 2", .endpoints.len())]
    Branched { endpoints: Vec<AtomIndex> },

    #[error("walk from atom {start} visited {visited} of {expected} atoms")]
    TruncatedWalk {
        start: AtomIndex,
        visited: usize,
        expected: usize,
    },

    #[error("bond {begin}-{end} has type {bond:?}, which has no glyph")]
    UnmappedBond {
        begin: AtomIndex,
        end: AtomIndex,
        bond: Bond,
    },

    #[error("atoms {begin} and {end} are adjacent in the path but not bonded")]
    Disconnected { begin: AtomIndex, end: AtomIndex },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FragmentError {
    #[error("atom index {0} is out of range")]
    InvalidAtomIndex(AtomIndex),

    #[error("bond index {0} is out of range")]
    InvalidBondIndex(BondIndex),

    #[error("bond from atom {0} to itself")]
    SelfLoop(AtomIndex),

    #[error("unknown element symbol {0:?}")]
    UnknownElement(String),

    #[error(transparent)]
    Malformed(#[from] MalformedFragment),
}

pub type Result<T, E = FragmentError> = std::result::Result<T, E>;

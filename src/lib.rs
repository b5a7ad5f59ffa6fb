// Molecule definition and the read-only graph trait
pub mod molecule;

// Error types
pub mod error;

// Bond paths of a fixed length
pub mod enumerate;

// Atom subgraphs and their shape
pub mod subgraph;

// Endpoint-to-endpoint atom ordering
pub mod order;

// Fragment strings
pub mod render;

// The whole pipeline
pub mod fragment;

// Python library
#[cfg(feature = "python")]
pub mod python;

pub use error::{FragmentError, MalformedFragment};
pub use fragment::{
    fragments_from_candidates, generate_linear_fragments, linear_fragments, FragmentConfig,
    FragmentPolicy, Fragments, ParallelMode,
};
pub use molecule::{Bond, Element, MolGraph, Molecule};
pub use order::EndpointRule;

//! Extract linear fragments of a fixed bond length from a molecule.
//!
//! Every candidate of `n` bonds from [`MolGraph::paths_of_length`] is turned
//! into an atom-level [`Subgraph`] and classified. Rings are dropped. Open
//! paths are ordered from one endpoint with [`order`] and rendered with
//! [`render`]. Each candidate is handled independently of the others, so the per-candidate
//! work can run on the rayon thread pool without changing the output.

use std::collections::BTreeMap;

use clap::ValueEnum;
use log::{debug, warn};
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

use crate::{
    error::{FragmentError, MalformedFragment, Result},
    molecule::{AtomIndex, BondIndex, MolGraph},
    order::{order, EndpointRule},
    render::render,
    subgraph::{Shape, Subgraph},
};

/// How to treat candidates that are not clean linear fragments.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default)]
pub enum FragmentPolicy {
    /// Render whatever comes out: branched subgraphs give a truncated walk
    /// and bonds without a glyph are written as nothing.
    #[default]
    Permissive,
    /// Skip such candidates and record why in [`Fragments::skipped`].
    Strict,
}

/// Whether candidates are processed on the rayon thread pool.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default)]
pub enum ParallelMode {
    /// Process candidates one after another.
    #[default]
    None,
    /// Process candidates in parallel. Output order is unchanged.
    Always,
}

/// Options for [`linear_fragments`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct FragmentConfig {
    /// Number of bonds per fragment.
    pub path_length: usize,
    pub endpoint_rule: EndpointRule,
    pub policy: FragmentPolicy,
    pub parallel: ParallelMode,
    /// Whether bonds to hydrogen atoms take part in enumeration.
    pub include_hydrogens: bool,
}

impl Default for FragmentConfig {
    fn default() -> Self {
        Self {
            path_length: 3,
            endpoint_rule: EndpointRule::default(),
            policy: FragmentPolicy::default(),
            parallel: ParallelMode::default(),
            include_hydrogens: true,
        }
    }
}

impl FragmentConfig {
    pub fn with_path_length(mut self, path_length: usize) -> Self {
        self.path_length = path_length;
        self
    }

    pub fn with_endpoint_rule(mut self, endpoint_rule: EndpointRule) -> Self {
        self.endpoint_rule = endpoint_rule;
        self
    }

    pub fn with_policy(mut self, policy: FragmentPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_parallel(mut self, parallel: ParallelMode) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_hydrogens(mut self, include_hydrogens: bool) -> Self {
        self.include_hydrogens = include_hydrogens;
        self
    }
}

/// A candidate bond combination that was not turned into a fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedCandidate {
    pub bonds: Vec<BondIndex>,
    pub reason: MalformedFragment,
}

/// The fragments of one molecule.
///
/// `strings[i]` is the rendering of the atoms in `paths[i]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragments {
    pub strings: Vec<String>,
    pub paths: Vec<Vec<AtomIndex>>,
    pub skipped: Vec<SkippedCandidate>,
    /// Number of candidates rejected as rings.
    pub rings: usize,
}

impl Fragments {
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Iterate over `(string, atom path)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[AtomIndex])> {
        self.strings
            .iter()
            .map(String::as_str)
            .zip(self.paths.iter().map(Vec::as_slice))
    }

    /// Count how often each fragment string occurs.
    pub fn counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for s in &self.strings {
            *counts.entry(s.clone()).or_insert(0) += 1;
        }
        counts
    }

    pub fn into_parts(self) -> (Vec<String>, Vec<Vec<AtomIndex>>) {
        (self.strings, self.paths)
    }
}

enum Outcome {
    Fragment(String, Vec<AtomIndex>),
    Ring,
    Skipped(MalformedFragment),
}

fn process<M>(mol: &M, bonds: &[BondIndex], config: &FragmentConfig) -> Result<Outcome>
where
    M: MolGraph + ?Sized,
{
    let subgraph = Subgraph::from_bonds(mol, bonds)?;
    let endpoints = match subgraph.classify() {
        Shape::Ring => return Ok(Outcome::Ring),
        Shape::Path { start, end } => vec![start, end],
        Shape::Branched { endpoints } => {
            if config.policy == FragmentPolicy::Strict {
                return Ok(Outcome::Skipped(MalformedFragment::Branched { endpoints }));
            }
            endpoints
        }
    };
    let Some(start) = config.endpoint_rule.choose(&endpoints) else {
        return Ok(Outcome::Ring);
    };

    let path = match order(&subgraph, start, config.policy) {
        Ok(path) => path,
        Err(reason) => return Ok(Outcome::Skipped(reason)),
    };
    match render(mol, &path, config.policy) {
        Ok(s) => Ok(Outcome::Fragment(s, path)),
        Err(FragmentError::Malformed(reason)) => Ok(Outcome::Skipped(reason)),
        Err(e) => Err(e),
    }
}

/// Extract all linear fragments of `mol` described by `config`.
///
/// Out-of-range atom or bond indices reported by `mol` abort the call.
/// Malformed candidates never do; depending on the policy they are either
/// rendered anyway or listed in [`Fragments::skipped`].
pub fn linear_fragments<M>(mol: &M, config: &FragmentConfig) -> Result<Fragments>
where
    M: MolGraph + ?Sized,
{
    let candidates = mol.paths_of_length(config.path_length, config.include_hydrogens)?;
    fragments_from_candidates(mol, candidates, config)
}

/// Turn already enumerated bond combinations into fragments.
///
/// `config.path_length` and `config.include_hydrogens` are not consulted;
/// every candidate is taken as given.
pub fn fragments_from_candidates<M>(
    mol: &M,
    candidates: Vec<Vec<BondIndex>>,
    config: &FragmentConfig,
) -> Result<Fragments>
where
    M: MolGraph + ?Sized,
{
    let outcomes: Vec<Result<Outcome>> = match config.parallel {
        ParallelMode::None => candidates
            .iter()
            .map(|bonds| process(mol, bonds, config))
            .collect(),
        ParallelMode::Always => candidates
            .par_iter()
            .map(|bonds| process(mol, bonds, config))
            .collect(),
    };

    let mut fragments = Fragments::default();
    for (bonds, outcome) in candidates.into_iter().zip(outcomes) {
        match outcome? {
            Outcome::Fragment(s, path) => {
                fragments.strings.push(s);
                fragments.paths.push(path);
            }
            Outcome::Ring => {
                debug!("bonds {bonds:?} form a ring, skipping");
                fragments.rings += 1;
            }
            Outcome::Skipped(reason) => {
                warn!("skipping bonds {bonds:?}: {reason}");
                fragments.skipped.push(SkippedCandidate { bonds, reason });
            }
        }
    }

    debug!(
        "{} fragments ({} rings, {} skipped)",
        fragments.len(),
        fragments.rings,
        fragments.skipped.len()
    );
    Ok(fragments)
}

/// Extract all linear fragments of `path_length` bonds from `mol` with the
/// default options, returning the fragment strings and their atom paths.
pub fn generate_linear_fragments<M>(
    mol: &M,
    path_length: usize,
) -> Result<(Vec<String>, Vec<Vec<AtomIndex>>)>
where
    M: MolGraph + ?Sized,
{
    let config = FragmentConfig::default().with_path_length(path_length);
    Ok(linear_fragments(mol, &config)?.into_parts())
}

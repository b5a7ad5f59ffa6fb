use std::{io, str::FromStr};

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;

use linear_fragments::{
    linear_fragments, Bond, EndpointRule, FragmentConfig, FragmentPolicy, Molecule, ParallelMode,
};

/// One bond given on the command line, e.g. `0-1`, `1=2`, `2:3`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct BondArg {
    begin: usize,
    end: usize,
    bond: Bond,
}

impl FromStr for BondArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (at, glyph) = s
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .ok_or_else(|| format!("bond {s:?} has no bond glyph"))?;
        let bond = match glyph {
            '-' => Bond::Single,
            '=' => Bond::Double,
            '#' => Bond::Triple,
            '$' => Bond::Quadruple,
            ':' => Bond::Aromatic,
            '~' => Bond::Unspecified,
            c => return Err(format!("unknown bond glyph {c:?} in {s:?}")),
        };
        let parse = |t: &str| {
            t.parse::<usize>()
                .map_err(|e| format!("bad atom index {t:?} in {s:?}: {e}"))
        };
        Ok(BondArg {
            begin: parse(&s[..at])?,
            end: parse(&s[at + glyph.len_utf8()..])?,
            bond,
        })
    }
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Element symbols of the atoms, in index order (e.g. C,C,C,O).
    #[arg(short, long, value_delimiter = ',', required = true)]
    atoms: Vec<String>,

    /// Bonds as <atom><glyph><atom>; glyphs are - = # $ for orders 1 to 4,
    /// : for aromatic and ~ for unspecified (e.g. 0-1,1=2).
    #[arg(short, long, value_delimiter = ',')]
    bonds: Vec<BondArg>,

    /// Number of bonds per fragment.
    #[arg(short = 'n', long, default_value_t = 3)]
    length: usize,

    /// Which endpoint a fragment starts from.
    #[arg(long, value_enum, default_value_t = EndpointRule::LowestIndex)]
    endpoint: EndpointRule,

    /// How to treat branched fragments and bonds without a glyph.
    #[arg(long, value_enum, default_value_t = FragmentPolicy::Permissive)]
    policy: FragmentPolicy,

    /// Process candidates in parallel.
    #[arg(long, value_enum, default_value_t = ParallelMode::None)]
    parallel: ParallelMode,

    /// Ignore bonds to hydrogen atoms.
    #[arg(long)]
    no_hydrogens: bool,

    /// Print each distinct fragment with its count instead of every fragment.
    #[arg(long)]
    counts: bool,
}

fn main() -> Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let bonds: Vec<_> = cli.bonds.iter().map(|b| (b.begin, b.end, b.bond)).collect();
    let mol =
        Molecule::from_parts(cli.atoms.as_slice(), &bonds).context("Failed to build molecule")?;
    if mol.is_malformed() {
        bail!("Bad input! Molecule has doubled bonds");
    }

    let config = FragmentConfig::default()
        .with_path_length(cli.length)
        .with_endpoint_rule(cli.endpoint)
        .with_policy(cli.policy)
        .with_parallel(cli.parallel)
        .with_hydrogens(!cli.no_hydrogens);
    let fragments = linear_fragments(&mol, &config).context("Failed to extract fragments")?;
    info!(
        "{} fragments, {} rings, {} skipped",
        fragments.len(),
        fragments.rings,
        fragments.skipped.len()
    );

    let mut out = csv::Writer::from_writer(io::stdout());
    if cli.counts {
        out.write_record(["fragment", "count"])?;
        for (fragment, count) in fragments.counts() {
            out.write_record([fragment, count.to_string()])?;
        }
    } else {
        out.write_record(["fragment", "atoms"])?;
        for (fragment, path) in fragments.iter() {
            let atoms = path
                .iter()
                .map(|ix| ix.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            out.write_record([fragment, atoms.as_str()])?;
        }
    }
    out.flush()?;
    Ok(())
}

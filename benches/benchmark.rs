use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use linear_fragments::{linear_fragments, Bond, FragmentConfig, Molecule, ParallelMode};

/// A straight carbon chain of `len` atoms.
fn alkane(len: usize) -> Molecule {
    let symbols = vec!["C"; len];
    let bonds: Vec<_> = (1..len).map(|i| (i - 1, i, Bond::Single)).collect();
    Molecule::from_parts(symbols.as_slice(), &bonds).unwrap()
}

/// A strip of `rings` fused six-membered rings (acene skeleton).
fn acene(rings: usize) -> Molecule {
    let atoms = 4 * rings + 2;
    let symbols = vec!["C"; atoms];
    let mut bonds = Vec::new();
    // Top and bottom edges of the strip.
    for i in 0..(2 * rings) {
        bonds.push((i, i + 1, Bond::Single));
        bonds.push((atoms / 2 + i, atoms / 2 + i + 1, Bond::Double));
    }
    // Rungs between them.
    for r in 0..=rings {
        bonds.push((2 * r, atoms / 2 + 2 * r, Bond::Single));
    }
    Molecule::from_parts(symbols.as_slice(), &bonds).unwrap()
}

pub fn synthetic_molecules(c: &mut Criterion) {
    let mut group = c.benchmark_group("synthetic_molecules");

    let molecules = [("alkane_64", alkane(64)), ("acene_8", acene(8))];
    let modes = [("serial", ParallelMode::None), ("parallel", ParallelMode::Always)];

    for (name, mol) in &molecules {
        for length in [3, 6] {
            for (mode_str, mode) in modes {
                let config = FragmentConfig::default()
                    .with_path_length(length)
                    .with_parallel(mode);
                group.bench_with_input(
                    BenchmarkId::new(format!("{name}/{mode_str}"), length),
                    &config,
                    |b, config| b.iter(|| linear_fragments(mol, config).unwrap()),
                );
            }
        }
    }

    group.finish();
}

criterion_group! {
    name = benchmark;
    config = Criterion::default().sample_size(20);
    targets = synthetic_molecules
}
criterion_main!(benchmark);

//! Solver benchmarks over generated instances.

use criterion::{criterion_group, criterion_main, Criterion};
use lodestar_base::utils::SplitMix64;
use lodestar_cdcl::Solver;

fn random_3sat(seed: u64, num_vars: u64, num_clauses: u64) -> Vec<Vec<i64>> {
    let mut rng = SplitMix64::new(seed);
    (0..num_clauses)
        .map(|_| {
            (0..3)
                .map(|_| {
                    let var = rng.next_below(num_vars) as i64 + 1;
                    if rng.next_bool() {
                        -var
                    } else {
                        var
                    }
                })
                .collect()
        })
        .collect()
}

fn pigeonhole(pigeons: usize) -> Vec<Vec<i64>> {
    let holes = pigeons - 1;
    let var = |pigeon: usize, hole: usize| (pigeon * holes + hole + 1) as i64;

    let mut clauses = Vec::new();
    for pigeon in 0..pigeons {
        clauses.push((0..holes).map(|hole| var(pigeon, hole)).collect());
    }
    for hole in 0..holes {
        for a in 0..pigeons {
            for b in a + 1..pigeons {
                clauses.push(vec![-var(a, hole), -var(b, hole)]);
            }
        }
    }
    clauses
}

fn solve(clauses: &[Vec<i64>]) -> bool {
    let mut solver = Solver::new();
    solver.add_formula(clauses.iter().cloned());
    solver.solve()
}

fn bench_random_3sat(c: &mut Criterion) {
    let mut group = c.benchmark_group("random-3sat");
    for (num_vars, num_clauses) in [(20u64, 85u64), (30, 128)] {
        let clauses = random_3sat(0xbe2c_4a11, num_vars, num_clauses);
        group.bench_function(format!("{num_vars}v-{num_clauses}c"), |b| {
            b.iter(|| solve(&clauses));
        });
    }
    group.finish();
}

fn bench_pigeonhole(c: &mut Criterion) {
    let mut group = c.benchmark_group("pigeonhole");
    group.sample_size(20);
    for pigeons in [4usize, 5] {
        let clauses = pigeonhole(pigeons);
        group.bench_function(format!("{pigeons}-into-{}", pigeons - 1), |b| {
            b.iter(|| solve(&clauses));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_random_3sat, bench_pigeonhole);
criterion_main!(benches);

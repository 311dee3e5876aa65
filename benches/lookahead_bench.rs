use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use pagesim::{LookaheadMode, PolicyKind, ReferenceString, SimulationConfig, Simulator};

// Deterministic pseudo-random digits with some locality.
fn generate_references(len: usize) -> ReferenceString {
    let mut state: u64 = 0x2545_F491_4F6C_DD1D;
    let digits: String = (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            char::from(b'0' + (state % 10) as u8)
        })
        .collect();
    ReferenceString::parse(&digits).unwrap()
}

fn optimal_lookahead_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("OptimalLookahead");

    for len in [100usize, 1_000, 10_000].iter() {
        let refs = generate_references(*len);

        for (name, mode) in [("scan", LookaheadMode::Scan), ("indexed", LookaheadMode::Indexed)] {
            let config = SimulationConfig::new(4).unwrap().with_lookahead(mode);
            group.bench_with_input(BenchmarkId::new(name, len), &refs, |b, refs| {
                b.iter(|| {
                    let sim = Simulator::new(refs, config);
                    black_box(sim.run_kind(PolicyKind::Optimal).misses())
                })
            });
        }
    }

    group.finish();
}

fn policy_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Policies");
    let refs = generate_references(10_000);
    let config = SimulationConfig::new(8).unwrap();

    for kind in PolicyKind::ALL {
        group.bench_function(kind.name(), |b| {
            b.iter(|| black_box(Simulator::new(&refs, config).run_kind(kind).misses()))
        });
    }

    group.finish();
}

criterion_group!(benches, optimal_lookahead_benchmark, policy_benchmark);
criterion_main!(benches);

//! Criterion benchmarks for both quadrangulation modes on synthetic grids.
//! Sizes: n×n cells for n in {4, 16, 32}.
//! Results land under target/criterion.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use surfquad::observer::NoopObserver;
use surfquad::synth::{checkerboard, GridCfg};
use surfquad::{QuadCfg, Quadrangulation};

fn bench_quad(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadrangulate");
    for &n in &[4usize, 16, 32] {
        let bundle = checkerboard(&GridCfg {
            cells_x: n,
            cells_y: n,
            resolution: 3,
            jitter: 0.01,
            seed: 11,
        })
        .unwrap();
        for (name, cfg) in [("direct", QuadCfg::direct()), ("dual", QuadCfg::dual())] {
            group.bench_with_input(BenchmarkId::new(name, n), &bundle, |b, bundle| {
                let mut q = Quadrangulation::new(cfg);
                b.iter(|| q.execute_with(&bundle.input(), &mut NoopObserver).unwrap());
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_quad);
criterion_main!(benches);

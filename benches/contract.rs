//! Contraction benchmarks.
//!
//! Run with: cargo bench --bench contract

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use eincontract::{contract_into, ContractionSchema, Contractor, TensorView};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_data(len: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(-1.0..1.0)).collect()
}

/// Square matrix multiplication C[i,k] = Σ_j A[i,j] B[j,k].
fn bench_matmul(c: &mut Criterion) {
    let mut group = c.benchmark_group("matmul");

    for n in [8, 16, 32, 64] {
        group.throughput(Throughput::Elements((n * n * n) as u64));

        let a = random_data(n * n, 1);
        let b = random_data(n * n, 2);
        let mut out = vec![0.0f64; n * n];

        group.bench_with_input(BenchmarkId::new("fresh_plan", n), &n, |bench, &n| {
            bench.iter(|| {
                let views = [
                    TensorView::new(&a, &[0, 1], &[n, n]),
                    TensorView::new(&b, &[1, 2], &[n, n]),
                ];
                contract_into(&[0, 2], black_box(&mut out), &views).unwrap()
            })
        });

        let engine = Contractor::new();
        group.bench_with_input(BenchmarkId::new("cached_plan", n), &n, |bench, &n| {
            bench.iter(|| {
                let views = [
                    TensorView::new(&a, &[0, 1], &[n, n]),
                    TensorView::new(&b, &[1, 2], &[n, n]),
                ];
                engine
                    .contract_into(&[0, 2], black_box(&mut out), &views)
                    .unwrap()
            })
        });
    }
    group.finish();
}

/// Three-tensor double contraction r[k] = Σ_{i,j} G[k,i,j] v[i] w[j].
fn bench_double_contraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("double_contraction");

    for n in [8, 16, 32] {
        group.throughput(Throughput::Elements((n * n * n) as u64));

        let g = random_data(n * n * n, 3);
        let v = random_data(n, 4);
        let w = random_data(n, 5);
        let mut out = vec![0.0f64; n];

        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, &n| {
            bench.iter(|| {
                let views = [
                    TensorView::new(&g, &[2, 0, 1], &[n, n, n]),
                    TensorView::new(&v, &[0], &[n]),
                    TensorView::new(&w, &[1], &[n]),
                ];
                contract_into(&[2], black_box(&mut out), &views).unwrap()
            })
        });
    }
    group.finish();
}

/// Validation + planning alone, without execution.
fn bench_planning(c: &mut Criterion) {
    let mut group = c.benchmark_group("planning");

    let data = vec![0.0f64; 64 * 64];
    let views = [
        TensorView::new(&data, &[0, 1], &[64, 64]),
        TensorView::new(&data, &[1, 2], &[64, 64]),
    ];
    let metas: Vec<_> = views.iter().map(|v| v.meta()).collect();

    group.bench_function("matmul_schema", |bench| {
        bench.iter(|| ContractionSchema::plan(black_box(&metas), &[0, 2]).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_matmul, bench_double_contraction, bench_planning);
criterion_main!(benches);

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;
use waypath::graph::DistanceMatrix;
use waypath::{TwoOptOptions, compute_tour, two_opt};

/// Euclidean distances between pseudo-random points (fixed LCG seed for stable inputs).
fn build_points_matrix(n: usize, seed: u64) -> DistanceMatrix {
    let mut state = seed;
    let mut next = || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (state >> 11) as f64 / (1u64 << 53) as f64 * 1000.0
    };
    let points: Vec<(f64, f64)> = (0..n).map(|_| (next(), next())).collect();
    let rows: Vec<Vec<f64>> = points
        .iter()
        .map(|a| {
            points
                .iter()
                .map(|b| ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt())
                .collect()
        })
        .collect();
    DistanceMatrix::new(rows).expect("generated matrix is square and non-negative")
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    group.measurement_time(Duration::from_secs(10));

    for n in [20usize, 50, 100] {
        let m = build_points_matrix(n, 42);
        group.bench_with_input(BenchmarkId::new("compute_tour", n), &m, |b, m| {
            b.iter(|| {
                let result = compute_tour(black_box(m), 0).expect("tour");
                black_box(result.best().len());
            })
        });
    }

    group.finish();
}

fn bench_two_opt(c: &mut Criterion) {
    let mut group = c.benchmark_group("two_opt");

    for n in [50usize, 100] {
        let m = build_points_matrix(n, 7);
        let hc = compute_tour(&m, 0).expect("tour").hamiltonian_circuit;
        group.bench_with_input(BenchmarkId::new("optimize", n), &(m, hc), |b, (m, hc)| {
            b.iter(|| {
                let variants = two_opt::optimize(black_box(hc), m, &TwoOptOptions::default());
                black_box(variants.len());
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pipeline, bench_two_opt);
criterion_main!(benches);

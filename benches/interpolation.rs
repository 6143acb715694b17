//! Benchmarks for field construction and evaluation.

use criterion::{criterion_group, criterion_main, Criterion};
use meshfield::prelude::*;
use nalgebra::Point2;

fn create_grid_field(n: usize, strategy: LocateStrategy) -> MeshInterpolator {
    let mut positions = Vec::with_capacity((n + 1) * (n + 1));
    let mut triangles = Vec::with_capacity(n * n * 2);

    // Create grid vertices
    for j in 0..=n {
        for i in 0..=n {
            positions.push(Point2::new(i as f64, j as f64));
        }
    }

    // Create triangles
    for j in 0..n {
        for i in 0..n {
            let v00 = j * (n + 1) + i;
            let v10 = v00 + 1;
            let v01 = v00 + (n + 1);
            let v11 = v01 + 1;

            triangles.push([v00, v10, v11]);
            triangles.push([v00, v11, v01]);
        }
    }

    let values: Vec<f64> = positions
        .iter()
        .map(|p| (0.3 * p.x).sin() + (0.2 * p.y).cos())
        .collect();

    MeshInterpolator::with_strategy(&positions, &values, &triangles, strategy).unwrap()
}

fn bench_field_construction(c: &mut Criterion) {
    c.bench_function("build_field_20x20", |b| {
        let n = 20;
        let mut positions = Vec::with_capacity((n + 1) * (n + 1));
        let mut triangles = Vec::with_capacity(n * n * 2);

        for j in 0..=n {
            for i in 0..=n {
                positions.push(Point2::new(i as f64, j as f64));
            }
        }

        for j in 0..n {
            for i in 0..n {
                let v00 = j * (n + 1) + i;
                let v10 = v00 + 1;
                let v01 = v00 + (n + 1);
                let v11 = v01 + 1;

                triangles.push([v00, v10, v11]);
                triangles.push([v00, v11, v01]);
            }
        }

        let values: Vec<f64> = positions
            .iter()
            .map(|p| (0.3 * p.x).sin() + (0.2 * p.y).cos())
            .collect();

        b.iter(|| {
            let field: MeshInterpolator =
                MeshInterpolator::new(&positions, &values, &triangles).unwrap();
            field
        });
    });
}

fn bench_evaluation(c: &mut Criterion) {
    let near = create_grid_field(50, LocateStrategy::NearestVertex);
    let brute = create_grid_field(50, LocateStrategy::BruteForce);

    // Deterministic query points spread over the grid, none on cell edges
    let points: Vec<(f64, f64)> = (0..1000)
        .map(|i| {
            let x = (i % 499) as f64 * 0.1 + 0.013;
            let y = (i % 497) as f64 * 0.1 + 0.017;
            (x, y)
        })
        .collect();

    c.bench_function("evaluate_near_vertex_1k", |b| {
        b.iter(|| points.iter().map(|&(x, y)| near.evaluate(x, y)).sum::<f64>());
    });

    c.bench_function("evaluate_brute_force_1k", |b| {
        b.iter(|| points.iter().map(|&(x, y)| brute.evaluate(x, y)).sum::<f64>());
    });

    c.bench_function("evaluate_batch_parallel_1k", |b| {
        b.iter(|| near.evaluate_batch_parallel(&points));
    });
}

fn bench_value_rebinding(c: &mut Criterion) {
    let field = create_grid_field(50, LocateStrategy::NearestVertex);
    let doubled: Vec<f64> = field.values().iter().map(|v| v * 2.0).collect();

    c.bench_function("with_values_50x50", |b| {
        b.iter(|| field.with_values(doubled.clone()).unwrap());
    });
}

criterion_group!(
    benches,
    bench_field_construction,
    bench_evaluation,
    bench_value_rebinding
);
criterion_main!(benches);

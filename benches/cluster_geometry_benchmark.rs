use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

use highdim::distance::{euclidean_distance, pairwise_angle};
use highdim::models::cluster::GaussianCluster;
use highdim::projection::project_to_subspace;

fn generate_cluster(count: usize, dimension: usize) -> GaussianCluster {
    let mut cluster = GaussianCluster::new(count, dimension, 0.0, 1.0).unwrap();
    cluster.generate(&mut StdRng::seed_from_u64(2024)).unwrap();
    cluster
}

fn benchmark_pair_metrics(c: &mut Criterion) {
    let cluster = generate_cluster(100, 1000);
    let mut rng = StdRng::seed_from_u64(7);

    c.bench_function("euclidean_distance_1000d", |b| {
        b.iter(|| {
            let i1 = rng.gen_range(0..100);
            let i2 = rng.gen_range(0..100);
            euclidean_distance(
                black_box(&cluster.points[i1].values),
                black_box(&cluster.points[i2].values),
            )
        })
    });

    c.bench_function("pairwise_angle_1000d", |b| {
        b.iter(|| {
            let i1 = rng.gen_range(0..100);
            let i2 = rng.gen_range(0..100);
            pairwise_angle(
                black_box(&cluster.points[i1].values),
                black_box(&cluster.points[i2].values),
            )
        })
    });
}

fn benchmark_cluster_distances(c: &mut Criterion) {
    let cluster = generate_cluster(50, 400);

    c.bench_function("cluster_distances_50x400", |b| {
        b.iter(|| black_box(&cluster).cluster_distances().unwrap())
    });
}

fn benchmark_projection(c: &mut Criterion) {
    let cluster = generate_cluster(50, 400);
    let mut rng = StdRng::seed_from_u64(11);

    c.bench_function("project_50x400_to_40", |b| {
        b.iter(|| project_to_subspace(black_box(&cluster), 40, &mut rng).unwrap())
    });
}

criterion_group!(
    benches,
    benchmark_pair_metrics,
    benchmark_cluster_distances,
    benchmark_projection
);
criterion_main!(benches);

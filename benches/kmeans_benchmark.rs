use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ndarray::Array2;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use seqkmeans_rs::{KMeans, KMeansConfig, SequentialKMeans};
use std::time::Duration;

fn benchmark_kmeans_varying_points(c: &mut Criterion) {
    let mut group = c.benchmark_group("kmeans_points");
    group.sample_size(10);
    group.warm_up_time(Duration::from_millis(500));
    group.measurement_time(Duration::from_secs(2));

    let n_dims = 16;
    let k = 20;
    let point_counts = [1_000, 5_000, 10_000];

    for n_points in point_counts.iter() {
        group.throughput(Throughput::Elements(*n_points as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(n_points),
            n_points,
            |b, &n_points| {
                let points = Array2::random((n_dims, n_points), Uniform::new(-1.0, 1.0));
                let config = KMeansConfig::new(k).with_max_iters(5).with_seed(42);

                b.iter(|| {
                    let mut kmeans = SequentialKMeans::with_config(config.clone());
                    kmeans.fit(black_box(&points.view())).unwrap();
                    kmeans
                });
            },
        );
    }
    group.finish();
}

fn benchmark_kmeans_varying_clusters(c: &mut Criterion) {
    let mut group = c.benchmark_group("kmeans_clusters");
    group.sample_size(10);
    group.warm_up_time(Duration::from_millis(500));
    group.measurement_time(Duration::from_secs(2));

    let n_points = 5_000;
    let n_dims = 16;
    let cluster_counts = [5, 20, 50];

    for k in cluster_counts.iter() {
        group.throughput(Throughput::Elements(*k as u64));
        group.bench_with_input(BenchmarkId::from_parameter(k), k, |b, &k| {
            let points = Array2::random((n_dims, n_points), Uniform::new(-1.0, 1.0));
            let config = KMeansConfig::new(k).with_max_iters(5).with_seed(42);

            b.iter(|| {
                let mut kmeans = SequentialKMeans::with_config(config.clone());
                kmeans.fit(black_box(&points.view())).unwrap();
                kmeans
            });
        });
    }
    group.finish();
}

fn benchmark_predict(c: &mut Criterion) {
    let mut group = c.benchmark_group("kmeans_predict");
    group.sample_size(20);

    let train = Array2::random((32, 5_000), Uniform::new(-1.0, 1.0));
    let test = Array2::random((32, 2_000), Uniform::new(-1.0, 1.0));
    let mut kmeans = SequentialKMeans::new(32, 10, 42);
    kmeans.fit(&train.view()).unwrap();

    group.bench_function("predict_2000", |b| {
        b.iter(|| kmeans.predict(black_box(&test.view())).unwrap());
    });
    group.finish();
}

criterion_group!(
    benches,
    benchmark_kmeans_varying_points,
    benchmark_kmeans_varying_clusters,
    benchmark_predict
);
criterion_main!(benches);

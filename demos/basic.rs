//! Basic example demonstrating seqkmeans-rs usage
//!
//! Run with: RUST_LOG=info cargo run --example basic --release

use env_logger::Env;
use ndarray::Array2;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use seqkmeans_rs::{KMeans, KMeansConfig, SequentialKMeans};

fn main() {
    env_logger::init_from_env(Env::default().filter_or("RUST_LOG", "info"));

    println!("=== seqkmeans-rs example ===\n");

    // 3 clusters in 2D; points are columns of a (2, n) matrix
    let n_points = 300;
    let n_dims = 2;
    let n_clusters = 3;

    println!("Generating {} points with {} dimensions...", n_points, n_dims);

    let centers = [[-5.0, -5.0], [0.0, 5.0], [5.0, -5.0]];
    let noise = Array2::random((n_dims, n_points), Uniform::new(-1.0, 1.0));
    let points = Array2::from_shape_fn((n_dims, n_points), |(j, i)| {
        centers[i % n_clusters][j] + noise[[j, i]]
    });

    println!("True cluster centers:");
    for (i, center) in centers.iter().enumerate() {
        println!("  Cluster {}: ({:.2}, {:.2})", i, center[0], center[1]);
    }
    println!();

    let config = KMeansConfig::new(n_clusters)
        .with_max_iters(100)
        .with_seed(42)
        .with_verbose(true);

    println!("Running k-means with k={}...\n", n_clusters);

    let mut kmeans = SequentialKMeans::with_config(config);
    let fit = kmeans
        .fit(&points.view())
        .expect("Fitting failed")
        .result()
        .expect("No result after fitting");

    println!("\nLearned centroids after {} iterations:", fit.n_iter());
    let centroids = fit.centroids();
    for (i, centroid) in centroids.columns().into_iter().enumerate() {
        println!("  Centroid {}: ({:.4}, {:.4})", i, centroid[0], centroid[1]);
    }
    println!("Inertia: {:.4}\n", fit.inertia());

    let mut cluster_counts = vec![0usize; n_clusters];
    for &label in fit.labels().iter() {
        cluster_counts[label] += 1;
    }

    println!("Cluster distribution:");
    for (i, count) in cluster_counts.iter().enumerate() {
        println!(
            "  Cluster {}: {} points ({:.1}%)",
            i,
            count,
            (*count as f64 / n_points as f64) * 100.0
        );
    }

    println!("\n=== Done! ===");
}

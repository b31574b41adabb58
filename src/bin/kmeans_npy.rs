//! Fit sequential k-means to a dimension-major .npy matrix
//!
//! Reads an `f64` array of shape `(d, n)`, runs k-means, and writes the
//! `(d, k)` centroids and the `n` labels to separate .npy files.
//!
//! Usage: `kmeans-npy <input.npy> <centroids.npy> <labels.npy> <k> <seed> <max_iters> [precision]`

use env_logger::Env;
use log::info;
use ndarray::Array2;
use ndarray_npy::{ReadNpyExt, WriteNpyExt};
use seqkmeans_rs::{KMeans, KMeansConfig, SequentialKMeans};
use std::env;
use std::fs::File;
use std::io::{BufReader, BufWriter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init_from_env(Env::default().filter_or("RUST_LOG", "info"));

    let args: Vec<String> = env::args().collect();

    if args.len() != 7 && args.len() != 8 {
        eprintln!(
            "Usage: {} <input.npy> <centroids.npy> <labels.npy> <k> <seed> <max_iters> [precision]",
            args[0]
        );
        std::process::exit(1);
    }

    let input_path = &args[1];
    let centroids_path = &args[2];
    let labels_path = &args[3];
    let k: usize = args[4].parse()?;
    let seed: u64 = args[5].parse()?;
    let max_iters: usize = args[6].parse()?;

    let mut config = KMeansConfig::new(k).with_seed(seed).with_max_iters(max_iters);
    if let Some(precision) = args.get(7) {
        config = config.with_precision(precision.parse()?);
    }

    if config.k == 0 {
        return Err("k must be greater than 0".into());
    }

    let reader = BufReader::new(File::open(input_path)?);
    let points: Array2<f64> = Array2::read_npy(reader)?;

    info!(
        "Loaded {} points x {} dimensions from {}",
        points.ncols(),
        points.nrows(),
        input_path
    );

    let mut kmeans = SequentialKMeans::with_config(config);
    let fit = kmeans.fit(&points.view())?.result().ok_or("No result after fitting")?;

    info!(
        "Finished after {} iterations, inertia = {:.6}",
        fit.n_iter(),
        fit.inertia()
    );

    fit.centroids()
        .write_npy(BufWriter::new(File::create(centroids_path)?))?;
    fit.labels()
        .mapv(|l| l as u64)
        .write_npy(BufWriter::new(File::create(labels_path)?))?;

    info!("Saved centroids to {} and labels to {}", centroids_path, labels_path);

    Ok(())
}

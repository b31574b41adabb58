use crate::config::KMeansConfig;
use crate::distance::{inertia, nearest_centroid};
use crate::error::KMeansError;
use log::{debug, info, log, trace, warn, Level};
use ndarray::{Array1, Array2, ArrayView2};
use rand::distributions::{Distribution, Uniform};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Instant;

/// Outcome of one k-means fit.
///
/// Produced whole at the end of [`lloyd`]; nothing about it changes afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct KMeansFit {
    centroids: Array2<f64>,
    labels: Array1<usize>,
    n_iter: usize,
    inertia: f64,
}

impl KMeansFit {
    /// Final centroids, shape `(d, k)`
    pub fn centroids(&self) -> &Array2<f64> {
        &self.centroids
    }

    /// Cluster index of each observation, as assigned in the last round
    pub fn labels(&self) -> &Array1<usize> {
        &self.labels
    }

    /// Number of Lloyd rounds actually performed
    pub fn n_iter(&self) -> usize {
        self.n_iter
    }

    /// Sum of squared distances from each observation to its labelled centroid
    pub fn inertia(&self) -> f64 {
        self.inertia
    }
}

/// Assignment and centroid update computed by a single Lloyd round
pub(crate) struct Round {
    pub centroids: Array2<f64>,
    pub labels: Array1<usize>,
    pub empty_clusters: usize,
}

/// Run sequential Lloyd k-means on a dimension-major `(d, n)` matrix.
///
/// Seeding samples observations uniformly with replacement, so `k > n` or an
/// unlucky seed can start two centroids on the same point. A cluster that
/// receives no points gets NaN coordinates, which are kept as-is.
pub fn lloyd(points: &ArrayView2<f64>, config: &KMeansConfig) -> Result<KMeansFit, KMeansError> {
    let (n_dims, n_points) = points.dim();
    if n_dims == 0 || n_points == 0 {
        return Err(KMeansError::EmptyInput);
    }

    if config.k == 0 {
        return Err(KMeansError::InvalidK(
            "k must be greater than 0".to_string(),
        ));
    }

    let level = if config.verbose {
        Level::Info
    } else {
        Level::Debug
    };

    debug!(
        "Fitting k-means: {} points, {} dimensions, {} clusters, max {} iterations",
        n_points, n_dims, config.k, config.max_iters
    );

    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let mut centroids = initialize_centroids(points, config.k, &mut rng);

    let mut labels = Array1::zeros(n_points);
    let mut n_iter = 0;
    let mut changed = true;

    while changed && n_iter < config.max_iters {
        let iter_start = Instant::now();
        n_iter += 1;

        let round = assign_and_update(points, &centroids.view());
        changed = centroids_changed(&centroids.view(), &round.centroids.view(), config.precision);

        if round.empty_clusters > 0 {
            warn!(
                "Iteration {}: {} empty clusters left with undefined centroids",
                n_iter, round.empty_clusters
            );
        }

        log!(
            level,
            "Iteration {}/{}: changed = {}, time = {:.4}s",
            n_iter,
            config.max_iters,
            changed,
            iter_start.elapsed().as_secs_f64()
        );

        centroids = round.centroids;
        labels = round.labels;
    }

    if changed {
        info!("Stopped at max_iters = {} without converging", n_iter);
    } else {
        info!("Converged after {} iterations", n_iter);
    }

    let inertia = inertia(points, &centroids.view(), &labels.view());

    Ok(KMeansFit {
        centroids,
        labels,
        n_iter,
        inertia,
    })
}

/// Initialize centroids by drawing k observation indices uniformly from `[0, n)`.
///
/// Draws are independent, so the same observation may seed several clusters.
fn initialize_centroids(points: &ArrayView2<f64>, k: usize, rng: &mut ChaCha8Rng) -> Array2<f64> {
    let (n_dims, n_points) = points.dim();
    let between = Uniform::new(0.0, n_points as f64);

    let mut centroids = Array2::zeros((n_dims, k));
    for mut centroid in centroids.columns_mut() {
        let idx = between.sample(rng) as usize;
        trace!("Seeding centroid from observation {}", idx);
        centroid.assign(&points.column(idx));
    }

    centroids
}

/// One assign-then-update pass.
///
/// Every observation is labelled with its nearest centroid, then each
/// centroid becomes the mean of its points. An empty cluster divides a zero
/// sum by a zero count and ends up NaN.
pub(crate) fn assign_and_update(points: &ArrayView2<f64>, centroids: &ArrayView2<f64>) -> Round {
    let (n_dims, n_points) = points.dim();
    let k = centroids.ncols();

    let mut counts = vec![0usize; k];
    let mut sums = Array2::<f64>::zeros((n_dims, k));
    let mut labels = Array1::zeros(n_points);

    for (i, point) in points.columns().into_iter().enumerate() {
        let label = nearest_centroid(&point, centroids);
        labels[i] = label;
        counts[label] += 1;

        let mut sum = sums.column_mut(label);
        sum += &point;
    }

    for (mut sum, &count) in sums.columns_mut().into_iter().zip(counts.iter()) {
        sum /= count as f64;
    }

    Round {
        centroids: sums,
        labels,
        empty_clusters: counts.iter().filter(|&&c| c == 0).count(),
    }
}

/// Whether two values agree once rounded to `precision` decimal places.
///
/// NaN never agrees with anything, itself included.
#[inline]
pub(crate) fn approx_eq(a: f64, b: f64, precision: i32) -> bool {
    let scale = 10f64.powi(precision);
    (a * scale).round() == (b * scale).round()
}

/// True if any coordinate of any centroid moved beyond `precision`
pub(crate) fn centroids_changed(
    old: &ArrayView2<f64>,
    new: &ArrayView2<f64>,
    precision: i32,
) -> bool {
    old.iter()
        .zip(new.iter())
        .any(|(&a, &b)| !approx_eq(a, b, precision))
}

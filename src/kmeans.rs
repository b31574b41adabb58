use crate::algorithm::{lloyd, KMeansFit};
use crate::config::KMeansConfig;
use crate::distance::assign_labels;
use crate::error::KMeansError;
use crate::traits::KMeans;
use ndarray::{Array1, ArrayView2};

/// Sequential Lloyd k-means over dimension-major ndarray matrices.
///
/// Observations are the columns of a `(d, n)` matrix, so each row holds one
/// dimension's values for every point. Centroids come back in the same
/// layout as a `(d, k)` matrix.
///
/// # Example
///
/// ```
/// use seqkmeans_rs::{KMeans, SequentialKMeans};
/// use ndarray::array;
///
/// // One dimension, six points
/// let points = array![[1.0, 1.0, 2.0, 10.0, 11.0, 12.0]];
///
/// let mut kmeans = SequentialKMeans::new(2, 10, 42);
/// kmeans.fit(&points.view()).unwrap();
///
/// let labels = kmeans.labels().unwrap();
/// assert_eq!(labels.len(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct SequentialKMeans {
    /// Model configuration
    config: KMeansConfig,

    /// Result of the last fit (None if not yet fitted)
    last_fit: Option<KMeansFit>,
}

impl SequentialKMeans {
    /// Create a new fitter with the given cluster count, iteration bound and seed.
    ///
    /// # Panics
    ///
    /// Panics if `k` is 0.
    pub fn new(k: usize, max_iters: usize, seed: u64) -> Self {
        Self::with_config(KMeansConfig::new(k).with_max_iters(max_iters).with_seed(seed))
    }

    /// Create a new fitter with a custom configuration.
    ///
    /// # Panics
    ///
    /// Panics if `config.k` is 0.
    pub fn with_config(config: KMeansConfig) -> Self {
        assert!(config.k > 0, "k must be greater than 0");

        Self {
            config,
            last_fit: None,
        }
    }

    /// Assign each column of `points` to its nearest fitted centroid.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The model has not been fitted yet
    /// - `points` is empty
    /// - The dimension count differs from the fitted data
    pub fn predict(&self, points: &ArrayView2<f64>) -> Result<Array1<usize>, KMeansError> {
        let centroids = self
            .last_fit
            .as_ref()
            .map(KMeansFit::centroids)
            .ok_or(KMeansError::NotFitted)?;

        let (n_dims, n_points) = points.dim();
        if n_dims == 0 || n_points == 0 {
            return Err(KMeansError::EmptyInput);
        }
        if n_dims != centroids.nrows() {
            return Err(KMeansError::InvalidDimensions(format!(
                "Expected {} dimensions, got {}",
                centroids.nrows(),
                n_dims
            )));
        }

        Ok(assign_labels(points, &centroids.view()))
    }

    /// Fit the model and return the labels of the last assignment round.
    pub fn fit_predict(&mut self, points: &ArrayView2<f64>) -> Result<Array1<usize>, KMeansError> {
        let labels = self.fit(points)?.labels().ok_or(KMeansError::NotFitted)?;
        Ok(labels.clone())
    }

    /// Get the configuration.
    pub fn config(&self) -> &KMeansConfig {
        &self.config
    }
}

impl KMeans for SequentialKMeans {
    fn fit(&mut self, points: &ArrayView2<f64>) -> Result<&mut Self, KMeansError> {
        self.last_fit = Some(lloyd(points, &self.config)?);
        Ok(self)
    }

    fn n_clusters(&self) -> usize {
        self.config.k
    }

    fn max_iters(&self) -> usize {
        self.config.max_iters
    }

    fn seed(&self) -> u64 {
        self.config.seed
    }

    fn result(&self) -> Option<&KMeansFit> {
        self.last_fit.as_ref()
    }
}

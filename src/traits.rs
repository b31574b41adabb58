use crate::algorithm::KMeansFit;
use crate::error::KMeansError;
use ndarray::{Array1, Array2, ArrayView2};

/// Common interface for k-means fitters.
///
/// Implementations own their configuration and the result of the most recent
/// successful `fit`. A new fit replaces the previous result in one step.
pub trait KMeans {
    /// Fit centroids to a dimension-major `(d, n)` observation matrix.
    fn fit(&mut self, points: &ArrayView2<f64>) -> Result<&mut Self, KMeansError>;

    /// The configured number of clusters
    fn n_clusters(&self) -> usize;

    /// The configured iteration bound
    fn max_iters(&self) -> usize;

    /// The configured random seed
    fn seed(&self) -> u64;

    /// The result of the last fit, if any
    fn result(&self) -> Option<&KMeansFit>;

    /// Centroids of the last fit, shape `(d, k)`
    fn centroids(&self) -> Option<&Array2<f64>> {
        self.result().map(KMeansFit::centroids)
    }

    /// Labels of the last fit, one per observation
    fn labels(&self) -> Option<&Array1<usize>> {
        self.result().map(KMeansFit::labels)
    }

    /// Iterations consumed by the last fit
    fn n_iter(&self) -> Option<usize> {
        self.result().map(KMeansFit::n_iter)
    }
}

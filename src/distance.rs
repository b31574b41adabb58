//! Distance kernels over dimension-major matrices.
//!
//! Points and centroids are both stored as `(d, m)` arrays, so a single
//! observation or centroid is a column view.

use ndarray::{Array1, ArrayView1, ArrayView2, Zip};

/// Squared Euclidean distance between two coordinate columns.
///
/// The square root is omitted; only the relative order of distances matters.
#[inline]
pub fn squared_distance(a: &ArrayView1<f64>, b: &ArrayView1<f64>) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    Zip::from(a).and(b).fold(0.0, |acc, &x, &c| {
        let sub = x - c;
        acc + sub * sub
    })
}

/// Index of the centroid closest to `point`.
///
/// The first centroid seeds the running minimum and later centroids only
/// replace it on a strict improvement, so ties go to the lowest index. A NaN
/// distance never wins a comparison, which pins the label to centroid 0 when
/// that is the NaN one.
pub fn nearest_centroid(point: &ArrayView1<f64>, centroids: &ArrayView2<f64>) -> usize {
    let mut best: Option<f64> = None;
    let mut best_idx = 0;

    for (j, centroid) in centroids.columns().into_iter().enumerate() {
        let dist = squared_distance(point, &centroid);
        if best.map_or(true, |min| dist < min) {
            best = Some(dist);
            best_idx = j;
        }
    }

    best_idx
}

/// Label every column of `points` with its nearest centroid
pub fn assign_labels(points: &ArrayView2<f64>, centroids: &ArrayView2<f64>) -> Array1<usize> {
    points
        .columns()
        .into_iter()
        .map(|point| nearest_centroid(&point, centroids))
        .collect()
}

/// Within-cluster sum of squared distances for a given labelling
pub fn inertia(
    points: &ArrayView2<f64>,
    centroids: &ArrayView2<f64>,
    labels: &ArrayView1<usize>,
) -> f64 {
    points
        .columns()
        .into_iter()
        .zip(labels.iter())
        .map(|(point, &label)| squared_distance(&point, &centroids.column(label)))
        .sum()
}

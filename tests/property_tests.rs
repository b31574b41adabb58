use ndarray::Array2;
use proptest::prelude::*;
use seqkmeans_rs::{KMeans, SequentialKMeans};

/// Dimension-major matrix strategy: 1-3 dimensions, 1-30 points
fn observations() -> impl Strategy<Value = Array2<f64>> {
    (1usize..4, 1usize..30).prop_flat_map(|(d, n)| {
        prop::collection::vec(-10.0f64..10.0, d * n)
            .prop_map(move |flat| Array2::from_shape_vec((d, n), flat).unwrap())
    })
}

proptest! {
    #[test]
    fn prop_labels_in_range(
        points in observations(),
        k in 1usize..6,
        max_iters in 0usize..20,
        seed in any::<u64>()
    ) {
        let mut kmeans = SequentialKMeans::new(k, max_iters, seed);
        kmeans.fit(&points.view()).unwrap();

        let labels = kmeans.labels().unwrap();
        prop_assert_eq!(labels.len(), points.ncols());
        for &l in labels.iter() {
            prop_assert!(l < k);
        }
        prop_assert_eq!(kmeans.centroids().unwrap().dim(), (points.nrows(), k));
    }

    #[test]
    fn prop_iterations_bounded(
        points in observations(),
        k in 1usize..6,
        max_iters in 0usize..20,
        seed in any::<u64>()
    ) {
        let mut kmeans = SequentialKMeans::new(k, max_iters, seed);
        kmeans.fit(&points.view()).unwrap();

        prop_assert!(kmeans.n_iter().unwrap() <= max_iters);
    }

    #[test]
    fn prop_deterministic(
        points in observations(),
        k in 1usize..6,
        seed in any::<u64>()
    ) {
        let mut first = SequentialKMeans::new(k, 15, seed);
        let mut second = SequentialKMeans::new(k, 15, seed);
        first.fit(&points.view()).unwrap();
        second.fit(&points.view()).unwrap();

        prop_assert_eq!(first.labels(), second.labels());
        prop_assert_eq!(first.n_iter(), second.n_iter());

        let same = first
            .centroids()
            .unwrap()
            .iter()
            .zip(second.centroids().unwrap().iter())
            .all(|(a, b)| a == b || (a.is_nan() && b.is_nan()));
        prop_assert!(same);
    }

    #[test]
    fn prop_single_cluster_is_mean(points in observations(), seed in any::<u64>()) {
        let mut kmeans = SequentialKMeans::new(1, 5, seed);
        kmeans.fit(&points.view()).unwrap();

        let centroids = kmeans.centroids().unwrap();
        for (j, row) in points.rows().into_iter().enumerate() {
            let mean = row.sum() / row.len() as f64;
            prop_assert!((centroids[[j, 0]] - mean).abs() < 1e-9);
        }
    }
}

//! # seqkmeans-rs
//!
//! Sequential Lloyd k-means clustering over ndarray matrices.
//!
//! ## Data layout
//!
//! Observations are stored dimension-major: a `(d, n)` matrix where row `j`
//! holds coordinate `j` of every point and column `i` is point `i`. Centroids
//! use the same layout with `k` columns.
//!
//! ## Algorithm
//!
//! - **Seeding**: k observations drawn uniformly with replacement from a
//!   seeded `ChaCha8Rng`
//! - **Lloyd rounds**: assign every point to its nearest centroid by squared
//!   Euclidean distance (ties go to the lowest index), then move each centroid
//!   to the mean of its points
//! - **Convergence**: stop once no centroid coordinate changes at the
//!   configured number of decimal places, or after `max_iters` rounds
//!
//! A cluster that ends a round with no points gets NaN coordinates; these are
//! reported through the `log` facade and returned as-is.
//!
//! ## Example
//!
//! ```rust
//! use seqkmeans_rs::{KMeans, KMeansConfig, SequentialKMeans};
//! use ndarray::Array2;
//! use ndarray_rand::RandomExt;
//! use ndarray_rand::rand_distr::Uniform;
//!
//! // 3 dimensions, 1000 points
//! let points = Array2::random((3, 1000), Uniform::new(-1.0, 1.0));
//!
//! let config = KMeansConfig::new(10)
//!     .with_max_iters(100)
//!     .with_seed(42)
//!     .with_precision(4);
//!
//! let mut kmeans = SequentialKMeans::with_config(config);
//! kmeans.fit(&points.view()).unwrap();
//!
//! assert_eq!(kmeans.centroids().unwrap().dim(), (3, 10));
//! assert!(kmeans.n_iter().unwrap() <= 100);
//! ```

mod algorithm;
mod config;
mod distance;
mod error;
mod kmeans;
mod matrix;
mod traits;

pub use algorithm::{lloyd, KMeansFit};
pub use config::KMeansConfig;
pub use error::KMeansError;
pub use kmeans::SequentialKMeans;
pub use matrix::observations_from_dims;
pub use traits::KMeans;

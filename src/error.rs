use thiserror::Error;

/// Error types for the seqkmeans library
#[derive(Error, Debug)]
pub enum KMeansError {
    /// The number of clusters k is invalid (must be > 0)
    #[error("Invalid k value: {0}")]
    InvalidK(String),

    /// The observation matrix has no dimensions or no points
    #[error("Empty input: observation matrix needs at least one dimension and one point")]
    EmptyInput,

    /// Model has not been fitted yet
    #[error("Model has not been fitted. Call fit() first.")]
    NotFitted,

    /// Dimension rows of unequal length, or a dimension count that does not
    /// match the fitted model
    #[error("Dimension mismatch: {0}")]
    InvalidDimensions(String),
}

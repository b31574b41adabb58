use crate::error::KMeansError;
use ndarray::Array2;

/// Build a dimension-major `(d, n)` observation matrix from one `Vec` per dimension.
///
/// `dims[j][i]` is coordinate `j` of point `i`. Every dimension must hold the
/// same number of points.
pub fn observations_from_dims(dims: &[Vec<f64>]) -> Result<Array2<f64>, KMeansError> {
    let n_dims = dims.len();
    let n_points = dims.first().map_or(0, Vec::len);
    if n_dims == 0 || n_points == 0 {
        return Err(KMeansError::EmptyInput);
    }

    if let Some((j, row)) = dims.iter().enumerate().find(|(_, row)| row.len() != n_points) {
        return Err(KMeansError::InvalidDimensions(format!(
            "Dimension {} has {} points, expected {}",
            j,
            row.len(),
            n_points
        )));
    }

    let flat: Vec<f64> = dims.iter().flatten().copied().collect();
    Array2::from_shape_vec((n_dims, n_points), flat)
        .map_err(|e| KMeansError::InvalidDimensions(e.to_string()))
}

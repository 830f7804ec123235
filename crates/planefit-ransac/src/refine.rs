use planefit_3d::PlaneModel;
use planefit_linalg::{centroid, covariance3, symmetric_eigen3};

use crate::error::PlaneRansacError;

/// Fit a plane to a set of points in the least-squares sense.
///
/// The plane passes through the centroid and its normal is the direction of
/// least variance, i.e. the eigenvector of the smallest eigenvalue of the
/// scatter matrix. This minimizes the sum of squared orthogonal distances.
///
/// # Arguments
///
/// * `points` - At least three points.
///
/// # Returns
///
/// The fitted plane. The sign of the normal is arbitrary.
pub fn fit_plane_least_squares(points: &[[f64; 3]]) -> Result<PlaneModel, PlaneRansacError> {
    if points.len() < 3 {
        return Err(PlaneRansacError::InsufficientInliers {
            required: 3,
            actual: points.len(),
        });
    }
    if !points.iter().flatten().all(|v| v.is_finite()) {
        return Err(PlaneRansacError::InvalidInput(
            "points must be finite".to_string(),
        ));
    }

    let c = centroid(points).ok_or(PlaneRansacError::InsufficientInliers {
        required: 3,
        actual: 0,
    })?;
    let eig = symmetric_eigen3(&covariance3(points, c));
    let (_, normal) = eig.smallest();

    Ok(PlaneModel::from_normal_and_point(
        &normal.to_array(),
        &c.to_array(),
    )?)
}

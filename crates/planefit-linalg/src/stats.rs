use glam::{DMat3, DVec3};

/// Compute the centroid of a set of points.
///
/// # Arguments
///
/// * `points` - A set of 3D points.
///
/// # Returns
///
/// The mean of the points, or `None` if the set is empty.
///
/// Example:
///
/// ```
/// use planefit_linalg::stats::centroid;
///
/// let points = vec![[1.0, 2.0, 3.0], [3.0, 4.0, 5.0]];
/// let c = centroid(&points).unwrap();
/// assert_eq!(c.to_array(), [2.0, 3.0, 4.0]);
/// ```
pub fn centroid(points: &[[f64; 3]]) -> Option<DVec3> {
    if points.is_empty() {
        return None;
    }
    let sum = points
        .iter()
        .fold(DVec3::ZERO, |acc, p| acc + DVec3::from_array(*p));
    Some(sum / points.len() as f64)
}

/// Compute the scatter matrix `Σ (p - c)(p - c)ᵀ` of a set of points.
///
/// The matrix is not normalized by the number of points; the scale does not
/// change its eigenvectors.
///
/// # Arguments
///
/// * `points` - A set of 3D points.
/// * `centroid` - The point the deviations are taken from, usually the centroid.
///
/// # Returns
///
/// The symmetric 3×3 scatter matrix.
pub fn covariance3(points: &[[f64; 3]], centroid: DVec3) -> DMat3 {
    let (mut xx, mut xy, mut xz, mut yy, mut yz, mut zz) = (0.0, 0.0, 0.0, 0.0, 0.0, 0.0);
    for p in points {
        let d = DVec3::from_array(*p) - centroid;
        xx += d.x * d.x;
        xy += d.x * d.y;
        xz += d.x * d.z;
        yy += d.y * d.y;
        yz += d.y * d.z;
        zz += d.z * d.z;
    }
    DMat3::from_cols(
        DVec3::new(xx, xy, xz),
        DVec3::new(xy, yy, yz),
        DVec3::new(xz, yz, zz),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_centroid() {
        let points = vec![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let c = centroid(&points).unwrap();
        assert_relative_eq!(c.x, 2.5);
        assert_relative_eq!(c.y, 3.5);
        assert_relative_eq!(c.z, 4.5);
    }

    #[test]
    fn test_centroid_empty() {
        assert!(centroid(&[]).is_none());
    }

    #[test]
    fn test_covariance_planar_points() {
        // points on z = 1, so the z row and column vanish
        let points = vec![
            [1.0, 0.0, 1.0],
            [-1.0, 0.0, 1.0],
            [0.0, 2.0, 1.0],
            [0.0, -2.0, 1.0],
        ];
        let c = centroid(&points).unwrap();
        let cov = covariance3(&points, c);

        assert_relative_eq!(cov.x_axis.x, 2.0);
        assert_relative_eq!(cov.y_axis.y, 8.0);
        assert_relative_eq!(cov.z_axis.z, 0.0);
        assert_relative_eq!(cov.x_axis.y, 0.0);
        assert_relative_eq!(cov.z_axis.x, 0.0);
        assert_eq!(cov, cov.transpose());
    }
}

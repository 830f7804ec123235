//! Eigen-decomposition of symmetric 3×3 matrices.
//!
//! Covariance (scatter) matrices of 3D point sets are symmetric positive
//! semi-definite, so their eigenvectors form an orthonormal basis. The
//! eigenvector of the smallest eigenvalue is the direction of least
//! variance, which is the normal of the least-squares plane through the
//! points.
//!
//! # Implementation Details
//!
//! The decomposition uses the cyclic Jacobi eigenvalue algorithm: each sweep
//! annihilates the three off-diagonal entries with plane rotations
//! `A ← Jᵀ A J`, accumulating `V ← V J`. For 3×3 matrices the iteration
//! converges quadratically and a handful of sweeps reach machine precision.
//!
//! # Example
//!
//! ```
//! use glam::{DMat3, DVec3};
//! use planefit_linalg::eigen::symmetric_eigen3;
//!
//! let m = DMat3::from_diagonal(DVec3::new(3.0, 1.0, 2.0));
//! let eig = symmetric_eigen3(&m);
//!
//! let (lambda, v) = eig.smallest();
//! assert_eq!(lambda, 1.0);
//! assert_eq!(v.y.abs(), 1.0);
//! ```
//!
//! # References
//!
//! * Golub and Van Loan (2013). "Matrix Computations", 4th ed., §8.5.

use glam::{DMat3, DVec3};

/// Upper bound on the number of Jacobi sweeps.
const MAX_SWEEPS: usize = 32;

/// Relative tolerance on the squared off-diagonal mass.
const OFF_DIAGONAL_EPSILON: f64 = 1e-30;

/// Index pairs of the strictly upper triangle, visited in cyclic order.
const PIVOTS: [(usize, usize); 3] = [(0, 1), (0, 2), (1, 2)];

/// Eigenvalues and eigenvectors of a symmetric 3×3 matrix.
///
/// Eigenvalues are sorted in ascending order and the eigenvector columns
/// follow the same order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SymmetricEigen3 {
    eigenvalues: DVec3,
    eigenvectors: DMat3,
}

impl SymmetricEigen3 {
    /// The eigenvalues in ascending order.
    pub fn eigenvalues(&self) -> DVec3 {
        self.eigenvalues
    }

    /// The unit eigenvectors stored as matrix columns.
    pub fn eigenvectors(&self) -> &DMat3 {
        &self.eigenvectors
    }

    /// The `i`-th eigenvector (ascending eigenvalue order).
    ///
    /// # Panics
    ///
    /// Panics if `i > 2`.
    pub fn eigenvector(&self, i: usize) -> DVec3 {
        self.eigenvectors.col(i)
    }

    /// The smallest eigenvalue and its eigenvector.
    pub fn smallest(&self) -> (f64, DVec3) {
        (self.eigenvalues.x, self.eigenvectors.x_axis)
    }

    /// The largest eigenvalue and its eigenvector.
    pub fn largest(&self) -> (f64, DVec3) {
        (self.eigenvalues.z, self.eigenvectors.z_axis)
    }
}

/// Compute the eigen-decomposition of a symmetric 3×3 matrix.
///
/// Only the symmetric part `(M + Mᵀ) / 2` of the input is used.
///
/// # Arguments
///
/// * `m` - A symmetric matrix.
///
/// # Returns
///
/// The eigenvalues in ascending order with their unit eigenvectors.
pub fn symmetric_eigen3(m: &DMat3) -> SymmetricEigen3 {
    let cols = m.to_cols_array_2d();

    // a[i][j] is the symmetrized entry (i, j)
    let mut a = [[0.0f64; 3]; 3];
    for (i, row) in a.iter_mut().enumerate() {
        for (j, val) in row.iter_mut().enumerate() {
            *val = 0.5 * (cols[j][i] + cols[i][j]);
        }
    }

    // v[i][j] is entry (i, j) of the accumulated rotation, eigenvectors are columns
    let mut v = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

    for _ in 0..MAX_SWEEPS {
        let off = a[0][1] * a[0][1] + a[0][2] * a[0][2] + a[1][2] * a[1][2];
        let diag = a[0][0] * a[0][0] + a[1][1] * a[1][1] + a[2][2] * a[2][2];
        if off == 0.0 || off <= OFF_DIAGONAL_EPSILON * (diag + off) {
            break;
        }

        for &(p, q) in PIVOTS.iter() {
            let apq = a[p][q];
            if apq == 0.0 {
                continue;
            }

            // rotation angle that zeroes a[p][q], see Golub & Van Loan Alg. 8.5.1
            let theta = (a[q][q] - a[p][p]) / (2.0 * apq);
            let t = if theta.is_finite() {
                theta.signum() / (theta.abs() + (theta * theta + 1.0).sqrt())
            } else {
                0.0
            };
            let c = 1.0 / (t * t + 1.0).sqrt();
            let s = t * c;

            // A <- A J
            for row in a.iter_mut() {
                let (akp, akq) = (row[p], row[q]);
                row[p] = c * akp - s * akq;
                row[q] = s * akp + c * akq;
            }

            // A <- J^T A
            for k in 0..3 {
                let (apk, aqk) = (a[p][k], a[q][k]);
                a[p][k] = c * apk - s * aqk;
                a[q][k] = s * apk + c * aqk;
            }

            // V <- V J
            for row in v.iter_mut() {
                let (vkp, vkq) = (row[p], row[q]);
                row[p] = c * vkp - s * vkq;
                row[q] = s * vkp + c * vkq;
            }
        }
    }

    let mut order = [0usize, 1, 2];
    order.sort_by(|&i, &j| a[i][i].total_cmp(&a[j][j]));

    let column = |j: usize| DVec3::new(v[0][j], v[1][j], v[2][j]);

    let [i0, i1, i2] = order;
    SymmetricEigen3 {
        eigenvalues: DVec3::new(a[i0][i0], a[i1][i1], a[i2][i2]),
        eigenvectors: DMat3::from_cols(column(i0), column(i1), column(i2)),
    }
}

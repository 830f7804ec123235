#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Module to calculate the eigen-decomposition of a symmetric 3x3 matrix
pub mod eigen;

/// Centroid and scatter matrices of point sets.
pub mod stats;

/// Vector helpers over `[f64; 3]`.
pub mod vector;

pub use eigen::{symmetric_eigen3, SymmetricEigen3};
pub use stats::{centroid, covariance3};

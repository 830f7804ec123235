#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Planefit RANSAC
//!
//! Robust estimation of a plane `A·x + B·y + C·z + D = 0` from 3D points
//! containing outliers.
//!
//! ## Example
//!
//! ```rust
//! use planefit_ransac::estimate;
//!
//! let mut points = Vec::new();
//! for i in 0..8 {
//!     for j in 0..8 {
//!         let (x, y) = (i as f64 * 0.5, j as f64 * 0.5);
//!         points.push([x, y, 0.2 * x - 0.1 * y + 1.0]);
//!     }
//! }
//! points.push([1.0, 1.0, 10.0]);
//! points.push([2.0, 0.0, -5.0]);
//!
//! let plane = estimate(&points, 0.05, 0.999, 0.1)?;
//! assert!(plane.distance(&[1.0, 2.0, 1.0]) < 1e-9);
//! # Ok::<(), planefit_ransac::PlaneRansacError>(())
//! ```

/// Error types for plane estimation.
pub mod error;

/// The RANSAC estimator.
pub mod estimator;

/// Serial and parallel scoring of hypotheses.
pub mod parallel;

/// Estimator parameters.
pub mod params;

/// Least-squares plane refinement.
pub mod refine;

/// Number of samples for a given confidence.
pub mod sample_count;

/// Minimal sample generators.
pub mod sampler;

pub use error::PlaneRansacError;
pub use estimator::{
    count_inliers, estimate, ransac_plane, ransac_plane_with_sampler, PlaneRansacResult,
};
pub use parallel::ExecutionStrategy;
pub use params::RansacParams;
pub use refine::fit_plane_least_squares;
pub use sample_count::{sample_count, SAMPLE_SIZE};
pub use sampler::{MinimalSampler, UniformSampler};

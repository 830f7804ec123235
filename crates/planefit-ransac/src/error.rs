use planefit_3d::PlaneError;

/// Error types for the robust plane estimator.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum PlaneRansacError {
    /// The points or the parameters are not usable.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Every draw of a single iteration picked collinear points.
    #[error("no non-collinear sample found after {attempts} draws")]
    DegenerateSample {
        /// The number of draws attempted.
        attempts: usize,
    },

    /// The consensus set is too small to fit a plane.
    #[error("insufficient inliers: required {required}, got {actual}")]
    InsufficientInliers {
        /// The minimum number of inliers.
        required: usize,
        /// The number of inliers found.
        actual: usize,
    },

    /// The fitted coefficients do not describe a plane.
    #[error(transparent)]
    Plane(#[from] PlaneError),
}

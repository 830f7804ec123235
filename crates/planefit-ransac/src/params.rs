use serde::{Deserialize, Serialize};

use crate::{error::PlaneRansacError, parallel::ExecutionStrategy};

/// Parameters for RANSAC plane estimation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RansacParams {
    /// Maximum point-to-plane distance for a point to count as an inlier.
    pub distance_threshold: f64,
    /// Desired probability that at least one sample is outlier-free.
    pub confidence: f64,
    /// Assumed fraction of outliers in the input.
    pub outlier_ratio: f64,
    /// Draws allowed per iteration before collinear samples are an error.
    pub max_sample_attempts: usize,
    /// Minimum size of the consensus set, never less than 3.
    pub min_inliers: usize,
    /// Optional fixed seed for reproducible sampling.
    pub random_seed: Option<u64>,
    /// Whether to refit on all inliers with least squares.
    pub refine: bool,
    /// How hypotheses are scored.
    pub execution: ExecutionStrategy,
}

impl Default for RansacParams {
    fn default() -> Self {
        Self {
            distance_threshold: 0.05,
            confidence: 0.999,
            outlier_ratio: 30.0 / 130.0,
            max_sample_attempts: 100,
            min_inliers: 3,
            random_seed: None,
            refine: true,
            execution: ExecutionStrategy::Serial,
        }
    }
}

impl RansacParams {
    /// Check that every parameter is in range.
    pub fn validate(&self) -> Result<(), PlaneRansacError> {
        if !(self.distance_threshold.is_finite() && self.distance_threshold > 0.0) {
            return Err(PlaneRansacError::InvalidInput(format!(
                "distance threshold must be finite and > 0, got {}",
                self.distance_threshold
            )));
        }
        if !(self.confidence > 0.0 && self.confidence < 1.0) {
            return Err(PlaneRansacError::InvalidInput(format!(
                "confidence must be in (0, 1), got {}",
                self.confidence
            )));
        }
        if !(0.0..1.0).contains(&self.outlier_ratio) {
            return Err(PlaneRansacError::InvalidInput(format!(
                "outlier ratio must be in [0, 1), got {}",
                self.outlier_ratio
            )));
        }
        if self.max_sample_attempts == 0 {
            return Err(PlaneRansacError::InvalidInput(
                "max sample attempts must be > 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Required size of the consensus set.
    pub fn required_inliers(&self) -> usize {
        self.min_inliers.max(crate::sample_count::SAMPLE_SIZE)
    }
}

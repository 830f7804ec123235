use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use planefit_3d::PlaneModel;

use crate::estimator::inlier_count;

/// Controls how hypotheses are scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionStrategy {
    /// Score the hypotheses one after the other on the current thread.
    #[default]
    Serial,

    /// Score the hypotheses on the global Rayon thread pool.
    ///
    /// Samples are still drawn in order from the one sampler, so the result
    /// equals the serial one for the same seed.
    Parallel,
}

/// Count the inliers of every hypothesis with the given strategy.
///
/// The counts are returned in the order of `hypotheses`.
pub(crate) fn score_hypotheses(
    points: &[[f64; 3]],
    hypotheses: &[PlaneModel],
    threshold: f64,
    strategy: ExecutionStrategy,
) -> Vec<usize> {
    match strategy {
        ExecutionStrategy::Serial => hypotheses
            .iter()
            .map(|h| inlier_count(points, h, threshold))
            .collect(),
        ExecutionStrategy::Parallel => hypotheses
            .par_iter()
            .map(|h| inlier_count(points, h, threshold))
            .collect(),
    }
}

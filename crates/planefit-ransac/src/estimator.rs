//! Robust plane estimation with random sample consensus.
//!
//! The estimator repeats a fixed number of times, derived from the requested
//! confidence and the assumed outlier ratio (see [`sample_count`]):
//!
//! 1. draw three distinct points, re-drawing collinear triples,
//! 2. fit the exact plane through them,
//! 3. count the points within `distance_threshold` of the plane.
//!
//! The hypothesis with the most inliers wins, the earliest one on ties. Its
//! consensus set is then refit with least squares (see
//! [`fit_plane_least_squares`]).
//!
//! # Example
//!
//! ```
//! use planefit_ransac::{ransac_plane, RansacParams};
//!
//! let mut points = Vec::new();
//! for i in 0..10 {
//!     for j in 0..10 {
//!         points.push([i as f64, j as f64, 2.0]);
//!     }
//! }
//! points.push([3.0, 3.0, 40.0]);
//!
//! let params = RansacParams {
//!     random_seed: Some(0),
//!     ..Default::default()
//! };
//! let result = ransac_plane(&points, &params)?;
//! assert_eq!(result.inliers.len(), 100);
//! assert!((result.model.normal().z.abs() - 1.0).abs() < 1e-9);
//! # Ok::<(), planefit_ransac::PlaneRansacError>(())
//! ```

use planefit_3d::{PlaneError, PlaneModel};

use crate::{
    error::PlaneRansacError,
    params::RansacParams,
    parallel::{score_hypotheses, ExecutionStrategy},
    refine::fit_plane_least_squares,
    sample_count::{sample_count, SAMPLE_SIZE},
    sampler::{MinimalSampler, UniformSampler},
};

/// Hypotheses scored per batch in parallel mode.
const PARALLEL_BATCH_SIZE: usize = 1024;

/// Result of RANSAC plane estimation.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaneRansacResult {
    /// The final plane, refined on the inliers when refinement is enabled.
    pub model: PlaneModel,
    /// The winning three-point hypothesis.
    pub hypothesis: PlaneModel,
    /// Ascending indices of the points within the threshold of `hypothesis`.
    pub inliers: Vec<usize>,
    /// Number of hypotheses evaluated.
    pub sample_time: usize,
    /// Number of collinear samples that were re-drawn.
    pub degenerate_draws: usize,
    /// Zero-based iteration that produced `hypothesis`.
    pub best_iteration: usize,
    /// Root-mean-square distance of the inliers to `model`.
    pub rmse: f64,
}

/// Estimate a plane from points containing outliers.
///
/// Uses the default [`RansacParams`] with the given threshold, confidence
/// and outlier ratio, sampling from OS entropy.
///
/// # Arguments
///
/// * `points` - At least three points, not all collinear.
/// * `distance_threshold` - Inlier distance, must be > 0.
/// * `confidence` - Probability of drawing one outlier-free sample, in `(0, 1)`.
/// * `assumed_outlier_ratio` - Expected fraction of outliers, in `[0, 1)`.
///
/// # Returns
///
/// The refined plane with a unit normal.
pub fn estimate(
    points: &[[f64; 3]],
    distance_threshold: f64,
    confidence: f64,
    assumed_outlier_ratio: f64,
) -> Result<PlaneModel, PlaneRansacError> {
    let params = RansacParams {
        distance_threshold,
        confidence,
        outlier_ratio: assumed_outlier_ratio,
        ..Default::default()
    };
    ransac_plane(points, &params).map(|res| res.model)
}

/// Estimate a plane robustly, sampling with a [`UniformSampler`] seeded from
/// `params.random_seed`.
pub fn ransac_plane(
    points: &[[f64; 3]],
    params: &RansacParams,
) -> Result<PlaneRansacResult, PlaneRansacError> {
    let mut sampler = UniformSampler::new(params.random_seed);
    ransac_plane_with_sampler(points, params, &mut sampler)
}

/// Estimate a plane robustly with a caller-provided sampler.
///
/// `params.random_seed` is ignored.
pub fn ransac_plane_with_sampler<S: MinimalSampler + ?Sized>(
    points: &[[f64; 3]],
    params: &RansacParams,
    sampler: &mut S,
) -> Result<PlaneRansacResult, PlaneRansacError> {
    params.validate()?;
    validate_points(points)?;

    let sample_time = sample_count(params.confidence, params.outlier_ratio, SAMPLE_SIZE)?;
    log::debug!(
        "ransac: {} points, {} iterations, threshold {}",
        points.len(),
        sample_time,
        params.distance_threshold
    );

    let mut draws = HypothesisDraws {
        points,
        max_attempts: params.max_sample_attempts,
        degenerate_draws: 0,
    };
    let mut best = BestHypothesis::default();

    match params.execution {
        ExecutionStrategy::Serial => {
            for iteration in 0..sample_time {
                let hypothesis = draws.draw(sampler, iteration)?;
                let count = inlier_count(points, &hypothesis, params.distance_threshold);
                best.update(iteration, hypothesis, count);
            }
        }
        ExecutionStrategy::Parallel => {
            let mut hypotheses = Vec::with_capacity(sample_time.min(PARALLEL_BATCH_SIZE));
            let mut start = 0;
            while start < sample_time {
                let end = (start + PARALLEL_BATCH_SIZE).min(sample_time);

                // drawn serially, in iteration order
                hypotheses.clear();
                for iteration in start..end {
                    hypotheses.push(draws.draw(sampler, iteration)?);
                }

                let counts = score_hypotheses(
                    points,
                    &hypotheses,
                    params.distance_threshold,
                    params.execution,
                );
                for (offset, (hypothesis, count)) in hypotheses.iter().zip(counts).enumerate() {
                    best.update(start + offset, *hypothesis, count);
                }
                start = end;
            }
        }
    }

    let (best_iteration, hypothesis) = match best.model {
        Some(model) => (best.iteration, model),
        None => {
            return Err(PlaneRansacError::InsufficientInliers {
                required: params.required_inliers(),
                actual: 0,
            })
        }
    };

    let mut inliers = Vec::with_capacity(best.count);
    count_inliers(points, &hypothesis, params.distance_threshold, &mut inliers);

    let required = params.required_inliers();
    if inliers.len() < required {
        return Err(PlaneRansacError::InsufficientInliers {
            required,
            actual: inliers.len(),
        });
    }

    let model = if params.refine {
        let inlier_points = inliers.iter().map(|&i| points[i]).collect::<Vec<_>>();
        fit_plane_least_squares(&inlier_points)?.oriented_like(&hypothesis)
    } else {
        hypothesis
    };

    let rmse = (inliers
        .iter()
        .map(|&i| model.signed_distance(&points[i]).powi(2))
        .sum::<f64>()
        / inliers.len() as f64)
        .sqrt();

    let inlier_ratio = inliers.len() as f64 / points.len() as f64;
    log::info!(
        "ransac: {}/{} inliers at iteration {} ({} degenerate draws), rmse {:.6}",
        inliers.len(),
        points.len(),
        best_iteration,
        draws.degenerate_draws,
        rmse
    );
    if inlier_ratio < 0.5 * (1.0 - params.outlier_ratio) {
        log::warn!(
            "ransac: inlier ratio {:.3} is far below the assumed {:.3}",
            inlier_ratio,
            1.0 - params.outlier_ratio
        );
    }

    Ok(PlaneRansacResult {
        model,
        hypothesis,
        inliers,
        sample_time,
        degenerate_draws: draws.degenerate_draws,
        best_iteration,
        rmse,
    })
}

/// Collect the indices of the points within `threshold` of `model`.
///
/// # Arguments
///
/// * `points` - The points to classify.
/// * `model` - The plane.
/// * `threshold` - The maximum absolute distance of an inlier.
/// * `inliers` - Cleared and filled with ascending inlier indices.
///
/// # Returns
///
/// The number of inliers.
pub fn count_inliers(
    points: &[[f64; 3]],
    model: &PlaneModel,
    threshold: f64,
    inliers: &mut Vec<usize>,
) -> usize {
    inliers.clear();
    inliers.extend(
        points
            .iter()
            .enumerate()
            .filter(|(_, p)| model.distance(p) <= threshold)
            .map(|(i, _)| i),
    );
    inliers.len()
}

pub(crate) fn inlier_count(points: &[[f64; 3]], model: &PlaneModel, threshold: f64) -> usize {
    points
        .iter()
        .filter(|p| model.distance(p) <= threshold)
        .count()
}

fn validate_points(points: &[[f64; 3]]) -> Result<(), PlaneRansacError> {
    if points.len() < SAMPLE_SIZE {
        return Err(PlaneRansacError::InvalidInput(format!(
            "at least {} points are required, got {}",
            SAMPLE_SIZE,
            points.len()
        )));
    }
    if let Some(i) = points
        .iter()
        .position(|p| !p.iter().all(|v| v.is_finite()))
    {
        return Err(PlaneRansacError::InvalidInput(format!(
            "point {i} has non-finite coordinates"
        )));
    }
    Ok(())
}

/// Draws non-degenerate hypotheses and tracks the re-draws.
struct HypothesisDraws<'a> {
    points: &'a [[f64; 3]],
    max_attempts: usize,
    degenerate_draws: usize,
}

impl HypothesisDraws<'_> {
    fn draw<S: MinimalSampler + ?Sized>(
        &mut self,
        sampler: &mut S,
        iteration: usize,
    ) -> Result<PlaneModel, PlaneRansacError> {
        for _ in 0..self.max_attempts {
            let [i, j, k] = sampler.sample(self.points.len());
            match PlaneModel::from_points(&self.points[i], &self.points[j], &self.points[k]) {
                Ok(model) => return Ok(model),
                Err(PlaneError::Collinear) => {
                    self.degenerate_draws += 1;
                    log::debug!("ransac: iteration {iteration}: collinear sample [{i}, {j}, {k}]");
                }
                Err(e) => return Err(e.into()),
            }
        }
        Err(PlaneRansacError::DegenerateSample {
            attempts: self.max_attempts,
        })
    }
}

/// The largest consensus seen so far, earliest on ties.
#[derive(Default)]
struct BestHypothesis {
    model: Option<PlaneModel>,
    count: usize,
    iteration: usize,
}

impl BestHypothesis {
    fn update(&mut self, iteration: usize, model: PlaneModel, count: usize) {
        if self.model.is_none() || count > self.count {
            log::debug!("ransac: iteration {iteration}: {count} inliers");
            self.model = Some(model);
            self.count = count;
            self.iteration = iteration;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_count_inliers() -> Result<(), Box<dyn std::error::Error>> {
        let plane = PlaneModel::new(0.0, 0.0, 1.0, 0.0)?;
        let points = vec![
            [0.0, 0.0, 0.05],
            [1.0, 1.0, 0.2],
            [2.0, 0.0, -0.05],
            [5.0, 5.0, -0.0500001],
        ];
        let mut inliers = vec![99];
        let n = count_inliers(&points, &plane, 0.05, &mut inliers);
        assert_eq!(n, 2);
        assert_eq!(inliers, vec![0, 2]);
        assert_eq!(inlier_count(&points, &plane, 0.05), 2);
        Ok(())
    }

    #[test]
    fn test_best_hypothesis_keeps_earliest_on_tie() -> Result<(), Box<dyn std::error::Error>> {
        let a = PlaneModel::new(0.0, 0.0, 1.0, 0.0)?;
        let b = PlaneModel::new(0.0, 1.0, 0.0, 0.0)?;
        let mut best = BestHypothesis::default();
        best.update(0, a, 5);
        best.update(1, b, 5);
        assert_eq!(best.model, Some(a));
        assert_eq!(best.iteration, 0);
        best.update(2, b, 6);
        assert_eq!(best.model, Some(b));
        assert_eq!(best.iteration, 2);
        Ok(())
    }

    #[test]
    fn test_validate_points() {
        assert!(validate_points(&[[0.0; 3], [1.0; 3]]).is_err());
        assert!(validate_points(&[[0.0; 3], [1.0; 3], [f64::NAN, 0.0, 0.0]]).is_err());
        assert!(validate_points(&[[0.0; 3], [1.0; 3], [2.0, 0.0, 0.0]]).is_ok());
    }

    #[test]
    fn test_rmse_without_refinement() -> Result<(), PlaneRansacError> {
        // four points at +-0.01 around z = 0 and an exact triple on z = 0
        let points = vec![
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [2.0, 2.0, 0.01],
            [3.0, -1.0, -0.01],
        ];
        let params = RansacParams {
            outlier_ratio: 0.0,
            refine: false,
            ..Default::default()
        };
        let mut sampler = FixedSampler([0, 1, 2]);
        let res = ransac_plane_with_sampler(&points, &params, &mut sampler)?;
        assert_eq!(res.sample_time, 1);
        assert_eq!(res.inliers, vec![0, 1, 2, 3, 4]);
        assert_eq!(res.model, res.hypothesis);
        assert_relative_eq!(res.rmse, (0.0002f64 / 5.0).sqrt(), epsilon = 1e-12);
        Ok(())
    }

    struct FixedSampler([usize; 3]);

    impl MinimalSampler for FixedSampler {
        fn sample(&mut self, _num_points: usize) -> [usize; 3] {
            self.0
        }
    }
}

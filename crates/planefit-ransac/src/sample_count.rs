use crate::error::PlaneRansacError;

/// Number of points that define a plane hypothesis.
pub const SAMPLE_SIZE: usize = 3;

/// Number of random samples needed to draw at least one outlier-free sample.
///
/// With `p = 1 - outlier_ratio` the probability that a sample of
/// `sample_size` points holds only inliers is `p^sample_size`, so
///
/// ```text
/// sample_time = ceil(ln(1 - confidence) / ln(1 - p^sample_size))
/// ```
///
/// When `p^sample_size` is 1 a single sample suffices. The result is at
/// least 1.
///
/// # Arguments
///
/// * `confidence` - Probability of drawing one clean sample, in `(0, 1)`.
/// * `outlier_ratio` - Assumed fraction of outliers, in `[0, 1)`.
/// * `sample_size` - Number of points per sample.
///
/// # Returns
///
/// The number of samples to draw.
///
/// Example:
///
/// ```
/// use planefit_ransac::sample_count::sample_count;
///
/// assert_eq!(sample_count(0.999, 0.23, 3).unwrap(), 12);
/// ```
pub fn sample_count(
    confidence: f64,
    outlier_ratio: f64,
    sample_size: usize,
) -> Result<usize, PlaneRansacError> {
    if !(confidence > 0.0 && confidence < 1.0) {
        return Err(PlaneRansacError::InvalidInput(format!(
            "confidence must be in (0, 1), got {confidence}"
        )));
    }
    if !(0.0..1.0).contains(&outlier_ratio) {
        return Err(PlaneRansacError::InvalidInput(format!(
            "outlier ratio must be in [0, 1), got {outlier_ratio}"
        )));
    }
    if sample_size == 0 {
        return Err(PlaneRansacError::InvalidInput(
            "sample size must be > 0".to_string(),
        ));
    }

    let p_clean = (1.0 - outlier_ratio).powi(sample_size as i32);
    if p_clean >= 1.0 {
        return Ok(1);
    }

    let denom = (1.0 - p_clean).ln();
    if denom >= 0.0 {
        // p_clean is below the f64 resolution around 1
        return Err(PlaneRansacError::InvalidInput(format!(
            "outlier ratio {outlier_ratio} is too close to 1"
        )));
    }

    // float to int casts saturate
    let n = ((1.0 - confidence).ln() / denom).ceil() as usize;
    Ok(n.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_count_values() -> Result<(), PlaneRansacError> {
        assert_eq!(sample_count(0.999, 0.23, SAMPLE_SIZE)?, 12);
        assert_eq!(sample_count(0.999, 30.0 / 130.0, SAMPLE_SIZE)?, 12);
        assert_eq!(sample_count(0.99999, 30.0 / 130.0, SAMPLE_SIZE)?, 19);
        assert_eq!(sample_count(0.99, 0.5, SAMPLE_SIZE)?, 35);
        assert_eq!(sample_count(0.999, 0.5, SAMPLE_SIZE)?, 52);
        assert_eq!(sample_count(0.9, 0.5, SAMPLE_SIZE)?, 18);
        assert_eq!(sample_count(0.999, 0.9, SAMPLE_SIZE)?, 6905);
        Ok(())
    }

    #[test]
    fn test_sample_count_lower_bound() -> Result<(), PlaneRansacError> {
        assert_eq!(sample_count(0.999, 0.0, SAMPLE_SIZE)?, 1);
        assert_eq!(sample_count(0.5, 0.1, SAMPLE_SIZE)?, 1);
        assert_eq!(sample_count(1e-9, 0.3, SAMPLE_SIZE)?, 1);
        Ok(())
    }

    #[test]
    fn test_sample_count_monotone() -> Result<(), PlaneRansacError> {
        let ratios = [0.0, 0.05, 0.1, 0.2, 0.23, 0.3, 0.4, 0.5, 0.6, 0.7];
        let confidences = [0.5, 0.9, 0.95, 0.99, 0.999, 0.9999];

        for &conf in confidences.iter() {
            let counts = ratios
                .iter()
                .map(|&r| sample_count(conf, r, SAMPLE_SIZE))
                .collect::<Result<Vec<_>, _>>()?;
            assert!(counts.windows(2).all(|w| w[0] <= w[1]), "{counts:?}");
        }

        for &ratio in ratios.iter() {
            let counts = confidences
                .iter()
                .map(|&c| sample_count(c, ratio, SAMPLE_SIZE))
                .collect::<Result<Vec<_>, _>>()?;
            assert!(counts.windows(2).all(|w| w[0] <= w[1]), "{counts:?}");
        }
        Ok(())
    }

    #[test]
    fn test_sample_count_invalid() {
        for (conf, ratio) in [
            (0.0, 0.2),
            (1.0, 0.2),
            (f64::NAN, 0.2),
            (0.99, -0.1),
            (0.99, 1.0),
            (0.99, f64::NAN),
        ] {
            assert!(matches!(
                sample_count(conf, ratio, SAMPLE_SIZE),
                Err(PlaneRansacError::InvalidInput(_))
            ));
        }
        assert!(sample_count(0.99, 0.2, 0).is_err());
        assert!(sample_count(0.99, 1.0 - 1e-7, SAMPLE_SIZE).is_err());
    }
}

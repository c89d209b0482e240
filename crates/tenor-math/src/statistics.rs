//! Descriptive statistics.
//!
//! Variance-based measures accept an `offset` subtracted from the sample
//! count: `0` gives the population statistic, `1` the sample statistic.

use crate::error::{MathError, MathResult};

/// Observations per year used to annualise daily volatility.
pub const TRADING_DAYS_PER_YEAR: u32 = 252;

fn check_pair(a: &[f64], b: &[f64]) -> MathResult<()> {
    if a.len() != b.len() {
        return Err(MathError::invalid_input(format!(
            "series lengths differ: {} vs {}",
            a.len(),
            b.len()
        )));
    }
    Ok(())
}

/// Count offset applied when the sample does not span the whole
/// annualisation window.
fn window_offset(count: usize, days: u32) -> usize {
    usize::from(count != days as usize)
}

/// Arithmetic mean.
pub fn mean(values: &[f64]) -> MathResult<f64> {
    if values.is_empty() {
        return Err(MathError::insufficient_data(1, 0));
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Mean squared deviation from the mean, divided by `len - offset`.
pub fn variance(values: &[f64], offset: usize) -> MathResult<f64> {
    if values.len() <= offset {
        return Err(MathError::insufficient_data(offset + 1, values.len()));
    }
    let avg = mean(values)?;
    let sum_sq: f64 = values.iter().map(|v| (v - avg).powi(2)).sum();
    Ok(sum_sq / (values.len() - offset) as f64)
}

/// Square root of [`variance`].
pub fn standard_deviation(values: &[f64], offset: usize) -> MathResult<f64> {
    variance(values, offset).map(f64::sqrt)
}

/// Annualised volatility of a price series, as a percentage.
///
/// Uses the standard deviation of log price relatives scaled by
/// `sqrt(days)`. When the series length differs from `days` the sample
/// (n - 1) variance is used.
///
/// # Errors
///
/// Returns [`MathError::Domain`] for non-positive prices and
/// [`MathError::InsufficientData`] when too few prices are given.
pub fn historic_volatility(prices: &[f64], days: u32) -> MathResult<f64> {
    if prices.len() < 2 {
        return Err(MathError::insufficient_data(2, prices.len()));
    }
    if prices.iter().any(|&p| p <= 0.0) {
        return Err(MathError::domain("prices must be strictly positive"));
    }

    let log_returns: Vec<f64> = prices.windows(2).map(|w| (w[1] / w[0]).ln()).collect();
    let offset = window_offset(prices.len(), days);
    let sd = standard_deviation(&log_returns, offset)?;

    Ok(100.0 * sd * f64::from(days).sqrt())
}

/// Pearson correlation coefficient, in `[-1, 1]`.
///
/// # Errors
///
/// Returns [`MathError::Domain`] if either series is constant.
pub fn correlation(a: &[f64], b: &[f64]) -> MathResult<f64> {
    check_pair(a, b)?;
    let mean_a = mean(a)?;
    let mean_b = mean(b)?;

    let (top, sum_a2, sum_b2) = a.iter().zip(b).fold((0.0, 0.0, 0.0), |acc, (x, y)| {
        let (dx, dy) = (x - mean_a, y - mean_b);
        (acc.0 + dx * dy, acc.1 + dx * dx, acc.2 + dy * dy)
    });
    let bottom = (sum_a2 * sum_b2).sqrt();
    if bottom == 0.0 || !bottom.is_finite() {
        return Err(MathError::domain("correlation of a constant series"));
    }
    Ok(top / bottom)
}

/// Covariance built from the correlation and the two standard deviations.
///
/// `days` selects the count offset the same way as
/// [`historic_volatility`].
pub fn covariance(a: &[f64], b: &[f64], days: u32) -> MathResult<f64> {
    let offset = window_offset(a.len(), days);
    let rho = correlation(a, b)?;
    Ok(rho * standard_deviation(a, offset)? * standard_deviation(b, offset)?)
}

/// Sample covariance `Σ(a - ā)(b - b̄) / (n - 1)`.
pub fn sample_covariance(a: &[f64], b: &[f64]) -> MathResult<f64> {
    check_pair(a, b)?;
    if a.len() < 2 {
        return Err(MathError::insufficient_data(2, a.len()));
    }
    let mean_a = mean(a)?;
    let mean_b = mean(b)?;
    let total: f64 = a
        .iter()
        .zip(b)
        .map(|(x, y)| (x - mean_a) * (y - mean_b))
        .sum();
    Ok(total / (a.len() - 1) as f64)
}

/// Standard normal probability density.
#[must_use]
pub fn gaussian(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * std::f64::consts::PI).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    const SCORES: [f64; 10] = [110.0, 32.0, 85.0, 99.0, 100.0, 92.0, 93.0, 99.0, 34.0, 70.0];
    const A: [f64; 5] = [150.0, 155.0, 148.0, 147.0, 157.0];
    const B: [f64; 5] = [25.0, 30.0, 24.0, 23.0, 32.0];

    #[test]
    fn test_variance_and_sd() {
        assert_relative_eq!(variance(&SCORES, 0).unwrap(), 686.04, epsilon = 1e-9);
        assert_relative_eq!(standard_deviation(&SCORES, 0).unwrap(), 26.19, epsilon = 0.005);
    }

    #[test]
    fn test_variance_offset_too_large() {
        assert_eq!(
            variance(&[1.0], 1),
            Err(MathError::InsufficientData {
                required: 2,
                actual: 1
            })
        );
        assert!(mean(&[]).is_err());
    }

    #[test]
    fn test_historic_volatility() {
        let prices = [
            1.6520, 1.7342, 1.7490, 1.7640, 1.7850, 1.8890, 1.8980, 1.9230, 1.9450, 1.9540,
        ];
        let vol = historic_volatility(&prices, TRADING_DAYS_PER_YEAR).unwrap();
        assert_relative_eq!(vol, 31.0603, epsilon = 1e-4);
    }

    #[test]
    fn test_historic_volatility_rejects_bad_prices() {
        assert!(historic_volatility(&[1.0], 252).is_err());
        assert!(matches!(
            historic_volatility(&[1.0, -1.0, 2.0], 252),
            Err(MathError::Domain { .. })
        ));
    }

    #[test]
    fn test_correlation_and_covariance() {
        assert_relative_eq!(correlation(&A, &B).unwrap(), 0.9967, epsilon = 5e-5);
        let cov = covariance(&A, &B, TRADING_DAYS_PER_YEAR).unwrap();
        assert_relative_eq!(cov, 17.35, epsilon = 1e-9);
        assert_relative_eq!(cov, sample_covariance(&A, &B).unwrap(), epsilon = 1e-9);
    }

    #[test]
    fn test_correlation_errors() {
        assert!(correlation(&[1.0, 2.0], &[1.0]).is_err());
        assert!(matches!(
            correlation(&[1.0, 1.0, 1.0], &[1.0, 2.0, 3.0]),
            Err(MathError::Domain { .. })
        ));
    }

    #[test]
    fn test_gaussian() {
        let expected = [0.0001, 0.0044, 0.0540, 0.2420, 0.3989, 0.2420, 0.0540, 0.0044, 0.0001];
        for (x, want) in (-4..=4).zip(expected) {
            assert_relative_eq!(gaussian(f64::from(x)), want, epsilon = 5e-5);
        }
    }

    proptest! {
        #[test]
        fn prop_correlation_bounded(
            pairs in prop::collection::vec((-1e3f64..1e3, -1e3f64..1e3), 3..30)
        ) {
            let (a, b): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
            if let Ok(rho) = correlation(&a, &b) {
                prop_assert!(rho.abs() <= 1.0 + 1e-9);
            }
        }

        #[test]
        fn prop_variance_non_negative(values in prop::collection::vec(-1e6f64..1e6, 2..50)) {
            prop_assert!(variance(&values, 1).unwrap() >= 0.0);
        }
    }
}

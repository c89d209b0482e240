//! Two-point interpolation.
//!
//! Forward-forward rates and contract splits only ever interpolate between
//! two quoted tenors, so these functions take the two observations directly
//! instead of building a curve. Targets outside `[source_time,
//! destination_time]` extrapolate along the same line.

use crate::error::{MathError, MathResult};

/// Position of `target_time` between `source_time` (0) and
/// `destination_time` (1).
///
/// # Errors
///
/// Returns [`MathError::InvalidInput`] if the two times coincide.
pub fn time_ratio(source_time: f64, destination_time: f64, target_time: f64) -> MathResult<f64> {
    let span = destination_time - source_time;
    if span == 0.0 {
        return Err(MathError::invalid_input(format!(
            "source and destination times coincide at {source_time}"
        )));
    }
    Ok((target_time - source_time) / span)
}

/// Linear interpolation between two observations.
///
/// ```rust
/// use tenor_math::interpolation::linear_interpolation;
///
/// // 3m rate 5.1 at day 92, 5m rate 5.5 at day 153
/// let rate = linear_interpolation(5.1, 5.5, 92.0, 153.0, 112.0).unwrap();
/// assert!((rate - 5.2311).abs() < 1e-4);
/// ```
pub fn linear_interpolation(
    source_value: f64,
    destination_value: f64,
    source_time: f64,
    destination_time: f64,
    target_time: f64,
) -> MathResult<f64> {
    let ratio = time_ratio(source_time, destination_time, target_time)?;
    Ok(source_value + (destination_value - source_value) * ratio)
}

/// Interpolation that is linear in the logarithm of the values.
///
/// # Errors
///
/// Returns [`MathError::Domain`] if either value is not strictly positive.
pub fn log_interpolation(
    source_value: f64,
    destination_value: f64,
    source_time: f64,
    destination_time: f64,
    target_time: f64,
) -> MathResult<f64> {
    if source_value <= 0.0 || destination_value <= 0.0 {
        return Err(MathError::domain(format!(
            "log interpolation needs positive values, got {source_value} and {destination_value}"
        )));
    }
    let ratio = time_ratio(source_time, destination_time, target_time)?;
    let log_value = source_value.ln() + (destination_value.ln() - source_value.ln()) * ratio;
    Ok(log_value.exp())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_time_ratio() {
        assert_relative_eq!(time_ratio(90.0, 120.0, 110.0).unwrap(), 2.0 / 3.0);
        assert!(time_ratio(90.0, 90.0, 95.0).is_err());
    }

    #[test]
    fn test_linear_between_tenors() {
        let rate = linear_interpolation(5.1, 5.5, 92.0, 153.0, 112.0).unwrap();
        assert_relative_eq!(rate, 5.2311, epsilon = 5e-5);
    }

    #[test]
    fn test_linear_extrapolates() {
        let rate = linear_interpolation(5.1, 5.5, 92.0, 153.0, 163.0).unwrap();
        assert_relative_eq!(rate, 5.5656, epsilon = 5e-5);
    }

    #[test]
    fn test_log_between_tenors() {
        let rate = log_interpolation(5.1, 5.5, 92.0, 153.0, 112.0).unwrap();
        assert_relative_eq!(rate, 5.2278, epsilon = 5e-5);
    }

    #[test]
    fn test_log_rejects_non_positive() {
        assert!(matches!(
            log_interpolation(0.0, 5.5, 92.0, 153.0, 112.0),
            Err(MathError::Domain { .. })
        ));
    }

    #[test]
    fn test_endpoints() {
        assert_relative_eq!(linear_interpolation(1.0, 3.0, 0.0, 2.0, 0.0).unwrap(), 1.0);
        assert_relative_eq!(log_interpolation(1.0, 3.0, 0.0, 2.0, 2.0).unwrap(), 3.0, epsilon = 1e-12);
    }
}

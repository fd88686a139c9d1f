//! Accuracy metrics for scoring in-sample projections.

use crate::error::{ForecastError, Result};

/// Accuracy of a set of projections against the observed values.
#[derive(Debug, Clone, PartialEq)]
pub struct AccuracyMetrics {
    /// Mean Absolute Error
    pub mae: f64,
    /// Mean Squared Error
    pub mse: f64,
    /// Root Mean Squared Error
    pub rmse: f64,
    /// Mean Absolute Percentage Error (None if zeros in actual)
    pub mape: Option<f64>,
    /// Symmetric Mean Absolute Percentage Error
    pub smape: f64,
    /// Mean Absolute Scaled Error (None if the naive baseline is degenerate)
    pub mase: Option<f64>,
    /// R-squared (coefficient of determination)
    pub r_squared: f64,
}

/// Calculate accuracy metrics between actual and predicted values.
///
/// # Arguments
/// * `actual` - Observed values
/// * `predicted` - Projections aligned with `actual`
/// * `seasonal_period` - Lag of the naive baseline used by MASE (default 1)
pub fn calculate_metrics(
    actual: &[f64],
    predicted: &[f64],
    seasonal_period: Option<usize>,
) -> Result<AccuracyMetrics> {
    if actual.is_empty() || predicted.is_empty() {
        return Err(ForecastError::EmptyData);
    }

    if actual.len() != predicted.len() {
        return Err(ForecastError::DimensionMismatch {
            expected: actual.len(),
            got: predicted.len(),
        });
    }

    let n = actual.len() as f64;
    let errors: Vec<f64> = actual
        .iter()
        .zip(predicted)
        .map(|(a, p)| a - p)
        .collect();

    let mae = errors.iter().map(|e| e.abs()).sum::<f64>() / n;
    let sse: f64 = errors.iter().map(|e| e * e).sum();
    let mse = sse / n;

    let mape = if actual.contains(&0.0) {
        None
    } else {
        let sum: f64 = errors.iter().zip(actual).map(|(e, a)| (e / a).abs()).sum();
        Some(100.0 * sum / n)
    };

    let mean_actual = actual.iter().sum::<f64>() / n;
    let ss_tot: f64 = actual.iter().map(|a| (a - mean_actual).powi(2)).sum();
    let r_squared = if ss_tot == 0.0 { 1.0 } else { 1.0 - sse / ss_tot };

    Ok(AccuracyMetrics {
        mae,
        mse,
        rmse: mse.sqrt(),
        mape,
        smape: smape(actual, predicted),
        mase: mase(actual, mae, seasonal_period.unwrap_or(1)),
        r_squared,
    })
}

/// MASE = MAE / MAE of the lag-`period` naive forecast.
fn mase(actual: &[f64], mae: f64, period: usize) -> Option<f64> {
    let n = actual.len();
    if period == 0 || n <= period {
        return None;
    }

    let naive_mae = actual
        .iter()
        .skip(period)
        .zip(actual)
        .map(|(curr, prev)| (curr - prev).abs())
        .sum::<f64>()
        / (n - period) as f64;

    if naive_mae == 0.0 {
        None
    } else {
        Some(mae / naive_mae)
    }
}

/// Calculate SMAPE between two slices.
pub fn smape(actual: &[f64], predicted: &[f64]) -> f64 {
    if actual.len() != predicted.len() || actual.is_empty() {
        return f64::NAN;
    }
    let n = actual.len() as f64;
    actual
        .iter()
        .zip(predicted)
        .map(|(a, p)| {
            let denom = a.abs() + p.abs();
            if denom == 0.0 {
                0.0
            } else {
                2.0 * (a - p).abs() / denom
            }
        })
        .sum::<f64>()
        * 100.0
        / n
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn perfect_prediction() {
        let actual = vec![1.0, 2.0, 3.0, 4.0, 5.0];

        let metrics = calculate_metrics(&actual, &actual, None).unwrap();

        assert_relative_eq!(metrics.mae, 0.0, epsilon = 1e-10);
        assert_relative_eq!(metrics.rmse, 0.0, epsilon = 1e-10);
        assert_relative_eq!(metrics.smape, 0.0, epsilon = 1e-10);
        assert_relative_eq!(metrics.r_squared, 1.0, epsilon = 1e-10);
        assert_eq!(metrics.mape, Some(0.0));
    }

    #[test]
    fn known_values() {
        let actual = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let predicted = vec![1.5, 2.5, 2.5, 4.5, 4.5];

        let metrics = calculate_metrics(&actual, &predicted, None).unwrap();

        assert_relative_eq!(metrics.mae, 0.5, epsilon = 1e-10);
        assert_relative_eq!(metrics.mse, 0.25, epsilon = 1e-10);
        assert_relative_eq!(metrics.rmse, 0.5, epsilon = 1e-10);
        // Naive lag-1 MAE is 1.0.
        assert_relative_eq!(metrics.mase.unwrap(), 0.5, epsilon = 1e-10);
    }

    #[test]
    fn mape_undefined_with_zeros() {
        let actual = vec![0.0, 1.0, 2.0];
        let predicted = vec![0.1, 1.1, 2.1];

        let metrics = calculate_metrics(&actual, &predicted, None).unwrap();

        assert!(metrics.mape.is_none());
        assert!(metrics.smape.is_finite());
    }

    #[test]
    fn dimension_mismatch() {
        let result = calculate_metrics(&[1.0, 2.0, 3.0], &[1.0, 2.0], None);
        assert_eq!(
            result,
            Err(ForecastError::DimensionMismatch {
                expected: 3,
                got: 2
            })
        );
    }

    #[test]
    fn empty_data() {
        let result = calculate_metrics(&[], &[], None);
        assert_eq!(result, Err(ForecastError::EmptyData));
    }

    #[test]
    fn mase_with_seasonal_period() {
        let actual = vec![1.0, 2.0, 3.0, 4.0, 1.5, 2.5, 3.5, 4.5];
        let predicted = vec![1.1, 2.1, 3.1, 4.1, 1.6, 2.6, 3.6, 4.6];

        let metrics = calculate_metrics(&actual, &predicted, Some(4)).unwrap();

        // Seasonal naive MAE is 0.5, forecast MAE is 0.1.
        assert_relative_eq!(metrics.mase.unwrap(), 0.2, epsilon = 1e-10);
    }

    #[test]
    fn mase_undefined_for_short_series() {
        let metrics = calculate_metrics(&[1.0, 2.0], &[1.0, 2.5], Some(4)).unwrap();
        assert!(metrics.mase.is_none());
    }

    #[test]
    fn r_squared_negative_for_poor_fit() {
        let actual = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let predicted = vec![5.0, 4.0, 3.0, 2.0, 1.0];

        let metrics = calculate_metrics(&actual, &predicted, None).unwrap();

        assert!(metrics.r_squared < 0.0);
    }

    #[test]
    fn standalone_smape() {
        assert_relative_eq!(smape(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]), 0.0);
        assert!(smape(&[1.0], &[]).is_nan());
    }
}

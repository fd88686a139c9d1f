//! # winters-forecast
//!
//! Seasonal time series forecasting with multiplicative Holt-Winters
//! (triple exponential smoothing).
//!
//! Given a history with a known seasonal period, the model estimates level,
//! trend, and seasonal indices and projects them forward. The output is
//! aligned with the input: entry `k` is the projection for time `k`, the
//! first `m + 2` entries are zero placeholders, and the last `m` entries
//! lie past the end of the history.
//!
//! ```
//! use winters_forecast::{forecast, forecast_with};
//!
//! let data = [10.0, 20.0, 30.0, 40.0, 12.0, 22.0, 32.0, 42.0];
//!
//! let values = forecast(4, &data).unwrap();
//! assert_eq!(values.len(), data.len() + 4);
//! assert!(values[..6].iter().all(|&v| v == 0.0));
//!
//! // alpha outside [0, 1]
//! assert!(forecast_with(1.5, 0.4, 0.6, 2, 4, &data).is_none());
//! ```
//!
//! For error details, zero-division handling, or access to the smoothed
//! state, use [`models::HoltWinters`] with a
//! [`HoltWintersConfig`](crate::core::HoltWintersConfig).

pub mod core;
pub mod error;
pub mod models;
pub mod utils;

pub use error::{ForecastError, Result};

use crate::core::{Forecast, HoltWintersConfig};
use crate::models::HoltWinters;

/// Forecast with explicit smoothing weights.
///
/// `alpha` smooths the level, `beta` the seasonal indices, and `gamma` the
/// trend; `m` is the horizon (`1..=period`). Returns `None` for invalid
/// parameters or empty `data`, otherwise `data.len() + m` values.
pub fn forecast_with(
    alpha: f64,
    beta: f64,
    gamma: f64,
    m: usize,
    period: usize,
    data: &[f64],
) -> Option<Vec<f64>> {
    let config = HoltWintersConfig::with_period(period)
        .with_alpha(alpha)
        .with_beta(beta)
        .with_gamma(gamma)
        .with_horizon(m);

    HoltWinters::new(config)
        .and_then(|model| model.forecast(data))
        .map(Forecast::into_values)
        .ok()
}

/// Forecast with the default weights (0.5, 0.4, 0.6) one period ahead.
pub fn forecast(period: usize, data: &[f64]) -> Option<Vec<f64>> {
    let defaults = HoltWintersConfig::default();
    forecast_with(
        defaults.alpha,
        defaults.beta,
        defaults.gamma,
        period,
        period,
        data,
    )
}

pub mod prelude {
    pub use crate::core::{is_valid_params, Forecast, HoltWintersConfig, ZeroDivisionPolicy};
    pub use crate::error::{ForecastError, Result};
    pub use crate::models::HoltWinters;
    pub use crate::utils::{calculate_metrics, AccuracyMetrics};
    pub use crate::{forecast, forecast_with};
}

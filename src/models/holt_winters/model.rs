//! Holt-Winters model: validation, initialization, smoothing, and assembly.

use super::init::{initial_trend, seasonal_indices_with, seasons};
use super::smoother::{run, SmoothingOutput, SmoothingState};
use crate::core::{Forecast, HoltWintersConfig};
use crate::error::{ForecastError, Result};
use tracing::debug;

/// Multiplicative Holt-Winters forecaster with fixed smoothing weights.
///
/// Seasonal indices are estimated by classical decomposition over the whole
/// series and the starting trend from the first two cycles. The recursion
/// then walks the series from the third observation, projecting `horizon`
/// steps ahead at every step.
#[derive(Debug, Clone, PartialEq)]
pub struct HoltWinters {
    config: HoltWintersConfig,
}

impl HoltWinters {
    /// Create a model, rejecting invalid configurations.
    pub fn new(config: HoltWintersConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Model with default weights projecting one full period ahead.
    pub fn with_period(period: usize) -> Result<Self> {
        Self::new(HoltWintersConfig::with_period(period))
    }

    /// Get the configuration.
    pub fn config(&self) -> &HoltWintersConfig {
        &self.config
    }

    /// Get the seasonal period.
    pub fn period(&self) -> usize {
        self.config.period
    }

    /// Get the forecast horizon.
    pub fn horizon(&self) -> usize {
        self.config.horizon
    }

    /// Run the smoothing recursion and return its raw output.
    pub fn smooth(&self, data: &[f64]) -> Result<SmoothingOutput> {
        let first = *data.first().ok_or(ForecastError::EmptyData)?;
        let period = self.config.period;
        let cycles = seasons(data.len(), period);

        debug!(
            period,
            horizon = self.config.horizon,
            data_length = data.len(),
            seasons = cycles,
            "Holt-Winters smoothing"
        );

        let indices = seasonal_indices_with(self.config.zero_division, period, cycles, data)?;
        let trend = initial_trend(period, data);
        let output = run(&self.config, SmoothingState::seed(first, trend, indices), data)?;

        debug!(
            level = output.level,
            trend = output.trend,
            seasonals = output.seasonals.len(),
            steps = output.forecasts.len(),
            "Holt-Winters smoothing complete"
        );

        Ok(output)
    }

    /// Forecast aligned with `data`, of length `data.len() + horizon`.
    pub fn forecast(&self, data: &[f64]) -> Result<Forecast> {
        let output = self.smooth(data)?;
        Ok(Forecast::assemble(
            &output.forecasts,
            self.config.horizon,
            data.len(),
        ))
    }

    /// Get the model name.
    pub fn name(&self) -> &str {
        "HoltWinters(multiplicative)"
    }
}

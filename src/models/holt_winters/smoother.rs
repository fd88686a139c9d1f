//! Multiplicative smoothing recursion.
//!
//! ```text
//! Level:    l_t = α y_t / s_{t-p} + (1-α)(l_{t-1} + b_{t-1})
//! Trend:    b_t = γ (l_t - l_{t-1}) + (1-γ) b_{t-1}
//! Seasonal: s_t = β y_t / l_t + (1-β) s_{t-p}
//! Forecast: ŷ_{t+m} = (l_t + m b_t) s_{t-p+m}
//! ```
//!
//! During the first cycle (`t < p`) there is no seasonal index to divide
//! by, so the level is updated additively and no index is appended.

use crate::core::HoltWintersConfig;
use crate::error::Result;

/// First observation index the recursion consumes.
pub const FIRST_STEP: usize = 2;

/// State carried from one step to the next.
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothingState {
    /// Smoothed level after the last processed observation.
    pub level: f64,
    /// Smoothed trend after the last processed observation.
    pub trend: f64,
    /// Seed indices followed by one appended index per seasonal step.
    pub seasonals: Vec<f64>,
    /// Index of the next observation to consume.
    pub index: usize,
}

impl SmoothingState {
    /// Seed state: level from the first observation, given trend and indices.
    pub fn seed(first: f64, trend: f64, seasonals: Vec<f64>) -> Self {
        Self {
            level: first,
            trend,
            seasonals,
            index: FIRST_STEP,
        }
    }

    /// Seasonal index at an absolute position, zero when out of range.
    fn seasonal_at(&self, position: Option<usize>) -> f64 {
        position
            .and_then(|p| self.seasonals.get(p))
            .copied()
            .unwrap_or(0.0)
    }

    /// Consume `value`, update the state, and return the projection.
    fn step(&mut self, value: f64, config: &HoltWintersConfig) -> Result<f64> {
        let HoltWintersConfig {
            alpha,
            beta,
            gamma,
            horizon,
            period,
            zero_division: policy,
        } = *config;

        let index = self.index;
        let lag = index.checked_sub(period);
        let past_seasonal = self.seasonal_at(lag);
        let carried = (1.0 - alpha) * (self.level + self.trend);

        let level = match lag {
            Some(_) => {
                policy.divide(alpha * value, past_seasonal, "level update", index)? + carried
            }
            None => alpha * value + carried,
        };
        let trend = gamma * (level - self.level) + (1.0 - gamma) * self.trend;

        if lag.is_some() {
            let ratio = policy.divide(beta * value, level, "seasonal update", index)?;
            self.seasonals.push(ratio + (1.0 - beta) * past_seasonal);
        }

        let future_seasonal = self.seasonal_at((index + horizon).checked_sub(period));

        self.level = level;
        self.trend = trend;
        self.index += 1;

        Ok((level + horizon as f64 * trend) * future_seasonal)
    }
}

/// Result of running the recursion over a series.
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothingOutput {
    /// One projection per consumed observation, oldest first.
    pub forecasts: Vec<f64>,
    /// Final level.
    pub level: f64,
    /// Final trend.
    pub trend: f64,
    /// Seed indices plus every index appended during the run.
    pub seasonals: Vec<f64>,
}

/// Run the recursion over `data[FIRST_STEP..]` starting from `state`.
///
/// `config` is assumed to be validated.
pub fn run(
    config: &HoltWintersConfig,
    mut state: SmoothingState,
    data: &[f64],
) -> Result<SmoothingOutput> {
    let steps = data.len().saturating_sub(state.index);
    let mut forecasts = Vec::with_capacity(steps);

    while let Some(&value) = data.get(state.index) {
        forecasts.push(state.step(value, config)?);
    }

    Ok(SmoothingOutput {
        forecasts,
        level: state.level,
        trend: state.trend,
        seasonals: state.seasonals,
    })
}

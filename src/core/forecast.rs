//! Forecast result aligned with the input series.

use crate::error::Result;
use crate::utils::metrics::{calculate_metrics, AccuracyMetrics};

/// A forecast aligned index-for-index with the observations it came from.
///
/// Entry `k` holds the projection for time `k`. The first `horizon + 2`
/// entries carry no projection and are zero; the final `horizon` entries
/// lie past the end of the observed series.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Forecast {
    values: Vec<f64>,
    horizon: usize,
    observed: usize,
}

impl Forecast {
    /// Assemble a forecast from the chronologically ordered step projections.
    ///
    /// Prepends `horizon + 2` zeros and clips the result to
    /// `observed + horizon` entries.
    pub(crate) fn assemble(projections: &[f64], horizon: usize, observed: usize) -> Self {
        let len = observed + horizon;
        let mut values = Vec::with_capacity(len.max(horizon + 2));
        values.resize(horizon + 2, 0.0);
        values.extend_from_slice(projections);
        values.truncate(len);

        Self {
            values,
            horizon,
            observed,
        }
    }

    /// Number of entries (`observed + horizon`).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if forecast is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Steps ahead each projection looks.
    pub fn horizon(&self) -> usize {
        self.horizon
    }

    /// Length of the series the forecast was built from.
    pub fn observed(&self) -> usize {
        self.observed
    }

    /// All aligned values, padding included.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// The leading zero placeholders.
    pub fn padding(&self) -> &[f64] {
        &self.values[..self.padding_len()]
    }

    /// In-sample projections, aligned with `data[padding_len..observed]`.
    pub fn fitted(&self) -> &[f64] {
        let start = self.padding_len();
        let end = self.observed.clamp(start, self.values.len());
        &self.values[start..end]
    }

    /// Projections past the last observation.
    pub fn ahead(&self) -> &[f64] {
        let start = self.observed.clamp(self.padding_len(), self.values.len());
        &self.values[start..]
    }

    /// Score the in-sample projections against the observations.
    pub fn accuracy(&self, data: &[f64]) -> Result<AccuracyMetrics> {
        let start = self.padding_len().min(data.len());
        let actual = &data[start..];
        calculate_metrics(actual, self.fitted(), None)
    }

    /// Consume the forecast, returning the aligned values.
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    fn padding_len(&self) -> usize {
        (self.horizon + 2).min(self.values.len())
    }
}

impl From<Forecast> for Vec<f64> {
    fn from(forecast: Forecast) -> Self {
        forecast.into_values()
    }
}

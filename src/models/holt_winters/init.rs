//! Initial state estimation: seasonal indices and starting trend.

use crate::core::ZeroDivisionPolicy;
use crate::error::Result;
use crate::utils::chunks::{average_per_chunk, chunk, detrend, transpose};
use tracing::debug;

/// Estimated number of complete cycles in `n` observations.
///
/// `round(n / period)` with ties rounding up. Zero when `period` is zero.
pub fn seasons(n: usize, period: usize) -> usize {
    if period == 0 {
        return 0;
    }
    (n as f64 / period as f64).round() as usize
}

/// Starting trend from the first two cycles.
///
/// Averages `data[i + period] - data[i]` over one cycle and divides by
/// `period` once more. Differences whose later point lies past the end of
/// `data` count as zero, so short series yield a damped estimate.
pub fn initial_trend(period: usize, data: &[f64]) -> f64 {
    if period == 0 {
        return 0.0;
    }

    let available = data.len().saturating_sub(period).min(period);
    if available < period {
        debug!(
            period,
            data_length = data.len(),
            available,
            "series shorter than two cycles, missing trend terms count as zero"
        );
    }

    let sum: f64 = (0..available).map(|i| data[i + period] - data[i]).sum();
    sum / (period * period) as f64
}

/// One multiplicative seasonal index per position in the cycle.
///
/// Uses [`ZeroDivisionPolicy::Zero`] for zero cycle averages or a zero
/// season count; see [`seasonal_indices_with`] to choose another policy.
pub fn seasonal_indices(period: usize, seasons: usize, data: &[f64]) -> Result<Vec<f64>> {
    seasonal_indices_with(ZeroDivisionPolicy::Zero, period, seasons, data)
}

/// Seasonal indices with an explicit zero-division policy.
///
/// Each cycle is divided by its own average (nominal-`period` divisor),
/// the ratios are grouped by in-cycle position, and every group is summed
/// and divided by `seasons`. Positions absent from a series shorter than
/// one cycle get an empty group. Always returns `period` entries.
pub fn seasonal_indices_with(
    policy: ZeroDivisionPolicy,
    period: usize,
    seasons: usize,
    data: &[f64],
) -> Result<Vec<f64>> {
    let averages = average_per_chunk(period, &chunk(period, data));
    let ratios = detrend(period, data, &averages, |value, avg, i| {
        policy.divide(value, avg, "cycle detrending", i)
    })?;

    let mut columns = transpose(&chunk(period, &ratios));
    columns.resize(period, Vec::new());

    columns
        .iter()
        .enumerate()
        .map(|(pos, group)| {
            policy.divide(group.iter().sum(), seasons as f64, "seasonal averaging", pos)
        })
        .collect()
}

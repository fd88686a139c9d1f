//! Chunking and averaging helpers for seasonal decomposition.
//!
//! These mirror the classical decomposition steps: split the series into
//! cycles, average each cycle, divide the trend out, and regroup values by
//! their position within the cycle.

/// Split `series` into consecutive chunks of `size` elements.
///
/// The final chunk is shorter when `series.len()` is not a multiple of
/// `size`. Returns no chunks when `size` is zero.
pub fn chunk(size: usize, series: &[f64]) -> Vec<&[f64]> {
    if size == 0 {
        return Vec::new();
    }
    series.chunks(size).collect()
}

/// Average each chunk, always dividing by the nominal `size`.
///
/// A short trailing chunk is still divided by `size`, not by its own length.
pub fn average_per_chunk<C: AsRef<[f64]>>(size: usize, chunks: &[C]) -> Vec<f64> {
    chunks
        .iter()
        .map(|c| c.as_ref().iter().sum::<f64>() / size as f64)
        .collect()
}

/// Divide each observation by the average of the chunk it belongs to.
///
/// `divide` receives `(value, average, index)` so callers decide how a zero
/// average is handled. Each average covers `period` consecutive values;
/// values past the last average are dropped.
pub fn detrend<F, E>(
    period: usize,
    data: &[f64],
    averages: &[f64],
    mut divide: F,
) -> Result<Vec<f64>, E>
where
    F: FnMut(f64, f64, usize) -> Result<f64, E>,
{
    averages
        .iter()
        .flat_map(|&avg| std::iter::repeat(avg).take(period))
        .zip(data.iter())
        .enumerate()
        .map(|(i, (avg, &value))| divide(value, avg, i))
        .collect()
}

/// Group values by column: element `i` of every row that has one.
///
/// Rows may be ragged; a short row simply contributes nothing to the
/// columns it lacks. This is how a short trailing cycle is grouped.
pub fn transpose<R: AsRef<[f64]>>(rows: &[R]) -> Vec<Vec<f64>> {
    let width = rows.iter().map(|r| r.as_ref().len()).max().unwrap_or(0);

    (0..width)
        .map(|col| {
            rows.iter()
                .filter_map(|r| r.as_ref().get(col).copied())
                .collect()
        })
        .collect()
}

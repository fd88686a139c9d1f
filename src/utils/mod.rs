//! Utility functions shared by the smoothing models.

pub mod chunks;
pub mod metrics;

pub use chunks::{average_per_chunk, chunk, detrend, transpose};
pub use metrics::{calculate_metrics, smape, AccuracyMetrics};

//! Multiplicative Holt-Winters (triple exponential smoothing).
//!
//! Weights bind as `alpha` → level, `beta` → seasonal index, `gamma` →
//! trend. Initialization uses classical decomposition over the whole series
//! rather than the first cycle alone.

mod init;
mod model;
mod smoother;

pub use init::{initial_trend, seasonal_indices, seasonal_indices_with, seasons};
pub use model::HoltWinters;
pub use smoother::{SmoothingOutput, SmoothingState, FIRST_STEP};

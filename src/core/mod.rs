//! Core configuration and result types.

mod config;
mod forecast;

pub use config::{is_valid_params, HoltWintersConfig, ZeroDivisionPolicy};
pub use forecast::Forecast;

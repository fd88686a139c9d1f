//! Smoothing configuration and parameter validation.

use crate::error::{ForecastError, Result};
use tracing::warn;

/// What to do when a smoothing formula divides by exactly zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZeroDivisionPolicy {
    /// Abort with [`ForecastError::DivisionByZero`].
    Fail,
    /// Take the quotient as `0.0`.
    #[default]
    Zero,
    /// Plain IEEE-754 division (may produce infinities or NaN).
    Propagate,
}

impl ZeroDivisionPolicy {
    /// Divide `numerator` by `denominator` under this policy.
    ///
    /// `stage` and `index` identify the site for errors and log events.
    pub fn divide(
        self,
        numerator: f64,
        denominator: f64,
        stage: &'static str,
        index: usize,
    ) -> Result<f64> {
        if denominator != 0.0 {
            return Ok(numerator / denominator);
        }

        match self {
            ZeroDivisionPolicy::Fail => Err(ForecastError::DivisionByZero { stage, index }),
            ZeroDivisionPolicy::Zero => {
                warn!(stage, index, "zero divisor, quotient taken as 0");
                Ok(0.0)
            }
            ZeroDivisionPolicy::Propagate => {
                warn!(stage, index, "zero divisor, propagating non-finite value");
                Ok(numerator / denominator)
            }
        }
    }
}

/// Returns `true` when the smoothing parameters are acceptable.
///
/// Rejects `m == 0`, `m > period`, and any weight outside `[0, 1]`
/// (NaN included).
pub fn is_valid_params(alpha: f64, beta: f64, gamma: f64, m: usize, period: usize) -> bool {
    let unit = 0.0..=1.0;
    m > 0 && m <= period && unit.contains(&alpha) && unit.contains(&beta) && unit.contains(&gamma)
}

/// Configuration for the Holt-Winters model.
///
/// Weight naming follows the level/seasonal/trend binding:
/// `alpha` smooths the level, `beta` the seasonal indices and
/// `gamma` the trend.
#[derive(Debug, Clone, PartialEq)]
pub struct HoltWintersConfig {
    /// Level smoothing weight in `[0, 1]`.
    pub alpha: f64,
    /// Seasonal smoothing weight in `[0, 1]`.
    pub beta: f64,
    /// Trend smoothing weight in `[0, 1]`.
    pub gamma: f64,
    /// Steps ahead projected at each step, `1..=period`.
    pub horizon: usize,
    /// Observations per seasonal cycle.
    pub period: usize,
    /// Handling of zero divisors.
    pub zero_division: ZeroDivisionPolicy,
}

impl Default for HoltWintersConfig {
    fn default() -> Self {
        Self {
            alpha: 0.5,
            beta: 0.4,
            gamma: 0.6,
            horizon: 12,
            period: 12,
            zero_division: ZeroDivisionPolicy::Zero,
        }
    }
}

impl HoltWintersConfig {
    /// Default weights with the horizon set to one full period.
    pub fn with_period(period: usize) -> Self {
        Self {
            horizon: period,
            period,
            ..Default::default()
        }
    }

    /// Set the level smoothing weight.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Set the seasonal smoothing weight.
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Set the trend smoothing weight.
    pub fn with_gamma(mut self, gamma: f64) -> Self {
        self.gamma = gamma;
        self
    }

    /// Set the forecast horizon.
    pub fn with_horizon(mut self, horizon: usize) -> Self {
        self.horizon = horizon;
        self
    }

    /// Set the zero-division policy.
    pub fn with_zero_division(mut self, policy: ZeroDivisionPolicy) -> Self {
        self.zero_division = policy;
        self
    }

    /// Check the configuration, naming the first offending parameter.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("alpha", self.alpha),
            ("beta", self.beta),
            ("gamma", self.gamma),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ForecastError::InvalidParameter(format!(
                    "{name} must lie in [0, 1], got {value}"
                )));
            }
        }

        if self.horizon == 0 {
            return Err(ForecastError::InvalidParameter(
                "horizon must be positive".to_string(),
            ));
        }

        if self.horizon > self.period {
            return Err(ForecastError::InvalidParameter(format!(
                "horizon {} exceeds period {}",
                self.horizon, self.period
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_boundary_weights() {
        assert!(is_valid_params(0.0, 0.0, 0.0, 1, 1));
        assert!(is_valid_params(1.0, 1.0, 1.0, 4, 4));
        assert!(is_valid_params(0.5, 0.4, 0.6, 2, 4));
    }

    #[test]
    fn rejects_out_of_range_weights() {
        assert!(!is_valid_params(1.5, 0.4, 0.6, 2, 4));
        assert!(!is_valid_params(0.5, -0.1, 0.6, 2, 4));
        assert!(!is_valid_params(0.5, 0.4, 1.01, 2, 4));
        assert!(!is_valid_params(f64::NAN, 0.4, 0.6, 2, 4));
    }

    #[test]
    fn rejects_bad_horizon() {
        assert!(!is_valid_params(0.5, 0.4, 0.6, 0, 4));
        assert!(!is_valid_params(0.5, 0.4, 0.6, 5, 4));
        assert!(!is_valid_params(0.5, 0.4, 0.6, 1, 0));
    }

    #[test]
    fn validate_names_offending_parameter() {
        let config = HoltWintersConfig::with_period(4).with_gamma(2.0);
        match config.validate() {
            Err(ForecastError::InvalidParameter(msg)) => assert!(msg.starts_with("gamma")),
            other => panic!("unexpected result: {other:?}"),
        }

        let config = HoltWintersConfig::with_period(4).with_horizon(5);
        assert!(matches!(
            config.validate(),
            Err(ForecastError::InvalidParameter(_))
        ));
    }

    #[test]
    fn validate_agrees_with_predicate() {
        let cases = [
            (0.5, 0.4, 0.6, 4, 4),
            (1.5, 0.4, 0.6, 2, 4),
            (0.5, 0.4, 0.6, 0, 4),
            (0.5, 0.4, 0.6, 5, 4),
            (0.0, 1.0, 0.0, 1, 3),
        ];
        for (alpha, beta, gamma, m, period) in cases {
            let config = HoltWintersConfig::with_period(period)
                .with_alpha(alpha)
                .with_beta(beta)
                .with_gamma(gamma)
                .with_horizon(m);
            assert_eq!(
                config.validate().is_ok(),
                is_valid_params(alpha, beta, gamma, m, period)
            );
        }
    }

    #[test]
    fn with_period_uses_full_cycle_horizon() {
        let config = HoltWintersConfig::with_period(7);
        assert_eq!(config.period, 7);
        assert_eq!(config.horizon, 7);
        assert_eq!(config.alpha, 0.5);
        assert_eq!(config.beta, 0.4);
        assert_eq!(config.gamma, 0.6);
        assert_eq!(config.zero_division, ZeroDivisionPolicy::Zero);
    }

    #[test]
    fn divide_policies() {
        assert_eq!(ZeroDivisionPolicy::Fail.divide(6.0, 3.0, "t", 0), Ok(2.0));
        assert_eq!(
            ZeroDivisionPolicy::Fail.divide(1.0, 0.0, "level update", 3),
            Err(ForecastError::DivisionByZero {
                stage: "level update",
                index: 3
            })
        );
        assert_eq!(ZeroDivisionPolicy::Zero.divide(1.0, 0.0, "t", 0), Ok(0.0));
        let inf = ZeroDivisionPolicy::Propagate.divide(1.0, 0.0, "t", 0).unwrap();
        assert!(inf.is_infinite());
    }
}

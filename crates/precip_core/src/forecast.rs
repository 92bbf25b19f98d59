use crate::error::ConfigError;
use crate::models::{ModelKind, PrecipitationModel};
use crate::solvers::HeunPC;
use crate::traits::Steppable;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The immutable inputs for one forecast run.
///
/// `steps` counts samples including the initial one, so `steps == 1` yields
/// the initial state with no stepping performed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastConfig {
    pub initial: f64,
    pub steps: usize,
    pub dt: f64,
    pub temperature: f64,
    pub humidity: f64,
    pub model: ModelKind,
}

impl ForecastConfig {
    /// Checks the boundary invariants: `steps >= 1` and `dt` finite and
    /// strictly positive. The zero-dt degenerate case is tolerated by the
    /// bare integration loop but rejected here.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.steps < 1 {
            return Err(ConfigError::InvalidStepCount { steps: self.steps });
        }
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(ConfigError::InvalidStepSize { dt: self.dt });
        }
        Ok(())
    }
}

/// A completed forecast: the ordered state sequence plus the time base it
/// was sampled on. `values()[i]` is the state at time `i * dt`. Produced
/// whole by one integration run and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSeries {
    dt: f64,
    values: Vec<f64>,
}

impl ForecastSeries {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn final_value(&self) -> Option<f64> {
        self.values.last().copied()
    }

    /// The time associated with each sample, `i * dt`.
    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.values.len()).map(move |i| i as f64 * self.dt)
    }

    /// Iterates over `(time, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.times().zip(self.values.iter().copied())
    }
}

/// Validates the configuration, then runs the integration loop.
///
/// This is the boundary entry point: a rejected configuration returns the
/// error without any stepping having taken place.
pub fn run_forecast(config: &ForecastConfig) -> Result<ForecastSeries, ConfigError> {
    config.validate()?;
    debug!(
        steps = config.steps,
        dt = config.dt,
        model = %config.model,
        "running forecast"
    );
    Ok(integrate(config))
}

/// The bare integration loop: advances the state with the Heun
/// predictor-corrector for `config.steps` samples.
///
/// Performs no validation and never fails; `dt == 0` degenerates to a
/// constant sequence and `steps == 0` yields an empty one. Each call is pure
/// given its configuration, so concurrent callers need no synchronization.
pub fn integrate(config: &ForecastConfig) -> ForecastSeries {
    if config.steps == 0 {
        return ForecastSeries {
            dt: config.dt,
            values: Vec::new(),
        };
    }

    let model = PrecipitationModel::new(config.model, config.temperature, config.humidity);
    let stepper = HeunPC;

    let mut values = Vec::with_capacity(config.steps);
    values.push(config.initial);
    for i in 1..config.steps {
        let t_prev = (i - 1) as f64 * config.dt;
        let next = stepper.step(&model, t_prev, values[i - 1], config.dt);
        values.push(next);
    }

    ForecastSeries {
        dt: config.dt,
        values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ForecastConfig {
        ForecastConfig {
            initial: 10.0,
            steps: 3,
            dt: 1.0,
            temperature: 20.0,
            humidity: 50.0,
            model: ModelKind::Model1,
        }
    }

    #[test]
    fn single_step_returns_initial_exactly() {
        let series = run_forecast(&ForecastConfig {
            steps: 1,
            ..config()
        })
        .expect("config should validate");
        assert_eq!(series.values(), &[10.0]);
    }

    #[test]
    fn length_matches_step_count() {
        for steps in [1, 2, 17, 100] {
            let series = run_forecast(&ForecastConfig { steps, ..config() })
                .expect("config should validate");
            assert_eq!(series.len(), steps);
        }
    }

    #[test]
    fn repeated_runs_are_bit_identical() {
        let first = run_forecast(&config()).expect("config should validate");
        let second = run_forecast(&config()).expect("config should validate");
        assert_eq!(first, second);
    }

    #[test]
    fn model1_three_step_scenario() {
        // Hand-worked reference values, derived independently of the engine:
        // rate(10) = 0.9 + 1.0 + 1.5 = 3.4, predictor 13.4,
        // rate(13.4) = 1.34 * 0.866 + 2.5 = 3.66044,
        // corrected 10 + 0.5 * (3.4 + 3.66044) = 13.53022.
        // The next step lands on 17.3272833181739.
        let series = run_forecast(&config()).expect("config should validate");
        let values = series.values();

        assert_eq!(values.len(), 3);
        assert_eq!(values[0], 10.0);
        assert!((values[1] - 13.53022).abs() < 1e-9);
        assert!((values[2] - 17.3272833181739).abs() < 1e-9);
    }

    #[test]
    fn zero_dt_integration_is_constant() {
        // The bare loop tolerates dt == 0: the displacement term vanishes.
        let series = integrate(&ForecastConfig {
            steps: 5,
            dt: 0.0,
            ..config()
        });
        assert!(series.values().iter().all(|&v| v == 10.0));
    }

    #[test]
    fn times_follow_the_step_size() {
        let series = run_forecast(&ForecastConfig {
            steps: 4,
            dt: 0.5,
            ..config()
        })
        .expect("config should validate");
        let times: Vec<f64> = series.times().collect();
        assert_eq!(times, vec![0.0, 0.5, 1.0, 1.5]);
    }

    #[test]
    fn zero_steps_rejected_before_stepping() {
        let err = run_forecast(&ForecastConfig {
            steps: 0,
            ..config()
        })
        .expect_err("expected error");
        assert_eq!(err, ConfigError::InvalidStepCount { steps: 0 });
    }

    #[test]
    fn bad_step_sizes_rejected() {
        for dt in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = run_forecast(&ForecastConfig { dt, ..config() })
                .expect_err("expected error");
            assert!(matches!(err, ConfigError::InvalidStepSize { .. }));
        }
    }

    #[test]
    fn step_size_error_names_the_value() {
        let err = ForecastConfig { dt: -2.0, ..config() }
            .validate()
            .expect_err("expected error");
        let message = format!("{err}");
        assert!(
            message.contains("-2"),
            "expected error to contain \"-2\", got \"{message}\""
        );
    }
}

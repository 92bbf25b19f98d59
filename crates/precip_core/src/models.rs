use crate::error::ConfigError;
use crate::traits::{RateModel, Scalar};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed family of synthetic precipitation rate formulas.
///
/// Adding a model is a code change, not a runtime registration. All current
/// formulas are time-invariant; `RateModel::rate` still receives `t` because
/// the predictor and corrector stages evaluate at distinct times and a future
/// model may depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelKind {
    /// Logistic growth saturating at 100, with ambient forcing
    /// `0.05 * temperature + 0.03 * humidity`.
    Model1,
    /// Logistic growth saturating at 150, with ambient forcing
    /// `0.07 * temperature + 0.02 * humidity`.
    Model2,
    /// Plain exponential growth `0.1 * state`, ignoring ambient conditions.
    Baseline,
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelKind::Model1 => write!(f, "Model 1"),
            ModelKind::Model2 => write!(f, "Model 2"),
            ModelKind::Baseline => write!(f, "Baseline"),
        }
    }
}

impl FromStr for ModelKind {
    type Err = ConfigError;

    /// Parses a model name, case-insensitively. Unknown names are rejected
    /// rather than silently mapped to `Baseline`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "model1" | "model 1" | "1" => Ok(ModelKind::Model1),
            "model2" | "model 2" | "2" => Ok(ModelKind::Model2),
            "baseline" | "default" => Ok(ModelKind::Baseline),
            _ => Err(ConfigError::UnknownModel {
                name: s.to_string(),
            }),
        }
    }
}

/// A rate model instance: a formula selection plus the ambient conditions
/// parameterizing it. Stateless and side-effect-free; two instances with the
/// same fields always evaluate identically.
#[derive(Debug, Clone, Copy)]
pub struct PrecipitationModel<T: Scalar> {
    pub kind: ModelKind,
    pub temperature: T,
    pub humidity: T,
}

impl<T: Scalar> PrecipitationModel<T> {
    pub fn new(kind: ModelKind, temperature: T, humidity: T) -> Self {
        Self {
            kind,
            temperature,
            humidity,
        }
    }
}

impl<T: Scalar> RateModel<T> for PrecipitationModel<T> {
    fn rate(&self, _t: T, state: T) -> T {
        let one = T::from_f64(1.0).unwrap();

        match self.kind {
            ModelKind::Model1 => {
                let growth = T::from_f64(0.1).unwrap();
                let capacity = T::from_f64(100.0).unwrap();
                let temp_coeff = T::from_f64(0.05).unwrap();
                let hum_coeff = T::from_f64(0.03).unwrap();

                growth * state * (one - state / capacity)
                    + temp_coeff * self.temperature
                    + hum_coeff * self.humidity
            }
            ModelKind::Model2 => {
                let growth = T::from_f64(0.2).unwrap();
                let capacity = T::from_f64(150.0).unwrap();
                let temp_coeff = T::from_f64(0.07).unwrap();
                let hum_coeff = T::from_f64(0.02).unwrap();

                growth * state * (one - state / capacity)
                    + temp_coeff * self.temperature
                    + hum_coeff * self.humidity
            }
            ModelKind::Baseline => T::from_f64(0.1).unwrap() * state,
        }
    }
}

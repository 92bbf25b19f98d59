//! The `precip_core` crate provides the numerical engine for the
//! precipitation forecaster. It is designed to be generic, supporting any
//! floating-point scalar type via `num-traits`.
//!
//! Key components:
//! - **Traits**: `Scalar` (numeric type abstraction), `RateModel` (rate
//!   functions), `Steppable` (steppers).
//! - **Models**: The closed family of synthetic precipitation rate formulas.
//! - **Solvers**: The fixed-step Heun predictor-corrector integrator.
//! - **Forecast**: Configuration, boundary validation, and the integration
//!   loop producing a complete state sequence.

pub mod error;
pub mod forecast;
pub mod models;
pub mod solvers;
pub mod traits;

pub use error::ConfigError;
pub use forecast::{integrate, run_forecast, ForecastConfig, ForecastSeries};
pub use models::{ModelKind, PrecipitationModel};

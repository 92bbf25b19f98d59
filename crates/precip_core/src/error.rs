use thiserror::Error;

/// Boundary validation errors.
///
/// These are detected before the stepper is ever invoked; a rejected
/// configuration produces no partial sequence. The bare integration loop
/// itself never fails for inputs it accepts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("step count must be at least 1, got {steps}")]
    InvalidStepCount { steps: usize },

    #[error("step size must be finite and positive, got {dt}")]
    InvalidStepSize { dt: f64 },

    #[error("unknown model '{name}' (expected model1, model2, or baseline)")]
    UnknownModel { name: String },
}

use crate::traits::{RateModel, Scalar, Steppable};

/// Heun-type predictor-corrector stepper.
///
/// Predicts the next state with an explicit Euler step, then corrects by
/// trapezoidal averaging of the rates at the current and predicted states.
/// Exactly two rate evaluations per step, self-starting, no history kept
/// beyond the state passed in.
pub struct HeunPC;

impl<T: Scalar> Steppable<T> for HeunPC {
    fn step(&self, model: &impl RateModel<T>, t: T, state: T, dt: T) -> T {
        let half = T::from_f64(0.5).unwrap();

        // rate at the current point
        let rate_prev = model.rate(t, state);

        // predictor: y_pred = y + dt * f(t, y)
        let predicted = state + dt * rate_prev;

        // corrector: y_next = y + dt/2 * (f(t, y) + f(t + dt, y_pred))
        let rate_pred = model.rate(t + dt, predicted);
        state + dt * half * (rate_prev + rate_pred)
    }
}

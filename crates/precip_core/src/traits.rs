use num_traits::{Float, FromPrimitive};
use std::fmt::Debug;

/// A trait for types that can be used as scalars in the forecast engine.
/// Must support basic arithmetic, debug printing, and conversion from f64.
pub trait Scalar: Float + FromPrimitive + Debug + 'static {}

impl<T: Float + FromPrimitive + Debug + 'static> Scalar for T {}

/// Represents an instantaneous rate of change of the forecast state.
pub trait RateModel<T: Scalar> {
    /// Evaluates d(state)/dt at time `t` for the given state.
    ///
    /// Implementations are pure and total over finite inputs; NaN and
    /// infinity propagate per IEEE-754 rather than being guarded against.
    fn rate(&self, t: T, state: T) -> T;
}

/// A trait for steppers that advance the state by one fixed increment.
pub trait Steppable<T: Scalar> {
    /// Performs one step of size dt, returning the state at `t + dt`.
    /// The time base itself is owned by the caller.
    fn step(&self, model: &impl RateModel<T>, t: T, state: T, dt: T) -> T;
}

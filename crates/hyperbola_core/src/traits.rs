use num_traits::{Float, FromPrimitive};
use std::fmt::Debug;

/// A trait for types that can be used as scalars in curve evaluation.
/// Must support basic arithmetic, debug printing, and conversion from f64.
pub trait Scalar: Float + FromPrimitive + Debug + 'static {}

impl<T: Float + FromPrimitive + Debug + 'static> Scalar for T {}

/// A planar curve parameterized by a single scalar t.
pub trait ParametricCurve<T: Scalar> {
    /// Evaluates the curve at parameter t, returning (x, y).
    fn eval(&self, t: T) -> (T, T);
}

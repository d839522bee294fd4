use num_traits::{Float, FromPrimitive};
use std::fmt::Debug;

/// A trait for types that can be used as scalars in finite-difference
/// computations. Must support floating-point arithmetic, debug printing,
/// and conversion from f64.
pub trait Scalar: Float + FromPrimitive + Debug + 'static {}

impl<T: Float + FromPrimitive + Debug + 'static> Scalar for T {}

/// A real-valued function of one real variable.
///
/// The engine only ever evaluates such a function at points of its choosing;
/// it never inspects or owns the function's internal state. Blanket
/// implemented for any closure or fn pointer with the right shape.
pub trait RealFunction<T: Scalar>: Fn(T) -> T {}

impl<T: Scalar, F: Fn(T) -> T> RealFunction<T> for F {}

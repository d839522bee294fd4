//! Finite-difference approximations of the first three derivatives of a
//! scalar real function at a point.
//!
//! All estimators are pure: deterministic given `f`, `x`, and `h`, with no
//! error path. If `f` is undefined or diverges near `x`, NaN or infinity
//! propagates to the result rather than being masked.

use crate::traits::{RealFunction, Scalar};

/// Central difference for the first derivative: `(f(x+h) - f(x-h)) / 2h`.
pub fn first_derivative<T: Scalar>(f: impl RealFunction<T>, x: T, h: T) -> T {
    let two = T::from_f64(2.0).unwrap();
    (f(x + h) - f(x - h)) / (two * h)
}

/// Central difference for the second derivative:
/// `(f(x+h) - 2f(x) + f(x-h)) / h²`.
pub fn second_derivative<T: Scalar>(f: impl RealFunction<T>, x: T, h: T) -> T {
    let two = T::from_f64(2.0).unwrap();
    (f(x + h) - two * f(x) + f(x - h)) / (h * h)
}

/// Central difference for the third derivative over a four-point stencil:
/// `(f(x+2h) - 2f(x+h) + 2f(x-h) - f(x-2h)) / 2h³`.
pub fn third_derivative<T: Scalar>(f: impl RealFunction<T>, x: T, h: T) -> T {
    let two = T::from_f64(2.0).unwrap();
    (f(x + two * h) - two * f(x + h) + two * f(x - h) - f(x - two * h)) / (two * h * h * h)
}

/// One-sided forward difference: `(f(x+h) - f(x)) / h`.
///
/// Only first-order accurate, but tolerates a much smaller step than the
/// central forms; the tangent-line slope estimate uses it with
/// [`crate::curve::TANGENT_STEP`].
pub fn forward_derivative<T: Scalar>(f: impl RealFunction<T>, x: T, h: T) -> T {
    (f(x + h) - f(x)) / h
}

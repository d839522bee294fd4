//! Tangent-line, curvature, and torsion calculators built on the
//! finite-difference estimators in [`crate::differentiate`].
//!
//! Each call site pins its own step size: the one-sided tangent slope uses a
//! much finer step than the central-difference curvature and torsion
//! formulas.

use serde::{Deserialize, Serialize};

use crate::differentiate::{
    first_derivative, forward_derivative, second_derivative, third_derivative,
};
use crate::traits::RealFunction;

/// Step for the one-sided tangent slope estimate.
pub const TANGENT_STEP: f64 = 1e-10;

/// Step for the central differences inside the curvature and torsion
/// formulas.
pub const CURVE_STEP: f64 = 1e-5;

/// The line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TangentLine {
    pub slope: f64,
    pub intercept: f64,
}

/// Tangent line to `f` at `x`.
pub fn tangent(f: impl RealFunction<f64>, x: f64) -> TangentLine {
    let slope = forward_derivative(&f, x, TANGENT_STEP);
    let intercept = f(x) - slope * x;
    TangentLine { slope, intercept }
}

/// Unsigned curvature of the plane curve `(x(t), y(t))` at parameter `t`.
///
/// Evaluates `|x'y'' - y'x''| / (x'² + y'²)^1.5` with central differences.
/// A stationary parametrization (both first derivatives zero) makes the
/// denominator vanish and the result NaN; curvature is undefined for a
/// degenerate tangent and the NaN is not masked.
pub fn curvature_2d(x: impl RealFunction<f64>, y: impl RealFunction<f64>, t: f64) -> f64 {
    let dx = first_derivative(&x, t, CURVE_STEP);
    let dy = first_derivative(&y, t, CURVE_STEP);
    let ddx = second_derivative(&x, t, CURVE_STEP);
    let ddy = second_derivative(&y, t, CURVE_STEP);

    let numerator = (dx * ddy - dy * ddx).abs();
    let denominator = (dx * dx + dy * dy).powf(1.5);

    numerator / denominator
}

/// Torsion of the space curve `(x(t), y(t), z(t))` at parameter `t`.
///
/// Evaluates the scalar-triple-product formula
/// `[r', r'', r'''] / |r'|³` componentwise with central differences up to
/// third order. Degenerates to NaN exactly as [`curvature_2d`] does when the
/// tangent vanishes.
pub fn torsion_3d(
    x: impl RealFunction<f64>,
    y: impl RealFunction<f64>,
    z: impl RealFunction<f64>,
    t: f64,
) -> f64 {
    let dx = first_derivative(&x, t, CURVE_STEP);
    let dy = first_derivative(&y, t, CURVE_STEP);
    let dz = first_derivative(&z, t, CURVE_STEP);
    let ddx = second_derivative(&x, t, CURVE_STEP);
    let ddy = second_derivative(&y, t, CURVE_STEP);
    let ddz = second_derivative(&z, t, CURVE_STEP);
    let dddx = third_derivative(&x, t, CURVE_STEP);
    let dddy = third_derivative(&y, t, CURVE_STEP);
    let dddz = third_derivative(&z, t, CURVE_STEP);

    let numerator = dx * (ddy * dddz - ddz * dddy) - dy * (ddx * dddz - ddz * dddx)
        + dz * (ddx * dddy - ddy * dddx);
    let denominator = (dx * dx + dy * dy + dz * dz).powf(1.5);

    numerator / denominator
}

#[cfg(test)]
mod tests {
    use super::{curvature_2d, tangent, torsion_3d};

    #[test]
    fn tangent_to_parabola_at_three() {
        let line = tangent(|x: f64| x * x, 3.0);
        assert!((line.slope - 6.0).abs() < 1e-3);
        assert!((line.intercept + 9.0).abs() < 1e-2);
    }

    #[test]
    fn tangent_to_line_recovers_the_line() {
        let line = tangent(|x: f64| 4.0 * x - 1.0, 2.0);
        assert!((line.slope - 4.0).abs() < 1e-3);
        assert!((line.intercept + 1.0).abs() < 1e-2);
    }

    #[test]
    fn circle_curvature_is_reciprocal_radius() {
        let r = 2.0;
        for t in [0.3, 1.0, 2.5, 4.7] {
            let k = curvature_2d(|t: f64| r * t.cos(), |t: f64| r * t.sin(), t);
            assert!(
                (k - 1.0 / r).abs() < 1e-4,
                "curvature {k} at t = {t} should be {}",
                1.0 / r
            );
        }
    }

    #[test]
    fn straight_line_has_no_curvature() {
        for t in [-1.0, 0.0, 3.0] {
            let k = curvature_2d(|t: f64| t, |t: f64| 2.0 * t, t);
            assert!(k.abs() < 1e-4, "curvature {k} at t = {t} should vanish");
        }
    }

    #[test]
    fn stationary_parametrization_yields_nan_curvature() {
        let k = curvature_2d(|_: f64| 1.0, |_: f64| -2.0, 0.0);
        assert!(k.is_nan());
    }

    #[test]
    fn planar_curve_has_no_torsion() {
        let tau = torsion_3d(|t: f64| t.cos(), |t: f64| t.sin(), |_: f64| 0.0, 0.8);
        assert!(tau.abs() < 1e-9, "torsion {tau} of a planar curve should vanish");
    }

    #[test]
    fn stationary_parametrization_yields_nan_torsion() {
        let tau = torsion_3d(|_: f64| 0.0, |_: f64| 0.0, |_: f64| 0.0, 1.0);
        assert!(tau.is_nan());
    }
}

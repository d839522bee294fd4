//! Closed-form solution of scalar polynomial equations.

use serde::{Deserialize, Serialize};

use crate::error::{StencilError, StencilResult};

/// Real roots of a quadratic equation.
///
/// Each slot is present only when a corresponding real root exists; a
/// repeated root fills both slots with the same value. Two absent roots are
/// a legitimate outcome (negative discriminant), not an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuadraticRoots {
    pub first: Option<f64>,
    pub second: Option<f64>,
}

/// Solves `a*x² + b*x + c = 0` over the reals.
///
/// A zero leading coefficient degenerates the closed form to a division by
/// zero and is rejected with [`StencilError::InvalidCoefficient`] instead of
/// returning infinities.
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> StencilResult<QuadraticRoots> {
    if a == 0.0 {
        return Err(StencilError::InvalidCoefficient(
            "leading coefficient of a quadratic must be nonzero".into(),
        ));
    }

    let discriminant = b * b - 4.0 * a * c;

    if discriminant < 0.0 {
        return Ok(QuadraticRoots {
            first: None,
            second: None,
        });
    }

    if discriminant == 0.0 {
        let root = -b / (2.0 * a);
        return Ok(QuadraticRoots {
            first: Some(root),
            second: Some(root),
        });
    }

    let sqrt_disc = discriminant.sqrt();
    Ok(QuadraticRoots {
        first: Some((-b + sqrt_disc) / (2.0 * a)),
        second: Some((-b - sqrt_disc) / (2.0 * a)),
    })
}

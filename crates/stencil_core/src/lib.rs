//! The `stencil_core` crate provides the numerical engine for Stencil:
//! finite-difference derivative estimation and the calculators and explicit
//! field solvers built on top of it.
//!
//! Key components:
//! - **Traits**: `Scalar` (numeric type abstraction) and `RealFunction`
//!   (caller-supplied real-to-real callables).
//! - **Differentiate**: central and one-sided finite-difference derivatives
//!   up to third order.
//! - **Curve**: tangent-line, curvature, and torsion calculators.
//! - **Field**: explicit time-steppers for the 2D heat and wave equations
//!   over dense grids with Dirichlet boundaries.
//! - **Linalg / Algebra / Stats**: dense matrix products and determinants,
//!   the closed-form quadratic solver, and descriptive statistics.

pub mod algebra;
pub mod curve;
pub mod differentiate;
pub mod error;
pub mod field;
pub mod linalg;
pub mod stats;
pub mod traits;

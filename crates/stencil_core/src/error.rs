use thiserror::Error;

/// Errors reported by the numerical core.
///
/// Only genuinely invalid arguments surface here. Numerical degeneracies
/// (vanishing curvature denominators, unstable step ratios) propagate as
/// NaN or divergent values instead; see the individual operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StencilError {
    /// The inner dimensions of a matrix product disagree.
    #[error("cannot multiply a {left_rows}x{left_cols} matrix by a {right_rows}x{right_cols} matrix")]
    DimensionMismatch {
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },

    /// A coefficient the closed-form solution divides by was zero.
    #[error("invalid coefficient: {0}")]
    InvalidCoefficient(String),
}

pub type StencilResult<T> = Result<T, StencilError>;

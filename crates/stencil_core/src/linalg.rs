//! Dense matrix operations.

use nalgebra::{DMatrix, Matrix3};

use crate::error::{StencilError, StencilResult};

/// Multiplies two dense matrices.
///
/// Plain triple loop, `O(rows(a) * cols(a) * cols(b))`; the result has shape
/// `rows(a) x cols(b)`. Fails with [`StencilError::DimensionMismatch`] when
/// the inner dimensions disagree; no partial result is produced.
pub fn multiply(a: &DMatrix<f64>, b: &DMatrix<f64>) -> StencilResult<DMatrix<f64>> {
    if a.ncols() != b.nrows() {
        return Err(StencilError::DimensionMismatch {
            left_rows: a.nrows(),
            left_cols: a.ncols(),
            right_rows: b.nrows(),
            right_cols: b.ncols(),
        });
    }

    let (rows, inner, cols) = (a.nrows(), a.ncols(), b.ncols());
    let mut out = DMatrix::zeros(rows, cols);
    for i in 0..rows {
        for j in 0..cols {
            let mut accum = 0.0;
            for k in 0..inner {
                accum += a[(i, k)] * b[(k, j)];
            }
            out[(i, j)] = accum;
        }
    }

    Ok(out)
}

/// Determinant of a 3x3 matrix by cofactor expansion along the first row.
pub fn determinant3(m: &Matrix3<f64>) -> f64 {
    m[(0, 0)] * (m[(1, 1)] * m[(2, 2)] - m[(1, 2)] * m[(2, 1)])
        - m[(0, 1)] * (m[(1, 0)] * m[(2, 2)] - m[(1, 2)] * m[(2, 0)])
        + m[(0, 2)] * (m[(1, 0)] * m[(2, 1)] - m[(1, 1)] * m[(2, 0)])
}

//! Dense matrix helpers shared by the property predicates.
//!
//! Generic over real and complex scalars via `ComplexFloat<Real = f64>`;
//! for `f64` the conjugate is the identity, so `adjoint` reduces to a
//! plain transpose. The O(n³) product is deliberately naive: the
//! matrices in this project are small and the predicates are not a hot
//! path.

use matrix_types::error::{MatrixError, MatrixResult};
use ndarray::Array2;
use num_complex::ComplexFloat;

/// Validate that `mat` is square and return its side length.
pub fn require_square<T>(mat: &Array2<T>) -> MatrixResult<usize> {
    let (rows, cols) = mat.dim();
    if rows != cols {
        return Err(MatrixError::NotSquare { rows, cols });
    }
    Ok(rows)
}

/// Plain transpose.
pub fn transpose<T: Copy>(mat: &Array2<T>) -> Array2<T> {
    let (rows, cols) = mat.dim();
    Array2::from_shape_fn((cols, rows), |(i, j)| mat[[j, i]])
}

/// Conjugate transpose (adjoint).
pub fn adjoint<T: ComplexFloat<Real = f64>>(mat: &Array2<T>) -> Array2<T> {
    let (rows, cols) = mat.dim();
    Array2::from_shape_fn((cols, rows), |(i, j)| mat[[j, i]].conj())
}

/// n x n identity matrix.
pub fn eye<T: ComplexFloat<Real = f64>>(n: usize) -> Array2<T> {
    Array2::from_shape_fn((n, n), |(i, j)| if i == j { T::one() } else { T::zero() })
}

/// Matrix product via the naive triple loop.
///
/// Returns DimensionMismatch when the inner dimensions disagree.
pub fn matmul<T: ComplexFloat<Real = f64>>(
    a: &Array2<T>,
    b: &Array2<T>,
) -> MatrixResult<Array2<T>> {
    let (m, k_a) = a.dim();
    let (k_b, n) = b.dim();
    if k_a != k_b {
        return Err(MatrixError::DimensionMismatch(format!(
            "cannot multiply {m}x{k_a} by {k_b}x{n}"
        )));
    }

    let mut out = Array2::zeros((m, n));
    for i in 0..m {
        for j in 0..n {
            let mut sum = T::zero();
            for k in 0..k_a {
                sum = sum + a[[i, k]] * b[[k, j]];
            }
            out[[i, j]] = sum;
        }
    }
    Ok(out)
}

//! Elementwise approximate comparison.
//!
//! Convention matches `numpy.allclose()`: x and y are close when
//! |x - y| <= atol + rtol * |y|. The second argument is the reference
//! value, so the comparison is asymmetric in rtol.

use matrix_types::error::{MatrixError, MatrixResult};
use matrix_types::tolerance::Tolerance;
use ndarray::Array2;
use num_complex::ComplexFloat;

/// Scalar form of the numpy closeness criterion.
pub fn close<T: ComplexFloat<Real = f64>>(x: T, y: T, tol: &Tolerance) -> bool {
    (x - y).abs() <= tol.atol + tol.rtol * y.abs()
}

/// True when every element pair of `a` and `b` is close.
///
/// Returns DimensionMismatch when the shapes disagree.
pub fn allclose<T: ComplexFloat<Real = f64>>(
    a: &Array2<T>,
    b: &Array2<T>,
    tol: &Tolerance,
) -> MatrixResult<bool> {
    if a.dim() != b.dim() {
        let (ar, ac) = a.dim();
        let (br, bc) = b.dim();
        return Err(MatrixError::DimensionMismatch(format!(
            "cannot compare {ar}x{ac} with {br}x{bc}"
        )));
    }

    for (x, y) in a.iter().zip(b.iter()) {
        if !close(*x, *y, tol) {
            return Ok(false);
        }
    }
    Ok(true)
}

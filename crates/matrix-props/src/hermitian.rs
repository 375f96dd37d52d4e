// ─────────────────────────────────────────────────────────────────────
// SCPN Matrix Core — Hermitian Predicate
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Hermitian and symmetric predicates.
//!
//! X is Hermitian when X = X*, symmetric when X = Xᵀ. For real entries
//! the two coincide; for complex input the symmetric check compares
//! without conjugation, which is rarely what a caller wants.

use crate::compare::allclose;
use crate::ops::{adjoint, require_square, transpose};
use matrix_types::error::MatrixResult;
use matrix_types::tolerance::Tolerance;
use ndarray::Array2;
use num_complex::ComplexFloat;

/// True when `mat` equals its conjugate transpose, using the default
/// numpy tolerances.
pub fn is_hermitian<T: ComplexFloat<Real = f64>>(mat: &Array2<T>) -> MatrixResult<bool> {
    is_hermitian_with(mat, &Tolerance::default())
}

/// Hermitian check with an explicit tolerance profile.
pub fn is_hermitian_with<T: ComplexFloat<Real = f64>>(
    mat: &Array2<T>,
    tol: &Tolerance,
) -> MatrixResult<bool> {
    require_square(mat)?;
    allclose(mat, &adjoint(mat), tol)
}

/// True when `mat` equals its plain transpose, using the default
/// numpy tolerances.
pub fn is_symmetric<T: ComplexFloat<Real = f64>>(mat: &Array2<T>) -> MatrixResult<bool> {
    is_symmetric_with(mat, &Tolerance::default())
}

/// Symmetry check with an explicit tolerance profile.
pub fn is_symmetric_with<T: ComplexFloat<Real = f64>>(
    mat: &Array2<T>,
    tol: &Tolerance,
) -> MatrixResult<bool> {
    require_square(mat)?;
    allclose(mat, &transpose(mat), tol)
}

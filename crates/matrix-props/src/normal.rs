// ─────────────────────────────────────────────────────────────────────
// SCPN Matrix Core — Normality Predicate
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Normality predicate: does a square matrix commute with its adjoint?
//!
//! A matrix X is normal when X·X* = X*·X. Hermitian, unitary, diagonal
//! and real symmetric matrices are all normal; a generic non-symmetric
//! matrix is not. The comparison is tolerance-based, so floating-point
//! rounding in the two products does not flip the answer.

use crate::compare::allclose;
use crate::ops::{adjoint, matmul, require_square};
use matrix_types::error::MatrixResult;
use matrix_types::tolerance::Tolerance;
use ndarray::Array2;
use num_complex::ComplexFloat;

/// True when `mat` commutes with its conjugate transpose, using the
/// default numpy tolerances.
///
/// Returns NotSquare for rectangular input.
pub fn is_normal<T: ComplexFloat<Real = f64>>(mat: &Array2<T>) -> MatrixResult<bool> {
    is_normal_with(mat, &Tolerance::default())
}

/// Normality check with an explicit tolerance profile.
pub fn is_normal_with<T: ComplexFloat<Real = f64>>(
    mat: &Array2<T>,
    tol: &Tolerance,
) -> MatrixResult<bool> {
    require_square(mat)?;
    let adj = adjoint(mat);
    let left = matmul(mat, &adj)?;
    let right = matmul(&adj, mat)?;
    allclose(&left, &right, tol)
}

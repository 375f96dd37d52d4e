// ─────────────────────────────────────────────────────────────────────
// SCPN Matrix Core — Unitarity Predicate
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Unitarity predicate: U·U* = I.
//!
//! For real entries this is the orthogonality check. Square input is
//! required, so U·U* = I implies U*·U = I and one product suffices.

use crate::compare::allclose;
use crate::ops::{adjoint, eye, matmul, require_square};
use matrix_types::error::MatrixResult;
use matrix_types::tolerance::Tolerance;
use ndarray::Array2;
use num_complex::ComplexFloat;

/// True when `mat` times its conjugate transpose is the identity,
/// using the default numpy tolerances.
pub fn is_unitary<T: ComplexFloat<Real = f64>>(mat: &Array2<T>) -> MatrixResult<bool> {
    is_unitary_with(mat, &Tolerance::default())
}

/// Unitarity check with an explicit tolerance profile.
pub fn is_unitary_with<T: ComplexFloat<Real = f64>>(
    mat: &Array2<T>,
    tol: &Tolerance,
) -> MatrixResult<bool> {
    let n = require_square(mat)?;
    let product = matmul(mat, &adjoint(mat))?;
    allclose(&product, &eye(n), tol)
}

// ─────────────────────────────────────────────────────────────────────
// SCPN Matrix Core — Diagonal Predicate
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Diagonal predicate: every off-diagonal entry is exactly zero.
//!
//! Structural check, no tolerance. A matrix built from a diagonal is
//! diagonal; one with rounding dust off the diagonal is not.

use crate::ops::require_square;
use matrix_types::error::MatrixResult;
use ndarray::Array2;
use num_complex::ComplexFloat;

/// True when all off-diagonal entries of `mat` are zero.
pub fn is_diagonal<T: ComplexFloat<Real = f64>>(mat: &Array2<T>) -> MatrixResult<bool> {
    let n = require_square(mat)?;
    for i in 0..n {
        for j in 0..n {
            if i != j && mat[[i, j]] != T::zero() {
                return Ok(false);
            }
        }
    }
    Ok(true)
}

// ─────────────────────────────────────────────────────────────────────
// SCPN Matrix Core — Tolerance
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Relative/absolute tolerance pair for approximate matrix comparison.
//!
//! Two values x, y are considered equal when |x - y| <= atol + rtol * |y|.
//! Defaults match `numpy.allclose()`.

use serde::{Deserialize, Serialize};

/// Default relative tolerance, matching `numpy.allclose()`.
pub const DEFAULT_RTOL: f64 = 1e-5;

/// Default absolute tolerance, matching `numpy.allclose()`.
pub const DEFAULT_ATOL: f64 = 1e-8;

/// Tolerance pair controlling elementwise approximate equality.
///
/// Both components must be finite and non-negative. Setting both to
/// zero degenerates the comparison to exact equality.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tolerance {
    /// Relative tolerance, scaled by the magnitude of the reference value.
    #[serde(default = "default_rtol")]
    pub rtol: f64,
    /// Absolute tolerance floor.
    #[serde(default = "default_atol")]
    pub atol: f64,
}

fn default_rtol() -> f64 {
    DEFAULT_RTOL
}

fn default_atol() -> f64 {
    DEFAULT_ATOL
}

impl Default for Tolerance {
    fn default() -> Self {
        Tolerance {
            rtol: DEFAULT_RTOL,
            atol: DEFAULT_ATOL,
        }
    }
}

impl Tolerance {
    /// Checked constructor rejecting negative or non-finite components.
    pub fn new(rtol: f64, atol: f64) -> crate::error::MatrixResult<Self> {
        if !rtol.is_finite() || !atol.is_finite() {
            return Err(crate::error::MatrixError::InvalidTolerance(format!(
                "components must be finite, got rtol={rtol}, atol={atol}"
            )));
        }
        if rtol < 0.0 || atol < 0.0 {
            return Err(crate::error::MatrixError::InvalidTolerance(format!(
                "components must be non-negative, got rtol={rtol}, atol={atol}"
            )));
        }
        Ok(Tolerance { rtol, atol })
    }

    /// Exact comparison: both components zero.
    pub fn exact() -> Self {
        Tolerance {
            rtol: 0.0,
            atol: 0.0,
        }
    }

    /// Load a tolerance profile from a JSON file.
    ///
    /// Missing fields fall back to the numpy defaults.
    pub fn from_file(path: &str) -> crate::error::MatrixResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let tol: Self = serde_json::from_str(&contents)?;
        Tolerance::new(tol.rtol, tol.atol)
    }
}

// ─────────────────────────────────────────────────────────────────────
// SCPN Matrix Core — Matrix Props
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Dense matrix property predicates over real and complex scalars.

pub mod compare;
pub mod diagonal;
pub mod hermitian;
pub mod normal;
pub mod ops;
pub mod unitary;

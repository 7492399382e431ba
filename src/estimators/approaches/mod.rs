// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod discrete;

// Unified re-exports so tests and users can import
// infotheory::estimators::approaches::* ergonomically.
pub use discrete::contingency::ContingencyTable;
pub use discrete::hypergeometric::{HypergeometricPmf, log_factorial};
pub use discrete::info_theory::{
    partial_expected_mutual_information, partial_mutual_information,
    try_partial_expected_mutual_information, try_partial_mutual_information,
};
pub use discrete::{AmiNormalization, ContingencyMutualInformation, ScoringConfig};

// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use thiserror::Error;

/// Domain errors raised by the checked entry points.
///
/// The unchecked numeric kernels never produce these; they propagate NaN or
/// infinity instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InfoTheoryError {
    #[error("total weight must be positive, got {0}")]
    NonPositiveTotal(f64),

    #[error("marginal '{name}' must be positive, got {value}")]
    NonPositiveMarginal { name: &'static str, value: f64 },

    #[error("marginal '{name}' = {value} exceeds total weight {total}")]
    MarginalExceedsTotal {
        name: &'static str,
        value: f64,
        total: f64,
    },

    #[error("joint count {n_ij} outside hypergeometric support [{start}, {end}]")]
    JointOutOfSupport { n_ij: f64, start: f64, end: f64 },

    #[error("'{0}' must be finite")]
    NonFinite(&'static str),

    #[error("negative count {value} at row {row}, column {col}")]
    NegativeCount { value: f64, row: usize, col: usize },

    #[error("contingency table is empty: {0}")]
    EmptyTable(String),
}

/// Result type alias for checked operations.
pub type Result<T> = std::result::Result<T, InfoTheoryError>;

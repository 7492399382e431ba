// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # infotheory
//!
//! Mutual information and expected mutual information of two categorical variables,
//! computed from aggregated co-occurrence counts for feature-selection scoring.
//!
//! ## Quick Start
//!
//! ```rust
//! use infotheory::{partial_expected_mutual_information, partial_mutual_information};
//! use infotheory::estimators::mutual_information::MutualInformation;
//! use infotheory::estimators::{ChanceAdjusted, GlobalValue};
//! use ndarray::array;
//!
//! // One cell of a contingency table: n_ij = 3, x_i = 4, y_j = 5, n = 10
//! let mi_cell = partial_mutual_information(3.0, 4.0, 5.0, 10.0);
//! let emi_cell = partial_expected_mutual_information(10.0, 4.0, 5.0);
//! assert!(mi_cell > emi_cell);
//!
//! // Whole table, in bits
//! let counts = array![[3.0, 1.0], [2.0, 4.0]];
//! let mi = MutualInformation::new_contingency(counts).unwrap();
//! let ami = mi.global_value() - mi.expected_value();
//! assert!(ami.is_finite());
//! ```
//!
//! ## Numerics
//!
//! Factorials and binomial coefficients are evaluated in log-space through
//! `ln Γ(m + 1)`, so weights may be large or fractional. The hypergeometric PMF
//! is produced lazily by [`HypergeometricPmf`]: the first term is exact and later
//! terms follow an incremental recurrence whose rounding drift is cancelled by
//! normalizing the expectation with the realized probability mass.
//!
//! ## Validation
//!
//! The per-cell kernels do not check their preconditions (`n`, `x_i`, `y_j` > 0)
//! and propagate NaN/inf on violation. Use the `try_` variants, which return
//! [`error::InfoTheoryError`], when inputs are not already guaranteed valid.
//!
//! ## Concurrency
//!
//! Every function is pure; calls may run concurrently without coordination.

pub mod error;
pub mod estimators;

pub use error::{InfoTheoryError, Result};
pub use estimators::approaches::{
    AmiNormalization, ContingencyMutualInformation, ContingencyTable, HypergeometricPmf,
    ScoringConfig, log_factorial, partial_expected_mutual_information, partial_mutual_information,
    try_partial_expected_mutual_information, try_partial_mutual_information,
};
pub use estimators::traits::{ChanceAdjusted, GlobalValue, OptionalLocalValues};

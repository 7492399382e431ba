// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array2;

use crate::error::Result;
use crate::estimators::approaches::discrete;

/// Mutual information estimation methods.
///
/// This struct provides static methods for creating mutual information
/// estimators and for evaluating single contingency cells.
pub struct MutualInformation;

impl MutualInformation {
    /// Creates a mutual information estimator from an aggregated contingency table
    ///
    /// # Arguments
    ///
    /// * `counts` - Joint weights, rows indexing X values and columns indexing Y values
    ///
    /// # Returns
    ///
    /// The estimator, or an error if the table is empty, negative or non-finite
    pub fn new_contingency(counts: Array2<f64>) -> Result<discrete::ContingencyMutualInformation> {
        discrete::ContingencyMutualInformation::new(counts)
    }

    /// Mutual information contribution (bits, unnormalized) of one cell
    pub fn partial(n_ij: f64, x_i: f64, y_j: f64, n: f64) -> f64 {
        discrete::info_theory::partial_mutual_information(n_ij, x_i, y_j, n)
    }

    /// Expected mutual information contribution (bits, unnormalized) of one marginal pair
    pub fn partial_expected(n: f64, x_i: f64, y_j: f64) -> f64 {
        discrete::info_theory::partial_expected_mutual_information(n, x_i, y_j)
    }
}

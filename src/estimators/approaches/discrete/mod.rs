// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Discrete estimators module: per-cell kernels, the hypergeometric PMF and the
// contingency-table estimator built on top of them.

pub mod contingency;
pub mod hypergeometric;
pub mod info_theory;

use ndarray::{Array1, Array2};
use tracing::{debug, trace, warn};

use crate::error::Result;
use crate::estimators::approaches::discrete::contingency::ContingencyTable;
use crate::estimators::approaches::discrete::info_theory::{
    partial_expected_mutual_information, partial_mutual_information,
};
use crate::estimators::traits::{ChanceAdjusted, GlobalValue, OptionalLocalValues};

/// How the marginal entropies are combined into the upper bound used by
/// [`ContingencyMutualInformation::normalized_adjusted_value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AmiNormalization {
    #[default]
    Arithmetic,
    Geometric,
    Min,
    Max,
}

impl AmiNormalization {
    fn combine(self, h_x: f64, h_y: f64) -> f64 {
        match self {
            AmiNormalization::Arithmetic => 0.5 * (h_x + h_y),
            AmiNormalization::Geometric => (h_x * h_y).sqrt(),
            AmiNormalization::Min => h_x.min(h_y),
            AmiNormalization::Max => h_x.max(h_y),
        }
    }
}

/// Parameters for [`ContingencyMutualInformation::feature_value_scores`].
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringConfig {
    /// Subtract the expected mutual information of each feature value.
    pub use_adjusted_mutual_info: bool,
    /// Feature values with a total weight below this score 0.
    pub min_total: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self { use_adjusted_mutual_info: false, min_total: 0.0 }
    }
}

impl ScoringConfig {
    pub fn adjusted() -> Self {
        Self { use_adjusted_mutual_info: true, ..Self::default() }
    }

    pub fn with_min_total(mut self, min_total: f64) -> Self {
        self.min_total = min_total;
        self
    }
}

/// Mutual information (bits) of two categorical variables given their aggregated
/// contingency table.
///
/// The global value is I(X;Y) = (1/n) Σ_ij n_ij log2(n n_ij / (x_i y_j)). Local values
/// are the per-cell terms of that sum in row-major order. The expected value under
/// independence with fixed marginals is computed from the hypergeometric model, which
/// gives the chance-adjusted MI and its normalized form (AMI).
pub struct ContingencyMutualInformation {
    table: ContingencyTable,
}

impl ContingencyMutualInformation {
    pub fn new(counts: Array2<f64>) -> Result<Self> {
        let table = ContingencyTable::from_counts(counts)?;
        Ok(Self::from_table(table))
    }

    pub fn from_table(table: ContingencyTable) -> Self {
        let (rows, cols) = table.dim();
        debug!(rows, cols, total = table.total(), "built contingency mutual information");
        Self { table }
    }

    pub fn table(&self) -> &ContingencyTable {
        &self.table
    }

    /// Shannon entropies (bits) of X and Y.
    pub fn marginal_entropies(&self) -> (f64, f64) {
        self.table.marginal_entropies()
    }

    /// Adjusted mutual information: (MI - EMI) / (norm(H(X), H(Y)) - EMI).
    ///
    /// Two constant variables are perfectly (trivially) associated and give 1.
    /// A zero entropy bound (one constant variable under `Min` or `Geometric`)
    /// gives 0. The denominator is kept at least `f64::EPSILON` away from zero.
    pub fn normalized_adjusted_value(&self, normalization: AmiNormalization) -> f64 {
        let (h_x, h_y) = self.marginal_entropies();
        if h_x == 0.0 && h_y == 0.0 {
            return 1.0;
        }
        let upper = normalization.combine(h_x, h_y);
        if upper == 0.0 {
            warn!(?normalization, h_x, h_y, "degenerate AMI normalizer, returning 0");
            return 0.0;
        }
        let mi = self.global_value();
        let emi = self.expected_value();
        let mut denominator = upper - emi;
        denominator = if denominator < 0.0 {
            denominator.min(-f64::EPSILON)
        } else {
            denominator.max(f64::EPSILON)
        };
        (mi - emi) / denominator
    }

    /// Score every X value against Y, treating X as the indicator "X = i".
    ///
    /// Each row's score is the (optionally chance-adjusted) mutual information in
    /// bits between that indicator and Y. Rows below `config.min_total` score 0.
    pub fn feature_value_scores(&self, config: &ScoringConfig) -> Array1<f64> {
        let t = &self.table;
        let n = t.total();
        let mut scores = Array1::zeros(t.row_totals().len());
        for (i, &x_i) in t.row_totals().iter().enumerate() {
            if x_i <= 0.0 || x_i < config.min_total {
                continue;
            }
            let complement = n - x_i;
            let mut mi = 0.0_f64;
            let mut emi = 0.0_f64;
            for (j, &y_j) in t.col_totals().iter().enumerate() {
                if y_j <= 0.0 {
                    continue;
                }
                let n_ij = t.counts()[(i, j)];
                mi += partial_mutual_information(n_ij, x_i, y_j, n);
                if complement > 0.0 {
                    mi += partial_mutual_information(y_j - n_ij, complement, y_j, n);
                }
                if config.use_adjusted_mutual_info {
                    emi += partial_expected_mutual_information(n, x_i, y_j);
                    if complement > 0.0 {
                        emi += partial_expected_mutual_information(n, complement, y_j);
                    }
                }
            }
            scores[i] = (mi - emi) / n;
        }
        debug!(
            values = scores.len(),
            adjusted = config.use_adjusted_mutual_info,
            "scored feature values"
        );
        scores
    }

    fn cell_terms(&self) -> impl Iterator<Item = f64> + '_ {
        let t = &self.table;
        let n = t.total();
        t.counts().indexed_iter().map(move |((i, j), &n_ij)| {
            partial_mutual_information(n_ij, t.row_totals()[i], t.col_totals()[j], n) / n
        })
    }
}

impl GlobalValue for ContingencyMutualInformation {
    fn global_value(&self) -> f64 {
        self.cell_terms().sum()
    }
}

impl ChanceAdjusted for ContingencyMutualInformation {
    fn expected_value(&self) -> f64 {
        let t = &self.table;
        let n = t.total();
        let mut emi = 0.0_f64;
        // Empty categories pin n_ij to 0 and contribute nothing.
        for &x_i in t.row_totals().iter().filter(|&&x| x > 0.0) {
            for &y_j in t.col_totals().iter().filter(|&&y| y > 0.0) {
                let term = partial_expected_mutual_information(n, x_i, y_j);
                trace!(x_i, y_j, term, "emi pair");
                emi += term;
            }
        }
        emi / n
    }
}

impl OptionalLocalValues for ContingencyMutualInformation {
    fn supports_local(&self) -> bool {
        true
    }

    fn local_values_opt(&self) -> std::result::Result<Array1<f64>, &'static str> {
        Ok(self.cell_terms().collect())
    }
}

// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, Array2, Axis};

use crate::error::{InfoTheoryError, Result};

/// Validated, already-aggregated co-occurrence weights of two categorical variables.
///
/// Rows index the values of X, columns the values of Y. Entries may be
/// fractional (weighted aggregation). The table is read-only once built so the
/// cached totals always agree with the counts.
#[derive(Debug, Clone)]
pub struct ContingencyTable {
    counts: Array2<f64>,
    row_totals: Array1<f64>,
    col_totals: Array1<f64>,
    n: f64,
}

impl ContingencyTable {
    /// Build a table from a dense matrix of joint weights.
    ///
    /// Rejects empty shapes, non-finite or negative entries, and a zero total.
    pub fn from_counts(counts: Array2<f64>) -> Result<Self> {
        let (rows, cols) = counts.dim();
        if rows == 0 || cols == 0 {
            return Err(InfoTheoryError::EmptyTable(format!("shape ({rows}, {cols})")));
        }
        for ((row, col), &value) in counts.indexed_iter() {
            if !value.is_finite() {
                return Err(InfoTheoryError::NonFinite("counts"));
            }
            if value < 0.0 {
                return Err(InfoTheoryError::NegativeCount { value, row, col });
            }
        }
        let row_totals = counts.sum_axis(Axis(1));
        let col_totals = counts.sum_axis(Axis(0));
        let n = counts.sum();
        if n <= 0.0 {
            return Err(InfoTheoryError::EmptyTable("total weight is zero".to_string()));
        }
        Ok(Self { counts, row_totals, col_totals, n })
    }

    /// Joint weights n_ij
    pub fn counts(&self) -> &Array2<f64> {
        &self.counts
    }

    /// Row totals x_i
    pub fn row_totals(&self) -> &Array1<f64> {
        &self.row_totals
    }

    /// Column totals y_j
    pub fn col_totals(&self) -> &Array1<f64> {
        &self.col_totals
    }

    /// Total weight n
    pub fn total(&self) -> f64 {
        self.n
    }

    /// Shape as (number of X values, number of Y values).
    pub fn dim(&self) -> (usize, usize) {
        self.counts.dim()
    }

    /// Shannon entropies (bits) of the row and column marginals.
    pub fn marginal_entropies(&self) -> (f64, f64) {
        (entropy_bits(&self.row_totals, self.n), entropy_bits(&self.col_totals, self.n))
    }
}

/// -Σ p log2 p over totals divided by `n`; empty categories contribute nothing.
fn entropy_bits(totals: &Array1<f64>, n: f64) -> f64 {
    let mut h = 0.0_f64;
    for &cnt in totals.iter() {
        let p = cnt / n;
        h -= if p > 0.0 { p * p.log2() } else { 0.0 };
    }
    h
}

// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-cell mutual information kernels (base 2) for aggregated co-occurrence counts.
//!
//! Both kernels return the *unnormalized* contribution of one (x_i, y_j) pair:
//! dividing the sum over all pairs by the total weight `n` gives MI (or EMI) in bits.
//!
//! The plain kernels do not validate their inputs. Zero or negative marginals
//! propagate NaN/inf exactly as the underlying `log2` does. The `try_` variants
//! validate first and otherwise return bit-identical results.

use crate::error::{InfoTheoryError, Result};
use crate::estimators::approaches::discrete::hypergeometric::HypergeometricPmf;

/// Expected mutual information contribution of the pair (x_i, y_j) under the
/// hypergeometric model of joint counts with fixed marginals.
///
/// EMI(x_i, y_j) = Σ_{n_ij} n_ij · log2(n · n_ij / (x_i · y_j)) · p(n_ij)
///
/// The sum is divided by the realized probability mass to cancel the drift of
/// the incremental PMF. Requires `n > 0`, `x_i > 0`, `y_j > 0` (unchecked).
pub fn partial_expected_mutual_information(n: f64, x_i: f64, y_j: f64) -> f64 {
    let coefficient = -x_i.log2() - y_j.log2() + n.log2();
    let mut sum_probability = 0.0_f64;
    let mut partial_result = 0.0_f64;
    for (n_ij, p_j) in HypergeometricPmf::new(n, x_i, y_j) {
        if n_ij != 0 {
            let k = n_ij as f64;
            partial_result += k * (coefficient + k.log2()) * p_j;
        }
        sum_probability += p_j;
    }
    partial_result / sum_probability
}

/// Mutual information contribution of a single contingency cell.
///
/// Returns `n_ij · log2(n · n_ij / (x_i · y_j))`, and exactly `0.0` for an empty
/// cell. Requires `n`, `x_i`, `y_j` > 0 (unchecked).
pub fn partial_mutual_information(n_ij: f64, x_i: f64, y_j: f64, n: f64) -> f64 {
    if n_ij == 0.0 {
        return 0.0;
    }
    n_ij * ((n_ij.log2() + n.log2()) - (x_i.log2() + y_j.log2()))
}

/// Checked form of [`partial_mutual_information`].
pub fn try_partial_mutual_information(n_ij: f64, x_i: f64, y_j: f64, n: f64) -> Result<f64> {
    check_finite(n_ij, "n_ij")?;
    check_marginals(n, x_i, y_j)?;
    let start = 0.0_f64.max(x_i + y_j - n);
    let end = x_i.min(y_j);
    if n_ij < start || n_ij > end {
        return Err(InfoTheoryError::JointOutOfSupport { n_ij, start, end });
    }
    Ok(partial_mutual_information(n_ij, x_i, y_j, n))
}

/// Checked form of [`partial_expected_mutual_information`].
pub fn try_partial_expected_mutual_information(n: f64, x_i: f64, y_j: f64) -> Result<f64> {
    check_marginals(n, x_i, y_j)?;
    Ok(partial_expected_mutual_information(n, x_i, y_j))
}

fn check_finite(value: f64, name: &'static str) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(InfoTheoryError::NonFinite(name))
    }
}

fn check_marginals(n: f64, x_i: f64, y_j: f64) -> Result<()> {
    check_finite(n, "n")?;
    check_finite(x_i, "x_i")?;
    check_finite(y_j, "y_j")?;
    if n <= 0.0 {
        return Err(InfoTheoryError::NonPositiveTotal(n));
    }
    for (name, value) in [("x_i", x_i), ("y_j", y_j)] {
        if value <= 0.0 {
            return Err(InfoTheoryError::NonPositiveMarginal { name, value });
        }
        if value > n {
            return Err(InfoTheoryError::MarginalExceedsTotal { name, value, total: n });
        }
    }
    Ok(())
}

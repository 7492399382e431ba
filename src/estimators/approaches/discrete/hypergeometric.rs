// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use statrs::function::gamma::ln_gamma;

/// Natural logarithm of m!, computed as ln Γ(m + 1).
///
/// Defined for non-integer (weighted) counts and stable for large m.
pub fn log_factorial(m: f64) -> f64 {
    ln_gamma(m + 1.0)
}

/// Lazy hypergeometric PMF over the feasible joint counts of a 2x2 split.
///
/// For a population of total weight `n` with `x_i` marked items, drawing `y_j`
/// items, yields `(n_ij, p(n_ij))` for every integer `n_ij` in
/// `[max(0, x_i + y_j - n), min(x_i, y_j)]`, in increasing order.
///
/// The first probability is evaluated from five log-factorials. Every later term
/// updates the log-denominator with the ratio of consecutive terms instead of
/// recomputing it, so rounding error accumulates along the support and the
/// yielded masses need not sum to exactly one. Consumers normalize by the
/// realized mass (see `partial_expected_mutual_information`).
///
/// An infeasible configuration (`start > end`) yields nothing.
#[derive(Debug, Clone)]
pub struct HypergeometricPmf {
    n: f64,
    x_i: f64,
    y_j: f64,
    start: i64,
    end: i64,
    next: i64,
    log_numerator: f64,
    log_denominator: f64,
}

impl HypergeometricPmf {
    pub fn new(n: f64, x_i: f64, y_j: f64) -> Self {
        // Bounds are truncated toward zero, matching integer casts of weighted counts.
        let start = 0.0_f64.max(n - (n - x_i) - (n - y_j)) as i64;
        let end = x_i.min(y_j) as i64;
        let s = start as f64;
        let log_numerator =
            log_factorial(x_i) + log_factorial(y_j) + log_factorial(n - x_i) + log_factorial(n - y_j);
        let log_denominator = log_factorial(n)
            + log_factorial(s)
            + log_factorial(x_i - s)
            + log_factorial(y_j - s)
            + log_factorial(n - x_i - y_j + s);
        Self {
            n,
            x_i,
            y_j,
            start,
            end,
            next: start,
            log_numerator,
            log_denominator,
        }
    }

    /// Inclusive `(start, end)` bounds of the support. `start > end` means empty.
    pub fn support(&self) -> (i64, i64) {
        (self.start, self.end)
    }

    fn remaining(&self) -> usize {
        if self.next > self.end {
            0
        } else {
            (self.end - self.next + 1) as usize
        }
    }
}

impl Iterator for HypergeometricPmf {
    type Item = (u64, f64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next > self.end {
            return None;
        }
        let n_ij = self.next;
        let k = n_ij as f64;
        let p = (self.log_numerator - self.log_denominator).exp();
        // ln of the ratio between the denominators of term k+1 and term k
        self.log_denominator += (k + 1.0).ln() - (self.x_i - k).ln() - (self.y_j - k).ln()
            + (self.n - self.x_i - self.y_j + k + 1.0).ln();
        self.next += 1;
        Some((n_ij as u64, p))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remaining();
        (len, Some(len))
    }
}

impl ExactSizeIterator for HypergeometricPmf {}

impl std::iter::FusedIterator for HypergeometricPmf {}

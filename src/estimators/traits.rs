// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;

pub trait GlobalValue {
    /// Compute and return the global value of the measure.
    fn global_value(&self) -> f64;
}

/// Optional interface for estimators that may not support local values.
///
/// Estimators that do support local values should return supports_local() = true
/// and provide local values via `Ok(Array1<f64>)`. Estimators that do not support
/// local values should return supports_local() = false and an Err with a brief reason.
pub trait OptionalLocalValues {
    fn supports_local(&self) -> bool;
    fn local_values_opt(&self) -> Result<Array1<f64>, &'static str>;
}

/// Interface for measures with a closed-form expectation under independence,
/// so they can be corrected for chance agreement.
pub trait ChanceAdjusted: GlobalValue {
    /// Expected value of the measure when the variables are independent
    /// and the marginals are held fixed.
    fn expected_value(&self) -> f64;

    /// Global value minus its expectation under independence.
    fn adjusted_value(&self) -> f64 {
        self.global_value() - self.expected_value()
    }
}

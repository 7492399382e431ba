// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_relative_eq;
use infotheory::estimators::approaches::partial_mutual_information;
use infotheory::estimators::mutual_information::MutualInformation;
use rstest::*;

use crate::test_helpers::{Rng, SeedableRng, StdRng};

#[rstest]
#[case(4.0, 10.0, 10.0)]
#[case(0.5, 3.0, 7.0)]
#[case(1e6, 1e3, 1e3)]
fn empty_cell_contributes_exactly_zero(#[case] x_i: f64, #[case] y_j: f64, #[case] n: f64) {
    assert_eq!(partial_mutual_information(0.0, x_i, y_j, n), 0.0);
}

#[test]
fn empty_cell_short_circuits_invalid_marginals() {
    assert_eq!(partial_mutual_information(0.0, 0.0, 0.0, 0.0), 0.0);
}

#[rstest]
#[case(3.0, 4.0, 5.0, 10.0)]
#[case(1.0, 5.0, 5.0, 10.0)]
#[case(5.0, 5.0, 5.0, 10.0)]
#[case(12.5, 40.25, 30.0, 100.0)]
#[case(1e5, 2e5, 3e5, 1e6)]
fn matches_closed_form(#[case] n_ij: f64, #[case] x_i: f64, #[case] y_j: f64, #[case] n: f64) {
    let expected = n_ij * ((n_ij * n).log2() - (x_i * y_j).log2());
    assert_relative_eq!(
        partial_mutual_information(n_ij, x_i, y_j, n),
        expected,
        epsilon = 1e-12,
        max_relative = 1e-9
    );
}

#[test]
fn matches_closed_form_random_cells() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..500 {
        let n = rng.gen_range(1.0..1e4_f64);
        let x_i = rng.gen_range(0.5..=n);
        let y_j = rng.gen_range(0.5..=n);
        let n_ij = rng.gen_range(0.1..=x_i.min(y_j));
        let expected = n_ij * ((n_ij * n).log2() - (x_i * y_j).log2());
        assert_relative_eq!(
            partial_mutual_information(n_ij, x_i, y_j, n),
            expected,
            epsilon = 1e-9,
            max_relative = 1e-9
        );
    }
}

#[test]
fn under_represented_cell_is_negative() {
    // Expected joint count is 2.5, observed 1
    assert!(partial_mutual_information(1.0, 5.0, 5.0, 10.0) < 0.0);
}

#[test]
fn perfectly_aligned_cell() {
    // n_ij = x_i = y_j = n / 2: one bit per observation
    assert_relative_eq!(partial_mutual_information(5.0, 5.0, 5.0, 10.0), 5.0, max_relative = 1e-12);
}

#[test]
fn factory_matches_free_function() {
    assert_eq!(
        MutualInformation::partial(3.0, 4.0, 5.0, 10.0).to_bits(),
        partial_mutual_information(3.0, 4.0, 5.0, 10.0).to_bits()
    );
}

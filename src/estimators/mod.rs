// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod approaches;
pub mod mutual_information;
pub mod traits;

pub use traits::{ChanceAdjusted, GlobalValue, OptionalLocalValues};

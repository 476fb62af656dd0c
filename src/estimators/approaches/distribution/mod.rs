// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod binning;
pub mod distribution;

pub use binning::{BinRule, Histogram, bin_count, histogram};
pub use distribution::{
    CrossDistributionEntropy, DistributionAux, DistributionConfig, DistributionEntropy,
};

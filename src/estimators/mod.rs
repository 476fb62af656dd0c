// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod approaches;
pub mod diagnostics;
pub mod entropy;
pub mod error;
pub mod traits;
pub mod utils;

pub use diagnostics::{Degeneracy, EntropyResult};
pub use error::InvalidParameterError;
pub use traits::{DimensionValues, EntropyEstimator, GlobalValue};
pub use utils::LogBase;

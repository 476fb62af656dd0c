// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;

use super::diagnostics::EntropyResult;

pub trait GlobalValue {
    /// Compute and return the global value of the measure.
    fn global_value(&self) -> f64;
}

/// A configured estimator bound to its data.
///
/// Construction validates every parameter, so estimating never fails;
/// degenerate inputs surface as NaN/inf values plus diagnostics.
pub trait EntropyEstimator {
    /// Variant-specific values returned next to the estimate.
    type Auxiliary;

    fn estimate(&self) -> EntropyResult<Self::Auxiliary>;
}

impl<E: EntropyEstimator> GlobalValue for E {
    fn global_value(&self) -> f64 {
        self.estimate().value
    }
}

/// Estimators that produce one value per embedding dimension `0..=m`.
pub trait DimensionValues: EntropyEstimator {
    fn dimension_values(&self) -> Array1<f64>;
}

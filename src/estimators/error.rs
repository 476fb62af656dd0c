// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Parameter validation errors.
//!
//! Every estimator validates its input eagerly at construction time and fails
//! with an [`InvalidParameterError`] before any computation happens. Numeric
//! degeneracy (zero counts, empty bins) is not an error; see
//! [`crate::estimators::diagnostics`].

/// Malformed configuration or input data.
///
/// These are caller errors: they are raised immediately and are never
/// recovered from internally.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidParameterError {
    /// The sequence does not have enough samples.
    #[error("sequence must contain more than {min} samples, got {got}")]
    SequenceTooShort {
        /// Exclusive lower bound on the length.
        min: usize,
        /// Actual length.
        got: usize,
    },

    /// A sample is NaN or infinite.
    #[error("sample {index} is not finite ({value})")]
    NonFiniteSample { index: usize, value: f64 },

    /// An integer parameter that must be strictly positive is zero.
    #[error("`{name}` must be a positive integer")]
    NonPositive { name: &'static str },

    /// The embedding leaves no (or too few) delay vectors.
    #[error(
        "not enough points for m = {m}, tau = {tau} with N = {n} (need more than {required} samples)"
    )]
    InsufficientPoints {
        m: usize,
        tau: usize,
        n: usize,
        required: usize,
    },

    /// A real-valued parameter lies outside its admissible range.
    #[error("`{name}` = {value} is out of range: {expected}")]
    OutOfRange {
        name: &'static str,
        value: f64,
        expected: &'static str,
    },

    /// A method name could not be parsed.
    #[error("unknown {kind} method `{name}` (expected one of: {expected})")]
    UnknownMethod {
        kind: &'static str,
        name: String,
        expected: &'static str,
    },

    /// Shapes or per-channel parameter lists disagree.
    #[error("dimension mismatch for `{name}`: expected {expected}, got {got}")]
    DimensionMismatch {
        name: &'static str,
        expected: usize,
        got: usize,
    },

    /// An operation received no data at all.
    #[error("`{name}` must not be empty")]
    EmptyData { name: &'static str },
}

impl InvalidParameterError {
    pub(crate) fn out_of_range(name: &'static str, value: f64, expected: &'static str) -> Self {
        Self::OutOfRange {
            name,
            value,
            expected,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, InvalidParameterError>;

/// Validate a tolerance/radius: finite and `>= 0`.
pub(crate) fn check_radius(name: &'static str, r: f64) -> Result<f64> {
    if r.is_finite() && r >= 0.0 {
        Ok(r)
    } else {
        Err(InvalidParameterError::out_of_range(name, r, "finite and >= 0"))
    }
}

/// Validate a strictly positive integer.
pub(crate) fn check_positive(name: &'static str, v: usize) -> Result<usize> {
    if v == 0 {
        Err(InvalidParameterError::NonPositive { name })
    } else {
        Ok(v)
    }
}

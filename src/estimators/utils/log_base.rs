// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::estimators::error::{InvalidParameterError, Result};

/// Logarithm base of an entropy value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LogBase {
    /// Natural logarithm (nats).
    #[default]
    Natural,
    /// Arbitrary base `b > 0`, `b != 1`.
    Base(f64),
}

impl LogBase {
    /// Bits.
    pub const BITS: LogBase = LogBase::Base(2.0);

    /// Parse a numeric base. `0` is shorthand for the natural logarithm.
    pub fn new(base: f64) -> Result<Self> {
        if base == 0.0 {
            return Ok(Self::Natural);
        }
        if !base.is_finite() || base <= 0.0 || base == 1.0 {
            return Err(InvalidParameterError::out_of_range(
                "log_base",
                base,
                "0 (natural log) or finite, > 0 and != 1",
            ));
        }
        Ok(Self::Base(base))
    }

    /// Re-check a value that may have been built from the public variant.
    pub(crate) fn validate(self) -> Result<Self> {
        match self {
            Self::Natural => Ok(self),
            Self::Base(b) => Self::new(b),
        }
    }

    /// `ln(base)`, the divisor turning nats into this base.
    pub fn ln(&self) -> f64 {
        match self {
            Self::Natural => 1.0,
            Self::Base(b) => b.ln(),
        }
    }

    /// Logarithm of `x` in this base.
    pub fn log(&self, x: f64) -> f64 {
        x.ln() / self.ln()
    }
}

impl TryFrom<f64> for LogBase {
    type Error = InvalidParameterError;

    fn try_from(base: f64) -> Result<Self> {
        Self::new(base)
    }
}

// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Matching-based estimators: sample entropy (univariate, cross, multivariate),
// cosine similarity entropy and their shared counting machinery.

pub mod batch;
pub mod cosine;
pub mod counter;
pub mod cross_sample;
pub mod multivariate;
pub mod sample;
pub mod variance;

use crate::estimators::error::{Result, check_radius};

/// Tolerance radius `r`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tolerance {
    /// Fixed radius.
    Absolute(f64),
    /// Fraction of the data's standard deviation, resolved per call.
    StdFraction(f64),
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::StdFraction(0.2)
    }
}

impl Tolerance {
    pub(crate) fn validate(self) -> Result<Self> {
        match self {
            Self::Absolute(v) | Self::StdFraction(v) => check_radius("r", v)?,
        };
        Ok(self)
    }

    /// Concrete radius for data with standard deviation `std`.
    pub fn resolve(&self, std: f64) -> f64 {
        match *self {
            Self::Absolute(r) => r,
            Self::StdFraction(f) => f * std,
        }
    }
}

/// How one-sample seed matches are found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchStrategy {
    /// kd-tree for series of at least [`MatchStrategy::INDEX_THRESHOLD`] samples.
    #[default]
    Auto,
    BruteForce,
    KdTree,
}

impl MatchStrategy {
    pub const INDEX_THRESHOLD: usize = 4096;

    pub(crate) fn use_index(&self, n: usize) -> bool {
        match self {
            Self::Auto => n >= Self::INDEX_THRESHOLD,
            Self::BruteForce => false,
            Self::KdTree => true,
        }
    }
}

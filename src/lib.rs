// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # embedding-entropy
//!
//! Entropy measures of regularity and complexity for real-valued time series,
//! built on delay (Takens) embedding and tolerance-based matching of delay
//! vectors.
//!
//! ## Quick Start
//!
//! ```rust
//! use embedding_entropy::estimators::entropy::Entropy;
//! use embedding_entropy::estimators::traits::{EntropyEstimator, GlobalValue};
//! use embedding_entropy::estimators::approaches::SampleEntropyConfig;
//!
//! let x: Vec<f64> = (0..200).map(|i| (i as f64 * 0.1).sin()).collect();
//!
//! // Sample entropy with m = 2, tau = 1, r = 0.2 * std
//! let est = Entropy::sample(x.clone(), SampleEntropyConfig::default()).unwrap();
//! let result = est.estimate();
//! assert!(result.value.is_finite());
//!
//! // Only the scalar
//! let h = est.global_value();
//! assert_eq!(h, result.value);
//! ```
//!
//! ## Estimators
//!
//! | Estimator | Pairs compared | Value |
//! |-----------|----------------|-------|
//! | [`SampleEntropy`](estimators::approaches::SampleEntropy) | delay vectors of one series | `-ln(A / B)` |
//! | [`CrossSampleEntropy`](estimators::approaches::CrossSampleEntropy) | vectors of `x` against vectors of `y` | `-ln(A / B)` |
//! | [`DistributionEntropy`](estimators::approaches::DistributionEntropy) | all pairwise distances of one series | histogram entropy |
//! | [`CrossDistributionEntropy`](estimators::approaches::CrossDistributionEntropy) | all distances between two series | histogram entropy |
//! | [`MultivariateSampleEntropy`](estimators::approaches::MultivariateSampleEntropy) | composite multichannel vectors | `-ln(B1 / B0)` |
//! | [`MultivariateCosineEntropy`](estimators::approaches::MultivariateCosineEntropy) | composite vectors, angular distance | binary entropy of `B1` |
//! | [`SymbolicDynamicEntropy`](estimators::approaches::SymbolicDynamicEntropy) | symbol patterns and their successors | pattern + transition entropy |
//!
//! ## Degenerate values
//!
//! Invalid parameters are rejected with an
//! [`InvalidParameterError`](estimators::error::InvalidParameterError) when an
//! estimator is built. Degenerate data (no matching pairs, constant series,
//! empty bins) does not fail: the value follows IEEE-754 (NaN or infinity) and
//! every such event is listed in
//! [`EntropyResult::diagnostics`](estimators::diagnostics::EntropyResult) and
//! logged through `tracing` at warn level.
//!
//! ## Feature Flags
//!
//! - `parallel`: evaluate [`SampleEntropyBatchRows`](estimators::approaches::SampleEntropyBatchRows) rows on a rayon pool
//! - `serde`: `Serialize`/`Deserialize` for configuration types

pub mod estimators;

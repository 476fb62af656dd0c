// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod common_nd;
pub mod distribution;
pub mod estimate;
pub mod matching;
pub mod symbolic;

// Unified re-exports so users can import
// embedding_entropy::estimators::approaches::* ergonomically.
pub use common_nd::dataset::{MultivariateData, Sequence};
pub use common_nd::embedding::{EmbeddingParameters, MultivariateEmbedding};

// Matching
pub use matching::batch::SampleEntropyBatchRows;
pub use matching::cosine::{MultivariateCosineEntropy, MultivariateCosineEntropyConfig};
pub use matching::cross_sample::CrossSampleEntropy;
pub use matching::multivariate::{
    ChannelNormalization, MultivariateMatchAux, MultivariateSampleEntropy,
    MultivariateSampleEntropyConfig,
};
pub use matching::sample::{SampleEntropy, SampleEntropyAux, SampleEntropyConfig};
pub use matching::{MatchStrategy, Tolerance};

// Distribution and symbolic
pub use distribution::{
    BinRule, CrossDistributionEntropy, DistributionAux, DistributionConfig, DistributionEntropy,
};
pub use symbolic::{
    KMeansOptions, SymbolicDynamicAux, SymbolicDynamicConfig, SymbolicDynamicEntropy,
    SymbolizationMethod,
};

// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::BTreeMap;

use ndarray::{Array1, Array2};

use super::symbolize::{KMeansOptions, SymbolizationMethod, symbolize_with};
use crate::estimators::approaches::common_nd::dataset::Sequence;
use crate::estimators::approaches::common_nd::embedding::EmbeddingParameters;
use crate::estimators::approaches::estimate::shannon_entropy;
use crate::estimators::diagnostics::{Degeneracy, Diagnostics, EntropyResult};
use crate::estimators::error::{InvalidParameterError, Result};
use crate::estimators::traits::EntropyEstimator;
use crate::estimators::utils::LogBase;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SymbolicDynamicConfig {
    /// Embedding dimension, at least 2.
    pub m: usize,
    pub tau: usize,
    /// Number of symbols, at least 2.
    pub c: usize,
    pub method: SymbolizationMethod,
    pub kmeans: KMeansOptions,
    pub log_base: LogBase,
    /// Divide by `log(c^(m+1))`.
    pub normalize: bool,
}

impl Default for SymbolicDynamicConfig {
    fn default() -> Self {
        Self {
            m: 2,
            tau: 1,
            c: 3,
            method: SymbolizationMethod::Mep,
            kmeans: KMeansOptions::default(),
            log_base: LogBase::Natural,
            normalize: true,
        }
    }
}

impl SymbolicDynamicConfig {
    pub fn with_embedding(mut self, m: usize, tau: usize) -> Self {
        self.m = m;
        self.tau = tau;
        self
    }

    pub fn with_symbols(mut self, c: usize, method: SymbolizationMethod) -> Self {
        self.c = c;
        self.method = method;
        self
    }

    pub fn with_kmeans(mut self, kmeans: KMeansOptions) -> Self {
        self.kmeans = kmeans;
        self
    }

    pub fn with_base(mut self, log_base: LogBase) -> Self {
        self.log_base = log_base;
        self
    }

    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SymbolicDynamicAux {
    /// Symbol of each sample, in `1..=c`.
    pub symbols: Array1<usize>,
    /// Unique symbol patterns, one per row, in lexicographic order.
    pub patterns: Array2<usize>,
    pub pattern_probabilities: Array1<f64>,
    /// Row `p`, column `s - 1`: probability that symbol `s` follows pattern `p`.
    pub transition_probabilities: Array2<f64>,
}

struct PatternStats {
    count: usize,
    next: Vec<usize>,
}

/// Symbolic dynamic entropy.
///
/// The series is mapped onto `c` symbols and embedded; the estimate is the
/// Shannon entropy of the pattern distribution plus the expected entropy of the
/// symbol that follows each pattern.
#[derive(Debug, Clone)]
pub struct SymbolicDynamicEntropy {
    sequence: Sequence,
    params: EmbeddingParameters,
    config: SymbolicDynamicConfig,
}

impl SymbolicDynamicEntropy {
    pub fn new(sequence: Sequence, config: SymbolicDynamicConfig) -> Result<Self> {
        let params = EmbeddingParameters::new(config.m, config.tau)?;
        if config.m < 2 {
            return Err(InvalidParameterError::out_of_range("m", config.m as f64, "an integer > 1"));
        }
        if config.c < 2 {
            return Err(InvalidParameterError::out_of_range("c", config.c as f64, "an integer > 1"));
        }
        if config.kmeans.tolerance.is_nan() || config.kmeans.tolerance < 0.0 {
            return Err(InvalidParameterError::out_of_range(
                "tolerance",
                config.kmeans.tolerance,
                ">= 0",
            ));
        }
        config.log_base.validate()?;
        params.require_extension(sequence.len())?;
        Ok(Self {
            sequence,
            params,
            config,
        })
    }
}

impl EntropyEstimator for SymbolicDynamicEntropy {
    type Auxiliary = SymbolicDynamicAux;

    fn estimate(&self) -> EntropyResult<SymbolicDynamicAux> {
        let mut diagnostics = Diagnostics::new();
        let (m, tau, c) = (self.params.m(), self.params.tau(), self.config.c);
        let (method, kmeans) = (self.config.method, self.config.kmeans);
        let symbols = symbolize_with(&self.sequence, c, method, kmeans, &mut diagnostics)
            .map(|s| s.symbols)
            .unwrap_or_else(|_| unreachable!("c is checked at construction"));
        let z = symbols.as_slice().unwrap_or_else(|| unreachable!("symbols are contiguous"));
        let n = z.len();
        let n_vectors = n - (m - 1) * tau;
        let n_transitions = n - m * tau;

        let mut table: BTreeMap<Vec<usize>, PatternStats> = BTreeMap::new();
        for i in 0..n_vectors {
            let pattern: Vec<usize> = (0..m).map(|k| z[i + k * tau]).collect();
            let stats = table.entry(pattern).or_insert_with(|| PatternStats {
                count: 0,
                next: vec![0; c],
            });
            stats.count += 1;
            if i < n_transitions {
                stats.next[z[i + m * tau] - 1] += 1;
            }
        }
        tracing::debug!(
            patterns = table.len(),
            n_vectors,
            method = ?self.config.method,
            "symbolic dynamics"
        );

        let n_patterns = table.len();
        let mut patterns = Array2::<usize>::zeros((n_patterns, m));
        let mut pattern_probabilities = Array1::<f64>::zeros(n_patterns);
        let mut transition_probabilities = Array2::<f64>::zeros((n_patterns, c));
        let mut conditional = 0.0;
        let mut without_transitions = 0;
        for (p, (pattern, stats)) in table.iter().enumerate() {
            for (k, &s) in pattern.iter().enumerate() {
                patterns[(p, k)] = s;
            }
            let prob = stats.count as f64 / n_vectors as f64;
            pattern_probabilities[p] = prob;

            let total: usize = stats.next.iter().sum();
            if total == 0 {
                without_transitions += 1;
                continue;
            }
            let row: Vec<f64> = stats.next.iter().map(|&t| t as f64 / total as f64).collect();
            conditional += prob * shannon_entropy(&row, self.config.log_base);
            for (s, q) in row.into_iter().enumerate() {
                transition_probabilities[(p, s)] = q;
            }
        }
        if without_transitions > 0 {
            diagnostics.push(Degeneracy::NoTransitions {
                patterns: without_transitions,
            });
        }

        let probs = pattern_probabilities.as_slice().unwrap_or_default();
        let mut value = shannon_entropy(probs, self.config.log_base) + conditional;
        if self.config.normalize {
            value /= (m + 1) as f64 * self.config.log_base.log(c as f64);
        }
        EntropyResult::new(
            value,
            SymbolicDynamicAux {
                symbols,
                patterns,
                pattern_probabilities,
                transition_probabilities,
            },
            diagnostics,
        )
    }
}

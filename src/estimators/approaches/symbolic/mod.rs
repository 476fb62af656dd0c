// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Symbol-based estimators: symbolization of real-valued series and the
// symbolic dynamic entropy built on it.

pub mod symbolic_dynamic;
pub mod symbolize;

pub use symbolic_dynamic::{SymbolicDynamicAux, SymbolicDynamicConfig, SymbolicDynamicEntropy};
pub use symbolize::{KMeansOptions, Symbolization, SymbolizationMethod, symbolize, symbolize_with};

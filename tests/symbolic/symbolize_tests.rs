// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::test_helpers::{gaussian_series, uniform_series};
use embedding_entropy::estimators::approaches::Sequence;
use embedding_entropy::estimators::approaches::symbolic::{SymbolizationMethod, symbolize};
use embedding_entropy::estimators::diagnostics::Diagnostics;
use embedding_entropy::estimators::InvalidParameterError;

const METHODS: [SymbolizationMethod; 4] = [
    SymbolizationMethod::Linear,
    SymbolizationMethod::Uniform,
    SymbolizationMethod::KMeans,
    SymbolizationMethod::Mep,
];

fn histogram_of(symbols: &[usize], c: usize) -> Vec<usize> {
    let mut counts = vec![0; c];
    for &s in symbols {
        counts[s - 1] += 1;
    }
    counts
}

#[test]
fn symbols_stay_in_range() {
    let x = Sequence::new(uniform_series(500, -3.0, 3.0, 8)).unwrap();
    for method in METHODS {
        for c in [2, 3, 6] {
            let mut diag = Diagnostics::new();
            let out = symbolize(&x, c, method, &mut diag).unwrap();
            assert_eq!(out.num_symbols, c);
            assert_eq!(out.symbols.len(), 500);
            assert!(out.symbols.iter().all(|&s| (1..=c).contains(&s)), "{method:?}, c = {c}");
        }
    }
}

#[test]
fn rank_based_methods_balance_symbols() {
    let x = Sequence::new(gaussian_series(300, 2)).unwrap();
    for method in [SymbolizationMethod::Mep, SymbolizationMethod::Uniform] {
        let mut diag = Diagnostics::new();
        let out = symbolize(&x, 4, method, &mut diag).unwrap();
        assert_eq!(histogram_of(out.symbols.as_slice().unwrap(), 4), vec![75; 4], "{method:?}");
        assert!(diag.is_empty());
    }
}

#[test]
fn symbols_preserve_order() {
    let x = Sequence::new(gaussian_series(200, 3)).unwrap();
    let v = x.as_slice();
    for method in METHODS {
        let mut diag = Diagnostics::new();
        let s = symbolize(&x, 5, method, &mut diag).unwrap().symbols;
        for i in 0..v.len() {
            for j in 0..v.len() {
                if v[i] < v[j] {
                    assert!(s[i] <= s[j], "{method:?}");
                }
            }
        }
    }
}

#[test]
fn unknown_method_and_single_symbol_fail() {
    assert!(matches!(
        "equiprobable".parse::<SymbolizationMethod>(),
        Err(InvalidParameterError::UnknownMethod { .. })
    ));
    let x = Sequence::new(gaussian_series(30, 0)).unwrap();
    for c in [0, 1] {
        let mut diag = Diagnostics::new();
        assert!(symbolize(&x, c, SymbolizationMethod::Mep, &mut diag).is_err());
    }
}

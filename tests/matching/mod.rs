// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Module containing tests for the tolerance-matching estimators.
mod batch_tests;
mod cross_sample_tests;
mod multivariate_tests;
mod sample_tests;

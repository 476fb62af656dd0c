// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Validated series, delay embedding and delay-vector distances shared by all
// estimators.

pub mod dataset;
pub mod distance;
pub mod embedding;

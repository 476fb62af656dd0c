// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Small numeric helpers shared by all estimators.

pub mod log_base;
pub mod stats;

pub use log_base::LogBase;

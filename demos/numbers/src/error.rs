// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for the demonstration drivers.

use intvec::IntVectorError;
use thiserror::Error;

/// Errors that stop a demonstration program.
///
/// Allocation failures after the first one are not errors: the dependent stage
/// is skipped and reported through [`Stage`](crate::Stage).
#[derive(Debug, Error)]
pub enum DemoError {
    /// The very first allocation of the program failed.
    #[error("initial allocation failed: {0}")]
    InitialAllocation(#[source] IntVectorError),

    /// Writing to stdout or the output file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}


// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for intvec.

use thiserror::Error;

/// Error type for `IntVector` and `RawBuffer` operations.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum IntVectorError {
    /// The allocator could not provide a block of the requested size.
    ///
    /// Also returned when the requested element count cannot be expressed as a
    /// valid allocation size (byte count above `isize::MAX`). The operation that
    /// reported it has left its target unchanged.
    #[error("allocation failure: allocator could not satisfy the request")]
    AllocationFailure,
}

// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

mod int_vector;

#[cfg(target_os = "linux")]
mod utils;

/// Element count with a valid layout (byte size exactly fits `isize::MAX`) that no
/// allocator can satisfy.
pub(crate) const UNSATISFIABLE_LEN: usize = isize::MAX as usize / core::mem::size_of::<i32>();

// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! RawBuffer - exact-size `i32` block taken straight from the global allocator.
//!
//! Acquired by `try_resize`, released by `release` or on drop.

use alloc::alloc::{Layout, alloc, dealloc, realloc};
use core::ptr::NonNull;

use crate::error::IntVectorError;

/// An exact-size heap block of `i32` with an explicit empty state.
///
/// The allocated element count always equals [`len`](Self::len). A length of zero
/// means no allocation is held. Slots created by growth are zero-filled, so every
/// element inside `len` is initialized.
///
/// # Example
///
/// ```rust
/// use intvec::{IntVectorError, RawBuffer};
///
/// fn example() -> Result<(), IntVectorError> {
///     let mut buffer = RawBuffer::with_len(20)?;
///     buffer.as_mut_slice()[0] = 7;
///
///     buffer.try_resize(40)?;
///     assert_eq!(buffer.len(), 40);
///     assert_eq!(buffer.as_slice()[0], 7);
///
///     buffer.release();
///     assert!(buffer.as_ptr().is_none());
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub struct RawBuffer {
    ptr: Option<NonNull<i32>>,
    len: usize,
}

impl RawBuffer {
    /// Creates an empty buffer. Does not allocate.
    pub const fn new() -> Self {
        Self { ptr: None, len: 0 }
    }

    /// Allocates a buffer of exactly `len` zeroed integers.
    ///
    /// # Errors
    ///
    /// Returns [`IntVectorError::AllocationFailure`] if the allocator refuses the request.
    pub fn with_len(len: usize) -> Result<Self, IntVectorError> {
        let mut buffer = Self::new();
        buffer.try_resize(len)?;

        Ok(buffer)
    }

    fn layout(len: usize) -> Result<Layout, IntVectorError> {
        Layout::array::<i32>(len).map_err(|_| IntVectorError::AllocationFailure)
    }

    /// Number of integers held (and allocated).
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no block is held.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Address of the first element, `None` when empty.
    #[inline]
    pub fn as_ptr(&self) -> Option<NonNull<i32>> {
        self.ptr
    }

    /// Changes the block to hold exactly `new_len` integers.
    ///
    /// Values below `min(len, new_len)` are preserved. Grown slots are zeroed.
    /// `new_len == 0` releases the block.
    ///
    /// # Errors
    ///
    /// Returns [`IntVectorError::AllocationFailure`] if the allocator cannot provide
    /// the new block or the byte size would exceed `isize::MAX`. The old block, its
    /// address and its length are untouched in that case.
    pub fn try_resize(&mut self, new_len: usize) -> Result<(), IntVectorError> {
        if new_len == 0 {
            self.release();
            return Ok(());
        }

        if new_len == self.len {
            return Ok(());
        }

        let new_layout = Self::layout(new_len)?;

        let raw = match self.ptr {
            None => unsafe {
                // SAFETY (PRECONDITIONS ARE MET): new_layout has non-zero size (new_len > 0)
                alloc(new_layout)
            },
            Some(ptr) => {
                let old_layout = Self::layout(self.len)?;
                unsafe {
                    // SAFETY (PRECONDITIONS ARE MET): ptr was allocated by the global allocator
                    // with old_layout; new size is non-zero and valid for i32 alignment.
                    realloc(ptr.as_ptr().cast(), old_layout, new_layout.size())
                }
            }
        };

        // realloc leaves the old block valid on failure, so self stays intact.
        let new_ptr = NonNull::new(raw.cast::<i32>()).ok_or(IntVectorError::AllocationFailure)?;

        if new_len > self.len {
            unsafe {
                // SAFETY (PRECONDITIONS ARE MET): slots [len, new_len) lie inside the new block
                new_ptr
                    .as_ptr()
                    .add(self.len)
                    .write_bytes(0, new_len - self.len);
            }
        }

        self.ptr = Some(new_ptr);
        self.len = new_len;

        Ok(())
    }

    /// Frees the block and resets to empty. Idempotent.
    pub fn release(&mut self) {
        if let Some(ptr) = self.ptr.take() {
            // Layout was valid when the block was allocated.
            if let Ok(layout) = Self::layout(self.len) {
                unsafe {
                    // SAFETY (PRECONDITIONS ARE MET): ptr was allocated with this exact layout
                    dealloc(ptr.as_ptr().cast(), layout);
                }
            }
        }

        self.len = 0;
    }

    /// Returns the held integers as a slice (empty when no block is held).
    pub fn as_slice(&self) -> &[i32] {
        match self.ptr {
            None => &[],
            Some(ptr) => unsafe {
                // SAFETY (PRECONDITIONS ARE MET): ptr holds exactly len initialized i32
                core::slice::from_raw_parts(ptr.as_ptr(), self.len)
            },
        }
    }

    /// Returns the held integers as a mutable slice (empty when no block is held).
    pub fn as_mut_slice(&mut self) -> &mut [i32] {
        match self.ptr {
            None => &mut [],
            Some(ptr) => unsafe {
                // SAFETY (PRECONDITIONS ARE MET): ptr holds exactly len initialized i32,
                // and &mut self guarantees exclusive access
                core::slice::from_raw_parts_mut(ptr.as_ptr(), self.len)
            },
        }
    }
}

impl Default for RawBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for RawBuffer {
    fn drop(&mut self) {
        self.release();
    }
}

// Safety: RawBuffer exclusively owns its block and hands out references only through &self / &mut self
unsafe impl Send for RawBuffer {}
unsafe impl Sync for RawBuffer {}

impl core::fmt::Debug for RawBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RawBuffer")
            .field("len", &self.len)
            .field("data", &self.as_slice())
            .finish()
    }
}

// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Heap-allocated vector handles.
//!
//! For callers that keep the handle itself on the heap: `new_boxed` allocates it
//! fallibly, `delete` releases buffer and handle and empties the caller's slot.

use alloc::alloc::{Layout, alloc};
use alloc::boxed::Box;
use core::ptr::NonNull;

use crate::error::IntVectorError;
use crate::int_vector::IntVector;

impl IntVector {
    /// Allocates an empty vector handle on the heap.
    ///
    /// # Errors
    ///
    /// Returns [`IntVectorError::AllocationFailure`] if the handle cannot be allocated.
    ///
    /// # Example
    ///
    /// ```rust
    /// use intvec::{IntVector, IntVectorError};
    ///
    /// fn example() -> Result<(), IntVectorError> {
    ///     let mut handle = Some(IntVector::new_boxed()?);
    ///
    ///     if let Some(vec) = handle.as_deref_mut() {
    ///         vec.push(1000)?;
    ///     }
    ///
    ///     IntVector::delete(&mut handle);
    ///     assert!(handle.is_none());
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn new_boxed() -> Result<Box<Self>, IntVectorError> {
        let layout = Layout::new::<Self>();

        let raw = unsafe {
            // SAFETY (PRECONDITIONS ARE MET): IntVector is never zero-sized
            alloc(layout)
        };
        let ptr = NonNull::new(raw.cast::<Self>()).ok_or(IntVectorError::AllocationFailure)?;

        unsafe {
            // SAFETY (PRECONDITIONS ARE MET): ptr is a fresh, properly aligned block for
            // one IntVector allocated by the global allocator with Layout::new::<Self>(),
            // which is exactly what Box::from_raw expects.
            ptr.as_ptr().write(Self::new());
            Ok(Box::from_raw(ptr.as_ptr()))
        }
    }

    /// Releases the vector's buffer and the handle, leaving `handle` as `None`.
    ///
    /// Does nothing if `handle` is already `None`.
    pub fn delete(handle: &mut Option<Box<Self>>) {
        if let Some(mut vec) = handle.take() {
            vec.clear();
        }
    }
}

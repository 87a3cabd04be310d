// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::ops::{Deref, DerefMut};
use core::ptr::NonNull;

use crate::error::IntVectorError;
use crate::progression::assign_progression;
use crate::raw_buffer::RawBuffer;

#[cfg(any(test, feature = "test-utils"))]
use crate::behaviour::IntVectorBehaviour;

/// Which operation is about to ask the allocator for a new block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AllocationSite {
    Resize,
    Push,
    Pop,
}

/// Growable vector of `i32` whose allocated size always equals its length.
///
/// Every mutation goes through a single exact reallocation: `push` grows by one,
/// `pop` shrinks by one, `resize` jumps to any size. There is no growth factor and
/// no spare capacity.
///
/// A failed operation returns [`IntVectorError::AllocationFailure`] and leaves the
/// vector unchanged: same buffer address, same length, same values.
///
/// # Example
///
/// ```rust
/// use intvec::{IntVector, IntVectorError};
///
/// fn example() -> Result<(), IntVectorError> {
///     let mut vec = IntVector::new();
///     vec.resize(3)?;
///     vec.assign(5, -6);
///
///     assert_eq!(vec.as_slice(), &[5, -1, -7]);
///
///     vec.clear();
///     assert!(vec.begin().is_none());
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub struct IntVector {
    buffer: RawBuffer,
    #[cfg(any(test, feature = "test-utils"))]
    behaviour: IntVectorBehaviour,
    #[cfg(any(test, feature = "test-utils"))]
    allocation_requests: usize,
}

impl IntVector {
    /// Creates a new empty vector. Does not allocate.
    pub const fn new() -> Self {
        Self {
            buffer: RawBuffer::new(),
            #[cfg(any(test, feature = "test-utils"))]
            behaviour: IntVectorBehaviour::None,
            #[cfg(any(test, feature = "test-utils"))]
            allocation_requests: 0,
        }
    }

    /// Resets this handle to a freshly created empty vector.
    ///
    /// Any buffer still held is released first.
    pub fn init(&mut self) {
        *self = Self::new();
    }

    /// Returns the number of integers in the vector.
    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns `true` if the vector holds no integers (and no buffer).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    fn reallocate(
        &mut self,
        new_len: usize,
        #[allow(unused)] site: AllocationSite,
    ) -> Result<(), IntVectorError> {
        #[cfg(any(test, feature = "test-utils"))]
        {
            self.allocation_requests += 1;

            if self.behaviour.should_fail(site, self.allocation_requests) {
                return Err(IntVectorError::AllocationFailure);
            }
        }

        self.buffer.try_resize(new_len)
    }

    /// Resizes the vector to exactly `new_len` integers.
    ///
    /// Values below `min(len, new_len)` are preserved. Values of grown slots are
    /// unspecified (currently zero). `new_len == 0` is equivalent to [`clear`](Self::clear)
    /// and always succeeds; `new_len == len()` is a no-op and always succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`IntVectorError::AllocationFailure`] if the new buffer cannot be
    /// obtained. The vector is unchanged.
    pub fn resize(&mut self, new_len: usize) -> Result<(), IntVectorError> {
        if new_len == 0 {
            self.clear();
            return Ok(());
        }

        // Same length never reaches the allocator
        if new_len == self.len() {
            return Ok(());
        }

        self.reallocate(new_len, AllocationSite::Resize)
    }

    /// Appends `value` after the last element.
    ///
    /// # Errors
    ///
    /// Returns [`IntVectorError::AllocationFailure`] if the vector cannot grow by one.
    /// The vector is unchanged and `value` is not stored.
    ///
    /// # Example
    ///
    /// ```rust
    /// use intvec::{IntVector, IntVectorError};
    ///
    /// fn example() -> Result<(), IntVectorError> {
    ///     let mut vec = IntVector::new();
    ///     vec.push(1)?;
    ///     vec.push(2)?;
    ///
    ///     assert_eq!(vec.as_slice(), &[1, 2]);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn push(&mut self, value: i32) -> Result<(), IntVectorError> {
        let new_len = self
            .len()
            .checked_add(1)
            .ok_or(IntVectorError::AllocationFailure)?;

        self.reallocate(new_len, AllocationSite::Push)?;

        if let Some(last) = self.buffer.as_mut_slice().last_mut() {
            *last = value;
        }

        Ok(())
    }

    /// Removes the last element.
    ///
    /// A vector of length one or zero is cleared entirely, which always succeeds.
    ///
    /// # Errors
    ///
    /// Shrinking never needs new memory, but if the allocator still reports
    /// [`IntVectorError::AllocationFailure`] the vector is left unchanged.
    pub fn pop(&mut self) -> Result<(), IntVectorError> {
        if self.len() <= 1 {
            self.clear();
            return Ok(());
        }

        self.reallocate(self.len() - 1, AllocationSite::Pop)
    }

    /// Overwrites every element with `start + i * step`, in index order.
    ///
    /// The vector must already have the desired length. Arithmetic wraps on overflow.
    /// No-op on an empty vector.
    pub fn assign(&mut self, start: i32, step: i32) {
        assign_progression(self.buffer.as_mut_slice(), start, step);
    }

    /// Address of the first element, `None` when empty.
    #[inline]
    pub fn begin(&self) -> Option<NonNull<i32>> {
        self.buffer.as_ptr()
    }

    /// Position one past the last element, `None` when empty.
    ///
    /// Only meaningful as an exclusive bound together with [`begin`](Self::begin);
    /// it must never be dereferenced.
    #[inline]
    pub fn end(&self) -> Option<NonNull<i32>> {
        self.buffer.as_ptr().map(|begin| unsafe {
            // SAFETY (PRECONDITIONS ARE MET): one past the end of the same allocation
            begin.add(self.len())
        })
    }

    /// The last element, `None` when empty.
    #[inline]
    pub fn last(&self) -> Option<&i32> {
        self.as_slice().last()
    }

    /// Mutable reference to the last element, `None` when empty.
    #[inline]
    pub fn last_mut(&mut self) -> Option<&mut i32> {
        self.as_mut_slice().last_mut()
    }

    /// Returns an immutable slice view of the vector.
    pub fn as_slice(&self) -> &[i32] {
        self.buffer.as_slice()
    }

    /// Returns a mutable slice view of the vector.
    pub fn as_mut_slice(&mut self) -> &mut [i32] {
        self.buffer.as_mut_slice()
    }

    /// Releases the buffer and resets the vector to empty. Idempotent.
    pub fn clear(&mut self) {
        self.buffer.release();
    }

    /// Changes the test behaviour for this vector and restarts the request counter.
    ///
    /// This is only available with the `test-utils` feature and allows injecting
    /// allocation failures for testing error handling paths.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn change_behaviour(&mut self, behaviour: IntVectorBehaviour) {
        self.behaviour = behaviour;
        self.allocation_requests = 0;
    }
}

impl Default for IntVector {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for IntVector {
    type Target = [i32];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl DerefMut for IntVector {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<'a> IntoIterator for &'a IntVector {
    type Item = &'a i32;
    type IntoIter = core::slice::Iter<'a, i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl PartialEq for IntVector {
    fn eq(&self, other: &Self) -> bool {
        // Skip behaviour (test-only metadata)
        self.as_slice() == other.as_slice()
    }
}

impl Eq for IntVector {}

impl core::fmt::Debug for IntVector {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("IntVector")
            .field("len", &self.len())
            .field("data", &self.as_slice())
            .finish()
    }
}

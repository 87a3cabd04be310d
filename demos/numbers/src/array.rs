// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Raw buffer demonstration: allocate, fill, grow, fill the tail, release.

use std::io::Write;

use intvec::{Dump, RawBuffer, assign_progression};

use crate::Stage;
use crate::error::DemoError;

/// Integers allocated by the first stage.
pub const INITIAL_LEN: usize = 20;
/// Integers held after the buffer is grown.
pub const GROWN_LEN: usize = 40;

/// A raw integer buffer walked through the two demonstration stages.
///
/// The buffer is released when the demo is dropped.
///
/// # Example
///
/// ```rust
/// use numbers_demo::{ArrayDemo, DemoError, GROWN_LEN, INITIAL_LEN};
///
/// fn example() -> Result<(), DemoError> {
///     let mut stdout = Vec::new();
///     let mut file = Vec::new();
///
///     let mut demo = ArrayDemo::start(INITIAL_LEN, &mut stdout)?;
///     let stage = demo.grow(GROWN_LEN, &mut stdout, &mut file)?;
///
///     assert!(stage.is_completed());
///     assert_eq!(demo.values()[INITIAL_LEN - 1], 38);
///     assert_eq!(demo.values()[GROWN_LEN - 1], -38);
///     Ok(())
/// }
/// # example().unwrap();
/// ```
#[derive(Debug)]
pub struct ArrayDemo {
    data: RawBuffer,
}

impl ArrayDemo {
    /// Allocates `initial_len` integers, fills them with `0, 2, 4, ...` and dumps
    /// them to `stdout`.
    ///
    /// # Errors
    ///
    /// [`DemoError::InitialAllocation`] if the buffer cannot be allocated (nothing is
    /// written), [`DemoError::Io`] if the dump cannot be written.
    pub fn start<O>(initial_len: usize, stdout: &mut O) -> Result<Self, DemoError>
    where
        O: Write + ?Sized,
    {
        let mut data = RawBuffer::with_len(initial_len).map_err(DemoError::InitialAllocation)?;

        assign_progression(data.as_mut_slice(), 0, 2);
        Dump(data.as_slice()).print_to(stdout)?;

        Ok(Self { data })
    }

    /// Grows the buffer to `grown_len` integers, fills only the new tail with
    /// `0, -2, -4, ...` and dumps the whole buffer to `stdout` and `file`.
    ///
    /// If the buffer cannot grow, nothing is written and [`Stage::Skipped`] is
    /// returned; the buffer keeps its previous contents.
    pub fn grow<O, F>(
        &mut self,
        grown_len: usize,
        stdout: &mut O,
        file: &mut F,
    ) -> Result<Stage, DemoError>
    where
        O: Write + ?Sized,
        F: Write + ?Sized,
    {
        let filled = self.data.len();

        if self.data.try_resize(grown_len).is_err() {
            return Ok(Stage::Skipped);
        }

        if let Some(tail) = self.data.as_mut_slice().get_mut(filled..) {
            assign_progression(tail, 0, -2);
        }

        let dump = Dump(self.data.as_slice());
        dump.print_to(stdout)?;
        dump.print_to(file)?;

        Ok(Stage::Completed)
    }

    /// Current contents of the buffer.
    pub fn values(&self) -> &[i32] {
        self.data.as_slice()
    }
}

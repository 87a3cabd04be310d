// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Demonstration drivers for intvec.
//!
//! Two programs share the dump format and the `numbers.txt` output file:
//!
//! - `array-demo` works on a bare [`RawBuffer`](intvec::RawBuffer): allocate 20
//!   integers, grow to 40, fill the new tail without touching the first half.
//! - `vector-demo` works on [`IntVector`](intvec::IntVector): one vector held by
//!   value, one boxed handle, resize/assign/pop/push and dump both.
//!
//! The drivers are generic over their sinks so they can run against in-memory
//! writers; the binaries only wire up stdout, the output file and the exit code.

mod array;
mod error;
mod vector;

#[cfg(test)]
mod tests;

pub use array::{ArrayDemo, GROWN_LEN, INITIAL_LEN};
pub use error::DemoError;
pub use vector::{VectorDemoOutcome, run_vector_demo};

/// File both demos write their second dump to, in the working directory.
pub const OUTPUT_FILE: &str = "numbers.txt";

/// Whether a stage that depends on an allocation ran.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum Stage {
    /// The allocation succeeded and the stage ran.
    Completed,
    /// The allocation failed; the stage was skipped and earlier output kept.
    #[default]
    Skipped,
}

impl Stage {
    /// Returns `true` if the stage ran.
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl<E> From<Result<(), E>> for Stage {
    fn from(result: Result<(), E>) -> Self {
        match result {
            Ok(()) => Self::Completed,
            Err(_) => Self::Skipped,
        }
    }
}

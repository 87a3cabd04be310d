// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Exact-size integer vector over a manually managed heap buffer.
//!
//! `IntVector` owns a contiguous block of `i32` whose allocated element count is
//! always equal to its length. There is no spare capacity: every `resize`, `push`
//! and `pop` asks the allocator for a block of exactly the new size.
//!
//! # Core Guarantees
//!
//! - **Explicit empty state**: a vector of length zero holds no allocation at all.
//! - **Fallible growth**: operations that need memory return
//!   [`IntVectorError::AllocationFailure`] instead of aborting.
//! - **No partial mutation**: a failed operation leaves the vector exactly as it was
//!   (same buffer address, same length, same values).
//! - **Scoped release**: the buffer is freed by `clear()` or automatically on drop,
//!   on every exit path.
//!
//! # Example
//!
//! ```rust
//! use intvec::{IntVector, IntVectorError};
//!
//! fn example() -> Result<(), IntVectorError> {
//!     let mut vec = IntVector::new();
//!     vec.resize(10)?;
//!     vec.assign(0, 2);
//!
//!     vec.pop()?;
//!     assert_eq!(vec.len(), 9);
//!     assert_eq!(vec.last(), Some(&16));
//!
//!     vec.push(1000)?;
//!     assert_eq!(vec.len(), 10);
//!     assert_eq!(vec.last(), Some(&1000));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Output Format
//!
//! With the `std` feature (default), [`IntVector::print`] and [`IntVector::print_to`]
//! write the delimiter-bracketed dump format; [`Dump`] renders the same format for
//! any slice through `Display`.
//!
//! # Test Utilities
//!
//! Enable the `test-utils` feature to inject allocation failures:
//!
//! ```toml
//! [dev-dependencies]
//! intvec = { version = "*", features = ["test-utils"] }
//! ```
//!
//! ```rust,ignore
//! use intvec::{IntVector, IntVectorBehaviour};
//!
//! let mut vec = IntVector::new();
//! vec.change_behaviour(IntVectorBehaviour::FailAtPush);
//! assert!(vec.push(1).is_err());
//! assert!(vec.is_empty());
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

mod boxed;
mod dump;
mod error;
mod int_vector;
mod progression;
mod raw_buffer;

#[cfg(any(test, feature = "test-utils"))]
mod behaviour;

#[cfg(test)]
mod tests;

pub use dump::{DELIMITER, Dump};
pub use error::IntVectorError;
pub use int_vector::IntVector;
pub use progression::assign_progression;
pub use raw_buffer::RawBuffer;

#[cfg(any(test, feature = "test-utils"))]
pub use behaviour::IntVectorBehaviour;

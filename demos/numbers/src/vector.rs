// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Vector demonstration: one vector held by value, one boxed handle.

use std::io::Write;

use intvec::IntVector;

use crate::Stage;
use crate::error::DemoError;

const V1_LEN: usize = 10;
const V2_LEN: usize = 20;
const V2_PUSHED: i32 = 1000;

/// Which allocation-dependent steps of [`run_vector_demo`] ran.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct VectorDemoOutcome {
    /// `v1` resized to 10 and filled with `0, 2, ...`.
    pub v1_filled: Stage,
    /// Last element of `v1` removed.
    pub v1_popped: Stage,
    /// `v2` resized to 20 and filled with `100, 99, ...`.
    pub v2_filled: Stage,
    /// `1000` appended to `v2`.
    pub v2_pushed: Stage,
}

impl VectorDemoOutcome {
    /// Returns `true` if every step ran.
    pub fn is_complete(&self) -> bool {
        [self.v1_filled, self.v1_popped, self.v2_filled, self.v2_pushed]
            .iter()
            .all(Stage::is_completed)
    }
}

fn resize_and_assign(vec: &mut IntVector, len: usize, start: i32, step: i32) -> Stage {
    match vec.resize(len) {
        Ok(()) => {
            vec.assign(start, step);
            Stage::Completed
        }
        Err(_) => Stage::Skipped,
    }
}

/// Runs the vector demonstration on `v1` and the boxed handle `v2`.
///
/// Fills `v1` with ten integers from 0 in steps of 2 and `v2` with twenty from 100
/// in steps of -1, pops the last element of `v1`, pushes 1000 onto `v2`, then dumps
/// `v1` and `v2` to `stdout` and again to `file`. Finally clears `v1` and deletes
/// `v2`, leaving it `None`.
///
/// A failed resize skips that vector's fill; a failed push or pop leaves the
/// vector as it was. Dumps always run on whatever state exists.
///
/// # Errors
///
/// [`DemoError::Io`] if a dump cannot be written.
pub fn run_vector_demo<O, F>(
    v1: &mut IntVector,
    v2: &mut Option<Box<IntVector>>,
    stdout: &mut O,
    file: &mut F,
) -> Result<VectorDemoOutcome, DemoError>
where
    O: Write + ?Sized,
    F: Write + ?Sized,
{
    let v1_filled = resize_and_assign(v1, V1_LEN, 0, 2);

    let v2_filled = match v2.as_deref_mut() {
        Some(v2) => resize_and_assign(v2, V2_LEN, 100, -1),
        None => Stage::Skipped,
    };

    let v1_popped: Stage = v1.pop().into();

    let v2_pushed = match v2.as_deref_mut() {
        Some(v2) => v2.push(V2_PUSHED).into(),
        None => Stage::Skipped,
    };

    v1.print_to(stdout)?;
    if let Some(v2) = v2.as_deref() {
        v2.print_to(stdout)?;
    }

    v1.print_to(file)?;
    if let Some(v2) = v2.as_deref() {
        v2.print_to(file)?;
    }

    v1.clear();
    IntVector::delete(v2);

    Ok(VectorDemoOutcome {
        v1_filled,
        v1_popped,
        v2_filled,
        v2_pushed,
    })
}

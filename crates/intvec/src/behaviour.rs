// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::int_vector::AllocationSite;

/// Test behaviour for injecting allocation failures in `IntVector` operations.
///
/// This is only available with the `test-utils` feature and allows users
/// to test error handling paths in their code by injecting failures.
///
/// The behaviour is sticky - once set, it remains active until changed.
/// Injected failures take the same path as real allocator refusals: the
/// operation returns `AllocationFailure` and the vector is left unchanged.
///
/// # Example
///
/// ```rust,ignore
/// // test-utils feature required in dev-dependencies
/// use intvec::{IntVector, IntVectorBehaviour, IntVectorError};
///
/// #[test]
/// fn test_handles_second_allocation_failure() -> Result<(), IntVectorError> {
///     let mut vec = IntVector::new();
///     vec.change_behaviour(IntVectorBehaviour::FailOnNthAllocation(2));
///
///     vec.resize(10)?;
///     assert!(vec.push(1).is_err());
///     assert_eq!(vec.len(), 10);
///
///     // Reset to normal behaviour
///     vec.change_behaviour(IntVectorBehaviour::None);
///     vec.push(1)?;
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntVectorBehaviour {
    /// Normal behaviour - no injected failures.
    #[default]
    None,
    /// Every `resize()` to a non-zero size fails.
    FailAtResize,
    /// Every `push()` fails.
    FailAtPush,
    /// Every shrinking `pop()` (length above one) fails.
    FailAtPop,
    /// The n-th allocator request (1-based, counted since the behaviour was set) fails.
    FailOnNthAllocation(usize),
}

impl IntVectorBehaviour {
    /// `request` is the 1-based index of this allocator request.
    pub(crate) fn should_fail(&self, site: AllocationSite, request: usize) -> bool {
        match self {
            Self::None => false,
            Self::FailAtResize => site == AllocationSite::Resize,
            Self::FailAtPush => site == AllocationSite::Push,
            Self::FailAtPop => site == AllocationSite::Pop,
            Self::FailOnNthAllocation(n) => request == *n,
        }
    }
}

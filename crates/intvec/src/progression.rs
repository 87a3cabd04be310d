// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Fills `values` with the arithmetic progression `start, start + step, ...`.
///
/// Arithmetic wraps on `i32` overflow.
///
/// # Example
///
/// ```rust
/// use intvec::assign_progression;
///
/// let mut values = [0i32; 4];
/// assign_progression(&mut values, 100, -1);
/// assert_eq!(values, [100, 99, 98, 97]);
/// ```
pub fn assign_progression(values: &mut [i32], start: i32, step: i32) {
    let mut next = start;

    for value in values.iter_mut() {
        *value = next;
        next = next.wrapping_add(step);
    }
}

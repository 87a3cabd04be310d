// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::IntVectorError;
use crate::int_vector::IntVector;

use super::UNSATISFIABLE_LEN;

fn vector_from(values: &[i32]) -> IntVector {
    let mut vec = IntVector::new();
    vec.resize(values.len()).expect("Failed to resize(..)");
    vec.as_mut_slice().copy_from_slice(values);
    vec
}

// =============================================================================
// new(), init(), default()
// =============================================================================

#[test]
fn test_new_is_empty() {
    let vec = IntVector::new();

    assert_eq!(vec.len(), 0);
    assert!(vec.is_empty());
    assert!(vec.begin().is_none());
    assert!(vec.end().is_none());
    assert!(vec.last().is_none());
}

#[test]
fn test_default_is_empty() {
    let vec = IntVector::default();

    assert!(vec.is_empty());
    assert!(vec.begin().is_none());
}

#[test]
fn test_init_resets_to_empty() {
    let mut vec = vector_from(&[1, 2, 3]);

    vec.init();

    assert!(vec.is_empty());
    assert!(vec.begin().is_none());
}

// =============================================================================
// resize()
// =============================================================================

#[test]
fn test_resize_from_empty() {
    let mut vec = IntVector::new();

    vec.resize(10).expect("Failed to resize(10)");

    assert_eq!(vec.len(), 10);
    assert!(vec.begin().is_some());
}

#[test]
fn test_resize_to_zero_clears() {
    let mut vec = vector_from(&[1, 2, 3]);

    vec.resize(0).expect("Failed to resize(0)");

    assert_eq!(vec.len(), 0);
    assert!(vec.begin().is_none());
}

#[test]
fn test_resize_to_zero_on_empty_succeeds() {
    let mut vec = IntVector::new();

    assert!(vec.resize(0).is_ok());
    assert!(vec.is_empty());
}

#[test]
fn test_resize_grow_preserves_values() {
    let mut vec = vector_from(&[7, 8, 9]);

    vec.resize(5).expect("Failed to resize(5)");

    assert_eq!(&vec[..3], &[7, 8, 9]);
    assert_eq!(vec.len(), 5);
}

#[test]
fn test_resize_shrink_truncates() {
    let mut vec = vector_from(&[7, 8, 9]);

    vec.resize(1).expect("Failed to resize(1)");

    assert_eq!(vec.as_slice(), &[7]);
}

#[test]
fn test_resize_shrink_then_grow_keeps_common_prefix() {
    let mut vec = vector_from(&[1, 2, 3, 4, 5]);

    vec.resize(2).expect("Failed to resize(2)");
    vec.resize(5).expect("Failed to resize(5)");

    assert_eq!(&vec[..2], &[1, 2]);
    assert_eq!(vec.len(), 5);
}

#[test]
fn test_resize_failure_leaves_vector_unchanged() {
    let mut vec = vector_from(&[1, 2, 3]);
    let begin = vec.begin();

    let result = vec.resize(UNSATISFIABLE_LEN);

    assert!(matches!(result, Err(IntVectorError::AllocationFailure)));
    assert_eq!(vec.begin(), begin);
    assert_eq!(vec.len(), 3);
    assert_eq!(vec.as_slice(), &[1, 2, 3]);
}

#[test]
fn test_resize_layout_overflow_fails() {
    let mut vec = IntVector::new();

    let result = vec.resize(usize::MAX);

    assert!(matches!(result, Err(IntVectorError::AllocationFailure)));
    assert!(vec.is_empty());
    assert!(vec.begin().is_none());
}

// =============================================================================
// push()
// =============================================================================

#[test]
fn test_push_on_empty() {
    let mut vec = IntVector::new();

    vec.push(42).expect("Failed to push(42)");

    assert_eq!(vec.as_slice(), &[42]);
    assert_eq!(vec.last(), Some(&42));
}

#[test]
fn test_push_appends_in_order() {
    let mut vec = IntVector::new();

    for value in [3, -1, 4, -1, 5] {
        vec.push(value).expect("Failed to push(..)");
    }

    assert_eq!(vec.as_slice(), &[3, -1, 4, -1, 5]);
}

#[test]
fn test_push_keeps_prior_elements() {
    let mut vec = vector_from(&[10, 20]);

    vec.push(30).expect("Failed to push(30)");

    assert_eq!(vec.as_slice(), &[10, 20, 30]);
}

// =============================================================================
// pop()
// =============================================================================

#[test]
fn test_pop_removes_last() {
    let mut vec = vector_from(&[10, 20, 30]);

    vec.pop().expect("Failed to pop()");

    assert_eq!(vec.as_slice(), &[10, 20]);
}

#[test]
fn test_pop_single_element_clears() {
    let mut vec = vector_from(&[10]);

    vec.pop().expect("Failed to pop()");

    assert!(vec.is_empty());
    assert!(vec.begin().is_none());
}

#[test]
fn test_pop_on_empty_succeeds() {
    let mut vec = IntVector::new();

    assert!(vec.pop().is_ok());
    assert!(vec.is_empty());
}

// =============================================================================
// assign()
// =============================================================================

#[test]
fn test_assign_start_and_step() {
    let mut vec = IntVector::new();
    vec.resize(5).expect("Failed to resize(5)");

    vec.assign(100, -1);

    assert_eq!(vec.as_slice(), &[100, 99, 98, 97, 96]);
}

#[test]
fn test_assign_on_empty_is_noop() {
    let mut vec = IntVector::new();

    vec.assign(1, 1);

    assert!(vec.is_empty());
}

#[test]
fn test_assign_overwrites_existing_values() {
    let mut vec = vector_from(&[9, 9, 9]);

    vec.assign(0, 0);

    assert_eq!(vec.as_slice(), &[0, 0, 0]);
}

// =============================================================================
// begin(), end(), last()
// =============================================================================

#[test]
fn test_begin_end_span_len_elements() {
    let vec = vector_from(&[1, 2, 3, 4]);

    let begin = vec.begin().expect("Failed to begin()");
    let end = vec.end().expect("Failed to end()");

    let span = unsafe { end.as_ptr().offset_from(begin.as_ptr()) };
    assert_eq!(span, 4);
}

#[test]
fn test_begin_end_iteration_reads_all_values() {
    let mut vec = IntVector::new();
    vec.resize(4).expect("Failed to resize(4)");
    vec.assign(3, 3);

    let begin = vec.begin().expect("Failed to begin()");
    let end = vec.end().expect("Failed to end()");

    let mut seen = Vec::new();
    let mut cursor = begin.as_ptr();
    while cursor < end.as_ptr() {
        unsafe {
            seen.push(*cursor);
            cursor = cursor.add(1);
        }
    }

    assert_eq!(seen, vec![3, 6, 9, 12]);
}

#[test]
fn test_last_mut_writes_last_slot() {
    let mut vec = vector_from(&[1, 2]);

    if let Some(last) = vec.last_mut() {
        *last = 99;
    }

    assert_eq!(vec.as_slice(), &[1, 99]);
}

// =============================================================================
// clear()
// =============================================================================

#[test]
fn test_clear_releases_buffer() {
    let mut vec = vector_from(&[1, 2, 3]);

    vec.clear();

    assert_eq!(vec.len(), 0);
    assert!(vec.begin().is_none());
}

#[test]
fn test_clear_is_idempotent() {
    let mut vec = vector_from(&[1, 2, 3]);

    vec.clear();
    vec.clear();

    assert_eq!(vec.len(), 0);
    assert!(vec.begin().is_none());
}

#[test]
fn test_clear_then_reuse() {
    let mut vec = vector_from(&[1, 2, 3]);
    vec.clear();

    vec.push(5).expect("Failed to push(5)");

    assert_eq!(vec.as_slice(), &[5]);
}

// =============================================================================
// Deref, IntoIterator, PartialEq, Debug
// =============================================================================

#[test]
fn test_deref_to_slice() {
    let vec = vector_from(&[4, 5, 6]);

    assert_eq!(vec[0], 4);
    assert_eq!(vec.iter().sum::<i32>(), 15);
}

#[test]
fn test_into_iterator_by_ref() {
    let vec = vector_from(&[1, 2, 3]);

    let doubled: Vec<i32> = (&vec).into_iter().map(|v| v * 2).collect();

    assert_eq!(doubled, vec![2, 4, 6]);
}

#[test]
fn test_eq_compares_contents() {
    assert_eq!(vector_from(&[1, 2]), vector_from(&[1, 2]));
    assert_ne!(vector_from(&[1, 2]), vector_from(&[2, 1]));
    assert_eq!(IntVector::new(), IntVector::new());
}

#[test]
fn test_debug_shows_len_and_data() {
    let vec = vector_from(&[5, -1, 7]);

    assert_eq!(
        format!("{:?}", vec),
        "IntVector { len: 3, data: [5, -1, 7] }"
    );
}

// =============================================================================
// Scenario
// =============================================================================

#[test]
fn test_resize_assign_pop_push_scenario() {
    let mut vec = IntVector::new();

    vec.resize(10).expect("Failed to resize(10)");
    vec.assign(0, 2);
    assert_eq!(vec.as_slice(), &[0, 2, 4, 6, 8, 10, 12, 14, 16, 18]);

    vec.pop().expect("Failed to pop()");
    assert_eq!(vec.len(), 9);
    assert_eq!(vec.last(), Some(&16));

    vec.push(1000).expect("Failed to push(1000)");
    assert_eq!(vec.len(), 10);
    assert_eq!(vec.last(), Some(&1000));
}

// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test helper for drop-time erasure.

use super::traits::{AssertZeroizeOnDrop, ZeroizationProbe};

/// Drops `value` and asserts its sentinel recorded an erasure.
///
/// The sentinel is reset first, so an earlier manual
/// [`fast_zeroize`](crate::FastZeroizable::fast_zeroize) cannot satisfy the
/// check on its own.
///
/// # Panics
///
/// Panics if dropping `value` did not zeroize it.
pub fn assert_zeroize_on_drop<T: AssertZeroizeOnDrop>(value: T) {
    let mut sentinel = value.clone_sentinel();

    sentinel.reset();

    assert!(!sentinel.is_zeroized());
    drop(value);
    assert!(sentinel.is_zeroized());
}

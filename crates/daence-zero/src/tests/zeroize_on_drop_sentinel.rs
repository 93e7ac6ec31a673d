// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{FastZeroizable, ZeroizationProbe, ZeroizeOnDropSentinel};

#[test]
fn test_sentinel_starts_pristine() {
    let sentinel = ZeroizeOnDropSentinel::default();
    assert!(!sentinel.is_zeroized());
}

#[test]
fn test_sentinel_clones_share_state() {
    let mut sentinel = ZeroizeOnDropSentinel::default();
    let observer = sentinel.clone();

    sentinel.fast_zeroize();

    assert!(observer.is_zeroized());
    assert_eq!(sentinel, observer);
}

#[test]
fn test_sentinel_reset() {
    let mut sentinel = ZeroizeOnDropSentinel::default();
    sentinel.fast_zeroize();
    assert!(sentinel.is_zeroized());

    sentinel.reset();
    assert!(!sentinel.is_zeroized());
}

#[test]
fn test_independent_sentinels_compare_by_state() {
    let mut a = ZeroizeOnDropSentinel::default();
    let b = ZeroizeOnDropSentinel::default();
    assert_eq!(a, b);

    a.fast_zeroize();
    assert_ne!(a, b);
}

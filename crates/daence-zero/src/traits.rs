// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Traits describing how a value is erased and how erasure is observed.

use super::zeroize_on_drop_sentinel::ZeroizeOnDropSentinel;

/// Runtime check that a value holds no secret bytes anymore.
///
/// # Example
///
/// ```rust
/// use daence_zero::{FastZeroizable, ZeroizationProbe};
///
/// let mut digest = [0x42u8; 16];
/// assert!(!digest.is_zeroized());
///
/// digest.fast_zeroize();
/// assert!(digest.is_zeroized());
/// ```
pub trait ZeroizationProbe {
    /// Returns `true` if every byte of the value is zero.
    fn is_zeroized(&self) -> bool;
}

/// Types that carry a [`ZeroizeOnDropSentinel`] and can prove, in tests,
/// that dropping them erased their contents.
pub trait AssertZeroizeOnDrop {
    /// Returns a handle sharing state with the internal sentinel.
    fn clone_sentinel(&self) -> ZeroizeOnDropSentinel;

    /// Drops `self` and asserts that erasure ran.
    ///
    /// # Panics
    ///
    /// Panics if the drop path did not zeroize.
    fn assert_zeroize_on_drop(self);
}

/// Compile-time hint on how a type may be erased.
pub trait ZeroizeMetadata {
    /// `true` when an all-zero bit pattern is a valid value, so the type can
    /// be wiped with a single `write_bytes`.
    const CAN_BE_BULK_ZEROIZED: bool;
}

/// In-place erasure.
///
/// Dyn-compatible, so heterogeneous fields can be wiped through
/// `&mut dyn FastZeroizable`.
pub trait FastZeroizable {
    /// Overwrites every secret byte of the value with zero.
    fn fast_zeroize(&mut self);
}

// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Fixed-size secret byte arrays that erase themselves on drop.

use core::fmt;
use core::ops::{Deref, DerefMut};
use core::sync::atomic::{Ordering, compiler_fence};

use super::assert::assert_zeroize_on_drop;
use super::traits::{AssertZeroizeOnDrop, FastZeroizable, ZeroizationProbe};
use super::zeroize_on_drop_sentinel::ZeroizeOnDropSentinel;

/// An owned `[u8; N]` holding secret material.
///
/// Dereferences to the inner array. On drop the bytes are wiped with
/// [`daence_util::fast_zeroize_slice`] and the sentinel is cleared.
/// `Debug` never prints the contents.
///
/// ```rust
/// use daence_zero::{SensitiveArray, ZeroizationProbe};
///
/// let mut subkey = SensitiveArray::<32>::new();
/// subkey[..16].copy_from_slice(&[7u8; 16]);
///
/// assert_eq!(subkey[0], 7);
/// assert!(!subkey.is_zeroized());
/// ```
pub struct SensitiveArray<const N: usize> {
    bytes: [u8; N],
    __sentinel: ZeroizeOnDropSentinel,
}

impl<const N: usize> SensitiveArray<N> {
    /// An all-zero array, ready to be filled in place.
    #[inline]
    pub fn new() -> Self {
        Self {
            bytes: [0u8; N],
            __sentinel: ZeroizeOnDropSentinel::default(),
        }
    }
}

impl<const N: usize> Default for SensitiveArray<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Debug for SensitiveArray<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED SensitiveArray<{}>]", N)
    }
}

impl<const N: usize> Deref for SensitiveArray<N> {
    type Target = [u8; N];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.bytes
    }
}

impl<const N: usize> DerefMut for SensitiveArray<N> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.bytes
    }
}

impl<const N: usize> FastZeroizable for SensitiveArray<N> {
    fn fast_zeroize(&mut self) {
        self.bytes.fast_zeroize();
        compiler_fence(Ordering::SeqCst);

        self.__sentinel.fast_zeroize();
    }
}

impl<const N: usize> ZeroizationProbe for SensitiveArray<N> {
    fn is_zeroized(&self) -> bool {
        self.bytes.is_zeroized()
    }
}

impl<const N: usize> AssertZeroizeOnDrop for SensitiveArray<N> {
    fn clone_sentinel(&self) -> ZeroizeOnDropSentinel {
        self.__sentinel.clone()
    }

    fn assert_zeroize_on_drop(self) {
        assert_zeroize_on_drop(self);
    }
}

impl<const N: usize> Drop for SensitiveArray<N> {
    fn drop(&mut self) {
        self.fast_zeroize();
    }
}

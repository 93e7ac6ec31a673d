// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Borrowing guard that erases the borrowed buffer unless released.

use core::fmt;
use core::ops::{Deref, DerefMut};
use core::sync::atomic::{Ordering, compiler_fence};

use super::assert::assert_zeroize_on_drop;
use super::traits::{AssertZeroizeOnDrop, FastZeroizable, ZeroizationProbe};
use super::zeroize_on_drop_sentinel::ZeroizeOnDropSentinel;

/// Wraps `&mut T` and zeroes `*T` when dropped.
///
/// The guard starts *armed*. Dropping an armed guard (normal scope exit,
/// early return through `?`, or unwinding) erases the borrowed value.
/// [`release`](Self::release) disarms it, handing the contents back to the
/// caller intact. Decryption relies on this: the candidate plaintext sits
/// behind a guard until its tag has been verified.
///
/// ```rust
/// use daence_zero::{ZeroizationProbe, ZeroizingMutGuard};
///
/// let mut candidate = [0x41u8; 8];
/// {
///     let guard = ZeroizingMutGuard::from(&mut candidate[..]);
///     assert_eq!(guard[0], 0x41);
/// }
/// assert!(candidate.is_zeroized());
///
/// let mut verified = [0x41u8; 8];
/// ZeroizingMutGuard::from(&mut verified[..]).release();
/// assert_eq!(verified, [0x41; 8]);
/// ```
pub struct ZeroizingMutGuard<'a, T>
where
    T: FastZeroizable + ZeroizationProbe + ?Sized,
{
    inner: &'a mut T,
    armed: bool,
    __sentinel: ZeroizeOnDropSentinel,
}

impl<'a, T> ZeroizingMutGuard<'a, T>
where
    T: FastZeroizable + ZeroizationProbe + ?Sized,
{
    /// Arms a guard over `inner`.
    pub fn from(inner: &'a mut T) -> Self {
        Self {
            inner,
            armed: true,
            __sentinel: ZeroizeOnDropSentinel::default(),
        }
    }

    /// Disarms the guard and drops it, leaving the borrowed value as is.
    pub fn release(mut self) {
        self.armed = false;
    }
}

impl<T> fmt::Debug for ZeroizingMutGuard<'_, T>
where
    T: FastZeroizable + ZeroizationProbe + ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED ZeroizingMutGuard]")
    }
}

impl<T> Deref for ZeroizingMutGuard<'_, T>
where
    T: FastZeroizable + ZeroizationProbe + ?Sized,
{
    type Target = T;

    fn deref(&self) -> &Self::Target {
        self.inner
    }
}

impl<T> DerefMut for ZeroizingMutGuard<'_, T>
where
    T: FastZeroizable + ZeroizationProbe + ?Sized,
{
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.inner
    }
}

impl<T> FastZeroizable for ZeroizingMutGuard<'_, T>
where
    T: FastZeroizable + ZeroizationProbe + ?Sized,
{
    fn fast_zeroize(&mut self) {
        self.inner.fast_zeroize();
        compiler_fence(Ordering::SeqCst);

        self.__sentinel.fast_zeroize();
        compiler_fence(Ordering::SeqCst);
    }
}

impl<T> ZeroizationProbe for ZeroizingMutGuard<'_, T>
where
    T: FastZeroizable + ZeroizationProbe + ?Sized,
{
    fn is_zeroized(&self) -> bool {
        self.inner.is_zeroized()
    }
}

impl<T> AssertZeroizeOnDrop for ZeroizingMutGuard<'_, T>
where
    T: FastZeroizable + ZeroizationProbe + ?Sized,
{
    fn clone_sentinel(&self) -> ZeroizeOnDropSentinel {
        self.__sentinel.clone()
    }

    fn assert_zeroize_on_drop(self) {
        assert_zeroize_on_drop(self);
    }
}

impl<T> Drop for ZeroizingMutGuard<'_, T>
where
    T: FastZeroizable + ZeroizationProbe + ?Sized,
{
    fn drop(&mut self) {
        if self.armed {
            self.fast_zeroize();
        }
    }
}

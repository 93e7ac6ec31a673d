// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::sync::Arc;
use core::ptr;
use core::sync::atomic::{AtomicBool, Ordering};

use crate::{FastZeroizable, ZeroizationProbe, ZeroizeMetadata};

/// Shared flag recording whether a value's erasure ran.
///
/// Starts out *pristine*. Calling [`fast_zeroize`](FastZeroizable::fast_zeroize)
/// on the sentinel clears it, and every clone observes the change. Secret
/// holders embed one and wipe it last in their `Drop`, so a test can keep a
/// clone, drop the holder and then check the flag.
///
/// ```rust
/// use daence_zero::{FastZeroizable, ZeroizationProbe, ZeroizeOnDropSentinel};
///
/// let mut sentinel = ZeroizeOnDropSentinel::default();
/// let observer = sentinel.clone();
///
/// assert!(!observer.is_zeroized());
/// sentinel.fast_zeroize();
/// assert!(observer.is_zeroized());
/// ```
#[derive(Clone, Debug)]
pub struct ZeroizeOnDropSentinel(Arc<AtomicBool>);

impl ZeroizeOnDropSentinel {
    /// Puts the sentinel back into the pristine state.
    pub fn reset(&mut self) {
        self.0.store(true, Ordering::Relaxed);
    }
}

impl Default for ZeroizeOnDropSentinel {
    fn default() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }
}

impl PartialEq for ZeroizeOnDropSentinel {
    fn eq(&self, other: &Self) -> bool {
        self.0.load(Ordering::Relaxed) == other.0.load(Ordering::Relaxed)
    }
}

impl Eq for ZeroizeOnDropSentinel {}

impl ZeroizeMetadata for ZeroizeOnDropSentinel {
    const CAN_BE_BULK_ZEROIZED: bool = false;
}

impl FastZeroizable for ZeroizeOnDropSentinel {
    fn fast_zeroize(&mut self) {
        // SAFETY: the pointer comes from a live AtomicBool owned by the Arc.
        unsafe {
            ptr::write_volatile(self.0.as_ptr(), false);
        }
        core::sync::atomic::fence(Ordering::SeqCst);
    }
}

impl ZeroizationProbe for ZeroizeOnDropSentinel {
    fn is_zeroized(&self) -> bool {
        !self.0.load(Ordering::Relaxed)
    }
}

// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Trait implementations for bytes, the element type of every secret buffer.

use core::ptr;

use super::traits::{FastZeroizable, ZeroizationProbe, ZeroizeMetadata};

macro_rules! impl_for_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ZeroizeMetadata for $ty {
                const CAN_BE_BULK_ZEROIZED: bool = true;
            }

            impl FastZeroizable for $ty {
                #[inline(always)]
                fn fast_zeroize(&mut self) {
                    // SAFETY: `self` is a valid, aligned, exclusive reference.
                    unsafe { ptr::write_volatile(self, 0) };
                }
            }

            impl ZeroizationProbe for $ty {
                #[inline(always)]
                fn is_zeroized(&self) -> bool {
                    *self == 0
                }
            }
        )*
    };
}

impl_for_integer!(u8);

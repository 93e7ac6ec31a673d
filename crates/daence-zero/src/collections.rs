// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Trait implementations for slices, arrays and `Vec<T>`.

use alloc::vec::Vec;
use core::sync::atomic::{Ordering, compiler_fence};

use super::traits::{FastZeroizable, ZeroizationProbe, ZeroizeMetadata};

/// Bulk memset when the element type allows it, element-wise otherwise.
#[inline(always)]
pub(crate) fn slice_fast_zeroize<T: FastZeroizable + ZeroizeMetadata>(slice: &mut [T], fast: bool) {
    if fast {
        daence_util::fast_zeroize_slice(slice);
    } else {
        for elem in slice.iter_mut() {
            elem.fast_zeroize();
        }
    }
    compiler_fence(Ordering::SeqCst);
}

impl<T: FastZeroizable + ZeroizeMetadata> ZeroizeMetadata for [T] {
    const CAN_BE_BULK_ZEROIZED: bool = T::CAN_BE_BULK_ZEROIZED;
}

impl<T: FastZeroizable + ZeroizeMetadata> FastZeroizable for [T] {
    fn fast_zeroize(&mut self) {
        slice_fast_zeroize(self, T::CAN_BE_BULK_ZEROIZED);
    }
}

impl<T: ZeroizationProbe> ZeroizationProbe for [T] {
    fn is_zeroized(&self) -> bool {
        self.iter().all(ZeroizationProbe::is_zeroized)
    }
}

impl<T: ZeroizeMetadata, const N: usize> ZeroizeMetadata for [T; N] {
    const CAN_BE_BULK_ZEROIZED: bool = T::CAN_BE_BULK_ZEROIZED;
}

impl<T: FastZeroizable + ZeroizeMetadata, const N: usize> FastZeroizable for [T; N] {
    #[inline(always)]
    fn fast_zeroize(&mut self) {
        slice_fast_zeroize(self, T::CAN_BE_BULK_ZEROIZED);
    }
}

impl<T: ZeroizationProbe, const N: usize> ZeroizationProbe for [T; N] {
    fn is_zeroized(&self) -> bool {
        self.iter().all(ZeroizationProbe::is_zeroized)
    }
}

impl<T: ZeroizeMetadata> ZeroizeMetadata for Vec<T> {
    // ptr/len/capacity must survive, so never a raw memset of the header.
    const CAN_BE_BULK_ZEROIZED: bool = false;
}

impl<T: FastZeroizable + ZeroizeMetadata> FastZeroizable for Vec<T> {
    /// Wipes the elements and, for bulk-zeroizable `T`, the spare capacity.
    #[inline(always)]
    fn fast_zeroize(&mut self) {
        if T::CAN_BE_BULK_ZEROIZED {
            daence_util::fast_zeroize_vec(self);
        } else {
            for elem in self.iter_mut() {
                elem.fast_zeroize();
            }
        }
        compiler_fence(Ordering::SeqCst);
    }
}

impl<T: ZeroizationProbe> ZeroizationProbe for Vec<T> {
    fn is_zeroized(&self) -> bool {
        self.iter().all(ZeroizationProbe::is_zeroized)
    }
}

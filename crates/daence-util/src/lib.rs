// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Byte-level helpers shared by the DAENCE crates.
//!
//! Everything here works on plain byte slices: constant-time comparison,
//! erasure that the optimizer cannot elide, and little-endian length
//! encoding that wipes its source integer.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

use alloc::vec::Vec;
use core::sync::atomic::{Ordering, compiler_fence};

use subtle::ConstantTimeEq;

#[cfg(test)]
mod tests;

/// Overwrites every byte of `slice` with `pattern`.
///
/// Tests use it to plant recognisable sentinels in buffers that must later
/// be observed as erased.
///
/// # Example
///
/// ```
/// use daence_util::fill_bytes_with_pattern;
///
/// let mut buffer = [0u8; 8];
/// fill_bytes_with_pattern(&mut buffer, 0xA5);
/// assert!(buffer.iter().all(|&b| b == 0xA5));
/// ```
#[inline]
pub fn fill_bytes_with_pattern(slice: &mut [u8], pattern: u8) {
    slice.iter_mut().for_each(|byte| *byte = pattern);
}

/// Compares two byte slices without data-dependent branches.
///
/// Slices of different length compare unequal. The length itself is not
/// treated as secret.
///
/// # Example
///
/// ```
/// use daence_util::constant_time_eq;
///
/// assert!(constant_time_eq(&[7, 8, 9], &[7, 8, 9]));
/// assert!(!constant_time_eq(&[7, 8, 9], &[7, 8, 0]));
/// assert!(!constant_time_eq(&[7, 8], &[7, 8, 9]));
/// ```
#[inline]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.ct_eq(b).into()
}

/// Decodes a hexadecimal string into bytes.
///
/// Whitespace is ignored so that long vectors can be written across
/// several lines.
///
/// # Panics
///
/// Panics on non-hex characters or an odd number of digits.
#[cfg(any(test, feature = "test-utils"))]
pub fn hex_to_bytes(hex: &str) -> Vec<u8> {
    let digits: Vec<u8> = hex
        .bytes()
        .filter(|c| !c.is_ascii_whitespace())
        .map(|c| match c {
            b'0'..=b'9' => c - b'0',
            b'a'..=b'f' => c - b'a' + 10,
            b'A'..=b'F' => c - b'A' + 10,
            _ => panic!("invalid hex digit: {:?}", c as char),
        })
        .collect();

    assert!(digits.len() % 2 == 0, "odd number of hex digits");

    digits.chunks_exact(2).map(|p| (p[0] << 4) | p[1]).collect()
}

/// Generates a `{type}_to_le` writer that wipes the source integer.
macro_rules! impl_to_le {
    ($type:ty, $size:expr, $fn_to:ident) => {
        #[doc = concat!("Writes a `", stringify!($type), "` into `", stringify!($size), "` little-endian bytes and zeroes the source.")]
        ///
        /// Bytes are extracted by shifting so no intermediate array is left
        /// on the stack.
        #[inline(always)]
        pub fn $fn_to(src: &mut $type, bytes: &mut [u8; $size]) {
            for (i, byte) in bytes.iter_mut().enumerate() {
                *byte = (*src >> (8 * i)) as u8;
            }
            *src = 0;
        }
    };
}

impl_to_le!(u32, 4, u32_to_le);
impl_to_le!(u64, 8, u64_to_le);

/// Returns `true` when every byte of `slice` is zero.
///
/// # Example
///
/// ```
/// use daence_util::is_slice_zeroized;
///
/// assert!(is_slice_zeroized(&[0u8; 4]));
/// assert!(!is_slice_zeroized(&[0u8, 0, 1, 0]));
/// ```
#[inline(always)]
pub fn is_slice_zeroized(slice: &[u8]) -> bool {
    slice.iter().all(|&b| b == 0)
}

/// Returns `true` when the whole allocation of `vec` is zero, spare
/// capacity included.
///
/// Only meaningful after [`fast_zeroize_vec`]: a fresh allocation may carry
/// arbitrary bytes past `len`.
///
/// # Safety
///
/// Reads `capacity()` bytes starting at the vector's base pointer. `Vec`
/// guarantees that range is allocated; nothing is written.
#[cfg(any(test, feature = "test-utils"))]
#[inline(never)]
pub fn is_vec_fully_zeroized(vec: &Vec<u8>) -> bool {
    let base = vec.as_ptr();

    (0..vec.capacity()).all(|i| unsafe { *base.add(i) == 0 })
}

/// Writes `byte_len` zero bytes at `base`, then pins the store with a
/// volatile read and a compiler fence.
///
/// # Safety
///
/// `base..base + byte_len` must be valid for writes.
#[inline(always)]
unsafe fn erase_bytes(base: *mut u8, byte_len: usize) {
    if byte_len == 0 {
        return;
    }

    unsafe {
        core::ptr::write_bytes(base, 0, byte_len);
        core::ptr::read_volatile(base);
    }
    compiler_fence(Ordering::SeqCst);
}

/// Zeroes a slice with a bulk write the optimizer must keep.
///
/// # Example
///
/// ```
/// use daence_util::fast_zeroize_slice;
///
/// let mut digest = [0x5Au8; 16];
/// fast_zeroize_slice(&mut digest);
/// assert_eq!(digest, [0u8; 16]);
/// ```
#[inline(always)]
pub fn fast_zeroize_slice<T>(slice: &mut [T]) {
    let byte_len = core::mem::size_of_val(slice);
    // SAFETY: the slice owns `byte_len` initialised, writable bytes.
    unsafe { erase_bytes(slice.as_mut_ptr().cast::<u8>(), byte_len) }
}

/// Zeroes the entire allocation of a `Vec`, spare capacity included.
///
/// # Example
///
/// ```
/// use daence_util::fast_zeroize_vec;
///
/// let mut plaintext = vec![0xFFu8; 64];
/// plaintext.truncate(8);
/// fast_zeroize_vec(&mut plaintext);
/// assert!(plaintext.iter().all(|&b| b == 0));
/// ```
#[inline(always)]
pub fn fast_zeroize_vec<T>(vec: &mut Vec<T>) {
    let byte_len = vec.capacity() * core::mem::size_of::<T>();
    // SAFETY: `Vec` guarantees `capacity()` elements are allocated.
    unsafe { erase_bytes(vec.as_mut_ptr().cast::<u8>(), byte_len) }
}

/// Splits `slice` at `mid`, or returns `None` when `mid` is out of range.
///
/// Non-panicking counterpart of [`slice::split_at_mut`], used to peel the
/// synthetic tag off a ciphertext whose length has not been checked yet.
///
/// # Example
///
/// ```
/// use daence_util::try_split_at_mut;
///
/// let mut sealed = [1u8, 2, 3, 4, 5];
/// let (tag, body) = try_split_at_mut(&mut sealed, 2).unwrap();
/// assert_eq!(tag, &[1, 2]);
/// assert_eq!(body, &[3, 4, 5]);
///
/// assert!(try_split_at_mut(&mut sealed, 6).is_none());
/// ```
#[inline(always)]
pub fn try_split_at_mut<T>(slice: &mut [T], mid: usize) -> Option<(&mut [T], &mut [T])> {
    if mid <= slice.len() {
        Some(slice.split_at_mut(mid))
    } else {
        None
    }
}

// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # daence-zero
//!
//! Erasure primitives for short-lived secrets.
//!
//! Every sub-key, digest, chained mixer output and candidate plaintext
//! handled by DAENCE lives in one of the types below, which wipe their
//! contents on drop:
//!
//! - [`SensitiveArray`]: owned fixed-size secret bytes.
//! - [`ZeroizingMutGuard`]: borrows a buffer and erases it on drop unless
//!   [`released`](ZeroizingMutGuard::release).
//!
//! Each carries a [`ZeroizeOnDropSentinel`] so tests can observe that the
//! erasure actually ran.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod assert;
mod collections;
mod primitives;
mod sensitive;
mod traits;
mod zeroize_on_drop_sentinel;
mod zeroizing_mut_guard;

pub use assert::assert_zeroize_on_drop;
pub use sensitive::SensitiveArray;
pub use traits::{AssertZeroizeOnDrop, FastZeroizable, ZeroizationProbe, ZeroizeMetadata};
pub use zeroize_on_drop_sentinel::ZeroizeOnDropSentinel;
pub use zeroizing_mut_guard::ZeroizingMutGuard;

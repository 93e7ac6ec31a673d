// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Concrete primitive sets.
//!
//! | Set | Mix | Stream | MAC |
//! |-----|-----|--------|-----|
//! | [`ChaCha`] | HChaCha20 | ChaCha20, nonce `0^4 || n` | Poly1305 |
//! | [`Salsa`] | HSalsa20 | Salsa20 | Poly1305 |

mod mac;

#[cfg(feature = "chacha")]
mod chacha;
#[cfg(feature = "salsa20")]
mod salsa;

pub use mac::Poly1305Mac;

#[cfg(feature = "chacha")]
pub use chacha::ChaCha;
#[cfg(feature = "salsa20")]
pub use salsa::Salsa;

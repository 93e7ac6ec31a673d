// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # daence
//!
//! DAENCE (Deterministic Authenticated Encryption with No noNCEnse) seals a
//! message under a key and a header without any caller-supplied nonce. The
//! ciphertext is a pure function of `(key, header, message)`:
//!
//! ```text
//! ciphertext = tag (24 bytes) || message XOR keystream(k0, tag)
//! ```
//!
//! The tag is synthesized from two one-time MAC digests of the header and
//! message, chained through a keyed mixer, and doubles as the stream-cipher
//! nonce. Identical inputs therefore produce identical ciphertexts; nothing
//! else leaks.
//!
//! ## Instantiations
//!
//! | Type | Mixer / stream | Compression | Key |
//! |------|----------------|-------------|-----|
//! | [`ChaChaDaence`] | HChaCha20 / ChaCha20 | simple, 32-bit header length | 64 bytes |
//! | [`ChaChaDaenceWide`] | HChaCha20 / ChaCha20 | simple, 64-bit header and message lengths | 64 bytes |
//! | [`ChaChaDaenceDeep`] | HChaCha20 / ChaCha20 | deep, two MAC layers | 96 bytes |
//! | [`Salsa20Daence`] | HSalsa20 / Salsa20 | deep, two MAC layers | 96 bytes |
//!
//! The two simple framings are not interchangeable: a ciphertext sealed by
//! one never opens under the other.
//!
//! ## Example
//!
//! ```rust
//! # #[cfg(feature = "chacha")] {
//! use daence::ChaChaDaence;
//!
//! let cipher = ChaChaDaence::from_slice(&[0x42u8; 64]).expect("64-byte key");
//!
//! let sealed = cipher.seal(b"header", b"attack at dawn");
//! assert_eq!(sealed, cipher.seal(b"header", b"attack at dawn"));
//!
//! let opened = cipher.open(b"header", &sealed).expect("authentic");
//! assert_eq!(opened, b"attack at dawn");
//!
//! assert!(cipher.open(b"other header", &sealed).is_err());
//! # }
//! ```
//!
//! ## Secret hygiene
//!
//! Sub-keys, digests, chained mixer outputs and derived stream keys live in
//! [`daence_zero`] containers and are wiped on every exit path. A failed
//! [`Daence::open`] never hands out candidate plaintext; in-place variants
//! leave the buffer all zero.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(all(test, feature = "chacha", feature = "salsa20"))]
mod tests;

#[cfg(any(test, feature = "test-utils"))]
pub mod support;

mod aead;
mod compressor;
mod consts;
mod engine;
mod error;
mod key;
mod selftest;
mod synthesizer;
mod traits;
mod types;
mod vectors;

pub mod backends;

pub use aead::Daence;
pub use compressor::{Deep, ShortFraming, Simple, WideFraming};
pub use consts::{
    DEEP_KEY_SIZE, DIGEST_SIZE, MAC_KEY_SIZE, MAX_FRAMING_SIZE, MAX_MESSAGE_LEN, MIX_INPUT_SIZE,
    MIX_OUTPUT_SIZE, SIMPLE_KEY_SIZE, STREAM_KEY_SIZE, STREAM_NONCE_SIZE, TAG_SIZE,
};
pub use error::{AuthFailure, KeyError, SelfTestError};
pub use key::{DeepKey, SimpleKey};
pub use selftest::KnownAnswer;
pub use traits::{CipherKey, LengthFraming, OneTimeMac, Primitives, Variant};
pub use types::{Digests, SyntheticTag};
pub use vectors::{KnownAnswerVector, MixVector};

/// ChaCha20 primitives, simple compression with a 32-bit header length.
#[cfg(feature = "chacha")]
pub type ChaChaDaence = Daence<backends::ChaCha, Simple<ShortFraming>>;

/// ChaCha20 primitives, simple compression with 64-bit header and message
/// lengths.
#[cfg(feature = "chacha")]
pub type ChaChaDaenceWide = Daence<backends::ChaCha, Simple<WideFraming>>;

/// ChaCha20 primitives with the deep, 96-byte-key compression.
#[cfg(feature = "chacha")]
pub type ChaChaDaenceDeep = Daence<backends::ChaCha, Deep>;

/// Salsa20 primitives with the deep, 96-byte-key compression.
#[cfg(feature = "salsa20")]
pub type Salsa20Daence = Daence<backends::Salsa, Deep>;

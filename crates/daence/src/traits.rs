// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Seams between the generic construction and its concrete primitives.
//!
//! [`Daence`](crate::Daence) is written once against these traits:
//! [`Primitives`] supplies the mixer, stream cipher and one-time MAC;
//! [`Variant`] decides how header and message are compressed into two
//! digests and how the key is split.

use crate::consts::{
    DIGEST_SIZE, MAC_KEY_SIZE, MAX_FRAMING_SIZE, MIX_INPUT_SIZE, MIX_OUTPUT_SIZE,
    STREAM_KEY_SIZE, STREAM_NONCE_SIZE,
};
use crate::error::KeyError;
use crate::types::Digests;
use crate::vectors::MixVector;

/// A one-time MAC keyed by a 16-byte evaluation point.
///
/// Data is absorbed in two phases: any number of
/// [`update_padded`](Self::update_padded) calls, each zero-padding its input
/// to a 16-byte boundary, then a single
/// [`finalize_unpadded`](Self::finalize_unpadded) whose trailing partial
/// block, if any, is not padded.
pub trait OneTimeMac: Sized {
    /// Starts a MAC with evaluation point `key` and a zero addend.
    fn new(key: &[u8; MAC_KEY_SIZE]) -> Self;

    /// Absorbs `data`, zero-padding it to a multiple of 16 bytes.
    fn update_padded(&mut self, data: &[u8]);

    /// Absorbs `tail` without padding its final partial block, then writes
    /// the digest.
    fn finalize_unpadded(self, tail: &[u8], out: &mut [u8; DIGEST_SIZE]);

    /// `Mac_key(data)` over unpadded input.
    #[inline]
    fn authenticate(key: &[u8; MAC_KEY_SIZE], data: &[u8], out: &mut [u8; DIGEST_SIZE]) {
        Self::new(key).finalize_unpadded(data, out);
    }
}

/// The primitive capability set: keyed mixer, stream cipher and MAC.
pub trait Primitives {
    /// Short name for logs.
    const NAME: &'static str;

    /// Longest keystream, in bytes, that [`stream_xor`](Self::stream_xor)
    /// produces from counter 0.
    const MAX_STREAM_LEN: u64;

    /// Reference output of [`mix`](Self::mix), checked by the self-test.
    const MIX_VECTOR: Option<MixVector> = None;

    /// One-time MAC used by the compressor.
    type Mac: OneTimeMac;

    /// Keyed compression `Mix(key, input) -> output`.
    fn mix(
        key: &[u8; STREAM_KEY_SIZE],
        input: &[u8; MIX_INPUT_SIZE],
        output: &mut [u8; MIX_OUTPUT_SIZE],
    );

    /// XORs `data` with the keystream starting at 64-byte block `counter`.
    fn stream_xor(
        key: &[u8; STREAM_KEY_SIZE],
        nonce: &[u8; STREAM_NONCE_SIZE],
        counter: u32,
        data: &mut [u8],
    );
}

/// How the header and message lengths are appended to the simple
/// compressor's MAC input.
pub trait LengthFraming {
    /// Short name for logs.
    const NAME: &'static str;

    /// Largest header length the framing can encode.
    const MAX_HEADER_LEN: u64;

    /// Writes the framing block into `out` and returns how many bytes of it
    /// are used.
    ///
    /// `header_len` is at most [`MAX_HEADER_LEN`](Self::MAX_HEADER_LEN).
    fn encode(header_len: u64, message_len: u64, out: &mut [u8; MAX_FRAMING_SIZE]) -> usize;
}

/// Key material split into `k0` and the MAC sub-keys.
pub trait CipherKey: Sized {
    /// Length of the raw key.
    const SIZE: usize;

    /// `k0`.
    fn stream_key(&self) -> &[u8; STREAM_KEY_SIZE];

    /// Splits raw key bytes, rejecting any other length than [`SIZE`](Self::SIZE).
    fn from_slice(bytes: &[u8]) -> Result<Self, KeyError>;
}

/// A message-compression variant.
pub trait Variant {
    /// Short name for logs.
    const NAME: &'static str;

    /// Largest header the variant authenticates.
    const MAX_HEADER_LEN: u64;

    /// The key layout the variant consumes.
    type Key: CipherKey;

    /// Folds `header` and `message` into two digests.
    ///
    /// Total over all inputs, including empty ones within the length limits.
    fn compress<M: OneTimeMac>(
        key: &Self::Key,
        header: &[u8],
        message: &[u8],
        digests: &mut Digests,
    );
}

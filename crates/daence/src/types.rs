// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Values flowing between the compressor, synthesizer and engine.

use core::fmt;
use core::sync::atomic::{Ordering, compiler_fence};

use daence_zero::{
    AssertZeroizeOnDrop, FastZeroizable, ZeroizationProbe, ZeroizeOnDropSentinel,
    assert_zeroize_on_drop,
};

use crate::consts::{DIGEST_SIZE, MIX_INPUT_SIZE, STREAM_NONCE_SIZE, TAG_SIZE};

/// The 24-byte synthetic tag.
///
/// Sent in the clear as the ciphertext prefix. Its first 16 bytes feed the
/// nonce-extension mixer; the last 8 are the short stream-cipher nonce.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SyntheticTag([u8; TAG_SIZE]);

impl SyntheticTag {
    /// Wraps raw tag bytes.
    #[inline]
    pub const fn from_bytes(bytes: [u8; TAG_SIZE]) -> Self {
        Self(bytes)
    }

    /// Reads the tag from the first `TAG_SIZE` bytes of `bytes`.
    ///
    /// Returns `None` when `bytes` is shorter than a tag.
    #[inline]
    pub fn from_prefix(bytes: &[u8]) -> Option<Self> {
        bytes.first_chunk::<TAG_SIZE>().map(|tag| Self(*tag))
    }

    /// Tag bytes.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; TAG_SIZE] {
        &self.0
    }

    /// Splits the tag into the mixer input and the stream nonce.
    pub(crate) fn nonce_parts(&self) -> ([u8; MIX_INPUT_SIZE], [u8; STREAM_NONCE_SIZE]) {
        let mut prefix = [0u8; MIX_INPUT_SIZE];
        let mut suffix = [0u8; STREAM_NONCE_SIZE];

        prefix.copy_from_slice(&self.0[..MIX_INPUT_SIZE]);
        suffix.copy_from_slice(&self.0[MIX_INPUT_SIZE..]);

        (prefix, suffix)
    }
}

impl From<[u8; TAG_SIZE]> for SyntheticTag {
    fn from(bytes: [u8; TAG_SIZE]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for SyntheticTag {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for SyntheticTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SyntheticTag(")?;
        for byte in self.0 {
            write!(f, "{:02x}", byte)?;
        }
        f.write_str(")")
    }
}

/// The two 16-byte compressor outputs.
///
/// Secret until they have been through the mixer. Wiped on drop.
pub struct Digests {
    pub(crate) first: [u8; DIGEST_SIZE],
    pub(crate) second: [u8; DIGEST_SIZE],
    __sentinel: ZeroizeOnDropSentinel,
}

impl Digests {
    /// Two all-zero digests, ready to be written by a compressor.
    pub fn new() -> Self {
        Self {
            first: [0u8; DIGEST_SIZE],
            second: [0u8; DIGEST_SIZE],
            __sentinel: ZeroizeOnDropSentinel::default(),
        }
    }

    /// First digest (`h1`, or `h3` in the deep variant).
    pub fn first(&self) -> &[u8; DIGEST_SIZE] {
        &self.first
    }

    /// Second digest (`h2`, or `h4` in the deep variant).
    pub fn second(&self) -> &[u8; DIGEST_SIZE] {
        &self.second
    }

    /// Mutable access for compressors.
    pub fn slots_mut(&mut self) -> (&mut [u8; DIGEST_SIZE], &mut [u8; DIGEST_SIZE]) {
        (&mut self.first, &mut self.second)
    }
}

impl Default for Digests {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Digests {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED Digests]")
    }
}

impl FastZeroizable for Digests {
    fn fast_zeroize(&mut self) {
        self.first.fast_zeroize();
        self.second.fast_zeroize();
        compiler_fence(Ordering::SeqCst);

        self.__sentinel.fast_zeroize();
    }
}

impl ZeroizationProbe for Digests {
    fn is_zeroized(&self) -> bool {
        self.first.is_zeroized() && self.second.is_zeroized()
    }
}

impl AssertZeroizeOnDrop for Digests {
    fn clone_sentinel(&self) -> ZeroizeOnDropSentinel {
        self.__sentinel.clone()
    }

    fn assert_zeroize_on_drop(self) {
        assert_zeroize_on_drop(self);
    }
}

impl Drop for Digests {
    fn drop(&mut self) {
        self.fast_zeroize();
    }
}

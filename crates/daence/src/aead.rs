// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! The generic DAENCE construction.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use core::marker::PhantomData;

use daence_util::{constant_time_eq, try_split_at_mut};
use daence_zero::{FastZeroizable, SensitiveArray, ZeroizingMutGuard};

use crate::consts::{MAX_MESSAGE_LEN, TAG_SIZE, VERIFY_WIDTH};
use crate::engine;
use crate::error::{AuthFailure, KeyError};
use crate::synthesizer;
use crate::traits::{CipherKey, Primitives, Variant};
use crate::types::{Digests, SyntheticTag};

/// DAENCE over the primitive set `P` and compression variant `V`.
///
/// Holds the split key and nothing else; every method is a pure function of
/// the key and its arguments, so a single instance can be shared freely
/// across threads.
///
/// Most callers want one of the aliases exported at the crate root, such as
/// [`ChaChaDaence`](crate::ChaChaDaence).
pub struct Daence<P, V: Variant> {
    key: V::Key,
    _primitives: PhantomData<fn() -> P>,
}

impl<P, V> Daence<P, V>
where
    P: Primitives,
    V: Variant,
{
    /// Bytes the synthetic tag adds in front of every message.
    pub const OVERHEAD: usize = TAG_SIZE;

    /// Longest message this instantiation seals or opens: the smaller of
    /// the crate-wide [`MAX_MESSAGE_LEN`](crate::MAX_MESSAGE_LEN) and what
    /// the stream cipher of `P` covers.
    pub const MAX_MESSAGE_LEN: u64 = if P::MAX_STREAM_LEN < MAX_MESSAGE_LEN {
        P::MAX_STREAM_LEN
    } else {
        MAX_MESSAGE_LEN
    };

    /// Builds an instance around an already split key.
    pub fn new(key: V::Key) -> Self {
        Self {
            key,
            _primitives: PhantomData,
        }
    }

    /// Builds an instance from raw key bytes.
    ///
    /// # Errors
    ///
    /// [`KeyError::InvalidLength`] unless `key` is exactly
    /// [`key_size`](Self::key_size) bytes long.
    pub fn from_slice(key: &[u8]) -> Result<Self, KeyError> {
        <V::Key as CipherKey>::from_slice(key).map(Self::new)
    }

    /// Raw key length this instantiation expects.
    pub const fn key_size() -> usize {
        <V::Key as CipherKey>::SIZE
    }

    /// Seals `message` under `header`, returning `tag || body`.
    ///
    /// # Panics
    ///
    /// Panics if `message` is longer than [`Self::MAX_MESSAGE_LEN`] or `header`
    /// is longer than the variant can frame.
    pub fn seal(&self, header: &[u8], message: &[u8]) -> Vec<u8> {
        let mut out = vec![0u8; TAG_SIZE + message.len()];
        self.seal_into(header, message, &mut out);
        out
    }

    /// Seals `message` into `out` as `tag || body`.
    ///
    /// # Panics
    ///
    /// Panics if `out.len() != message.len() + TAG_SIZE`, or under the same
    /// length limits as [`seal`](Self::seal).
    pub fn seal_into(&self, header: &[u8], message: &[u8], out: &mut [u8]) {
        assert_eq!(
            out.len(),
            message.len() + TAG_SIZE,
            "output must be exactly {} bytes longer than the message",
            TAG_SIZE
        );

        let (tag_out, body) = out.split_at_mut(TAG_SIZE);
        body.copy_from_slice(message);

        let tag = self.seal_in_place_detached(header, body);
        tag_out.copy_from_slice(tag.as_bytes());
    }

    /// Encrypts `buffer` in place and returns its synthetic tag.
    ///
    /// # Panics
    ///
    /// Same length limits as [`seal`](Self::seal).
    pub fn seal_in_place_detached(&self, header: &[u8], buffer: &mut [u8]) -> SyntheticTag {
        assert!(
            Self::within_limits(header.len() as u64, buffer.len() as u64),
            "header or message exceeds the length limits of this instantiation"
        );

        let tag = {
            let digests = self.compress(header, buffer);
            synthesizer::synthesize::<P>(self.key.stream_key(), &digests)
        };

        engine::apply_keystream::<P>(self.key.stream_key(), &tag, buffer);

        tag
    }

    /// Verifies and decrypts `tag || body`.
    ///
    /// # Errors
    ///
    /// [`AuthFailure`] if `ciphertext` is shorter than a tag or does not
    /// authenticate under `header`. No plaintext is returned in that case.
    pub fn open(&self, header: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>, AuthFailure> {
        let Some((tag, body)) = ciphertext.split_first_chunk::<TAG_SIZE>() else {
            return Err(AuthFailure);
        };

        let mut plaintext = body.to_vec();
        self.open_in_place_detached(header, &mut plaintext, &SyntheticTag::from_bytes(*tag))?;

        Ok(plaintext)
    }

    /// Verifies `tag || body` and writes the plaintext into `out`.
    ///
    /// On failure `out` is left all zero.
    ///
    /// # Errors
    ///
    /// Same as [`open`](Self::open).
    ///
    /// # Panics
    ///
    /// Panics if `ciphertext` holds a full tag and
    /// `out.len() != ciphertext.len() - TAG_SIZE`.
    pub fn open_into(
        &self,
        header: &[u8],
        ciphertext: &[u8],
        out: &mut [u8],
    ) -> Result<(), AuthFailure> {
        let Some((tag, body)) = ciphertext.split_first_chunk::<TAG_SIZE>() else {
            out.fast_zeroize();
            return Err(AuthFailure);
        };

        assert_eq!(
            out.len(),
            body.len(),
            "output must be exactly {} bytes shorter than the ciphertext",
            TAG_SIZE
        );

        out.copy_from_slice(body);
        self.open_in_place_detached(header, out, &SyntheticTag::from_bytes(*tag))
    }

    /// Verifies and decrypts `tag || body` held in `buffer`, returning the
    /// plaintext sub-slice.
    ///
    /// On failure the body part of `buffer` is left all zero.
    ///
    /// # Errors
    ///
    /// Same as [`open`](Self::open).
    pub fn open_in_place<'b>(
        &self,
        header: &[u8],
        buffer: &'b mut [u8],
    ) -> Result<&'b mut [u8], AuthFailure> {
        let (tag, body) = try_split_at_mut(buffer, TAG_SIZE).ok_or(AuthFailure)?;
        let tag = SyntheticTag::from_prefix(tag).ok_or(AuthFailure)?;

        self.open_in_place_detached(header, body, &tag)?;

        Ok(body)
    }

    /// Decrypts `buffer` in place and verifies it against `tag`.
    ///
    /// The candidate plaintext stays behind an erasing guard until the
    /// recomputed tag matches, so on failure `buffer` is all zero.
    ///
    /// # Errors
    ///
    /// [`AuthFailure`] if the tag does not verify or `buffer` exceeds the
    /// length limits.
    pub fn open_in_place_detached(
        &self,
        header: &[u8],
        buffer: &mut [u8],
        tag: &SyntheticTag,
    ) -> Result<(), AuthFailure> {
        let mut plaintext = ZeroizingMutGuard::from(buffer);

        if !Self::within_limits(header.len() as u64, plaintext.len() as u64) {
            return Err(AuthFailure);
        }

        engine::apply_keystream::<P>(self.key.stream_key(), tag, &mut plaintext);

        let mut expected = SensitiveArray::<VERIFY_WIDTH>::new();
        {
            let digests = self.compress(header, &plaintext);
            synthesizer::synthesize_wide::<P>(self.key.stream_key(), &digests, &mut expected);
        }

        let mut received = [0u8; VERIFY_WIDTH];
        received[..TAG_SIZE].copy_from_slice(tag.as_bytes());

        if !constant_time_eq(&expected[..], &received) {
            return Err(AuthFailure);
        }

        plaintext.release();
        Ok(())
    }

    fn compress(&self, header: &[u8], message: &[u8]) -> Digests {
        let mut digests = Digests::new();
        V::compress::<P::Mac>(&self.key, header, message, &mut digests);
        digests
    }

    pub(crate) fn within_limits(header_len: u64, message_len: u64) -> bool {
        header_len <= V::MAX_HEADER_LEN && message_len <= Self::MAX_MESSAGE_LEN
    }
}

impl<P, V> fmt::Debug for Daence<P, V>
where
    P: Primitives,
    V: Variant,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Daence")
            .field("primitives", &P::NAME)
            .field("variant", &V::NAME)
            .field("key", &"[REDACTED]")
            .finish()
    }
}

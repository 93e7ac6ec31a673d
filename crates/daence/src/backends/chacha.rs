// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HChaCha20 mixer, ChaCha20 stream cipher, Poly1305 MAC.

use chacha20::cipher::consts::U10;
use chacha20::cipher::generic_array::GenericArray;
use chacha20::cipher::{KeyIvInit, StreamCipher, StreamCipherSeek};
use chacha20::{ChaCha20, hchacha};
use daence_util::fast_zeroize_slice;

use crate::consts::{MIX_INPUT_SIZE, MIX_OUTPUT_SIZE, STREAM_KEY_SIZE, STREAM_NONCE_SIZE};
use crate::traits::Primitives;
use crate::vectors::{HCHACHA20_VECTOR, MixVector};

use super::mac::Poly1305Mac;

const BLOCK_SIZE: u64 = 64;
const IETF_NONCE_SIZE: usize = 12;

/// The ChaCha20 primitive set.
///
/// The stream runs the 96-bit-nonce ChaCha20 with nonce `0^4 || n`. Its
/// 32-bit block counter stops one block short of 2^32, which caps messages
/// at [`MAX_STREAM_LEN`](Primitives::MAX_STREAM_LEN). Within that range it
/// agrees with the 64-bit-counter layout, so nonce extension through
/// [`hchacha`] yields exactly XChaCha20.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChaCha;

impl Primitives for ChaCha {
    const NAME: &'static str = "chacha20";
    const MAX_STREAM_LEN: u64 = u32::MAX as u64 * BLOCK_SIZE;
    const MIX_VECTOR: Option<MixVector> = Some(HCHACHA20_VECTOR);

    type Mac = Poly1305Mac;

    fn mix(
        key: &[u8; STREAM_KEY_SIZE],
        input: &[u8; MIX_INPUT_SIZE],
        output: &mut [u8; MIX_OUTPUT_SIZE],
    ) {
        let mut mixed = hchacha::<U10>(
            GenericArray::from_slice(key),
            GenericArray::from_slice(input),
        );
        output.copy_from_slice(&mixed);
        fast_zeroize_slice(mixed.as_mut_slice());
    }

    fn stream_xor(
        key: &[u8; STREAM_KEY_SIZE],
        nonce: &[u8; STREAM_NONCE_SIZE],
        counter: u32,
        data: &mut [u8],
    ) {
        let mut ietf_nonce = [0u8; IETF_NONCE_SIZE];
        ietf_nonce[IETF_NONCE_SIZE - STREAM_NONCE_SIZE..].copy_from_slice(nonce);

        let mut cipher = ChaCha20::new(key.into(), &ietf_nonce.into());
        cipher.seek(u64::from(counter) * BLOCK_SIZE);
        cipher.apply_keystream(data);
    }
}

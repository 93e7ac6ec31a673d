// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HSalsa20 mixer, Salsa20 stream cipher, Poly1305 MAC.

use daence_util::fast_zeroize_slice;
use salsa20::cipher::consts::U10;
use salsa20::cipher::generic_array::GenericArray;
use salsa20::cipher::{KeyIvInit, StreamCipher, StreamCipherSeek};
use salsa20::{Salsa20, hsalsa};

use crate::consts::{MIX_INPUT_SIZE, MIX_OUTPUT_SIZE, STREAM_KEY_SIZE, STREAM_NONCE_SIZE};
use crate::traits::Primitives;

use super::mac::Poly1305Mac;

const BLOCK_SIZE: u64 = 64;

/// The Salsa20 primitive set.
///
/// Nonce extension through [`hsalsa`] followed by 64-bit-nonce Salsa20 is
/// XSalsa20. The 64-bit block counter never limits a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Salsa;

impl Primitives for Salsa {
    const NAME: &'static str = "salsa20";
    const MAX_STREAM_LEN: u64 = u64::MAX;

    type Mac = Poly1305Mac;

    fn mix(
        key: &[u8; STREAM_KEY_SIZE],
        input: &[u8; MIX_INPUT_SIZE],
        output: &mut [u8; MIX_OUTPUT_SIZE],
    ) {
        let mut mixed = hsalsa::<U10>(
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
        let mut cipher = Salsa20::new(key.into(), nonce.into());
        cipher.seek(u64::from(counter) * BLOCK_SIZE);
        cipher.apply_keystream(data);
    }
}

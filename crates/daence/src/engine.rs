// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Cipher engine: nonce extension plus short-nonce stream cipher.
//!
//! ```text
//! subkey = Mix(k0, tag[0..16])
//! data  ^= Stream(subkey, tag[16..24], counter = 0)
//! ```
//!
//! Encryption and decryption are the same call.

use daence_zero::SensitiveArray;

use crate::consts::{MIX_OUTPUT_SIZE, STREAM_KEY_SIZE};
use crate::traits::Primitives;
use crate::types::SyntheticTag;

pub(crate) fn apply_keystream<P: Primitives>(
    stream_key: &[u8; STREAM_KEY_SIZE],
    tag: &SyntheticTag,
    data: &mut [u8],
) {
    if data.is_empty() {
        return;
    }

    let (mix_input, nonce) = tag.nonce_parts();

    let mut subkey = SensitiveArray::<MIX_OUTPUT_SIZE>::new();
    P::mix(stream_key, &mix_input, &mut subkey);
    P::stream_xor(&subkey, &nonce, 0, data);
}

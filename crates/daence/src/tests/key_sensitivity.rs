// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use super::counting;
use crate::backends::{ChaCha, Salsa};
use crate::{
    DEEP_KEY_SIZE, Daence, Deep, MAC_KEY_SIZE, Primitives, SIMPLE_KEY_SIZE, STREAM_KEY_SIZE,
    ShortFraming, Simple, SyntheticTag, Variant, WideFraming,
};

/// Bits of a 16-byte Poly1305 `r` that survive clamping.
const R_CLAMP: [u8; MAC_KEY_SIZE] = [
    0xff, 0xff, 0xff, 0x0f, 0xfc, 0xff, 0xff, 0x0f, 0xfc, 0xff, 0xff, 0x0f, 0xfc, 0xff, 0xff, 0x0f,
];

/// Clamped bits per MAC sub-key: four nibbles and three bit pairs.
const CLAMPED_BITS_PER_MAC_KEY: usize = 22;

fn is_clamped(byte: usize, bit: u8) -> bool {
    byte >= STREAM_KEY_SIZE && R_CLAMP[(byte - STREAM_KEY_SIZE) % MAC_KEY_SIZE] & (1 << bit) == 0
}

fn tag_under<P: Primitives, V: Variant>(key: &[u8]) -> SyntheticTag {
    let cipher = Daence::<P, V>::from_slice(key).expect("valid key length");
    let mut body = counting(0x50, 33);
    cipher.seal_in_place_detached(b"header", &mut body)
}

/// Flips every key bit once. Returns how many flips left the tag unchanged,
/// after checking that exactly the clamped MAC bits do.
fn sweep_key_bits<P: Primitives, V: Variant>(key_len: usize) -> usize {
    let key = counting(0x00, key_len);
    let reference = tag_under::<P, V>(&key);
    let mut unchanged = 0;

    for byte in 0..key_len {
        for bit in 0..8u8 {
            let mut flipped = key.clone();
            flipped[byte] ^= 1 << bit;

            let same = tag_under::<P, V>(&flipped) == reference;
            assert_eq!(
                same,
                is_clamped(byte, bit),
                "byte {} bit {}: tag unchanged = {}",
                byte,
                bit,
                same
            );

            unchanged += usize::from(same);
        }
    }

    unchanged
}

#[test]
fn test_clamp_mask_size() {
    let cleared: u32 = R_CLAMP.iter().map(|m| m.count_zeros()).sum();
    assert_eq!(cleared as usize, CLAMPED_BITS_PER_MAC_KEY);
}

#[test]
fn test_every_simple_key_bit_outside_the_clamp_changes_the_tag() {
    let short = sweep_key_bits::<ChaCha, Simple<ShortFraming>>(SIMPLE_KEY_SIZE);
    let wide = sweep_key_bits::<ChaCha, Simple<WideFraming>>(SIMPLE_KEY_SIZE);

    assert_eq!(short, 2 * CLAMPED_BITS_PER_MAC_KEY);
    assert_eq!(wide, 2 * CLAMPED_BITS_PER_MAC_KEY);
}

#[test]
fn test_every_deep_key_bit_outside_the_clamp_changes_the_tag() {
    let chacha = sweep_key_bits::<ChaCha, Deep>(DEEP_KEY_SIZE);
    let salsa = sweep_key_bits::<Salsa, Deep>(DEEP_KEY_SIZE);

    assert_eq!(chacha, 4 * CLAMPED_BITS_PER_MAC_KEY);
    assert_eq!(salsa, 4 * CLAMPED_BITS_PER_MAC_KEY);
}

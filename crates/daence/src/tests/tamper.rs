// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use super::counting;
use crate::{AuthFailure, ChaChaDaence, Salsa20Daence, TAG_SIZE};

fn chacha() -> ChaChaDaence {
    ChaChaDaence::from_slice(&counting(0x00, 64)).expect("64-byte key")
}

fn salsa() -> Salsa20Daence {
    Salsa20Daence::from_slice(&counting(0x00, 96)).expect("96-byte key")
}

#[test]
fn test_single_bit_flips_rejected() {
    let cipher = chacha();
    let sealed = cipher.seal(b"header", &counting(0x50, 33));

    for position in [0, 15, 16, TAG_SIZE - 1, TAG_SIZE, sealed.len() - 1] {
        for bit in 0..8 {
            let mut forged = sealed.clone();
            forged[position] ^= 1 << bit;

            assert_eq!(
                cipher.open(b"header", &forged),
                Err(AuthFailure),
                "byte {} bit {}",
                position,
                bit
            );
        }
    }
}

#[test]
fn test_salsa_bit_flips_rejected() {
    let cipher = salsa();
    let sealed = cipher.seal(b"header", &counting(0x70, 33));

    for position in 0..sealed.len() {
        let mut forged = sealed.clone();
        forged[position] ^= 0x01;
        assert!(cipher.open(b"header", &forged).is_err(), "byte {}", position);
    }
}

#[test]
fn test_header_is_bound() {
    let cipher = chacha();
    let sealed = cipher.seal(b"header", b"message");

    assert!(cipher.open(b"Header", &sealed).is_err());
    assert!(cipher.open(b"header\0", &sealed).is_err());
    assert!(cipher.open(b"", &sealed).is_err());
}

#[test]
fn test_truncated_ciphertexts_rejected() {
    let cipher = chacha();
    let sealed = cipher.seal(b"", &counting(0x50, 40));

    for len in 0..sealed.len() {
        assert!(cipher.open(b"", &sealed[..len]).is_err(), "length {}", len);
    }
}

#[test]
fn test_extended_ciphertext_rejected() {
    let cipher = chacha();
    let mut sealed = cipher.seal(b"", &counting(0x50, 40));
    sealed.push(0);

    assert!(cipher.open(b"", &sealed).is_err());
}

#[test]
fn test_swapped_tags_rejected() {
    let cipher = salsa();
    let first = cipher.seal(b"", b"first message!");
    let second = cipher.seal(b"", b"other message!");

    let mut spliced = first.clone();
    spliced[..TAG_SIZE].copy_from_slice(&second[..TAG_SIZE]);

    assert!(cipher.open(b"", &spliced).is_err());
}

#[test]
fn test_wrong_key_rejected() {
    let sealed = chacha().seal(b"h", b"m");

    let mut other_key = counting(0x00, 64);
    other_key[63] ^= 1;
    let other = ChaChaDaence::from_slice(&other_key).expect("64-byte key");

    assert!(other.open(b"h", &sealed).is_err());
}

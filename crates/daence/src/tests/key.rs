// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use daence_zero::{AssertZeroizeOnDrop, FastZeroizable, ZeroizationProbe};

use super::counting;
use crate::{
    ChaChaDaence, CipherKey, DEEP_KEY_SIZE, DeepKey, KeyError, SIMPLE_KEY_SIZE, Salsa20Daence,
    SimpleKey,
};

fn simple_bytes() -> [u8; SIMPLE_KEY_SIZE] {
    let mut bytes = [0u8; SIMPLE_KEY_SIZE];
    bytes.copy_from_slice(&counting(0x00, SIMPLE_KEY_SIZE));
    bytes
}

fn deep_bytes() -> [u8; DEEP_KEY_SIZE] {
    let mut bytes = [0u8; DEEP_KEY_SIZE];
    bytes.copy_from_slice(&counting(0x00, DEEP_KEY_SIZE));
    bytes
}

#[test]
fn test_simple_key_layout() {
    let bytes = simple_bytes();
    let key = SimpleKey::from_bytes(&bytes);

    let (k1, k2) = key.mac_keys();

    assert_eq!(key.stream_key()[..], bytes[..32]);
    assert_eq!(k1[..], bytes[32..48]);
    assert_eq!(k2[..], bytes[48..64]);
}

#[test]
fn test_deep_key_layout() {
    let bytes = deep_bytes();
    let key = DeepKey::from_bytes(&bytes);

    let (k1, k2) = key.inner_mac_keys();
    let (k3, k4) = key.outer_mac_keys();

    assert_eq!(key.stream_key()[..], bytes[..32]);
    assert_eq!(k1[..], bytes[32..48]);
    assert_eq!(k2[..], bytes[48..64]);
    assert_eq!(k3[..], bytes[64..80]);
    assert_eq!(k4[..], bytes[80..96]);
}

#[test]
fn test_from_bytes_leaves_source() {
    let bytes = simple_bytes();
    let _key = SimpleKey::from_bytes(&bytes);

    assert_eq!(bytes, simple_bytes());
}

#[test]
fn test_from_mut_wipes_source() {
    let mut bytes = deep_bytes();
    let key = DeepKey::from_mut(&mut bytes);

    assert!(bytes.is_zeroized());
    assert_eq!(key.stream_key()[31], 31);
}

#[test]
fn test_from_slice_rejects_wrong_lengths() {
    for len in [0, 32, SIMPLE_KEY_SIZE - 1, SIMPLE_KEY_SIZE + 1, DEEP_KEY_SIZE] {
        let err = SimpleKey::from_slice(&vec![0u8; len]).expect_err("wrong length");
        assert_eq!(
            err,
            KeyError::InvalidLength {
                expected: SIMPLE_KEY_SIZE,
                actual: len,
            }
        );
    }

    let err = DeepKey::try_from(&[0u8; SIMPLE_KEY_SIZE][..]).expect_err("wrong length");
    assert_eq!(
        err,
        KeyError::InvalidLength {
            expected: DEEP_KEY_SIZE,
            actual: SIMPLE_KEY_SIZE,
        }
    );
}

#[test]
fn test_key_error_message() {
    let err = KeyError::InvalidLength {
        expected: 64,
        actual: 3,
    };

    assert_eq!(err.to_string(), "invalid key length: expected 64 bytes, got 3");
}

#[test]
fn test_facade_key_sizes() {
    assert_eq!(ChaChaDaence::key_size(), SIMPLE_KEY_SIZE);
    assert_eq!(Salsa20Daence::key_size(), DEEP_KEY_SIZE);

    assert!(ChaChaDaence::from_slice(&[0u8; DEEP_KEY_SIZE]).is_err());
    assert!(Salsa20Daence::from_slice(&[0u8; SIMPLE_KEY_SIZE]).is_err());
}

#[test]
fn test_key_fast_zeroize() {
    let mut key = DeepKey::from_bytes(&deep_bytes());
    assert!(!key.is_zeroized());

    key.fast_zeroize();
    assert!(key.is_zeroized());
}

#[test]
fn test_keys_zeroize_on_drop() {
    SimpleKey::from_bytes(&simple_bytes()).assert_zeroize_on_drop();
    DeepKey::from_bytes(&deep_bytes()).assert_zeroize_on_drop();
}

#[test]
fn test_key_debug_is_redacted() {
    let key = SimpleKey::from_bytes(&[0x5a; SIMPLE_KEY_SIZE]);
    assert_eq!(format!("{:?}", key), "SimpleKey([REDACTED])");

    let cipher = ChaChaDaence::new(key);
    let rendered = format!("{:?}", cipher);
    assert!(rendered.contains("REDACTED"));
    assert!(rendered.contains("chacha20"));
    assert!(!rendered.contains("90"));
}

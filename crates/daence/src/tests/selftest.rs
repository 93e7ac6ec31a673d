// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use chacha20::cipher::consts::U10;
use chacha20::cipher::generic_array::GenericArray;
use chacha20::hchacha;

use crate::backends::{ChaCha, Salsa};
use crate::{
    AuthFailure, ChaChaDaence, ChaChaDaenceDeep, ChaChaDaenceWide, KeyError, Primitives,
    Salsa20Daence, SelfTestError,
};

#[test]
fn test_selftests_pass() {
    assert_eq!(ChaChaDaence::selftest(), Ok(()));
    assert_eq!(ChaChaDaenceWide::selftest(), Ok(()));
    assert_eq!(ChaChaDaenceDeep::selftest(), Ok(()));
    assert_eq!(Salsa20Daence::selftest(), Ok(()));
}

#[test]
fn test_chacha_mix_vector_matches_hchacha() {
    let vector = ChaCha::MIX_VECTOR.expect("chacha carries a mix vector");

    let output = hchacha::<U10>(
        GenericArray::from_slice(&vector.key),
        GenericArray::from_slice(&vector.input),
    );
    assert_eq!(output[..], vector.output[..]);

    let mut ours = [0u8; 32];
    ChaCha::mix(&vector.key, &vector.input, &mut ours);
    assert_eq!(ours, vector.output);
}

#[test]
fn test_salsa_has_no_mix_vector() {
    assert!(Salsa::MIX_VECTOR.is_none());
}

#[test]
fn test_error_messages() {
    assert_eq!(AuthFailure.to_string(), "authentication failed");
    assert_eq!(
        KeyError::InvalidLength {
            expected: 64,
            actual: 3
        }
        .to_string(),
        "invalid key length: expected 64 bytes, got 3"
    );

    for err in [
        SelfTestError::Mix,
        SelfTestError::SealMismatch,
        SelfTestError::OpenRejected,
        SelfTestError::OpenMismatch,
        SelfTestError::ForgeryAccepted,
    ] {
        assert!(err.to_string().starts_with("self-test failed: "), "{}", err);
    }
}

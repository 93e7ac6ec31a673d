// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(all(test, feature = "chacha", feature = "salsa20"))]
mod e2e_tests {
    use daence::{ChaChaDaence, ChaChaDaenceDeep, Salsa20Daence, TAG_SIZE};
    use proptest::prelude::*;

    fn bytes(max: usize) -> impl Strategy<Value = Vec<u8>> {
        proptest::collection::vec(any::<u8>(), 0..max)
    }

    proptest! {
        #[test]
        fn test_chacha_roundtrip(
            key in proptest::array::uniform32(any::<u8>()),
            header in bytes(64),
            message in bytes(300),
        ) {
            let mut raw = [0u8; 64];
            raw[..32].copy_from_slice(&key);
            raw[32..].copy_from_slice(&key);
            let cipher = ChaChaDaence::from_slice(&raw).expect("64-byte key");

            let sealed = cipher.seal(&header, &message);
            prop_assert_eq!(sealed.len(), message.len() + TAG_SIZE);
            prop_assert_eq!(&sealed, &cipher.seal(&header, &message));
            prop_assert_eq!(cipher.open(&header, &sealed).expect("authentic"), message);
        }

        #[test]
        fn test_deep_roundtrip(header in bytes(64), message in bytes(300)) {
            let chacha = ChaChaDaenceDeep::from_slice(&[0x5au8; 96]).expect("96-byte key");
            let salsa = Salsa20Daence::from_slice(&[0x5au8; 96]).expect("96-byte key");

            let sealed = chacha.seal(&header, &message);
            prop_assert_eq!(chacha.open(&header, &sealed).expect("authentic"), message.clone());

            let sealed = salsa.seal(&header, &message);
            prop_assert_eq!(salsa.open(&header, &sealed).expect("authentic"), message);
        }

        #[test]
        fn test_any_bit_flip_is_rejected(
            message in bytes(128),
            index in any::<prop::sample::Index>(),
            bit in 0u8..8,
        ) {
            let cipher = ChaChaDaence::from_slice(&[0x17u8; 64]).expect("64-byte key");
            let mut sealed = cipher.seal(b"header", &message);

            let position = index.index(sealed.len());
            sealed[position] ^= 1 << bit;

            prop_assert!(cipher.open(b"header", &sealed).is_err());
        }

        #[test]
        fn test_truncation_is_rejected(message in bytes(128), cut in 1usize..160) {
            let cipher = Salsa20Daence::from_slice(&[0x17u8; 96]).expect("96-byte key");
            let sealed = cipher.seal(b"", &message);

            let keep = sealed.len().saturating_sub(cut);
            prop_assert!(cipher.open(b"", &sealed[..keep]).is_err());
        }

        #[test]
        fn test_distinct_headers_give_distinct_tags(
            a in bytes(32),
            b in bytes(32),
            message in bytes(64),
        ) {
            prop_assume!(a != b);
            let cipher = ChaChaDaence::from_slice(&[0x29u8; 64]).expect("64-byte key");

            let sealed_a = cipher.seal(&a, &message);
            let sealed_b = cipher.seal(&b, &message);

            prop_assert_ne!(&sealed_a[..TAG_SIZE], &sealed_b[..TAG_SIZE]);
            prop_assert!(cipher.open(&b, &sealed_a).is_err());
        }
    }

    #[test]
    fn test_wrong_key_length_is_reported() {
        let err = ChaChaDaence::from_slice(&[0u8; 63]).expect_err("63 bytes is too short");
        assert_eq!(err.to_string(), "invalid key length: expected 64 bytes, got 63");

        assert!(Salsa20Daence::from_slice(&[0u8; 64]).is_err());
    }

    #[test]
    fn test_instances_are_shareable_across_threads() {
        let cipher = std::sync::Arc::new(ChaChaDaence::from_slice(&[0x44u8; 64]).expect("key"));
        let expected = cipher.seal(b"shared", b"payload");

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let cipher = std::sync::Arc::clone(&cipher);
                std::thread::spawn(move || cipher.seal(b"shared", b"payload"))
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().expect("thread panicked"), expected);
        }
    }
}

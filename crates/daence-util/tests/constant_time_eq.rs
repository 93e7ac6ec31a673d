// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod constant_time_eq_tests {
    use daence_util::constant_time_eq;
    use proptest::prelude::*;

    #[test]
    fn test_constant_time_eq_empty() {
        assert!(constant_time_eq(&[], &[]));
    }

    #[test]
    fn test_constant_time_eq_length_mismatch() {
        assert!(!constant_time_eq(&[0u8; 24], &[0u8; 32]));
    }

    #[test]
    fn test_constant_time_eq_first_byte_differs() {
        let mut b = [0x11u8; 32];
        let a = b;
        b[0] ^= 0x01;

        assert!(!constant_time_eq(&a, &b));
    }

    #[test]
    fn test_constant_time_eq_last_byte_differs() {
        let mut b = [0x11u8; 32];
        let a = b;
        b[31] ^= 0x80;

        assert!(!constant_time_eq(&a, &b));
    }

    proptest! {
        #[test]
        fn test_constant_time_eq_agrees_with_eq(
            a in proptest::collection::vec(any::<u8>(), 0..48),
            b in proptest::collection::vec(any::<u8>(), 0..48),
        ) {
            prop_assert_eq!(constant_time_eq(&a, &b), a == b);
            prop_assert!(constant_time_eq(&a, &a));
        }
    }
}

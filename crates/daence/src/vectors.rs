// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Known-answer data.

/// A reference input/output pair for [`Primitives::mix`](crate::Primitives::mix).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MixVector {
    /// Mixer key.
    pub key: [u8; 32],
    /// Mixer input.
    pub input: [u8; 16],
    /// Expected output.
    pub output: [u8; 32],
}

/// A sealed reference message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownAnswerVector {
    /// Raw key bytes.
    pub key: &'static [u8],
    /// Header.
    pub header: &'static [u8],
    /// Message.
    pub message: &'static [u8],
    /// Expected `tag || body`.
    pub ciphertext: &'static [u8],
}

/// `[start, start + 1, ..., start + N - 1]`.
#[cfg(any(feature = "chacha", feature = "salsa20"))]
const fn counting<const N: usize>(start: u8) -> [u8; N] {
    let mut out = [0u8; N];
    let mut i = 0;
    while i < N {
        out[i] = start.wrapping_add(i as u8);
        i += 1;
    }
    out
}

/// HChaCha20 test vector, draft-irtf-cfrg-xchacha-03 section 2.2.1.
#[cfg(feature = "chacha")]
pub(crate) const HCHACHA20_VECTOR: MixVector = MixVector {
    key: counting::<32>(0x00),
    input: [
        0x00, 0x00, 0x00, 0x09, 0x00, 0x00, 0x00, 0x4a, 0x00, 0x00, 0x00, 0x00, 0x31, 0x41, 0x59,
        0x27,
    ],
    output: [
        0x82, 0x41, 0x3b, 0x42, 0x27, 0xb2, 0x7b, 0xfe, 0xd3, 0x0e, 0x42, 0x50, 0x8a, 0x87, 0x7d,
        0x73, 0xa0, 0xf9, 0xe4, 0xd5, 0x8a, 0x74, 0xa8, 0x53, 0xc1, 0x2e, 0xc4, 0x13, 0x26, 0xd3,
        0xec, 0xdc,
    ],
};

#[cfg(feature = "chacha")]
const SIMPLE_KEY: [u8; 64] = counting(0x00);
#[cfg(feature = "chacha")]
const SIMPLE_HEADER: [u8; 16] = counting(0x40);
#[cfg(feature = "chacha")]
const SIMPLE_MESSAGE: [u8; 33] = counting(0x50);

#[cfg(any(feature = "chacha", feature = "salsa20"))]
const DEEP_KEY: [u8; 96] = counting(0x00);
#[cfg(any(feature = "chacha", feature = "salsa20"))]
const DEEP_HEADER: [u8; 16] = counting(0x60);
#[cfg(any(feature = "chacha", feature = "salsa20"))]
const DEEP_MESSAGE: [u8; 33] = counting(0x70);

/// ChaCha20, simple compression, 32-bit header-length framing.
#[cfg(feature = "chacha")]
pub(crate) const CHACHA_SHORT_VECTOR: KnownAnswerVector = KnownAnswerVector {
    key: &SIMPLE_KEY,
    header: &SIMPLE_HEADER,
    message: &SIMPLE_MESSAGE,
    ciphertext: &[
        // tag
        0xa0, 0x46, 0xb1, 0x3d, 0xe9, 0x14, 0x5c, 0x02, 0xd3, 0x9c, 0xee, 0xf2, 0x04, 0xe7, 0x99,
        0xa1, 0xc6, 0xe1, 0x0a, 0xa4, 0xa9, 0x92, 0x6a, 0x02,
        // body
        0xb5, 0x2d, 0xa0, 0xc6, 0x97, 0x0c, 0xf3, 0x9a, 0x41, 0x8a, 0x48, 0xa9, 0xc7, 0xe1, 0xcd,
        0x2c, 0xd2, 0xc3, 0x22, 0x1f, 0xe7, 0xa0, 0x96, 0xbf, 0xf3, 0xd1, 0x89, 0xc0, 0x78, 0xe8,
        0x55, 0xba, 0x8d,
    ],
};

/// ChaCha20, simple compression, 64-bit header- and message-length framing.
#[cfg(feature = "chacha")]
pub(crate) const CHACHA_WIDE_VECTOR: KnownAnswerVector = KnownAnswerVector {
    key: &SIMPLE_KEY,
    header: &SIMPLE_HEADER,
    message: &SIMPLE_MESSAGE,
    ciphertext: &[
        // tag
        0x99, 0x76, 0x70, 0x9c, 0x45, 0x3c, 0x8f, 0x94, 0xe4, 0x92, 0xef, 0xa7, 0x70, 0xe3, 0xc2,
        0x21, 0xe0, 0x8e, 0xa6, 0xa0, 0xe5, 0x88, 0xd5, 0x4e,
        // body
        0x22, 0x7d, 0x2c, 0x0c, 0xde, 0xe4, 0x08, 0xbc, 0xe9, 0xd0, 0x53, 0x2a, 0x3a, 0x36, 0x27,
        0x01, 0x0f, 0x11, 0xf2, 0xb2, 0xe4, 0x72, 0x67, 0xe5, 0x33, 0xe9, 0x5a, 0xa3, 0xb2, 0xe7,
        0x1e, 0xfb, 0x68,
    ],
};

/// Salsa20, deep compression.
#[cfg(feature = "salsa20")]
pub(crate) const SALSA_DEEP_VECTOR: KnownAnswerVector = KnownAnswerVector {
    key: &DEEP_KEY,
    header: &DEEP_HEADER,
    message: &DEEP_MESSAGE,
    ciphertext: &[
        // tag
        0xa5, 0x09, 0x6e, 0x6c, 0xd6, 0x56, 0x41, 0x31, 0xdc, 0xfb, 0xd1, 0x86, 0xcb, 0x1e, 0x13,
        0x72, 0x8e, 0x2b, 0x67, 0x19, 0xb0, 0xbf, 0x71, 0x94,
        // body
        0x14, 0xfb, 0x8f, 0x32, 0x8f, 0xca, 0x05, 0x2a, 0xcd, 0x43, 0x27, 0xd1, 0x37, 0x12, 0x67,
        0x96, 0x19, 0x35, 0x56, 0x63, 0x18, 0x55, 0x38, 0x71, 0xb9, 0x0c, 0xc9, 0x08, 0x29, 0xa9,
        0xd9, 0x60, 0xf9,
    ],
};

/// ChaCha20, deep compression.
///
/// No published reference exists for this pairing. Derived from
/// Poly1305 with `s = 0` over the deep layout, HChaCha20 chaining and
/// XChaCha20, using the same inputs as the Salsa20 deep vector.
#[cfg(feature = "chacha")]
pub(crate) const CHACHA_DEEP_VECTOR: KnownAnswerVector = KnownAnswerVector {
    key: &DEEP_KEY,
    header: &DEEP_HEADER,
    message: &DEEP_MESSAGE,
    ciphertext: &[
        // tag
        0xac, 0x7f, 0x11, 0x57, 0xd0, 0x30, 0xc7, 0x8d, 0xd6, 0xc9, 0xe8, 0x4a, 0x06, 0x20, 0x93,
        0xf8, 0x56, 0x80, 0x75, 0x03, 0xb4, 0xd1, 0x6a, 0x3a,
        // body
        0x0c, 0x3b, 0x03, 0xa0, 0x72, 0x74, 0x54, 0x92, 0xa5, 0x93, 0xf0, 0xde, 0xd0, 0x8c, 0x8b,
        0x47, 0x0a, 0x90, 0x33, 0xe7, 0xab, 0xde, 0x0c, 0x90, 0x51, 0xa8, 0xe0, 0x81, 0xeb, 0x4a,
        0x44, 0xfb, 0x82,
    ],
};

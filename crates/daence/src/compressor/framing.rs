// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Length framings for the simple compressor.
//!
//! Both framings end the MAC input with a length block processed as an
//! unpadded final block. They yield different digests for the same input,
//! so every instantiation names exactly one of them.

use daence_util::{u32_to_le, u64_to_le};

use crate::consts::MAX_FRAMING_SIZE;
use crate::traits::LengthFraming;

/// `LE32(|header|)`: four bytes, header length only.
///
/// Headers longer than `u32::MAX` bytes cannot be framed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShortFraming;

impl LengthFraming for ShortFraming {
    const NAME: &'static str = "le32";
    const MAX_HEADER_LEN: u64 = u32::MAX as u64;

    fn encode(header_len: u64, _message_len: u64, out: &mut [u8; MAX_FRAMING_SIZE]) -> usize {
        debug_assert!(header_len <= Self::MAX_HEADER_LEN);

        let mut len = header_len as u32;
        let mut bytes = [0u8; 4];
        u32_to_le(&mut len, &mut bytes);

        out[..4].copy_from_slice(&bytes);
        4
    }
}

/// `LE64(|header|) || LE64(|message|)`: one full 16-byte block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WideFraming;

impl LengthFraming for WideFraming {
    const NAME: &'static str = "le64x2";
    const MAX_HEADER_LEN: u64 = u64::MAX;

    fn encode(header_len: u64, message_len: u64, out: &mut [u8; MAX_FRAMING_SIZE]) -> usize {
        let (header_bytes, message_bytes) = out.split_at_mut(8);

        let mut len = header_len;
        let mut bytes = [0u8; 8];
        u64_to_le(&mut len, &mut bytes);
        header_bytes.copy_from_slice(&bytes);

        len = message_len;
        u64_to_le(&mut len, &mut bytes);
        message_bytes.copy_from_slice(&bytes);

        MAX_FRAMING_SIZE
    }
}

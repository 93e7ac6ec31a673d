// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Poly1305 as a one-time MAC with a 16-byte key.

use daence_zero::SensitiveArray;
use poly1305::Poly1305;
use poly1305::universal_hash::{KeyInit, UniversalHash};

use crate::consts::{DIGEST_SIZE, MAC_KEY_SIZE};
use crate::traits::OneTimeMac;

const POLY1305_KEY_SIZE: usize = 32;

/// Poly1305 keyed with `r = key` and `s = 0`.
///
/// The zero addend turns the MAC into a bare polynomial evaluation. That is
/// sound here because its output never leaves the construction unmixed.
pub struct Poly1305Mac(Poly1305);

impl OneTimeMac for Poly1305Mac {
    fn new(key: &[u8; MAC_KEY_SIZE]) -> Self {
        let mut full = SensitiveArray::<POLY1305_KEY_SIZE>::new();
        full[..MAC_KEY_SIZE].copy_from_slice(key);

        Self(Poly1305::new(poly1305::Key::from_slice(&full[..])))
    }

    #[inline]
    fn update_padded(&mut self, data: &[u8]) {
        self.0.update_padded(data);
    }

    fn finalize_unpadded(self, tail: &[u8], out: &mut [u8; DIGEST_SIZE]) {
        let mut tag = self.0.compute_unpadded(tail);
        out.copy_from_slice(&tag);
        daence_util::fast_zeroize_slice(tag.as_mut_slice());
    }
}

// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Single-layer compression under `k1` and `k2`.

use core::marker::PhantomData;

use crate::consts::{DIGEST_SIZE, MAC_KEY_SIZE, MAX_FRAMING_SIZE};
use crate::key::SimpleKey;
use crate::traits::{LengthFraming, OneTimeMac, Variant};
use crate::types::Digests;

/// `h_i = Mac_{k_i}(pad0(header) || pad0(message) || L)` for `i = 1, 2`,
/// with the length block `L` chosen by `F`.
pub struct Simple<F>(PhantomData<fn() -> F>);

impl<F: LengthFraming> Variant for Simple<F> {
    const NAME: &'static str = "simple";
    const MAX_HEADER_LEN: u64 = F::MAX_HEADER_LEN;

    type Key = SimpleKey;

    fn compress<M: OneTimeMac>(
        key: &SimpleKey,
        header: &[u8],
        message: &[u8],
        digests: &mut Digests,
    ) {
        let mut lengths = [0u8; MAX_FRAMING_SIZE];
        let used = F::encode(header.len() as u64, message.len() as u64, &mut lengths);
        let lengths = &lengths[..used];

        let (k1, k2) = key.mac_keys();
        let (h1, h2) = digests.slots_mut();

        absorb::<M>(k1, header, message, lengths, h1);
        absorb::<M>(k2, header, message, lengths, h2);
    }
}

fn absorb<M: OneTimeMac>(
    key: &[u8; MAC_KEY_SIZE],
    header: &[u8],
    message: &[u8],
    lengths: &[u8],
    out: &mut [u8; DIGEST_SIZE],
) {
    let mut mac = M::new(key);
    mac.update_padded(header);
    mac.update_padded(message);
    mac.finalize_unpadded(lengths, out);
}

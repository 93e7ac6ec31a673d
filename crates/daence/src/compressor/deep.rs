// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Two-layer compression under `k1`..`k4`.

use daence_zero::ZeroizingMutGuard;

use crate::consts::DIGEST_SIZE;
use crate::key::DeepKey;
use crate::traits::{OneTimeMac, Variant};
use crate::types::Digests;

/// Inner layer: `k1` and `k2` each MAC the header and the message
/// separately. Outer layer: `k3` and `k4` each MAC the 64-byte
/// concatenation of the four inner digests.
///
/// ```text
/// inner = Mac_k1(A) || Mac_k2(A) || Mac_k1(M) || Mac_k2(M)
/// h3    = Mac_k3(inner)
/// h4    = Mac_k4(inner)
/// ```
///
/// Lengths are implied by the unpadded MAC of each input, so no framing
/// block is needed and the header length is unbounded.
pub struct Deep;

impl Variant for Deep {
    const NAME: &'static str = "deep";
    const MAX_HEADER_LEN: u64 = u64::MAX;

    type Key = DeepKey;

    fn compress<M: OneTimeMac>(
        key: &DeepKey,
        header: &[u8],
        message: &[u8],
        digests: &mut Digests,
    ) {
        let mut inner = [[0u8; DIGEST_SIZE]; 4];
        let mut inner = ZeroizingMutGuard::from(&mut inner);

        let (k1, k2) = key.inner_mac_keys();
        M::authenticate(k1, header, &mut inner[0]);
        M::authenticate(k2, header, &mut inner[1]);
        M::authenticate(k1, message, &mut inner[2]);
        M::authenticate(k2, message, &mut inner[3]);

        let (k3, k4) = key.outer_mac_keys();
        let (h3, h4) = digests.slots_mut();
        M::authenticate(k3, inner.as_flattened(), h3);
        M::authenticate(k4, inner.as_flattened(), h4);
    }
}

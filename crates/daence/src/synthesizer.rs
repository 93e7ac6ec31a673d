// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Tag synthesis: `u = Mix(k0, h1)`, `t = Mix(u, h2)`, `tag = t[0..24]`.

use daence_util::fast_zeroize_slice;
use daence_zero::SensitiveArray;

use crate::consts::{MIX_OUTPUT_SIZE, STREAM_KEY_SIZE, TAG_SIZE, VERIFY_WIDTH};
use crate::traits::Primitives;
use crate::types::{Digests, SyntheticTag};

/// Writes the full mixer output `t` with bytes `24..32` cleared.
///
/// The result is the tag zero-padded to the verification width, which is
/// what `open` compares against.
pub(crate) fn synthesize_wide<P: Primitives>(
    stream_key: &[u8; STREAM_KEY_SIZE],
    digests: &Digests,
    wide: &mut [u8; VERIFY_WIDTH],
) {
    let mut chained = SensitiveArray::<MIX_OUTPUT_SIZE>::new();

    P::mix(stream_key, digests.first(), &mut chained);
    P::mix(&chained, digests.second(), wide);

    fast_zeroize_slice(&mut wide[TAG_SIZE..]);
}

/// The 24-byte synthetic tag for `digests`.
pub(crate) fn synthesize<P: Primitives>(
    stream_key: &[u8; STREAM_KEY_SIZE],
    digests: &Digests,
) -> SyntheticTag {
    let mut wide = SensitiveArray::<VERIFY_WIDTH>::new();
    synthesize_wide::<P>(stream_key, digests, &mut wide);

    let mut tag = [0u8; TAG_SIZE];
    tag.copy_from_slice(&wide[..TAG_SIZE]);
    SyntheticTag::from_bytes(tag)
}

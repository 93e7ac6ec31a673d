// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Synthetic tag length. Also the nonce consumed by the cipher engine.
pub const TAG_SIZE: usize = 24;

/// `k0`: keys both the mixer and the stream cipher.
pub const STREAM_KEY_SIZE: usize = 32;

/// One-time MAC sub-key (`k1`..`k4`). Used as the Poly1305 `r` with `s = 0`.
pub const MAC_KEY_SIZE: usize = 16;

/// One-time MAC output.
pub const DIGEST_SIZE: usize = 16;

/// Mixer input block.
pub const MIX_INPUT_SIZE: usize = 16;

/// Mixer output block.
pub const MIX_OUTPUT_SIZE: usize = 32;

/// Nonce of the short-nonce stream cipher behind the engine.
pub const STREAM_NONCE_SIZE: usize = TAG_SIZE - MIX_INPUT_SIZE;

/// `k0 || k1 || k2`.
pub const SIMPLE_KEY_SIZE: usize = STREAM_KEY_SIZE + 2 * MAC_KEY_SIZE;

/// `k0 || k1 || k2 || k3 || k4`.
pub const DEEP_KEY_SIZE: usize = STREAM_KEY_SIZE + 4 * MAC_KEY_SIZE;

/// Upper bound on the message length of any instantiation.
///
/// Each primitive set may lower it to what its stream cipher can produce
/// from counter 0; see [`Daence::MAX_MESSAGE_LEN`](crate::Daence::MAX_MESSAGE_LEN).
pub const MAX_MESSAGE_LEN: u64 = 1 << 38;

/// Tags are compared over this many bytes, zero-padded past `TAG_SIZE`.
pub(crate) const VERIFY_WIDTH: usize = MIX_OUTPUT_SIZE;

/// Longest length-framing block any variant appends.
pub const MAX_FRAMING_SIZE: usize = 16;

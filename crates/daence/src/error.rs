// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types.

use thiserror::Error;

/// The single failure `open` can report.
///
/// Deliberately carries no detail: truncated input, a forged tag and an
/// out-of-range length are indistinguishable to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("authentication failed")]
pub struct AuthFailure;

/// Raw key bytes could not be split into sub-keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum KeyError {
    /// The slice length does not match the variant's key size.
    #[error("invalid key length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// Key size the variant requires.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },
}

/// Stage at which the known-answer self-test diverged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelfTestError {
    /// The mixer did not reproduce its reference output.
    #[error("self-test failed: mixer output mismatch")]
    Mix,

    /// Sealing the reference input did not reproduce the reference ciphertext.
    #[error("self-test failed: sealed output mismatch")]
    SealMismatch,

    /// The reference ciphertext was rejected.
    #[error("self-test failed: reference ciphertext rejected")]
    OpenRejected,

    /// The reference ciphertext opened to the wrong plaintext.
    #[error("self-test failed: opened plaintext mismatch")]
    OpenMismatch,

    /// A corrupted ciphertext was accepted.
    #[error("self-test failed: forged ciphertext accepted")]
    ForgeryAccepted,
}

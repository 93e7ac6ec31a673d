// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Known-answer self-test.

use crate::aead::Daence;
use crate::consts::{MIX_OUTPUT_SIZE, TAG_SIZE};
use crate::error::SelfTestError;
use crate::traits::{Primitives, Variant};
use crate::vectors::KnownAnswerVector;

/// Byte flipped in the forged copy of the reference ciphertext.
const FORGERY_OFFSET: usize = 18;
const FORGERY_MASK: u8 = 0x04;

/// Instantiations with a published reference ciphertext.
pub trait KnownAnswer {
    /// The reference vector.
    const VECTOR: KnownAnswerVector;
}

#[cfg(feature = "chacha")]
impl KnownAnswer for crate::ChaChaDaence {
    const VECTOR: KnownAnswerVector = crate::vectors::CHACHA_SHORT_VECTOR;
}

#[cfg(feature = "chacha")]
impl KnownAnswer for crate::ChaChaDaenceWide {
    const VECTOR: KnownAnswerVector = crate::vectors::CHACHA_WIDE_VECTOR;
}

#[cfg(feature = "chacha")]
impl KnownAnswer for crate::ChaChaDaenceDeep {
    const VECTOR: KnownAnswerVector = crate::vectors::CHACHA_DEEP_VECTOR;
}

#[cfg(feature = "salsa20")]
impl KnownAnswer for crate::Salsa20Daence {
    const VECTOR: KnownAnswerVector = crate::vectors::SALSA_DEEP_VECTOR;
}

impl<P, V> Daence<P, V>
where
    P: Primitives,
    V: Variant,
    Self: KnownAnswer,
{
    /// Checks the mixer and the full construction against reference data.
    ///
    /// Runs, in order: the mixer vector (when the primitive set has one),
    /// seal of the reference input, open of the reference ciphertext, and
    /// rejection of that ciphertext with one bit flipped inside the tag.
    ///
    /// # Errors
    ///
    /// The first [`SelfTestError`] stage that diverged.
    pub fn selftest() -> Result<(), SelfTestError> {
        let result = Self::run_known_answer();

        match &result {
            Ok(()) => tracing::debug!(
                primitives = P::NAME,
                variant = V::NAME,
                "known-answer self-test passed"
            ),
            Err(err) => tracing::warn!(
                primitives = P::NAME,
                variant = V::NAME,
                error = %err,
                "known-answer self-test failed"
            ),
        }

        result
    }

    fn run_known_answer() -> Result<(), SelfTestError> {
        if let Some(vector) = P::MIX_VECTOR {
            let mut output = [0u8; MIX_OUTPUT_SIZE];
            P::mix(&vector.key, &vector.input, &mut output);

            if output != vector.output {
                return Err(SelfTestError::Mix);
            }
        }

        let vector = <Self as KnownAnswer>::VECTOR;
        debug_assert!(FORGERY_OFFSET < TAG_SIZE);

        let cipher = Self::from_slice(vector.key).map_err(|_| SelfTestError::SealMismatch)?;

        let mut sealed = cipher.seal(vector.header, vector.message);
        if sealed != vector.ciphertext {
            return Err(SelfTestError::SealMismatch);
        }

        let opened = cipher
            .open(vector.header, vector.ciphertext)
            .map_err(|_| SelfTestError::OpenRejected)?;
        if opened != vector.message {
            return Err(SelfTestError::OpenMismatch);
        }

        sealed[FORGERY_OFFSET] ^= FORGERY_MASK;
        if cipher.open(vector.header, &sealed).is_ok() {
            return Err(SelfTestError::ForgeryAccepted);
        }

        Ok(())
    }
}

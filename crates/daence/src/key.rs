// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Key layouts.
//!
//! ```text
//! simple: k0[0..32] || k1[32..48] || k2[48..64]
//! deep:   k0[0..32] || k1[32..48] || k2[48..64] || k3[64..80] || k4[80..96]
//! ```

use core::fmt;
use core::sync::atomic::{Ordering, compiler_fence};

use daence_zero::{
    AssertZeroizeOnDrop, FastZeroizable, SensitiveArray, ZeroizationProbe, ZeroizeOnDropSentinel,
    assert_zeroize_on_drop,
};

use crate::consts::{DEEP_KEY_SIZE, MAC_KEY_SIZE, SIMPLE_KEY_SIZE, STREAM_KEY_SIZE};
use crate::error::KeyError;
use crate::traits::CipherKey;

/// Generates a key type holding `k0` plus the listed MAC sub-keys.
macro_rules! define_key {
    ($(#[$meta:meta])* $name:ident, $size:expr, [$($mac:ident),+]) => {
        $(#[$meta])*
        pub struct $name {
            k0: SensitiveArray<STREAM_KEY_SIZE>,
            $($mac: SensitiveArray<MAC_KEY_SIZE>,)+
            __sentinel: ZeroizeOnDropSentinel,
        }

        impl $name {
            /// Raw key length.
            pub const SIZE: usize = $size;

            /// Splits `bytes` into sub-keys. `bytes` is left untouched.
            pub fn from_bytes(bytes: &[u8; $size]) -> Self {
                let mut key = Self {
                    k0: SensitiveArray::new(),
                    $($mac: SensitiveArray::new(),)+
                    __sentinel: ZeroizeOnDropSentinel::default(),
                };

                let (k0, macs) = bytes.split_at(STREAM_KEY_SIZE);
                key.k0.copy_from_slice(k0);

                let slots = [$(&mut key.$mac),+];
                for (slot, chunk) in slots.into_iter().zip(macs.chunks_exact(MAC_KEY_SIZE)) {
                    slot.copy_from_slice(chunk);
                }

                key
            }

            /// Splits `bytes` into sub-keys, then zeroes `bytes`.
            pub fn from_mut(bytes: &mut [u8; $size]) -> Self {
                let key = Self::from_bytes(bytes);
                bytes.fast_zeroize();
                key
            }
        }

        impl CipherKey for $name {
            const SIZE: usize = $size;

            #[inline]
            fn stream_key(&self) -> &[u8; STREAM_KEY_SIZE] {
                &*self.k0
            }

            fn from_slice(bytes: &[u8]) -> Result<Self, KeyError> {
                match bytes.first_chunk::<$size>() {
                    Some(exact) if bytes.len() == $size => Ok(Self::from_bytes(exact)),
                    _ => {
                        tracing::debug!(
                            key = stringify!($name),
                            expected = $size,
                            actual = bytes.len(),
                            "rejected key material of wrong length"
                        );
                        Err(KeyError::InvalidLength {
                            expected: $size,
                            actual: bytes.len(),
                        })
                    }
                }
            }
        }

        impl TryFrom<&[u8]> for $name {
            type Error = KeyError;

            fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
                <Self as CipherKey>::from_slice(bytes)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "([REDACTED])"))
            }
        }

        impl FastZeroizable for $name {
            fn fast_zeroize(&mut self) {
                self.k0.fast_zeroize();
                $(self.$mac.fast_zeroize();)+
                compiler_fence(Ordering::SeqCst);

                self.__sentinel.fast_zeroize();
            }
        }

        impl ZeroizationProbe for $name {
            fn is_zeroized(&self) -> bool {
                self.k0.is_zeroized() $(&& self.$mac.is_zeroized())+
            }
        }

        impl AssertZeroizeOnDrop for $name {
            fn clone_sentinel(&self) -> ZeroizeOnDropSentinel {
                self.__sentinel.clone()
            }

            fn assert_zeroize_on_drop(self) {
                assert_zeroize_on_drop(self);
            }
        }

        impl Drop for $name {
            fn drop(&mut self) {
                self.fast_zeroize();
            }
        }
    };
}

define_key!(
    /// Key of the simple variant: `k0`, `k1`, `k2` (64 bytes).
    SimpleKey,
    SIMPLE_KEY_SIZE,
    [k1, k2]
);

define_key!(
    /// Key of the deep variant: `k0`, `k1`..`k4` (96 bytes).
    DeepKey,
    DEEP_KEY_SIZE,
    [k1, k2, k3, k4]
);

impl SimpleKey {
    /// `(k1, k2)`.
    #[inline]
    pub(crate) fn mac_keys(&self) -> (&[u8; MAC_KEY_SIZE], &[u8; MAC_KEY_SIZE]) {
        (&*self.k1, &*self.k2)
    }
}

impl DeepKey {
    /// `(k1, k2)`, applied to header and message separately.
    #[inline]
    pub(crate) fn inner_mac_keys(&self) -> (&[u8; MAC_KEY_SIZE], &[u8; MAC_KEY_SIZE]) {
        (&*self.k1, &*self.k2)
    }

    /// `(k3, k4)`, applied to the concatenated inner digests.
    #[inline]
    pub(crate) fn outer_mac_keys(&self) -> (&[u8; MAC_KEY_SIZE], &[u8; MAC_KEY_SIZE]) {
        (&*self.k3, &*self.k4)
    }
}

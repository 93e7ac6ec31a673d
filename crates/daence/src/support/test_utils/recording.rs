// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! A primitive set that logs every mixer and stream call.

extern crate std;

use alloc::vec::Vec;
use core::cell::RefCell;
use core::marker::PhantomData;

use crate::consts::{MIX_INPUT_SIZE, MIX_OUTPUT_SIZE, STREAM_KEY_SIZE, STREAM_NONCE_SIZE};
use crate::traits::Primitives;
use crate::vectors::MixVector;

/// One recorded primitive invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrimitiveCall {
    /// `Mix(key, input) -> output`.
    Mix {
        /// Mixer key.
        key: [u8; STREAM_KEY_SIZE],
        /// Mixer input.
        input: [u8; MIX_INPUT_SIZE],
        /// Mixer output.
        output: [u8; MIX_OUTPUT_SIZE],
    },
    /// `Stream(key, nonce, counter)` over `len` bytes.
    Stream {
        /// Stream key.
        key: [u8; STREAM_KEY_SIZE],
        /// Stream nonce.
        nonce: [u8; STREAM_NONCE_SIZE],
        /// Starting block.
        counter: u32,
        /// Number of bytes processed.
        len: usize,
    },
}

std::thread_local! {
    static CALLS: RefCell<Vec<PrimitiveCall>> = const { RefCell::new(Vec::new()) };
}

/// Drains the calls recorded on the current thread.
pub fn take_calls() -> Vec<PrimitiveCall> {
    CALLS.with(|calls| core::mem::take(&mut *calls.borrow_mut()))
}

/// Discards the calls recorded on the current thread.
pub fn clear_calls() {
    CALLS.with(|calls| calls.borrow_mut().clear());
}

fn record(call: PrimitiveCall) {
    CALLS.with(|calls| calls.borrow_mut().push(call));
}

/// Delegates to `P` and records each call in a thread-local log.
///
/// The log is per thread, so parallel tests do not observe each other.
pub struct RecordingPrimitives<P>(PhantomData<fn() -> P>);

impl<P: Primitives> Primitives for RecordingPrimitives<P> {
    const NAME: &'static str = "recording";
    const MAX_STREAM_LEN: u64 = P::MAX_STREAM_LEN;
    const MIX_VECTOR: Option<MixVector> = P::MIX_VECTOR;

    type Mac = P::Mac;

    fn mix(
        key: &[u8; STREAM_KEY_SIZE],
        input: &[u8; MIX_INPUT_SIZE],
        output: &mut [u8; MIX_OUTPUT_SIZE],
    ) {
        P::mix(key, input, output);
        record(PrimitiveCall::Mix {
            key: *key,
            input: *input,
            output: *output,
        });
    }

    fn stream_xor(
        key: &[u8; STREAM_KEY_SIZE],
        nonce: &[u8; STREAM_NONCE_SIZE],
        counter: u32,
        data: &mut [u8],
    ) {
        P::stream_xor(key, nonce, counter, data);
        record(PrimitiveCall::Stream {
            key: *key,
            nonce: *nonce,
            counter,
            len: data.len(),
        });
    }
}

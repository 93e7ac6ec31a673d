// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

mod key;
mod key_sensitivity;
mod selftest;
mod tamper;

/// `[start, start + 1, ..]`, the pattern all reference vectors use.
pub(crate) fn counting(start: u8, len: usize) -> Vec<u8> {
    (0..len).map(|i| start.wrapping_add(i as u8)).collect()
}

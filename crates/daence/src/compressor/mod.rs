// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Message compressors: header and message in, two 16-byte digests out.

mod deep;
mod framing;
mod simple;

pub use deep::Deep;
pub use framing::{ShortFraming, WideFraming};
pub use simple::Simple;

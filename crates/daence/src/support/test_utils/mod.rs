// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! White-box helpers for exercising the generic construction.
//!
//! These record secret material in clear. Never enable `test-utils` in a
//! production build.

mod recording;

pub use recording::{PrimitiveCall, RecordingPrimitives, clear_calls, take_calls};

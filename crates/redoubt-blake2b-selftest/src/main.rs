// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Replays the BLAKE2b keyed known-answer vectors and reports pass/fail.
//!
//! Log level is taken from `RUST_LOG` (default `info`). Exit code is 0 on
//! pass, 1 on the first mismatch.

use std::process::ExitCode;

use redoubt_blake2b::kat::KEYED_KAT_LEN;
use redoubt_blake2b::self_test;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    match self_test() {
        Ok(()) => {
            tracing::info!(vectors = KEYED_KAT_LEN, "BLAKE2b self-test: PASS");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "BLAKE2b self-test: FAIL");
            ExitCode::FAILURE
        }
    }
}

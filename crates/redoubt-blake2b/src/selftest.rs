// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::digest::Digest;
use crate::error::Blake2bError;
use crate::hash::keyed_hash;
use crate::kat::{KAT_KEY, KEYED_KAT, KEYED_KAT_LEN, kat_message};
use crate::state::Blake2b;

/// Replay every keyed known-answer vector.
///
/// Each row is checked twice: once one-shot and once fed in uneven chunks.
/// Stops at the first mismatch; nothing is retried.
///
/// # Errors
/// `SelfTestFailed` with the message length of the first failing row.
pub fn self_test() -> Result<(), Blake2bError> {
    for (len, expected) in KEYED_KAT.iter().enumerate() {
        let msg = kat_message(len);
        let msg = &msg[..len];

        let one_shot = keyed_hash(msg, &KAT_KEY, 64)?;
        let chunked = chunked_keyed_hash(msg, len % 17 + 1)?;

        if !one_shot.verify(expected) || !chunked.verify(expected) {
            tracing::error!(message_length = len, "blake2b known-answer mismatch");
            return Err(Blake2bError::SelfTestFailed {
                message_length: len,
            });
        }
    }

    tracing::debug!(vectors = KEYED_KAT_LEN, "blake2b self-test passed");

    Ok(())
}

fn chunked_keyed_hash(msg: &[u8], chunk_len: usize) -> Result<Digest, Blake2bError> {
    let mut state = Blake2b::new_keyed(64, &KAT_KEY)?;
    for chunk in msg.chunks(chunk_len) {
        state.update(chunk)?;
    }
    state.finalize()
}

// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Little-endian 64-bit word codec (RFC 7693 Section 2.4).

use crate::consts::BLOCK_LEN;

/// Read a little-endian u64
#[inline(always)]
pub const fn load64(bytes: &[u8; 8]) -> u64 {
    u64::from_le_bytes(*bytes)
}

/// Write a u64 as little-endian bytes
#[inline(always)]
pub const fn store64(value: u64) -> [u8; 8] {
    value.to_le_bytes()
}

/// Decode a full message block into 16 words
#[inline(always)]
pub fn load_block(block: &[u8; BLOCK_LEN], m: &mut [u64; 16]) {
    for (word, chunk) in m.iter_mut().zip(block.chunks_exact(8)) {
        let mut lane = [0u8; 8];
        lane.copy_from_slice(chunk);
        *word = load64(&lane);
    }
}

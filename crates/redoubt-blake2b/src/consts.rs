// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// BLAKE2b block size in bytes
pub const BLOCK_LEN: usize = 128;

/// Maximum digest length in bytes
pub const MAX_DIGEST_LEN: usize = 64;

/// Maximum key length in bytes
pub const MAX_KEY_LEN: usize = 64;

/// Salt length in bytes
pub const SALT_LEN: usize = 16;

/// Personalization length in bytes
pub const PERSONAL_LEN: usize = 16;

/// Packed parameter block size in bytes
pub(crate) const PARAM_BLOCK_LEN: usize = 64;

/// Internal buffer holds two blocks so the last one can be held back for finalization
pub(crate) const BUF_LEN: usize = 2 * BLOCK_LEN;

/// Rounds of the compression function
pub(crate) const ROUNDS: usize = 12;

/// Initialization vector per RFC 7693 Section 2.6
/// Same values as SHA-512 H(0)
pub(crate) const IV: [u64; 8] = [
    0x6a09e667f3bcc908,
    0xbb67ae8584caa73b,
    0x3c6ef372fe94f82b,
    0xa54ff53a5f1d36f1,
    0x510e527fade682d1,
    0x9b05688c2b3e6c1f,
    0x1f83d9abfb41bd6b,
    0x5be0cd19137e2179,
];

/// Message schedule permutations per RFC 7693 Section 2.7
///
/// Rounds 10 and 11 reuse rows 0 and 1 (`SIGMA[round % 10]`).
pub(crate) const SIGMA: [[usize; 16]; 10] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
    [14, 10, 4, 8, 9, 15, 13, 6, 1, 12, 0, 2, 11, 7, 5, 3],
    [11, 8, 12, 0, 5, 2, 15, 13, 10, 14, 3, 6, 7, 1, 9, 4],
    [7, 9, 3, 1, 13, 12, 11, 14, 2, 6, 5, 10, 4, 0, 15, 8],
    [9, 0, 5, 7, 2, 4, 10, 15, 14, 1, 11, 12, 6, 8, 3, 13],
    [2, 12, 6, 10, 0, 11, 8, 3, 4, 13, 7, 5, 15, 14, 1, 9],
    [12, 5, 1, 15, 14, 13, 4, 10, 0, 7, 6, 3, 9, 2, 8, 11],
    [13, 11, 7, 14, 12, 1, 3, 9, 5, 0, 15, 4, 8, 6, 2, 10],
    [6, 15, 14, 9, 11, 3, 0, 8, 12, 2, 13, 7, 1, 4, 10, 5],
    [10, 2, 8, 4, 7, 6, 1, 5, 15, 11, 9, 14, 3, 12, 13, 0],
];

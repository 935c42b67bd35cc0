// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! BLAKE2b compression function F per RFC 7693 Section 3.2

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::{BLOCK_LEN, IV, ROUNDS, SIGMA};
use crate::word::load_block;

/// Rotation constants (R1, R2, R3, R4) per RFC 7693 Section 2.1
const R1: u32 = 32;
const R2: u32 = 24;
const R3: u32 = 16;
const R4: u32 = 63;

/// Compression work area.
///
/// The local work vector and the decoded message words live in the struct
/// so they can be wiped after every block instead of lingering on the stack.
#[derive(Default, Zeroize, ZeroizeOnDrop)]
pub(crate) struct Compressor {
    v: [u64; 16],
    m: [u64; 16],
}

impl Compressor {
    /// Mixing function G per RFC 7693 Section 3.1
    #[inline(always)]
    fn g(&mut self, a: usize, b: usize, c: usize, d: usize, x: u64, y: u64) {
        let v = &mut self.v;

        v[a] = v[a].wrapping_add(v[b]).wrapping_add(x);
        v[d] = (v[d] ^ v[a]).rotate_right(R1);
        v[c] = v[c].wrapping_add(v[d]);
        v[b] = (v[b] ^ v[c]).rotate_right(R2);

        v[a] = v[a].wrapping_add(v[b]).wrapping_add(y);
        v[d] = (v[d] ^ v[a]).rotate_right(R3);
        v[c] = v[c].wrapping_add(v[d]);
        v[b] = (v[b] ^ v[c]).rotate_right(R4);
    }

    #[inline(always)]
    fn round(&mut self, s: &[usize; 16]) {
        // Columns
        self.g(0, 4, 8, 12, self.m[s[0]], self.m[s[1]]);
        self.g(1, 5, 9, 13, self.m[s[2]], self.m[s[3]]);
        self.g(2, 6, 10, 14, self.m[s[4]], self.m[s[5]]);
        self.g(3, 7, 11, 15, self.m[s[6]], self.m[s[7]]);

        // Diagonals
        self.g(0, 5, 10, 15, self.m[s[8]], self.m[s[9]]);
        self.g(1, 6, 11, 12, self.m[s[10]], self.m[s[11]]);
        self.g(2, 7, 8, 13, self.m[s[12]], self.m[s[13]]);
        self.g(3, 4, 9, 14, self.m[s[14]], self.m[s[15]]);
    }

    /// Compress one block into `h`.
    ///
    /// # Arguments
    /// * `h` - Chaining value (8 × u64, input/output)
    /// * `block` - Message block (128 bytes)
    /// * `t` - Byte counter (low, high)
    /// * `f` - Finalization flags, each either 0 or all ones
    pub(crate) fn compress(
        &mut self,
        h: &mut [u64; 8],
        block: &[u8; BLOCK_LEN],
        t: &[u64; 2],
        f: &[u64; 2],
    ) {
        load_block(block, &mut self.m);

        self.v[..8].copy_from_slice(h);
        self.v[8..].copy_from_slice(&IV);

        self.v[12] ^= t[0];
        self.v[13] ^= t[1];
        self.v[14] ^= f[0];
        self.v[15] ^= f[1];

        for round in 0..ROUNDS {
            self.round(&SIGMA[round % SIGMA.len()]);
        }

        for (i, word) in h.iter_mut().enumerate() {
            *word ^= self.v[i] ^ self.v[i + 8];
        }

        self.zeroize();
    }

    #[cfg(test)]
    pub(crate) fn is_wiped(&self) -> bool {
        self.v.iter().chain(self.m.iter()).all(|w| *w == 0)
    }
}

/// BLAKE2b compression function F (single block).
///
/// Updates the chaining value `h` in place. Runs on a temporary work area
/// that is wiped before returning.
///
/// # Arguments
/// * `h` - Chaining value (8 × u64, input/output)
/// * `block` - Message block (128 bytes)
/// * `t` - Byte counter (low, high)
/// * `f` - Finalization flags, each either 0 or `u64::MAX`
pub fn compress(h: &mut [u64; 8], block: &[u8; BLOCK_LEN], t: &[u64; 2], f: &[u64; 2]) {
    let mut compressor = Compressor::default();
    compressor.compress(h, block, t, f);
}

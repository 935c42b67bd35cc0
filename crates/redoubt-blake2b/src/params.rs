// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! BLAKE2b parameter block per RFC 7693 Section 2.5 and the BLAKE2 paper
//! Section 2.8 (sequential mode only)

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::{MAX_DIGEST_LEN, MAX_KEY_LEN, PARAM_BLOCK_LEN, PERSONAL_LEN, SALT_LEN};
use crate::error::{Blake2bError, Parameter};
use crate::word::load64;

/// Parameter block.
///
/// Layout of the packed 64 bytes (all multi-byte fields little-endian):
///
/// | Offset | Field           |
/// |--------|-----------------|
/// | 0      | digest length   |
/// | 1      | key length      |
/// | 2      | fanout          |
/// | 3      | depth           |
/// | 4..8   | leaf length     |
/// | 8..16  | node offset     |
/// | 16     | node depth      |
/// | 17     | inner length    |
/// | 18..32 | reserved (zero) |
/// | 32..48 | salt            |
/// | 48..64 | personalization |
#[derive(Debug, Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct ParamBlock {
    digest_length: u8,
    key_length: u8,
    fanout: u8,
    depth: u8,
    leaf_length: u32,
    node_offset: u64,
    node_depth: u8,
    inner_length: u8,
    salt: [u8; SALT_LEN],
    personal: [u8; PERSONAL_LEN],
}

impl ParamBlock {
    /// Build a sequential-mode parameter block.
    ///
    /// Tree fields are fixed to fanout = 1, depth = 1 and zero elsewhere.
    /// Missing salt or personalization is zero-filled.
    ///
    /// # Errors
    /// `InvalidParameter` if `digest_length` is outside 1..=64 or
    /// `key_length` exceeds 64.
    pub fn build(
        digest_length: usize,
        key_length: usize,
        salt: Option<&[u8; SALT_LEN]>,
        personal: Option<&[u8; PERSONAL_LEN]>,
    ) -> Result<Self, Blake2bError> {
        if digest_length == 0 || digest_length > MAX_DIGEST_LEN {
            return Err(Blake2bError::invalid(Parameter::DigestLength, digest_length));
        }

        if key_length > MAX_KEY_LEN {
            return Err(Blake2bError::invalid(Parameter::KeyLength, key_length));
        }

        Ok(Self {
            digest_length: digest_length as u8,
            key_length: key_length as u8,
            fanout: 1,
            depth: 1,
            leaf_length: 0,
            node_offset: 0,
            node_depth: 0,
            inner_length: 0,
            salt: salt.copied().unwrap_or_default(),
            personal: personal.copied().unwrap_or_default(),
        })
    }

    /// Digest length in bytes
    pub fn digest_length(&self) -> usize {
        self.digest_length as usize
    }

    /// Key length in bytes (0 = unkeyed)
    pub fn key_length(&self) -> usize {
        self.key_length as usize
    }

    /// Salt bytes
    pub fn salt(&self) -> &[u8; SALT_LEN] {
        &self.salt
    }

    /// Personalization bytes
    pub fn personal(&self) -> &[u8; PERSONAL_LEN] {
        &self.personal
    }

    /// Pack into the fixed 64-byte layout
    pub fn to_bytes(&self) -> [u8; PARAM_BLOCK_LEN] {
        let mut out = [0u8; PARAM_BLOCK_LEN];

        out[0] = self.digest_length;
        out[1] = self.key_length;
        out[2] = self.fanout;
        out[3] = self.depth;
        out[4..8].copy_from_slice(&self.leaf_length.to_le_bytes());
        out[8..16].copy_from_slice(&self.node_offset.to_le_bytes());
        out[16] = self.node_depth;
        out[17] = self.inner_length;
        // 18..32 reserved
        out[32..48].copy_from_slice(&self.salt);
        out[48..64].copy_from_slice(&self.personal);

        out
    }

    /// XOR the packed block into an IV-seeded chaining value, one 8-byte lane per word
    pub fn apply(&self, h: &mut [u64; 8]) {
        let mut packed = self.to_bytes();
        let mut lane = [0u8; 8];

        for (word, chunk) in h.iter_mut().zip(packed.chunks_exact(8)) {
            lane.copy_from_slice(chunk);
            *word ^= load64(&lane);
        }

        lane.zeroize();
        packed.zeroize();
    }
}

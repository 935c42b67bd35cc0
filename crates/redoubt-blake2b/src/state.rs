// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! BLAKE2b streaming state per RFC 7693 Section 3.3

use zeroize::Zeroize;

use crate::compress::Compressor;
use crate::consts::{BLOCK_LEN, BUF_LEN, IV, MAX_DIGEST_LEN, PERSONAL_LEN, SALT_LEN};
use crate::digest::Digest;
use crate::error::{Blake2bError, Parameter};
use crate::params::ParamBlock;
use crate::word::store64;

/// Lifecycle of a [`Blake2b`] state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Initialized, no caller data absorbed yet
    Fresh,
    /// At least one `update` call accepted
    Absorbing,
    /// Digest produced; the state is spent
    Finalized,
}

/// BLAKE2b streaming state.
///
/// Input is buffered one block behind: a full block is only compressed once
/// more data arrives after it, so the final block is always still buffered
/// when `finalize` sets the last-block flag.
///
/// All sensitive working data lives in the struct and is zeroized on
/// finalization and on drop.
pub struct Blake2b {
    // Chaining value
    h: [u64; 8],

    // Bytes compressed so far (low, high)
    t: [u64; 2],

    // Last block, last node
    f: [u64; 2],

    // Input buffering
    buf: [u8; BUF_LEN],
    buf_len: usize,

    // Compression work vectors
    compressor: Compressor,

    // Output staging
    out: [u8; MAX_DIGEST_LEN],

    digest_length: usize,
    last_node: bool,
    phase: Phase,
}

impl Blake2b {
    /// Create an unkeyed state with the given digest length (1..=64)
    pub fn new(digest_length: usize) -> Result<Self, Blake2bError> {
        Self::init(digest_length, None, None)
    }

    /// Create a keyed state (MAC mode). The key must be 1..=64 bytes.
    pub fn new_keyed(digest_length: usize, key: &[u8]) -> Result<Self, Blake2bError> {
        Self::init_key(digest_length, key, None, None)
    }

    /// Create an unkeyed state with optional salt and personalization.
    ///
    /// # Errors
    /// `InvalidParameter` if `digest_length` is outside 1..=64.
    pub fn init(
        digest_length: usize,
        salt: Option<&[u8; SALT_LEN]>,
        personal: Option<&[u8; PERSONAL_LEN]>,
    ) -> Result<Self, Blake2bError> {
        let params = ParamBlock::build(digest_length, 0, salt, personal)?;
        Ok(Self::with_params(&params))
    }

    /// Create a keyed state with optional salt and personalization.
    ///
    /// The key is zero-padded to a full block and absorbed before any caller
    /// data; that block counts toward the message length.
    ///
    /// # Errors
    /// - `InvalidParameter` if `digest_length` is outside 1..=64 or the key
    ///   is longer than 64 bytes
    /// - `InvalidKey` if the key is empty
    pub fn init_key(
        digest_length: usize,
        key: &[u8],
        salt: Option<&[u8; SALT_LEN]>,
        personal: Option<&[u8; PERSONAL_LEN]>,
    ) -> Result<Self, Blake2bError> {
        let params = ParamBlock::build(digest_length, key.len(), salt, personal)?;

        if key.is_empty() {
            return Err(Blake2bError::InvalidKey);
        }

        let mut state = Self::with_params(&params);

        let mut block = [0u8; BLOCK_LEN];
        block[..key.len()].copy_from_slice(key);
        state.absorb(&block);
        block.zeroize();

        Ok(state)
    }

    /// Create a state from a prepared parameter block.
    ///
    /// Does not absorb a key: a block with a non-zero key length must be
    /// followed by the padded key block (see [`Blake2b::init_key`]).
    pub(crate) fn with_params(params: &ParamBlock) -> Self {
        let mut h = IV;
        params.apply(&mut h);

        Self {
            h,
            t: [0; 2],
            f: [0; 2],
            buf: [0; BUF_LEN],
            buf_len: 0,
            compressor: Compressor::default(),
            out: [0; MAX_DIGEST_LEN],
            digest_length: params.digest_length(),
            last_node: false,
            phase: Phase::Fresh,
        }
    }

    /// Configured digest length in bytes
    pub fn digest_length(&self) -> usize {
        self.digest_length
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True once a digest has been produced
    pub fn is_finalized(&self) -> bool {
        self.phase == Phase::Finalized
    }

    /// Absorb a chunk of input. Chunks of any size are accepted, including empty ones.
    ///
    /// # Errors
    /// `UseAfterFinalize` if the state was already finalized.
    pub fn update(&mut self, data: &[u8]) -> Result<(), Blake2bError> {
        if self.is_finalized() {
            return Err(Blake2bError::UseAfterFinalize);
        }

        self.absorb(data);
        self.phase = Phase::Absorbing;

        Ok(())
    }

    /// Finalize and return a digest of the configured length.
    ///
    /// # Errors
    /// `UseAfterFinalize` if the state was already finalized.
    pub fn finalize(&mut self) -> Result<Digest, Blake2bError> {
        if self.is_finalized() {
            return Err(Blake2bError::UseAfterFinalize);
        }

        self.finish();

        let mut bytes = [0u8; MAX_DIGEST_LEN];
        bytes[..self.digest_length].copy_from_slice(&self.out[..self.digest_length]);
        let digest = Digest::new(bytes, self.digest_length);

        bytes.zeroize();
        self.out.zeroize();

        Ok(digest)
    }

    /// Finalize into `out`, writing the first `out.len()` digest bytes.
    ///
    /// `out.len()` must be in `1..=digest_length`. On a length error the
    /// state is left untouched and can still be finalized.
    ///
    /// # Errors
    /// - `UseAfterFinalize` if the state was already finalized
    /// - `InvalidParameter` if `out` is empty or longer than the digest length
    pub fn finalize_into(&mut self, out: &mut [u8]) -> Result<(), Blake2bError> {
        if self.is_finalized() {
            return Err(Blake2bError::UseAfterFinalize);
        }

        if out.is_empty() || out.len() > self.digest_length {
            return Err(Blake2bError::invalid(Parameter::OutputLength, out.len()));
        }

        self.finish();

        out.copy_from_slice(&self.out[..out.len()]);
        self.out.zeroize();

        Ok(())
    }

    /// Copy input into the buffer, retiring the oldest block whenever more
    /// than one block is held.
    fn absorb(&mut self, mut data: &[u8]) {
        while !data.is_empty() {
            let take = core::cmp::min(BUF_LEN - self.buf_len, data.len());
            self.buf[self.buf_len..self.buf_len + take].copy_from_slice(&data[..take]);
            self.buf_len += take;
            data = &data[take..];

            while self.buf_len > BLOCK_LEN {
                self.increment_counter(BLOCK_LEN as u64);
                self.compress_head();
                self.buf.copy_within(BLOCK_LEN..self.buf_len, 0);
                self.buf_len -= BLOCK_LEN;
            }
        }
    }

    /// Compress the buffered tail as the last block, serialize into `self.out`
    /// and wipe the rest of the state.
    fn finish(&mut self) {
        // Only the real tail length counts, not the padding
        self.increment_counter(self.buf_len as u64);

        self.f[0] = u64::MAX;
        if self.last_node {
            self.f[1] = u64::MAX;
        }

        self.buf[self.buf_len..].fill(0);
        self.compress_head();

        for (chunk, word) in self.out.chunks_exact_mut(8).zip(self.h.iter()) {
            chunk.copy_from_slice(&store64(*word));
        }

        self.wipe_working_state();
        self.phase = Phase::Finalized;
    }

    /// Zeroize chaining value, counters, flags, buffer and work vectors
    fn wipe_working_state(&mut self) {
        self.h.zeroize();
        self.t.zeroize();
        self.f.zeroize();
        self.buf.zeroize();
        self.buf_len = 0;
        self.compressor.zeroize();
    }

    /// Compress `buf[..BLOCK_LEN]` with the current counter and flags
    fn compress_head(&mut self) {
        let mut block = [0u8; BLOCK_LEN];
        block.copy_from_slice(&self.buf[..BLOCK_LEN]);

        self.compressor.compress(&mut self.h, &block, &self.t, &self.f);

        block.zeroize();
    }

    /// t += n, carrying into the high word only when the low word wraps
    fn increment_counter(&mut self, n: u64) {
        let (low, carry) = self.t[0].overflowing_add(n);
        self.t[0] = low;
        self.t[1] = self.t[1].wrapping_add(carry as u64);
    }

    #[cfg(test)]
    pub(crate) fn counter(&self) -> [u64; 2] {
        self.t
    }

    #[cfg(test)]
    pub(crate) fn set_counter(&mut self, t: [u64; 2]) {
        self.t = t;
    }

    #[cfg(test)]
    pub(crate) fn buffered(&self) -> usize {
        self.buf_len
    }

    #[cfg(test)]
    pub(crate) fn is_wiped(&self) -> bool {
        self.h.iter().all(|w| *w == 0)
            && self.t.iter().all(|w| *w == 0)
            && self.buf.iter().all(|b| *b == 0)
            && self.out.iter().all(|b| *b == 0)
            && self.compressor.is_wiped()
    }
}

impl Drop for Blake2b {
    fn drop(&mut self) {
        self.wipe_working_state();
        self.out.zeroize();
    }
}

impl core::fmt::Debug for Blake2b {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Blake2b")
            .field("digest_length", &self.digest_length)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

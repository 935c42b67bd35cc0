// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::digest::Digest;
use crate::error::Blake2bError;
use crate::state::Blake2b;

/// One-shot BLAKE2b of `input`.
///
/// # Errors
/// `InvalidParameter` if `digest_length` is outside 1..=64.
pub fn hash(input: &[u8], digest_length: usize) -> Result<Digest, Blake2bError> {
    let mut state = Blake2b::new(digest_length)?;
    state.update(input)?;
    state.finalize()
}

/// One-shot keyed BLAKE2b (MAC) of `input`.
///
/// An empty key is rejected rather than treated as unkeyed mode.
///
/// # Errors
/// - `InvalidParameter` if `digest_length` is outside 1..=64 or the key is
///   longer than 64 bytes
/// - `InvalidKey` if the key is empty
pub fn keyed_hash(input: &[u8], key: &[u8], digest_length: usize) -> Result<Digest, Blake2bError> {
    let mut state = Blake2b::new_keyed(digest_length, key)?;
    state.update(input)?;
    state.finalize()
}

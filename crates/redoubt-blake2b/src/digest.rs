// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;

use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::MAX_DIGEST_LEN;

/// BLAKE2b output of 1..=64 bytes.
///
/// Fixed-capacity storage, no heap. Equality is constant-time so a keyed
/// digest can be compared as a MAC.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Digest {
    bytes: [u8; MAX_DIGEST_LEN],
    len: usize,
}

impl Digest {
    /// Caller guarantees `1 <= len <= MAX_DIGEST_LEN`.
    pub(crate) fn new(bytes: [u8; MAX_DIGEST_LEN], len: usize) -> Self {
        debug_assert!((1..=MAX_DIGEST_LEN).contains(&len));
        Self { bytes, len }
    }

    /// Digest bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Digest length in bytes
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Compare against an expected digest in constant time.
    ///
    /// Lengths are public; a length mismatch returns false immediately.
    pub fn verify(&self, expected: &[u8]) -> bool {
        self.as_bytes().ct_eq(expected).into()
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl PartialEq for Digest {
    fn eq(&self, other: &Self) -> bool {
        self.verify(other.as_bytes())
    }
}

impl Eq for Digest {}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.as_bytes() {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({:x})", self)
    }
}

// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! BLAKE2b streaming hash with secure memory handling
//!
//! Implementation per RFC 7693, sequential mode only (fanout = depth = 1).
//! Digests of 1..=64 bytes, optional key, salt and personalization.
//! The chaining value, message buffer and compression work vectors are
//! zeroized on finalization and on drop.
//!
//! ```
//! use redoubt_blake2b::{Blake2b, hash};
//!
//! let mut state = Blake2b::new(64).expect("valid digest length");
//! state.update(b"ab").expect("state is live");
//! state.update(b"c").expect("state is live");
//! let digest = state.finalize().expect("state is live");
//!
//! assert_eq!(digest, hash(b"abc", 64).expect("valid digest length"));
//! ```
//!
//! References:
//! - RFC 7693: The BLAKE2 Cryptographic Hash and Message Authentication Code (MAC)
//!   <https://datatracker.ietf.org/doc/html/rfc7693>
//! - BLAKE2 reference test vectors
//!   <https://github.com/BLAKE2/BLAKE2/tree/master/testvectors>

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod compress;
mod consts;
mod digest;
mod error;
mod hash;
#[cfg(feature = "std")]
mod io;
mod params;
mod selftest;
mod state;

pub mod kat;
pub mod word;

pub use compress::compress;
pub use consts::{BLOCK_LEN, MAX_DIGEST_LEN, MAX_KEY_LEN, PERSONAL_LEN, SALT_LEN};
pub use digest::Digest;
pub use error::{Blake2bError, Parameter};
pub use hash::{hash, keyed_hash};
#[cfg(feature = "std")]
pub use io::hash_reader;
pub use params::ParamBlock;
pub use selftest::self_test;
pub use state::{Blake2b, Phase};

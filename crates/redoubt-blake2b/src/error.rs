// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;

use thiserror::Error;

/// Parameter rejected at construction or finalization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parameter {
    /// Digest length outside 1..=64
    DigestLength,
    /// Key length above 64
    KeyLength,
    /// Output buffer empty or longer than the configured digest length
    OutputLength,
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parameter::DigestLength => f.write_str("digest length"),
            Parameter::KeyLength => f.write_str("key length"),
            Parameter::OutputLength => f.write_str("output length"),
        }
    }
}

/// BLAKE2b error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blake2bError {
    /// Length parameter out of range (never clamped)
    #[error("invalid parameter: {parameter} = {value}")]
    InvalidParameter {
        /// Which parameter was rejected
        parameter: Parameter,
        /// Rejected value
        value: usize,
    },

    /// Keyed mode requested with an empty key
    #[error("keyed mode requested with an empty key")]
    InvalidKey,

    /// `update` or `finalize` called on a finalized state
    #[error("hash state already finalized")]
    UseAfterFinalize,

    /// Known-answer vector mismatch
    #[error("self-test failed for message length {message_length}")]
    SelfTestFailed {
        /// Length of the message whose digest did not match
        message_length: usize,
    },
}

impl Blake2bError {
    pub(crate) const fn invalid(parameter: Parameter, value: usize) -> Self {
        Self::InvalidParameter { parameter, value }
    }
}

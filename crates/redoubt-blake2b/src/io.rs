// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! `std::io` adapters (requires the `std` feature)

use std::io::{self, Read, Write};

use zeroize::Zeroize;

use crate::digest::Digest;
use crate::state::Blake2b;

const READ_CHUNK_LEN: usize = 8 * 1024;

impl Write for Blake2b {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Stream `reader` to EOF through an unkeyed state.
///
/// Reads through a fixed stack buffer that is wiped before returning.
/// Interrupted reads are retried.
pub fn hash_reader<R: Read>(mut reader: R, digest_length: usize) -> io::Result<Digest> {
    let mut state = Blake2b::new(digest_length).map_err(io::Error::other)?;
    let mut chunk = [0u8; READ_CHUNK_LEN];

    let result = loop {
        match reader.read(&mut chunk) {
            Ok(0) => break Ok(()),
            Ok(n) => {
                if let Err(e) = state.update(&chunk[..n]) {
                    break Err(io::Error::other(e));
                }
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => break Err(e),
        }
    };

    chunk.zeroize();
    result?;

    state.finalize().map_err(io::Error::other)
}

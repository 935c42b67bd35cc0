// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::word::{load64, load_block, store64};

#[test]
fn load64_is_little_endian() {
    let bytes = [0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01];
    assert_eq!(load64(&bytes), 0x0102_0304_0506_0708);
}

#[test]
fn store64_is_little_endian() {
    assert_eq!(
        store64(0x0102_0304_0506_0708),
        [0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]
    );
}

#[test]
fn store64_inverts_load64_on_edges() {
    for value in [0, 1, u64::MAX, 0x8000_0000_0000_0000, 0x6a09_e667_f3bc_c908] {
        assert_eq!(load64(&store64(value)), value, "value={value:#018x}");
    }
}

#[test]
fn load_block_decodes_sixteen_words_in_order() {
    let mut block = [0u8; 128];
    for (i, byte) in block.iter_mut().enumerate() {
        *byte = i as u8;
    }

    let mut m = [0u64; 16];
    load_block(&block, &mut m);

    assert_eq!(m[0], 0x0706_0504_0302_0100);
    assert_eq!(m[1], 0x0f0e_0d0c_0b0a_0908);
    assert_eq!(m[15], 0x7f7e_7d7c_7b7a_7978);
}

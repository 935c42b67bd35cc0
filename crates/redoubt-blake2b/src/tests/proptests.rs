// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;

use crate::hash::{hash, keyed_hash};
use crate::state::Blake2b;

/// Split `data` at the given cut points (taken modulo the length, sorted)
fn split_at_cuts<'a>(data: &'a [u8], cuts: &[usize]) -> Vec<&'a [u8]> {
    let mut points: Vec<usize> = cuts
        .iter()
        .map(|c| if data.is_empty() { 0 } else { c % (data.len() + 1) })
        .collect();
    points.sort_unstable();

    let mut chunks = Vec::with_capacity(points.len() + 1);
    let mut start = 0;
    for point in points {
        chunks.push(&data[start..point]);
        start = point;
    }
    chunks.push(&data[start..]);
    chunks
}

proptest! {
    #[test]
    fn chunking_does_not_change_digest(
        data in proptest::collection::vec(any::<u8>(), 0..1024),
        cuts in proptest::collection::vec(any::<usize>(), 0..12),
        digest_length in 1..=64usize,
    ) {
        let expected = hash(&data, digest_length).expect("Failed to hash(..)");

        let mut state = Blake2b::new(digest_length).expect("Failed to new(..)");
        for chunk in split_at_cuts(&data, &cuts) {
            state.update(chunk).expect("Failed to update(..)");
        }
        let chunked = state.finalize().expect("Failed to finalize()");

        prop_assert_eq!(chunked, expected);
    }

    #[test]
    fn keyed_chunking_does_not_change_digest(
        data in proptest::collection::vec(any::<u8>(), 0..600),
        key in proptest::collection::vec(any::<u8>(), 1..=64),
        chunk_len in 1..300usize,
    ) {
        let expected = keyed_hash(&data, &key, 64).expect("Failed to keyed_hash(..)");

        let mut state = Blake2b::new_keyed(64, &key).expect("Failed to new_keyed(..)");
        for chunk in data.chunks(chunk_len) {
            state.update(chunk).expect("Failed to update(..)");
        }
        let chunked = state.finalize().expect("Failed to finalize()");

        prop_assert_eq!(chunked, expected);
    }

    #[test]
    fn hashing_is_deterministic(
        data in proptest::collection::vec(any::<u8>(), 0..512),
        digest_length in 1..=64usize,
    ) {
        let first = hash(&data, digest_length).expect("Failed to hash(..)");
        let second = hash(&data, digest_length).expect("Failed to hash(..)");

        prop_assert_eq!(first.len(), digest_length);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn appending_a_suffix_changes_digest(
        data in proptest::collection::vec(any::<u8>(), 0..300),
        suffix in proptest::collection::vec(any::<u8>(), 1..64),
    ) {
        let mut extended = data.clone();
        extended.extend_from_slice(&suffix);

        let original = hash(&data, 64).expect("Failed to hash(..)");
        let longer = hash(&extended, 64).expect("Failed to hash(..)");

        prop_assert_ne!(original, longer);
    }
}

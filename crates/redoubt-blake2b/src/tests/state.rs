// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use hex_literal::hex;

use crate::consts::BLOCK_LEN;
use crate::error::{Blake2bError, Parameter};
use crate::state::{Blake2b, Phase};

const ZEROS_128_DIGEST: [u8; 64] = hex!(
    "865939e120e6805438478841afb739ae4250cf372653078a065cdcfffca4caf7"
    "98e6d462b65d658fc165782640eded70963449ae1500fb0f24981d7727e22c41"
);

const ZEROS_129_DIGEST: [u8; 64] = hex!(
    "a60edba343e7a6933c14d203d2e535f35e6deb6c8a4f8e624c1a6f6e26128604"
    "47cb4c37e5aa11bcf03b7c3eea7228eb8b998f922794f2d1b8f2dc63f03bd3fa"
);

// =============================================================================
// Lazy buffering
// =============================================================================

#[test]
fn test_exact_block_is_held_until_finalize() {
    let mut state = Blake2b::new(64).expect("Failed to new(..)");

    state.update(&[0u8; BLOCK_LEN]).expect("Failed to update(..)");

    assert_eq!(state.counter(), [0, 0], "block compressed during update");
    assert_eq!(state.buffered(), BLOCK_LEN);

    let digest = state.finalize().expect("Failed to finalize()");
    assert_eq!(digest.as_bytes(), &ZEROS_128_DIGEST);
}

#[test]
fn test_block_plus_one_compresses_exactly_one_block_during_update() {
    let mut state = Blake2b::new(64).expect("Failed to new(..)");

    state
        .update(&[0u8; BLOCK_LEN + 1])
        .expect("Failed to update(..)");

    assert_eq!(state.counter(), [BLOCK_LEN as u64, 0]);
    assert_eq!(state.buffered(), 1);

    let digest = state.finalize().expect("Failed to finalize()");
    assert_eq!(digest.as_bytes(), &ZEROS_129_DIGEST);
}

#[test]
fn test_block_plus_one_split_across_updates() {
    let mut state = Blake2b::new(64).expect("Failed to new(..)");

    state.update(&[0u8; BLOCK_LEN]).expect("Failed to update(..)");
    assert_eq!(state.counter(), [0, 0]);

    state.update(&[0u8; 1]).expect("Failed to update(..)");
    assert_eq!(state.counter(), [BLOCK_LEN as u64, 0]);
    assert_eq!(state.buffered(), 1);

    let digest = state.finalize().expect("Failed to finalize()");
    assert_eq!(digest.as_bytes(), &ZEROS_129_DIGEST);
}

#[test]
fn test_large_update_keeps_last_block_buffered() {
    let mut state = Blake2b::new(64).expect("Failed to new(..)");

    state
        .update(&[0xAB; 5 * BLOCK_LEN])
        .expect("Failed to update(..)");

    assert_eq!(state.counter(), [4 * BLOCK_LEN as u64, 0]);
    assert_eq!(state.buffered(), BLOCK_LEN);
}

#[test]
fn test_key_block_is_buffered_not_compressed() {
    let state = Blake2b::new_keyed(64, b"key").expect("Failed to new_keyed(..)");

    assert_eq!(state.counter(), [0, 0]);
    assert_eq!(state.buffered(), BLOCK_LEN);
    assert_eq!(state.phase(), Phase::Fresh);
}

#[test]
fn test_empty_updates_change_nothing() {
    let mut with_empty = Blake2b::new(64).expect("Failed to new(..)");
    with_empty.update(&[]).expect("Failed to update(..)");
    with_empty.update(b"abc").expect("Failed to update(..)");
    with_empty.update(&[]).expect("Failed to update(..)");

    let mut without = Blake2b::new(64).expect("Failed to new(..)");
    without.update(b"abc").expect("Failed to update(..)");

    assert_eq!(
        with_empty.finalize().expect("Failed to finalize()"),
        without.finalize().expect("Failed to finalize()")
    );
}

// =============================================================================
// Counter
// =============================================================================

#[test]
fn test_counter_carries_into_high_word_on_wrap() {
    let mut state = Blake2b::new(64).expect("Failed to new(..)");
    state.set_counter([u64::MAX - (BLOCK_LEN as u64 - 1), 0]);

    state
        .update(&[0u8; BLOCK_LEN + 1])
        .expect("Failed to update(..)");

    assert_eq!(state.counter(), [0, 1]);
}

#[test]
fn test_counter_high_word_untouched_without_wrap() {
    let mut state = Blake2b::new(64).expect("Failed to new(..)");
    state.set_counter([u64::MAX - 200, 7]);

    state
        .update(&[0u8; BLOCK_LEN + 1])
        .expect("Failed to update(..)");

    assert_eq!(state.counter(), [u64::MAX - 200 + BLOCK_LEN as u64, 7]);
}

// =============================================================================
// Lifecycle
// =============================================================================

#[test]
fn test_phase_transitions() {
    let mut state = Blake2b::new(32).expect("Failed to new(..)");
    assert_eq!(state.phase(), Phase::Fresh);

    state.update(b"x").expect("Failed to update(..)");
    assert_eq!(state.phase(), Phase::Absorbing);

    state.finalize().expect("Failed to finalize()");
    assert_eq!(state.phase(), Phase::Finalized);
    assert!(state.is_finalized());
}

#[test]
fn test_second_finalize_is_rejected() {
    let mut state = Blake2b::new(64).expect("Failed to new(..)");
    state.update(b"abc").expect("Failed to update(..)");
    state.finalize().expect("Failed to finalize()");

    assert_eq!(state.finalize(), Err(Blake2bError::UseAfterFinalize));

    let mut out = [0u8; 64];
    assert_eq!(
        state.finalize_into(&mut out),
        Err(Blake2bError::UseAfterFinalize)
    );
    assert!(out.iter().all(|b| *b == 0), "stale output written");
}

#[test]
fn test_update_after_finalize_is_rejected() {
    let mut state = Blake2b::new(64).expect("Failed to new(..)");
    state.finalize().expect("Failed to finalize()");

    assert_eq!(state.update(b"more"), Err(Blake2bError::UseAfterFinalize));
    assert_eq!(state.update(&[]), Err(Blake2bError::UseAfterFinalize));
}

#[test]
fn test_finalize_wipes_state() {
    let mut state = Blake2b::new_keyed(64, b"secret").expect("Failed to new_keyed(..)");
    state.update(&[0x5A; 300]).expect("Failed to update(..)");
    state.finalize().expect("Failed to finalize()");

    assert!(state.is_wiped(), "state not wiped after finalize");
}

// =============================================================================
// finalize_into
// =============================================================================

#[test]
fn test_finalize_into_matches_finalize() {
    let mut a = Blake2b::new(64).expect("Failed to new(..)");
    let mut b = Blake2b::new(64).expect("Failed to new(..)");
    a.update(b"abc").expect("Failed to update(..)");
    b.update(b"abc").expect("Failed to update(..)");

    let mut out = [0u8; 64];
    a.finalize_into(&mut out).expect("Failed to finalize_into(..)");

    assert_eq!(out.as_slice(), b.finalize().expect("Failed to finalize()").as_bytes());
}

#[test]
fn test_finalize_into_truncates_configured_digest() {
    let mut full = Blake2b::new(64).expect("Failed to new(..)");
    let mut short = Blake2b::new(64).expect("Failed to new(..)");
    full.update(b"abc").expect("Failed to update(..)");
    short.update(b"abc").expect("Failed to update(..)");

    let mut out = [0u8; 20];
    short.finalize_into(&mut out).expect("Failed to finalize_into(..)");

    let digest = full.finalize().expect("Failed to finalize()");
    assert_eq!(&out, &digest.as_bytes()[..20]);
}

#[test]
fn test_finalize_into_rejects_bad_lengths_and_keeps_state() {
    let mut state = Blake2b::new(32).expect("Failed to new(..)");
    state.update(b"abc").expect("Failed to update(..)");

    let mut empty = [0u8; 0];
    assert_eq!(
        state.finalize_into(&mut empty),
        Err(Blake2bError::InvalidParameter {
            parameter: Parameter::OutputLength,
            value: 0,
        })
    );

    let mut too_long = [0u8; 33];
    assert_eq!(
        state.finalize_into(&mut too_long),
        Err(Blake2bError::InvalidParameter {
            parameter: Parameter::OutputLength,
            value: 33,
        })
    );

    assert_eq!(state.phase(), Phase::Absorbing);

    let mut out = [0u8; 32];
    state
        .finalize_into(&mut out)
        .expect("Failed to finalize_into(..)");
    assert!(state.is_finalized());
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn test_init_key_rejects_empty_key() {
    assert_eq!(
        Blake2b::new_keyed(64, &[]).map(|_| ()),
        Err(Blake2bError::InvalidKey)
    );
}

#[test]
fn test_init_key_rejects_oversized_key() {
    assert_eq!(
        Blake2b::new_keyed(64, &[0u8; 65]).map(|_| ()),
        Err(Blake2bError::InvalidParameter {
            parameter: Parameter::KeyLength,
            value: 65,
        })
    );
}

#[test]
fn test_init_rejects_out_of_range_digest_length() {
    for bad in [0, 65, usize::MAX] {
        assert_eq!(
            Blake2b::new(bad).map(|_| ()),
            Err(Blake2bError::InvalidParameter {
                parameter: Parameter::DigestLength,
                value: bad,
            })
        );
    }
}

#[test]
fn test_debug_does_not_leak_state() {
    let state = Blake2b::new_keyed(16, b"top secret").expect("Failed to new_keyed(..)");
    let rendered = format!("{state:?}");

    assert!(rendered.contains("digest_length: 16"));
    assert!(!rendered.contains("buf"));
}

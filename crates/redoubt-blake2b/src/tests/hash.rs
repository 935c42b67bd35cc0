// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

// Tests for the one-shot entry points
//
// References:
// [1] RFC 7693 Appendix A: BLAKE2b-512("abc")
//     https://datatracker.ietf.org/doc/html/rfc7693#appendix-A
// [2] Reference values for salt, personalization and short digests computed
//     with the BLAKE2 reference implementation (Python hashlib.blake2b)

use hex_literal::hex;

use crate::error::{Blake2bError, Parameter};
use crate::hash::{hash, keyed_hash};
use crate::state::Blake2b;

#[test]
fn test_hash_empty() {
    let digest = hash(b"", 64).expect("Failed to hash(..)");

    let expected = hex!(
        "786a02f742015903c6c6fd852552d272912f4740e15847618a86e217f71f5419"
        "d25e1031afee585313896444934eb04b903a685b1448b755d56f701afe9be2ce"
    );

    assert_eq!(digest.as_bytes(), &expected, "BLAKE2b-512('') mismatch");
}

#[test]
fn test_hash_abc() {
    let digest = hash(b"abc", 64).expect("Failed to hash(..)");

    let expected = hex!(
        "ba80a53f981c4d0d6a2797b69f12f6e94c212f14685ac4b74b12bb6fdbffa2d1"
        "7d87c5392aab792dc252d5de4533cc9518d38aa8dbf1925ab92386edd4009923"
    );

    assert_eq!(digest.as_bytes(), &expected, "BLAKE2b-512('abc') mismatch");
}

#[test]
fn test_hash_quick_brown_fox() {
    let digest = hash(b"The quick brown fox jumps over the lazy dog", 64)
        .expect("Failed to hash(..)");

    let expected = hex!(
        "a8add4bdddfd93e4877d2746e62817b116364a1fa7bc148d95090bc7333b3673"
        "f82401cf7aa2e4cb1ecd90296e3f14cb5413f8ed77be73045b13914cdcd6a918"
    );

    assert_eq!(digest.as_bytes(), &expected);
}

#[test]
fn test_hash_multi_block_message() {
    let msg: Vec<u8> = (0..1000).map(|i| (i % 251) as u8).collect();
    let digest = hash(&msg, 64).expect("Failed to hash(..)");

    let expected = hex!(
        "c11e1c0340bd7e5a1b275f1230c962fad215ecb1391486e74e31b960a2f29963"
        "81a5fad092da06841d5f26e38f6ecfeaf441acbcd1c2de61aef121e7927175f5"
    );

    assert_eq!(digest.as_bytes(), &expected);
}

#[test]
fn test_hash_256_is_not_truncated_512() {
    let short = hash(b"abc", 32).expect("Failed to hash(..)");
    let long = hash(b"abc", 64).expect("Failed to hash(..)");

    let expected = hex!("bddd813c634239723171ef3fee98579b94964e3bb1cb3e427262c8c068d52319");

    assert_eq!(short.len(), 32);
    assert_eq!(short.as_bytes(), &expected, "BLAKE2b-256('abc') mismatch");
    assert_ne!(short.as_bytes(), &long.as_bytes()[..32]);
}

#[test]
fn test_hash_one_byte_digest() {
    let digest = hash(b"abc", 1).expect("Failed to hash(..)");
    assert_eq!(digest.as_bytes(), &[0x6bu8]);
}

#[test]
fn test_hash_rejects_out_of_range_digest_length() {
    assert_eq!(
        hash(b"abc", 0),
        Err(Blake2bError::InvalidParameter {
            parameter: Parameter::DigestLength,
            value: 0,
        })
    );
    assert_eq!(
        hash(b"abc", 65),
        Err(Blake2bError::InvalidParameter {
            parameter: Parameter::DigestLength,
            value: 65,
        })
    );
}

#[test]
fn test_keyed_hash_rejects_empty_key() {
    assert_eq!(keyed_hash(b"abc", b"", 64), Err(Blake2bError::InvalidKey));
}

#[test]
fn test_keyed_hash_rejects_oversized_key() {
    assert_eq!(
        keyed_hash(b"abc", &[1u8; 65], 64),
        Err(Blake2bError::InvalidParameter {
            parameter: Parameter::KeyLength,
            value: 65,
        })
    );
}

#[test]
fn test_keyed_hash_differs_from_unkeyed() {
    let keyed = keyed_hash(b"abc", b"k", 64).expect("Failed to keyed_hash(..)");
    let unkeyed = hash(b"abc", 64).expect("Failed to hash(..)");

    assert_ne!(keyed, unkeyed);
}

#[test]
fn test_salt_and_personal() {
    let salt: [u8; 16] = core::array::from_fn(|i| i as u8);
    let personal = *b"redoubt-blake2b!";

    let mut state =
        Blake2b::init(64, Some(&salt), Some(&personal)).expect("Failed to init(..)");
    state.update(b"abc").expect("Failed to update(..)");
    let digest = state.finalize().expect("Failed to finalize()");

    let expected = hex!(
        "968de3e383110f7ac2346daed6147c85962bfbd45f1a1f63218d9948d2793e5b"
        "a264ddc1a4d332709609f18fb4a2564dda816a6c0852c436cbf32d31dac92a85"
    );

    assert_eq!(digest.as_bytes(), &expected);
    assert_ne!(digest, hash(b"abc", 64).expect("Failed to hash(..)"));
}

#[test]
fn test_keyed_salt_and_personal_short_digest() {
    let salt: [u8; 16] = core::array::from_fn(|i| i as u8);
    let personal = *b"redoubt-blake2b!";

    let mut state = Blake2b::init_key(32, b"secret key", Some(&salt), Some(&personal))
        .expect("Failed to init_key(..)");
    state.update(b"abc").expect("Failed to update(..)");
    let digest = state.finalize().expect("Failed to finalize()");

    let expected = hex!("c7121fdf741b74b5f606b4aa43477db52533a0144ede40476b567d5a56da06f1");

    assert_eq!(digest.as_bytes(), &expected);
}

#[test]
fn test_hash_is_deterministic() {
    let first = hash(b"determinism", 48).expect("Failed to hash(..)");
    let second = hash(b"determinism", 48).expect("Failed to hash(..)");

    assert_eq!(first, second);
}

#[test]
fn test_digest_verify_and_hex() {
    let digest = hash(b"abc", 32).expect("Failed to hash(..)");
    let expected = hex!("bddd813c634239723171ef3fee98579b94964e3bb1cb3e427262c8c068d52319");

    assert!(digest.verify(&expected));
    assert!(!digest.verify(&expected[..31]));

    let mut tampered = expected;
    tampered[31] ^= 1;
    assert!(!digest.verify(&tampered));

    assert_eq!(
        format!("{digest:x}"),
        "bddd813c634239723171ef3fee98579b94964e3bb1cb3e427262c8c068d52319"
    );
}

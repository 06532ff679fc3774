// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for varint (LEB128) encoding/decoding.
//!
//! Compressed posting lists are a stream of varints. A decoder that panics on
//! garbage or loses bits on a roundtrip corrupts every lookup after it.

#![no_main]

use libfuzzer_sys::fuzz_target;
use lexica::encoding::{decode_varint, encode_varint, MAX_VARINT_BYTES};

fuzz_target!(|data: &[u8]| {
    // decode_varint returns Ok or Err, never panics
    if let Ok((value, consumed)) = decode_varint(data) {
        let mut reencoded = Vec::new();
        encode_varint(value, &mut reencoded);

        let (redecoded, reconsumed) = decode_varint(&reencoded)
            .expect("Re-encoding of valid value should always decode");

        assert_eq!(value, redecoded, "Roundtrip failed: {} != {}", value, redecoded);
        assert_eq!(
            reconsumed,
            reencoded.len(),
            "Re-encoded varint should be fully consumed"
        );
        assert!(
            consumed <= MAX_VARINT_BYTES,
            "Varint consumed {} bytes, max should be {}",
            consumed,
            MAX_VARINT_BYTES
        );
        assert!(
            consumed <= data.len(),
            "Consumed {} bytes but input only had {}",
            consumed,
            data.len()
        );
    }
});

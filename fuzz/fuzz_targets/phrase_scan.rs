// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for trie construction and phrase scanning.
//!
//! Any dictionary and any buffer, including invalid-looking Unicode mixes,
//! must scan without panicking, and every match must sit on token boundaries.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use lexica::{Normalizer, SimpleNormalizer, SimpleTokenizer, StringFinder, Tokenizer, Trie};

#[derive(Debug, Arbitrary)]
struct ScanInput {
    phrases: Vec<String>,
    buffer: String,
    normalize: bool,
}

fuzz_target!(|input: ScanInput| {
    let normalizer = SimpleNormalizer::new();
    let (phrases, buffer): (Vec<String>, String) = if input.normalize {
        (
            input.phrases.iter().map(|p| normalizer.normalize(p)).collect(),
            normalizer.normalize(&input.buffer),
        )
    } else {
        (input.phrases, input.buffer)
    };

    let trie = Trie::from_phrases(&phrases, &SimpleTokenizer);
    let ranges = SimpleTokenizer.ranges(&buffer);
    let finder = StringFinder::new(&trie, SimpleTokenizer);

    for m in finder.scan(&buffer) {
        assert!(ranges.iter().any(|r| r.start == m.range.start));
        assert!(ranges.iter().any(|r| r.end == m.range.end));
        assert!(trie.contains(&m.text), "reported {:?} not in trie", m.text);
    }
});

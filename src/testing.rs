// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::corpus::{Document, InMemoryCorpus};
use crate::types::Posting;

/// Build a corpus with one `body` field per text, ids assigned in order from 0.
pub fn make_corpus<S: AsRef<str>>(texts: &[S]) -> InMemoryCorpus {
    InMemoryCorpus::from_documents(
        texts
            .iter()
            .enumerate()
            .map(|(id, text)| make_doc(id as u32, text.as_ref())),
    )
}

/// A document with only a `body` field.
pub fn make_doc(id: u32, body: &str) -> Document {
    Document::new(id).with_field("body", body)
}

/// Postings from `(document_id, term_frequency)` pairs.
pub fn make_postings(pairs: &[(u32, u32)]) -> Vec<Posting> {
    pairs.iter().map(|&(d, f)| Posting::new(d, f)).collect()
}

/// Document ids of a posting sequence.
pub fn doc_ids(postings: impl IntoIterator<Item = Posting>) -> Vec<u32> {
    postings.into_iter().map(|p| p.document_id.get()).collect()
}

/// The phrase dictionary and scan buffer used throughout the finder tests.
pub const NORWEGIAN_PHRASES: &[&str] = &[
    "romerike",
    "apple computer",
    "norsk",
    "norsk ørret",
    "sverige",
    "ørret",
    "banan",
    "a",
    "a b",
];

pub const NORWEGIAN_BUFFER: &str = "en norsk     ørret fra romerike likte abba fra sverige";

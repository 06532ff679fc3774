// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-memory lexical search: inverted index, suffix array, phrase scanner.
//!
//! Three query structures, all built once from a static corpus and read-only
//! afterwards:
//!
//! - [`InMemoryInvertedIndex`]: term → posting list, with lazy boolean
//!   merges ([`intersection`], [`union`], [`difference`]) over the postings.
//! - [`SuffixArray`]: phrase-prefix search ranked by occurrence count.
//! - [`StringFinder`]: finds every [`Trie`] phrase in a buffer, on token
//!   boundaries only.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  corpus.rs  │────▶│   text.rs    │────▶│ inverted.rs  │──▶ merger.rs
//! │ (Document,  │     │ (Normalizer, │     │ (dictionary, │
//! │  Corpus)    │     │  Tokenizer)  │     │  postings)   │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!                            │
//!                ┌───────────┴───────────┐
//!                ▼                       ▼
//!        ┌──────────────┐        ┌──────────────┐
//!        │  suffix.rs   │        │   trie.rs    │
//!        │ (+ sieve.rs) │        │ (+ finder.rs)│
//!        └──────────────┘        └──────────────┘
//!                │                       │
//!                ▼                       ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                    contracts.rs                      │
//! │  (debug-build checks: sorted postings, sorted       │
//! │   suffixes, token-boundary matches)                 │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use lexica::{Document, InMemoryCorpus, SearchOptions, SuffixArray};
//!
//! let corpus = InMemoryCorpus::from_documents([
//!     Document::new(0).with_field("body", "to the best option"),
//! ]);
//! let engine = SuffixArray::new(&corpus, &["body"]).unwrap();
//! let hits = engine.evaluate("to the be", &SearchOptions::default());
//! assert_eq!(hits[0].score, 1);
//! ```
//!
//! Documents and queries must go through the same [`Normalizer`] and
//! [`Tokenizer`]; nothing detects a mismatch.

pub mod contracts;
pub mod corpus;
pub mod dictionary;
pub mod encoding;
pub mod error;
pub mod finder;
pub mod inverted;
pub mod merger;
pub mod postings;
pub mod sieve;
pub mod suffix;
pub mod testing;
pub mod text;
pub mod trie;
pub mod types;

pub use corpus::{Corpus, Document, InMemoryCorpus};
pub use dictionary::InMemoryDictionary;
pub use error::{BuildError, Result};
pub use finder::{Scan, StringFinder};
pub use inverted::{IndexConfig, InMemoryInvertedIndex, InvertedIndex};
pub use merger::{difference, intersection, union};
pub use postings::{CompressedPostingList, InMemoryPostingList, PostingList, PostingsIter};
pub use sieve::Sieve;
pub use suffix::{SearchOptions, SuffixArray};
pub use text::{Normalizer, SimpleNormalizer, SimpleTokenizer, Token, Tokenizer};
pub use trie::{NodeId, Trie};
pub use types::{DocId, HaystackEntry, Match, Posting, SearchHit, SuffixEntry, TermId};

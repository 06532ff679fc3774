// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Inverted index construction and lookup.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **POSTING_LIST_SORTED**: Each posting list is strictly increasing by document id
//! 2. **DOC_FREQ_CORRECT**: document frequency equals the posting list length
//! 3. **NON_EMPTY**: Every term in the dictionary has at least one posting
//! 4. **ID_ALIGNED**: `posting_lists[term_id]` belongs to `dictionary.term(term_id)`
//!
//! Documents and queries must go through the same normalizer and tokenizer.
//! `get_terms` is that shared pipeline; query code should call it rather than
//! tokenizing on its own.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::contracts::check_postings_sorted;
use crate::corpus::Corpus;
use crate::dictionary::InMemoryDictionary;
use crate::error::Result;
use crate::postings::{CompressedPostingList, InMemoryPostingList, PostingList, PostingsIter};
use crate::text::{Normalizer, SimpleNormalizer, SimpleTokenizer, Tokenizer};
use crate::types::{DocId, Posting};

/// Read side of an inverted index.
pub trait InvertedIndex {
    /// Normalized terms of `buffer`, exactly as documents were indexed.
    fn get_terms(&self, buffer: &str) -> Vec<String>;

    /// A fresh cursor over the term's postings. Unknown terms give an empty cursor.
    fn get_postings_iterator(&self, term: &str) -> PostingsIter<'_>;

    /// Number of documents containing the term, 0 if unknown.
    fn get_document_frequency(&self, term: &str) -> usize;

    fn contains(&self, term: &str) -> bool {
        self.get_document_frequency(term) > 0
    }
}

/// Which fields to index and how to store postings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    pub fields: Vec<String>,
    /// Store postings delta+varint encoded. Lookups behave identically.
    pub compressed: bool,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            fields: vec!["body".to_string()],
            compressed: false,
        }
    }
}

impl IndexConfig {
    pub fn with_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn compressed(mut self, compressed: bool) -> Self {
        self.compressed = compressed;
        self
    }
}

/// In-memory inverted index for small corpora.
///
/// Only the posting lists are compressed when compression is enabled; the
/// dictionary is always stored as-is.
pub struct InMemoryInvertedIndex<N = SimpleNormalizer, T = SimpleTokenizer> {
    normalizer: N,
    tokenizer: T,
    dictionary: InMemoryDictionary,
    posting_lists: Vec<Box<dyn PostingList>>,
    document_count: usize,
}

impl InMemoryInvertedIndex {
    /// Build with the default normalizer and tokenizer.
    pub fn new<C: Corpus + ?Sized>(corpus: &C, config: &IndexConfig) -> Result<Self> {
        Self::build(corpus, config, SimpleNormalizer::new(), SimpleTokenizer::new())
    }
}

impl<N: Normalizer, T: Tokenizer> InMemoryInvertedIndex<N, T> {
    /// Build an inverted index from every document in `corpus`.
    ///
    /// Fails if a configured field is missing on any document.
    pub fn build<C: Corpus + ?Sized>(
        corpus: &C,
        config: &IndexConfig,
        normalizer: N,
        tokenizer: T,
    ) -> Result<Self> {
        let mut dictionary = InMemoryDictionary::new();
        let mut counts: Vec<HashMap<DocId, u32>> = Vec::new();

        for document in corpus.documents() {
            for field in &config.fields {
                let normalized = normalizer.normalize(document.require_field(field)?);
                for term in tokenizer.strings(&normalized) {
                    let term_id = dictionary.add_if_absent(term).as_usize();
                    if term_id == counts.len() {
                        counts.push(HashMap::new());
                    }
                    *counts[term_id].entry(document.document_id).or_insert(0) += 1;
                }
            }
        }

        let posting_lists: Vec<Box<dyn PostingList>> = counts
            .into_iter()
            .map(|per_document| {
                // INVARIANT: POSTING_LIST_SORTED
                // The corpus may not hand out documents in id order.
                let mut postings: Vec<Posting> = per_document
                    .into_iter()
                    .map(|(document_id, term_frequency)| Posting {
                        document_id,
                        term_frequency,
                    })
                    .collect();
                postings.sort_unstable_by_key(|p| p.document_id);

                let list: Box<dyn PostingList> = if config.compressed {
                    Box::new(postings.into_iter().collect::<CompressedPostingList>())
                } else {
                    Box::new(postings.into_iter().collect::<InMemoryPostingList>())
                };
                check_postings_sorted(list.iter());
                list
            })
            .collect();

        debug!(
            documents = corpus.len(),
            terms = dictionary.len(),
            compressed = config.compressed,
            "built inverted index"
        );

        Ok(Self {
            normalizer,
            tokenizer,
            dictionary,
            posting_lists,
            document_count: corpus.len(),
        })
    }

    pub fn dictionary(&self) -> &InMemoryDictionary {
        &self.dictionary
    }

    /// Every indexed term, in id order.
    pub fn terms(&self) -> impl Iterator<Item = &str> + '_ {
        self.dictionary.iter().map(|(term, _)| term)
    }

    pub fn document_count(&self) -> usize {
        self.document_count
    }

    fn posting_list(&self, term: &str) -> Option<&dyn PostingList> {
        let term_id = self.dictionary.term_id(term)?;
        self.posting_lists.get(term_id.as_usize()).map(|l| l.as_ref())
    }
}

impl<N: Normalizer, T: Tokenizer> InvertedIndex for InMemoryInvertedIndex<N, T> {
    fn get_terms(&self, buffer: &str) -> Vec<String> {
        let normalized = self.normalizer.normalize(buffer);
        self.tokenizer
            .strings(&normalized)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    fn get_postings_iterator(&self, term: &str) -> PostingsIter<'_> {
        match self.posting_list(term) {
            Some(list) => list.iter(),
            None => {
                trace!(term, "out-of-vocabulary term");
                Box::new(std::iter::empty())
            }
        }
    }

    fn get_document_frequency(&self, term: &str) -> usize {
        self.posting_list(term).map_or(0, |list| list.len())
    }
}

impl<N, T> fmt::Debug for InMemoryInvertedIndex<N, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.dictionary
                    .iter()
                    .map(|(term, id)| (term, &self.posting_lists[id.as_usize()])),
            )
            .finish()
    }
}

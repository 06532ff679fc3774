// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Suffix array over token-start suffixes, for phrase-prefix search.
//!
//! Each document's configured fields are joined with a space and normalized
//! into one haystack string. Every token start in every haystack string gets a
//! [`SuffixEntry`], and the entries are sorted by the string they point at.
//!
//! # Query
//!
//! A query `q` matches wherever some suffix starts with `normalize(q)`. So
//! `"to the be"` finds `"to the best"` and `"to the behemoth"`: the match has
//! to start on a token boundary but may end mid-token. All matching suffixes
//! are adjacent in the sorted array, so one lower-bound binary search plus a
//! forward sweep finds them.
//!
//! # Complexity
//!
//! - Build: O(S log S) comparisons for S token starts
//! - Query: O(log S) prefix compares, then linear in the number of hits
//!
//! Offsets are byte offsets into the normalized haystack text.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::contracts::check_suffix_array_sorted;
use crate::corpus::Corpus;
use crate::error::Result;
use crate::sieve::Sieve;
use crate::text::{Normalizer, SimpleNormalizer, SimpleTokenizer, Tokenizer};
use crate::types::{DocId, HaystackEntry, SearchHit, SuffixEntry};

/// Per-query options for [`SuffixArray::evaluate`].
///
/// Deserializes from a JSON object; unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Return at most this many documents. `None` returns every match.
    pub hit_count: Option<usize>,
}

impl SearchOptions {
    pub fn with_hit_count(hit_count: usize) -> Self {
        Self {
            hit_count: Some(hit_count),
        }
    }
}

/// Sorted token-start suffixes of a corpus, borrowed for result lookup.
///
/// The tokenizer is only needed to place suffix entries, so it is not kept.
pub struct SuffixArray<'c, N = SimpleNormalizer> {
    corpus: &'c dyn Corpus,
    normalizer: N,
    haystack: Vec<HaystackEntry>,
    suffixes: Vec<SuffixEntry>,
}

impl<'c> SuffixArray<'c> {
    /// Build with the default normalizer and tokenizer.
    pub fn new<S: AsRef<str>>(corpus: &'c dyn Corpus, fields: &[S]) -> Result<Self> {
        Self::build(corpus, fields, SimpleNormalizer::new(), SimpleTokenizer::new())
    }
}

impl<'c, N: Normalizer> SuffixArray<'c, N> {
    /// Build the haystack and the sorted suffix table.
    ///
    /// Fails if any document lacks one of `fields`.
    pub fn build<S: AsRef<str>, T: Tokenizer>(
        corpus: &'c dyn Corpus,
        fields: &[S],
        normalizer: N,
        tokenizer: T,
    ) -> Result<Self> {
        let mut haystack = Vec::with_capacity(corpus.len());
        for document in corpus.documents() {
            let values = fields
                .iter()
                .map(|field| document.require_field(field.as_ref()))
                .collect::<Result<Vec<_>>>()?;
            haystack.push(HaystackEntry {
                document_id: document.document_id,
                text: normalizer.normalize(&values.join(" ")),
            });
        }

        let mut suffixes: Vec<SuffixEntry> = haystack
            .iter()
            .enumerate()
            .flat_map(|(haystack_index, hay)| {
                tokenizer
                    .ranges(&hay.text)
                    .into_iter()
                    .map(move |range| SuffixEntry {
                        haystack_index,
                        offset: range.start,
                    })
            })
            .collect();

        suffixes.sort_by(|a, b| suffix_of(&haystack, a).cmp(suffix_of(&haystack, b)));

        // INVARIANT: suffix array sorted lexicographically
        check_suffix_array_sorted(&haystack, &suffixes);

        debug!(
            documents = haystack.len(),
            suffixes = suffixes.len(),
            "built suffix array"
        );

        Ok(Self {
            corpus,
            normalizer,
            haystack,
            suffixes,
        })
    }

    /// Phrase-prefix search, ranked by how often the phrase occurs per document.
    ///
    /// Without a `hit_count` every matching document is returned, highest
    /// score first and ties by ascending document id. With one, the best
    /// `hit_count` are kept.
    pub fn evaluate(&self, query: &str, options: &SearchOptions) -> Vec<SearchHit<'c>> {
        let needle = self.normalizer.normalize(query);
        if needle.is_empty() {
            return Vec::new();
        }

        let counts = self.count_matches(&needle);
        trace!(query = needle.as_str(), documents = counts.len(), "phrase prefix matches");

        let ranked: Vec<(usize, DocId)> = match options.hit_count {
            Some(hit_count) => {
                let mut sieve = Sieve::new(hit_count);
                for (&document_id, &count) in &counts {
                    sieve.sift(count, document_id);
                }
                sieve.winners()
            }
            None => {
                let mut all: Vec<(usize, DocId)> =
                    counts.into_iter().map(|(id, count)| (count, id)).collect();
                all.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
                all
            }
        };

        ranked
            .into_iter()
            .filter_map(|(score, document_id)| {
                let corpus: &'c dyn Corpus = self.corpus;
                corpus
                    .get(document_id)
                    .map(|document| SearchHit { score, document })
            })
            .collect()
    }

    /// Occurrences of `needle` as a suffix prefix, per document.
    fn count_matches(&self, needle: &str) -> BTreeMap<DocId, usize> {
        let mut counts = BTreeMap::new();
        let start = self.lower_bound(needle);
        for entry in &self.suffixes[start..] {
            if !self.suffix_at(entry).starts_with(needle) {
                break;
            }
            let document_id = self.haystack[entry.haystack_index].document_id;
            *counts.entry(document_id).or_insert(0) += 1;
        }
        counts
    }

    /// Position of the first suffix that is `>= needle`, or `len()` if none is.
    pub fn lower_bound(&self, needle: &str) -> usize {
        let mut lo = 0usize;
        let mut hi = self.suffixes.len();
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if self.suffix_at(&self.suffixes[mid]) < needle {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }
        lo
    }

    /// The string an entry points at.
    pub fn suffix_at(&self, entry: &SuffixEntry) -> &str {
        suffix_of(&self.haystack, entry)
    }

    pub fn haystack(&self) -> &[HaystackEntry] {
        &self.haystack
    }

    /// The suffix table, sorted.
    pub fn suffixes(&self) -> &[SuffixEntry] {
        &self.suffixes
    }

    /// Number of suffixes.
    pub fn len(&self) -> usize {
        self.suffixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }
}

fn suffix_of<'h>(haystack: &'h [HaystackEntry], entry: &SuffixEntry) -> &'h str {
    haystack
        .get(entry.haystack_index)
        .map_or("", |hay| hay.suffix(entry.offset))
}

impl<N> fmt::Debug for SuffixArray<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuffixArray")
            .field("haystack", &self.haystack)
            .field("suffixes", &self.suffixes.len())
            .finish()
    }
}

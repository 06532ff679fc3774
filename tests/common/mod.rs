//! Shared test utilities and fixtures.

#![allow(dead_code)]

use lexica::{
    IndexConfig, InMemoryCorpus, InMemoryInvertedIndex, InvertedIndex, Posting,
    SuffixArray,
};

// Re-export canonical test utilities from lexica::testing
pub use lexica::testing::{
    doc_ids, make_corpus, make_doc, make_postings, NORWEGIAN_BUFFER, NORWEGIAN_PHRASES,
};

// ============================================================================
// INDEX BUILDERS
// ============================================================================

/// Inverted index over the `body` field.
pub fn build_test_index(corpus: &InMemoryCorpus, compressed: bool) -> InMemoryInvertedIndex {
    let config = IndexConfig::default().compressed(compressed);
    InMemoryInvertedIndex::new(corpus, &config).expect("corpus has a body field")
}

/// Suffix array over the `body` field.
pub fn build_test_suffix_array(corpus: &InMemoryCorpus) -> SuffixArray<'_> {
    SuffixArray::new(corpus, &["body"]).expect("corpus has a body field")
}

/// `(document_id, term_frequency)` pairs for a term.
pub fn postings_of(index: &impl InvertedIndex, term: &str) -> Vec<(u32, u32)> {
    index
        .get_postings_iterator(term)
        .map(|p| (p.document_id.get(), p.term_frequency))
        .collect()
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Postings strictly increase by document id.
pub fn assert_postings_sorted(postings: &[Posting]) {
    for pair in postings.windows(2) {
        assert!(
            pair[0].document_id < pair[1].document_id,
            "postings out of order: {:?} then {:?}",
            pair[0],
            pair[1]
        );
    }
}

/// Every suffix starts on a token and the table is sorted.
pub fn assert_suffix_array_well_formed(engine: &SuffixArray<'_>) {
    use lexica::Tokenizer;

    let suffixes = engine.suffixes();
    for pair in suffixes.windows(2) {
        assert!(
            engine.suffix_at(&pair[0]) <= engine.suffix_at(&pair[1]),
            "suffixes out of order: {:?} > {:?}",
            engine.suffix_at(&pair[0]),
            engine.suffix_at(&pair[1])
        );
    }

    let expected: usize = engine
        .haystack()
        .iter()
        .map(|hay| lexica::SimpleTokenizer.ranges(&hay.text).len())
        .sum();
    assert_eq!(suffixes.len(), expected, "one suffix per token start");
}

//! Inverted index construction and lookups.

use super::common::{build_test_index, make_corpus, postings_of};
use lexica::{
    Document, IndexConfig, InMemoryCorpus, InMemoryInvertedIndex, InvertedIndex, PostingList,
};

#[test]
fn indexes_spec_example_corpus() {
    let corpus = make_corpus(&["this is a Test", "test TEST prøve"]);
    for compressed in [false, true] {
        let index = build_test_index(&corpus, compressed);
        assert_eq!(index.get_document_frequency("test"), 2);
        assert_eq!(postings_of(&index, "test"), vec![(0, 1), (1, 2)]);
        assert_eq!(index.get_document_frequency("this"), 1);
        assert_eq!(index.document_count(), 2);
    }
}

#[test]
fn query_terms_go_through_document_pipeline() {
    let corpus = make_corpus(&["Norsk  ØRRET"]);
    let index = build_test_index(&corpus, false);
    let terms = index.get_terms("norsk, Ørret!");
    assert_eq!(terms, vec!["norsk", "ørret"]);
    for term in &terms {
        assert!(index.contains(term));
    }
}

#[test]
fn dictionary_ids_follow_first_sight() {
    let corpus = make_corpus(&["b a", "c a"]);
    let index = build_test_index(&corpus, false);
    let terms: Vec<&str> = index.terms().collect();
    assert_eq!(terms, vec!["b", "a", "c"]);
    assert_eq!(index.dictionary().len(), 3);
}

#[test]
fn each_postings_call_is_an_independent_cursor() {
    let corpus = make_corpus(&["x", "x", "x"]);
    let index = build_test_index(&corpus, true);
    let mut first = index.get_postings_iterator("x");
    first.next();
    assert_eq!(index.get_postings_iterator("x").count(), 3);
    assert_eq!(first.count(), 2);
}

#[test]
fn custom_fields_from_config_json() {
    let config: IndexConfig =
        serde_json::from_str(r#"{"fields": ["title"], "compressed": true}"#).unwrap();
    let corpus = InMemoryCorpus::from_documents([
        Document::new(0)
            .with_field("title", "Suffix arrays")
            .with_field("body", "ignored body"),
        Document::new(1).with_field("title", "Tries"),
    ]);
    let index = InMemoryInvertedIndex::new(&corpus, &config).unwrap();
    assert_eq!(postings_of(&index, "tries"), vec![(1, 1)]);
    assert_eq!(index.get_document_frequency("body"), 0);
}

#[test]
fn config_defaults_fill_missing_keys() {
    let config: IndexConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, IndexConfig::default());
    assert_eq!(config.fields, vec!["body"]);
    assert!(!config.compressed);
}

#[test]
fn compressed_list_is_smaller_than_plain_pairs() {
    let postings = (0..1000u32).map(|d| lexica::Posting::new(d * 3, 1));
    let list: lexica::CompressedPostingList = postings.collect();
    assert_eq!(list.len(), 1000);
    // One byte for each gap and one for each frequency.
    assert_eq!(list.byte_len(), 2000);
}

//! Phrase-prefix search over the suffix array.

use super::common::{assert_suffix_array_well_formed, build_test_suffix_array, make_corpus};
use lexica::{InMemoryCorpus, SearchOptions};

#[test]
fn phrase_prefix_scores_occurrences() {
    let corpus = make_corpus(&[
        "to the best option",
        "go to the bed, then to the beach",
        "the best",
    ]);
    let engine = build_test_suffix_array(&corpus);
    assert_suffix_array_well_formed(&engine);

    let hits = engine.evaluate("to the be", &SearchOptions::default());
    let ranked: Vec<(usize, u32)> = hits
        .iter()
        .map(|h| (h.score, h.document.document_id.get()))
        .collect();
    assert_eq!(ranked, vec![(2, 1), (1, 0)]);
}

#[test]
fn hit_count_caps_equal_scores() {
    let corpus = make_corpus(&["to the best", "to the best"]);
    let engine = build_test_suffix_array(&corpus);
    let hits = engine.evaluate("to the be", &SearchOptions::with_hit_count(1));
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].score, 1);
}

#[test]
fn query_is_normalized_like_documents() {
    let corpus = make_corpus(&["Rust  Programming"]);
    let engine = build_test_suffix_array(&corpus);
    let hits = engine.evaluate("RUST   prog", &SearchOptions::default());
    assert_eq!(hits.len(), 1);
}

#[test]
fn query_longer_than_any_suffix_is_empty() {
    let corpus = make_corpus(&["short"]);
    let engine = build_test_suffix_array(&corpus);
    assert!(engine
        .evaluate("short and then some", &SearchOptions::default())
        .is_empty());
}

#[test]
fn empty_corpus_has_no_suffixes() {
    let corpus = InMemoryCorpus::new();
    let engine = build_test_suffix_array(&corpus);
    assert!(engine.is_empty());
    assert!(engine.evaluate("anything", &SearchOptions::default()).is_empty());
}

#[test]
fn options_from_json_map() {
    let corpus = make_corpus(&["a b", "a c", "a d"]);
    let engine = build_test_suffix_array(&corpus);
    let options: SearchOptions =
        serde_json::from_str(r#"{"hit_count": 2, "debug": true}"#).unwrap();
    assert_eq!(engine.evaluate("a", &options).len(), 2);
}

#[cfg(feature = "unicode-normalization")]
mod unicode {
    use super::*;
    use lexica::{Document, SuffixArray};

    fn corpus() -> InMemoryCorpus {
        InMemoryCorpus::from_documents([
            Document::new(0).with_field("a", "Japanese リンク"),
            Document::new(1).with_field("a", "Cedilla \u{0043}\u{0327} and \u{00C7} foo"),
        ])
    }

    #[test]
    fn half_width_katakana_query() {
        let corpus = corpus();
        let engine = SuffixArray::new(&corpus, &["a"]).unwrap();
        let hits = engine.evaluate("ﾘﾝｸ", &SearchOptions::with_hit_count(5));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].score, 1);
        assert_eq!(hits[0].document.field("a"), Some("Japanese リンク"));
    }

    #[test]
    fn cedilla_composition() {
        let corpus = corpus();
        let engine = SuffixArray::new(&corpus, &["a"]).unwrap();
        for query in ["\u{00C7}", "\u{0043}\u{0327}"] {
            let hits = engine.evaluate(query, &SearchOptions::default());
            assert_eq!(hits.len(), 1);
            assert_eq!(hits[0].score, 2);
            assert_eq!(hits[0].document.document_id.get(), 1);
        }
    }
}

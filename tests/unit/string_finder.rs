//! Phrase scanning over Norwegian and multi-script buffers.

use super::common::{NORWEGIAN_BUFFER, NORWEGIAN_PHRASES};
use lexica::{Normalizer, SimpleNormalizer, SimpleTokenizer, StringFinder, Trie};

fn scan(trie: &Trie, buffer: &str) -> Vec<(String, usize, usize)> {
    StringFinder::new(trie, SimpleTokenizer)
        .scan(buffer)
        .map(|m| (m.text, m.range.start, m.range.end))
        .collect()
}

#[test]
fn finds_every_dictionary_phrase() {
    let trie = Trie::from_phrases(NORWEGIAN_PHRASES, &SimpleTokenizer);
    let found = scan(&trie, NORWEGIAN_BUFFER);
    assert_eq!(
        found,
        vec![
            ("norsk".to_string(), 3, 8),
            ("norsk ørret".to_string(), 3, 19),
            ("ørret".to_string(), 13, 19),
            ("romerike".to_string(), 24, 32),
            ("sverige".to_string(), 48, 55),
        ]
    );
}

#[test]
fn match_text_is_the_covered_slice_rejoined() {
    let trie = Trie::from_phrases(NORWEGIAN_PHRASES, &SimpleTokenizer);
    for m in StringFinder::new(&trie, SimpleTokenizer).scan(NORWEGIAN_BUFFER) {
        let covered = &NORWEGIAN_BUFFER[m.range.clone()];
        assert_eq!(m.text, covered.split_whitespace().collect::<Vec<_>>().join(" "));
        assert!(trie.contains(&m.text));
    }
}

#[test]
fn single_letter_entries_need_whole_tokens() {
    let trie = Trie::from_phrases(["a", "a b"], &SimpleTokenizer);
    assert!(scan(&trie, "abba ba ab").is_empty());
    assert_eq!(
        scan(&trie, "x a b"),
        vec![("a".to_string(), 2, 3), ("a b".to_string(), 2, 5)]
    );
}

#[test]
fn punctuation_between_tokens_still_matches() {
    let trie = Trie::from_phrases(["apple computer"], &SimpleTokenizer);
    assert_eq!(
        scan(&trie, "an apple, computer!"),
        vec![("apple computer".to_string(), 3, 18)]
    );
}

#[test]
fn normalized_buffer_matches_normalized_dictionary() {
    let normalizer = SimpleNormalizer::new();
    let phrases: Vec<String> = ["Norsk Ørret", "SVERIGE"]
        .iter()
        .map(|p| normalizer.normalize(p))
        .collect();
    let trie = Trie::from_phrases(&phrases, &SimpleTokenizer);
    let buffer = normalizer.normalize("NORSK ØRRET fra Sverige");
    let texts: Vec<String> = scan(&trie, &buffer).into_iter().map(|m| m.0).collect();
    assert_eq!(texts, vec!["norsk ørret", "sverige"]);
}

#[test]
fn cjk_tokens() {
    let trie = Trie::from_phrases(["東京 大学"], &SimpleTokenizer);
    let found = scan(&trie, "見る 東京 大学");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].0, "東京 大学");
}

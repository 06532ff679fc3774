//! Loading corpora from disk.

use std::fs;

use lexica::{BuildError, Corpus, DocId, InMemoryCorpus};
use tempfile::TempDir;

#[test]
fn loads_json_array_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("corpus.json");
    fs::write(
        &path,
        r#"[
            {"document_id": 0, "fields": {"body": "this is a Test"}},
            {"document_id": 1, "fields": {"body": "test TEST prøve"}}
        ]"#,
    )
    .unwrap();

    let corpus = InMemoryCorpus::from_json_file(&path).unwrap();
    assert_eq!(corpus.len(), 2);
    assert_eq!(
        corpus.get(DocId(0)).and_then(|d| d.field("body")),
        Some("this is a Test")
    );
}

#[test]
fn loads_json_lines_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("corpus.jsonl");
    fs::write(
        &path,
        "{\"document_id\": 4, \"fields\": {\"title\": \"Rust\"}}\n\n{\"document_id\": 2, \"fields\": {}}\n",
    )
    .unwrap();

    let corpus = InMemoryCorpus::from_json_file(&path).unwrap();
    assert_eq!(corpus.len(), 2);
    let ids: Vec<u32> = corpus.documents().map(|d| d.document_id.get()).collect();
    assert_eq!(ids, vec![4, 2]);
}

#[test]
fn missing_file_is_a_corpus_error() {
    let dir = TempDir::new().unwrap();
    let err = InMemoryCorpus::from_json_file(dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, BuildError::Corpus(_)));
    assert!(err.to_string().contains("nope.json"));
}

#[test]
fn malformed_array_is_a_corpus_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "[{\"document_id\": \"zero\"}]").unwrap();
    let err = InMemoryCorpus::from_json_file(&path).unwrap_err();
    assert!(matches!(err, BuildError::Corpus(_)));
}

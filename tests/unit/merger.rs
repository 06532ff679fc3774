//! Boolean merges driven by real posting lists.

use super::common::{build_test_index, doc_ids, make_corpus, make_postings};
use lexica::{difference, intersection, union, InvertedIndex};

#[test]
fn and_or_over_index_postings() {
    let corpus = make_corpus(&[
        "rust search engine",
        "search tries",
        "rust tries",
        "rust search search",
    ]);
    let index = build_test_index(&corpus, true);

    let both = intersection(
        index.get_postings_iterator("rust"),
        index.get_postings_iterator("search"),
    );
    assert_eq!(doc_ids(both), vec![0, 3]);

    let either = union(
        index.get_postings_iterator("engine"),
        index.get_postings_iterator("tries"),
    );
    assert_eq!(doc_ids(either), vec![0, 1, 2]);

    let rust_only = difference(
        index.get_postings_iterator("rust"),
        index.get_postings_iterator("search"),
    );
    assert_eq!(doc_ids(rust_only), vec![2]);
}

#[test]
fn out_of_vocabulary_side_behaves_as_empty() {
    let corpus = make_corpus(&["alpha", "beta"]);
    let index = build_test_index(&corpus, false);
    let none = intersection(
        index.get_postings_iterator("alpha"),
        index.get_postings_iterator("gamma"),
    );
    assert_eq!(none.count(), 0);
    let some = union(
        index.get_postings_iterator("gamma"),
        index.get_postings_iterator("beta"),
    );
    assert_eq!(doc_ids(some), vec![1]);
}

#[test]
fn chained_merges_compose() {
    let a = make_postings(&[(1, 1), (2, 1), (3, 1), (5, 1)]);
    let b = make_postings(&[(2, 1), (3, 1), (4, 1)]);
    let c = make_postings(&[(3, 1), (9, 1)]);
    let merged = union(intersection(a, b), c);
    assert_eq!(doc_ids(merged), vec![2, 3, 9]);
}

#[test]
fn frequency_policy_min_for_and_max_for_or() {
    let a = make_postings(&[(7, 2)]);
    let b = make_postings(&[(7, 5)]);
    assert_eq!(intersection(a.clone(), b.clone()).next().unwrap().term_frequency, 2);
    assert_eq!(union(a, b).next().unwrap().term_frequency, 5);
}

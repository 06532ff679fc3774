// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the AND / OR / AND NOT posting merges.
//!
//! Arbitrary id sets go through both posting list representations, then
//! through each merge. Output must stay strictly increasing and agree with
//! plain set algebra.

#![no_main]

use std::collections::BTreeSet;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use lexica::{
    difference, intersection, union, CompressedPostingList, InMemoryPostingList, Posting,
    PostingList,
};

#[derive(Debug, Arbitrary)]
struct MergeInput {
    left: BTreeSet<u32>,
    right: BTreeSet<u32>,
    compressed: bool,
}

fn build(ids: &BTreeSet<u32>, compressed: bool) -> Box<dyn PostingList> {
    let postings = ids.iter().map(|&id| Posting::new(id, id % 7 + 1));
    if compressed {
        Box::new(postings.collect::<CompressedPostingList>())
    } else {
        Box::new(postings.collect::<InMemoryPostingList>())
    }
}

fn check(merged: impl Iterator<Item = Posting>, expected: BTreeSet<u32>) {
    let ids: Vec<u32> = merged.map(|p| p.document_id.get()).collect();
    assert!(
        ids.windows(2).all(|w| w[0] < w[1]),
        "merge output not strictly increasing: {:?}",
        ids
    );
    assert_eq!(ids.into_iter().collect::<BTreeSet<_>>(), expected);
}

fuzz_target!(|input: MergeInput| {
    let left = build(&input.left, input.compressed);
    let right = build(&input.right, !input.compressed);

    assert_eq!(left.len(), input.left.len());
    assert!(left.iter().eq(input.left.iter().map(|&id| Posting::new(id, id % 7 + 1))));

    check(
        intersection(left.iter(), right.iter()),
        input.left.intersection(&input.right).copied().collect(),
    );
    check(
        union(left.iter(), right.iter()),
        input.left.union(&input.right).copied().collect(),
    );
    check(
        difference(left.iter(), right.iter()),
        input.left.difference(&input.right).copied().collect(),
    );
});

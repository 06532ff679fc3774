// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the built structures.
//!
//! Debug-build assertions run right after each build step. They are no-ops in
//! release builds, so they may be as slow as they like.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract function             | Property                                       |
//! |-------------------------------|------------------------------------------------|
//! | `check_postings_sorted`       | posting list strictly increasing by document id |
//! | `check_suffix_entry_valid`    | entry in bounds, offset on a char boundary      |
//! | `check_suffix_array_sorted`   | adjacent suffixes in lexicographic order        |
//! | `check_match_on_boundaries`   | a reported match starts and ends on token edges |

use std::ops::Range;

use crate::types::{HaystackEntry, Posting, SuffixEntry};

// ============================================================================
// POSTING LIST CONTRACTS
// ============================================================================

/// Check that postings strictly increase by document id.
///
/// # Panics (debug builds only)
/// Panics on the first pair that is out of order or duplicated.
#[inline]
pub fn check_postings_sorted(postings: impl Iterator<Item = Posting>) {
    if !cfg!(debug_assertions) {
        return;
    }
    let mut prev: Option<Posting> = None;
    for (i, posting) in postings.enumerate() {
        if let Some(prev) = prev {
            debug_assert!(
                prev.document_id < posting.document_id,
                "Contract violation: posting[{}] document {} does not follow document {}",
                i,
                posting.document_id,
                prev.document_id
            );
        }
        prev = Some(posting);
    }
}

// ============================================================================
// SUFFIX ARRAY CONTRACTS
// ============================================================================

/// Check that a suffix entry points inside its haystack text.
///
/// # Panics (debug builds only)
/// Panics if `haystack_index` is out of range or `offset` is not a char
/// boundary strictly inside the text.
#[inline]
pub fn check_suffix_entry_valid(entry: &SuffixEntry, haystack: &[HaystackEntry]) {
    debug_assert!(
        entry.haystack_index < haystack.len(),
        "Contract violation: haystack_index {} >= haystack.len() {}",
        entry.haystack_index,
        haystack.len()
    );

    if let Some(hay) = haystack.get(entry.haystack_index) {
        debug_assert!(
            entry.offset < hay.text.len() && hay.text.is_char_boundary(entry.offset),
            "Contract violation: offset {} is not a char boundary inside haystack[{}] (len {})",
            entry.offset,
            entry.haystack_index,
            hay.text.len()
        );
    }
}

/// Check that a suffix array is sorted lexicographically.
///
/// # Panics (debug builds only)
/// Panics if any adjacent pair violates the ordering.
#[inline]
pub fn check_suffix_array_sorted(haystack: &[HaystackEntry], suffixes: &[SuffixEntry]) {
    if !cfg!(debug_assertions) {
        return;
    }
    let suffix = |e: &SuffixEntry| {
        haystack
            .get(e.haystack_index)
            .map_or("", |hay| hay.suffix(e.offset))
    };
    for entry in suffixes {
        check_suffix_entry_valid(entry, haystack);
    }
    for i in 1..suffixes.len() {
        let prev_suffix = suffix(&suffixes[i - 1]);
        let curr_suffix = suffix(&suffixes[i]);

        debug_assert!(
            prev_suffix <= curr_suffix,
            "Contract violation: suffixes[{}] ('{}') > suffixes[{}] ('{}')",
            i - 1,
            prev_suffix.chars().take(20).collect::<String>(),
            i,
            curr_suffix.chars().take(20).collect::<String>()
        );
    }
}

// ============================================================================
// STRING FINDER CONTRACTS
// ============================================================================

/// Check that a match range begins at some token start and ends at some token end.
///
/// # Panics (debug builds only)
/// Panics if either edge falls strictly inside a token or between tokens.
#[inline]
pub fn check_match_on_boundaries(range: &Range<usize>, tokens: &[Range<usize>]) {
    debug_assert!(
        tokens.iter().any(|t| t.start == range.start),
        "Contract violation: match {:?} does not start on a token",
        range
    );
    debug_assert!(
        tokens.iter().any(|t| t.end == range.end),
        "Contract violation: match {:?} does not end on a token",
        range
    );
}

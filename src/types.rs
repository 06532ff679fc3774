// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The values that flow between the index structures.
//!
//! Most of these are small `Copy` types. The interesting invariants live on
//! the containers that hold them, not here:
//!
//! - **Posting**: immutable once created; a posting list keeps them strictly
//!   increasing by `document_id`.
//! - **SuffixEntry**: `haystack_index < haystack.len()` and `offset` is the
//!   byte offset of a token start in that haystack entry.
//! - **Match**: `range` starts and ends on token boundaries of the scanned buffer.

use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::corpus::Document;

// =============================================================================
// NEWTYPES: Type-safe identifiers
// =============================================================================

/// Type-safe document identifier.
///
/// Prevents accidentally passing a term id or a haystack position where a
/// document id is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct DocId(pub u32);

impl DocId {
    /// Get the underlying value.
    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }

    /// Convert to usize for array indexing.
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for DocId {
    fn from(id: u32) -> Self {
        DocId(id)
    }
}

impl From<DocId> for usize {
    fn from(id: DocId) -> Self {
        id.0 as usize
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Dense term identifier handed out by the dictionary.
///
/// Ids are assigned on first sight starting at 0, so a `TermId` doubles as an
/// index into the per-term posting list table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct TermId(pub u32);

impl TermId {
    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

// =============================================================================
// INVERTED INDEX TYPES
// =============================================================================

/// A document that contains a term, and how often.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Posting {
    pub document_id: DocId,
    pub term_frequency: u32,
}

impl Posting {
    pub fn new(document_id: u32, term_frequency: u32) -> Self {
        Self {
            document_id: DocId(document_id),
            term_frequency,
        }
    }
}

// =============================================================================
// SUFFIX ARRAY TYPES
// =============================================================================

/// The normalized searchable text of one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HaystackEntry {
    pub document_id: DocId,
    pub text: String,
}

impl HaystackEntry {
    /// The suffix starting at `offset`, or "" if the offset is out of range.
    pub fn suffix(&self, offset: usize) -> &str {
        self.text.get(offset..).unwrap_or("")
    }
}

/// A pointer to a suffix of one haystack entry.
///
/// Only token starts get an entry, so a suffix never begins mid-word. When
/// sorted by the pointed-to string these form the suffix array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SuffixEntry {
    pub haystack_index: usize,
    /// Byte offset into the normalized haystack text.
    pub offset: usize,
}

/// A ranked document from a phrase-prefix search.
///
/// `score` is the number of suffixes in the document that start with the query.
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit<'a> {
    pub score: usize,
    pub document: &'a Document,
}

// =============================================================================
// STRING FINDER TYPES
// =============================================================================

/// A dictionary entry found in a scanned buffer.
///
/// `text` is the covered slice of the buffer re-tokenized and joined with
/// single spaces, so `"norsk     ørret"` reports as `"norsk ørret"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    pub text: String,
    pub range: Range<usize>,
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Posting lists: per-term sequences of (document, frequency) pairs.
//!
//! Two storage flavors share one contract. `InMemoryPostingList` keeps a plain
//! vector. `CompressedPostingList` keeps delta+varint bytes: if documents 100,
//! 102, 105 all contain "rust", we store [100, 2, 3] instead, and small gaps
//! fit in a byte. Iteration decodes on the fly, so callers can't tell the two
//! apart.
//!
//! **Invariant**: document ids strictly increase along the list. Both flavors
//! panic on an out-of-order append rather than store a list that merges would
//! silently get wrong.

use std::fmt;

use crate::encoding::{decode_varint, encode_varint};
use crate::types::{DocId, Posting};

/// Boxed forward iterator over postings.
pub type PostingsIter<'a> = Box<dyn Iterator<Item = Posting> + 'a>;

/// An append-only, forward-iterable list of postings for one term.
pub trait PostingList: fmt::Debug {
    /// Append a posting whose document id exceeds every id already stored.
    fn append(&mut self, posting: Posting);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A fresh cursor positioned at the first posting.
    fn iter(&self) -> PostingsIter<'_>;
}

fn check_append_order(last: Option<DocId>, next: DocId) {
    if let Some(last) = last {
        assert!(
            next > last,
            "posting for document {} appended after document {}",
            next,
            last
        );
    }
}

// ============================================================================
// UNCOMPRESSED
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryPostingList {
    postings: Vec<Posting>,
}

impl InMemoryPostingList {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PostingList for InMemoryPostingList {
    fn append(&mut self, posting: Posting) {
        check_append_order(self.postings.last().map(|p| p.document_id), posting.document_id);
        self.postings.push(posting);
    }

    fn len(&self) -> usize {
        self.postings.len()
    }

    fn iter(&self) -> PostingsIter<'_> {
        Box::new(self.postings.iter().copied())
    }
}

impl FromIterator<Posting> for InMemoryPostingList {
    fn from_iter<I: IntoIterator<Item = Posting>>(iter: I) -> Self {
        let mut list = Self::new();
        for posting in iter {
            list.append(posting);
        }
        list
    }
}

// ============================================================================
// COMPRESSED (delta + varint)
// ============================================================================

/// Byte layout, per posting: `doc_id_delta: varint`, `term_frequency: varint`.
/// The first delta is taken from 0.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CompressedPostingList {
    bytes: Vec<u8>,
    len: usize,
    last_document_id: Option<DocId>,
}

impl CompressedPostingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Size of the encoded representation.
    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }
}

impl fmt::Debug for CompressedPostingList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl PostingList for CompressedPostingList {
    fn append(&mut self, posting: Posting) {
        check_append_order(self.last_document_id, posting.document_id);
        let prev = self.last_document_id.map_or(0, DocId::get);
        encode_varint(u64::from(posting.document_id.get() - prev), &mut self.bytes);
        encode_varint(u64::from(posting.term_frequency), &mut self.bytes);
        self.last_document_id = Some(posting.document_id);
        self.len += 1;
    }

    fn len(&self) -> usize {
        self.len
    }

    fn iter(&self) -> PostingsIter<'_> {
        Box::new(CompressedPostings {
            bytes: &self.bytes,
            pos: 0,
            prev: 0,
            remaining: self.len,
        })
    }
}

impl FromIterator<Posting> for CompressedPostingList {
    fn from_iter<I: IntoIterator<Item = Posting>>(iter: I) -> Self {
        let mut list = Self::new();
        for posting in iter {
            list.append(posting);
        }
        list
    }
}

/// Decoding cursor over a `CompressedPostingList`.
struct CompressedPostings<'a> {
    bytes: &'a [u8],
    pos: usize,
    prev: u32,
    remaining: usize,
}

impl CompressedPostings<'_> {
    fn read(&mut self) -> Option<u32> {
        let (value, consumed) = decode_varint(self.bytes.get(self.pos..)?).ok()?;
        self.pos += consumed;
        u32::try_from(value).ok()
    }
}

impl Iterator for CompressedPostings<'_> {
    type Item = Posting;

    fn next(&mut self) -> Option<Posting> {
        if self.remaining == 0 {
            return None;
        }
        let delta = self.read()?;
        let term_frequency = self.read()?;
        self.prev += delta;
        self.remaining -= 1;
        Some(Posting::new(self.prev, term_frequency))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Posting> {
        vec![
            Posting::new(0, 1),
            Posting::new(3, 2),
            Posting::new(200, 1),
            Posting::new(70_000, 9),
        ]
    }

    #[test]
    fn compressed_iterates_like_uncompressed() {
        let plain: InMemoryPostingList = sample().into_iter().collect();
        let packed: CompressedPostingList = sample().into_iter().collect();

        assert_eq!(plain.len(), packed.len());
        assert_eq!(
            plain.iter().collect::<Vec<_>>(),
            packed.iter().collect::<Vec<_>>()
        );
    }

    #[test]
    fn compressed_is_smaller_for_dense_lists() {
        let postings: Vec<Posting> = (1000u32..1100).map(|id| Posting::new(id, 1)).collect();
        let packed: CompressedPostingList = postings.into_iter().collect();
        // 2 bytes for the first posting plus 2 per gap, vs 8 per plain posting
        assert!(packed.byte_len() < 100 * 3);
    }

    #[test]
    fn every_iter_call_starts_over() {
        let packed: CompressedPostingList = sample().into_iter().collect();
        let mut first = packed.iter();
        first.next();
        first.next();
        assert_eq!(packed.iter().next(), Some(Posting::new(0, 1)));
    }

    #[test]
    fn empty_lists_yield_nothing() {
        assert!(InMemoryPostingList::new().iter().next().is_none());
        assert!(CompressedPostingList::new().iter().next().is_none());
        assert!(CompressedPostingList::new().is_empty());
    }

    #[test]
    #[should_panic(expected = "appended after")]
    fn out_of_order_append_panics() {
        let mut list = InMemoryPostingList::new();
        list.append(Posting::new(5, 1));
        list.append(Posting::new(5, 1));
    }
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bounded top-k selection.
//!
//! A min-heap of at most `capacity` candidates: admitting one more and then
//! popping the smallest keeps the best `capacity` seen so far.
//! O(n log k) over n candidates, O(k) space.
//!
//! Among equal scores the candidate sifted first wins, so results are
//! deterministic for a given admission order.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Keeps the `capacity` highest-scoring items sifted through it.
#[derive(Debug, Clone)]
pub struct Sieve<T, S = usize> {
    capacity: usize,
    heap: BinaryHeap<Candidate<T, S>>,
    admitted: u64,
}

#[derive(Debug, Clone)]
struct Candidate<T, S> {
    score: S,
    sequence: u64,
    item: T,
}

impl<T, S: Ord> PartialEq for Candidate<T, S> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T, S: Ord> Eq for Candidate<T, S> {}

impl<T, S: Ord> Ord for Candidate<T, S> {
    // Reversed: the heap top is the weakest candidate, i.e. lowest score,
    // latest admission among equal scores.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .cmp(&self.score)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

impl<T, S: Ord> PartialOrd for Candidate<T, S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, S: Ord> Sieve<T, S> {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            heap: BinaryHeap::with_capacity(capacity.saturating_add(1).min(1024)),
            admitted: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of items currently retained.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Offer a candidate. It is kept only if it ranks among the best `capacity`.
    pub fn sift(&mut self, score: S, item: T) {
        if self.capacity == 0 {
            return;
        }
        let sequence = self.admitted;
        self.admitted += 1;

        self.heap.push(Candidate {
            score,
            sequence,
            item,
        });
        if self.heap.len() > self.capacity {
            self.heap.pop();
        }
    }

    /// The retained `(score, item)` pairs, best first.
    pub fn winners(self) -> Vec<(S, T)> {
        // Ascending under the reversed ordering is best first.
        self.heap
            .into_sorted_vec()
            .into_iter()
            .map(|c| (c.score, c.item))
            .collect()
    }
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Multi-phrase scanning over a tokenized buffer.
//!
//! [`StringFinder::scan`] walks the buffer one token at a time and keeps a
//! working set of partial matches, each a trie node plus the byte offset where
//! it started. For every token:
//!
//! 1. Each live state consumes the token's characters. A missing edge kills it.
//!    If the state lands on a final node, a match `[start, token.end)` is
//!    emitted. If the node has a separator edge, the state survives into the
//!    next token.
//! 2. A fresh state is seeded from the root at `token.start` and treated the
//!    same way.
//!
//! Finality is only checked once a whole token has been consumed, so a match
//! never ends inside a word. States only start at token starts, so it never
//! begins inside one either.
//!
//! The buffer is scanned as given. Normalize it first if the dictionary was
//! built from normalized phrases.

use std::collections::VecDeque;
use std::ops::Range;
use std::vec;

use tracing::trace;

use crate::contracts::check_match_on_boundaries;
use crate::text::{Token, Tokenizer};
use crate::trie::{NodeId, Trie, TOKEN_SEPARATOR};
use crate::types::Match;

/// Finds every dictionary phrase occurring in a buffer.
#[derive(Debug, Clone)]
pub struct StringFinder<'t, T> {
    trie: &'t Trie,
    tokenizer: T,
}

impl<'t, T: Tokenizer> StringFinder<'t, T> {
    pub fn new(trie: &'t Trie, tokenizer: T) -> Self {
        Self { trie, tokenizer }
    }

    pub fn trie(&self) -> &Trie {
        self.trie
    }

    /// Lazily report matches in order of their end offset, then start offset.
    pub fn scan<'s, 'b>(&'s self, buffer: &'b str) -> Scan<'s, 'b, T> {
        let tokens = self.tokenizer.tokens(buffer);
        let boundaries = tokens.iter().map(|t| t.range.clone()).collect();
        trace!(tokens = tokens.len(), "scanning buffer");
        Scan {
            trie: self.trie,
            tokenizer: &self.tokenizer,
            buffer,
            tokens: tokens.into_iter(),
            boundaries,
            states: Vec::new(),
            pending: VecDeque::new(),
        }
    }
}

/// A partial match that is still alive.
#[derive(Debug, Clone, Copy)]
struct ActiveState {
    node: NodeId,
    start: usize,
}

/// Lazy iterator returned by [`StringFinder::scan`].
pub struct Scan<'s, 'b, T> {
    trie: &'s Trie,
    tokenizer: &'s T,
    buffer: &'b str,
    tokens: vec::IntoIter<Token<'b>>,
    boundaries: Vec<Range<usize>>,
    states: Vec<ActiveState>,
    pending: VecDeque<Match>,
}

impl<T: Tokenizer> Scan<'_, '_, T> {
    /// Advance every state across `token`, queueing any matches it completes.
    fn step(&mut self, token: &Token<'_>) {
        let seeded = ActiveState {
            node: self.trie.root(),
            start: token.range.start,
        };
        let previous = std::mem::take(&mut self.states);

        // Rebuilt from scratch each token: dead states simply are not carried over.
        for state in previous.into_iter().chain(std::iter::once(seeded)) {
            let Some(node) = self.trie.consume_str(state.node, token.text) else {
                continue;
            };
            if self.trie.is_final(node) {
                self.emit(state.start..token.range.end);
            }
            if let Some(next) = self.trie.consume(node, TOKEN_SEPARATOR) {
                self.states.push(ActiveState {
                    node: next,
                    start: state.start,
                });
            }
        }
    }

    fn emit(&mut self, range: Range<usize>) {
        check_match_on_boundaries(&range, &self.boundaries);
        let text = self.tokenizer.join(&self.buffer[range.clone()]);
        self.pending.push_back(Match { text, range });
    }
}

impl<T: Tokenizer> Iterator for Scan<'_, '_, T> {
    type Item = Match;

    fn next(&mut self) -> Option<Match> {
        loop {
            if let Some(found) = self.pending.pop_front() {
                return Some(found);
            }
            let token = self.tokens.next()?;
            self.step(&token);
        }
    }
}

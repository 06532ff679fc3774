// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Character trie over a phrase dictionary.
//!
//! Nodes live in a single arena and refer to each other by [`NodeId`]; the
//! root is always node 0. A multi-token phrase is stored with exactly one
//! space between tokens, so the finder can step across a token boundary by
//! consuming `' '`.
//!
//! # Invariants
//!
//! - Every node except the root has exactly one parent edge (it is a tree).
//! - A node is final iff the path from the root spells a whole entry.
//! - Nodes are only ever added.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::text::Tokenizer;

/// Separator stored between the tokens of a multi-token entry.
pub const TOKEN_SEPARATOR: char = ' ';

/// Index of a node in the trie arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(u32);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct TrieNode {
    children: BTreeMap<char, NodeId>,
    is_final: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trie {
    nodes: Vec<TrieNode>,
    entries: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            entries: 0,
        }
    }

    /// Build from raw phrases, re-joining each phrase's tokens with a single space.
    ///
    /// Callers that normalize their scan buffers should pass normalized phrases
    /// here too. Phrases with no tokens are skipped.
    pub fn from_phrases<I, S, T>(phrases: I, tokenizer: &T) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        T: Tokenizer + ?Sized,
    {
        let mut trie = Self::new();
        for phrase in phrases {
            let joined = tokenizer.join(phrase.as_ref());
            if !joined.is_empty() {
                trie.add(&joined);
            }
        }
        trie
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Insert `entry` verbatim. Returns `false` if it was already present.
    pub fn add(&mut self, entry: &str) -> bool {
        let mut node = NodeId::ROOT;
        for c in entry.chars() {
            node = match self.consume(node, c) {
                Some(next) => next,
                None => {
                    let next = NodeId(self.nodes.len() as u32);
                    self.nodes.push(TrieNode::default());
                    self.nodes[node.index()].children.insert(c, next);
                    next
                }
            };
        }

        let target = &mut self.nodes[node.index()];
        if target.is_final {
            return false;
        }
        target.is_final = true;
        self.entries += 1;
        true
    }

    /// Follow the edge labelled `c` out of `node`.
    #[inline]
    pub fn consume(&self, node: NodeId, c: char) -> Option<NodeId> {
        self.nodes.get(node.index())?.children.get(&c).copied()
    }

    /// Follow every character of `s` in turn, failing on the first missing edge.
    pub fn consume_str(&self, node: NodeId, s: &str) -> Option<NodeId> {
        s.chars().try_fold(node, |node, c| self.consume(node, c))
    }

    #[inline]
    pub fn is_final(&self, node: NodeId) -> bool {
        self.nodes.get(node.index()).is_some_and(|n| n.is_final)
    }

    pub fn contains(&self, entry: &str) -> bool {
        self.consume_str(NodeId::ROOT, entry)
            .is_some_and(|node| self.is_final(node))
    }

    /// Number of distinct entries.
    pub fn len(&self) -> usize {
        self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Term ↔ id mapping.
//!
//! Ids are dense, contiguous from 0, and assigned on first sight. Nothing is
//! ever removed, so an id handed out stays valid for the dictionary's lifetime.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::TermId;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InMemoryDictionary {
    ids: HashMap<String, TermId>,
    terms: Vec<String>,
}

impl InMemoryDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the id of `term`, assigning the next free id if it is new.
    pub fn add_if_absent(&mut self, term: &str) -> TermId {
        if let Some(&id) = self.ids.get(term) {
            return id;
        }
        let id = TermId(self.terms.len() as u32);
        self.ids.insert(term.to_string(), id);
        self.terms.push(term.to_string());
        id
    }

    pub fn term_id(&self, term: &str) -> Option<TermId> {
        self.ids.get(term).copied()
    }

    pub fn term(&self, id: TermId) -> Option<&str> {
        self.terms.get(id.as_usize()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// All `(term, id)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, TermId)> + '_ {
        self.terms
            .iter()
            .enumerate()
            .map(|(i, term)| (term.as_str(), TermId(i as u32)))
    }
}

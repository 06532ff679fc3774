// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Documents and the collections that hold them.
//!
//! The index structures only need two things from a corpus: iterate every
//! document once at build time, and look a document up by id when ranking
//! results. Everything else about storage is the caller's business.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BuildError, Result};
use crate::types::DocId;

/// A document with a stable id and named text fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub document_id: DocId,
    #[serde(default)]
    pub fields: BTreeMap<String, String>,
}

impl Document {
    pub fn new(document_id: u32) -> Self {
        Self {
            document_id: DocId(document_id),
            fields: BTreeMap::new(),
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Like `field`, but a missing field is a build error.
    ///
    /// Index construction uses this: a configured field that a document lacks
    /// means the index and the corpus disagree, and silently skipping it would
    /// hide that.
    pub fn require_field(&self, name: &str) -> Result<&str> {
        self.field(name).ok_or_else(|| BuildError::MissingField {
            document_id: self.document_id,
            field: name.to_string(),
        })
    }
}

/// A collection of documents addressable by id.
pub trait Corpus {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, document_id: DocId) -> Option<&Document>;

    /// Every document exactly once. Order is not necessarily by id.
    fn documents(&self) -> Box<dyn Iterator<Item = &Document> + '_>;
}

/// Corpus held entirely in memory, iterated in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCorpus {
    documents: Vec<Document>,
    positions: HashMap<DocId, usize>,
}

impl InMemoryCorpus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_documents(documents: impl IntoIterator<Item = Document>) -> Self {
        let mut corpus = Self::new();
        for document in documents {
            corpus.add_document(document);
        }
        corpus
    }

    /// Add a document. A document with an id already present replaces the old one.
    pub fn add_document(&mut self, document: Document) {
        match self.positions.get(&document.document_id) {
            Some(&position) => self.documents[position] = document,
            None => {
                self.positions
                    .insert(document.document_id, self.documents.len());
                self.documents.push(document);
            }
        }
    }

    /// Parse a JSON array of documents.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let documents: Vec<Document> = serde_json::from_str(json)?;
        Ok(Self::from_documents(documents))
    }

    /// Parse one JSON document per line. Blank lines are skipped.
    pub fn from_json_lines(lines: &str) -> Result<Self> {
        let mut corpus = Self::new();
        for (number, line) in lines.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let document: Document = serde_json::from_str(line).map_err(|e| {
                BuildError::Corpus(format!("line {}: {}", number + 1, e))
            })?;
            corpus.add_document(document);
        }
        Ok(corpus)
    }

    /// Load a corpus file, either a JSON array or JSON lines.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| BuildError::Corpus(format!("{}: {}", path.display(), e)))?;
        if contents.trim_start().starts_with('[') {
            Self::from_json_str(&contents)
        } else {
            Self::from_json_lines(&contents)
        }
    }
}

impl Corpus for InMemoryCorpus {
    fn len(&self) -> usize {
        self.documents.len()
    }

    fn get(&self, document_id: DocId) -> Option<&Document> {
        self.positions
            .get(&document_id)
            .map(|&position| &self.documents[position])
    }

    fn documents(&self) -> Box<dyn Iterator<Item = &Document> + '_> {
        Box::new(self.documents.iter())
    }
}

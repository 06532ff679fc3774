// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Build-time failures.
//!
//! Queries never fail: unknown terms give empty postings and non-matching
//! phrases give empty results. The only errors are configuration mismatches
//! discovered while building a structure from a corpus, or a corpus that
//! could not be loaded in the first place.

use std::fmt;

use crate::types::DocId;

/// Error raised while loading a corpus or building an index from one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// A configured field is absent on a document.
    MissingField { document_id: DocId, field: String },
    /// The corpus source could not be read or parsed.
    Corpus(String),
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::MissingField { document_id, field } => {
                write!(f, "document {} has no field '{}'", document_id, field)
            }
            BuildError::Corpus(reason) => write!(f, "cannot load corpus: {}", reason),
        }
    }
}

impl std::error::Error for BuildError {}

impl From<std::io::Error> for BuildError {
    fn from(err: std::io::Error) -> Self {
        BuildError::Corpus(err.to_string())
    }
}

impl From<serde_json::Error> for BuildError {
    fn from(err: serde_json::Error) -> Self {
        BuildError::Corpus(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BuildError>;

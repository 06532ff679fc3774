// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the lexica command-line interface.
//!
//! Three subcommands, one per query structure: `postings` builds an inverted
//! index and merges the query terms' posting lists, `suffix` runs a
//! phrase-prefix search, and `scan` finds dictionary phrases in a text.
//! Everything prints JSON to stdout.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "lexica",
    about = "In-memory lexical search: inverted index, suffix array, phrase scanner",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// How the posting lists of several query terms are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MergeMode {
    /// Documents containing every term
    And,
    /// Documents containing any term
    Or,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Look up query terms in an inverted index and merge their postings
    Postings {
        /// Corpus file: a JSON array or JSON lines of documents
        corpus: PathBuf,

        /// Query text; it is normalized and tokenized like the documents
        query: String,

        /// Document fields to index (repeatable)
        #[arg(short, long = "field", default_value = "body")]
        fields: Vec<String>,

        /// Store posting lists delta+varint compressed
        #[arg(long)]
        compressed: bool,

        /// Merge mode for multi-term queries
        #[arg(short, long, value_enum, default_value = "and")]
        mode: MergeMode,
    },

    /// Phrase-prefix search over a suffix array
    Suffix {
        /// Corpus file: a JSON array or JSON lines of documents
        corpus: PathBuf,

        /// Phrase prefix, e.g. "to the be"
        query: String,

        /// Document fields to search (repeatable)
        #[arg(short, long = "field", default_value = "body")]
        fields: Vec<String>,

        /// Maximum number of documents to return
        #[arg(long)]
        hit_count: Option<usize>,
    },

    /// Find every dictionary phrase that occurs in a text
    Scan {
        /// Dictionary file with one phrase per line
        dictionary: PathBuf,

        /// Text to scan
        text: String,
    },
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text normalization and tokenization.
//!
//! Every structure in this crate sees text through these two traits, and the
//! same pipeline must be used for documents and for queries. Nothing checks
//! this at runtime: index with one normalizer and query with another and
//! lookups just quietly miss.

use std::ops::Range;

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Folds text into the canonical form that gets indexed.
pub trait Normalizer {
    fn normalize(&self, text: &str) -> String;
}

/// A token and the byte range it occupies in the tokenized text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub range: Range<usize>,
}

impl<'a> Token<'a> {
    fn new(source: &'a str, range: Range<usize>) -> Self {
        Self {
            text: &source[range.clone()],
            range,
        }
    }
}

/// Splits text into tokens with byte ranges.
///
/// Only `tokens` is required; `strings` and `ranges` are projections of it.
pub trait Tokenizer {
    fn tokens<'a>(&self, text: &'a str) -> Vec<Token<'a>>;

    fn strings<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.tokens(text).into_iter().map(|t| t.text).collect()
    }

    fn ranges(&self, text: &str) -> Vec<Range<usize>> {
        self.tokens(text).into_iter().map(|t| t.range).collect()
    }

    /// Tokenize and re-join with single spaces.
    fn join(&self, text: &str) -> String {
        self.strings(text).join(" ")
    }
}

/// Case and width folding, with optional accent stripping.
///
/// # Algorithm (with unicode-normalization feature)
///
/// 1. NFKC (width folding, composes `C` + U+0327 into `Ç`)
/// 2. Lowercase
/// 3. NFKC again, since lowercasing can leave compatibility forms behind
/// 4. If `strip_accents`: NFD, drop combining marks, recompose
/// 5. Collapse whitespace
///
/// # Algorithm (without unicode-normalization)
///
/// Lowercase and collapse whitespace only. Assumes input is pre-normalized or ASCII.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleNormalizer {
    pub strip_accents: bool,
}

impl SimpleNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also fold accented letters onto their base letter: "café" → "cafe".
    pub fn with_accent_stripping() -> Self {
        Self {
            strip_accents: true,
        }
    }
}

impl Normalizer for SimpleNormalizer {
    #[cfg(feature = "unicode-normalization")]
    fn normalize(&self, value: &str) -> String {
        let folded: String = value
            .nfkc()
            .collect::<String>()
            .to_lowercase()
            .nfkc()
            .collect();
        let folded = if self.strip_accents {
            folded
                .nfd()
                .filter(|c| !is_combining_mark(*c))
                .nfc()
                .collect()
        } else {
            folded
        };
        collapse_whitespace(&folded)
    }

    #[cfg(not(feature = "unicode-normalization"))]
    fn normalize(&self, value: &str) -> String {
        collapse_whitespace(&value.to_lowercase())
    }
}

fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Word boundary detection: checks if character is a word separator.
fn is_word_boundary(c: char) -> bool {
    !c.is_alphanumeric()
}

/// Maximal runs of alphanumeric characters are tokens; everything else separates.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleTokenizer;

impl SimpleTokenizer {
    pub fn new() -> Self {
        SimpleTokenizer
    }
}

impl Tokenizer for SimpleTokenizer {
    fn tokens<'a>(&self, text: &'a str) -> Vec<Token<'a>> {
        let mut tokens = Vec::new();
        let mut start: Option<usize> = None;

        for (i, c) in text.char_indices() {
            match (is_word_boundary(c), start) {
                (false, None) => start = Some(i),
                (true, Some(s)) => {
                    tokens.push(Token::new(text, s..i));
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(s) = start {
            tokens.push(Token::new(text, s..text.len()));
        }

        tokens
    }
}

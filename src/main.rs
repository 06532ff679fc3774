// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use lexica::{
    intersection, union, Corpus, Document, InMemoryCorpus, InMemoryInvertedIndex, IndexConfig,
    InvertedIndex, Normalizer, Posting, PostingsIter, SearchOptions, SimpleNormalizer,
    SimpleTokenizer, StringFinder, SuffixArray, Trie,
};

mod cli;
use cli::{Cli, Commands, MergeMode};

#[derive(Serialize)]
struct PostingsReport<'a> {
    terms: Vec<String>,
    postings: Vec<PostingHit<'a>>,
}

#[derive(Serialize)]
struct PostingHit<'a> {
    #[serde(flatten)]
    posting: Posting,
    document: Option<&'a Document>,
}

fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Postings {
            corpus,
            query,
            fields,
            compressed,
            mode,
        } => run_postings(&corpus, &query, fields, compressed, mode),
        Commands::Suffix {
            corpus,
            query,
            fields,
            hit_count,
        } => run_suffix(&corpus, &query, &fields, hit_count),
        Commands::Scan { dictionary, text } => run_scan(&dictionary, &text),
    }
}

fn load_corpus(path: &Path) -> Result<InMemoryCorpus> {
    let corpus = InMemoryCorpus::from_json_file(path)
        .with_context(|| format!("loading corpus {}", path.display()))?;
    info!(documents = corpus.len(), "loaded corpus");
    Ok(corpus)
}

fn run_postings(
    corpus_path: &Path,
    query: &str,
    fields: Vec<String>,
    compressed: bool,
    mode: MergeMode,
) -> Result<()> {
    let corpus = load_corpus(corpus_path)?;
    let config = IndexConfig::with_fields(fields).compressed(compressed);
    let index = InMemoryInvertedIndex::new(&corpus, &config).context("building inverted index")?;

    let terms = index.get_terms(query);
    let mut lists = terms.iter().map(|term| index.get_postings_iterator(term));
    let merged: PostingsIter<'_> = match lists.next() {
        None => Box::new(std::iter::empty()),
        Some(first) => lists.fold(first, |acc, next| merge(acc, next, mode)),
    };

    let report = PostingsReport {
        postings: merged
            .map(|posting| PostingHit {
                posting,
                document: corpus.get(posting.document_id),
            })
            .collect(),
        terms,
    };
    print_json(&report)
}

fn merge<'a>(left: PostingsIter<'a>, right: PostingsIter<'a>, mode: MergeMode) -> PostingsIter<'a> {
    match mode {
        MergeMode::And => Box::new(intersection(left, right)),
        MergeMode::Or => Box::new(union(left, right)),
    }
}

fn run_suffix(
    corpus_path: &Path,
    query: &str,
    fields: &[String],
    hit_count: Option<usize>,
) -> Result<()> {
    let corpus = load_corpus(corpus_path)?;
    let engine = SuffixArray::new(&corpus, fields).context("building suffix array")?;
    let hits = engine.evaluate(query, &SearchOptions { hit_count });
    print_json(&hits)
}

fn run_scan(dictionary_path: &Path, text: &str) -> Result<()> {
    let contents = fs::read_to_string(dictionary_path)
        .with_context(|| format!("reading dictionary {}", dictionary_path.display()))?;

    let normalizer = SimpleNormalizer::new();
    let phrases = contents
        .lines()
        .map(|line| normalizer.normalize(line))
        .filter(|line| !line.is_empty());
    let trie = Trie::from_phrases(phrases, &SimpleTokenizer);
    info!(entries = trie.len(), nodes = trie.node_count(), "built dictionary trie");

    let finder = StringFinder::new(&trie, SimpleTokenizer);
    let buffer = normalizer.normalize(text);
    let matches: Vec<_> = finder.scan(&buffer).collect();
    print_json(&matches)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{}", rendered);
    Ok(())
}

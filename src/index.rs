//! The inverted index: normalized term → line ids containing it.
//!
//! Built once from a [`DocumentCollection`] and read-only afterwards.
//!
//! # Examples
//!
//! ```
//! use simple_search::analysis::analyzer::SimpleAnalyzer;
//! use simple_search::document::DocumentCollection;
//! use simple_search::index::InvertedIndex;
//!
//! let docs = DocumentCollection::from_lines(["Hello hello World"]);
//! let index = InvertedIndex::build(&docs, &SimpleAnalyzer::new());
//!
//! assert_eq!(index.postings("hello"), &[0, 0]);
//! assert_eq!(index.postings("world"), &[0]);
//! assert!(index.postings("missing").is_empty());
//! ```

use ahash::AHashMap;
use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::Analyzer;
use crate::config::EngineConfig;
use crate::document::DocumentCollection;

/// Size summary of an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    /// Number of lines indexed.
    pub doc_count: usize,
    /// Number of distinct terms.
    pub term_count: usize,
    /// Total number of postings, duplicates included.
    pub posting_count: usize,
}

/// Mapping from term to the ordered list of line ids where it occurs.
///
/// Postings keep duplicates: a term appearing twice on a line lists that line
/// twice. Each list is non-decreasing and every id is below `doc_count`.
#[derive(Debug, Clone, Default)]
pub struct InvertedIndex {
    postings: AHashMap<String, Vec<usize>>,
    doc_count: usize,
}

impl InvertedIndex {
    /// Build an index by scanning the lines in order.
    pub fn build(docs: &DocumentCollection, analyzer: &dyn Analyzer) -> Self {
        let mut postings: AHashMap<String, Vec<usize>> = AHashMap::new();

        for (line_id, line) in docs.iter() {
            for token in analyzer.analyze(line) {
                postings.entry(token.text).or_default().push(line_id);
            }
        }

        let index = InvertedIndex {
            postings,
            doc_count: docs.len(),
        };
        debug!(
            "Built index over {} lines with {} terms",
            index.doc_count,
            index.term_count()
        );
        index
    }

    /// Build the same index as [`build`](Self::build) using rayon.
    ///
    /// Lines are split into chunks indexed independently, then the partial
    /// maps are merged in chunk order so every postings list stays ascending.
    pub fn build_parallel(docs: &DocumentCollection, analyzer: &dyn Analyzer) -> Self {
        let chunk_size = (docs.len() / rayon::current_num_threads()).max(1);

        let partials: Vec<AHashMap<String, Vec<usize>>> = docs
            .lines()
            .par_chunks(chunk_size)
            .enumerate()
            .map(|(chunk_no, chunk)| {
                let base = chunk_no * chunk_size;
                let mut partial: AHashMap<String, Vec<usize>> = AHashMap::new();
                for (offset, line) in chunk.iter().enumerate() {
                    for token in analyzer.analyze(line) {
                        partial.entry(token.text).or_default().push(base + offset);
                    }
                }
                partial
            })
            .collect();

        let mut postings: AHashMap<String, Vec<usize>> = AHashMap::new();
        for partial in partials {
            for (term, ids) in partial {
                postings.entry(term).or_default().extend(ids);
            }
        }

        let index = InvertedIndex {
            postings,
            doc_count: docs.len(),
        };
        debug!(
            "Built index in parallel over {} lines ({} per chunk) with {} terms",
            index.doc_count,
            chunk_size,
            index.term_count()
        );
        index
    }

    /// Build sequentially or in parallel depending on the configuration.
    pub fn build_with_config(
        docs: &DocumentCollection,
        analyzer: &dyn Analyzer,
        config: &EngineConfig,
    ) -> Self {
        if config.use_parallel(docs.len()) {
            Self::build_parallel(docs, analyzer)
        } else {
            Self::build(docs, analyzer)
        }
    }

    /// Line ids for a term, or an empty slice if the term is not indexed.
    pub fn postings(&self, term: &str) -> &[usize] {
        self.postings.get(term).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether the term occurs anywhere.
    pub fn contains_term(&self, term: &str) -> bool {
        self.postings.contains_key(term)
    }

    /// Number of lines the index was built from.
    pub fn doc_count(&self) -> usize {
        self.doc_count
    }

    /// Number of distinct terms.
    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    /// Iterate over the indexed terms in no particular order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.postings.keys().map(String::as_str)
    }

    /// Summary counts for this index.
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            doc_count: self.doc_count,
            term_count: self.term_count(),
            posting_count: self.postings.values().map(Vec::len).sum(),
        }
    }
}

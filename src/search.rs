//! The search engine: a loaded collection, its index, and query evaluation.
//!
//! A [`SearchEngine`] is an ordinary value. Build as many as needed; each owns
//! its lines and index and never changes after construction.
//!
//! # Examples
//!
//! ```
//! use simple_search::document::DocumentCollection;
//! use simple_search::query::MatchStrategy;
//! use simple_search::search::SearchEngine;
//!
//! let engine = SearchEngine::new(DocumentCollection::from_lines([
//!     "John Smith john@example.com",
//!     "Jane Doe jane@example.com",
//!     "John Jane shared@example.com",
//! ]));
//!
//! let results = engine.search_str("john", MatchStrategy::Any);
//! assert_eq!(results.line_ids(), vec![0, 2]);
//!
//! let results = engine.search_str("john jane", MatchStrategy::All);
//! assert_eq!(results.line_ids(), vec![2]);
//! ```

use std::sync::Arc;
use std::time::Instant;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::{Analyzer, SimpleAnalyzer};
use crate::config::EngineConfig;
use crate::document::DocumentCollection;
use crate::error::Result;
use crate::index::InvertedIndex;
use crate::query::{MatchSet, MatchStrategy, Query};

/// A single matching line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hit {
    /// 0-based line id.
    pub line: usize,
    /// Original text of the line.
    pub text: String,
}

/// Results of one search, hits in ascending line order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResults {
    /// Strategy used, or `None` if the requested name was not recognized.
    pub strategy: Option<MatchStrategy>,
    /// The query text as given.
    pub query: String,
    /// Number of matching lines.
    pub total_hits: usize,
    /// The matching lines.
    pub hits: Vec<Hit>,
}

impl SearchResults {
    /// Results with no hits.
    pub fn empty(query: &str, strategy: Option<MatchStrategy>) -> Self {
        SearchResults {
            strategy,
            query: query.to_string(),
            total_hits: 0,
            hits: Vec::new(),
        }
    }

    /// Whether nothing matched.
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// Matching line ids in ascending order.
    pub fn line_ids(&self) -> Vec<usize> {
        self.hits.iter().map(|hit| hit.line).collect()
    }
}

/// Indexed, immutable lines ready to be queried.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    docs: DocumentCollection,
    index: InvertedIndex,
    analyzer: Arc<dyn Analyzer>,
}

impl SearchEngine {
    /// Index the lines with the default analyzer and a sequential build.
    pub fn new(docs: DocumentCollection) -> Self {
        Self::with_config(docs, &EngineConfig::default())
    }

    /// Index the lines with the default analyzer.
    pub fn with_config(docs: DocumentCollection, config: &EngineConfig) -> Self {
        Self::with_analyzer(docs, Arc::new(SimpleAnalyzer::new()), config)
    }

    /// Index the lines with a custom analyzer, also used for queries.
    pub fn with_analyzer(
        docs: DocumentCollection,
        analyzer: Arc<dyn Analyzer>,
        config: &EngineConfig,
    ) -> Self {
        let index = InvertedIndex::build_with_config(&docs, analyzer.as_ref(), config);
        SearchEngine {
            docs,
            index,
            analyzer,
        }
    }

    /// Load the configured data file and index it.
    pub fn open(config: &EngineConfig) -> Result<Self> {
        config.validate()?;

        let start_time = Instant::now();
        let docs = DocumentCollection::load(&config.data_path)?;
        let engine = Self::with_config(docs, config);
        debug!(
            "Opened {} in {}ms",
            config.data_path.display(),
            start_time.elapsed().as_millis()
        );

        Ok(engine)
    }

    /// The indexed lines.
    pub fn documents(&self) -> &DocumentCollection {
        &self.docs
    }

    /// The inverted index.
    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }

    /// The analyzer shared by indexing and querying.
    pub fn analyzer(&self) -> &dyn Analyzer {
        self.analyzer.as_ref()
    }

    /// Parse query text with this engine's analyzer.
    pub fn parse_query(&self, text: &str) -> Query {
        Query::parse(text, self.analyzer.as_ref())
    }

    /// Compute the matching line ids only.
    pub fn matches(&self, query: &Query, strategy: MatchStrategy) -> MatchSet {
        strategy.matcher().matches(&self.index, query.terms())
    }

    /// Evaluate a parsed query.
    pub fn search(&self, query: &Query, strategy: MatchStrategy) -> SearchResults {
        let matches = self.matches(query, strategy);
        debug!(
            "{} query {:?} matched {} of {} lines",
            strategy,
            query.text(),
            matches.len(),
            self.docs.len()
        );

        let hits: Vec<Hit> = matches
            .iter()
            .filter_map(|line| {
                self.docs.get(line).map(|text| Hit {
                    line,
                    text: text.to_string(),
                })
            })
            .collect();

        SearchResults {
            strategy: Some(strategy),
            query: query.text().to_string(),
            total_hits: hits.len(),
            hits,
        }
    }

    /// Parse and evaluate query text.
    pub fn search_str(&self, text: &str, strategy: MatchStrategy) -> SearchResults {
        self.search(&self.parse_query(text), strategy)
    }

    /// Evaluate query text with a strategy given by name.
    ///
    /// An unrecognized name yields empty results rather than an error.
    pub fn search_named(&self, text: &str, strategy_name: &str) -> SearchResults {
        match MatchStrategy::from_name(strategy_name) {
            Some(strategy) => self.search_str(text, strategy),
            None => {
                debug!("Unknown matching strategy {strategy_name:?}");
                SearchResults::empty(text, None)
            }
        }
    }
}

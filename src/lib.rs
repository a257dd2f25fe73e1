//! # simple-search
//!
//! A small in-memory search tool over the lines of a text file.
//!
//! Lines are split on single spaces, lowercased and collected into an
//! inverted index. Queries go through the same analysis and are matched with
//! one of three strategies:
//!
//! - `ANY` - lines containing at least one query term
//! - `NONE` - lines containing none of them
//! - `ALL` - the lines with the most term hits
//!
//! The [`cli`] module wraps the library in an interactive menu.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod index;
pub mod query;
pub mod search;

pub mod prelude {
    pub use crate::analysis::analyzer::{Analyzer, SimpleAnalyzer};
    pub use crate::config::EngineConfig;
    pub use crate::document::DocumentCollection;
    pub use crate::error::{Result, SearchError};
    pub use crate::index::{IndexStats, InvertedIndex};
    pub use crate::query::{MatchSet, MatchStrategy, Query};
    pub use crate::search::{Hit, SearchEngine, SearchResults};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

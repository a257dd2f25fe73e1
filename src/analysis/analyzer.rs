//! Analyzers combine a tokenizer with filters.
//!
//! ```text
//! Raw Text → Tokenizer → Filter 1 … Filter N → Token Stream
//! ```
//!
//! # Examples
//!
//! ```
//! use simple_search::analysis::analyzer::{Analyzer, SimpleAnalyzer};
//!
//! let analyzer = SimpleAnalyzer::new();
//! let terms = analyzer.terms("Jane  DOE");
//! assert_eq!(terms, vec!["jane", "", "doe"]);
//! ```

use std::sync::Arc;

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::space::SpaceTokenizer;

/// Trait for analyzers that convert text into processed tokens.
pub trait Analyzer: Send + Sync + std::fmt::Debug {
    /// Analyze the given text into a stream of tokens.
    fn analyze(&self, text: &str) -> TokenStream;

    /// Get the name of this analyzer.
    fn name(&self) -> &'static str;

    /// Analyze the text and keep only the token texts, in order.
    fn terms(&self, text: &str) -> Vec<String> {
        self.analyze(text).map(|token| token.text).collect()
    }
}

/// Single-space tokenization followed by lowercasing.
///
/// Used for both lines and queries so that a query term matches exactly the
/// index keys produced from the same word.
#[derive(Clone)]
pub struct SimpleAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn Filter>>,
}

impl SimpleAnalyzer {
    /// Create the default analyzer.
    pub fn new() -> Self {
        SimpleAnalyzer {
            tokenizer: Arc::new(SpaceTokenizer::new()),
            filters: vec![Arc::new(LowercaseFilter::new())],
        }
    }
}

impl Default for SimpleAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SimpleAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimpleAnalyzer")
            .field("tokenizer", &self.tokenizer.name())
            .field(
                "filters",
                &self.filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl Analyzer for SimpleAnalyzer {
    fn analyze(&self, text: &str) -> TokenStream {
        let mut tokens = self.tokenizer.tokenize(text);
        for filter in &self.filters {
            tokens = filter.filter(tokens);
        }
        tokens
    }

    fn name(&self) -> &'static str {
        "simple"
    }
}

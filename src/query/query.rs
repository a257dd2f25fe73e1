//! Tokenized search queries.

use std::fmt;

use crate::analysis::analyzer::Analyzer;

/// A search query: the normalized terms to look up, in input order.
///
/// Terms are not deduplicated. `"john john"` looks `john` up twice, which
/// doubles its weight under the `ALL` strategy.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Query {
    text: String,
    terms: Vec<String>,
}

impl Query {
    /// Parse query text with the same analyzer used for indexing.
    ///
    /// An empty string has no terms. Any other text is split exactly like an
    /// indexed line, so `"a  b"` carries an empty term between `a` and `b`.
    pub fn parse(text: &str, analyzer: &dyn Analyzer) -> Self {
        let terms = if text.is_empty() {
            Vec::new()
        } else {
            analyzer.terms(text)
        };

        Query {
            text: text.to_string(),
            terms,
        }
    }

    /// Build a query from terms that are already normalized.
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let terms: Vec<String> = terms.into_iter().map(Into::into).collect();
        Query {
            text: terms.join(" "),
            terms,
        }
    }

    /// The raw query text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The normalized terms.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Whether the query has no terms at all.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

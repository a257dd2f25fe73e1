//! Token filters that transform token streams.
//!
//! - [`lowercase::LowercaseFilter`] - Converts tokens to lowercase

pub mod lowercase;

use crate::analysis::token::TokenStream;

/// Trait for filters that transform token streams.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> TokenStream;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

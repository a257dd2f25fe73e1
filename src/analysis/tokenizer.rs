//! Tokenizers that break text into tokens.
//!
//! - [`space::SpaceTokenizer`] - Splits on the single space character
//!
//! # Examples
//!
//! ```
//! use simple_search::analysis::tokenizer::Tokenizer;
//! use simple_search::analysis::tokenizer::space::SpaceTokenizer;
//!
//! let tokenizer = SpaceTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello world").collect();
//! assert_eq!(tokens.len(), 2);
//! ```

pub mod space;

use crate::analysis::token::TokenStream;

/// Trait for tokenizers that convert text into tokens.
///
/// Tokenizing cannot fail: any string has a tokenization, even the empty one.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> TokenStream;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

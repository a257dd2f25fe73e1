//! Single-space tokenizer implementation.

use super::Tokenizer;

use crate::analysis::token::{Token, TokenStream};

/// A tokenizer that splits text on the `' '` character and nothing else.
///
/// Unlike a whitespace tokenizer, runs of spaces are not collapsed: every
/// space is a separator, so `"a  b"` yields `["a", "", "b"]` and `""` yields a
/// single empty token. Tabs and other whitespace stay inside tokens.
#[derive(Clone, Debug, Default)]
pub struct SpaceTokenizer;

impl SpaceTokenizer {
    /// Create a new space tokenizer.
    pub fn new() -> Self {
        SpaceTokenizer
    }
}

impl Tokenizer for SpaceTokenizer {
    fn tokenize(&self, text: &str) -> TokenStream {
        let mut tokens = Vec::new();
        let mut start = 0;

        for (position, word) in text.split(' ').enumerate() {
            let end = start + word.len();
            tokens.push(Token::with_offsets(word, position, start, end));
            // Skip the separator.
            start = end + 1;
        }

        Box::new(tokens.into_iter())
    }

    fn name(&self) -> &'static str {
        "space"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(text: &str) -> Vec<String> {
        SpaceTokenizer::new()
            .tokenize(text)
            .map(|token| token.text)
            .collect()
    }

    #[test]
    fn test_space_tokenizer() {
        let tokens: Vec<Token> = SpaceTokenizer::new()
            .tokenize("John Smith john@example.com")
            .collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].text, "John");
        assert_eq!(tokens[1].text, "Smith");
        assert_eq!(tokens[2].text, "john@example.com");
        assert_eq!(tokens[2].position, 2);
        assert_eq!(tokens[2].start_offset, 11);
        assert_eq!(tokens[2].end_offset, 27);
    }

    #[test]
    fn test_consecutive_spaces_yield_empty_tokens() {
        assert_eq!(texts("a  b"), vec!["a", "", "b"]);
        assert_eq!(texts(" a "), vec!["", "a", ""]);
    }

    #[test]
    fn test_empty_text_yields_one_empty_token() {
        assert_eq!(texts(""), vec![""]);
    }

    #[test]
    fn test_tabs_are_not_separators() {
        assert_eq!(texts("a\tb c"), vec!["a\tb", "c"]);
    }

    #[test]
    fn test_offsets_with_multibyte_text() {
        let tokens: Vec<Token> = SpaceTokenizer::new().tokenize("Ünal  Öz").collect();
        assert_eq!(tokens[0].end_offset, "Ünal".len());
        assert_eq!(tokens[2].start_offset, "Ünal  ".len());
        assert_eq!(tokens[2].text, "Öz");
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(SpaceTokenizer::new().name(), "space");
    }
}

//! Text analysis for indexing and querying.
//!
//! Lines and queries go through the same pipeline so both sides agree on what
//! a term is:
//!
//! ```text
//! "John  Smith" → SpaceTokenizer → ["John", "", "Smith"] → LowercaseFilter → ["john", "", "smith"]
//! ```

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

//! Error types for simple-search.
//!
//! Only loading data and writing output can fail. Query evaluation never
//! returns an error: unknown strategies, empty queries and missing terms all
//! resolve to an empty result instead.
//!
//! # Examples
//!
//! ```
//! use simple_search::error::{Result, SearchError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SearchError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for simple-search operations.
#[derive(Error, Debug)]
pub enum SearchError {
    /// I/O errors (reading the data file, writing to the terminal)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization errors while rendering results
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The data source could not be turned into a document collection
    #[error("Data error: {0}")]
    Data(String),

    /// An argument or configuration value was rejected
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type alias for operations that may fail with SearchError.
pub type Result<T> = std::result::Result<T, SearchError>;

impl SearchError {
    /// Create a new data error.
    pub fn data<S: Into<String>>(msg: S) -> Self {
        SearchError::Data(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        SearchError::InvalidArgument(msg.into())
    }
}

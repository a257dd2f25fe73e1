//! Engine configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SearchError};

/// Data file read when no `--data` flag is given.
pub const DEFAULT_DATA_PATH: &str = "data.txt";

/// Default number of lines at which a parallel index build kicks in.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 10_000;

/// Configuration for building a [`SearchEngine`](crate::search::SearchEngine).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Path of the data file to load.
    pub data_path: PathBuf,

    /// Whether the index may be built with rayon.
    pub parallel: bool,

    /// Minimum number of lines before a parallel build is used.
    pub parallel_threshold: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            parallel: false,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl EngineConfig {
    /// Create a configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the data file path.
    pub fn with_data_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.data_path = path.into();
        self
    }

    /// Allow or forbid parallel index builds.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set the parallel build threshold.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Whether a collection of `doc_count` lines should be indexed in parallel.
    pub fn use_parallel(&self, doc_count: usize) -> bool {
        self.parallel && doc_count >= self.parallel_threshold
    }

    /// Check the configuration for values that cannot work.
    pub fn validate(&self) -> Result<()> {
        if self.parallel_threshold == 0 {
            return Err(SearchError::invalid_argument(
                "parallel threshold must be at least 1",
            ));
        }
        if self.data_path.as_os_str().is_empty() {
            return Err(SearchError::invalid_argument("data path must not be empty"));
        }
        Ok(())
    }
}

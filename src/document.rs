//! The document collection: the ordered, immutable lines being searched.
//!
//! Each line is a document identified by its 0-based position, its line id.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{info, warn};

use crate::error::{Result, SearchError};

/// An ordered sequence of text lines, fixed once loaded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocumentCollection {
    lines: Vec<String>,
}

impl DocumentCollection {
    /// Create a collection from in-memory lines.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        DocumentCollection {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Read newline-delimited records from a reader.
    ///
    /// Both `\n` and `\r\n` terminate a line. A trailing newline does not
    /// produce an extra empty line.
    ///
    /// Invalid UTF-8 is decoded with replacement characters rather than
    /// rejected.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut lines = Vec::new();
        for (line_id, record) in reader.split(b'\n').enumerate() {
            let mut record = record?;
            if record.last() == Some(&b'\r') {
                record.pop();
            }
            let line = match String::from_utf8(record) {
                Ok(line) => line,
                Err(e) => {
                    warn!("Line {} is not valid UTF-8, replacing invalid bytes", line_id + 1);
                    String::from_utf8_lossy(e.as_bytes()).into_owned()
                }
            };
            lines.push(line);
        }
        Ok(DocumentCollection { lines })
    }

    /// Load a collection from a file on disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.is_dir() {
            return Err(SearchError::data(format!(
                "{} is a directory, expected a data file",
                path.display()
            )));
        }

        let file = File::open(path)?;
        let collection = Self::from_reader(BufReader::new(file))?;
        info!(
            "Loaded {} lines from {}",
            collection.len(),
            path.display()
        );

        Ok(collection)
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the collection has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get the text of a line by id.
    pub fn get(&self, line_id: usize) -> Option<&str> {
        self.lines.get(line_id).map(String::as_str)
    }

    /// All lines in order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Iterate over `(line_id, text)` pairs in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.lines
            .iter()
            .enumerate()
            .map(|(line_id, line)| (line_id, line.as_str()))
    }
}

impl<S: Into<String>> FromIterator<S> for DocumentCollection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_lines(iter)
    }
}

//! The interactive menu shell.
//!
//! Reads choices from any `BufRead` and writes to any `Write`, so a whole
//! session can be scripted against in-memory buffers.

use std::fmt;
use std::io::{BufRead, Write};

use log::debug;

use crate::cli::output::{OutputOptions, output_documents, output_results};
use crate::error::Result;
use crate::search::SearchEngine;

/// Entries of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Find,
    List,
    Exit,
}

impl MenuChoice {
    /// Menu entries in display order.
    pub const ENTRIES: [MenuChoice; 3] = [MenuChoice::Find, MenuChoice::List, MenuChoice::Exit];

    /// Parse a typed choice. Non-numeric and unknown numbers are `None`.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<i64>().ok()? {
            1 => Some(MenuChoice::Find),
            2 => Some(MenuChoice::List),
            0 => Some(MenuChoice::Exit),
            _ => None,
        }
    }

    /// The number typed to select this entry.
    pub fn number(self) -> u8 {
        match self {
            MenuChoice::Find => 1,
            MenuChoice::List => 2,
            MenuChoice::Exit => 0,
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MenuChoice::Find => "Find a person",
            MenuChoice::List => "Print all people",
            MenuChoice::Exit => "Exit",
        };
        write!(f, "{}. {}", self.number(), label)
    }
}

/// Interactive session over a search engine.
#[derive(Debug)]
pub struct Menu<'a> {
    engine: &'a SearchEngine,
    options: OutputOptions,
}

impl<'a> Menu<'a> {
    /// Create a menu over the engine.
    pub fn new(engine: &'a SearchEngine, options: OutputOptions) -> Self {
        Menu { engine, options }
    }

    /// Run until the user exits or input ends.
    pub fn run<R: BufRead, W: Write>(&self, input: &mut R, out: &mut W) -> Result<()> {
        loop {
            writeln!(out, "\n=== Menu ===")?;
            for entry in MenuChoice::ENTRIES {
                writeln!(out, "{entry}")?;
            }
            out.flush()?;

            let Some(line) = read_line(input)? else {
                debug!("Input closed, leaving menu");
                return Ok(());
            };

            match MenuChoice::parse(&line) {
                Some(MenuChoice::Find) => self.find(input, out)?,
                Some(MenuChoice::List) => {
                    output_documents(out, self.engine.documents(), &self.options)?
                }
                Some(MenuChoice::Exit) => {
                    writeln!(out, "Bye!")?;
                    return Ok(());
                }
                None => writeln!(out, "Incorrect option! Try again.")?,
            }
        }
    }

    fn find<R: BufRead, W: Write>(&self, input: &mut R, out: &mut W) -> Result<()> {
        writeln!(out, "Select a matching strategy: ALL, ANY, NONE")?;
        out.flush()?;
        let strategy = read_line(input)?.unwrap_or_default().to_uppercase();

        writeln!(out, "Enter a name or email to search all matching people.")?;
        out.flush()?;
        let query = read_line(input)?.unwrap_or_default().to_lowercase();

        let results = self.engine.search_named(&query, &strategy);
        output_results(out, &results, &self.options)
    }
}

/// Read one line without its terminator; `None` at end of input.
///
/// Bytes that are not valid UTF-8 become replacement characters, so a garbled
/// choice is just an unknown option.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DocumentCollection;
    use std::io::Cursor;

    fn session(script: &str) -> String {
        let engine = SearchEngine::new(DocumentCollection::from_lines([
            "John Smith john@example.com",
            "Jane Doe jane@example.com",
            "John Jane shared@example.com",
        ]));
        let menu = Menu::new(&engine, OutputOptions::default());
        let mut input = Cursor::new(script.to_string());
        let mut out = Vec::new();
        menu.run(&mut input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_choice() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Find));
        assert_eq!(MenuChoice::parse(" 2 "), Some(MenuChoice::List));
        assert_eq!(MenuChoice::parse("0"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("3"), None);
        assert_eq!(MenuChoice::parse("find"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }

    #[test]
    fn test_entry_labels() {
        assert_eq!(MenuChoice::Find.to_string(), "1. Find a person");
        assert_eq!(MenuChoice::List.to_string(), "2. Print all people");
        assert_eq!(MenuChoice::Exit.to_string(), "0. Exit");
    }

    #[test]
    fn test_exit() {
        let out = session("0\n");
        assert!(out.starts_with("\n=== Menu ===\n1. Find a person\n2. Print all people\n0. Exit\n"));
        assert!(out.ends_with("Bye!\n"));
    }

    #[test]
    fn test_find_normalizes_strategy_and_query() {
        let out = session("1\nany\nJOHN\n0\n");
        assert!(out.contains("Select a matching strategy: ALL, ANY, NONE\n"));
        assert!(out.contains(
            "2 persons found:\nJohn Smith john@example.com\nJohn Jane shared@example.com\n"
        ));
    }

    #[test]
    fn test_find_unknown_strategy() {
        let out = session("1\nSOME\njohn\n0\n");
        assert!(out.contains("No matching people found.\n"));
    }

    #[test]
    fn test_list_people() {
        let out = session("2\n0\n");
        assert!(out.contains(
            "=== List of people ===\nJohn Smith john@example.com\nJane Doe jane@example.com\n"
        ));
    }

    #[test]
    fn test_invalid_option_loops() {
        let out = session("abc\n7\n0\n");
        assert_eq!(out.matches("Incorrect option! Try again.").count(), 2);
        assert_eq!(out.matches("=== Menu ===").count(), 3);
    }

    #[test]
    fn test_invalid_utf8_choice_is_incorrect_option() {
        let engine = SearchEngine::new(DocumentCollection::from_lines(["John Smith"]));
        let menu = Menu::new(&engine, OutputOptions::default());
        let mut input = Cursor::new(b"\xff\n1\nANY\njo\xffhn\n0\n".to_vec());
        let mut out = Vec::new();
        menu.run(&mut input, &mut out).unwrap();

        let out = String::from_utf8(out).unwrap();
        let incorrect = out.find("Incorrect option! Try again.").unwrap();
        let bye = out.find("Bye!").unwrap();
        assert!(incorrect < bye);
        assert!(out.contains("No matching people found."));
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let out = session("2\n");
        assert!(!out.contains("Bye!"));
        assert_eq!(out.matches("=== Menu ===").count(), 2);
    }

    #[test]
    fn test_end_of_input_mid_search() {
        let out = session("1\nNONE\n");
        // Empty query under NONE lists every line.
        assert!(out.contains("3 persons found:"));
    }
}

//! Output formatting for search results and listings.

use std::io::Write;

use crate::cli::args::OutputFormat;
use crate::document::DocumentCollection;
use crate::error::Result;
use crate::search::{Hit, SearchResults};

/// How results are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputOptions {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl Default for OutputOptions {
    fn default() -> Self {
        OutputOptions {
            format: OutputFormat::Human,
            pretty: false,
        }
    }
}

/// `person` for one hit, `persons` for more.
fn plural(word: &str, count: usize) -> String {
    if count > 1 {
        format!("{word}s")
    } else {
        word.to_string()
    }
}

/// Write the results of one search.
pub fn output_results<W: Write>(
    out: &mut W,
    results: &SearchResults,
    options: &OutputOptions,
) -> Result<()> {
    match options.format {
        OutputFormat::Human => output_results_human(out, results),
        OutputFormat::Json => output_json(out, results, options.pretty),
    }
}

fn output_results_human<W: Write>(out: &mut W, results: &SearchResults) -> Result<()> {
    if results.is_empty() {
        writeln!(out, "No matching people found.")?;
        return Ok(());
    }

    writeln!(
        out,
        "{} {} found:",
        results.total_hits,
        plural("person", results.total_hits)
    )?;
    for hit in &results.hits {
        writeln!(out, "{}", hit.text)?;
    }
    Ok(())
}

/// Write every line of the collection.
pub fn output_documents<W: Write>(
    out: &mut W,
    docs: &DocumentCollection,
    options: &OutputOptions,
) -> Result<()> {
    match options.format {
        OutputFormat::Human => {
            writeln!(out, "\n=== List of people ===")?;
            for (_, line) in docs.iter() {
                writeln!(out, "{line}")?;
            }
            Ok(())
        }
        OutputFormat::Json => {
            let hits: Vec<Hit> = docs
                .iter()
                .map(|(line, text)| Hit {
                    line,
                    text: text.to_string(),
                })
                .collect();
            output_json(out, &hits, options.pretty)
        }
    }
}

fn output_json<W: Write, T: serde::Serialize>(out: &mut W, value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    writeln!(out, "{json}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::MatchStrategy;

    fn render(results: &SearchResults, options: &OutputOptions) -> String {
        let mut out = Vec::new();
        output_results(&mut out, results, options).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn results(texts: &[&str]) -> SearchResults {
        let hits: Vec<Hit> = texts
            .iter()
            .enumerate()
            .map(|(line, text)| Hit {
                line,
                text: text.to_string(),
            })
            .collect();
        SearchResults {
            strategy: Some(MatchStrategy::Any),
            query: "q".to_string(),
            total_hits: hits.len(),
            hits,
        }
    }

    #[test]
    fn test_human_single_hit() {
        let text = render(&results(&["Jane Doe"]), &OutputOptions::default());
        assert_eq!(text, "1 person found:\nJane Doe\n");
    }

    #[test]
    fn test_human_several_hits() {
        let text = render(&results(&["a", "b"]), &OutputOptions::default());
        assert_eq!(text, "2 persons found:\na\nb\n");
    }

    #[test]
    fn test_human_no_hits() {
        let text = render(&results(&[]), &OutputOptions::default());
        assert_eq!(text, "No matching people found.\n");
    }

    #[test]
    fn test_json_results() {
        let options = OutputOptions {
            format: OutputFormat::Json,
            pretty: false,
        };
        let text = render(&results(&["Jane Doe"]), &options);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["strategy"], "ANY");
        assert_eq!(value["total_hits"], 1);
        assert_eq!(value["hits"][0]["text"], "Jane Doe");
        assert_eq!(value["hits"][0]["line"], 0);
    }

    #[test]
    fn test_documents_human() {
        let docs = DocumentCollection::from_lines(["a", "b"]);
        let mut out = Vec::new();
        output_documents(&mut out, &docs, &OutputOptions::default()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\n=== List of people ===\na\nb\n"
        );
    }
}

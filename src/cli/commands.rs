//! Command execution for the simple-search CLI.

use std::io;

use log::info;

use crate::cli::args::SimpleSearchArgs;
use crate::cli::menu::Menu;
use crate::cli::output::OutputOptions;
use crate::error::Result;
use crate::search::SearchEngine;

/// Load the data file, build the index and run the interactive menu on the
/// terminal.
pub fn execute_command(args: SimpleSearchArgs) -> Result<()> {
    let config = args.engine_config();
    let engine = SearchEngine::open(&config)?;

    let stats = engine.index().stats();
    info!(
        "Indexed {} lines: {} terms, {} postings",
        stats.doc_count, stats.term_count, stats.posting_count
    );

    let options = OutputOptions {
        format: args.output_format,
        pretty: args.pretty,
    };
    let menu = Menu::new(&engine, options);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();
    menu.run(&mut input, &mut output)
}

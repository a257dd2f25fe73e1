//! Command line interface: argument parsing, the interactive menu and output
//! rendering.

pub mod args;
pub mod commands;
pub mod menu;
pub mod output;

pub use args::*;
pub use commands::*;
pub use menu::*;
pub use output::*;

//! CLI module for jsonrest
//!
//! Provides command-line interface for:
//! - serve: load the document and expose it over HTTP
//! - check: validate the document and print a summary

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command, ServeArgs};
pub use commands::{check, load_document, open_store, run, run_command, serve, summarize};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_document, write_response};

//! CLI argument definitions using clap
//!
//! Commands:
//! - jsonrest serve --store <path> --port <port>
//! - jsonrest check --store <path>

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::entity::IdStrategy;
use crate::observability::LogFormat;

/// jsonrest - serve a JSON document as REST resources
#[derive(Parser, Debug)]
#[command(name = "jsonrest")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load the document and serve every entity over HTTP
    Serve(ServeArgs),

    /// Parse the document, print a summary and exit
    Check {
        /// JSON file to read
        #[arg(long, default_value = "./db.json")]
        store: PathBuf,
    },
}

/// Flags of the `serve` command. Unset flags fall back to the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct ServeArgs {
    /// JSON file to store/retrieve data from (default: ./db.json)
    #[arg(long)]
    pub store: Option<PathBuf>,

    /// Port to run the server on (default: 8080)
    #[arg(long)]
    pub port: Option<u16>,

    /// Host to bind to (default: 0.0.0.0)
    #[arg(long)]
    pub host: Option<String>,

    /// How ids are generated for records without one
    #[arg(long, value_enum)]
    pub id_strategy: Option<IdStrategy>,

    /// Optional JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

//! File and stdout handling for CLI
//!
//! - Store documents are read whole, UTF-8 JSON
//! - Command output is a single JSON object on stdout

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use serde_json::Value;

use super::errors::{CliError, CliResult};

/// Read the store document from disk
pub fn read_document(path: &Path) -> CliResult<Vec<u8>> {
    fs::read(path)
        .map_err(|e| CliError::io_error(format!("Could not read from file {}: {}", path.display(), e)))
}

/// Write a success response to stdout
pub fn write_response(data: Value) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "ok",
        "data": data
    });

    let mut stdout = io::stdout();
    serde_json::to_writer(&mut stdout, &response)?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}

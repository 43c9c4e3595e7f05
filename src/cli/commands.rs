//! CLI command implementations
//!
//! Startup sequence for `serve`:
//! 1. Configuration (file + flags)
//! 2. Document load and parse; a malformed document stops here
//! 3. Store construction with a file persister on the same path
//! 4. HTTP activation

use std::path::Path;
use std::sync::Arc;

use serde_json::{json, Value};

use crate::entity::{EntityParser, GlobalObject};
use crate::http_server::HttpServer;
use crate::observability::init_logging;
use crate::store::{EntityStore, FilePersister};

use super::args::{Cli, Command, ServeArgs};
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::{read_document, write_response};

/// Main CLI entry point
///
/// Parses arguments, installs logging and dispatches the command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    if let Err(e) = init_logging(cli.log_format) {
        eprintln!("logging already initialized: {}", e);
    }
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve(args) => serve(&args),
        Command::Check { store } => check(&store),
    }
}

/// Read and parse the document at `path`
pub fn load_document(path: &Path, parser: &EntityParser) -> CliResult<GlobalObject> {
    let bytes = read_document(path)?;
    let document = parser
        .parse_entities(&bytes)
        .map_err(|e| CliError::document_error(path, e))?;

    tracing::info!(
        event = "DOCUMENT_LOADED",
        store = %path.display(),
        entities = document.entities().len()
    );
    Ok(document)
}

/// Build the shared store for a resolved configuration
pub fn open_store(config: &Config) -> CliResult<EntityStore> {
    let parser = EntityParser::new(config.id_strategy);
    let document = load_document(&config.store, &parser)?;
    let persister = Arc::new(FilePersister::new(&config.store));

    tracing::info!(
        event = "STORE_OPENED",
        path = %persister.path().display(),
        id_strategy = %parser.id_strategy(),
        entities = document.entities().len(),
    );

    Ok(EntityStore::new(document, parser, persister))
}

/// Serve the document until the process exits
pub fn serve(args: &ServeArgs) -> CliResult<()> {
    let config = Config::resolve(args)?;
    let store = open_store(&config)?;

    let server = HttpServer::with_config(store, config.http.clone());

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

/// Parse the document and print its entities with record counts
pub fn check(path: &Path) -> CliResult<()> {
    let document = load_document(path, &EntityParser::default())?;
    write_response(summarize(&document))
}

/// Entity names and record counts in document order
pub fn summarize(document: &GlobalObject) -> Value {
    let entities: Vec<Value> = document
        .entities()
        .iter()
        .map(|e| json!({"name": e.name(), "records": e.len()}))
        .collect();
    json!({ "entities": entities })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::id::ALPHANUMERIC_ID_LEN;
    use crate::entity::IdStrategy;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_summarize() {
        let doc = GlobalObject::parse(br#"{"books": [{"id": "b"}], "authors": []}"#).unwrap();
        assert_eq!(
            summarize(&doc),
            json!({"entities": [
                {"name": "books", "records": 1},
                {"name": "authors", "records": 0}
            ]})
        );
    }

    #[test]
    fn test_open_store_rejects_malformed_document() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("db.json");
        fs::write(&path, r#"{"books": {}}"#).unwrap();

        let config = Config {
            store: path,
            ..Default::default()
        };
        let err = open_store(&config).unwrap_err();
        assert_eq!(err.code_str(), "JSONREST_CLI_DOCUMENT_ERROR");
    }

    #[test]
    fn test_open_store_missing_file() {
        let tmp = TempDir::new().unwrap();
        let config = Config {
            store: tmp.path().join("db.json"),
            ..Default::default()
        };
        let err = open_store(&config).unwrap_err();
        assert_eq!(err.code_str(), "JSONREST_CLI_IO_ERROR");
    }

    #[test]
    fn test_open_store_writes_back_to_same_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("db.json");
        fs::write(&path, r#"{"books": []}"#).unwrap();

        let config = Config {
            store: path.clone(),
            ..Default::default()
        };
        let store = open_store(&config).unwrap();
        store.create("books", json!({"title": "t"})).unwrap();

        let written: Value = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(written["books"][0]["title"], "t");
    }

    #[test]
    fn test_open_store_uses_configured_id_strategy() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("db.json");
        fs::write(&path, r#"{"books": []}"#).unwrap();

        let config = Config {
            store: path,
            id_strategy: IdStrategy::Alphanumeric,
            ..Default::default()
        };
        let created = open_store(&config)
            .unwrap()
            .create("books", json!({"title": "t"}))
            .unwrap();
        let id = created["id"].as_str().unwrap();
        assert_eq!(id.len(), ALPHANUMERIC_ID_LEN);
        assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}

//! File logging example
//!
//! Demonstrates logging to a locked file and configuring a logger from JSON.
//!
//! Run with: cargo run --example file_logging

use rust_cli_logger::prelude::*;
use rust_cli_logger::FileSink;
use std::fs;

fn main() -> Result<()> {
    println!("=== Rust CLI Logger - File Logging Example ===\n");

    let path = std::env::temp_dir().join("rust_cli_logger_demo.log");
    let _ = fs::remove_file(&path);

    println!("1. Text entries to {}:", path.display());
    let logger = Logger::builder()
        .sink(FileSink::new(&path)?)
        .field("run", 1)
        .build();
    logger.info("Starting run");
    print_table(&logger, &["Step", "Result"], &[["fetch", "ok"], ["build", "ok"]])?;
    logger.done("Run complete");
    logger.close()?;

    println!("{}", fs::read_to_string(&path)?);

    println!("2. JSON entries from a declarative config:");
    let config = LoggerConfig::from_json(&format!(
        r#"{{"level": "debug", "format": "json", "destination": {{"file": {{"path": {}}}}}}}"#,
        serde_json::to_string(&path)?
    ))?;
    let logger = config.build()?;
    logger.debug("Configured from JSON");
    logger.close()?;

    println!("{}", fs::read_to_string(&path)?);
    fs::remove_file(&path)?;

    println!("=== Example completed successfully ===");
    Ok(())
}

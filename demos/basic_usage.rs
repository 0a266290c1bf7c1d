//! Basic logger usage example
//!
//! Demonstrates leveled logging, thresholds, derived loggers and JSON output.
//!
//! Run with: cargo run --example basic_usage

use rust_cli_logger::prelude::*;
use rust_cli_logger::{done, fields, info};

fn main() -> Result<()> {
    println!("=== Rust CLI Logger - Basic Usage Example ===\n");

    let logger = Logger::builder().colors(true).build();
    logger.set_level(LogLevel::Debug);

    println!("1. Logging at different levels:");
    logger.debug("This is a debug message");
    logger.info("This is an info message");
    logger.done("This is a success notice");
    logger.warn("This is a warning message");
    logger.error("This is an error message");

    println!("\n2. Raising the threshold to WARN:");
    logger.set_level(LogLevel::Warn);
    logger.info("Info message (hidden)");
    logger.warn("Warning message (visible)");
    logger.set_level(LogLevel::Info);

    println!("\n3. Derived loggers carry fields:");
    let walrus = logger.with_fields(fields! { "animal" => "walrus", "size" => 10 });
    walrus.info("A group of walrus emerges from the ocean");
    let calf = walrus.with_fields(fields! { "size" => 2 });
    info!(calf, "A calf follows at {} metres", 3);

    println!("\n4. Switching every handle to JSON:");
    logger.set_format(OutputFormat::Json);
    walrus.info("The group dives");
    done!(walrus, "Survey finished");

    logger.flush()?;
    println!("\n=== Example completed successfully ===");
    Ok(())
}

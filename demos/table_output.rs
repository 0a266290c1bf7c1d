//! Table output example
//!
//! Demonstrates printing tables through the logger, with default and custom
//! alignment and with JSON output.
//!
//! Run with: cargo run --example table_output

use rust_cli_logger::prelude::*;

fn main() -> Result<()> {
    println!("=== Rust CLI Logger - Table Output Example ===\n");

    let logger = Logger::builder().colors(true).build();
    let header = ["Service", "Replicas", "Status"];
    let rows = [
        ["api", "3", "running"],
        ["worker", "12", "running"],
        ["scheduler", "1", "degraded"],
    ];

    logger.info("Default table:");
    print_table(&logger, &header, &rows)?;
    logger.done("Table printed");

    logger.info("Right-aligned replica counts:");
    print_table_with_options(
        &logger,
        &header,
        &rows,
        Some(|table: &mut AsciiTable| {
            table.set_column_alignment(1, Alignment::Right);
            table.set_column_alignment(2, Alignment::Center);
        }),
    )?;

    logger.info("Borderless table in JSON mode:");
    logger.set_format(OutputFormat::Json);
    print_table_with_options(
        &logger,
        &header,
        &rows,
        Some(|table: &mut AsciiTable| table.set_borders(false)),
    )?;

    println!("\n=== Example completed successfully ===");
    Ok(())
}

//! Tabular output through the logger

pub mod printer;
pub mod renderer;

pub use printer::{print_table, print_table_with_options, print_table_with_renderer, TABLE_INDENT};
pub use renderer::{Alignment, AsciiTable, TableRenderer};

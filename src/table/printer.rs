//! Print tables through a logger
//!
//! The renderer writes into a [`LineStreamer`](crate::streaming::LineStreamer)
//! pipe and every line reaches the logger at `Info` before the call returns.
//! Output is framed by blank lines and each line is indented by
//! [`TABLE_INDENT`].

use super::renderer::{Alignment, AsciiTable, TableRenderer};
use crate::core::{FieldLogger, LogLevel, Result};
use crate::streaming::stream_lines;
use std::io::Write;

/// Prefix applied to every line of table output
pub const TABLE_INDENT: &str = "  ";

/// Print `header` and `rows` with the default left-aligned [`AsciiTable`]
pub fn print_table<L, H, R, C>(logger: &L, header: &[H], rows: &[R]) -> Result<()>
where
    L: FieldLogger + Clone + 'static,
    H: AsRef<str>,
    R: AsRef<[C]>,
    C: AsRef<str>,
{
    print_table_with_options(logger, header, rows, None::<fn(&mut AsciiTable)>)
}

/// Like [`print_table`], letting `configure` adjust the renderer first.
///
/// Every column starts left-aligned; `configure` runs after that default is
/// applied and may override it.
pub fn print_table_with_options<L, H, R, C, F>(
    logger: &L,
    header: &[H],
    rows: &[R],
    configure: Option<F>,
) -> Result<()>
where
    L: FieldLogger + Clone + 'static,
    H: AsRef<str>,
    R: AsRef<[C]>,
    C: AsRef<str>,
    F: FnOnce(&mut AsciiTable),
{
    let mut table = AsciiTable::new();
    table.set_alignment(vec![Alignment::Left; header.len()]);
    if let Some(configure) = configure {
        configure(&mut table);
    }
    print_table_with_renderer(logger, &mut table, header, rows)
}

/// Print through a caller-supplied renderer
pub fn print_table_with_renderer<L, T, H, R, C>(
    logger: &L,
    renderer: &mut T,
    header: &[H],
    rows: &[R],
) -> Result<()>
where
    L: FieldLogger + Clone + 'static,
    T: TableRenderer + ?Sized,
    H: AsRef<str>,
    R: AsRef<[C]>,
    C: AsRef<str>,
{
    let header: Vec<String> = header.iter().map(|h| h.as_ref().to_string()).collect();
    let rows: Vec<Vec<String>> = rows
        .iter()
        .map(|row| row.as_ref().iter().map(|c| c.as_ref().to_string()).collect())
        .collect();

    renderer.set_header(&header);
    renderer.bulk(&rows);

    stream_lines(logger.clone(), LogLevel::Info, TABLE_INDENT, |out| {
        out.write_all(b"\n")?;
        renderer.render(out)?;
        out.write_all(b"\n")?;
        Ok(())
    })
}

//! Fixed-width extension table shared by the console and file sinks

use std::io;

use termcolor::{Color, ColorSpec, WriteColor};

use crate::scan::ScanResult;

/// Column widths for the extension table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableLayout {
    pub extension: usize,
    pub count: usize,
    pub size: usize,
    pub rule: usize,
}

pub const CONSOLE_LAYOUT: TableLayout = TableLayout {
    extension: 10,
    count: 10,
    size: 15,
    rule: 35,
};

pub const FILE_LAYOUT: TableLayout = TableLayout {
    extension: 20,
    count: 15,
    size: 20,
    rule: 55,
};

/// Write totals and the per-extension table, ordered by label.
///
/// Labels longer than their column are written in full. When `use_color`
/// is false no color sequences are emitted, whatever the writer supports.
pub fn write_table<W: WriteColor + ?Sized>(
    out: &mut W,
    result: &ScanResult,
    layout: TableLayout,
    use_color: bool,
) -> io::Result<()> {
    let mut bold = ColorSpec::new();
    bold.set_bold(true);
    let mut label_color = ColorSpec::new();
    label_color.set_fg(Some(Color::Cyan));

    writeln!(out, "Number of directories: {}", result.directory_count())?;
    writeln!(out, "Number of files: {}", result.file_count())?;
    writeln!(out)?;
    writeln!(out, "File type proportions (by count and size):")?;

    if use_color {
        out.set_color(&bold)?;
    }
    write!(
        out,
        "{:<ew$} {:<cw$} {:<sw$}",
        "Extension",
        "Count",
        "Total Size (bytes)",
        ew = layout.extension,
        cw = layout.count,
        sw = layout.size,
    )?;
    if use_color {
        out.reset()?;
    }
    writeln!(out)?;
    writeln!(out, "{}", "-".repeat(layout.rule))?;

    for (label, tally) in result.extensions() {
        if use_color {
            out.set_color(&label_color)?;
        }
        write!(out, "{:<width$}", label, width = layout.extension)?;
        if use_color {
            out.reset()?;
        }
        writeln!(
            out,
            " {:<cw$} {:<sw$}",
            tally.count,
            tally.bytes,
            cw = layout.count,
            sw = layout.size,
        )?;
    }

    Ok(())
}

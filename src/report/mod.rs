//! Report sinks for scan results
//!
//! Every output path (console table, text report file, SVG charts, JSON)
//! is a [`ReportSink`] that reads a [`ScanResult`] without mutating it.
//!
//! # Module Structure
//!
//! - `config` - Output configuration types
//! - `table` - Fixed-width table layout shared by the console and file sinks
//! - `console` - Console table sink with optional color
//! - `file` - Plain-text report file sink
//! - `chart` - SVG pie and bar chart sink
//! - `json` - JSON sink

mod chart;
mod config;
mod console;
mod file;
mod json;
mod table;

pub use chart::{
    BAR_FILE_NAME, BarChart, ChartSink, OTHER_LABEL, PIE_FILE_NAME, PieChart, Slice, top_by_count,
    top_by_size,
};
pub use config::{ChartConfig, OutputConfig};
pub use console::ConsoleSink;
pub use file::{FileReportSink, REPORT_FILE_NAME, write_missing_root};
pub use json::JsonSink;
pub use table::{CONSOLE_LAYOUT, FILE_LAYOUT, TableLayout, write_table};

use crate::error::Result;
use crate::scan::ScanResult;

/// A consumer of scan results.
pub trait ReportSink {
    /// Short name used in log messages.
    fn name(&self) -> &'static str;

    /// Render the result. Implementations must not alter `result`.
    fn render(&mut self, result: &ScanResult) -> Result<()>;
}

/// Format a number with thousand separators.
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);

    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result
}

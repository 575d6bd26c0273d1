//! Console table sink

use termcolor::{ColorChoice, StandardStream, WriteColor};

use super::config::OutputConfig;
use super::table::{CONSOLE_LAYOUT, write_table};
use super::ReportSink;
use crate::error::Result;
use crate::scan::ScanResult;

/// Prints totals and the extension table to a color-capable stream.
pub struct ConsoleSink<W: WriteColor> {
    out: W,
    config: OutputConfig,
}

impl ConsoleSink<StandardStream> {
    /// Console sink writing to stdout.
    pub fn stdout(config: OutputConfig) -> Self {
        let color_choice = if config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self::new(StandardStream::stdout(color_choice), config)
    }
}

impl<W: WriteColor> ConsoleSink<W> {
    pub fn new(out: W, config: OutputConfig) -> Self {
        Self { out, config }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: WriteColor> ReportSink for ConsoleSink<W> {
    fn name(&self) -> &'static str {
        "console"
    }

    fn render(&mut self, result: &ScanResult) -> Result<()> {
        write_table(&mut self.out, result, CONSOLE_LAYOUT, self.config.use_color)?;
        self.out.flush()?;
        Ok(())
    }
}

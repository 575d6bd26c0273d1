//! JSON output

use std::io::{self, Stdout, Write};
use std::path::Path;

use serde::Serialize;

use super::ReportSink;
use crate::error::{Result, ScanError};
use crate::scan::ScanResult;

/// JSON body written in place of a result when the scan could not start.
#[derive(Debug, Serialize)]
struct ScanFailure<'a> {
    error: String,
    path: &'a Path,
}

/// Writes the scan result as pretty-printed JSON.
pub struct JsonSink<W: Write> {
    out: W,
}

impl JsonSink<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> JsonSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write a scan error as a JSON object, keeping the output parseable.
    pub fn render_error(&mut self, err: &ScanError) -> Result<()> {
        let failure = ScanFailure {
            error: err.to_string(),
            path: err.path(),
        };
        serde_json::to_writer_pretty(&mut self.out, &failure)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> ReportSink for JsonSink<W> {
    fn name(&self) -> &'static str {
        "json"
    }

    fn render(&mut self, result: &ScanResult) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.out, result)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

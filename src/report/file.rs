//! Plain-text report file sink

use std::fs;
use std::path::{Path, PathBuf};

use termcolor::NoColor;
use tracing::info;

use super::ReportSink;
use super::table::{FILE_LAYOUT, write_table};
use crate::error::{ReportError, Result, ScanError};
use crate::scan::ScanResult;

/// Default report file name, created in the working directory.
pub const REPORT_FILE_NAME: &str = "analysis_report.txt";

/// Overwrites a text file with the extension table on every render.
#[derive(Debug, Clone)]
pub struct FileReportSink {
    path: PathBuf,
}

impl FileReportSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileReportSink {
    fn default() -> Self {
        Self::new(REPORT_FILE_NAME)
    }
}

impl ReportSink for FileReportSink {
    fn name(&self) -> &'static str {
        "report file"
    }

    fn render(&mut self, result: &ScanResult) -> Result<()> {
        let mut buf = NoColor::new(Vec::new());
        write_table(&mut buf, result, FILE_LAYOUT, false)?;
        write_report(&self.path, &buf.into_inner())?;
        info!("wrote report to {}", self.path.display());
        Ok(())
    }
}

/// Replace the report file with a single line explaining why no scan ran.
pub fn write_missing_root(path: &Path, err: &ScanError) -> Result<()> {
    write_report(path, format!("{}\n", err).as_bytes())
}

fn write_report(path: &Path, content: &[u8]) -> Result<()> {
    fs::write(path, content).map_err(|source| ReportError::WriteFile {
        path: path.to_path_buf(),
        source,
    })
}

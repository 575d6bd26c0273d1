//! extscan - scan a directory tree and report file counts and sizes per extension

pub mod error;
pub mod extension;
pub mod logging;
pub mod report;
pub mod scan;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{ReportError, ScanError};
pub use extension::{NO_EXTENSION, extension_label};
pub use report::{
    ChartConfig, ChartSink, ConsoleSink, FileReportSink, JsonSink, OutputConfig, REPORT_FILE_NAME,
    ReportSink, write_missing_root,
};
pub use scan::{ExtensionTally, ScanResult, scan};

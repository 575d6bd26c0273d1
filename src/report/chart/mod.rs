//! SVG chart sink
//!
//! Writes two standalone SVG files: a pie chart of file counts and a bar
//! chart of total bytes per extension. Files are written rather than shown,
//! so the sink works the same on headless machines.

mod bar;
mod data;
mod pie;
mod svg;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

pub use bar::BarChart;
pub use data::{OTHER_LABEL, Slice, top_by_count, top_by_size};
pub use pie::PieChart;

use super::ReportSink;
use super::config::ChartConfig;
use crate::error::{ReportError, Result};
use crate::scan::ScanResult;

pub const PIE_FILE_NAME: &str = "extension_counts.svg";
pub const BAR_FILE_NAME: &str = "extension_sizes.svg";

/// Renders the pie and bar charts into a directory.
#[derive(Debug, Clone)]
pub struct ChartSink {
    dir: PathBuf,
    config: ChartConfig,
}

impl ChartSink {
    pub fn new(dir: impl Into<PathBuf>, config: ChartConfig) -> Self {
        Self {
            dir: dir.into(),
            config,
        }
    }

    pub fn pie_path(&self) -> PathBuf {
        self.dir.join(PIE_FILE_NAME)
    }

    pub fn bar_path(&self) -> PathBuf {
        self.dir.join(BAR_FILE_NAME)
    }

    pub fn pie_chart(&self, result: &ScanResult) -> PieChart {
        PieChart::new(
            format!("Files by extension (top {})", self.config.top_n),
            top_by_count(result, self.config.top_n),
        )
        .with_size(self.config.width, self.config.height)
    }

    pub fn bar_chart(&self, result: &ScanResult) -> BarChart {
        BarChart::new(
            format!("Total size by extension (top {})", self.config.top_n),
            top_by_size(result, self.config.top_n),
        )
        .with_size(self.config.width, self.config.height)
    }
}

impl ReportSink for ChartSink {
    fn name(&self) -> &'static str {
        "charts"
    }

    fn render(&mut self, result: &ScanResult) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|source| ReportError::CreateDir {
            path: self.dir.clone(),
            source,
        })?;

        write_svg(&self.pie_path(), &self.pie_chart(result).render())?;
        write_svg(&self.bar_path(), &self.bar_chart(result).render())?;

        info!("wrote charts to {}", self.dir.display());
        Ok(())
    }
}

fn write_svg(path: &Path, svg: &str) -> Result<()> {
    fs::write(path, svg).map_err(|source| ReportError::WriteFile {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTree;

    fn wide_result() -> ScanResult {
        let mut result = ScanResult::new();
        for i in 0..14u64 {
            for _ in 0..=i {
                result.record_file(format!(".k{:02}", i), 1000 * (i + 1));
            }
        }
        result
    }

    #[test]
    fn test_chart_sink_writes_both_files() {
        let tree = TestTree::new();
        let out_dir = tree.path().join("charts/nested");
        let mut sink = ChartSink::new(&out_dir, ChartConfig::default());

        sink.render(&wide_result()).unwrap();

        let pie = fs::read_to_string(sink.pie_path()).unwrap();
        let bar = fs::read_to_string(sink.bar_path()).unwrap();
        assert!(pie.contains("other ("));
        assert!(bar.contains("<svg "));
        assert!(!bar.contains(">other</text>"));
    }

    #[test]
    fn test_chart_slices_limited_to_top_n() {
        let sink = ChartSink::new("unused", ChartConfig::default());
        let result = wide_result();

        let pie = sink.pie_chart(&result);
        let bar = sink.bar_chart(&result);

        assert_eq!(pie.slices.len(), 11);
        assert_eq!(pie.slices.last().map(|s| s.label.as_str()), Some(OTHER_LABEL));
        assert_eq!(pie.total(), result.file_count());
        assert_eq!(bar.bars.len(), 10);
        assert_eq!(bar.bars[0].label, ".k13");
    }

    #[test]
    fn test_chart_sink_does_not_mutate_result() {
        let tree = TestTree::new();
        let result = wide_result();
        let before = result.clone();

        ChartSink::new(tree.path(), ChartConfig::default())
            .render(&result)
            .unwrap();

        assert_eq!(result, before);
    }

    #[test]
    fn test_chart_dir_blocked_by_file() {
        let tree = TestTree::new();
        let blocker = tree.add_file("charts", "not a dir");

        let err = ChartSink::new(&blocker, ChartConfig::default())
            .render(&wide_result())
            .unwrap_err();
        assert!(matches!(err, ReportError::CreateDir { .. }));
    }
}

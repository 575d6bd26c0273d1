//! Bar chart of total bytes per extension

use std::fmt::Write;

use super::data::Slice;
use super::svg::{close_document, color_at, html_escape, open_document, write_empty_state};
use crate::report::format_number;

/// Vertical bar chart with each bar annotated by its exact value.
#[derive(Debug)]
pub struct BarChart {
    pub title: String,
    pub bars: Vec<Slice>,
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Default for BarChart {
    fn default() -> Self {
        Self {
            title: String::new(),
            bars: Vec::new(),
            width: 640.0,
            height: 400.0,
            padding: 50.0,
        }
    }
}

impl BarChart {
    pub fn new(title: impl Into<String>, bars: Vec<Slice>) -> Self {
        Self {
            title: title.into(),
            bars,
            ..Default::default()
        }
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn render(&self) -> String {
        let mut output = String::new();
        open_document(&mut output, self.width, self.height, &self.title);

        if self.bars.is_empty() {
            write_empty_state(&mut output, self.width, self.height);
            close_document(&mut output);
            return output;
        }

        let chart_width = self.padding.mul_add(-2.0, self.width);
        let chart_height = self.padding.mul_add(-2.0, self.height);

        let max_value = self
            .bars
            .iter()
            .map(|b| b.value as f64)
            .fold(0.0_f64, f64::max)
            .max(1.0);

        let bar_count = self.bars.len();
        let gap_ratio = 0.2;
        let total_gap = chart_width * gap_ratio;
        let bar_width = (chart_width - total_gap) / bar_count as f64;
        let gap = total_gap / (bar_count + 1) as f64;
        let base_offset = self.padding + gap;
        let baseline = self.padding + chart_height;

        let _ = writeln!(
            output,
            r##"    <line x1="{:.2}" y1="{baseline:.2}" x2="{:.2}" y2="{baseline:.2}" stroke="#333333" stroke-width="1"/>"##,
            self.padding,
            self.width - self.padding
        );

        for (i, bar) in self.bars.iter().enumerate() {
            let x = (bar_width + gap).mul_add(i as f64, base_offset);
            let bar_height = (bar.value as f64 / max_value) * chart_height;
            let y = baseline - bar_height;
            let center = x + bar_width / 2.0;
            let label = html_escape(&bar.label);
            let value = format_number(bar.value);

            let _ = writeln!(
                output,
                r#"    <rect x="{x:.2}" y="{y:.2}" width="{bar_width:.2}" height="{bar_height:.2}" fill="{}"><title>{label}: {value} bytes</title></rect>"#,
                color_at(i)
            );
            let _ = writeln!(
                output,
                r#"    <text x="{center:.2}" y="{:.2}" text-anchor="middle" font-size="10">{value}</text>"#,
                y - 4.0
            );
            let _ = writeln!(
                output,
                r#"    <text x="{center:.2}" y="{:.2}" text-anchor="middle" font-size="11">{label}</text>"#,
                baseline + 16.0
            );
        }

        close_document(&mut output);
        output
    }
}

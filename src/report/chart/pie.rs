//! Pie chart of file counts per extension

use std::f64::consts::{FRAC_PI_2, TAU};
use std::fmt::Write;

use super::data::Slice;
use super::svg::{close_document, color_at, html_escape, open_document, write_empty_state};

/// Slices narrower than this share get their percentage in the legend only.
const MIN_INLINE_LABEL_PERCENT: f64 = 4.0;

/// Pie chart where each slice is labelled with its share of the total.
#[derive(Debug)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<Slice>,
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Default for PieChart {
    fn default() -> Self {
        Self {
            title: String::new(),
            slices: Vec::new(),
            width: 640.0,
            height: 400.0,
            padding: 40.0,
        }
    }
}

impl PieChart {
    pub fn new(title: impl Into<String>, slices: Vec<Slice>) -> Self {
        Self {
            title: title.into(),
            slices,
            ..Default::default()
        }
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn total(&self) -> u64 {
        self.slices.iter().map(|s| s.value).sum()
    }

    pub fn render(&self) -> String {
        let mut output = String::new();
        open_document(&mut output, self.width, self.height, &self.title);

        let total = self.total();
        if total == 0 {
            write_empty_state(&mut output, self.width, self.height);
            close_document(&mut output);
            return output;
        }

        let radius = ((self.height - 2.0 * self.padding) / 2.0).max(1.0);
        let cx = self.padding + radius;
        let cy = self.padding + radius;

        // Start at twelve o'clock and run clockwise
        let mut start = -FRAC_PI_2;
        for (i, slice) in self.slices.iter().enumerate() {
            if slice.value == 0 {
                continue;
            }
            let fraction = slice.value as f64 / total as f64;
            let end = start + fraction * TAU;
            let color = color_at(i);
            let percent = slice.percent_of(total);

            if slice.value == total {
                let _ = writeln!(
                    output,
                    r#"    <circle cx="{cx:.2}" cy="{cy:.2}" r="{radius:.2}" fill="{color}"/>"#
                );
            } else {
                let (x1, y1) = point_on_circle(cx, cy, radius, start);
                let (x2, y2) = point_on_circle(cx, cy, radius, end);
                let large_arc = u8::from(fraction > 0.5);
                let _ = writeln!(
                    output,
                    r#"    <path d="M {cx:.2} {cy:.2} L {x1:.2} {y1:.2} A {radius:.2} {radius:.2} 0 {large_arc} 1 {x2:.2} {y2:.2} Z" fill="{color}" stroke="white" stroke-width="1"/>"#
                );
            }

            if percent >= MIN_INLINE_LABEL_PERCENT {
                let (lx, ly) = point_on_circle(cx, cy, radius * 0.65, (start + end) / 2.0);
                let _ = writeln!(
                    output,
                    r#"    <text x="{lx:.2}" y="{ly:.2}" text-anchor="middle" dominant-baseline="middle" fill="white" font-size="11">{percent:.1}%</text>"#
                );
            }

            start = end;
        }

        self.write_legend(&mut output, cx + radius + self.padding, total);
        close_document(&mut output);
        output
    }

    fn write_legend(&self, output: &mut String, x: f64, total: u64) {
        let line_height = 20.0;
        let top = self.padding + 10.0;

        for (i, slice) in self.slices.iter().enumerate() {
            let y = (i as f64).mul_add(line_height, top);
            let label = html_escape(&slice.label);
            let _ = writeln!(
                output,
                r#"    <rect x="{x:.2}" y="{:.2}" width="12" height="12" fill="{}"/>"#,
                y - 10.0,
                color_at(i)
            );
            let _ = writeln!(
                output,
                r#"    <text x="{:.2}" y="{y:.2}" font-size="12">{label} ({:.1}%)</text>"#,
                x + 18.0,
                slice.percent_of(total)
            );
        }
    }
}

fn point_on_circle(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    (r.mul_add(angle.cos(), cx), r.mul_add(angle.sin(), cy))
}

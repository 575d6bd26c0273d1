//! SVG document helpers shared by the chart types

use std::fmt::Write;

/// Fill colors assigned to slices and bars in order.
pub const PALETTE: [&str; 11] = [
    "#4e79a7", "#f28e2b", "#e15759", "#76b7b2", "#59a14f", "#edc948", "#b07aa1", "#ff9da7",
    "#9c755f", "#bab0ac", "#86bcb6",
];

pub fn color_at(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Open an SVG document with a white background and an accessible title.
pub fn open_document(output: &mut String, width: f64, height: f64, title: &str) {
    let _ = writeln!(
        output,
        r#"<svg viewBox="0 0 {width} {height}" width="{width}" height="{height}" xmlns="http://www.w3.org/2000/svg" role="img" font-family="sans-serif">"#
    );
    let escaped_title = html_escape(title);
    let _ = writeln!(output, "    <title>{escaped_title}</title>");
    let _ = writeln!(
        output,
        r##"    <rect x="0" y="0" width="{width}" height="{height}" fill="#ffffff"/>"##
    );
    let _ = writeln!(
        output,
        r#"    <text x="{}" y="24" text-anchor="middle" font-size="16" font-weight="bold">{escaped_title}</text>"#,
        width / 2.0
    );
}

/// Placeholder shown when there is nothing to plot.
pub fn write_empty_state(output: &mut String, width: f64, height: f64) {
    let _ = writeln!(
        output,
        r##"    <text x="{}" y="{}" text-anchor="middle" fill="#666666" font-size="14">No data available</text>"##,
        width / 2.0,
        height / 2.0
    );
}

pub fn close_document(output: &mut String) {
    output.push_str("</svg>\n");
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

//! Ranking of extension labels for charts

use crate::scan::ScanResult;

/// Label of the slice that merges everything beyond the top entries.
pub const OTHER_LABEL: &str = "other";

/// A labelled value in a chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slice {
    pub label: String,
    pub value: u64,
}

impl Slice {
    pub fn new(label: impl Into<String>, value: u64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }

    /// Share of `total` as a percentage (0 when `total` is 0).
    pub fn percent_of(&self, total: u64) -> f64 {
        if total == 0 {
            0.0
        } else {
            self.value as f64 * 100.0 / total as f64
        }
    }
}

/// The `n` labels with the most files, followed by one `"other"` slice
/// holding the rest when there are more than `n` labels.
pub fn top_by_count(result: &ScanResult, n: usize) -> Vec<Slice> {
    let ranked = ranked(result, |count, _| count);
    let mut slices: Vec<Slice> = ranked.iter().take(n).cloned().collect();

    if ranked.len() > n {
        let rest: u64 = ranked[n..].iter().map(|s| s.value).sum();
        slices.push(Slice::new(OTHER_LABEL, rest));
    }

    slices
}

/// The `n` labels with the largest total size.
pub fn top_by_size(result: &ScanResult, n: usize) -> Vec<Slice> {
    let mut ranked = ranked(result, |_, bytes| bytes);
    ranked.truncate(n);
    ranked
}

/// All labels ordered by `key` descending, ties broken by label ascending.
fn ranked(result: &ScanResult, key: impl Fn(u64, u64) -> u64) -> Vec<Slice> {
    let mut slices: Vec<Slice> = result
        .extensions()
        .map(|(label, tally)| Slice::new(label, key(tally.count, tally.bytes)))
        .collect();
    // Iteration is already label-ascending, so a stable sort keeps ties in order
    slices.sort_by(|a, b| b.value.cmp(&a.value));
    slices
}

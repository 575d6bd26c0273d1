//! Output configuration types

const DEFAULT_TOP_N: usize = 10;

/// Configuration for console output.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { use_color: true }
    }
}

/// Configuration for chart rendering.
#[derive(Debug, Clone)]
pub struct ChartConfig {
    /// Number of labels shown individually before the rest are merged
    pub top_n: usize,
    pub width: f64,
    pub height: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            width: 640.0,
            height: 400.0,
        }
    }
}

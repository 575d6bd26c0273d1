//! CLI entry point for extscan

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, ValueEnum};
use extscan::{
    ChartConfig, ChartSink, ConsoleSink, FileReportSink, JsonSink, OutputConfig, REPORT_FILE_NAME,
    ReportSink, ScanResult, logging, scan, write_missing_root,
};
use tracing::{info, warn};

const USAGE: &str = "Usage: extscan <path>";

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "extscan")]
#[command(about = "Scan a directory tree and report file counts and sizes per extension")]
#[command(version)]
struct Args {
    /// Directory to scan (exactly one)
    #[arg(value_name = "PATH")]
    paths: Vec<PathBuf>,

    /// Write the table to analysis_report.txt in the current directory
    #[arg(long = "report")]
    report: bool,

    /// Write the table to FILE instead of the default report file
    #[arg(long = "report-path", value_name = "FILE")]
    report_path: Option<PathBuf>,

    /// Write a pie chart (file counts) and a bar chart (sizes) as SVG into DIR
    #[arg(long = "charts", value_name = "DIR")]
    charts: Option<PathBuf>,

    /// Print the result as JSON instead of a table
    #[arg(long = "json")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Increase log verbosity (-v debug, -vv trace); EXTSCAN_LOG overrides
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    /// Report file location, if a report was requested.
    fn report_file(&self) -> Option<PathBuf> {
        match (&self.report_path, self.report) {
            (Some(path), _) => Some(path.clone()),
            (None, true) => Some(PathBuf::from(REPORT_FILE_NAME)),
            (None, false) => None,
        }
    }

    fn sinks(&self) -> Vec<Box<dyn ReportSink>> {
        let mut sinks: Vec<Box<dyn ReportSink>> = Vec::new();

        if self.json {
            sinks.push(Box::new(JsonSink::stdout()));
        } else {
            sinks.push(Box::new(ConsoleSink::stdout(OutputConfig {
                use_color: should_use_color(self.color),
            })));
        }

        if let Some(path) = self.report_file() {
            sinks.push(Box::new(FileReportSink::new(path)));
        }

        if let Some(dir) = &self.charts {
            sinks.push(Box::new(ChartSink::new(dir, ChartConfig::default())));
        }

        sinks
    }
}

fn main() {
    let args = Args::parse();

    if let Err(e) = logging::init(args.verbose) {
        eprintln!("extscan: warning: {}", e);
    }

    let root = match args.paths.as_slice() {
        [root] => root,
        _ => {
            println!("{}", USAGE);
            return;
        }
    };

    let result = match scan(root) {
        Ok(result) => result,
        Err(e) => {
            if args.json {
                if let Err(json_err) = JsonSink::stdout().render_error(&e) {
                    eprintln!("extscan: {}", json_err);
                    process::exit(1);
                }
            } else {
                println!("{}", e);
            }
            if let Some(path) = args.report_file() {
                if let Err(write_err) = write_missing_root(&path, &e) {
                    eprintln!("extscan: {}", write_err);
                    process::exit(1);
                }
            }
            return;
        }
    };

    if !render_all(&mut args.sinks(), &result) {
        process::exit(1);
    }
}

/// Run every sink, continuing past failures. Returns false if any failed.
fn render_all(sinks: &mut [Box<dyn ReportSink>], result: &ScanResult) -> bool {
    let mut ok = true;

    for sink in sinks.iter_mut() {
        match sink.render(result) {
            Ok(()) => info!("rendered {}", sink.name()),
            Err(e) => {
                warn!("{} sink failed: {}", sink.name(), e);
                eprintln!("extscan: {}", e);
                ok = false;
            }
        }
    }

    ok
}

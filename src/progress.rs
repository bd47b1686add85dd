//! Progress reporting for the usage walker
//!
//! Provides a live spinner using indicatif, a log writer that keeps log
//! lines from tearing the spinner, and an end-of-walk summary.
//! Everything here goes to stderr; stdout carries only result lines.

use crate::walker::{WalkProgress, WalkStats};
use console::style;
use humansize::{format_size, BINARY};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::io::{self, Write};
use std::time::Duration;
use tracing_subscriber::fmt::MakeWriter;

/// Progress reporter that displays walk status
pub struct ProgressReporter {
    bar: ProgressBar,
}

impl ProgressReporter {
    /// Create a new progress reporter drawing to stderr
    pub fn new() -> Self {
        let bar = ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr());

        // Template is a literal; fall back to the default style if it is ever rejected
        let spinner = ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");
        bar.set_style(spinner);
        bar.enable_steady_tick(Duration::from_millis(100));

        Self { bar }
    }

    /// Update the progress display
    pub fn update(&self, progress: &WalkProgress) {
        let msg = format!(
            "Visited: {} | Pending: {} | Size: {} | Rate: {:.0}/s",
            format_number(progress.visited),
            format_number(progress.pending as u64),
            format_size(progress.bytes, BINARY),
            progress.entries_per_second(),
        );

        self.bar.set_message(msg);
    }

    /// Set a status message
    pub fn set_status(&self, status: &str) {
        self.bar.set_message(status.to_string());
    }

    /// Finish and clear the progress display
    pub fn finish_and_clear(&self) {
        self.bar.finish_and_clear();
    }

    /// Log writer that clears the spinner while a line is written
    pub fn log_writer(&self) -> LogWriter {
        LogWriter {
            bar: Some(self.bar.clone()),
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// stderr writer for log output
///
/// When attached to a spinner, each write runs inside
/// [`ProgressBar::suspend`] so log lines never interleave with redraws.
#[derive(Clone, Default)]
pub struct LogWriter {
    bar: Option<ProgressBar>,
}

impl LogWriter {
    /// Plain stderr, no spinner to suspend
    pub fn stderr() -> Self {
        Self::default()
    }
}

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match &self.bar {
            Some(bar) => bar.suspend(|| io::stderr().write(buf)),
            None => io::stderr().write(buf),
        }
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        match &self.bar {
            Some(bar) => bar.suspend(|| io::stderr().write_all(buf)),
            None => io::stderr().write_all(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()
    }
}

impl<'a> MakeWriter<'a> for LogWriter {
    type Writer = LogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Format a number with thousands separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let bytes: Vec<_> = s.bytes().rev().collect();

    let chunks: Vec<String> = bytes
        .chunks(3)
        .map(|chunk| chunk.iter().rev().map(|&b| b as char).collect::<String>())
        .collect();

    chunks.into_iter().rev().collect::<Vec<_>>().join(",")
}

/// Print a summary of the walk to stderr
pub fn print_summary(root: &str, stats: &WalkStats) {
    let secs = stats.duration.as_secs_f64();
    let rate = if secs > 0.0 {
        stats.visited as f64 / secs
    } else {
        0.0
    };

    eprintln!();
    eprintln!("{}", style("Walk Complete").green().bold());
    eprintln!("{}", style("─".repeat(50)).dim());
    eprintln!("  {} {}", style("Root:").bold(), root);
    eprintln!("  {} {}", style("Entries:").bold(), format_number(stats.visited));
    eprintln!("  {} {}", style("Directories:").bold(), format_number(stats.dirs));
    eprintln!("  {} {}", style("Files:").bold(), format_number(stats.files));
    if stats.other > 0 {
        eprintln!("  {} {}", style("Other:").bold(), format_number(stats.other));
    }
    eprintln!(
        "  {} {}",
        style("Total Size:").bold(),
        format_size(stats.bytes, BINARY)
    );
    if stats.hidden > 0 {
        eprintln!(
            "  {} {}",
            style("Hidden skipped:").bold(),
            format_number(stats.hidden)
        );
    }
    eprintln!(
        "  {} {}",
        style("Peak pending:").bold(),
        format_number(stats.peak_pending as u64)
    );
    eprintln!(
        "  {} {:.1}s ({:.0} entries/sec)",
        style("Duration:").bold(),
        secs,
        rate
    );
    if stats.errors > 0 {
        eprintln!(
            "  {} {}",
            style("Errors:").yellow().bold(),
            format_number(stats.errors)
        );
    }
    eprintln!();
}

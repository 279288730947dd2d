//! Progress reporting and summary output for the CLI

use std::fmt::Write as _;
use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};
use prodsynth_core::DatasetStats;

/// Record-count progress bar for generation
pub struct ProgressReporter {
    bar: ProgressBar,
}

impl ProgressReporter {
    /// Create a progress bar over `total` records; hidden when `quiet`
    pub fn new(total: u64, quiet: bool) -> Self {
        let bar = if quiet {
            ProgressBar::hidden()
        } else {
            ProgressBar::new(total)
        };
        bar.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {human_pos}/{human_len} ({per_sec}) {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░-"),
        );
        bar.set_message("Generating...");

        Self { bar }
    }

    /// Advance by one record
    pub fn inc(&self) {
        self.bar.inc(1);
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        self.bar.finish_with_message("Complete!");
    }
}

/// Render the summary report for a dataset
///
/// `heading` names the operation, `path` the dataset file and `bytes` its
/// size when known.
pub fn summary_report(heading: &str, path: &Path, bytes: Option<u64>, stats: &DatasetStats) -> String {
    let mut out = String::new();
    let rule = "═".repeat(60);

    let _ = writeln!(out, "\n{}", rule);
    let _ = writeln!(out, "{}", heading);
    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "File:               {}", path.display());
    if let Some(bytes) = bytes {
        let _ = writeln!(out, "Size:               {} bytes", format_with_commas(bytes as usize));
    }
    let _ = writeln!(out, "Total records:      {}", format_with_commas(stats.total));

    if !stats.categories.is_empty() {
        let _ = writeln!(out, "\nCategory distribution:");
        for share in &stats.categories {
            let _ = writeln!(
                out,
                "  {:<18}{} ({:.1}%)",
                share.category.label(),
                format_with_commas(share.count),
                share.percentage
            );
        }
    }

    if let Some(averages) = &stats.averages {
        let _ = writeln!(out, "\nMetric averages:");
        let _ = writeln!(out, "  Popularity:       {:.0} clicks", averages.popularity);
        let _ = writeln!(out, "  Quality:          {:.1} / 5.0", averages.quality);
        let _ = writeln!(out, "  CTR:              {:.1}%", averages.ctr * 100.0);
    }

    let _ = write!(out, "{}", rule);
    out
}

/// Print a formatted summary report
pub fn print_summary_report(heading: &str, path: &Path, bytes: Option<u64>, stats: &DatasetStats) {
    println!("{}", summary_report(heading, path, bytes, stats));
}

/// Print how to load the dataset from the search application
pub fn print_loader_hint(path: &Path) {
    println!("\nLoad it from the search application with:");
    println!(
        "  List<String> products = DatasetLoader.loadFromJson(\"{}\");",
        path.display()
    );
}

/// Format number with thousand separators
fn format_with_commas(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

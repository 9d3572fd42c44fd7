//! # CLI Module
//!
//! Command-line interface for the duplicate scanner.
//!
//! ## Usage
//! ```bash
//! # JSON report on stdout (default)
//! folder-dedup ~/Pictures
//!
//! # Human-readable output with a progress bar
//! folder-dedup ~/Pictures --output pretty
//!
//! # Custom extension set
//! folder-dedup ~/Pictures --extensions jpg,nef
//! ```
//!
//! ## Exit codes
//! - `0` - duplicates were found and reported
//! - `1` - no duplicates found
//! - `2` - invalid argument or filesystem error

use clap::{Parser, ValueEnum};
use console::{style, Term};
use folder_dedup::core::scanner::{
    DedupScanner, ScanConfig, ScanOutcome, ScanReport, WalkDirScanner,
};
use folder_dedup::error::{DedupError, Result};
use folder_dedup::events::{Event, EventChannel, ScanEvent};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::thread;

/// Folder Dedup - report duplicate images and duplicate folders
#[derive(Parser, Debug)]
#[command(name = "folder-dedup")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to scan
    path: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "json")]
    output: OutputFormat,

    /// Comma-separated extensions overriding the default set (jpg,cr2,png)
    #[arg(short, long, value_delimiter = ',')]
    extensions: Option<Vec<String>>,

    /// Skip hidden files and directories (included by default)
    #[arg(long)]
    skip_hidden: bool,

    /// Follow symbolic links
    #[arg(long)]
    follow_symlinks: bool,

    /// Maximum directory depth
    #[arg(long)]
    max_depth: Option<usize>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// JSON report for scripting
    Json,
    /// Human-readable output with colors
    Pretty,
    /// Minimal output (redundant copies only, one path per line)
    Minimal,
}

/// Run the CLI
pub fn run() -> ExitCode {
    folder_dedup::init_tracing();
    let cli = Cli::parse();

    match run_scan(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}

fn run_scan(cli: Cli) -> Result<ExitCode> {
    let root = normalize_root(&cli.path)?;

    let scanner = WalkDirScanner::new(ScanConfig {
        follow_symlinks: cli.follow_symlinks,
        include_hidden: !cli.skip_hidden,
        max_depth: cli.max_depth,
        extensions: cli.extensions.clone(),
    });

    // Progress bar for pretty output, fed from the event channel
    let (sender, receiver) = EventChannel::new();

    let progress = if matches!(cli.output, OutputFormat::Pretty) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        Some(pb)
    } else {
        None
    };

    let progress_clone = progress.clone();
    let event_thread = thread::spawn(move || {
        for event in receiver.iter() {
            match event {
                Event::Scan(ScanEvent::Progress(p)) => {
                    if let Some(ref pb) = progress_clone {
                        pb.set_message(format!(
                            "{} folders scanned, {} files fingerprinted",
                            p.folders_scanned, p.files_fingerprinted
                        ));
                        pb.tick();
                    }
                }
                Event::Scan(ScanEvent::Completed { .. }) => {
                    if let Some(ref pb) = progress_clone {
                        pb.finish_and_clear();
                    }
                }
                _ => {}
            }
        }
    });

    let outcome = scanner.scan_with_events(&root, &sender);

    // Drop the sender so the event thread drains and exits
    drop(sender);
    event_thread.join().ok();

    match outcome? {
        ScanOutcome::Duplicates(report) => {
            match cli.output {
                OutputFormat::Json => print_json_report(&report),
                OutputFormat::Pretty => print_pretty_report(&Term::stdout(), &report),
                OutputFormat::Minimal => print_minimal_report(&report),
            }
            Ok(ExitCode::SUCCESS)
        }
        ScanOutcome::NoDuplicatesFound => {
            eprintln!("No duplicates found");
            Ok(ExitCode::from(1))
        }
    }
}

/// Expand `~` and normalize to an absolute, existing directory.
fn normalize_root(path: &Path) -> Result<PathBuf> {
    let expanded = expand_home(path);
    let canonical = expanded.canonicalize().map_err(|_| {
        DedupError::InvalidArgument(format!("No such directory: {}", path.display()))
    })?;
    if !canonical.is_dir() {
        return Err(DedupError::InvalidArgument(format!(
            "Not a directory: {}",
            path.display()
        )));
    }
    Ok(canonical)
}

fn expand_home(path: &Path) -> PathBuf {
    if let Ok(stripped) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    path.to_path_buf()
}

fn print_json_report(report: &ScanReport) {
    match serde_json::to_string_pretty(report) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("Failed to serialize report: {e}"),
    }
}

fn print_pretty_report(term: &Term, report: &ScanReport) {
    term.write_line("").ok();
    term.write_line(&format!("{} Scan Complete", style("✓").green().bold()))
        .ok();
    term.write_line("").ok();

    term.write_line(&format!(
        "  {} duplicate files in {} groups",
        style(report.duplicate_file_count()).cyan(),
        style(report.duplicate_images.len()).cyan()
    ))
    .ok();
    term.write_line(&format!(
        "  {} duplicate folders in {} groups",
        style(report.duplicate_folder_count()).cyan(),
        style(report.duplicate_folders.len()).cyan()
    ))
    .ok();
    term.write_line("").ok();

    if !report.duplicate_images.is_empty() {
        term.write_line(&format!("{}", style("Duplicate Images:").bold().underlined()))
            .ok();
        term.write_line("").ok();

        for (i, (fingerprint, paths)) in report.duplicate_images.iter().enumerate() {
            term.write_line(&format!(
                "  {} {} ({} files)",
                style(format!("Group {}:", i + 1)).bold(),
                style(fingerprint).yellow(),
                paths.len()
            ))
            .ok();
            for path in paths {
                term.write_line(&format!("    {} {}", style("○").dim(), display_path(path)))
                    .ok();
            }
            term.write_line("").ok();
        }
    }

    if !report.duplicate_folders.is_empty() {
        term.write_line(&format!(
            "{}",
            style("Duplicate Folders:").bold().underlined()
        ))
        .ok();
        term.write_line("").ok();

        for (i, (signature, folders)) in report.duplicate_folders.iter().enumerate() {
            term.write_line(&format!(
                "  {} {} ({} folders)",
                style(format!("Group {}:", i + 1)).bold(),
                style(signature).yellow(),
                folders.len()
            ))
            .ok();
            for folder in folders {
                term.write_line(&format!(
                    "    {} {}",
                    style("○").dim(),
                    display_path(folder)
                ))
                .ok();
            }
            term.write_line("").ok();
        }
    }

    term.write_line(&format!(
        "{}",
        style("No files were modified. Review carefully before taking action.").dim()
    ))
    .ok();
}

fn print_minimal_report(report: &ScanReport) {
    // Every copy past the first in each group is a removal candidate
    for paths in report.duplicate_images.values() {
        for path in paths.iter().skip(1) {
            println!("{}", path.display());
        }
    }
}

fn display_path(path: &Path) -> String {
    let home = dirs::home_dir().unwrap_or_default();
    match path.strip_prefix(&home) {
        Ok(stripped) if !home.as_os_str().is_empty() => format!("~/{}", stripped.display()),
        _ => path.display().to_string(),
    }
}

//! CLI module - Command-line interface definition and run wiring

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

use crate::core::model::ScanOptions;
use crate::core::render::{OutputFormat, Renderer};
use crate::scan::coordinator::ScanCoordinator;
use crate::scan::progress::ScanProgress;

/// todoscan - find TODO/FIXME/BUG debt markers across a directory tree.
#[derive(Parser, Debug)]
#[command(name = "todoscan")]
#[command(
    author,
    version,
    about,
    long_about = r#"todoscan walks a directory tree, scans text files line by line for a
marker pattern (default: whole-word TODO/FIXME/BUG, case-insensitive),
and emits the matches in the selected format (default: json).

Output formats:
- json: full report with per-keyword summary and every match
- simple: one entry per file with a match count and an editor jump link
- md: human-friendly Markdown report
- term: plain listing grouped by file, sorted by path

Examples:
    todoscan
    todoscan src --format term
    todoscan . --format simple
    todoscan . --format md --out report.md
    todoscan . --ignore vendor --ignore generated
"#
)]
pub struct Cli {
    /// Directory to scan.
    #[arg(value_name = "PATH", default_value = ".")]
    pub path: PathBuf,

    /// Output format (json/simple/md/term).
    #[arg(
        long,
        default_value = "json",
        value_name = "FORMAT",
        long_help = "Select the output format.\n\n\
Supported values:\n\
- json (default): full report object\n\
- simple: deduplicated per-file summary\n\
- md (markdown): report with summary and details sections\n\
- term: listing grouped by file for reading in the terminal"
    )]
    pub format: String,

    /// Write the report to FILE instead of stdout.
    #[arg(
        long,
        value_name = "FILE",
        long_help = "Write the report body to FILE instead of stdout.\n\n\
The progress bar still renders on stderr."
    )]
    pub out: Option<PathBuf>,

    /// Marker pattern override (regex, matched case-insensitively).
    #[arg(
        long,
        value_name = "PATTERN",
        long_help = "Override the marker pattern. The pattern is a regular expression\n\
applied to each line, matched case-insensitively.\n\n\
Note: the summary counters stay keyed to TODO/FIXME/BUG regardless of\n\
the pattern; a custom pattern still yields a correct total count."
    )]
    pub pattern: Option<String>,

    /// Exclude entries whose name or relative path contains TOKEN (repeatable).
    #[arg(
        long,
        value_name = "TOKEN",
        long_help = "Add an ignore token. An entry is excluded when its basename or its\n\
path relative to the scan root contains TOKEN as a literal substring,\n\
so --ignore test also excludes latest.txt. Repeat the flag to add\n\
several tokens. node_modules and .git are always ignored."
    )]
    pub ignore: Vec<String>,

    /// Drop dotfiles and dotdirs.
    #[arg(long)]
    pub exclude_hidden: bool,

    /// Keep only dotfiles and dotdirs.
    #[arg(
        long,
        long_help = "Keep only dotfiles and dotdirs. Combining this with --exclude-hidden\n\
excludes everything and reports zero matches."
    )]
    pub only_hidden: bool,

    /// Disable colored output (when applicable).
    #[arg(long)]
    pub no_color: bool,

    /// Quiet mode (no progress bar).
    #[arg(short, long)]
    pub quiet: bool,
}

/// Run the CLI with parsed arguments
pub async fn run(cli: Cli) -> Result<()> {
    let format: OutputFormat = cli.format.parse().unwrap_or_default();

    if cli.no_color {
        colored::control::set_override(false);
    }

    // Absolute root; a nonexistent path fails later as a fatal root error
    let root = cli.path.canonicalize().unwrap_or(cli.path);

    let mut options = ScanOptions::new(root);
    if let Some(pattern) = cli.pattern.filter(|p| !p.is_empty()) {
        options.pattern = pattern;
    }
    for token in cli.ignore {
        options.add_ignore(token);
    }
    options.exclude_hidden = cli.exclude_hidden;
    options.only_hidden = cli.only_hidden;

    let coordinator = ScanCoordinator::new(options)?;

    let bar = if cli.quiet {
        ProgressBar::hidden()
    } else {
        create_progress_bar()
    };

    let report = coordinator
        .run(|progress: ScanProgress| {
            if bar.length() != Some(progress.files_total as u64) {
                bar.set_length(progress.files_total as u64);
            }
            bar.set_position(progress.files_done as u64);
            bar.set_message(format!("matches: {}", progress.matches_found));
        })
        .await?;
    bar.finish_and_clear();

    let body = Renderer::new(format).render(&report);
    match cli.out {
        Some(path) => std::fs::write(&path, &body)
            .with_context(|| format!("failed to write report to {}", path.display()))?,
        None => {
            if body.ends_with('\n') {
                print!("{}", body);
            } else {
                println!("{}", body);
            }
        }
    }

    Ok(())
}

/// Progress bar on stderr: `[####----] done/total | matches: n`
fn create_progress_bar() -> ProgressBar {
    let pb = ProgressBar::new(0);
    let style = ProgressStyle::default_bar()
        .template("Scanning [{bar:20}] {pos}/{len} | {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#-");
    pb.set_style(style);
    pb
}

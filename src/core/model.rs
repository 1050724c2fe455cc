//! Scan result model
//!
//! Every scan run produces a `ScanReport` (the full aggregate) which the
//! renderer turns into one of the output shapes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Marker keywords tracked by the summary counters.
///
/// The counter keys stay fixed to this set even when the scan pattern is
/// overridden, so a custom pattern yields a total count with (usually)
/// all-zero keyword counters.
pub const KEYWORDS: [&str; 3] = ["TODO", "FIXME", "BUG"];

/// Default marker pattern (whole-word, matched case-insensitively).
pub const DEFAULT_PATTERN: &str = r"\b(TODO|FIXME|BUG)\b";

/// Directory names excluded from every scan.
pub const DEFAULT_IGNORE: [&str; 2] = ["node_modules", ".git"];

/// Configuration for one scan run. Immutable once built.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Absolute scan root.
    pub root: PathBuf,

    /// Marker regex source, compiled case-insensitively.
    pub pattern: String,

    /// Ignore tokens, matched as literal substrings of the basename or
    /// the root-relative path.
    pub ignore: Vec<String>,

    /// Drop dotfiles and dotdirs.
    pub exclude_hidden: bool,

    /// Keep only dotfiles and dotdirs.
    pub only_hidden: bool,
}

impl ScanOptions {
    /// Build options for a root with the default pattern and ignore set.
    ///
    /// The scanner's own binary name joins the ignore list so a scan of a
    /// directory containing the tool never reports the tool itself.
    pub fn new(root: PathBuf) -> Self {
        let mut ignore: Vec<String> = DEFAULT_IGNORE.iter().map(|s| s.to_string()).collect();
        if let Some(name) = std::env::current_exe()
            .ok()
            .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        {
            ignore.push(name);
        }

        Self {
            root,
            pattern: DEFAULT_PATTERN.to_string(),
            ignore,
            exclude_hidden: false,
            only_hidden: false,
        }
    }

    /// Add a user-supplied ignore token (empty tokens are dropped).
    pub fn add_ignore(&mut self, token: impl Into<String>) {
        let token = token.into();
        if !token.is_empty() {
            self.ignore.push(token);
        }
    }
}

/// One matching line in one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Absolute path of the file containing the match.
    pub file: PathBuf,

    /// 1-based line number.
    pub line: u32,

    /// The matched line with surrounding whitespace trimmed.
    pub text: String,
}

impl MatchRecord {
    pub fn new(file: impl Into<PathBuf>, line: u32, text: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            line,
            text: text.into(),
        }
    }
}

/// Per-keyword occurrence counts, computed once over the full aggregate.
///
/// A single line containing several keywords increments each of their
/// counters; the counts are not mutually exclusive per match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScanSummary {
    counts: BTreeMap<String, usize>,
}

impl ScanSummary {
    /// Compute the summary for a match sequence.
    pub fn compute(matches: &[MatchRecord]) -> Self {
        let mut counts: BTreeMap<String, usize> =
            KEYWORDS.iter().map(|k| (k.to_string(), 0)).collect();

        for record in matches {
            for keyword in KEYWORDS {
                if record.text.contains(keyword) {
                    *counts.entry(keyword.to_string()).or_default() += 1;
                }
            }
        }

        Self { counts }
    }

    /// Count for a single keyword (0 for unknown keywords).
    pub fn count(&self, keyword: &str) -> usize {
        self.counts.get(keyword).copied().unwrap_or(0)
    }
}

/// The full scan aggregate: everything the renderer needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanReport {
    /// Absolute root that was scanned.
    pub scanned_dir: PathBuf,

    /// Total number of matches (always equals `items.len()`).
    pub count: usize,

    /// Per-keyword counts.
    pub summary: ScanSummary,

    /// All matches in aggregate (batch) order.
    pub items: Vec<MatchRecord>,
}

impl ScanReport {
    /// Build a report from the aggregate match sequence.
    pub fn new(scanned_dir: PathBuf, items: Vec<MatchRecord>) -> Self {
        Self {
            scanned_dir,
            count: items.len(),
            summary: ScanSummary::compute(&items),
            items,
        }
    }
}

/// Simple-mode entry: one per distinct file with at least one match.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileSummary {
    /// Editor jump link to the file's first match.
    pub file_path: String,

    /// Basename of the file.
    pub filename: String,

    /// Number of matches in the file.
    pub count: usize,
}

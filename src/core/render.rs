//! Renderer module
//!
//! Renders a ScanReport to the selected output shape: json, simple, md, term.
//! Formatters are pure transforms of the aggregate; no scanning or filtering
//! happens here.

use colored::Colorize;
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::core::model::{FileSummary, MatchRecord, ScanReport, KEYWORDS};
use crate::core::paths::{jump_link, make_relative, normalize_path};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Full report as pretty-printed JSON
    #[default]
    Json,
    /// Deduplicated per-file JSON summary
    Simple,
    /// Markdown report
    Markdown,
    /// Plain terminal listing grouped by file
    Terminal,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "simple" => Ok(OutputFormat::Simple),
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            "term" | "terminal" | "plain" => Ok(OutputFormat::Terminal),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Renderer for scan reports
pub struct Renderer {
    format: OutputFormat,
}

impl Renderer {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Render a report to a string in the configured format
    pub fn render(&self, report: &ScanReport) -> String {
        match self.format {
            OutputFormat::Json => self.render_json(report),
            OutputFormat::Simple => self.render_simple(report),
            OutputFormat::Markdown => self.render_markdown(report),
            OutputFormat::Terminal => self.render_terminal(report),
        }
    }

    /// Render the full report as pretty JSON
    fn render_json(&self, report: &ScanReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    /// Render one entry per distinct file, in first-seen aggregate order
    fn render_simple(&self, report: &ScanReport) -> String {
        let mut entries: Vec<(String, FileSummary)> = Vec::new();

        for record in &report.items {
            let rel = make_relative(&record.file, &report.scanned_dir)
                .unwrap_or_else(|| normalize_path(&record.file));

            if let Some((_, entry)) = entries.iter_mut().find(|(key, _)| key == &rel) {
                entry.count += 1;
            } else {
                let filename = record
                    .file
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                entries.push((
                    rel,
                    FileSummary {
                        file_path: jump_link(&record.file, record.line),
                        filename,
                        count: 1,
                    },
                ));
            }
        }

        let output: Vec<&FileSummary> = entries.iter().map(|(_, entry)| entry).collect();
        serde_json::to_string_pretty(&output).unwrap_or_else(|_| "[]".to_string())
    }

    /// Render a Markdown report: summary section plus one bullet per match
    fn render_markdown(&self, report: &ScanReport) -> String {
        let mut md = format!(
            "# TODO/FIXME/BUG Report\n\nScanned: {}\n\n## Summary\n",
            normalize_path(&report.scanned_dir)
        );

        for keyword in KEYWORDS {
            md.push_str(&format!("- {}: {}\n", keyword, report.summary.count(keyword)));
        }

        md.push_str("\n## Details\n");
        for record in &report.items {
            let rel = make_relative(&record.file, &report.scanned_dir)
                .unwrap_or_else(|| normalize_path(&record.file));
            md.push_str(&format!(
                "- [{}:{}]({}) — {}\n",
                rel,
                record.line,
                jump_link(&record.file, record.line),
                record.text
            ));
        }

        md
    }

    /// Render a terminal listing grouped by file, files sorted lexically,
    /// matches within a file in aggregate order
    fn render_terminal(&self, report: &ScanReport) -> String {
        let mut groups: BTreeMap<PathBuf, Vec<&MatchRecord>> = BTreeMap::new();
        for record in &report.items {
            groups.entry(record.file.clone()).or_default().push(record);
        }

        let mut output = String::new();
        for (file, records) in &groups {
            output.push_str(&format!("{}\n", normalize_path(file).bold()));
            for record in records {
                output.push_str(&format!("  {} | {}\n", record.line, record.text));
            }
        }

        output
    }
}

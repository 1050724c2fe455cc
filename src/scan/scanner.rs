//! Line scanning
//!
//! Applies the compiled marker pattern to a file's text, line by line.

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use std::path::Path;

use crate::core::model::{MatchRecord, DEFAULT_PATTERN};

/// Compiled default marker pattern, shared across runs that do not
/// override it.
static DEFAULT_RE: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(DEFAULT_PATTERN)
        .case_insensitive(true)
        .build()
        .expect("Invalid default pattern")
});

pub struct LineScanner {
    pattern: Regex,
}

impl LineScanner {
    /// Compile a pattern source case-insensitively.
    pub fn new(pattern: &str) -> Result<Self> {
        let pattern = if pattern == DEFAULT_PATTERN {
            DEFAULT_RE.clone()
        } else {
            RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .with_context(|| format!("invalid marker pattern: {}", pattern))?
        };
        Ok(Self { pattern })
    }

    /// Scan one file's content, emitting a record per matching line with
    /// a 1-based line number and trimmed text.
    pub fn scan(&self, file: &Path, content: &str) -> Vec<MatchRecord> {
        content
            .lines()
            .enumerate()
            .filter(|(_, line)| self.pattern.is_match(line))
            .map(|(idx, line)| MatchRecord::new(file, idx as u32 + 1, line.trim()))
            .collect()
    }
}

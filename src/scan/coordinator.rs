//! Scan coordination
//!
//! Drives the walk, scans candidates in fixed-size batches of concurrent
//! file reads, and aggregates all matches into a ScanReport. Per-file and
//! per-directory I/O trouble is absorbed; the only fatal error is a scan
//! root that cannot be established.

use anyhow::{bail, Context, Result};
use futures::future;
use std::path::Path;

use crate::core::model::{MatchRecord, ScanOptions, ScanReport};
use crate::scan::progress::ScanProgress;
use crate::scan::scanner::LineScanner;
use crate::scan::walker::TreeWalker;

/// Number of files read concurrently per batch. Batch N+1 starts only
/// after every read in batch N has resolved.
const BATCH_SIZE: usize = 20;

pub struct ScanCoordinator {
    options: ScanOptions,
    scanner: LineScanner,
}

impl ScanCoordinator {
    pub fn new(options: ScanOptions) -> Result<Self> {
        let scanner = LineScanner::new(&options.pattern)?;
        Ok(Self { options, scanner })
    }

    /// Run the full scan. The callback observes batch completion and has
    /// no bearing on the result.
    pub async fn run(&self, mut progress: impl FnMut(ScanProgress)) -> Result<ScanReport> {
        let meta = std::fs::metadata(&self.options.root)
            .with_context(|| format!("cannot read scan root {}", self.options.root.display()))?;
        if !meta.is_dir() {
            bail!("scan root {} is not a directory", self.options.root.display());
        }

        let files = TreeWalker::new(&self.options).collect();
        let files_total = files.len();

        let mut matches: Vec<MatchRecord> = Vec::new();
        let mut files_done = 0;

        for batch in files.chunks(BATCH_SIZE) {
            let results =
                future::join_all(batch.iter().map(|path| scan_file(path, &self.scanner))).await;
            for hits in results {
                matches.extend(hits);
            }

            files_done += batch.len();
            progress(ScanProgress {
                files_done,
                files_total,
                matches_found: matches.len(),
            });
        }

        Ok(ScanReport::new(self.options.root.clone(), matches))
    }
}

/// Scan one file. Unreadable or non-UTF-8 content yields zero records.
async fn scan_file(path: &Path, scanner: &LineScanner) -> Vec<MatchRecord> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(_) => return Vec::new(),
    };

    match String::from_utf8(bytes) {
        Ok(content) => scanner.scan(path, &content),
        Err(_) => Vec::new(),
    }
}

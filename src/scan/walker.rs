//! Candidate file collection
//!
//! Walks the scan root with walkdir, pruning ignored entries so excluded
//! directories are never descended into. Unreadable directories contribute
//! nothing; the walk continues.

use std::path::PathBuf;
use walkdir::WalkDir;

use crate::core::model::ScanOptions;
use crate::scan::filter::{has_skipped_suffix, PathFilter};

pub struct TreeWalker {
    root: PathBuf,
    filter: PathFilter,
}

impl TreeWalker {
    pub fn new(options: &ScanOptions) -> Self {
        Self {
            root: options.root.clone(),
            filter: PathFilter::new(options),
        }
    }

    /// Collect all candidate files under the root in name-sorted order.
    ///
    /// The filter never applies to the root itself, only to entries below
    /// it. The suffix skip list is reapplied to the surviving files.
    pub fn collect(&self) -> Vec<PathBuf> {
        WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                entry.depth() == 0
                    || !self
                        .filter
                        .is_ignored(entry.path(), entry.file_type().is_file())
            })
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(|path| {
                path.file_name()
                    .map(|n| !has_skipped_suffix(&n.to_string_lossy()))
                    .unwrap_or(true)
            })
            .collect()
    }
}

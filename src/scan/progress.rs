//! Scan progress counters
//!
//! Lightweight running totals handed to the caller's progress callback
//! after each batch. Observational only; correctness never depends on it.

/// Running totals for one scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanProgress {
    /// Files scanned so far.
    pub files_done: usize,

    /// Total candidate files.
    pub files_total: usize,

    /// Matches found so far.
    pub matches_found: usize,
}

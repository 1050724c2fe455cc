//! Scan module - the collection + classification + scan pipeline
//!
//! Provides:
//! - filter: exclusion rules for traversal and scanning
//! - walker: candidate file collection
//! - scanner: per-line pattern matching
//! - coordinator: batched concurrent scanning and aggregation
//! - progress: running counters for the progress callback

pub mod coordinator;
pub mod filter;
pub mod progress;
pub mod scanner;
pub mod walker;

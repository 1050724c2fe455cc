//! Core module - data model, rendering, and path utilities
//!
//! This module provides:
//! - Scan result model (MatchRecord, ScanSummary, ScanReport)
//! - Rendering to the selectable output formats
//! - Path normalization utilities

pub mod model;
pub mod paths;
pub mod render;

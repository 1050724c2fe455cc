//! todoscan - find TODO/FIXME/BUG debt markers across a directory tree
//!
//! todoscan provides:
//! - Recursive traversal with substring ignore tokens and hidden-file policies
//! - Batched concurrent file scanning with a configurable marker pattern
//! - Output as JSON, per-file summary, Markdown, or a grouped terminal listing

use anyhow::Result;
use clap::Parser;

mod cli;
mod core;
mod scan;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli).await
}

// src/cli.rs
use std::path::PathBuf;

use clap::Parser;

/// Recursively collect file name, path and size into a CSV report.
#[derive(Parser, Debug)]
#[command(name = "file_inventory", version, about)]
pub struct Args {
    /// Root directory to scan
    pub path: PathBuf,

    /// Destination file for the CSV output
    pub output_file: PathBuf,
}

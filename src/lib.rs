// src/lib.rs
pub mod cli;
pub mod collector;
pub mod error;
pub mod logging;
pub mod record;
pub mod writer;

pub use error::{InventoryError, Result};
pub use record::FileRecord;

use cli::Args;

/// Collects the inventory under `args.path` and writes it to `args.output_file`.
pub fn run(args: &Args) -> anyhow::Result<()> {
    log::debug!("path: {}", args.path.display());
    log::debug!("output file: {}", args.output_file.display());

    let records = collector::collect(&args.path)?;
    log::debug!("collected {} file record(s)", records.len());

    writer::write(&records, &args.output_file)?;
    log::info!("Files info saved to {}", args.output_file.display());
    Ok(())
}

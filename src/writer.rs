// src/writer.rs
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::error::{InventoryError, Result};
use crate::record::FileRecord;

const HEADER: &str = "file_name,file_path,file_size";

/// Serializes `records` as CSV to `destination`, creating or truncating it.
///
/// No partial-write recovery: a failure mid-write may leave a truncated file.
pub fn write(records: &[FileRecord], destination: &Path) -> Result<()> {
    let file = File::create(destination).map_err(|source| write_error(destination, source))?;
    let mut out = BufWriter::new(file);
    write_csv(records, &mut out).map_err(|source| write_error(destination, source))?;
    out.flush().map_err(|source| write_error(destination, source))?;
    Ok(())
}

fn write_error(path: &Path, source: std::io::Error) -> InventoryError {
    InventoryError::Write { path: path.to_path_buf(), source }
}

fn write_csv(records: &[FileRecord], out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "{HEADER}")?;
    for record in records {
        writeln!(
            out,
            "{},{},{}",
            escape_field(&record.file_name),
            escape_field(&record.file_path.to_string_lossy()),
            record.file_size
        )?;
    }
    Ok(())
}

/// Standard CSV quoting: wrap in double quotes when the field contains a
/// comma, quote or line break, doubling any embedded quotes.
fn escape_field(s: &str) -> String {
    if s.contains([',', '"', '\n', '\r']) {
        let escaped = s.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        s.to_string()
    }
}

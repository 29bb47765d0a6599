// src/collector.rs
use std::path::Path;

use ignore::WalkBuilder;

use crate::error::{InventoryError, Result};
use crate::record::FileRecord;

/// Walks `root` and returns one record per regular file found anywhere below it.
///
/// Every file is visited: the walker runs with the standard filters disabled,
/// so hidden files and gitignored files are not skipped. Symlinks are not
/// followed and never produce records. Entries that cannot be read are skipped
/// with a warning; only a missing or non-directory root fails the whole call.
pub fn collect(root: &Path) -> Result<Vec<FileRecord>> {
    if !root.is_dir() {
        return Err(InventoryError::InvalidRoot { path: root.to_path_buf() });
    }

    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .build();

    let mut records = Vec::new();
    for result in walker {
        let entry = match result {
            Ok(entry) => entry,
            Err(source) => {
                log::warn!("skipping entry: {}", InventoryError::Walk { source });
                continue;
            }
        };
        match stat_record(entry.path()) {
            Ok(Some(record)) => records.push(record),
            Ok(None) => {}
            Err(err) => log::warn!("skipping entry: {err}"),
        }
    }

    // Stable path order so repeat runs over an unchanged tree produce
    // byte-identical output regardless of directory iteration order.
    records.sort_by_cached_key(|record| path_key(&record.file_path));
    Ok(records)
}

// symlink_metadata keeps a dangling or cyclic link from being statted through;
// link entries themselves are excluded from the inventory.
fn stat_record(path: &Path) -> Result<Option<FileRecord>> {
    let metadata = std::fs::symlink_metadata(path).map_err(|source| {
        InventoryError::Metadata { path: path.to_path_buf(), source }
    })?;
    if metadata.file_type().is_symlink() || !metadata.is_file() {
        return Ok(None);
    }
    Ok(Some(FileRecord::new(path.to_path_buf(), metadata.len())))
}

#[cfg(unix)]
fn path_key(path: &Path) -> Vec<u8> {
    use std::os::unix::ffi::OsStrExt;
    path.as_os_str().as_bytes().to_vec()
}

#[cfg(not(unix))]
fn path_key(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

// src/record.rs
use std::path::PathBuf;

/// One discovered regular file: base name, traversal path and byte size.
///
/// Built once during the walk and immutable afterwards. The size reflects the
/// file at the moment it was statted; nothing guards against later changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub file_name: String,
    pub file_path: PathBuf,
    pub file_size: u64,
}

impl FileRecord {
    /// Derives the base name from `path`; non UTF-8 names are lossy converted,
    /// matching how paths are rendered in the output.
    #[must_use]
    pub fn new(path: PathBuf, size: u64) -> Self {
        let file_name = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { file_name, file_path: path, file_size: size }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_captures_base_name() {
        let record = FileRecord::new(PathBuf::from("root/sub/b.txt"), 10);
        assert_eq!(record.file_name, "b.txt");
        assert_eq!(record.file_path, PathBuf::from("root/sub/b.txt"));
        assert_eq!(record.file_size, 10);
    }
}

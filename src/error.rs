// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while collecting or writing the inventory.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("invalid root '{path}': not an existing directory")]
    InvalidRoot { path: PathBuf },

    #[error("directory walk error: {source}")]
    Walk {
        #[source]
        source: ignore::Error,
    },

    #[error("failed to stat '{path}': {source}")]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, InventoryError>;

//! Error types for command registry generation

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure while regenerating the command registry
#[derive(Debug, Error)]
pub enum Error {
    /// The commands directory could not be listed
    #[error("Failed to read commands directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A command file name is not valid UTF-8
    #[error("Command file name is not valid UTF-8: {}", path.display())]
    InvalidFileName { path: PathBuf },

    /// A command file or the entry file could not be read as text
    #[error("Failed to read {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The module index or the entry file could not be written
    #[error("Failed to write {}: {source}", path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type alias for registry operations
pub type Result<T> = std::result::Result<T, Error>;

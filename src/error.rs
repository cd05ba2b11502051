use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VidcatError {
    #[error("Unable to enumerate directory {}: {source}", .path.display())]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("No nodes in directory {}", .0.display())]
    EmptyDirectory(PathBuf),

    #[error("Unknown order-by key: {0:?} (expected name or date_modified)")]
    UnknownOrderKey(String),

    #[error("Unknown order direction: {0:?} (expected asc or desc)")]
    UnknownOrderDirection(String),

    #[error("Invalid regular expression for match-pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Invalid concatenation request: {0}")]
    InvalidRequest(String),

    #[error("{tool} failed: {reason}")]
    ExternalToolFailure { tool: String, reason: String },

    #[error("Invalid argument: {0}")]
    InvalidArg(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, VidcatError>;

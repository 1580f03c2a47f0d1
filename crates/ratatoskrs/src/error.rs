use std::path::PathBuf;

/// Crate-wide error type.
///
/// Only loaders and configuration checks produce these; the decision
/// primitives are total and never fail.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid format: {0}")]
    InvalidFormat(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("missing file: {0}")]
    MissingFile(PathBuf),
}

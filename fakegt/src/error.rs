use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FakeGtError {
    #[error("I/O Error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("variant incomplete or FORMAT column already exists (line {line}: {fields} fields)")]
    FormatError { line: u64, fields: usize },
    #[error("file '{}' does not exist", .0.display())]
    InputNotFound(PathBuf),
    #[error("Cowardly refusing to overwrite existing output file '{}'", .0.display())]
    OutputExists(PathBuf),
}

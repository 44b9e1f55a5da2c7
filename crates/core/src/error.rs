use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("{} is not valid {encoding} text", .path.display())]
    Decoding { path: PathBuf, encoding: &'static str },

    #[error("input of length {len} is not a multiple of group size {size}")]
    LengthMismatch { len: usize, size: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

pub type Result<T, E = ExtractError> = std::result::Result<T, E>;

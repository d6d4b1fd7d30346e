use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A structurally invalid call parameter. Raised before any filesystem
    /// access, so the call had no side effects.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The base directory is missing or cannot be written to.
    #[error("`{}` should be a writeable directory", .0.display())]
    UnwritableBase(PathBuf),
    /// Every candidate name was taken within the retry budget, or the
    /// OS-native unique-name primitive failed.
    #[error("unable to generate a temporary filename")]
    NameGeneration,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

//! Errors raised while splitting a dataset.

use std::io;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, SplitError>;

#[derive(Debug, thiserror::Error)]
pub enum SplitError {
    /// Ratio validation failed; raised before any file is touched.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("CSV error in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The input has no first row to use as a header.
    #[error("{} is empty, no header row to copy", .0.display())]
    EmptyInput(PathBuf),
}

impl SplitError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        SplitError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        SplitError::Csv {
            path: path.into(),
            source,
        }
    }
}

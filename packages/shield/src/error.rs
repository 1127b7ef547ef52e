//! Errors
//!
//! Failures of the file operation that are not recovered locally. A missing
//! input file is not an error, see [`crate::shield::ShieldOutcome`].

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShieldError {
    #[error("failed to read stylesheet '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write stylesheet '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ShieldError>;

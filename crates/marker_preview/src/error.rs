// crates/marker_preview/src/error.rs

use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Failures of a preview run. None of them are recovered from; the
/// binary reports the error and exits non-zero.
#[derive(Debug, Error)]
pub enum PreviewError {
    /// The document could not be opened or read.
    #[error("Error reading file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The document bytes are not valid UTF-8.
    #[error("File {} is not valid UTF-8", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },

    /// The marker literal does not occur at or after `from`.
    #[error("Marker {marker:?} not found at or after character {from}")]
    MarkerNotFound { marker: String, from: usize },

    /// Writing an excerpt to the output failed.
    #[error("Error writing preview output")]
    Output(#[from] io::Error),
}

impl PreviewError {
    pub fn is_marker_not_found(&self) -> bool {
        matches!(self, PreviewError::MarkerNotFound { .. })
    }
}

//! Error types for the arbor core.
//!
//! Every I/O-adjacent operation in the core produces one of these instead of unwinding.
//! None of them are fatal: [AccessDenied], [ReadError] and [DecodeError] render as inline
//! text in the preview pane or as a sentinel tree leaf, and [SpawnError] is only logged.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A directory could not be opened or one of its entries could not be read.
///
/// Produced by [crate::core::listing::list_dir]. The tree model turns it into a single
/// "Access denied" leaf under the directory node.
#[derive(Debug, Error)]
#[error("access denied: {}: {source}", path.display())]
pub struct AccessDenied {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

impl AccessDenied {
    pub fn new(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self {
            path: path.into(),
            source,
        }
    }
}

/// A file vanished or could not be read at preview time.
#[derive(Debug, Error)]
#[error("{source}")]
pub struct ReadError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// An image header could not be opened or decoded.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Image(#[from] image::ImageError),
    #[error("unrecognized image format")]
    UnknownFormat,
}

/// The external viewer could not be launched.
#[derive(Debug, Error)]
pub enum SpawnError {
    #[error("failed to launch a viewer for {}: {source}", path.display())]
    Launch {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

//! Error types for loading, configuration and serving.
//!
//! The correction core itself is infallible: building the index and looking
//! up suggestions never fail. Errors only come from the collaborators that
//! touch the filesystem, the network or the process-wide logger.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpellError {
    /// I/O errors (corpus files, sockets)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("corpus not found: {}", .0.display())]
    CorpusNotFound(PathBuf),

    #[error("config error: {0}")]
    Config(#[from] confy::ConfyError),

    #[error("invalid verbosity {0}, expected 0, 1 or 2")]
    InvalidVerbosity(u8),

    /// A client sent more than the request limit without an `<EOF>` marker.
    #[error("request exceeds {0} bytes without <EOF> marker")]
    RequestTooLarge(usize),

    #[error("logging error: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, SpellError>;

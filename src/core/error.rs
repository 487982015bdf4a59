use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that stop a run.
///
/// Malformed records are never reported here: unkeyable blocks are dropped,
/// unrecognized import lines pass through.
#[derive(Debug, Error)]
pub enum CanonError {
    #[error("invalid pattern for '{literal}': {source}")]
    Pattern {
        literal: String,
        #[source]
        source: regex::Error,
    },
    #[error("cannot read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to encode mapping report: {0}")]
    Report(String),
}

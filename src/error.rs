//! Typed failures for the layers that can actually fail. Projections never
//! appear here: an unmatched reference is a normal outcome, not an error.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Problems locating or reading the on-disk dataset and configuration.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("could not locate home directory")]
    NoHomeDir,

    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Reasons an action cannot be turned into an intent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntentError {
    #[error("{0} is required.")]
    MissingField(&'static str),

    #[error("No {kind} with id {id}.")]
    UnknownReference { kind: &'static str, id: String },

    #[error("{0}")]
    Invalid(String),
}

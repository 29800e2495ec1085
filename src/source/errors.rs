/// Errors from source argument classification.
use std::path::PathBuf;

use thiserror::Error;

use crate::resolver::ResolveError;

/// Reasons a command line cannot be split into sources and arguments.
#[derive(Debug, Error)]
pub enum SourceError {
    /// A source-looking argument matched neither a local file nor a resource.
    #[error("Can't find {name}")]
    UnresolvedSource {
        /// The argument as given on the command line.
        name: String,
    },

    /// No source URL was collected from the arguments.
    #[error("Please specify at least one file")]
    NoSources,

    /// A local file was found but its absolute URL could not be built.
    #[error("Cannot build a file URL for '{}': {source}", path.display())]
    FileUrl {
        /// The local file that was found.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// The resource resolver failed; passed through unchanged.
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

impl SourceError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NoSources => 2,
            Self::UnresolvedSource { .. } => 4,
            Self::FileUrl { .. } | Self::Resolve(_) => 1,
        }
    }
}

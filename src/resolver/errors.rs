/// Errors from resource lookup.
use std::path::PathBuf;

use thiserror::Error;

/// Typed errors raised while resolving a name to resource URLs.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// A matched path could not be read.
    #[error("Cannot read '{}': {source}", path.display())]
    Io {
        /// The path being read.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// Directory expansion failed part-way.
    #[error("Cannot walk directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// A custom resolver gave up on a name.
    #[error("Lookup of '{name}' failed: {message}")]
    Lookup {
        /// The name being resolved.
        name: String,
        /// Resolver-specific reason.
        message: String,
    },
}

/// Shared serializable output types for all commands.
///
/// These types are what gets written to stdout, either as JSON or rendered
/// as a table. They are decoupled from the internal `SourceOptions` type.
use serde::{Deserialize, Serialize};

use crate::source::{SourceError, SourceOptions};

/// Result of classifying a command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifyOutput {
    /// Source URLs in discovery order.
    pub sources: Vec<String>,
    /// Pass-through program arguments (lossy UTF-8).
    pub args: Vec<String>,
    /// Number of source-looking names consumed from the front.
    pub source_arg_count: usize,
}

impl From<&SourceOptions> for ClassifyOutput {
    fn from(opts: &SourceOptions) -> Self {
        Self {
            sources: opts.sources_array().into_vec(),
            args: opts.args_array().into_vec(),
            source_arg_count: opts.source_arg_count(),
        }
    }
}

/// One URL returned by a resolver lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedUrlOutput {
    /// The resource URL.
    pub url: String,
    /// Whether the URL names a script source.
    pub source: bool,
}

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (`snake_case`).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// The offending argument, when there is one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ErrorOutput {
    /// Construct from a `SourceError`.
    #[must_use]
    pub fn from_source_error(err: &SourceError) -> Self {
        let (code, name) = match err {
            SourceError::UnresolvedSource { name } => ("unresolved_source", Some(name.clone())),
            SourceError::NoSources => ("no_sources", None),
            SourceError::FileUrl { .. } => ("file_url", None),
            SourceError::Resolve(_) => ("resolve_failed", None),
        };
        Self {
            ok: false,
            error: ErrorDetail {
                code: code.to_owned(),
                message: err.to_string(),
                name,
            },
        }
    }
}

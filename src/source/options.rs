/// Source argument classification.
///
/// Splits the positional arguments of a script launcher into the script
/// sources to run and the arguments handed to the script. Each argument is
/// checked as a local file first; names that are not local files are passed
/// to an optional [`ResourceResolver`].
///
/// The boundary between sources and program arguments is the number of
/// *source-looking* names seen before `--`, not the position of the last
/// source. Given `x a.java y`, the count is 1 and the program arguments are
/// `a.java y`.
use std::borrow::Cow;
use std::ffi::OsString;
use std::path::Path;

use tracing::{debug, trace};

use super::errors::SourceError;
use super::platform::{is_absolute_windows_path, is_regular_file, to_absolute_file_url};
use super::predicate::is_source;
use crate::resolver::ResourceResolver;

/// Token that ends classification. It and everything after it are dropped.
pub const SEPARATOR: &str = "--";

/// A parsed command line that can hand over its positional arguments.
pub trait NonOptionArguments {
    /// The arguments not recognized as options, in command-line order.
    fn non_option_arguments(&self) -> Vec<OsString>;
}

/// Script sources and pass-through arguments extracted from a command line.
///
/// Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceOptions {
    sources: Vec<String>,
    args: Vec<OsString>,
    source_arg_count: usize,
}

impl SourceOptions {
    /// Classify `arguments`, probing relative names against the current
    /// working directory.
    ///
    /// # Errors
    ///
    /// - `SourceError::UnresolvedSource`: a source-looking name matched nothing
    /// - `SourceError::NoSources`: no source URL was found at all
    /// - `SourceError::Resolve`: the resolver failed
    pub fn new<I, S>(
        arguments: I,
        resolver: Option<&dyn ResourceResolver>,
    ) -> Result<Self, SourceError>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        Self::classify(None, collect(arguments), resolver)
    }

    /// Like [`SourceOptions::new`], but relative names are looked up against
    /// `base_dir` instead of the current working directory.
    ///
    /// # Errors
    ///
    /// Same as [`SourceOptions::new`].
    pub fn new_in<I, S>(
        base_dir: &Path,
        arguments: I,
        resolver: Option<&dyn ResourceResolver>,
    ) -> Result<Self, SourceError>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        Self::classify(Some(base_dir), collect(arguments), resolver)
    }

    /// Classify the positional arguments of an already-parsed command line.
    ///
    /// # Errors
    ///
    /// Same as [`SourceOptions::new`].
    pub fn from_options(
        options: &impl NonOptionArguments,
        resolver: Option<&dyn ResourceResolver>,
    ) -> Result<Self, SourceError> {
        Self::classify(None, options.non_option_arguments(), resolver)
    }

    fn classify(
        base_dir: Option<&Path>,
        mut arguments: Vec<OsString>,
        resolver: Option<&dyn ResourceResolver>,
    ) -> Result<Self, SourceError> {
        let mut sources = Vec::new();
        let mut source_arg_count = 0;
        let mut end = arguments.len();

        for (index, argument) in arguments.iter().enumerate() {
            let Some(name) = argument.to_str() else {
                trace!(index, "skipping non-UTF-8 argument");
                continue;
            };
            if name == SEPARATOR {
                end = index;
                break;
            }

            let urls = candidate_urls(base_dir, name, resolver)?;
            let found = !urls.is_empty();
            sources.extend(urls.into_iter().filter(|url| is_source(url)));

            if is_source(name) {
                if !found {
                    return Err(SourceError::UnresolvedSource {
                        name: name.to_owned(),
                    });
                }
                source_arg_count += 1;
            }
        }

        // Only names before the separator are counted, so the range is valid.
        arguments.truncate(end);
        arguments.drain(..source_arg_count);

        if sources.is_empty() {
            return Err(SourceError::NoSources);
        }

        debug!(
            sources = sources.len(),
            args = arguments.len(),
            source_arg_count,
            "classified arguments"
        );
        Ok(Self {
            sources,
            args: arguments,
            source_arg_count,
        })
    }

    /// Source URLs in discovery order. Never empty.
    #[must_use]
    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    /// Arguments to hand to the program, in command-line order.
    #[must_use]
    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// How many source-looking names were consumed from the front.
    #[must_use]
    pub fn source_arg_count(&self) -> usize {
        self.source_arg_count
    }

    /// Owned snapshot of the source URLs.
    #[must_use]
    pub fn sources_array(&self) -> Box<[String]> {
        self.sources.clone().into_boxed_slice()
    }

    /// Owned snapshot of the program arguments, lossily converted to UTF-8.
    #[must_use]
    pub fn args_array(&self) -> Box<[String]> {
        self.args
            .iter()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect()
    }
}

fn collect<I, S>(arguments: I) -> Vec<OsString>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    arguments.into_iter().map(Into::into).collect()
}

/// URLs a single name stands for: the local file, or whatever the resolver
/// finds. One filesystem check, at most one resolver call.
fn candidate_urls(
    base_dir: Option<&Path>,
    name: &str,
    resolver: Option<&dyn ResourceResolver>,
) -> Result<Vec<String>, SourceError> {
    let path = Path::new(name);
    let local: Cow<'_, Path> = match base_dir {
        Some(dir) if path.is_relative() => Cow::Owned(dir.join(path)),
        _ => Cow::Borrowed(path),
    };

    if is_regular_file(&local) {
        let url = to_absolute_file_url(&local).map_err(|source| SourceError::FileUrl {
            path: local.to_path_buf(),
            source,
        })?;
        trace!(name, %url, "local file");
        return Ok(vec![url]);
    }

    if is_absolute_windows_path(path) {
        trace!(name, "absolute path does not exist; not resolving");
        return Ok(Vec::new());
    }

    match resolver {
        Some(resolver) => {
            let urls = resolver.resolve(name)?;
            trace!(name, hits = urls.len(), "resolver lookup");
            Ok(urls)
        }
        None => Ok(Vec::new()),
    }
}

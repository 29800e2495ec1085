/// Command dispatch: routes `Command` enum variants to their implementations.
pub mod classify;
pub mod resolve;

use std::path::PathBuf;

use crate::cli::OutputCtx;
use crate::cli::args::{Cli, Command};
use crate::resolver::ClasspathResolver;
use crate::source::SourceError;

/// Lookup settings shared by all commands, taken from the global flags.
#[derive(Debug, Clone, Default)]
pub struct LookupConfig {
    /// Resolver for names that are not local files.
    pub resolver: ClasspathResolver,
    /// Base directory for relative names; the working directory when unset.
    pub directory: Option<PathBuf>,
}

impl LookupConfig {
    /// Build from parsed CLI flags. `--classpath` roots come first, then the
    /// roots from `SRCARGS_CLASSPATH`. `-C` applies to the resolver too.
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        let mut resolver = ClasspathResolver::new(cli.classpath.iter().cloned()).with_env_roots();
        if let Some(dir) = &cli.directory {
            resolver = resolver.with_base_dir(dir);
        }
        Self {
            resolver,
            directory: cli.directory.clone(),
        }
    }
}

/// Dispatch a parsed `Command` to its handler.
///
/// # Errors
///
/// Returns `SourceError` on any command failure.
pub fn dispatch(command: &Command, lookup: &LookupConfig, ctx: &OutputCtx) -> Result<(), SourceError> {
    match command {
        Command::Classify(args) => classify::run(args, lookup, ctx),
        Command::Resolve(args) => resolve::run(args, lookup, ctx),
    }
}

/// `resolve` command: show the class path lookup for one name.
use crate::cli::OutputCtx;
use crate::cli::args::ResolveArgs;
use crate::cli::output::write_resolved;
use crate::commands::LookupConfig;
use crate::resolver::ResourceResolver;
use crate::source::{SourceError, is_source};
use crate::types::ResolvedUrlOutput;

/// Run `srcargs resolve`.
///
/// An unknown name prints an empty list; it is not an error.
///
/// # Errors
///
/// Returns `SourceError::Resolve` when the lookup itself fails.
pub fn run(args: &ResolveArgs, lookup: &LookupConfig, ctx: &OutputCtx) -> Result<(), SourceError> {
    let _t = ctx.timer("resolve");
    let urls = lookup.resolver.resolve(&args.name)?;
    drop(_t);

    let mut output: Vec<ResolvedUrlOutput> = urls
        .into_iter()
        .map(|url| ResolvedUrlOutput {
            source: is_source(&url),
            url,
        })
        .collect();

    if args.sources_only {
        output.retain(|entry| entry.source);
    }

    write_resolved(&output, ctx);
    Ok(())
}

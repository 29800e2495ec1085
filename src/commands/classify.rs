/// `classify` command: split arguments into sources and program arguments.
use crate::cli::OutputCtx;
use crate::cli::args::ClassifyArgs;
use crate::cli::output::write_classify;
use crate::commands::LookupConfig;
use crate::source::{NonOptionArguments, SourceError, SourceOptions};
use crate::types::ClassifyOutput;

/// Run `srcargs classify`.
///
/// # Errors
///
/// Returns `SourceError` when a source cannot be found, no source is given,
/// or the class path lookup fails.
pub fn run(args: &ClassifyArgs, lookup: &LookupConfig, ctx: &OutputCtx) -> Result<(), SourceError> {
    let _t = ctx.timer("classify");
    let opts = match &lookup.directory {
        Some(dir) => SourceOptions::new_in(dir, args.non_option_arguments(), Some(&lookup.resolver))?,
        None => SourceOptions::from_options(args, Some(&lookup.resolver))?,
    };
    drop(_t);

    write_classify(&ClassifyOutput::from(&opts), ctx);
    Ok(())
}

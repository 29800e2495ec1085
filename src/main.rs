#![deny(clippy::all, clippy::pedantic)]
//! srcargs — split a script command line into sources and program arguments.

use clap::Parser;

use srcargs::cli::{Cli, OutputCtx, init_tracing, write_error};
use srcargs::commands::{self, LookupConfig};
use srcargs::types::ErrorOutput;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let ctx = OutputCtx::new(cli.output, cli.json, cli.no_header);
    let lookup = LookupConfig::from_cli(&cli);

    match commands::dispatch(&cli.command, &lookup, &ctx) {
        Ok(()) => {}
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            let error_output = ErrorOutput::from_source_error(&err);
            write_error(&error_output, cli.output, cli.json);
            std::process::exit(err.exit_code());
        }
    }
}

/// CLI argument definitions via clap derive.
use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::source::NonOptionArguments;

/// srcargs — split a script command line into sources and program arguments.
#[derive(Debug, Parser)]
#[command(
    name = "srcargs",
    about = "Split a script command line into source files and program arguments",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output format. Auto-detects: table when TTY, json when piped.
    #[arg(long, global = true, value_name = "FORMAT", default_value = "auto")]
    pub output: OutputFormat,

    /// Shorthand for --output json.
    #[arg(long, global = true, conflicts_with = "output")]
    pub json: bool,

    /// Omit table headers.
    #[arg(long, global = true)]
    pub no_header: bool,

    /// Log lookups and timings to stderr.
    #[arg(long, global = true)]
    pub debug: bool,

    /// Directory searched for names that are not local files. Repeatable;
    /// searched in order, before the roots listed in `SRCARGS_CLASSPATH`.
    #[arg(long = "classpath", short = 'p', global = true, value_name = "DIR")]
    pub classpath: Vec<PathBuf>,

    /// Look up relative names against DIR instead of the working directory.
    #[arg(long, short = 'C', global = true, value_name = "DIR")]
    pub directory: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Auto-detect: table when stdout is a TTY, json when piped.
    #[default]
    Auto,
    /// JSON object (pretty-printed).
    Json,
    /// Compact single-line JSON.
    Compact,
    /// Newline-delimited JSON (one object per line).
    Ndjson,
    /// Aligned table with headers (human-readable).
    Table,
    /// URLs only, one per line (for piping to other commands).
    Url,
}

/// All subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Split arguments into source URLs and pass-through program arguments.
    Classify(ClassifyArgs),
    /// Show what the class path lookup returns for a name.
    Resolve(ResolveArgs),
}

/// Arguments for `srcargs classify`.
#[derive(Debug, Parser)]
pub struct ClassifyArgs {
    /// Source files followed by program arguments. Everything from `--`
    /// on is dropped. Options must come before the first argument.
    #[arg(
        value_name = "ARGS",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub arguments: Vec<OsString>,
}

impl NonOptionArguments for ClassifyArgs {
    fn non_option_arguments(&self) -> Vec<OsString> {
        self.arguments.clone()
    }
}

/// Arguments for `srcargs resolve`.
#[derive(Debug, Parser)]
pub struct ResolveArgs {
    /// Name to look up: a path, a glob, or a `classpath:` / `file:` location.
    pub name: String,

    /// Only list URLs that name script sources.
    #[arg(long)]
    pub sources_only: bool,
}

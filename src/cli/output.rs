/// Output formatting: JSON, table, url modes. TTY detection.
use std::io::{IsTerminal, Write};

use comfy_table::{Table, presets::UTF8_BORDERS_ONLY};
use serde::Serialize;

use super::args::OutputFormat;
use crate::types::{ClassifyOutput, ErrorOutput, ResolvedUrlOutput};

/// Resolve the effective output format, handling `--json` flag and TTY auto-detection.
#[must_use]
pub fn resolve_format(fmt: OutputFormat, json_flag: bool) -> OutputFormat {
    if json_flag {
        return OutputFormat::Json;
    }
    if fmt == OutputFormat::Auto {
        if std::io::stdout().is_terminal() {
            OutputFormat::Table
        } else {
            OutputFormat::Json
        }
    } else {
        fmt
    }
}

/// Output context passed to all formatters.
pub struct OutputCtx {
    pub format: OutputFormat,
    pub no_header: bool,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(fmt: OutputFormat, json_flag: bool, no_header: bool) -> Self {
        Self {
            format: resolve_format(fmt, json_flag),
            no_header,
        }
    }

    /// Start a named timer. Reports elapsed time as a debug event on drop.
    #[must_use]
    pub fn timer(&self, label: &'static str) -> DebugTimer {
        DebugTimer::new(label)
    }
}

// --- Classification ---

/// Write a classification result to stdout.
pub fn write_classify(result: &ClassifyOutput, ctx: &OutputCtx) {
    let mut out = std::io::stdout().lock();
    if let Err(e) = render_classify(&mut out, result, ctx) {
        eprintln!("Output error: {e}");
    }
}

fn render_classify(
    out: &mut impl Write,
    result: &ClassifyOutput,
    ctx: &OutputCtx,
) -> std::io::Result<()> {
    match ctx.format {
        OutputFormat::Json => write_json(out, result),
        OutputFormat::Compact => write_compact_json(out, result),
        OutputFormat::Ndjson => write_ndjson(out, std::slice::from_ref(result)),
        OutputFormat::Url => {
            for source in &result.sources {
                writeln!(out, "{source}")?;
            }
            Ok(())
        }
        OutputFormat::Table | OutputFormat::Auto => {
            let mut table = Table::new();
            table.load_preset(UTF8_BORDERS_ONLY);
            if !ctx.no_header {
                table.set_header(["KIND", "VALUE"]);
            }
            for source in &result.sources {
                table.add_row(["source", source.as_str()]);
            }
            for arg in &result.args {
                table.add_row(["arg", arg.as_str()]);
            }
            writeln!(out, "{table}")
        }
    }
}

// --- Resolver lookups ---

/// Write resolved URLs to stdout.
pub fn write_resolved(urls: &[ResolvedUrlOutput], ctx: &OutputCtx) {
    let mut out = std::io::stdout().lock();
    if let Err(e) = render_resolved(&mut out, urls, ctx) {
        eprintln!("Output error: {e}");
    }
}

fn render_resolved(
    out: &mut impl Write,
    urls: &[ResolvedUrlOutput],
    ctx: &OutputCtx,
) -> std::io::Result<()> {
    match ctx.format {
        OutputFormat::Json => write_json(out, urls),
        OutputFormat::Compact => write_compact_json(out, urls),
        OutputFormat::Ndjson => write_ndjson(out, urls),
        OutputFormat::Url => {
            for entry in urls {
                writeln!(out, "{}", entry.url)?;
            }
            Ok(())
        }
        OutputFormat::Table | OutputFormat::Auto => {
            let mut table = Table::new();
            table.load_preset(UTF8_BORDERS_ONLY);
            if !ctx.no_header {
                table.set_header(["URL", "SOURCE"]);
            }
            for entry in urls {
                table.add_row([entry.url.as_str(), if entry.source { "yes" } else { "" }]);
            }
            writeln!(out, "{table}")
        }
    }
}

// --- Error output ---

/// Write a structured error to stderr.
pub fn write_error(err: &ErrorOutput, format: OutputFormat, json_flag: bool) {
    let fmt = resolve_format(format, json_flag);
    let mut out = std::io::stderr().lock();
    match fmt {
        OutputFormat::Json | OutputFormat::Compact | OutputFormat::Ndjson => {
            let s = serde_json::to_string_pretty(err).unwrap_or_default();
            let _ = writeln!(out, "{s}");
        }
        _ => {
            let _ = writeln!(out, "Error: {}", err.error.message);
        }
    }
}

// --- Debug timer ---

/// A RAII timer that emits elapsed milliseconds as a `tracing` debug event on drop.
///
/// Created via [`OutputCtx::timer`]. Silent unless debug logging is enabled.
pub struct DebugTimer {
    label: &'static str,
    start: std::time::Instant,
}

impl DebugTimer {
    #[must_use]
    fn new(label: &'static str) -> Self {
        Self {
            label,
            start: std::time::Instant::now(),
        }
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        let ms = self.start.elapsed().as_secs_f64() * 1000.0;
        tracing::debug!(label = self.label, elapsed_ms = ms, "timing");
    }
}

// --- Generic JSON helpers ---

fn write_json<T: Serialize + ?Sized>(out: &mut impl Write, value: &T) -> std::io::Result<()> {
    let s = serde_json::to_string_pretty(value)?;
    writeln!(out, "{s}")
}

fn write_compact_json<T: Serialize + ?Sized>(
    out: &mut impl Write,
    value: &T,
) -> std::io::Result<()> {
    let s = serde_json::to_string(value)?;
    writeln!(out, "{s}")
}

fn write_ndjson<T: Serialize>(out: &mut impl Write, values: &[T]) -> std::io::Result<()> {
    for v in values {
        let s = serde_json::to_string(v)?;
        writeln!(out, "{s}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(format: OutputFormat) -> OutputCtx {
        OutputCtx {
            format,
            no_header: false,
        }
    }

    fn sample() -> ClassifyOutput {
        ClassifyOutput {
            sources: vec!["file:/w/app.groovy".to_owned()],
            args: vec!["x".to_owned(), "y".to_owned()],
            source_arg_count: 1,
        }
    }

    fn render(result: &ClassifyOutput, format: OutputFormat) -> String {
        let mut buf = Vec::new();
        render_classify(&mut buf, result, &ctx(format)).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_json_flag_wins() {
        assert_eq!(resolve_format(OutputFormat::Table, true), OutputFormat::Json);
        assert_eq!(resolve_format(OutputFormat::Url, false), OutputFormat::Url);
    }

    #[test]
    fn test_classify_compact_json() {
        let text = render(&sample(), OutputFormat::Compact);
        assert_eq!(
            text,
            "{\"sources\":[\"file:/w/app.groovy\"],\"args\":[\"x\",\"y\"],\"source_arg_count\":1}\n"
        );
    }

    #[test]
    fn test_classify_url_lines() {
        let text = render(&sample(), OutputFormat::Url);
        assert_eq!(text, "file:/w/app.groovy\n");
    }

    #[test]
    fn test_classify_table_lists_both_kinds() {
        let text = render(&sample(), OutputFormat::Table);
        assert!(text.contains("KIND"));
        assert!(text.contains("file:/w/app.groovy"));
        assert!(text.contains("arg"));
        assert!(text.contains('y'));
    }

    #[test]
    fn test_resolved_ndjson() {
        let urls = vec![
            ResolvedUrlOutput {
                url: "file:/lib/a.groovy".to_owned(),
                source: true,
            },
            ResolvedUrlOutput {
                url: "file:/lib/a.txt".to_owned(),
                source: false,
            },
        ];
        let mut buf = Vec::new();
        render_resolved(&mut buf, &urls, &ctx(OutputFormat::Ndjson)).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], r#"{"url":"file:/lib/a.groovy","source":true}"#);
    }
}

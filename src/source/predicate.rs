/// Source file detection by name suffix.

/// Suffixes that mark a script source.
pub const SOURCE_SUFFIXES: [&str; 2] = [".java", ".groovy"];

/// Whether `name` looks like a script source.
///
/// Plain byte-wise suffix check: no case folding, no path normalization.
/// Works on file names and on URLs alike.
#[must_use]
pub fn is_source(name: &str) -> bool {
    SOURCE_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
}

/// Class-path style lookup over a list of root directories.
///
/// Lookup rules, per name:
///
/// 1. `classpath:` or `classpath*:` prefix: search the roots only.
/// 2. `file:` prefix: the remainder is a filesystem path; roots are ignored.
/// 3. No prefix: the filesystem path first, then every root with leading
///    slashes stripped from the name.
///
/// Relative filesystem paths are taken against the base directory when one
/// is set, otherwise against the working directory.
///
/// Only `*`, `?` and `**` in the name are wildcards; brackets are literal,
/// and roots and the base directory are never read as patterns. A name
/// that does not form a valid pattern is looked up literally. A match that
/// is a directory expands to every regular file below it. Hits are
/// returned as absolute `file:` URLs, de-duplicated in first-seen order.
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use glob::Pattern;
use tracing::{debug, trace};
use walkdir::WalkDir;

use super::ResourceResolver;
use super::errors::ResolveError;
use crate::source::platform::{FILE_URL_PREFIX, to_absolute_file_url};

/// Environment variable holding extra roots, in the platform's path-list format.
pub const CLASSPATH_ENV: &str = "SRCARGS_CLASSPATH";

const CLASSPATH_PREFIX: &str = "classpath:";
const ALL_CLASSPATH_PREFIX: &str = "classpath*:";

/// Resolves names against an ordered list of root directories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClasspathResolver {
    roots: Vec<PathBuf>,
    base_dir: Option<PathBuf>,
}

impl ClasspathResolver {
    /// Create a resolver searching `roots` in order.
    #[must_use]
    pub fn new(roots: impl IntoIterator<Item = PathBuf>) -> Self {
        Self {
            roots: roots.into_iter().collect(),
            base_dir: None,
        }
    }

    /// Take relative filesystem paths against `dir`.
    #[must_use]
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    /// Append the roots listed in [`CLASSPATH_ENV`], if set.
    #[must_use]
    pub fn with_env_roots(mut self) -> Self {
        if let Some(list) = std::env::var_os(CLASSPATH_ENV) {
            self.roots
                .extend(std::env::split_paths(&list).filter(|p| !p.as_os_str().is_empty()));
        }
        self
    }

    /// The search roots, in lookup order.
    #[must_use]
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    fn search_roots(&self, name: &str, found: &mut Found) -> Result<(), ResolveError> {
        let relative = name.trim_start_matches(['/', '\\']);
        for root in &self.roots {
            collect_matches(Some(root), relative, found)?;
        }
        Ok(())
    }
}

impl ResourceResolver for ClasspathResolver {
    fn resolve(&self, name: &str) -> Result<Vec<String>, ResolveError> {
        let mut found = Found::default();
        let base_dir = self.base_dir.as_deref();

        if let Some(rest) = name
            .strip_prefix(ALL_CLASSPATH_PREFIX)
            .or_else(|| name.strip_prefix(CLASSPATH_PREFIX))
        {
            self.search_roots(rest, &mut found)?;
        } else if let Some(rest) = name.strip_prefix(FILE_URL_PREFIX) {
            collect_matches(base_dir, rest, &mut found)?;
        } else {
            collect_matches(base_dir, name, &mut found)?;
            self.search_roots(name, &mut found)?;
        }

        debug!(name, hits = found.urls.len(), roots = self.roots.len(), "classpath lookup");
        Ok(found.urls)
    }
}

/// URLs collected so far, in first-seen order.
#[derive(Default)]
struct Found {
    urls: Vec<String>,
    seen: HashSet<String>,
}

impl Found {
    fn push(&mut self, url: String) {
        if self.seen.insert(url.clone()) {
            self.urls.push(url);
        }
    }
}

fn has_wildcard(name: &str) -> bool {
    name.contains(['*', '?'])
}

/// Glob pattern for `name` under `dir`: the directory is escaped whole and
/// brackets in the name stay literal.
fn pattern_for(dir: Option<&Path>, name: &str) -> String {
    let mut pattern = String::new();
    if let Some(dir) = dir {
        let dir = dir.to_string_lossy();
        pattern.push_str(&Pattern::escape(dir.trim_end_matches(['/', '\\'])));
        pattern.push('/');
    }
    for ch in name.chars() {
        match ch {
            '[' => pattern.push_str("[[]"),
            ']' => pattern.push_str("[]]"),
            _ => pattern.push(ch),
        }
    }
    pattern
}

/// Add every file matching `name` under `dir` (or the working directory).
fn collect_matches(dir: Option<&Path>, name: &str, found: &mut Found) -> Result<(), ResolveError> {
    if name.is_empty() {
        return Ok(());
    }

    let relative = Path::new(name).is_relative();
    let dir = dir.filter(|_| relative);
    let literal = match dir {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    };
    if !has_wildcard(name) {
        return collect_path(&literal, found);
    }

    let pattern = pattern_for(dir, name);
    let entries = match glob::glob(&pattern) {
        Ok(entries) => entries,
        Err(err) => {
            trace!(%pattern, %err, "not a valid pattern; looking up literally");
            return collect_path(&literal, found);
        }
    };
    for entry in entries {
        let matched = entry.map_err(|err| ResolveError::Io {
            path: err.path().to_path_buf(),
            source: err.into_error(),
        })?;
        collect_path(&matched, found)?;
    }
    Ok(())
}

/// Add `path` if it is a file, or every file below it if it is a directory.
fn collect_path(path: &Path, found: &mut Found) -> Result<(), ResolveError> {
    if path.is_dir() {
        for entry in WalkDir::new(path).follow_links(true).sort_by_file_name() {
            let entry = entry?;
            if entry.file_type().is_file() {
                push_url(entry.path(), found)?;
            }
        }
    } else if path.is_file() {
        push_url(path, found)?;
    } else {
        trace!(path = %path.display(), "no match");
    }
    Ok(())
}

fn push_url(path: &Path, found: &mut Found) -> Result<(), ResolveError> {
    let url = to_absolute_file_url(path).map_err(|source| ResolveError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    found.push(url);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(root: &Path, relative: &str) -> PathBuf {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, "").unwrap();
        path
    }

    fn url(path: &Path) -> String {
        to_absolute_file_url(path).unwrap()
    }

    #[test]
    fn test_classpath_prefix_searches_roots() {
        let root = tempfile::tempdir().unwrap();
        let lib = touch(root.path(), "lib/util.groovy");
        let resolver = ClasspathResolver::new([root.path().to_path_buf()]);

        let urls = resolver.resolve("classpath:lib/util.groovy").unwrap();
        assert_eq!(urls, vec![url(&lib)]);

        let urls = resolver.resolve("classpath*:/lib/util.groovy").unwrap();
        assert_eq!(urls, vec![url(&lib)]);
    }

    #[test]
    fn test_roots_searched_in_order() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        let a = touch(first.path(), "app.groovy");
        let b = touch(second.path(), "app.groovy");
        let resolver =
            ClasspathResolver::new([first.path().to_path_buf(), second.path().to_path_buf()]);

        let urls = resolver.resolve("app.groovy").unwrap();
        assert_eq!(urls, vec![url(&a), url(&b)]);
    }

    #[test]
    fn test_unknown_name_is_empty() {
        let root = tempfile::tempdir().unwrap();
        let resolver = ClasspathResolver::new([root.path().to_path_buf()]);
        assert!(resolver.resolve("missing.java").unwrap().is_empty());
        assert!(ClasspathResolver::default().resolve("missing.java").unwrap().is_empty());
    }

    #[test]
    fn test_directory_expands_to_files() {
        let root = tempfile::tempdir().unwrap();
        let b = touch(root.path(), "scripts/b.groovy");
        let a = touch(root.path(), "scripts/a.java");
        let nested = touch(root.path(), "scripts/nested/c.txt");
        let resolver = ClasspathResolver::new([root.path().to_path_buf()]);

        let urls = resolver.resolve("classpath:scripts").unwrap();
        assert_eq!(urls, vec![url(&a), url(&b), url(&nested)]);
    }

    #[test]
    fn test_glob_pattern() {
        let root = tempfile::tempdir().unwrap();
        let a = touch(root.path(), "a.groovy");
        let b = touch(root.path(), "b.groovy");
        touch(root.path(), "notes.txt");
        let resolver = ClasspathResolver::new([root.path().to_path_buf()]);

        let urls = resolver.resolve("classpath:*.groovy").unwrap();
        assert_eq!(urls, vec![url(&a), url(&b)]);
    }

    #[test]
    fn test_brackets_are_literal() {
        let root = tempfile::tempdir().unwrap();
        let file = touch(root.path(), "[x].groovy");
        let resolver = ClasspathResolver::new([root.path().to_path_buf()]);

        assert!(resolver.resolve("[unclosed").unwrap().is_empty());
        assert!(resolver.resolve("classpath:[x").unwrap().is_empty());
        assert_eq!(resolver.resolve("[x].groovy").unwrap(), vec![url(&file)]);
        assert_eq!(resolver.resolve("[x]*.groovy").unwrap(), vec![url(&file)]);
    }

    #[test]
    fn test_invalid_pattern_falls_back_to_literal() {
        let root = tempfile::tempdir().unwrap();
        let file = touch(root.path(), "a***b.groovy");
        let resolver = ClasspathResolver::new([root.path().to_path_buf()]);

        assert_eq!(resolver.resolve("a***b.groovy").unwrap(), vec![url(&file)]);
        assert!(resolver.resolve("x***y.groovy").unwrap().is_empty());
    }

    #[test]
    fn test_root_with_glob_characters() {
        let parent = tempfile::tempdir().unwrap();
        let root = parent.path().join("lib[1]");
        let util = touch(&root, "util.groovy");
        let other = touch(&root, "other.groovy");
        let resolver = ClasspathResolver::new([root.clone()]);

        assert_eq!(resolver.resolve("util.groovy").unwrap(), vec![url(&util)]);
        assert_eq!(
            resolver.resolve("classpath:*.groovy").unwrap(),
            vec![url(&other), url(&util)]
        );
    }

    #[test]
    fn test_base_dir_with_glob_characters() {
        let parent = tempfile::tempdir().unwrap();
        let work = parent.path().join("work?[a]");
        let file = touch(&work, "app.groovy");
        let resolver = ClasspathResolver::default().with_base_dir(&work);

        assert_eq!(resolver.resolve("app.groovy").unwrap(), vec![url(&file)]);
        assert_eq!(resolver.resolve("*.groovy").unwrap(), vec![url(&file)]);
    }

    #[test]
    fn test_found_keeps_first_seen_order() {
        let mut found = Found::default();
        for url in ["file:/b", "file:/a", "file:/b", "file:/c", "file:/a"] {
            found.push(url.to_string());
        }
        assert_eq!(found.urls, ["file:/b", "file:/a", "file:/c"]);
        assert_eq!(found.seen.len(), 3);
    }

    #[test]
    fn test_roots_keep_order() {
        let resolver = ClasspathResolver::new([PathBuf::from("b"), PathBuf::from("a")]);
        assert_eq!(resolver.roots(), [PathBuf::from("b"), PathBuf::from("a")]);
        assert!(ClasspathResolver::default().roots().is_empty());
    }

    #[test]
    fn test_file_prefix_ignores_roots() {
        let root = tempfile::tempdir().unwrap();
        touch(root.path(), "app.groovy");
        let elsewhere = tempfile::tempdir().unwrap();
        let local = touch(elsewhere.path(), "app.groovy");
        let resolver = ClasspathResolver::new([root.path().to_path_buf()]);

        let name = format!("{FILE_URL_PREFIX}{}", local.display());
        let urls = resolver.resolve(&name).unwrap();
        assert_eq!(urls, vec![url(&local)]);
    }

    #[test]
    fn test_base_dir_for_relative_paths() {
        let work = tempfile::tempdir().unwrap();
        let file = touch(work.path(), "scripts/app.groovy");
        let resolver = ClasspathResolver::default().with_base_dir(work.path());

        assert_eq!(resolver.resolve("scripts").unwrap(), vec![url(&file)]);
        assert_eq!(resolver.resolve("file:scripts/app.groovy").unwrap(), vec![url(&file)]);
    }

    #[test]
    fn test_plain_path_and_root_deduplicated() {
        let root = tempfile::tempdir().unwrap();
        let file = touch(root.path(), "app.groovy");
        let resolver = ClasspathResolver::new([root.path().to_path_buf(), root.path().to_path_buf()]);

        let urls = resolver.resolve("app.groovy").unwrap();
        assert_eq!(urls, vec![url(&file)]);
    }
}

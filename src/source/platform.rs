/// Host platform checks, local file checks and `file:` URL conversion.
use std::fmt::Write as _;
use std::io;
use std::path::{MAIN_SEPARATOR, Path};

/// URL scheme prefix used for local files.
pub const FILE_URL_PREFIX: &str = "file:";

/// Whether the host uses `\` as its native path separator.
#[must_use]
pub fn is_windows_host() -> bool {
    MAIN_SEPARATOR == '\\'
}

/// Whether `path` is an absolute path on a Windows host.
///
/// Always false on other hosts. Such paths are never handed to a resource
/// resolver, which would read `C:\...` as a logical name.
#[must_use]
pub fn is_absolute_windows_path(path: &Path) -> bool {
    is_windows_host() && path.is_absolute()
}

/// Whether a regular file exists at `path`. Symlinks are followed.
#[must_use]
pub fn is_regular_file(path: &Path) -> bool {
    std::fs::metadata(path).is_ok_and(|meta| meta.is_file())
}

/// Convert `path` into a `file:` URL of its absolute form.
///
/// The result has a single slash after the scheme (`file:/home/me/a.java`).
/// Relative paths are made absolute against the current working directory
/// without touching the filesystem, so symlinks are kept as written. ASCII
/// characters that are not legal in a URI path are percent-encoded; other
/// characters are kept as-is.
///
/// # Errors
///
/// Returns an I/O error if the path is empty or the current directory
/// cannot be determined.
pub fn to_absolute_file_url(path: &Path) -> io::Result<String> {
    let absolute = std::path::absolute(path)?;
    let mut text = absolute.to_string_lossy().into_owned();
    if is_windows_host() {
        text = text.replace('\\', "/");
        if !text.starts_with('/') {
            text.insert(0, '/');
        }
    }

    let mut url = String::with_capacity(FILE_URL_PREFIX.len() + text.len());
    url.push_str(FILE_URL_PREFIX);
    for ch in text.chars() {
        if ch.is_ascii() && !is_uri_path_char(ch) {
            let _ = write!(url, "%{:02X}", u32::from(ch));
        } else {
            url.push(ch);
        }
    }
    Ok(url)
}

fn is_uri_path_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric()
        || matches!(
            ch,
            '/' | '-' | '.' | '_' | '~' | '!' | '$' | '&' | '\'' | '(' | ')' | '*' | '+' | ','
                | ';' | '=' | ':' | '@'
        )
}

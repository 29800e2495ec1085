/// Resource resolution: map names that are not local files to URLs.
pub mod classpath;
pub mod errors;

pub use classpath::{CLASSPATH_ENV, ClasspathResolver};
pub use errors::ResolveError;

/// Looks up names outside the local filesystem (e.g. on a class path).
///
/// Any lookup context (search roots, loaders) lives in the resolver value
/// itself. Returned strings are URLs; callers only inspect their suffix.
pub trait ResourceResolver {
    /// Return every URL matching `name`, possibly none.
    ///
    /// # Errors
    ///
    /// Returns `ResolveError` when the lookup itself fails. An unknown name
    /// is not an error; it yields an empty list.
    fn resolve(&self, name: &str) -> Result<Vec<String>, ResolveError>;
}

impl<F> ResourceResolver for F
where
    F: Fn(&str) -> Result<Vec<String>, ResolveError>,
{
    fn resolve(&self, name: &str) -> Result<Vec<String>, ResolveError> {
        self(name)
    }
}

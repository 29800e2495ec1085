/// Source argument layer: predicate, platform checks, classification.
pub mod errors;
pub mod options;
pub mod platform;
pub mod predicate;

pub use errors::SourceError;
pub use options::{NonOptionArguments, SEPARATOR, SourceOptions};
pub use predicate::is_source;

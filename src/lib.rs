#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! srcargs — split a script launcher's command line into source files and
//! pass-through program arguments.
//!
//! The core is [`source::SourceOptions`]: give it the positional arguments
//! and, optionally, a [`resolver::ResourceResolver`] for names that are not
//! local files.

pub mod cli;
pub mod commands;
pub mod resolver;
pub mod source;
pub mod types;

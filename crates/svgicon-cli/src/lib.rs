//! svgicon CLI library.
//!
//! Argument model, source resolution, directory scanning, prompting, and
//! the generate/regenerate pipelines behind the `svgicon` binary, exposed
//! so they can be tested without spawning the process.

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod cli;
pub mod commands;
pub mod formatters;
pub mod prompt;
pub mod scanner;
pub mod sources;

pub use cli::{Cli, DirectInput};

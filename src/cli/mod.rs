//! CLI layer: the `tango` launcher declared through the registry, and its dispatch

pub mod args;
pub mod commands;
pub mod error;
pub mod output;

pub use args::{Answer, Method, TangoCli};
pub use error::{CliError, CliResult};

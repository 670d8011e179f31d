//! Application layer: registry lifecycle, argument scanning, validation and usage output
//!
//! This layer orchestrates the domain types; it writes only to the sinks it is given.

pub mod alphabet;
pub mod error;
pub mod parser;
pub mod registry;
pub mod usage;
pub mod validator;

pub use alphabet::OptionAlphabet;
pub use error::{ApplicationError, ApplicationResult, ParseError, ParseFailure};
pub use parser::{ArgParser, ScanOutcome};
pub use registry::{CliRegistry, FinalizedRegistry, ParsedArgs, RuleFn, METHOD_SELECTOR};
pub use usage::{ColumnWidths, UsageRenderer};
pub use validator::Validator;

//! Method-based command lines declared once.
//!
//! An application declares its options as shared [`CliOption`] values and, per method,
//! which of them are mandatory and which optional. [`CliRegistry::finalize`] checks the
//! declarations; the resulting [`FinalizedRegistry`] parses getopt-style argument
//! vectors, reports every missing mandatory option, and renders a usage table.
//!
//! ```
//! use methodcli::{choice, CliOption, CliRegistry};
//!
//! choice! {
//!     pub enum Mode {
//!         Learn => "learn",
//!         Quiz => "quiz",
//!     }
//! }
//!
//! let rounds = CliOption::<u32>::value('r', "Rounds.").with_default(10).shared();
//! let mut registry = CliRegistry::<Mode>::new();
//! registry.method(Mode::Learn).describe("Learn").mandatory(&[&rounds]);
//! registry.method(Mode::Quiz).describe("Quiz").optional(&[&rounds]);
//! let registry = registry.finalize().unwrap();
//!
//! let parsed = registry.parse_args(["app", "-m", "quiz", "-r", "3"]).unwrap();
//! assert_eq!(parsed.method(), Mode::Quiz);
//! assert_eq!(rounds.effective_value(), Some(3));
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use application::{
    CliRegistry, FinalizedRegistry, ParseError, ParseFailure, ParsedArgs, METHOD_SELECTOR,
};
pub use domain::{Choice, CliOption, DeclarationError, OptionValue, ValueError};

//! Domain layer: options, methods and value conversion
//!
//! This layer is independent of external concerns (no argv scanning, no output, no config loading).

pub mod choice;
pub mod error;
pub mod method;
pub mod option;
pub mod value;

pub use choice::Choice;
pub use error::{DeclarationError, ValueError};
pub use method::{MethodSpec, OptionEntry};
pub use option::{AsOptionRef, CliOption, OptionCell, OptionKind, OptionRef};
pub use value::OptionValue;

//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Why a raw command-line text could not become a typed option value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    #[error("'{raw}' is not a valid {expected}")]
    Malformed { raw: String, expected: &'static str },

    #[error("'{raw}' is out of range for {expected}")]
    OutOfRange { raw: String, expected: &'static str },

    #[error("'{raw}' is not one of [{choices}]")]
    UnknownChoice { raw: String, choices: String },

    #[error("option requires an argument")]
    MissingArgument,

    #[error("flag takes no argument, got '{0}'")]
    UnexpectedArgument(String),
}

/// Declaration errors are wiring mistakes made by the program, not by its user.
/// They surface from `CliRegistry::finalize` and must stop the program at startup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeclarationError {
    #[error("method '{method}' description is empty")]
    EmptyDescription { method: String },

    #[error("option '{option}' is declared both mandatory and optional for method '{method}'")]
    ConflictingRequirement { method: String, option: char },

    #[error("option name '{option}' is duplicated")]
    DuplicateName { option: char },

    #[error("option name '{option}' is reserved for the method selector")]
    ReservedName { option: char },

    #[error("option name '{option}' is not an ASCII letter or digit")]
    InvalidName { option: char },
}

//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::{ApplicationError, ParseFailure};
use crate::domain::DeclarationError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl From<DeclarationError> for CliError {
    fn from(e: DeclarationError) -> Self {
        Self::Application(e.into())
    }
}

impl From<ParseFailure> for CliError {
    fn from(e: ParseFailure) -> Self {
        Self::Application(e.into())
    }
}

impl CliError {
    /// Create an I/O error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Application(e) => match e {
                ApplicationError::Parse(_) => crate::exitcode::USAGE,
                ApplicationError::Declaration(_) => crate::exitcode::SOFTWARE,
                ApplicationError::Config { .. } => crate::exitcode::CONFIG,
            },
            CliError::Io { .. } => crate::exitcode::IOERR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ParseError;

    #[test]
    fn test_exit_codes_follow_error_layer() {
        let parse: CliError = ParseFailure::new(vec![ParseError::MethodNotPresented]).into();
        let declaration: CliError = DeclarationError::DuplicateName { option: 'r' }.into();
        let config = CliError::Application(ApplicationError::Config {
            message: "bad".to_string(),
        });

        assert_eq!(parse.exit_code(), crate::exitcode::USAGE);
        assert_eq!(declaration.exit_code(), crate::exitcode::SOFTWARE);
        assert_eq!(config.exit_code(), crate::exitcode::CONFIG);
    }
}

//! Application-level errors (wraps domain errors)

use std::fmt;

use thiserror::Error;

use crate::domain::{DeclarationError, ValueError};

/// One problem found while scanning or validating an argument vector.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown option '-{0}'")]
    UnknownOption(char),

    #[error("option '-{option}' parsing failure: {source}")]
    InvalidValue {
        option: char,
        #[source]
        source: ValueError,
    },

    #[error("unknown method '{name}', expected one of [{choices}]")]
    UnknownMethod { name: String, choices: String },

    #[error("unexpected argument '{0}'")]
    UnexpectedPositional(String),

    #[error("method is not presented")]
    MethodNotPresented,

    #[error("mandatory option '-{option}' is not presented")]
    MissingMandatory { option: char },

    #[error("{0}")]
    Rule(String),
}

/// Every [`ParseError`] of one parse pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseFailure(Vec<ParseError>);

impl ParseFailure {
    pub const fn new(errors: Vec<ParseError>) -> Self {
        Self(errors)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParseError> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, error: &ParseError) -> bool {
        self.0.contains(error)
    }

    /// Names of the mandatory options reported missing, in report order.
    pub fn missing_options(&self) -> Vec<char> {
        self.0
            .iter()
            .filter_map(|error| match error {
                ParseError::MissingMandatory { option } => Some(*option),
                _ => None,
            })
            .collect()
    }
}

impl fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseFailure {}

impl<'a> IntoIterator for &'a ParseFailure {
    type Item = &'a ParseError;
    type IntoIter = std::slice::Iter<'a, ParseError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for ParseFailure {
    type Item = ParseError;
    type IntoIter = std::vec::IntoIter<ParseError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Application errors wrap domain errors and add parse and settings failures.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Declaration(#[from] DeclarationError),

    #[error("{0}")]
    Parse(#[from] ParseFailure),

    #[error("config error: {message}")]
    Config { message: String },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_display_lists_every_error() {
        let failure = ParseFailure::new(vec![
            ParseError::UnknownOption('x'),
            ParseError::MissingMandatory { option: 'd' },
        ]);

        assert_eq!(
            failure.to_string(),
            "unknown option '-x'\nmandatory option '-d' is not presented"
        );
        assert_eq!(failure.missing_options(), vec!['d']);
    }

    #[test]
    fn test_invalid_value_names_option_and_cause() {
        let error = ParseError::InvalidValue {
            option: 'r',
            source: ValueError::Malformed {
                raw: "abc".to_string(),
                expected: "u32",
            },
        };

        assert_eq!(
            error.to_string(),
            "option '-r' parsing failure: 'abc' is not a valid u32"
        );
    }
}

//! Single left-to-right scan of an argument vector against the option alphabet.
//!
//! Follows getopt: `-r5` and `-r 5` both give `r` the value `5`, the token after a
//! value option is taken verbatim even when it starts with `-`, and `--` ends option
//! processing. Errors are collected and the scan goes on.

use std::collections::BTreeSet;

use tracing::{debug, trace};

use crate::application::error::ParseError;
use crate::application::registry::{FinalizedRegistry, METHOD_SELECTOR};
use crate::domain::choice::parse_choice;
use crate::domain::{Choice, OptionKind, ValueError};

/// What one scan found: the selected method (last valid `-m` wins), every error, and
/// the options whose values were rejected.
#[derive(Debug)]
pub struct ScanOutcome<M> {
    pub method: Option<M>,
    pub errors: Vec<ParseError>,
    pub invalid: BTreeSet<char>,
}

impl<M> ScanOutcome<M> {
    fn reject(&mut self, error: ParseError) {
        debug!(%error, "argument rejected");
        self.errors.push(error);
    }
}

pub struct ArgParser<'r, M: Choice> {
    registry: &'r FinalizedRegistry<M>,
}

impl<'r, M: Choice> ArgParser<'r, M> {
    pub fn new(registry: &'r FinalizedRegistry<M>) -> Self {
        Self { registry }
    }

    /// Scan `args`; the first element is the program name and is skipped.
    ///
    /// Every indexed option is reset first, so values from an earlier pass never leak.
    pub fn scan<I, S>(&self, args: I) -> ScanOutcome<M>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for option in self.registry.options() {
            option.reset();
        }

        let mut outcome = ScanOutcome {
            method: None,
            errors: Vec::new(),
            invalid: BTreeSet::new(),
        };
        let mut tokens = args
            .into_iter()
            .skip(1)
            .map(|arg| arg.as_ref().to_string());

        while let Some(token) = tokens.next() {
            if token == "--" {
                for rest in tokens.by_ref() {
                    outcome.reject(ParseError::UnexpectedPositional(rest));
                }
                break;
            }

            let mut chars = token.chars();
            let name = match (chars.next(), chars.next()) {
                (Some('-'), Some(name)) => name,
                _ => {
                    outcome.reject(ParseError::UnexpectedPositional(token.clone()));
                    continue;
                }
            };
            let attached = chars.as_str();

            let raw = match self.registry.alphabet().lookup(name) {
                None => {
                    outcome.reject(ParseError::UnknownOption(name));
                    continue;
                }
                Some(OptionKind::Flag) if !attached.is_empty() => {
                    outcome.invalid.insert(name);
                    outcome.reject(ParseError::InvalidValue {
                        option: name,
                        source: ValueError::UnexpectedArgument(attached.to_string()),
                    });
                    continue;
                }
                Some(OptionKind::Flag) => None,
                Some(OptionKind::Value) if !attached.is_empty() => Some(attached.to_string()),
                Some(OptionKind::Value) => match tokens.next() {
                    Some(next) => Some(next),
                    None => {
                        outcome.invalid.insert(name);
                        outcome.reject(ParseError::InvalidValue {
                            option: name,
                            source: ValueError::MissingArgument,
                        });
                        continue;
                    }
                },
            };

            trace!(option = %name, value = ?raw, "option found");
            if name == METHOD_SELECTOR {
                self.select_method(raw.as_deref(), &mut outcome);
            } else {
                self.dispatch(name, raw.as_deref(), &mut outcome);
            }
        }

        outcome
    }

    fn select_method(&self, raw: Option<&str>, outcome: &mut ScanOutcome<M>) {
        let raw = raw.unwrap_or_default();
        match parse_choice::<M>(raw) {
            Ok(method) => outcome.method = Some(method),
            Err(_) => outcome.reject(ParseError::UnknownMethod {
                name: raw.to_string(),
                choices: M::names().join(", "),
            }),
        }
    }

    fn dispatch(&self, name: char, raw: Option<&str>, outcome: &mut ScanOutcome<M>) {
        let Some(option) = self.registry.option(name) else {
            outcome.reject(ParseError::UnknownOption(name));
            return;
        };
        if let Err(source) = option.parse(raw) {
            outcome.invalid.insert(name);
            outcome.reject(ParseError::InvalidValue {
                option: name,
                source,
            });
        }
    }
}

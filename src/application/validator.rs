//! Post-scan validation: a method was selected and its mandatory options are presented.

use std::collections::BTreeSet;

use tracing::debug;

use crate::application::error::{ParseError, ParseFailure};
use crate::application::registry::FinalizedRegistry;
use crate::domain::Choice;

pub struct Validator<'r, M: Choice> {
    registry: &'r FinalizedRegistry<M>,
}

impl<'r, M: Choice> Validator<'r, M> {
    pub fn new(registry: &'r FinalizedRegistry<M>) -> Self {
        Self { registry }
    }

    /// Validate the current option state for `selected`.
    pub fn validate(&self, selected: Option<M>) -> Result<M, ParseFailure> {
        let errors = self.check(selected, &BTreeSet::new());
        match selected {
            Some(method) if errors.is_empty() => Ok(method),
            _ => Err(ParseFailure::new(errors)),
        }
    }

    /// Every missing mandatory option is reported, not just the first.
    ///
    /// Options in `rejected` already failed to parse this pass and are not reported again.
    pub(crate) fn check(&self, selected: Option<M>, rejected: &BTreeSet<char>) -> Vec<ParseError> {
        let Some(method) = selected else {
            debug!("method is not presented");
            return vec![ParseError::MethodNotPresented];
        };

        self.registry
            .spec(method)
            .mandatory_options()
            .filter(|option| !option.presented() && !rejected.contains(&option.name()))
            .map(|option| {
                debug!(
                    method = method.name(),
                    option = %option.name(),
                    "mandatory option missing"
                );
                ParseError::MissingMandatory {
                    option: option.name(),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::registry::CliRegistry;
    use crate::domain::{CliOption, OptionCell};

    crate::choice! {
        enum Mode {
            Learn => "learn",
            Browse => "browse",
        }
    }

    #[test]
    fn test_no_method_fails() {
        let mut registry = CliRegistry::<Mode>::new();
        registry.method(Mode::Learn).describe("Learn");
        registry.method(Mode::Browse).describe("Browse");
        let registry = registry.finalize().unwrap();

        let failure = Validator::new(&registry).validate(None).unwrap_err();

        assert_eq!(failure.iter().collect::<Vec<_>>(), vec![&ParseError::MethodNotPresented]);
    }

    #[test]
    fn test_all_missing_mandatory_options_are_reported() {
        let rounds = CliOption::<u32>::value('r', "Rounds.").shared();
        let dict = CliOption::<String>::value('d', "Dictionary.").shared();
        let level = CliOption::<u8>::value('l', "Level.").with_default(1).shared();
        let mut registry = CliRegistry::<Mode>::new();
        registry
            .method(Mode::Learn)
            .describe("Learn")
            .mandatory(&[&rounds, &dict, &level]);
        registry.method(Mode::Browse).describe("Browse");
        let registry = registry.finalize().unwrap();

        let failure = Validator::new(&registry)
            .validate(Some(Mode::Learn))
            .unwrap_err();
        assert_eq!(failure.missing_options(), vec!['d', 'r']);

        rounds.parse(Some("2")).unwrap();
        dict.parse(Some("words.txt")).unwrap();
        assert_eq!(
            Validator::new(&registry).validate(Some(Mode::Learn)),
            Ok(Mode::Learn)
        );
        assert_eq!(
            Validator::new(&registry).validate(Some(Mode::Browse)),
            Ok(Mode::Browse)
        );
    }
}

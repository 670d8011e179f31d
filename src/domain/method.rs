//! Per-method option sets.

use std::collections::BTreeSet;

use tracing::debug;

use crate::domain::error::DeclarationError;
use crate::domain::option::{same_option, AsOptionRef, OptionRef};

/// One option of a method, tagged mandatory or optional.
#[derive(Debug, Clone)]
pub struct OptionEntry {
    pub option: OptionRef,
    pub mandatory: bool,
}

/// Declaration of one method: its description and the options it accepts.
///
/// Entries stay ordered by print priority, then name. Declaration mistakes are
/// recorded here and reported by `CliRegistry::finalize`.
#[derive(Debug)]
pub struct MethodSpec {
    name: &'static str,
    description: String,
    entries: Vec<OptionEntry>,
    names: BTreeSet<char>,
    problem: Option<DeclarationError>,
}

impl MethodSpec {
    pub(crate) fn new(name: &'static str) -> Self {
        Self {
            name,
            description: String::new(),
            entries: Vec::new(),
            names: BTreeSet::new(),
            problem: None,
        }
    }

    pub fn describe(&mut self, text: impl Into<String>) -> &mut Self {
        self.description = text.into();
        self
    }

    pub fn mandatory(&mut self, options: &[&dyn AsOptionRef]) -> &mut Self {
        for option in options {
            self.register(option.option_ref(), true);
        }
        self
    }

    pub fn optional(&mut self, options: &[&dyn AsOptionRef]) -> &mut Self {
        for option in options {
            self.register(option.option_ref(), false);
        }
        self
    }

    fn register(&mut self, option: OptionRef, mandatory: bool) {
        let name = option.name();
        if !self.names.insert(name) {
            let Some(existing) = self.entries.iter().find(|e| e.option.name() == name) else {
                return;
            };
            let problem = if !same_option(&existing.option, &option) {
                Some(DeclarationError::DuplicateName { option: name })
            } else if existing.mandatory != mandatory {
                Some(DeclarationError::ConflictingRequirement {
                    method: self.name.to_string(),
                    option: name,
                })
            } else {
                debug!(method = self.name, option = %name, "option declared twice");
                None
            };
            if self.problem.is_none() {
                self.problem = problem;
            }
            return;
        }

        self.entries.push(OptionEntry { option, mandatory });
        self.entries
            .sort_by_key(|entry| (entry.option.print_priority(), entry.option.name()));
    }

    /// Display name of the method this spec belongs to.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn entries(&self) -> &[OptionEntry] {
        &self.entries
    }

    pub fn mandatory_options(&self) -> impl Iterator<Item = &OptionRef> {
        self.entries
            .iter()
            .filter(|entry| entry.mandatory)
            .map(|entry| &entry.option)
    }

    pub fn optional_options(&self) -> impl Iterator<Item = &OptionRef> {
        self.entries
            .iter()
            .filter(|entry| !entry.mandatory)
            .map(|entry| &entry.option)
    }

    pub fn has_optional(&self) -> bool {
        self.entries.iter().any(|entry| !entry.mandatory)
    }

    /// Mandatory letters followed by optional letters in brackets, e.g. `dr[j]`.
    pub fn option_summary(&self) -> String {
        let mut summary: String = self.mandatory_options().map(|o| o.name()).collect();
        if self.has_optional() {
            summary.push('[');
            summary.extend(self.optional_options().map(|o| o.name()));
            summary.push(']');
        }
        summary
    }

    /// Characters the summary occupies in the usage table. Bracket space is reserved for any
    /// optional option, not only when mandatory and optional options are mixed.
    pub(crate) fn summary_width(&self) -> usize {
        self.entries.len() + if self.has_optional() { 2 } else { 0 }
    }

    pub(crate) fn problem(&self) -> Option<&DeclarationError> {
        self.problem.as_ref()
    }
}

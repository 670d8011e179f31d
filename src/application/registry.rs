//! The method registry: declare methods, finalize once, then parse and render.
//!
//! [`CliRegistry`] is the declaration state. [`CliRegistry::finalize`] checks the
//! declarations and yields a [`FinalizedRegistry`], the only type that can parse
//! arguments or print usage.

use std::collections::BTreeMap;
use std::fmt;
use std::io::{self, Write};

use tracing::{debug, instrument};

use crate::application::alphabet::OptionAlphabet;
use crate::application::error::{ParseError, ParseFailure};
use crate::application::parser::ArgParser;
use crate::application::usage::{ColumnWidths, UsageRenderer};
use crate::application::validator::Validator;
use crate::domain::option::same_option;
use crate::domain::{Choice, DeclarationError, MethodSpec, OptionKind, OptionRef};

/// Letter of the reserved method-selector option.
pub const METHOD_SELECTOR: char = 'm';

/// Extra application rule, run after the generic validation passed.
pub type RuleFn<M> = Box<dyn Fn(M) -> Result<(), String>>;

/// Method declarations, one [`MethodSpec`] per variant of `M`.
pub struct CliRegistry<M: Choice> {
    methods: Vec<MethodSpec>,
    rule: Option<RuleFn<M>>,
}

impl<M: Choice> Default for CliRegistry<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Choice> fmt::Debug for CliRegistry<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CliRegistry")
            .field("methods", &self.methods)
            .field("rule", &self.rule.is_some())
            .finish()
    }
}

impl<M: Choice> CliRegistry<M> {
    pub fn new() -> Self {
        Self {
            methods: M::VARIANTS
                .iter()
                .map(|(_, name)| MethodSpec::new(*name))
                .collect(),
            rule: None,
        }
    }

    /// Declaration access for one method.
    pub fn method(&mut self, method: M) -> &mut MethodSpec {
        &mut self.methods[method.index()]
    }

    /// Register an application rule checked after mandatory options are satisfied.
    pub fn validate_with(&mut self, rule: impl Fn(M) -> Result<(), String> + 'static) -> &mut Self {
        self.rule = Some(Box::new(rule));
        self
    }

    /// Check every declaration and build the option index, alphabet and column widths.
    pub fn finalize(self) -> Result<FinalizedRegistry<M>, DeclarationError> {
        if let Some(problem) = self.methods.iter().find_map(MethodSpec::problem) {
            return Err(problem.clone());
        }

        for spec in &self.methods {
            if spec.description().trim().is_empty() {
                return Err(DeclarationError::EmptyDescription {
                    method: spec.name().to_string(),
                });
            }
        }

        let mut index: BTreeMap<char, OptionRef> = BTreeMap::new();
        for entry in self.methods.iter().flat_map(MethodSpec::entries) {
            let name = entry.option.name();
            if name == METHOD_SELECTOR {
                return Err(DeclarationError::ReservedName { option: name });
            }
            if !name.is_ascii_alphanumeric() {
                return Err(DeclarationError::InvalidName { option: name });
            }
            match index.get(&name) {
                Some(known) if !same_option(known, &entry.option) => {
                    return Err(DeclarationError::DuplicateName { option: name });
                }
                Some(_) => {}
                None => {
                    index.insert(name, entry.option.clone());
                }
            }
        }

        let alphabet = OptionAlphabet::build(
            index
                .values()
                .map(|option| (option.name(), option.kind()))
                .chain([(METHOD_SELECTOR, OptionKind::Value)]),
        );
        let widths = ColumnWidths::compute(&self.methods);
        debug!(
            methods = self.methods.len(),
            options = index.len(),
            alphabet = alphabet.as_str(),
            "registry finalized"
        );

        Ok(FinalizedRegistry {
            methods: self.methods,
            rule: self.rule,
            index,
            alphabet,
            widths,
        })
    }
}

/// A checked registry: name-indexed options, option alphabet, precomputed widths.
pub struct FinalizedRegistry<M: Choice> {
    methods: Vec<MethodSpec>,
    rule: Option<RuleFn<M>>,
    index: BTreeMap<char, OptionRef>,
    alphabet: OptionAlphabet,
    widths: ColumnWidths,
}

impl<M: Choice> fmt::Debug for FinalizedRegistry<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FinalizedRegistry")
            .field("methods", &self.methods)
            .field("alphabet", &self.alphabet)
            .field("widths", &self.widths)
            .finish()
    }
}

/// Result of a successful parse.
#[derive(Debug)]
pub struct ParsedArgs<'r, M: Choice> {
    method: M,
    spec: &'r MethodSpec,
}

impl<'r, M: Choice> ParsedArgs<'r, M> {
    pub fn method(&self) -> M {
        self.method
    }

    pub fn spec(&self) -> &'r MethodSpec {
        self.spec
    }
}

impl<M: Choice> FinalizedRegistry<M> {
    pub fn spec(&self, method: M) -> &MethodSpec {
        &self.methods[method.index()]
    }

    /// Methods in declaration order.
    pub fn methods(&self) -> impl Iterator<Item = (M, &MethodSpec)> {
        M::all().into_iter().zip(self.methods.iter())
    }

    pub fn option(&self, name: char) -> Option<&OptionRef> {
        self.index.get(&name)
    }

    /// Every distinct option, ordered by name.
    pub fn options(&self) -> impl Iterator<Item = &OptionRef> {
        self.index.values()
    }

    pub fn alphabet(&self) -> &OptionAlphabet {
        &self.alphabet
    }

    pub fn widths(&self) -> ColumnWidths {
        self.widths
    }

    /// `-` followed by every option letter (completion aid).
    pub fn option_names(&self) -> String {
        std::iter::once('-').chain(self.index.keys().copied()).collect()
    }

    /// Scan `args` (program name first), validate, then apply the application rule.
    ///
    /// Every problem of the pass is collected; the scan never stops early.
    #[instrument(level = "debug", skip_all)]
    pub fn parse_args<I, S>(&self, args: I) -> Result<ParsedArgs<'_, M>, ParseFailure>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let scan = ArgParser::new(self).scan(args);
        let mut errors = scan.errors;
        errors.extend(Validator::new(self).check(scan.method, &scan.invalid));

        let method = match scan.method {
            Some(method) if errors.is_empty() => method,
            _ => return Err(ParseFailure::new(errors)),
        };

        if let Some(rule) = &self.rule {
            rule(method).map_err(|message| {
                debug!(%message, "application rule rejected arguments");
                ParseFailure::new(vec![ParseError::Rule(message)])
            })?;
        }

        debug!(method = method.name(), "arguments accepted");
        Ok(ParsedArgs {
            method,
            spec: self.spec(method),
        })
    }

    /// Usage text; `program` adds a leading `Usage:` line.
    pub fn render_usage(&self, program: Option<&str>) -> String {
        UsageRenderer::new(self, program).to_string()
    }

    pub fn print_usage<W: Write>(&self, out: &mut W, program: Option<&str>) -> io::Result<()> {
        write!(out, "{}", UsageRenderer::new(self, program))
    }

    /// Back to the declaration state, e.g. to add methods and finalize again.
    pub fn into_registry(self) -> CliRegistry<M> {
        CliRegistry {
            methods: self.methods,
            rule: self.rule,
        }
    }
}

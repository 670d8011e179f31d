//! Usage table: one row per method, then the flat list of option descriptions.

use std::fmt;

use itertools::Itertools;

use crate::application::registry::{FinalizedRegistry, METHOD_SELECTOR};
use crate::domain::{Choice, MethodSpec};

const HEADER_METHOD: &str = "Method";
const HEADER_DESCRIPTION: &str = "Description";
const HEADER_OPTIONS: &str = "Options";

/// Column widths in characters, computed once at finalize.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnWidths {
    pub method: usize,
    pub description: usize,
    pub options: usize,
}

impl ColumnWidths {
    pub fn compute<'a>(methods: impl IntoIterator<Item = &'a MethodSpec>) -> Self {
        let mut widths = Self {
            method: HEADER_METHOD.len(),
            description: HEADER_DESCRIPTION.len(),
            options: HEADER_OPTIONS.len(),
        };
        for spec in methods {
            widths.method = widths.method.max(spec.name().chars().count());
            widths.description = widths.description.max(spec.description().chars().count());
            widths.options = widths.options.max(spec.summary_width());
        }
        widths
    }

    /// Width of a border line: three `| x ` cells and the closing `|`.
    pub fn total(&self) -> usize {
        self.method + self.description + self.options + 10
    }
}

/// Renders the usage text of a finalized registry. Writing has no side effects beyond
/// the sink, so rendering twice gives identical output.
pub struct UsageRenderer<'r, M: Choice> {
    registry: &'r FinalizedRegistry<M>,
    program: Option<&'r str>,
}

impl<'r, M: Choice> UsageRenderer<'r, M> {
    pub fn new(registry: &'r FinalizedRegistry<M>, program: Option<&'r str>) -> Self {
        Self { registry, program }
    }

    fn border(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\t{}", "-".repeat(self.registry.widths().total()))
    }
}

impl<M: Choice> fmt::Display for UsageRenderer<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.registry.widths();

        if let Some(program) = self.program {
            writeln!(
                f,
                "Usage: {program} -{METHOD_SELECTOR} <method> [-<option> <value>]... [-<flag>]..."
            )?;
        }
        writeln!(
            f,
            "\t -{METHOD_SELECTOR} Method : [{}]",
            M::names().join(", ")
        )?;

        self.border(f)?;
        writeln!(
            f,
            "\t| {:<wm$} | {:<wd$} | {:<wo$} |",
            HEADER_METHOD,
            HEADER_DESCRIPTION,
            HEADER_OPTIONS,
            wm = widths.method,
            wd = widths.description,
            wo = widths.options,
        )?;
        self.border(f)?;

        for (method, spec) in self.registry.methods() {
            writeln!(
                f,
                "\t| {:<wm$} | {:<wd$} | {:<wo$} |",
                method.name(),
                spec.description(),
                spec.option_summary(),
                wm = widths.method,
                wd = widths.description,
                wo = widths.options,
            )?;
        }
        self.border(f)?;

        let options = self
            .registry
            .options()
            .sorted_by_key(|option| (option.print_priority(), option.name()))
            .collect_vec();
        if !options.is_empty() {
            writeln!(f, "\nOptions :")?;
            for option in options {
                writeln!(f, "\t {}", option.describe())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::registry::CliRegistry;
    use crate::domain::CliOption;

    crate::choice! {
        enum Mode {
            Learn => "learn",
            Quiz => "quiz",
        }
    }

    #[test]
    fn test_widths_reserve_brackets_for_optional_options() {
        let rounds = CliOption::<u32>::value('r', "Rounds.").shared();
        let a = CliOption::flag('a', "A.").shared();
        let b = CliOption::flag('b', "B.").shared();
        let c = CliOption::flag('c', "C.").shared();
        let d = CliOption::flag('d', "D.").shared();
        let e = CliOption::flag('e', "E.").shared();
        let mut registry = CliRegistry::<Mode>::new();
        registry
            .method(Mode::Learn)
            .describe("Learn the words of a very long list")
            .mandatory(&[&rounds])
            .optional(&[&a, &b, &c, &d, &e]);
        registry.method(Mode::Quiz).describe("Quiz");
        let registry = registry.finalize().unwrap();

        let widths = registry.widths();

        assert_eq!(widths.method, 6);
        assert_eq!(widths.description, 35);
        assert_eq!(widths.options, 8);
        assert_eq!(widths.total(), 59);
    }

    #[test]
    fn test_widths_count_characters_not_bytes() {
        let mut registry = CliRegistry::<Mode>::new();
        registry.method(Mode::Learn).describe("赤い -> あかい (kanji to kana)");
        registry.method(Mode::Quiz).describe("Quiz");
        let registry = registry.finalize().unwrap();

        assert_eq!(registry.widths().description, 25);
    }

    #[test]
    fn test_render_is_idempotent() {
        let rounds = CliOption::<u32>::value('r', "Rounds.").with_default(3).shared();
        let mut registry = CliRegistry::<Mode>::new();
        registry.method(Mode::Learn).describe("Learn").mandatory(&[&rounds]);
        registry.method(Mode::Quiz).describe("Quiz").optional(&[&rounds]);
        let registry = registry.finalize().unwrap();

        let first = registry.render_usage(Some("tango"));
        let second = registry.render_usage(Some("tango"));

        assert_eq!(first, second);
        assert!(first.starts_with("Usage: tango -m <method>"));
        assert!(first.ends_with("\t -r Rounds. [default='3']\n"));
    }
}

//! Command-line options: named, typed, self-parsing cells.
//!
//! The application owns its options (`Rc<CliOption<T>>`) and keeps reading typed values
//! from them after parsing. Method declarations hold type-erased [`OptionRef`]s to the
//! same cells, so identity is the allocation, not the name.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tracing::trace;

use crate::domain::error::ValueError;
use crate::domain::value::OptionValue;

/// Whether an option consumes the next argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    /// `-r 5`: converts the following token.
    Value,
    /// `-j`: presence only.
    Flag,
}

/// The type-erased face of an option, as seen by the registry and the parser.
pub trait OptionCell {
    fn name(&self) -> char;

    fn kind(&self) -> OptionKind;

    fn description(&self) -> &str;

    /// Lower prints first in usage output.
    fn print_priority(&self) -> i32;

    /// True when a default exists or the user supplied a valid value this pass.
    fn presented(&self) -> bool;

    /// Convert `raw` and store it as the user value.
    ///
    /// Value options need `Some`, flags need `None`. On error the stored value is untouched.
    fn parse(&self, raw: Option<&str>) -> Result<(), ValueError>;

    /// Forget the user value (start of a new parse pass).
    fn reset(&self);

    /// Default rendered with the same conversion used for parsing.
    fn default_text(&self) -> Option<String>;

    /// `-<name> <description>` plus ` [default='<value>']` when a default exists.
    fn describe(&self) -> String {
        let mut line = format!("-{} {}", self.name(), self.description());
        if let Some(default) = self.default_text() {
            line.push_str(&format!(" [default='{default}']"));
        }
        line
    }
}

impl fmt::Debug for dyn OptionCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionCell")
            .field("name", &self.name())
            .field("kind", &self.kind())
            .field("presented", &self.presented())
            .finish()
    }
}

/// Shared handle to an option cell.
pub type OptionRef = Rc<dyn OptionCell>;

/// Identity comparison: the same allocation, regardless of names.
pub fn same_option(a: &OptionRef, b: &OptionRef) -> bool {
    Rc::as_ptr(a).cast::<()>() == Rc::as_ptr(b).cast::<()>()
}

/// Anything that can hand out an [`OptionRef`]; lets method declarations take
/// options of different value types in one list.
pub trait AsOptionRef {
    fn option_ref(&self) -> OptionRef;
}

impl AsOptionRef for OptionRef {
    fn option_ref(&self) -> OptionRef {
        Rc::clone(self)
    }
}

impl<T: OptionValue + Clone + 'static> AsOptionRef for Rc<CliOption<T>> {
    fn option_ref(&self) -> OptionRef {
        Rc::clone(self) as OptionRef
    }
}

/// A typed option.
///
/// Holds the user value and the default side by side; the effective value is the user
/// value when one was supplied, the default otherwise.
#[derive(Debug)]
pub struct CliOption<T> {
    name: char,
    description: String,
    print_priority: i32,
    default: Option<T>,
    user: RefCell<Option<T>>,
    /// Value stored on presence; `Some` only for flags.
    presence: Option<T>,
}

impl<T: OptionValue + Clone + 'static> CliOption<T> {
    /// An option that consumes the next argument.
    pub fn value(name: char, description: impl Into<String>) -> Self {
        Self {
            name,
            description: description.into(),
            print_priority: 0,
            default: None,
            user: RefCell::new(None),
            presence: None,
        }
    }

    pub fn with_default(mut self, value: T) -> Self {
        self.default = Some(value);
        self
    }

    /// Replace the default after construction (e.g. from loaded settings).
    pub fn with_optional_default(mut self, value: Option<T>) -> Self {
        self.default = value;
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.print_priority = priority;
        self
    }

    /// Wrap for sharing between the application and method declarations.
    pub fn shared(self) -> Rc<Self> {
        Rc::new(self)
    }

    pub fn user_value(&self) -> Option<T> {
        self.user.borrow().clone()
    }

    pub fn default_value(&self) -> Option<&T> {
        self.default.as_ref()
    }

    pub fn effective_value(&self) -> Option<T> {
        self.user_value().or_else(|| self.default.clone())
    }
}

impl CliOption<bool> {
    /// A presence-only option.
    pub fn flag(name: char, description: impl Into<String>) -> Self {
        Self {
            presence: Some(true),
            ..Self::value(name, description)
        }
    }

    /// Effective value of a flag, `false` when absent.
    pub fn is_set(&self) -> bool {
        self.effective_value().unwrap_or(false)
    }
}

impl<T: OptionValue + Clone + 'static> OptionCell for CliOption<T> {
    fn name(&self) -> char {
        self.name
    }

    fn kind(&self) -> OptionKind {
        if self.presence.is_some() {
            OptionKind::Flag
        } else {
            OptionKind::Value
        }
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn print_priority(&self) -> i32 {
        self.print_priority
    }

    fn presented(&self) -> bool {
        self.default.is_some() || self.user.borrow().is_some()
    }

    fn parse(&self, raw: Option<&str>) -> Result<(), ValueError> {
        let value = match (&self.presence, raw) {
            (Some(on), None) => on.clone(),
            (Some(_), Some(raw)) => return Err(ValueError::UnexpectedArgument(raw.to_string())),
            (None, Some(raw)) => T::parse_value(raw)?,
            (None, None) => return Err(ValueError::MissingArgument),
        };
        trace!(option = %self.name, "value accepted");
        *self.user.borrow_mut() = Some(value);
        Ok(())
    }

    fn reset(&self) {
        self.user.borrow_mut().take();
    }

    fn default_text(&self) -> Option<String> {
        self.default.as_ref().map(OptionValue::render_value)
    }
}

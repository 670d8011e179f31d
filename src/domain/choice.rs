//! Closed sets of named variants (method identifiers, enumerated option values).
//!
//! A [`Choice`] carries a static table mapping each variant to its display name; the
//! position in the table is the variant's index. "Nothing selected" is `Option::None`
//! at the use site, never an extra variant.

use std::fmt::Debug;

use crate::domain::error::ValueError;

/// A closed set of variants with display names.
///
/// Implement it with the [`choice!`](crate::choice) macro rather than by hand.
pub trait Choice: Copy + Eq + Debug + 'static {
    /// Every variant with its display name, in declaration order.
    const VARIANTS: &'static [(Self, &'static str)];

    /// Display name (the text accepted on the command line).
    fn name(self) -> &'static str {
        Self::VARIANTS
            .iter()
            .find(|(variant, _)| *variant == self)
            .map(|(_, name)| *name)
            .unwrap_or_default()
    }

    /// Position in [`Choice::VARIANTS`].
    fn index(self) -> usize {
        Self::VARIANTS
            .iter()
            .position(|(variant, _)| *variant == self)
            .unwrap_or(Self::VARIANTS.len())
    }

    /// Exact, case-sensitive lookup by display name.
    fn from_name(name: &str) -> Option<Self> {
        Self::VARIANTS
            .iter()
            .find(|(_, candidate)| *candidate == name)
            .map(|(variant, _)| *variant)
    }

    /// Display names in declaration order.
    fn names() -> Vec<&'static str> {
        Self::VARIANTS.iter().map(|(_, name)| *name).collect()
    }

    /// All variants in declaration order.
    fn all() -> Vec<Self> {
        Self::VARIANTS.iter().map(|(variant, _)| *variant).collect()
    }
}

/// Parse a display name into a variant of `C`.
pub fn parse_choice<C: Choice>(raw: &str) -> Result<C, ValueError> {
    C::from_name(raw).ok_or_else(|| ValueError::UnknownChoice {
        raw: raw.to_string(),
        choices: C::names().join(", "),
    })
}

/// Declare a [`Choice`] enum.
///
/// Generates the enum (deriving `Debug, Clone, Copy, PartialEq, Eq, Hash`), its variant
/// table, `Display`, and an `OptionValue` impl so the type can back a `CliOption`.
///
/// ```
/// methodcli::choice! {
///     /// Drill modes.
///     pub enum Mode {
///         Learn => "learn",
///         Test => "test",
///     }
/// }
///
/// use methodcli::domain::Choice;
/// assert_eq!(Mode::from_name("test"), Some(Mode::Test));
/// assert_eq!(Mode::Learn.index(), 0);
/// ```
#[macro_export]
macro_rules! choice {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $text:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $crate::domain::choice::Choice for $name {
            const VARIANTS: &'static [(Self, &'static str)] = &[
                $( ($name::$variant, $text), )+
            ];
        }

        impl $crate::domain::value::OptionValue for $name {
            fn parse_value(
                raw: &str,
            ) -> ::std::result::Result<Self, $crate::domain::error::ValueError> {
                $crate::domain::choice::parse_choice(raw)
            }

            fn render_value(&self) -> ::std::string::String {
                ::std::string::ToString::to_string(
                    <Self as $crate::domain::choice::Choice>::name(*self),
                )
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(<Self as $crate::domain::choice::Choice>::name(*self))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value::OptionValue;

    crate::choice! {
        enum Colour {
            Red => "red",
            Green => "green",
            Blue => "blue",
        }
    }

    #[test]
    fn test_lookup_by_name_is_exact() {
        assert_eq!(Colour::from_name("green"), Some(Colour::Green));
        assert_eq!(Colour::from_name("Green"), None);
        assert_eq!(Colour::from_name("gree"), None);
    }

    #[test]
    fn test_index_follows_declaration_order() {
        assert_eq!(Colour::Red.index(), 0);
        assert_eq!(Colour::Blue.index(), 2);
        assert_eq!(Colour::all(), vec![Colour::Red, Colour::Green, Colour::Blue]);
    }

    #[test]
    fn test_unknown_name_lists_choices() {
        let err = Colour::parse_value("pink").unwrap_err();
        assert_eq!(
            err,
            ValueError::UnknownChoice {
                raw: "pink".to_string(),
                choices: "red, green, blue".to_string(),
            }
        );
    }

    #[test]
    fn test_display_and_render_use_name() {
        assert_eq!(Colour::Blue.to_string(), "blue");
        assert_eq!(Colour::Green.render_value(), "green");
    }
}
